pub const RELAY_PORT: u16 = 5000;
pub const DOWNSTREAM_URL: &str = "http://localhost:5001/ask";

/// Addresses are fixed constants; the struct exists so tests can point the
/// relay at a stub downstream without touching global state.
pub struct RelayConfig {
    pub port: u16,
    pub downstream_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: RELAY_PORT,
            downstream_url: DOWNSTREAM_URL.to_string(),
        }
    }
}
