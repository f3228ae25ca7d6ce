use reqwest::Client;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url = "http://127.0.0.1:5000";

    println!("🔍 Testing Relay Client");

    // Liveness check
    println!("\n📋 Liveness Check:");
    let status_response = client.get(format!("{}/", base_url)).send().await?;
    println!("Status: {}", status_response.status());
    println!("Response: {}", status_response.text().await?);

    // Ask a question
    println!("\n🔍 Ask Test:");
    let payload = json!({
        "question": "What is the return policy?"
    });

    let ask_response = client
        .post(format!("{}/ask", base_url))
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;

    println!("Status: {}", ask_response.status());
    let ask_json: serde_json::Value = ask_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&ask_json)?);

    println!("\n✅ Client test completed!");
    Ok(())
}
