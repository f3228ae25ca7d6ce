#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let app = ui::build_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    println!("UI listening on {}", listener.local_addr().unwrap());
    log::info!("Serving assistant page; relay expected at http://localhost:5000");
    axum::serve(listener, app).await.unwrap();
}
