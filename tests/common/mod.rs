//! Shared harness: serves the real router on an ephemeral port.

use tokio::net::TcpListener;

use user_registry::api::{create_router, AppState};
use user_registry::config::Config;

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Start a server with a fresh, empty store.
pub async fn spawn_app() -> TestApp {
    let app = create_router(AppState::in_memory(), &Config::default());
    let listener = TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    TestApp {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
    }
}
