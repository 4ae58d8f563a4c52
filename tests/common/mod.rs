#![allow(dead_code)]

use anyhow::{Context, Result};

use campus_api::auth;
use campus_api::config::AppConfig;
use campus_api::state::AppContext;

/// Secret shared between the spawned app and the token helpers below.
pub const TEST_SECRET: &str = "campus-test-secret";

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Spawn the real router in-process on an unused port, backed by a fresh
/// database file, so every test runs against its own isolated server.
pub async fn spawn_app() -> Result<TestApp> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;

    let db_path = std::env::temp_dir().join(format!("campus-api-test-{}.db", port));
    let _ = std::fs::remove_file(&db_path);

    let mut config = AppConfig::development();
    config.database.url = format!("sqlite:{}", db_path.display());
    config.security.jwt_secret = TEST_SECRET.to_string();

    let ctx = AppContext::init(config).await.context("failed to init app context")?;
    let router = campus_api::app(ctx);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server");
    });

    Ok(TestApp {
        base_url: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    })
}

pub fn token_with(permissions: &[&str]) -> String {
    auth::issue_token(
        "test-user",
        permissions.iter().map(|p| p.to_string()).collect(),
        TEST_SECRET,
        1,
    )
    .expect("token")
}

/// Token whose expiry is already past the verification leeway.
pub fn expired_token(permissions: &[&str]) -> String {
    auth::issue_token(
        "test-user",
        permissions.iter().map(|p| p.to_string()).collect(),
        TEST_SECRET,
        -2,
    )
    .expect("token")
}
