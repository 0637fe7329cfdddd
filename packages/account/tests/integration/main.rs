mod http_client_tests;
mod submit_flow_tests;

use account::{AccountConfig, AppMode, HttpAccountService};
use std::net::TcpListener;
use std::time::Duration;
use wiremock::MockServer;

pub fn service_for(server: &MockServer) -> HttpAccountService {
    service_at(server.uri())
}

/// A service pointed at a local port nothing listens on.
pub fn unreachable_service() -> HttpAccountService {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .expect("free port")
        .port();
    service_at(format!("http://127.0.0.1:{port}"))
}

fn service_at(base_url: String) -> HttpAccountService {
    let config = AccountConfig::new(AppMode::Local, base_url).expect("valid base url");
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("http client");
    HttpAccountService::with_client(client, config)
}
