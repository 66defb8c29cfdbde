//! Canned local backend for command tests.

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use fq_client::FactsClient;
use fq_config::ApiConfig;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub body: String,
}

/// `tiny_http` server answering a fixed script of `(status, body)` responses.
pub struct MockBackend {
    pub base_url: String,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

impl MockBackend {
    pub fn start(script: Vec<(u16, &'static str)>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
        let port = server.server_addr().to_ip().expect("ip addr").port();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        thread::spawn(move || {
            for (status, body) in script {
                let Ok(mut request) = server.recv() else {
                    return;
                };
                let mut received = String::new();
                let _ = request.as_reader().read_to_string(&mut received);
                sink.lock().expect("lock").push(Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    body: received,
                });
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json")
                            .expect("header"),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            seen,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().expect("lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.seen.lock().expect("lock").len()
    }
}

pub fn client_for(backend: &MockBackend) -> FactsClient {
    FactsClient::new(&ApiConfig {
        base_url: backend.base_url.clone(),
        timeout_secs: 5,
        ..Default::default()
    })
    .expect("client builds")
}
