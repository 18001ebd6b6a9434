//! Relay server integration tests
//!
//! These drive a real TCP listener bound to an ephemeral loopback port,
//! with the OS renderer replaced by stubs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use toastd::application::ports::{RenderError, ToastRenderer};
use toastd::application::NotificationService;
use toastd::domain::{Level, NotificationRequest};
use toastd::server::{RelayClient, RelayServer};

/// Renderer stub that succeeds and counts calls
struct OkRenderer {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ToastRenderer for OkRenderer {
    async fn render(&self, _title: &str, _message: &str, _level: Level) -> Result<(), RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Renderer stub that always fails with a fixed cause
struct FailingRenderer;

#[async_trait]
impl ToastRenderer for FailingRenderer {
    async fn render(&self, _title: &str, _message: &str, _level: Level) -> Result<(), RenderError> {
        Err(RenderError::ShowFailed(
            "notification subsystem unavailable".to_string(),
        ))
    }
}

/// Renderer stub that takes a while, for drain tests
struct SlowRenderer;

#[async_trait]
impl ToastRenderer for SlowRenderer {
    async fn render(&self, _title: &str, _message: &str, _level: Level) -> Result<(), RenderError> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(())
    }
}

/// Bind an ephemeral port and run the server in the background
async fn start_server<R>(
    renderer: R,
    workers: usize,
) -> (String, mpsc::Sender<()>, JoinHandle<std::io::Result<()>>)
where
    R: ToastRenderer + 'static,
{
    let server = RelayServer::bind("127.0.0.1:0", workers)
        .await
        .expect("bind ephemeral port");
    let addr = server.local_addr().expect("local addr").to_string();

    let service = Arc::new(NotificationService::new(renderer));
    let (tx, rx) = mpsc::channel(1);
    let handle = tokio::spawn(server.run(service, rx));

    (addr, tx, handle)
}

/// Write one raw line to the relay and read the JSON answer
async fn call_raw(addr: &str, line: &str) -> serde_json::Value {
    let stream = TcpStream::connect(addr).await.expect("connect");
    let (reader, mut writer) = stream.into_split();

    writer.write_all(line.as_bytes()).await.expect("write");
    writer.write_all(b"\n").await.expect("write newline");
    writer.flush().await.expect("flush");

    let mut reader = BufReader::new(reader);
    let mut response = String::new();
    reader.read_line(&mut response).await.expect("read");
    serde_json::from_str(response.trim()).expect("valid JSON response")
}

#[tokio::test]
async fn valid_request_succeeds() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (addr, _shutdown, _handle) = start_server(
        OkRenderer {
            calls: Arc::clone(&calls),
        },
        10,
    )
    .await;

    let client = RelayClient::new(addr);
    let request = NotificationRequest::new("Test", "Hello", Level::Info);

    let response = client.send(&request).await.expect("call succeeds");
    assert!(response.is_success());
    assert_eq!(response.error_message(), "");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_title_is_rejected() {
    let (addr, _shutdown, _handle) = start_server(
        OkRenderer {
            calls: Arc::new(AtomicUsize::new(0)),
        },
        10,
    )
    .await;

    let client = RelayClient::new(addr);

    let response = client
        .send(&NotificationRequest::new("", "Hello", Level::Warning))
        .await
        .expect("call succeeds");
    assert!(!response.is_success());
    assert_eq!(response.error_message(), "title must not be empty");

    // Whitespace-only counts as empty, and title wins when both are empty
    let response = client
        .send(&NotificationRequest::new("   ", "", Level::Info))
        .await
        .expect("call succeeds");
    assert_eq!(response.error_message(), "title must not be empty");
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let (addr, _shutdown, _handle) = start_server(
        OkRenderer {
            calls: Arc::new(AtomicUsize::new(0)),
        },
        10,
    )
    .await;

    let client = RelayClient::new(addr);
    let response = client
        .send(&NotificationRequest::new("Test", " \t ", Level::Info))
        .await
        .expect("call succeeds");

    assert!(!response.is_success());
    assert_eq!(response.error_message(), "message must not be empty");
}

#[tokio::test]
async fn renderer_failure_is_reported_verbatim() {
    let (addr, _shutdown, _handle) = start_server(FailingRenderer, 10).await;

    let client = RelayClient::new(addr);
    let response = client
        .send(&NotificationRequest::new("Test", "Hello", Level::Error))
        .await
        .expect("call succeeds");

    assert!(!response.is_success());
    assert_eq!(
        response.error_message(),
        RenderError::ShowFailed("notification subsystem unavailable".to_string()).to_string()
    );
}

#[tokio::test]
async fn unknown_wire_level_renders_as_info() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (addr, _shutdown, _handle) = start_server(
        OkRenderer {
            calls: Arc::clone(&calls),
        },
        10,
    )
    .await;

    let answer = call_raw(
        &addr,
        r#"{"method":"SendNotification","title":"Test","message":"Hello","level":7}"#,
    )
    .await;

    assert_eq!(answer["success"], true);
    assert_eq!(answer["error_message"], "");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn malformed_request_gets_an_answer() {
    let (addr, _shutdown, _handle) = start_server(
        OkRenderer {
            calls: Arc::new(AtomicUsize::new(0)),
        },
        10,
    )
    .await;

    let answer = call_raw(&addr, "this is not json").await;
    assert_eq!(answer["success"], false);
    let error = answer["error_message"].as_str().expect("string error");
    assert!(!error.is_empty());
}

#[tokio::test]
async fn unsupported_method_gets_an_answer() {
    let (addr, _shutdown, _handle) = start_server(
        OkRenderer {
            calls: Arc::new(AtomicUsize::new(0)),
        },
        10,
    )
    .await;

    let answer = call_raw(&addr, r#"{"method":"Ping"}"#).await;
    assert_eq!(answer["success"], false);
    let error = answer["error_message"].as_str().expect("string error");
    assert!(error.contains("Ping"));
}

#[tokio::test]
async fn concurrent_calls_get_independent_responses() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (addr, _shutdown, _handle) = start_server(
        OkRenderer {
            calls: Arc::clone(&calls),
        },
        10,
    )
    .await;

    // Even requests are valid, odd ones carry an empty title
    let mut tasks = Vec::new();
    for i in 0..20 {
        let addr = addr.clone();
        tasks.push(tokio::spawn(async move {
            let title = if i % 2 == 0 { "Test" } else { "" };
            let request = NotificationRequest::new(title, format!("Hello {}", i), Level::Info);
            (i, RelayClient::new(addr).send(&request).await)
        }));
    }

    for task in tasks {
        let (i, result) = task.await.expect("task completes");
        let response = result.expect("call succeeds");
        if i % 2 == 0 {
            assert!(response.is_success(), "call {} should succeed", i);
        } else {
            assert_eq!(
                response.error_message(),
                "title must not be empty",
                "call {} should be rejected",
                i
            );
        }
    }

    assert_eq!(calls.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn shutdown_drains_in_flight_calls() {
    let (addr, shutdown, handle) = start_server(SlowRenderer, 2).await;

    // Start a call that will still be rendering when shutdown fires
    let client_addr = addr.clone();
    let in_flight = tokio::spawn(async move {
        RelayClient::new(client_addr)
            .send(&NotificationRequest::new("Test", "Hello", Level::Info))
            .await
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown.send(()).await.expect("shutdown delivered");

    // The in-flight call completes with a real response
    let response = in_flight
        .await
        .expect("client task completes")
        .expect("call succeeds");
    assert!(response.is_success());

    // And the server itself winds down cleanly
    let run_result = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("server stops promptly")
        .expect("server task completes");
    assert!(run_result.is_ok());

    // New connections are no longer accepted
    let refused = RelayClient::new(addr)
        .send(&NotificationRequest::new("Late", "Hello", Level::Info))
        .await;
    assert!(refused.is_err());
}
