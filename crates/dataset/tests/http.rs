use std::time::Duration;

use logview_dataset::{LoadError, Loader, ResourceResolver, RetrievalError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use url::Url;

/// Serve exactly one HTTP response and hand back the raw request text.
async fn serve_once(status: &'static str, body: &'static str) -> (Url, oneshot::Receiver<String>) {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
	let addr = listener.local_addr().expect("addr");
	let (request_tx, request_rx) = oneshot::channel();

	tokio::spawn(async move {
		let (mut socket, _) = listener.accept().await.expect("accept");
		let mut buffer = vec![0u8; 4096];
		let read = socket.read(&mut buffer).await.expect("read");
		let _ = request_tx.send(String::from_utf8_lossy(&buffer[..read]).into_owned());

		let response = format!(
			"HTTP/1.1 {status}\r\ncontent-type: text/html\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
			body.len()
		);
		socket.write_all(response.as_bytes()).await.expect("write");
		socket.shutdown().await.ok();
	});

	let base = Url::parse(&format!("http://{addr}/")).expect("url");
	(base, request_rx)
}

fn loader(base: Url) -> Loader {
	Loader::new(ResourceResolver::http(base).expect("resolver"))
}

#[tokio::test]
async fn fetches_the_refresh_endpoint() {
	let (base, request) = serve_once("200 OK", r#"[{"id":1,"msg":"a"},{"id":2,"msg":"b"}]"#).await;

	let dataset = loader(base)
		.fetch_dataset("refresh")
		.await
		.expect("load")
		.expect("dataset");

	assert_eq!(dataset.len(), 2);
	assert_eq!(dataset.records()[1]["msg"], "b");

	let request = request.await.expect("request").to_ascii_lowercase();
	assert!(request.starts_with("get /refresh http/1.1"));
	assert!(request.contains("cache-control: no-cache"));
}

#[tokio::test]
async fn body_is_parsed_regardless_of_content_type() {
	let (base, _request) = serve_once("200 OK", "[]").await;
	let dataset = loader(base)
		.fetch_dataset("refresh")
		.await
		.expect("load")
		.expect("dataset");
	assert!(dataset.is_empty());
}

#[tokio::test]
async fn non_success_status_is_a_retrieval_error() {
	let (base, _request) = serve_once("500 Internal Server Error", "oops").await;
	let err = loader(base).fetch_dataset("refresh").await.unwrap_err();

	match err {
		LoadError::Retrieval {
			source: RetrievalError::Status { status },
			..
		} => assert_eq!(status.as_u16(), 500),
		other => panic!("unexpected error: {other:?}"),
	}
}

#[tokio::test]
async fn html_body_is_a_parse_error() {
	let (base, _request) = serve_once("200 OK", "<html>not json</html>").await;
	let err = loader(base).fetch_dataset("refresh").await.unwrap_err();
	assert!(err.is_parse());
}

#[tokio::test]
async fn unreachable_host_is_a_retrieval_error() {
	// Bind and drop to get a port nothing listens on.
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
	let addr = listener.local_addr().expect("addr");
	drop(listener);

	let base = Url::parse(&format!("http://{addr}/")).expect("url");
	let err = loader(base).fetch_dataset("refresh").await.unwrap_err();
	assert!(err.is_retrieval());
}

#[tokio::test]
async fn stalled_source_times_out_when_configured() {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
	let addr = listener.local_addr().expect("addr");
	tokio::spawn(async move {
		let (_socket, _) = listener.accept().await.expect("accept");
		tokio::time::sleep(Duration::from_secs(5)).await;
	});

	let base = Url::parse(&format!("http://{addr}/")).expect("url");
	let loader = loader(base).with_timeout(Some(Duration::from_millis(100)));
	let err = loader.fetch_dataset("refresh").await.unwrap_err();

	assert!(matches!(
		err,
		LoadError::Retrieval {
			source: RetrievalError::Timeout(_),
			..
		}
	));
}
