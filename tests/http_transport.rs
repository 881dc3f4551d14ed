//! `HttpTransport` against an in-process HTTP listener.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use orthodromy_client::{OrthodromyClient, OrthodromyConfig, OrthodromyError, SamplingRequest};

/// Serves exactly one canned response and returns the request line it saw.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let request = read_request_head(&mut stream);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush response");
        request.lines().next().unwrap_or_default().to_string()
    });

    (base_url, handle)
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).expect("read request");
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&head).into_owned()
}

fn client_for(base_url: String) -> OrthodromyClient {
    let config = OrthodromyConfig {
        base_url,
        timeout_secs: 5,
    };
    OrthodromyClient::http(config).expect("build HTTP client")
}

#[test]
fn http_success_decodes_body() {
    let (base_url, server) = serve_once("200 OK", "LINESTRING(0 0,5.5 10.25,10 20)");
    let client = client_for(base_url);

    let path = client
        .request_points(&SamplingRequest::new((0.0, 0.0), (10.0, 20.0)))
        .expect("request succeeds");

    let request_line = server.join().expect("server thread");
    assert_eq!(
        request_line,
        "GET /api/orthodromy?cs=EPSG:4326&&count=10&point1=POINT(0%200)&point2=POINT(10%2020) HTTP/1.1"
    );
    assert_eq!(path.len(), 3);
    assert_eq!(path.points()[1].x, 5.5);
    assert_eq!(path.points()[1].y, 10.25);
}

#[test]
fn http_not_found_carries_reason() {
    let (base_url, server) = serve_once("404 Not Found", "LINESTRING(1 1,2 2)");
    let client = client_for(base_url);

    let err = client
        .request_points(&SamplingRequest::new((0.0, 0.0), (1.0, 1.0)))
        .unwrap_err();
    server.join().expect("server thread");

    assert_eq!(err.to_string(), "Not Found");
    assert!(matches!(err, OrthodromyError::Status { status: 404, .. }));
}

#[test]
fn http_failure_keeps_server_reason_phrase() {
    let (base_url, server) = serve_once("400 BAD REQUEST", "");
    let client = client_for(base_url);

    let err = client
        .request_points(&SamplingRequest::new((0.0, 0.0), (1.0, 1.0)).with_crs("EPSG:1"))
        .unwrap_err();
    server.join().expect("server thread");

    assert_eq!(err.to_string(), "BAD REQUEST");
    assert!(matches!(err, OrthodromyError::Status { status: 400, .. }));
}

#[test]
fn http_non_standard_status_keeps_reason_phrase() {
    let (base_url, server) = serve_once("499 Client Closed Request", "");
    let client = client_for(base_url);

    let err = client
        .request_points(&SamplingRequest::new((0.0, 0.0), (1.0, 1.0)))
        .unwrap_err();
    server.join().expect("server thread");

    assert_eq!(err.to_string(), "Client Closed Request");
    assert!(matches!(err, OrthodromyError::Status { status: 499, .. }));
}

#[test]
fn http_empty_body_is_empty_path() {
    let (base_url, server) = serve_once("200 OK", "");
    let client = client_for(base_url);

    let path = client
        .request_points(&SamplingRequest::new((0.0, 0.0), (1.0, 1.0)))
        .expect("request succeeds");
    server.join().expect("server thread");

    assert!(path.is_empty());
}

#[test]
fn http_unreachable_service_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
    drop(listener);

    let client = client_for(base_url);
    let err = client
        .request_points(&SamplingRequest::new((0.0, 0.0), (1.0, 1.0)))
        .unwrap_err();

    assert!(matches!(err, OrthodromyError::Http(_)));
}
