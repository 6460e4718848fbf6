//! Integration tests for the HTTP adapter
//!
//! Each test starts a server on a free local port, sends raw HTTP/1.1 over a
//! `TcpStream`, and checks the status line, headers and body that come back.

mod common;

use common::http::{parse_response, send_request};
use common::test_server::start_service;

const ORIGINS: &str = "https://ok.example https://other.example";

#[test]
fn test_login_over_http() {
    let handle = start_service(ORIGINS);
    let resp = send_request(
        &handle.addr(),
        "POST /login HTTP/1.1\r\nHost: x\r\nOrigin: https://ok.example\r\nContent-Length: 0\r\n\r\n",
    );
    handle.stop();

    let resp = parse_response(&resp);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("Set-Cookie"), Some("user=Bob"));
    assert_eq!(
        resp.header("Access-Control-Allow-Origin"),
        Some("https://ok.example")
    );
    assert_eq!(resp.header("Access-Control-Allow-Credentials"), Some("true"));
    assert_eq!(resp.header("Vary"), Some("Origin"));
}

#[test]
fn test_logout_over_http() {
    let handle = start_service(ORIGINS);
    let resp = send_request(&handle.addr(), "GET /logout HTTP/1.1\r\nHost: x\r\n\r\n");
    handle.stop();

    let resp = parse_response(&resp);
    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.header("Set-Cookie"),
        Some("user=anonymous; expires=Thu, 01 Jan 1970 00:00:00 GMT")
    );
    assert!(resp.header("Access-Control-Allow-Origin").is_none());
}

#[test]
fn test_status_with_cookie_over_http() {
    let handle = start_service(ORIGINS);
    let resp = send_request(
        &handle.addr(),
        "GET /?ignored=1 HTTP/1.1\r\nHost: x\r\nCookie: user=Alice\r\norigin: https://other.example\r\n\r\n",
    );
    handle.stop();

    let resp = parse_response(&resp);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, "Logged in as Alice");
    assert_eq!(
        resp.header("Access-Control-Allow-Origin"),
        Some("https://other.example")
    );
    assert!(resp
        .header("Content-Type")
        .is_some_and(|ct| ct.starts_with("text/plain")));
}

#[test]
fn test_status_for_evil_origin_over_http() {
    let handle = start_service(ORIGINS);
    let resp = send_request(
        &handle.addr(),
        "GET /whoami HTTP/1.1\r\nHost: x\r\nOrigin: https://evil.example\r\n\r\n",
    );
    handle.stop();

    let resp = parse_response(&resp);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, "Logged out");
    assert!(resp.header("Access-Control-Allow-Origin").is_none());
    assert!(resp.header("Vary").is_none());
}
