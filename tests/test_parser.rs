use tern::http::parser::{ParseError, parse_request};
use tern::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.target, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /files/a.txt HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.target, "/files/a.txt");
    assert_eq!(parsed.body, b"hello".to_vec());
}

#[test]
fn test_body_is_taken_verbatim_regardless_of_content_length() {
    let req = b"POST /x HTTP/1.1\r\nContent-Length: 2\r\n\r\nhello\r\nworld";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.body, b"hello\r\nworld".to_vec());
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("User-Agent"), Some("test-client"));
    assert_eq!(parsed.header("Accept"), Some("*/*"));
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /search?q=rust HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.target, "/search?q=rust");
}

#[test]
fn test_headers_without_blank_line_still_parse() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert!(parsed.body.is_empty());
}

#[test]
fn test_two_token_request_line_fails() {
    let result = parse_request(b"GET /\r\nHost: x\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
}

#[test]
fn test_four_token_request_line_fails() {
    let result = parse_request(b"GET / HTTP/1.1 extra\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
}

#[test]
fn test_double_space_in_request_line_fails() {
    let result = parse_request(b"GET  / HTTP/1.1\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
}

#[test]
fn test_missing_line_terminator_fails() {
    assert_eq!(parse_request(b"GET / HTTP/1.1").unwrap_err(), ParseError::MissingRequestLine);
    assert_eq!(parse_request(b"").unwrap_err(), ParseError::MissingRequestLine);
}

#[test]
fn test_non_utf8_request_line_is_decoded_lossily() {
    let parsed = parse_request(b"GET /echo/\xff HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.target, "/echo/\u{fffd}");
}

#[test]
fn test_non_utf8_header_value_is_kept() {
    let req = b"GET /user-agent HTTP/1.1\r\nUser-Agent: caf\xe9\r\nHost: x\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 2);
    assert_eq!(parsed.header("User-Agent"), Some("caf\u{fffd}"));
    assert_eq!(parsed.header("Host"), Some("x"));
}

#[test]
fn test_malformed_header_is_skipped() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert!(!parsed.headers.contains("BrokenHeader"));
    assert_eq!(parsed.header("Host"), Some("example.com"));
}

#[test]
fn test_header_value_keeps_inner_colons() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some("localhost:4221"));
}

#[test]
fn test_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Id: 1\r\nx-id: 2\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("X-Id"), Some("2"));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
        ("BREW", Method::Extension("BREW".to_string())),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let parsed = parse_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_parse_request_with_binary_body() {
    let req = b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.body, vec![0, 1, 2, 3]);
}

#[test]
fn test_header_lookup_is_case_insensitive() {
    let req = b"GET / HTTP/1.1\r\nuser-agent: foo/1.0\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.header("User-Agent"), Some("foo/1.0"));
    // Stored name keeps the casing the client sent
    assert_eq!(parsed.headers.iter().next(), Some(("user-agent", "foo/1.0")));
}
