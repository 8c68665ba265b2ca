use staticd::http::parser::{ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.path, "/index.html");
}

#[test]
fn test_parse_root_path() {
    let req = b"GET / HTTP/1.1\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.path, "/");
}

#[test]
fn test_parse_path_with_query_string_kept_verbatim() {
    let req = b"GET /search?q=rust HTTP/1.1\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.path, "/search?q=rust");
}

#[test]
fn test_parse_incomplete_prefix() {
    // A prefix of "GET " could still become a valid request.
    assert_eq!(parse_request_line(b""), Err(ParseError::Incomplete));
    assert_eq!(parse_request_line(b"G"), Err(ParseError::Incomplete));
    assert_eq!(parse_request_line(b"GE"), Err(ParseError::Incomplete));
    assert_eq!(parse_request_line(b"GET"), Err(ParseError::Incomplete));
}

#[test]
fn test_parse_incomplete_without_carriage_return() {
    // Both spaces have arrived but the line itself has not ended.
    let req = b"GET /index.html HTTP/1.1";
    assert_eq!(parse_request_line(req), Err(ParseError::Incomplete));
}

#[test]
fn test_parse_incomplete_without_second_space() {
    // The carriage return arrived mid-path; keep reading.
    let req = b"GET /inde\r";
    assert_eq!(parse_request_line(req), Err(ParseError::Incomplete));
}

#[test]
fn test_parse_request_split_across_segments() {
    // Simulates a request delivered in multiple TCP segments by parsing
    // each successively longer prefix.
    let full = b"GET /index.html HTTP/1.1\r\n";
    let mut buffer = Vec::new();

    for chunk in [&full[..2], &full[2..12], &full[12..]] {
        buffer.extend_from_slice(chunk);
        match parse_request_line(&buffer) {
            Ok(line) => {
                assert_eq!(buffer.len(), full.len());
                assert_eq!(line.path, "/index.html");
                return;
            }
            Err(ParseError::Incomplete) => {}
            Err(e) => panic!("unexpected parse error: {:?}", e),
        }
    }

    panic!("request was never recognized");
}

#[test]
fn test_parse_rejects_other_methods() {
    assert_eq!(
        parse_request_line(b"POST /api HTTP/1.1\r\n"),
        Err(ParseError::Method)
    );
    assert_eq!(
        parse_request_line(b"PUT / HTTP/1.1\r\n"),
        Err(ParseError::Method)
    );
    // Methods are case-sensitive.
    assert_eq!(
        parse_request_line(b"get / HTTP/1.1\r\n"),
        Err(ParseError::Method)
    );
}

#[test]
fn test_parse_rejects_wrong_prefix_early() {
    // "PO" can never become "GET "; no point reading further.
    assert_eq!(parse_request_line(b"PO"), Err(ParseError::Method));
}

#[test]
fn test_parse_rejects_non_utf8_path() {
    let req = b"GET /\xff\xfe HTTP/1.1\r\n";
    assert_eq!(parse_request_line(req), Err(ParseError::Path));
}
