/// HTTP status codes the server produces.
///
/// The success path is `Ok` (200). The error statuses exist so a failed
/// request is answered instead of silently dropped:
/// - `NotFound` (404): path unresolvable or file unopenable
/// - `MethodNotAllowed` (405): request method other than GET
/// - `UriTooLong` (414): request line never completed within the buffer cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 414 URI Too Long
    UriTooLong,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::UriTooLong => 414,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::UriTooLong => "URI Too Long",
        }
    }
}

const HTTP_VERSION: &str = "HTTP/1.1";

/// Renders the success head: status line, Content-Type, blank line.
///
/// No Content-Length and no other headers; the body is the raw file bytes
/// and the connection closes after them.
pub fn render_ok_head(mime: &str) -> Vec<u8> {
    format!("{HTTP_VERSION} 200 OK\r\nContent-Type: {mime}\r\n\r\n").into_bytes()
}

/// Renders a complete error response with a short plain-text body.
pub fn render_error(status: StatusCode) -> Vec<u8> {
    let body = format!("{} {}", status.as_u16(), status.reason_phrase());
    format!(
        "{HTTP_VERSION} {} {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{}",
        status.as_u16(),
        status.reason_phrase(),
        body.len(),
        body
    )
    .into_bytes()
}
