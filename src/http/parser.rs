use std::str;

/// A recognized HTTP request line.
///
/// Only the method and path are consulted; headers and any body are never
/// read separately and may remain unread in the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The request path as it appeared on the wire (e.g. "/index.html").
    pub path: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not enough bytes yet; read more and retry.
    Incomplete,
    /// The request does not start with `GET `.
    Method,
    /// The path token is not valid UTF-8.
    Path,
}

/// Tries to recognize a request line in the bytes accumulated so far.
///
/// A request is recognized once the buffer starts with `GET ` and a carriage
/// return has arrived; the path is the token between the space at offset 4
/// and the next space. A request split across TCP segments surfaces as
/// `Incomplete` until enough bytes have accumulated, so callers loop
/// read-then-parse. The rest of the HTTP grammar is not validated.
pub fn parse_request_line(buf: &[u8]) -> Result<RequestLine, ParseError> {
    const PREFIX: &[u8] = b"GET ";

    if buf.len() < PREFIX.len() {
        if !PREFIX.starts_with(buf) {
            return Err(ParseError::Method);
        }
        return Err(ParseError::Incomplete);
    }
    if !buf.starts_with(PREFIX) {
        return Err(ParseError::Method);
    }
    if !buf.contains(&b'\r') {
        return Err(ParseError::Incomplete);
    }

    let rest = &buf[PREFIX.len()..];
    let end = match rest.iter().position(|&b| b == b' ') {
        Some(end) => end,
        // The terminating space has not arrived; the line is incomplete.
        None => return Err(ParseError::Incomplete),
    };

    let path = str::from_utf8(&rest[..end])
        .map_err(|_| ParseError::Path)?
        .to_string();

    Ok(RequestLine { path })
}
