use crate::http::headers::Headers;
use crate::http::request::{Method, Request};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no complete request line in buffer")]
    MissingRequestLine,
    #[error("malformed request line: {0:?}")]
    InvalidRequestLine(String),
}

/// Parses one request out of `buf`.
///
/// The buffer is whatever a single read produced. Nothing is inferred from
/// `Content-Length`: every byte after the blank line is the body. Header
/// lines without a colon are logged and skipped. Bytes that are not UTF-8
/// in the request line or headers decode to U+FFFD.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let mut lines = Lines { rest: buf };

    // Request line
    let request_line = lines.next_line().ok_or(ParseError::MissingRequestLine)?;
    let request_line = String::from_utf8_lossy(request_line);
    let request_line = request_line.trim();

    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method, target, version] = parts[..] else {
        return Err(ParseError::InvalidRequestLine(request_line.to_string()));
    };

    // Headers
    let mut headers = Headers::new();

    loop {
        let Some(raw) = lines.next_line() else {
            // Input ended inside the header section; a partial line is not body.
            lines.rest = &[];
            break;
        };
        // Invalid UTF-8 is replaced, not rejected
        let line = String::from_utf8_lossy(raw);
        let line = line.trim();

        if line.is_empty() {
            break;
        }

        match line.split_once(':') {
            Some((key, value)) => {
                headers.insert(key.trim(), value.trim());
            }
            None => {
                tracing::warn!(line = %line, "Skipping malformed header line");
            }
        }
    }

    Ok(Request {
        method: Method::from_token(method),
        target: target.to_string(),
        version: version.to_string(),
        headers,
        body: lines.rest.to_vec(),
    })
}

/// Splits off `\n`-terminated lines. A trailing fragment without a
/// terminator is not a line and stays in `rest`.
struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Lines<'a> {
    fn next_line(&mut self) -> Option<&'a [u8]> {
        let end = self.rest.iter().position(|&b| b == b'\n')?;
        let line = &self.rest[..end];
        self.rest = &self.rest[end + 1..];
        Some(line)
    }
}
