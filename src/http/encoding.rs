//! Response body content-coding.
//!
//! Only gzip is offered. When a client lists it in `Accept-Encoding` the body
//! is compressed at the fastest level. If compression fails the response goes
//! out uncompressed and without `Content-Encoding`.

use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::http::request::Request;
use crate::http::response::Response;

pub const GZIP: &str = "gzip";

/// Returns true if the request's `Accept-Encoding` lists gzip.
///
/// Tokens are comma separated; parameters such as `;q=` are not interpreted,
/// so `gzip;q=0` is not a match.
pub fn accepts_gzip(req: &Request) -> bool {
    req.header("Accept-Encoding")
        .map(|v| v.split(',').any(|token| token.trim().eq_ignore_ascii_case(GZIP)))
        .unwrap_or(false)
}

/// Compresses `input` into a complete gzip member.
pub fn gzip(input: &[u8]) -> io::Result<Vec<u8>> {
    let buf = Vec::with_capacity(input.len() / 2 + 32);
    let mut encoder = GzEncoder::new(buf, Compression::fast());
    encoder.write_all(input)?;
    encoder.finish()
}

/// Negotiates and applies the response content-coding.
pub fn apply_content_encoding(req: &Request, resp: &mut Response) {
    apply_with(req, resp, gzip)
}

/// Same as [`apply_content_encoding`] with a caller supplied compressor.
pub fn apply_with<F>(req: &Request, resp: &mut Response, compress: F)
where
    F: FnOnce(&[u8]) -> io::Result<Vec<u8>>,
{
    if !accepts_gzip(req) {
        resp.headers.remove("Content-Encoding");
        return;
    }

    // Empty bodies are labelled but left as zero bytes.
    if resp.body.is_empty() {
        resp.headers.insert("Content-Encoding", GZIP);
        return;
    }

    match compress(&resp.body) {
        Ok(compressed) => {
            tracing::debug!(
                original = resp.body.len(),
                compressed = compressed.len(),
                "Compressed response body"
            );
            resp.headers.insert("Content-Encoding", GZIP);
            resp.headers.insert("Content-Length", compressed.len().to_string());
            resp.body = compressed;
        }
        Err(e) => {
            tracing::warn!(error = %e, "gzip failed, sending body uncompressed");
            resp.headers.remove("Content-Encoding");
            if resp.headers.contains("Content-Length") {
                resp.headers.insert("Content-Length", resp.body.len().to_string());
            }
        }
    }
}
