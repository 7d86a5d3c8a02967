//! Tern - minimal HTTP/1.1 server
//!
//! Request parsing, path routing, gzip content-coding and the keep-alive
//! connection loop that ties them together.

pub mod config;
pub mod http;
pub mod routing;
pub mod server;
