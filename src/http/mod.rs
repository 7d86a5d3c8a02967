//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 side of the server: parsing, response
//! serialization, content-coding and the per-connection loop.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection read/dispatch/write state machine
//! - **`parser`**: Parses a request out of one read's worth of bytes
//! - **`request`**: HTTP request representation
//! - **`headers`**: Ordered, case-insensitive header map
//! - **`response`**: HTTP response representation with builder pattern
//! - **`encoding`**: `Accept-Encoding` negotiation and gzip bodies
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read, then parse
//!        └──────┬──────┘
//!               │ Request parsed          (peer closed / parse error → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route, then negotiate content-coding
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Reading (same connection)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tern::http::connection::{Connection, DEFAULT_READ_BUFFER_SIZE};
//! use tern::routing::{Router, ServedDir};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let router = Arc::new(Router::new(ServedDir::new("/tmp"))?);
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let router = router.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, router, DEFAULT_READ_BUFFER_SIZE);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod encoding;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
