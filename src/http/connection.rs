use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::encoding::apply_content_encoding;
use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::routing::Router;

pub const DEFAULT_READ_BUFFER_SIZE: usize = 65536;

/// One accepted connection, serviced request by request until the peer
/// goes away or sends something unparseable.
pub struct Connection<S> {
    stream: S,
    router: Arc<Router>,
    buffer: BytesMut,
    read_buffer_size: usize,
    served: u64,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, read_buffer_size: usize) -> Self {
        Self {
            stream,
            router,
            buffer: BytesMut::with_capacity(read_buffer_size),
            read_buffer_size: read_buffer_size.max(1),
            served: 0,
            state: ConnectionState::Reading,
        }
    }

    /// Number of responses fully written so far.
    pub fn served(&self) -> u64 {
        self.served
    }

    /// Drives the connection to completion.
    ///
    /// Returns `Ok` on orderly close or a malformed request, `Err` on I/O
    /// failure. Either way the connection is finished afterwards.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Processing(req),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    let mut response = self.router.dispatch(&req).await;
                    apply_content_encoding(&req, &mut response);

                    tracing::debug!(
                        method = %req.method,
                        target = %req.target,
                        status = response.status.as_u16(),
                        "Request handled"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.served += 1;
                    self.state = ConnectionState::Reading;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads one request with a single read call.
    ///
    /// A request that does not arrive within one read is parsed from what
    /// did arrive. Returns `None` when the peer closed or the bytes do not
    /// form a request.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        self.buffer.clear();
        self.buffer.reserve(self.read_buffer_size);

        let n = {
            let mut limited = (&mut self.stream).take(self.read_buffer_size as u64);
            limited.read_buf(&mut self.buffer).await?
        };

        if n == 0 {
            // Client closed connection
            return Ok(None);
        }

        match parse_request(&self.buffer) {
            Ok(request) => Ok(Some(request)),
            Err(e) => {
                tracing::warn!(error = %e, bytes = n, "Closing connection on unparseable request");
                Ok(None)
            }
        }
    }
}
