use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufStream};
use tokio::time::timeout;

use crate::config::SiteConfig;
use crate::http::mime;
use crate::http::parser::{read_request, ParseError};
use crate::http::render::{write_body, Body};
use crate::http::request::RequestLine;
use crate::http::resolver;
use crate::http::response::{ResponseHeader, StatusCode};
use crate::http::writer::{ResponseWriter, ENVELOPE_CLOSE, ENVELOPE_OPEN};

/// One request/response exchange over an accepted stream.
pub struct Connection<S> {
    stream: BufStream<S>,
    site: SiteConfig,
    read_timeout: Option<Duration>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Resolving(RequestLine),
    Writing(Exchange),
    Closed,
}

/// Everything decided about the response before the first byte is written.
#[derive(Debug)]
pub struct Exchange {
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    /// Local file path and how to render it; `None` means an empty envelope.
    pub body: Option<(String, Body)>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: SiteConfig) -> Self {
        Self {
            stream: BufStream::new(stream),
            site,
            read_timeout: None,
            state: ConnectionState::Reading,
        }
    }

    pub fn with_read_timeout(mut self, read_timeout: Option<Duration>) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Drives the exchange to completion and shuts the stream down.
    ///
    /// Write failures abort the exchange and are returned.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Ok(request) => ConnectionState::Resolving(request),
                        Err(e) => {
                            tracing::warn!(error = %e, "Rejecting request");
                            ConnectionState::Writing(Exchange::bad_request())
                        }
                    };
                }

                ConnectionState::Resolving(request) => {
                    let exchange = Self::resolve(request, &self.site).await;
                    self.state = ConnectionState::Writing(exchange);
                }

                ConnectionState::Writing(exchange) => {
                    let header = ResponseHeader::new(
                        exchange.status,
                        self.site.server_header.as_str(),
                        exchange.content_type,
                    );
                    let body = exchange.body.take();

                    ResponseWriter::new(&header)
                        .write_to_stream(&mut self.stream)
                        .await?;
                    self.stream.write_all(ENVELOPE_OPEN).await?;
                    if let Some((path, body)) = body {
                        write_body(&mut self.stream, &path, body).await?;
                    }
                    self.stream.write_all(ENVELOPE_CLOSE).await?;
                    self.stream.flush().await?;

                    tracing::info!(status = header.status.as_u16(), "Response sent");
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    if let Err(e) = self.stream.shutdown().await {
                        tracing::debug!(error = %e, "Failed to shut down connection");
                    }
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the request head, applying the read timeout if one is set.
    ///
    /// The outer error is a transport failure or an expired timeout. The inner
    /// one is a request that cannot be served and gets a 400.
    async fn read_request(&mut self) -> anyhow::Result<Result<RequestLine, ParseError>> {
        let result = match self.read_timeout {
            Some(limit) => timeout(limit, read_request(&mut self.stream))
                .await
                .map_err(|_| anyhow::anyhow!("timed out waiting for request"))?,
            None => read_request(&mut self.stream).await,
        };

        match result {
            Err(ParseError::Io(e)) => Err(e.into()),
            other => Ok(other),
        }
    }

    /// Decides status, content type and body source for a parsed request.
    pub async fn resolve(request: &RequestLine, site: &SiteConfig) -> Exchange {
        let path = request.local_path(&site.document_root);
        let extension = request.extension();
        let content_type = mime::content_type(extension);

        tracing::info!(method = %request.method, path = %request.path, "Handling request");
        if request.has_parent_segments() {
            tracing::warn!(path = %request.path, "Request path escapes the document root");
        }

        let body = Body::select(request);
        if body == Body::Favicon || resolver::exists(&path).await {
            Exchange {
                status: StatusCode::Ok,
                content_type,
                body: Some((path, body)),
            }
        } else {
            Exchange {
                status: StatusCode::NotFound,
                content_type,
                body: None,
            }
        }
    }
}

impl Exchange {
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            content_type: None,
            body: None,
        }
    }
}
