use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::ResponseHeader;

/// Written after the header block of every response.
pub const ENVELOPE_OPEN: &[u8] = b"<html><head></head><body>\n";
/// Written last, just before the connection closes.
pub const ENVELOPE_CLOSE: &[u8] = b"</body></html>\n";

fn serialize_header(header: &ResponseHeader) -> BytesMut {
    let mut buf = BytesMut::with_capacity(160);

    // Status line
    buf.put_slice(header.status.status_line().as_bytes());
    buf.put_slice(b"\n");

    buf.put_slice(b"Date: ");
    buf.put_slice(header.date_value().as_bytes());
    buf.put_slice(b"\n");

    buf.put_slice(b"Server: ");
    buf.put_slice(header.server.as_bytes());
    buf.put_slice(b"\n");

    buf.put_slice(b"Connection: close\n");

    if let Some(content_type) = header.content_type {
        buf.put_slice(b"Content-Type: ");
        buf.put_slice(content_type.as_bytes());
        buf.put_slice(b"\n");
    }

    // Header/body separator
    buf.put_slice(b"\n");

    buf
}

pub struct ResponseWriter {
    buffer: BytesMut,
}

impl ResponseWriter {
    pub fn new(header: &ResponseHeader) -> Self {
        Self {
            buffer: serialize_header(header),
        }
    }

    /// The serialized header block, `\n\n` terminator included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<W>(&self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        stream.write_all(&self.buffer).await?;
        Ok(())
    }
}
