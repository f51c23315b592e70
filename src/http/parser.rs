use std::fmt;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::request::RequestLine;

/// Largest request head read before giving up, terminator included.
pub const MAX_HEAD_BYTES: u64 = 64 * 1024;

#[derive(Debug)]
pub enum ParseError {
    /// The request line has fewer than two whitespace-separated tokens.
    MalformedRequestLine(String),
    /// The stream ended before any request line arrived.
    Incomplete,
    /// No blank line within `MAX_HEAD_BYTES`.
    HeadTooLarge,
    Io(std::io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedRequestLine(line) => write!(f, "malformed request line: {line:?}"),
            ParseError::Incomplete => write!(f, "connection closed before a request line was read"),
            ParseError::HeadTooLarge => write!(f, "request head exceeds {MAX_HEAD_BYTES} bytes"),
            ParseError::Io(e) => write!(f, "failed to read request: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Reads a request head off the stream and returns its request line.
///
/// Lines are consumed until the first empty line after the request line.
/// Leading empty lines are skipped. End of stream also ends the head, so a
/// client that sends only `GET /x HTTP/1.1\n` and half-closes still gets a
/// response. Everything after the request line is logged and dropped.
///
/// At most `MAX_HEAD_BYTES` are read; a longer head is `HeadTooLarge`.
pub async fn read_request<R>(reader: &mut R) -> Result<RequestLine, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut reader = reader.take(MAX_HEAD_BYTES);
    let mut request_line: Option<Result<RequestLine, ParseError>> = None;
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).await?;
        if reader.limit() == 0 && !buf.ends_with(b"\n") {
            return Err(ParseError::HeadTooLarge);
        }
        if n == 0 {
            break;
        }

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        tracing::debug!(line = %line, "Request line");

        if line.is_empty() {
            if request_line.is_some() {
                break;
            }
            continue;
        }

        if request_line.is_none() {
            request_line = Some(
                RequestLine::from_line(&line)
                    .ok_or_else(|| ParseError::MalformedRequestLine(line.to_string())),
            );
        }
    }

    request_line.unwrap_or(Err(ParseError::Incomplete))
}

/// Strips a trailing `\n` or `\r\n`.
pub(crate) fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_both_line_endings() {
        assert_eq!(trim_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc"), b"abc");
        assert_eq!(trim_line_ending(b"\r\n"), b"");
    }

    #[tokio::test]
    async fn parse_simple_get() {
        let mut req: &[u8] = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = read_request(&mut req).await.unwrap();

        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.path, "/");
    }
}
