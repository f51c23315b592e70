//! Body rendering for resolved files.
//!
//! Text documents (`html`, `txt`) are emitted line by line with template
//! tokens substituted. Everything else is streamed byte for byte. Requests
//! for a favicon never touch the filesystem.
//!
//! File errors here are logged and end the body early; the status line has
//! already gone out by the time rendering starts. Write errors on the
//! connection are returned to the caller.

use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::mime;
use crate::http::parser::trim_line_ending;
use crate::http::request::RequestLine;

const BUFFER_SIZE: usize = 8192;

/// Written in place of any line containing `cs371date`. The browser fills in the date.
pub const DATE_SCRIPT: &[u8] =
    b" <script language=\"javascript\">\nvar today = new Date();\ndocument.write(today);\n</script>";

/// Written in place of any line containing `cs371server`.
pub const SERVER_HEADING: &[u8] = b"<h3>Web Server name: Xitlally's Server</h3>\n";

/// The whole body of a favicon response.
pub const FAVICON_LINK: &[u8] = b"<link rel=\"icon\" type=\"image/png\" href=\"./test/favicon.png\" >";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    Insert(&'static [u8]),
    /// Abandon the line and stream the raw bytes of the whole file instead.
    StreamWholeFile,
}

#[derive(Debug)]
pub struct TemplateToken {
    pub token: &'static [u8],
    pub action: Substitution,
}

/// Checked in order against each line; the first hit replaces the line.
pub const TEMPLATE_TOKENS: &[TemplateToken] = &[
    TemplateToken {
        token: b"cs371date",
        action: Substitution::Insert(DATE_SCRIPT),
    },
    TemplateToken {
        token: b"cs371server",
        action: Substitution::Insert(SERVER_HEADING),
    },
    // Matches the misspelled attribute only; `<img src` passes through.
    TemplateToken {
        token: b"<img scr",
        action: Substitution::StreamWholeFile,
    },
];

/// How the body of an existing resource is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Favicon,
    Template,
    Raw,
}

impl Body {
    pub fn select(request: &RequestLine) -> Self {
        if request.is_favicon() {
            Body::Favicon
        } else if mime::is_textual(request.extension()) {
            Body::Template
        } else {
            Body::Raw
        }
    }
}

/// Returns the action for the first template token found in `line`, if any.
pub fn substitution_for(line: &[u8]) -> Option<Substitution> {
    TEMPLATE_TOKENS
        .iter()
        .find(|t| contains(line, t.token))
        .map(|t| t.action)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Writes the body for `path` to `stream`.
pub async fn write_body<W>(stream: &mut W, path: &str, body: Body) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    match body {
        Body::Favicon => stream.write_all(FAVICON_LINK).await?,
        Body::Template => write_template(stream, path).await?,
        Body::Raw => stream_file(stream, path).await?,
    }
    Ok(())
}

/// Emits a text file line by line. Line terminators are dropped, not re-inserted.
async fn write_template<W>(stream: &mut W, path: &str) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(path, error = %e, "Unable to open file");
            return Ok(());
        }
    };

    let mut reader = BufReader::new(file);
    let mut line = Vec::with_capacity(256);

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(path, error = %e, "Unable to read file");
                break;
            }
        }

        let content = trim_line_ending(&line);
        match substitution_for(content) {
            Some(Substitution::Insert(snippet)) => stream.write_all(snippet).await?,
            Some(Substitution::StreamWholeFile) => stream_file(stream, path).await?,
            None => stream.write_all(content).await?,
        }
    }

    Ok(())
}

/// Copies the raw bytes of the file at `path` to `stream`.
async fn stream_file<W>(stream: &mut W, path: &str) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut file = match File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(path, error = %e, "Unable to open file");
            return Ok(());
        }
    };

    let mut buffer = BytesMut::with_capacity(BUFFER_SIZE);
    let mut total = 0usize;

    loop {
        buffer.clear();
        let n = match file.read_buf(&mut buffer).await {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(path, error = %e, "Unable to read file");
                break;
            }
        };

        if n == 0 {
            break;
        }

        stream.write_all(&buffer[..n]).await?;
        total += n;
    }

    tracing::trace!(path, bytes = total, "Streamed file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_token_wins() {
        assert_eq!(
            substitution_for(b"cs371date and cs371server"),
            Some(Substitution::Insert(DATE_SCRIPT))
        );
    }

    #[test]
    fn well_formed_img_tag_is_literal() {
        assert_eq!(substitution_for(b"<img src=\"a.png\">"), None);
        assert_eq!(
            substitution_for(b"<img scr=\"a.png\">"),
            Some(Substitution::StreamWholeFile)
        );
    }

    fn select(path: &str) -> Body {
        Body::select(&RequestLine::from_line(&format!("GET {path} HTTP/1.1")).unwrap())
    }

    #[test]
    fn body_selection() {
        assert_eq!(select("/favicon.ico"), Body::Favicon);
        assert_eq!(select("/img/favicon.png"), Body::Favicon);
        assert_eq!(select("/index.html"), Body::Template);
        assert_eq!(select("/notes.txt"), Body::Template);
        assert_eq!(select("/logo.png"), Body::Raw);
        assert_eq!(select("/LICENSE"), Body::Raw);
    }
}
