use crate::http::mime;

/// The first line of an HTTP request.
///
/// Only the method and path tokens are kept. Any protocol version and the
/// header lines that follow are read off the wire and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The method token, e.g. "GET". Not validated.
    pub method: String,
    /// The requested path exactly as sent, e.g. "/index.html"
    pub path: String,
}

impl RequestLine {
    /// Splits a request line on whitespace and keeps the first two tokens.
    ///
    /// Returns `None` when there are fewer than two tokens.
    ///
    /// # Example
    ///
    /// ```
    /// # use webworker::http::request::RequestLine;
    /// let line = RequestLine::from_line("GET /index.html HTTP/1.1").unwrap();
    /// assert_eq!(line.path, "/index.html");
    /// assert!(RequestLine::from_line("GET").is_none());
    /// ```
    pub fn from_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let method = parts.next()?;
        let path = parts.next()?;

        Some(Self {
            method: method.to_string(),
            path: path.to_string(),
        })
    }

    /// Joins the requested path onto the document root.
    ///
    /// No sanitization happens here: `..` segments pass straight through.
    pub fn local_path(&self, document_root: &str) -> String {
        format!("{}{}", document_root, self.path)
    }

    pub fn extension(&self) -> Option<&str> {
        mime::extension_of(&self.path)
    }

    pub fn is_favicon(&self) -> bool {
        self.path.contains("favicon")
    }

    pub fn has_parent_segments(&self) -> bool {
        self.path.split('/').any(|segment| segment == "..")
    }
}
