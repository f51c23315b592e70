use chrono::{DateTime, Utc};

/// HTTP status codes this server can answer with.
///
/// - `Ok` (200): the file exists and its content follows
/// - `BadRequest` (400): the request line could not be parsed
/// - `NotFound` (404): the file is missing, unreadable or empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use webworker::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the full status line, without line terminator.
    ///
    /// The 404 line keeps its historical `404: Not Found` wording, which
    /// clients of this server match on.
    pub fn status_line(&self) -> &'static str {
        match self {
            StatusCode::Ok => "HTTP/1.1 200 OK",
            StatusCode::BadRequest => "HTTP/1.1 400 Bad Request",
            StatusCode::NotFound => "HTTP/1.1 404: Not Found",
        }
    }
}

/// The header block of a response.
///
/// There is never a `Content-Length`: the body runs until the connection closes.
#[derive(Debug, Clone)]
pub struct ResponseHeader {
    pub status: StatusCode,
    pub date: DateTime<Utc>,
    pub server: String,
    /// `None` leaves the `Content-Type` line out entirely.
    pub content_type: Option<&'static str>,
}

impl ResponseHeader {
    /// Creates a header stamped with the current time.
    pub fn new(status: StatusCode, server: impl Into<String>, content_type: Option<&'static str>) -> Self {
        Self {
            status,
            date: Utc::now(),
            server: server.into(),
            content_type,
        }
    }

    /// Formats the date in US medium date-time style, e.g. `Sep 5, 2017 2:03:07 PM`.
    pub fn date_value(&self) -> String {
        self.date.format("%b %-d, %Y %-I:%M:%S %p").to_string()
    }
}
