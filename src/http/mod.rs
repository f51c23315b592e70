//! HTTP exchange implementation.
//!
//! Each accepted connection carries exactly one request. The head is read,
//! the requested path is looked up under the document root, and a response
//! is written before the connection closes. There is no keep-alive and no
//! `Content-Length`: the end of the body is the end of the stream.
//!
//! # Architecture
//!
//! - **`connection`**: drives one exchange through its state machine
//! - **`parser`**: reads the request head and extracts the request line
//! - **`request`**: the parsed request line and path helpers
//! - **`resolver`**: checks whether a requested file can be served
//! - **`mime`**: extension extraction and `Content-Type` lookup
//! - **`response`**: status codes and the response header
//! - **`writer`**: serializes the header block and the HTML envelope
//! - **`render`**: template substitution and raw file streaming
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read lines up to the blank line
//!        └──────┬──────┘
//!               │ Request line parsed (malformed → 400)
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← File exists? Content type?
//!        └──────┬───────────┘
//!               │ 200 or 404 decided
//!               ▼
//!        ┌──────────────────┐
//!        │     Writing      │ ← Header, envelope, body (200 only)
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use webworker::config::SiteConfig;
//! use webworker::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, SiteConfig::default());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod render;
pub mod request;
pub mod resolver;
pub mod response;
pub mod writer;
