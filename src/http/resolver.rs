//! File existence checks against the local filesystem.

use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Reports whether `path` can be opened and yields at least one byte.
///
/// A missing, unreadable or empty file, or a directory, is `false`. Errors are
/// logged and never returned: not finding a file is an expected outcome.
pub async fn exists(path: &str) -> bool {
    let mut file = match File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(path, error = %e, "Unable to open file");
            return false;
        }
    };

    let mut probe = [0u8; 1];
    match file.read(&mut probe).await {
        Ok(n) => n > 0,
        Err(e) => {
            tracing::debug!(path, error = %e, "Unable to read file");
            false
        }
    }
}
