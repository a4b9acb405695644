use std::time::Duration;

/// Snapshot of one HTTP response: status, decoded body and the headers the
/// checklist cares about. Ephemeral; each category fetches its own.
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
    pub body_bytes: usize,
    pub content_encoding: Option<String>,
    pub cache_control: Option<String>,
    pub elapsed: Duration,
}

impl FetchedPage {
    pub fn size_kb(&self) -> f64 {
        self.body_bytes as f64 / 1024.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body_bytes: usize) -> FetchedPage {
        FetchedPage {
            status: 200,
            body: String::new(),
            body_bytes,
            content_encoding: None,
            cache_control: None,
            elapsed: Duration::from_millis(100),
        }
    }

    #[test]
    fn test_size_kb() {
        assert!((page(512_000).size_kb() - 500.0).abs() < f64::EPSILON);
        assert!((page(1024).size_kb() - 1.0).abs() < f64::EPSILON);
    }
}
