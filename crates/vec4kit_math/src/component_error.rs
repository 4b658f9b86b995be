//! Component indexing error type
//!
//! Returned when a vector component is addressed by a position outside `0..4`.

use std::fmt;

/// Error for out-of-range component access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentIndexError {
    /// The index that was requested
    pub index: usize,
}

impl ComponentIndexError {
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl fmt::Display for ComponentIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Component index out of range: {} (valid indices are 0..4)",
            self.index
        )
    }
}

impl std::error::Error for ComponentIndexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_index() {
        let err = ComponentIndexError::new(7);
        let msg = format!("{}", err);
        assert!(msg.contains("out of range"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_error_has_no_source() {
        use std::error::Error;

        let err = ComponentIndexError::new(4);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_debug_format() {
        let err = ComponentIndexError::new(4);
        let debug = format!("{:?}", err);
        assert!(debug.contains("ComponentIndexError"));
        assert!(debug.contains('4'));
    }
}
