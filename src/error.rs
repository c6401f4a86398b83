use thiserror::Error;

/// Failure of a typo search.
///
/// `E` is the backend's own error type; a backend failure is handed back
/// as-is so its diagnostics survive.
#[derive(Debug, Error)]
pub enum TypoError<E> {
    #[error("expected a valid spell-checking backend instance: {0}")]
    InvalidBackend(String),

    #[error(transparent)]
    Backend(E),
}

impl<E> TypoError<E> {
    pub fn is_invalid_backend(&self) -> bool {
        matches!(self, TypoError::InvalidBackend(_))
    }

    /// The backend's error value, if the search failed inside the backend.
    pub fn into_backend(self) -> Option<E> {
        match self {
            TypoError::Backend(err) => Some(err),
            TypoError::InvalidBackend(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Boom(u32);

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom #{}", self.0)
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn test_backend_error_is_transparent() {
        let err: TypoError<Boom> = TypoError::Backend(Boom(7));
        assert_eq!(err.to_string(), "boom #7");
        assert!(!err.is_invalid_backend());
        assert_eq!(err.into_backend(), Some(Boom(7)));
    }

    #[test]
    fn test_invalid_backend_message() {
        let err: TypoError<Boom> = TypoError::InvalidBackend("empty dictionary".to_string());
        assert!(err.to_string().contains("valid spell-checking backend instance"));
        assert!(err.is_invalid_backend());
        assert_eq!(err.into_backend(), None);
    }
}
