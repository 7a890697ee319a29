use thiserror::Error;

/// Errors produced by request payload validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} characters, got {len}")]
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_out_of_range_display() {
        let error = ValidationError::LengthOutOfRange {
            field: "title",
            min: 3,
            max: 200,
            len: 2,
        };
        assert_eq!(
            error.to_string(),
            "title must be between 3 and 200 characters, got 2"
        );
    }
}
