/// Domain-level errors raised before any database work happens.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_prefixed() {
        let err = CoreError::Validation("limit must be an integer".into());
        assert_eq!(err.to_string(), "Validation failed: limit must be an integer");
    }
}
