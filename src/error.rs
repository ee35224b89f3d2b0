//! Error types for argument resolution and product lookups.

use std::time::Duration;
use thiserror::Error;

/// Command-line usage errors, detected before any network activity.
///
/// Messages are bilingual: English first, Russian on the second line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Usage: wb-lookup <article_number> [field]\nИспользование: wb-lookup <артикул> [поле]")]
    MissingArticle,

    #[error(
        "Error: Field not found. Expected: body, name, price, salePrice, rating\n\
         Ошибка: Поле не найдено. Ожидалось: body, name, price, salePrice, rating"
    )]
    UnknownField(String),

    #[error(
        "Error: Too Many Arguments. Expected: 1 or 2 arguments\n\
         Ошибка: Слишком много аргументов. Ожидалось: 1 или 2 аргумента"
    )]
    TooManyArguments(usize),
}

/// Runtime failures of a single product lookup.
///
/// Every variant maps to the same non-zero exit status. Messages do not repeat
/// their source; print with `{:#}` through anyhow to get the full chain.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to build HTTP client")]
    Client(#[source] wreq::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request failed")]
    Network(#[source] wreq::Error),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("failed to decompress gzip response")]
    Decompress(#[source] std::io::Error),

    #[error("failed to read response body")]
    Body(#[source] wreq::Error),

    #[error("failed to decode product JSON")]
    Decode(#[from] serde_json::Error),

    #[error("нет данных о товаре {0} (no data for product)")]
    NoData(String),
}

impl LookupError {
    /// Returns true for either deadline expiring.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::Timeout(_))
    }
}

pub type Result<T, E = LookupError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_messages_are_bilingual() {
        let err = UsageError::UnknownField("color".to_string()).to_string();
        assert!(err.contains("Field not found"));
        assert!(err.contains("Поле не найдено"));
        assert!(err.contains("body, name, price, salePrice, rating"));

        let err = UsageError::TooManyArguments(3).to_string();
        assert!(err.contains("Too Many Arguments"));
        assert!(err.contains("Слишком много аргументов"));
    }

    #[test]
    fn test_missing_article_shows_usage() {
        let err = UsageError::MissingArticle.to_string();
        assert!(err.starts_with("Usage: wb-lookup <article_number> [field]"));
        assert!(err.contains("Использование"));
    }

    #[test]
    fn test_no_data_message() {
        let err = LookupError::NoData("42".to_string());
        assert!(err.to_string().contains("no data"));
        assert!(err.to_string().contains("42"));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_timeout_message() {
        let err = LookupError::Timeout(Duration::from_secs(15));
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "request timed out after 15s");
    }
}
