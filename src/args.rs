//! Positional argument resolution: `<article> [field]`.

use crate::error::UsageError;
use crate::format::Field;

/// A validated request: which article to look up and what to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Passed verbatim into the query string
    pub article: String,
    pub field: Field,
}

impl Invocation {
    /// Validates the positional arguments (program name excluded).
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        match args {
            [] => Err(UsageError::MissingArticle),
            [article] => Ok(Self { article: article.clone(), field: Field::Summary }),
            [article, field] => Ok(Self { article: article.clone(), field: field.parse()? }),
            _ => Err(UsageError::TooManyArguments(args.len())),
        }
    }
}
