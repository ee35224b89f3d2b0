//! Output formatting for a looked-up product.

use crate::error::UsageError;
use crate::wildberries::LookupResult;
use std::fmt;
use std::str::FromStr;

/// What to print for a lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    /// Four-line human-readable block
    #[default]
    Summary,
    /// Raw JSON body, unmodified
    Body,
    Name,
    Price,
    SalePrice,
    Rating,
}

impl Field {
    /// Fields that can be requested by name on the command line.
    pub const SELECTABLE: [Field; 5] =
        [Field::Body, Field::Name, Field::Price, Field::SalePrice, Field::Rating];

    /// Command-line name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Summary => "summary",
            Field::Body => "body",
            Field::Name => "name",
            Field::Price => "price",
            Field::SalePrice => "salePrice",
            Field::Rating => "rating",
        }
    }
}

impl FromStr for Field {
    type Err = UsageError;

    /// Parses a selector. Names are case-sensitive and `summary` is not selectable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::SELECTABLE
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UsageError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats lookup results for output.
pub struct Formatter;

impl Formatter {
    /// Renders one field of a lookup (without trailing newline).
    pub fn format(result: &LookupResult, field: Field) -> String {
        let product = &result.product;

        match field {
            Field::Summary => format!(
                "Название: {}\nЦена: {:.2} ₽\nАкционная цена: {:.2} ₽\nРейтинг: {:.1} ★",
                product.name,
                product.price(),
                product.sale_price(),
                product.rating
            ),
            Field::Body => result.raw_body.clone(),
            Field::Name => product.name.clone(),
            Field::Price => format!("{:.2}", product.price()),
            Field::SalePrice => format!("{:.2}", product.sale_price()),
            Field::Rating => format!("{:.1}", product.rating),
        }
    }
}
