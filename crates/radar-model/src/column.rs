use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic column types used by the registry schema.
///
/// The variants cover everything the registry declares: integers (plain,
/// 64-bit, and auto-incrementing surrogate keys), floating point and exact
/// decimals, text, booleans, calendar dates and timestamps, UUIDs, JSONB
/// documents, text arrays, and named enumerated types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    BigInt,
    /// 64-bit auto-incrementing surrogate key.
    BigSerial,
    Double,
    Numeric,
    Text,
    Boolean,
    Date,
    Timestamp,
    Uuid,
    Jsonb,
    TextArray,
    /// A named enumerated type; the type itself must be registered with the
    /// catalog before any table referencing it.
    Enum(String),
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::BigInt => write!(f, "bigint"),
            ColumnType::BigSerial => write!(f, "bigserial"),
            ColumnType::Double => write!(f, "double"),
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Boolean => write!(f, "boolean"),
            ColumnType::Date => write!(f, "date"),
            ColumnType::Timestamp => write!(f, "timestamp"),
            ColumnType::Uuid => write!(f, "uuid"),
            ColumnType::Jsonb => write!(f, "jsonb"),
            ColumnType::TextArray => write!(f, "text[]"),
            ColumnType::Enum(name) => write!(f, "{name}"),
        }
    }
}

/// A single column definition.
///
/// Columns are NOT NULL unless `nullable()` is applied, matching the
/// registry convention that optionality is the exception and is declared
/// explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub nullable: bool,
    /// Server-side default expression rendered verbatim into DDL.
    pub default: Option<String>,
    pub unique: bool,
    pub primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
            default: None,
            unique: false,
            primary_key: false,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Integer)
    }

    pub fn big_int(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::BigInt)
    }

    pub fn big_serial(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::BigSerial)
    }

    pub fn double(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Double)
    }

    pub fn numeric(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Numeric)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Text)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Boolean)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Date)
    }

    pub fn timestamp(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Timestamp)
    }

    pub fn uuid(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Uuid)
    }

    pub fn jsonb(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Jsonb)
    }

    pub fn text_array(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::TextArray)
    }

    pub fn enumerated(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Enum(type_name.into()))
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn default_expr(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

/// Returns true if `name` is a valid lowercase PostgreSQL identifier.
///
/// The registry declares every identifier in lowercase snake case; anything
/// else is rejected at catalog build time rather than papered over with
/// quoting.
pub fn is_valid_identifier(name: &str) -> bool {
    if name.is_empty() || name.len() > 63 {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_lowercase() || first == '_') {
        return false;
    }
    chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_default_to_not_null() {
        let column = Column::text("hospital_name");
        assert!(!column.nullable);
        assert!(!column.unique);
        assert!(column.default.is_none());
    }

    #[test]
    fn modifiers_chain() {
        let column = Column::boolean("is_retired").default_expr("false").nullable();
        assert!(column.nullable);
        assert_eq!(column.default.as_deref(), Some("false"));
    }

    #[test]
    fn identifier_validation() {
        assert!(is_valid_identifier("patient"));
        assert!(is_valid_identifier("adult_eq5d5l"));
        assert!(is_valid_identifier("_internal"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("Patient"));
        assert!(!is_valid_identifier("2fa"));
        assert!(!is_valid_identifier("drop table"));
    }
}
