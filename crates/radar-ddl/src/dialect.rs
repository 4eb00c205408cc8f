use radar_model::ColumnType;

/// Words that must be quoted when used as identifiers, even though the
/// registry's own naming convention avoids them. Kept to the reserved set
/// that actually breaks unquoted DDL on PostgreSQL.
const RESERVED_WORDS: &[&str] = &[
    "all",
    "analyse",
    "analyze",
    "and",
    "any",
    "array",
    "as",
    "asc",
    "asymmetric",
    "both",
    "case",
    "cast",
    "check",
    "collate",
    "column",
    "constraint",
    "create",
    "current_date",
    "current_role",
    "current_time",
    "current_timestamp",
    "current_user",
    "default",
    "deferrable",
    "desc",
    "distinct",
    "do",
    "else",
    "end",
    "except",
    "false",
    "fetch",
    "for",
    "foreign",
    "from",
    "grant",
    "group",
    "having",
    "in",
    "initially",
    "intersect",
    "into",
    "lateral",
    "leading",
    "limit",
    "localtime",
    "localtimestamp",
    "not",
    "null",
    "offset",
    "on",
    "only",
    "or",
    "order",
    "placing",
    "primary",
    "references",
    "returning",
    "select",
    "session_user",
    "some",
    "symmetric",
    "table",
    "then",
    "to",
    "trailing",
    "true",
    "union",
    "unique",
    "user",
    "using",
    "variadic",
    "when",
    "where",
    "window",
    "with",
];

/// PostgreSQL identifier and literal quoting.
///
/// Pure text formatting: the dialect never talks to a database, it only
/// decides how names and values appear in emitted DDL.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgDialect;

impl PgDialect {
    /// Quote `name` for use as an identifier. Safe lowercase names are
    /// emitted bare; anything else is double-quoted with embedded quotes
    /// doubled.
    pub fn quote_ident(&self, name: &str) -> String {
        if self.is_safe_unquoted(name) {
            name.to_string()
        } else {
            format!("\"{}\"", name.replace('"', "\"\""))
        }
    }

    /// Quote `value` as a string literal (single quotes, doubled inside).
    pub fn quote_literal(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    /// SQL type keyword for a column type.
    pub fn type_sql(&self, column_type: &ColumnType) -> String {
        match column_type {
            ColumnType::Integer => "INTEGER".to_string(),
            ColumnType::BigInt => "BIGINT".to_string(),
            ColumnType::BigSerial => "BIGSERIAL".to_string(),
            ColumnType::Double => "DOUBLE PRECISION".to_string(),
            ColumnType::Numeric => "NUMERIC".to_string(),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::Boolean => "BOOLEAN".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::Timestamp => "TIMESTAMP".to_string(),
            ColumnType::Uuid => "UUID".to_string(),
            ColumnType::Jsonb => "JSONB".to_string(),
            ColumnType::TextArray => "TEXT[]".to_string(),
            ColumnType::Enum(name) => self.quote_ident(name),
        }
    }

    fn is_safe_unquoted(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let mut chars = name.chars();
        let first_ok = chars
            .next()
            .is_some_and(|ch| ch.is_ascii_lowercase() || ch == '_');
        if !first_ok {
            return false;
        }
        let rest_ok = chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_');
        rest_ok && !RESERVED_WORDS.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_names_stay_bare() {
        let dialect = PgDialect;
        assert_eq!(dialect.quote_ident("patient"), "patient");
        assert_eq!(dialect.quote_ident("adult_eq5d5l"), "adult_eq5d5l");
    }

    #[test]
    fn reserved_and_unsafe_names_are_quoted() {
        let dialect = PgDialect;
        assert_eq!(dialect.quote_ident("user"), "\"user\"");
        assert_eq!(dialect.quote_ident("Patient"), "\"Patient\"");
        assert_eq!(dialect.quote_ident("odd\"name"), "\"odd\"\"name\"");
    }

    #[test]
    fn literals_double_embedded_quotes() {
        let dialect = PgDialect;
        assert_eq!(dialect.quote_literal("FORM"), "'FORM'");
        assert_eq!(dialect.quote_literal("it's"), "'it''s'");
    }

    #[test]
    fn enum_types_render_by_name() {
        let dialect = PgDialect;
        assert_eq!(
            dialect.type_sql(&ColumnType::Enum("consent_type".to_string())),
            "consent_type"
        );
        assert_eq!(dialect.type_sql(&ColumnType::Double), "DOUBLE PRECISION");
    }
}
