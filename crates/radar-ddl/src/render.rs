use radar_model::{EnumTypeDef, SchemaCatalog, TableDef};

use crate::dialect::PgDialect;

/// Render the whole catalog: enum types first (tables may reference them),
/// then tables, both in registration order. Statements are separated by a
/// blank line, matching what a schema dump tool would emit.
pub fn render_catalog(dialect: &PgDialect, catalog: &SchemaCatalog) -> String {
    let mut statements = Vec::new();
    for enum_type in catalog.enum_types() {
        statements.push(render_enum_type(dialect, enum_type));
    }
    for table in catalog.tables() {
        statements.push(render_table(dialect, table));
    }
    statements.join("\n\n")
}

/// Render one `CREATE TYPE … AS ENUM` statement. Member order is emitted
/// exactly as declared.
pub fn render_enum_type(dialect: &PgDialect, enum_type: &EnumTypeDef) -> String {
    let members: Vec<String> = enum_type
        .members
        .iter()
        .map(|member| dialect.quote_literal(member))
        .collect();
    format!(
        "CREATE TYPE {} AS ENUM ({});",
        dialect.quote_ident(&enum_type.name),
        members.join(", ")
    )
}

/// The opening line of a table's `CREATE TABLE` statement, without the
/// column list. The verification harness matches rendered DDL against this
/// exact head.
pub fn table_statement_head(dialect: &PgDialect, table_name: &str) -> String {
    format!("CREATE TABLE {} (", dialect.quote_ident(table_name))
}

/// Render one `CREATE TABLE` statement: columns in declaration order, then
/// primary key, unique, foreign key, and check clauses.
pub fn render_table(dialect: &PgDialect, table: &TableDef) -> String {
    let mut lines = Vec::new();

    for column in &table.columns {
        let mut line = format!(
            "{} {}",
            dialect.quote_ident(&column.name),
            dialect.type_sql(&column.column_type)
        );
        if !column.nullable {
            line.push_str(" NOT NULL");
        }
        if let Some(default) = &column.default {
            line.push_str(" DEFAULT ");
            line.push_str(default);
        }
        if column.unique {
            line.push_str(" UNIQUE");
        }
        lines.push(line);
    }

    let primary_key = table.primary_key_columns();
    if !primary_key.is_empty() {
        let columns: Vec<String> = primary_key
            .iter()
            .map(|column| dialect.quote_ident(column))
            .collect();
        lines.push(format!("PRIMARY KEY ({})", columns.join(", ")));
    }

    for unique in &table.unique_constraints {
        let columns: Vec<String> = unique
            .columns
            .iter()
            .map(|column| dialect.quote_ident(column))
            .collect();
        lines.push(format!("UNIQUE ({})", columns.join(", ")));
    }

    for foreign_key in &table.foreign_keys {
        lines.push(format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            dialect.quote_ident(&foreign_key.column),
            dialect.quote_ident(&foreign_key.references_table),
            dialect.quote_ident(&foreign_key.references_column)
        ));
    }

    for check in &table.check_constraints {
        lines.push(format!(
            "CONSTRAINT {} CHECK ({})",
            dialect.quote_ident(&check.name),
            check.expr
        ));
    }

    let body = lines
        .iter()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{}\n{}\n);", table_statement_head(dialect, &table.name), body)
}
