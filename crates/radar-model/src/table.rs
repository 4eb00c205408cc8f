use serde::{Deserialize, Serialize};

use crate::column::Column;

/// A foreign key from one column of this table to a column of another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub column: String,
    pub references_table: String,
    pub references_column: String,
}

/// A named CHECK constraint rendered verbatim into DDL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConstraint {
    pub name: String,
    pub expr: String,
}

/// A multi-column unique constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueConstraint {
    pub columns: Vec<String>,
}

/// A complete table definition: ordered columns plus table-level
/// constraints. Built in ordinary code with the chainable methods below;
/// column order is preserved exactly as declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<Column>,
    pub foreign_keys: Vec<ForeignKey>,
    pub unique_constraints: Vec<UniqueConstraint>,
    pub check_constraints: Vec<CheckConstraint>,
}

impl TableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            foreign_keys: Vec::new(),
            unique_constraints: Vec::new(),
            check_constraints: Vec::new(),
        }
    }

    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Declare `column` as a foreign key to `table (referenced_column)`.
    #[must_use]
    pub fn foreign_key(
        mut self,
        column: impl Into<String>,
        table: impl Into<String>,
        referenced_column: impl Into<String>,
    ) -> Self {
        self.foreign_keys.push(ForeignKey {
            column: column.into(),
            references_table: table.into(),
            references_column: referenced_column.into(),
        });
        self
    }

    #[must_use]
    pub fn unique(mut self, columns: &[&str]) -> Self {
        self.unique_constraints.push(UniqueConstraint {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
        });
        self
    }

    #[must_use]
    pub fn check(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.check_constraints.push(CheckConstraint {
            name: name.into(),
            expr: expr.into(),
        });
        self
    }

    /// Columns flagged as primary key, in declaration order.
    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.primary_key)
            .map(|column| column.name.as_str())
            .collect()
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_column_order() {
        let table = TableDef::new("hospital")
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("hospital_code"))
            .column(Column::text("hospital_name"))
            .column(Column::boolean("is_transplant_centre"));
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["id", "hospital_code", "hospital_name", "is_transplant_centre"]
        );
        assert_eq!(table.primary_key_columns(), ["id"]);
    }

    #[test]
    fn foreign_keys_record_targets() {
        let table = TableDef::new("hospital_patient")
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("patient_id"))
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("patient_id", "patient", "id");
        assert_eq!(table.foreign_keys.len(), 2);
        assert_eq!(table.foreign_keys[0].references_table, "hospital");
        assert_eq!(table.foreign_keys[1].references_column, "id");
    }
}
