use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// What kind of discrepancy an issue describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// A declared table name has no `CREATE TABLE` statement in the
    /// rendered DDL.
    MissingTable,
    /// An expected enum type is not registered at all.
    MissingEnum,
    /// The enum type exists but its rendered member list differs from the
    /// expected one (membership or order).
    EnumOrderMismatch,
}

/// One verification discrepancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyIssue {
    pub severity: IssueSeverity,
    pub category: IssueCategory,
    /// The table or enum type name the issue is about.
    pub name: String,
    pub message: String,
}

impl VerifyIssue {
    pub fn missing_table(name: &str) -> Self {
        Self {
            severity: IssueSeverity::Error,
            category: IssueCategory::MissingTable,
            name: name.to_string(),
            message: format!("no CREATE TABLE statement rendered for declared table '{name}'"),
        }
    }

    pub fn missing_enum(name: &str) -> Self {
        Self {
            severity: IssueSeverity::Error,
            category: IssueCategory::MissingEnum,
            name: name.to_string(),
            message: format!("no CREATE TYPE statement rendered for expected enum type '{name}'"),
        }
    }

    pub fn enum_order_mismatch(name: &str, expected: &[String], actual: &[String]) -> Self {
        Self {
            severity: IssueSeverity::Error,
            category: IssueCategory::EnumOrderMismatch,
            name: name.to_string(),
            message: format!(
                "enum type '{name}' members differ: expected [{}], rendered [{}]",
                expected.join(", "),
                actual.join(", ")
            ),
        }
    }
}

/// The accumulated outcome of a verification run.
///
/// Discrepancies are collected exhaustively. A run reports every missing
/// name, never just the first, so one run is enough to see the full
/// damage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyReport {
    pub issues: Vec<VerifyIssue>,
    /// How many table names were checked.
    pub checked_tables: usize,
    /// How many enum types were checked.
    pub checked_enums: usize,
}

impl VerifyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: VerifyIssue) {
        self.issues.push(issue);
    }

    /// Fold another report into this one, summing the checked counts.
    pub fn merge(&mut self, other: VerifyReport) {
        self.checked_tables += other.checked_tables;
        self.checked_enums += other.checked_enums;
        self.issues.extend(other.issues);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn is_pass(&self) -> bool {
        self.error_count() == 0
    }

    /// Every table name that was expected but not rendered.
    pub fn missing_tables(&self) -> BTreeSet<String> {
        self.issues
            .iter()
            .filter(|issue| issue.category == IssueCategory::MissingTable)
            .map(|issue| issue.name.clone())
            .collect()
    }

    /// Every enum type that was missing or mis-ordered.
    pub fn missing_enums(&self) -> BTreeSet<String> {
        self.issues
            .iter()
            .filter(|issue| {
                matches!(
                    issue.category,
                    IssueCategory::MissingEnum | IssueCategory::EnumOrderMismatch
                )
            })
            .map(|issue| issue.name.clone())
            .collect()
    }
}

const REPORT_SCHEMA: &str = "radar-registry.verify-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// JSON payload wrapper for machine consumption of a report.
#[derive(Debug, Serialize)]
pub struct VerifyReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub passed: bool,
    pub checked_tables: usize,
    pub checked_enums: usize,
    pub issues: &'a [VerifyIssue],
}

impl<'a> VerifyReportPayload<'a> {
    pub fn new(report: &'a VerifyReport) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            passed: report.is_pass(),
            checked_tables: report.checked_tables,
            checked_enums: report.checked_enums,
            issues: &report.issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_passes() {
        let report = VerifyReport::new();
        assert!(report.is_pass());
        assert_eq!(report.error_count(), 0);
        assert!(report.missing_tables().is_empty());
    }

    #[test]
    fn missing_tables_accumulate() {
        let mut report = VerifyReport::new();
        report.push(VerifyIssue::missing_table("hospital"));
        report.push(VerifyIssue::missing_table("cohort"));
        assert!(!report.is_pass());
        assert_eq!(
            report.missing_tables().into_iter().collect::<Vec<_>>(),
            ["cohort", "hospital"]
        );
    }

    #[test]
    fn payload_serializes_with_schema_header() {
        let mut report = VerifyReport::new();
        report.checked_tables = 2;
        report.push(VerifyIssue::missing_table("hospital"));
        let payload = VerifyReportPayload::new(&report);
        let json = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(json["schema"], "radar-registry.verify-report");
        assert_eq!(json["passed"], false);
        assert_eq!(json["issues"][0]["category"], "missing_table");
    }
}
