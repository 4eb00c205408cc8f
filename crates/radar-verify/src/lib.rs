//! Verification harness for the registry schema.
//!
//! Two cooperating checks, both pure and database-free:
//!
//! - the **extractor** statically reads model source and collects the table
//!   names it declares, without evaluating any code;
//! - the **harness** renders the live catalog to DDL text and asserts every
//!   expected table and enum type actually appears, accumulating every miss
//!   into one report.

mod error;
mod extract;
mod harness;
mod report;

pub use error::{Result, VerifyError};
pub use extract::{TABLE_NAME_BINDING, extract_table_names};
pub use harness::{build_and_verify, verify_catalog_names, verify_enum_types, verify_tables};
pub use report::{IssueCategory, IssueSeverity, VerifyIssue, VerifyReport, VerifyReportPayload};
