use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use radar_ddl::{PgDialect, render_catalog};
use radar_model::SchemaCatalog;
use radar_schema::{build_catalog, expected_enums};
use radar_verify::{
    VerifyReport, VerifyReportPayload, verify_catalog_names, verify_enum_types, verify_tables,
};

use crate::cli::{TablesArgs, VerifyArgs};
use crate::summary::{print_tables, print_verify_summary};

fn load_catalog() -> Result<SchemaCatalog> {
    let catalog = build_catalog().context("failed to build the schema catalog")?;
    info!(
        tables = catalog.table_count(),
        enum_types = catalog.enum_type_count(),
        "catalog built"
    );
    Ok(catalog)
}

/// `ddl`: render the catalog and print it.
pub fn run_ddl() -> Result<()> {
    let catalog = load_catalog()?;
    println!("{}", render_catalog(&PgDialect, &catalog));
    Ok(())
}

/// `tables`: list registered tables.
pub fn run_tables(args: &TablesArgs) -> Result<()> {
    let catalog = load_catalog()?;
    if args.json {
        let names: Vec<&str> = catalog.tables().iter().map(|t| t.name.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        print_tables(&catalog);
    }
    Ok(())
}

/// `verify`: cross-check rendered DDL against declared names. Returns the
/// report so the caller can derive the exit code.
pub fn run_verify(args: &VerifyArgs) -> Result<VerifyReport> {
    let catalog = load_catalog()?;

    let mut report = VerifyReport::new();
    if args.sources.is_empty() {
        debug!("no sources given, using catalog self-report mode");
        report.merge(verify_catalog_names(&catalog));
    } else {
        for path in &args.sources {
            report.merge(verify_source(path, &catalog)?);
        }
    }
    report.merge(verify_enum_types(&expected_enums(), &catalog));

    info!(
        checked_tables = report.checked_tables,
        checked_enums = report.checked_enums,
        errors = report.error_count(),
        "verification finished"
    );

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&VerifyReportPayload::new(&report))?
        );
    } else {
        print_verify_summary(&report);
    }
    Ok(report)
}

fn verify_source(path: &Path, catalog: &SchemaCatalog) -> Result<VerifyReport> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model source {}", path.display()))?;
    let report = verify_tables(&source, catalog)
        .with_context(|| format!("failed to verify {}", path.display()))?;
    debug!(
        source = %path.display(),
        checked = report.checked_tables,
        missing = report.missing_tables().len(),
        "source verified"
    );
    Ok(report)
}
