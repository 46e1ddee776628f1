use anyhow::Result;
use pbix_scan::{
    BuiltinCatalog, DirectLake, ExportOutcome, ReportMeta, ReportScanResult, ScanSummary,
    scan_report,
};
use std::io;
use std::path::Path;
use std::process::ExitCode;

use crate::OutputFormat;
use crate::output::{json, text};

pub fn run(paths: &[String], workspace: &str, format: OutputFormat, quiet: bool) -> Result<ExitCode> {
    let catalog = BuiltinCatalog::standard();

    let mut results = Vec::with_capacity(paths.len());
    for path in paths {
        // An unreadable file is a failed export, not a process error: the
        // report still gets its result row.
        let outcome = match std::fs::read(path) {
            Ok(bytes) => ExportOutcome::Container(bytes),
            Err(e) => ExportOutcome::ExportFailed {
                reason: format!("failed to read {path}: {e}"),
            },
        };
        results.push(scan_report(
            meta_for_path(workspace, path),
            outcome,
            DirectLake::Unknown,
            &catalog,
        ));
    }

    let summary = ScanSummary::from_results(&results);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Text => text::write_scan_report(&mut handle, &results, &summary, quiet)?,
        OutputFormat::Json => json::write_scan_report(&mut handle, &results, &summary)?,
        OutputFormat::Jsonl => json::write_scan_report_lines(&mut handle, &results, &summary)?,
    }

    let any_custom = results.iter().any(ReportScanResult::has_custom_visuals);
    Ok(ExitCode::from(if any_custom { 1 } else { 0 }))
}

fn meta_for_path(workspace: &str, path: &str) -> ReportMeta {
    let report_name = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    ReportMeta {
        workspace_name: workspace.to_string(),
        report_name,
        report_id: path.to_string(),
    }
}
