use anyhow::Result;
use pbix_scan::{ReportScanResult, ScanSummary};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonScanReport<'a> {
    results: &'a [ReportScanResult],
    summary: &'a ScanSummary,
}

pub fn write_scan_report<W: Write>(
    w: &mut W,
    results: &[ReportScanResult],
    summary: &ScanSummary,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, &JsonScanReport { results, summary })?;
    writeln!(w)?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryLine<'a> {
    summary: &'a ScanSummary,
}

/// One JSON object per result row, then a final summary line.
pub fn write_scan_report_lines<W: Write>(
    w: &mut W,
    results: &[ReportScanResult],
    summary: &ScanSummary,
) -> Result<()> {
    for result in results {
        serde_json::to_writer(&mut *w, result)?;
        writeln!(w)?;
    }
    serde_json::to_writer(&mut *w, &SummaryLine { summary })?;
    writeln!(w)?;
    Ok(())
}
