use anyhow::Result;
use pbix_scan::{ReportScanResult, ScanSummary};
use std::io::Write;

pub fn write_scan_report<W: Write>(
    w: &mut W,
    results: &[ReportScanResult],
    summary: &ScanSummary,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        for result in results {
            writeln!(w, "{}", render_row(result))?;
        }
        if !results.is_empty() {
            writeln!(w)?;
        }
    }
    write_summary(w, summary)?;
    Ok(())
}

fn render_row(result: &ReportScanResult) -> String {
    let pages = match result.num_pages {
        Some(n) => n.to_string(),
        None => "unknown".to_string(),
    };
    let visuals = match result.visual_counts {
        Some(counts) => format!("{} ({} custom)", counts.total, counts.custom),
        None => "not computed".to_string(),
    };
    let mut row = format!(
        "Report \"{}\" ({}): method={}, pages={}, directlake={}, visuals={}",
        result.report_name,
        result.workspace_name,
        result.method.as_str(),
        pages,
        result.is_direct_lake.as_str(),
        visuals,
    );
    if let Some(reason) = &result.failure {
        row.push_str(&format!(" [{}]", reason));
    }
    row
}

fn write_summary<W: Write>(w: &mut W, summary: &ScanSummary) -> Result<()> {
    writeln!(w, "SUMMARY:")?;
    writeln!(w, "  Total reports analyzed: {}", summary.total_reports)?;
    writeln!(
        w,
        "  Reports with custom visuals: {}",
        summary.reports_with_custom_visuals
    )?;
    writeln!(w, "  DirectLake reports: {}", summary.direct_lake_reports)?;
    writeln!(w, "  Successful exports: {}", summary.successful_exports)?;
    Ok(())
}
