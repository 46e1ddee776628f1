//! Per-report scan pipeline and result aggregation.
//!
//! [`scan_container`] runs container → decode → parse → extract → classify
//! for one report and can fail at the report level. [`scan_report`] is the
//! total entry point: it folds any outcome, including terminal export
//! signals, into exactly one [`ReportScanResult`]. No error escapes it, so a
//! failure in one report never aborts a scan over many.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::BuiltinCatalog;
use crate::classify::{VisualClassification, classify_visual_type};
use crate::container::{ContainerError, PbixContainer};
use crate::layout::{LayoutParseError, parse_layout};
use crate::layout_text::{DecodeError, decode_layout_text};
use crate::visuals::{VisualDescriptor, extract_visuals, section_count};

/// Report-level failures. Any of these terminates one report's pipeline with
/// method `Failed`; per-container faults never surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error("container error: {0}")]
    Container(#[from] ContainerError),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("layout parse error: {0}")]
    Parse(#[from] LayoutParseError),
}

impl ScanError {
    pub fn code(&self) -> &'static str {
        match self {
            ScanError::Container(e) => e.code(),
            ScanError::Decode(e) => e.code(),
            ScanError::Parse(e) => e.code(),
        }
    }
}

/// Identifying metadata attached to a report's scan result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    pub workspace_name: String,
    pub report_name: String,
    pub report_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMethod {
    DirectExport,
    PageListingOnly,
    Failed,
}

impl ScanMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DirectExport => "Direct Export",
            Self::PageListingOnly => "Page Listing Only",
            Self::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectLake {
    Yes,
    No,
    Unknown,
}

impl DirectLake {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unknown => "Unknown",
        }
    }
}

/// Per-report input from the exporter collaborator: either container bytes
/// or a terminal signal that bypasses the pipeline.
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    /// An exported container buffer, consumed exactly once by the pipeline.
    Container(Vec<u8>),
    /// Export blocked at the platform level; page listing may still have
    /// been available.
    DirectLakeUnsupported { num_pages: Option<u32> },
    /// Page structure is known but visual-level detail is not.
    PageListingOnly { num_pages: u32 },
    /// Export failed outright.
    ExportFailed { reason: String },
}

/// Exact visual counts for a successfully scanned report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualCounts {
    pub total: u32,
    pub custom: u32,
}

/// One visual with its classification attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedVisual {
    pub descriptor: VisualDescriptor,
    pub classification: VisualClassification,
}

/// Full detail of one successfully scanned layout.
#[derive(Debug, Clone)]
pub struct LayoutScan {
    pub num_pages: u32,
    pub visuals: Vec<ClassifiedVisual>,
}

impl LayoutScan {
    pub fn counts(&self) -> VisualCounts {
        let custom = self
            .visuals
            .iter()
            .filter(|v| v.classification == VisualClassification::Custom)
            .count();
        VisualCounts {
            total: self.visuals.len() as u32,
            custom: custom as u32,
        }
    }
}

/// One result row per report, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportScanResult {
    pub workspace_name: String,
    pub report_name: String,
    pub report_id: String,
    pub method: ScanMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<u32>,
    pub is_direct_lake: DirectLake,
    /// `None` means counts were not computed for this report, distinct from
    /// a computed zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_counts: Option<VisualCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl ReportScanResult {
    pub fn total_visuals(&self) -> Option<u32> {
        self.visual_counts.map(|c| c.total)
    }

    pub fn custom_visuals(&self) -> Option<u32> {
        self.visual_counts.map(|c| c.custom)
    }

    pub fn has_custom_visuals(&self) -> bool {
        self.custom_visuals().is_some_and(|n| n > 0)
    }
}

/// Runs the full pipeline over one container buffer.
pub fn scan_container(
    bytes: Vec<u8>,
    catalog: &BuiltinCatalog,
) -> Result<LayoutScan, ScanError> {
    let mut container = PbixContainer::open_from_bytes(bytes)?;
    let layout_bytes = container.read_layout()?;
    let text = decode_layout_text(&layout_bytes)?;
    let doc = parse_layout(&text)?;

    let visuals = extract_visuals(&doc)
        .into_iter()
        .map(|descriptor| ClassifiedVisual {
            classification: classify_visual_type(&descriptor.declared_type, catalog),
            descriptor,
        })
        .collect();

    Ok(LayoutScan {
        num_pages: section_count(&doc) as u32,
        visuals,
    })
}

/// Folds one report's export outcome into exactly one result row.
///
/// `direct_lake` is the exporter's pre-supplied signal and is threaded
/// through unchanged, except for the `DirectLakeUnsupported` outcome, which
/// is itself the DirectLake signature and forces `Yes`.
pub fn scan_report(
    meta: ReportMeta,
    outcome: ExportOutcome,
    direct_lake: DirectLake,
    catalog: &BuiltinCatalog,
) -> ReportScanResult {
    let (method, num_pages, visual_counts, is_direct_lake, failure) = match outcome {
        ExportOutcome::Container(bytes) => match scan_container(bytes, catalog) {
            Ok(scan) => (
                ScanMethod::DirectExport,
                Some(scan.num_pages),
                Some(scan.counts()),
                direct_lake,
                None,
            ),
            Err(e) => (ScanMethod::Failed, None, None, direct_lake, Some(e.to_string())),
        },
        ExportOutcome::DirectLakeUnsupported { num_pages } => {
            let method = if num_pages.is_some() {
                ScanMethod::PageListingOnly
            } else {
                ScanMethod::Failed
            };
            (method, num_pages, None, DirectLake::Yes, None)
        }
        ExportOutcome::PageListingOnly { num_pages } => (
            ScanMethod::PageListingOnly,
            Some(num_pages),
            None,
            direct_lake,
            None,
        ),
        ExportOutcome::ExportFailed { reason } => {
            (ScanMethod::Failed, None, None, direct_lake, Some(reason))
        }
    };

    ReportScanResult {
        workspace_name: meta.workspace_name,
        report_name: meta.report_name,
        report_id: meta.report_id,
        method,
        num_pages,
        is_direct_lake,
        visual_counts,
        failure,
    }
}

/// Run-level reductions over a sequence of result rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub total_reports: usize,
    pub reports_with_custom_visuals: usize,
    pub direct_lake_reports: usize,
    pub successful_exports: usize,
}

impl ScanSummary {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a ReportScanResult>) -> Self {
        let mut summary = ScanSummary::default();
        for result in results {
            summary.total_reports += 1;
            if result.has_custom_visuals() {
                summary.reports_with_custom_visuals += 1;
            }
            if result.is_direct_lake == DirectLake::Yes {
                summary.direct_lake_reports += 1;
            }
            if result.method == ScanMethod::DirectExport {
                summary.successful_exports += 1;
            }
        }
        summary
    }
}
