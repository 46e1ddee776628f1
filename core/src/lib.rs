//! PBIX Scan: a library for identifying custom visuals in exported reports.
//!
//! This crate provides functionality for:
//! - Opening PBIX containers and reading the report layout part
//! - Decoding the layout's UTF-16LE text and parsing it as JSON
//! - Extracting visual containers in document order
//! - Classifying visual types against a built-in catalog
//! - Aggregating per-report outcomes into one scan result per report
//!
//! # Quick Start
//!
//! ```ignore
//! use pbix_scan::{BuiltinCatalog, DirectLake, ExportOutcome, ReportMeta, scan_report};
//!
//! let catalog = BuiltinCatalog::standard();
//! let bytes = std::fs::read("report.pbix")?;
//! let result = scan_report(
//!     ReportMeta {
//!         workspace_name: "Sales".into(),
//!         report_name: "Quarterly".into(),
//!         report_id: "d1f2...".into(),
//!     },
//!     ExportOutcome::Container(bytes),
//!     DirectLake::Unknown,
//!     &catalog,
//! );
//!
//! println!("{}: {:?}", result.report_name, result.visual_counts);
//! ```

mod catalog;
mod classify;
mod container;
pub mod error_codes;
mod layout;
mod layout_text;
mod scan;
mod visuals;

pub use catalog::BuiltinCatalog;
pub use classify::{VisualClassification, classify_visual_type, matches_custom_shape};
pub use container::{ContainerError, ContainerLimits, LAYOUT_PART_PATH, PbixContainer};
pub use layout::{LayoutDocument, LayoutParseError, parse_layout};
pub use layout_text::{DecodeError, decode_layout_text};
pub use scan::{
    ClassifiedVisual, DirectLake, ExportOutcome, LayoutScan, ReportMeta, ReportScanResult,
    ScanError, ScanMethod, ScanSummary, VisualCounts, scan_container, scan_report,
};
pub use visuals::{UNKNOWN_VISUAL_TYPE, VisualDescriptor, extract_visuals, section_count};
