use anyhow::{Context, Result};
use pbix_scan::{BuiltinCatalog, ClassifiedVisual, scan_container};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

pub fn run(path: &str) -> Result<ExitCode> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read report export: {}", path))?;

    let catalog = BuiltinCatalog::standard();
    let scan = scan_container(bytes, &catalog)
        .with_context(|| format!("Failed to scan report export: {}", path))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let filename = Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| path.into());

    writeln!(handle, "Report: {}", filename)?;
    writeln!(handle, "Pages: {}", scan.num_pages)?;

    let mut section: Option<usize> = None;
    for visual in &scan.visuals {
        if section != Some(visual.descriptor.section_index) {
            section = Some(visual.descriptor.section_index);
            writeln!(handle, "  Page \"{}\":", page_label(visual))?;
        }
        let name = visual.descriptor.visual_name.as_deref().unwrap_or("Unnamed");
        writeln!(
            handle,
            "    - \"{}\" ({}) [{}]",
            name,
            visual.descriptor.declared_type,
            visual.classification.as_str()
        )?;
    }

    let counts = scan.counts();
    writeln!(handle)?;
    writeln!(
        handle,
        "Visuals: {} total, {} custom",
        counts.total, counts.custom
    )?;

    Ok(ExitCode::from(0))
}

fn page_label(visual: &ClassifiedVisual) -> String {
    visual
        .descriptor
        .section_name
        .clone()
        .unwrap_or_else(|| format!("Page {}", visual.descriptor.section_index + 1))
}
