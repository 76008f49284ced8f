use crate::render::{file_stem, RenderedCatalogue};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub const COMBINED_FILE_NAME: &str = "pokémon box order.md";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    PerCatalogue,
    Combined,
}

#[derive(Debug, Default)]
pub struct EmitReport {
    pub removed: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

// Every Markdown file in `dir` is previous output.
fn clear_previous(dir: &Path, report: &mut EmitReport) -> anyhow::Result<()> {
    let listing = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list output directory {}", dir.display()))?;
    for item in listing {
        let path = item
            .with_context(|| format!("Failed to list output directory {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            match std::fs::remove_file(&path) {
                Ok(()) => report.removed.push(path),
                Err(e) => warn!(path = %path.display(), error = %e, "could not remove old output"),
            }
        }
    }
    Ok(())
}

fn write_file(path: PathBuf, contents: &str, report: &mut EmitReport) {
    match std::fs::write(&path, contents) {
        Ok(()) => {
            info!(path = %path.display(), "wrote catalogue");
            report.written.push(path);
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to write catalogue");
            report.failed.push((path, e.to_string()));
        }
    }
}

/// Replaces the Markdown output in `dir`. A failed write does not stop the
/// remaining ones; failures are listed in the report.
pub fn emit(dir: &Path, rendered: &[RenderedCatalogue], layout: Layout) -> anyhow::Result<EmitReport> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let mut report = EmitReport::default();
    clear_previous(dir, &mut report)?;
    match layout {
        Layout::PerCatalogue => {
            for (index, catalogue) in rendered.iter().enumerate() {
                let name = format!("{:02} - {}.md", index + 1, file_stem(&catalogue.label));
                write_file(dir.join(name), &catalogue.to_markdown(), &mut report);
            }
        }
        Layout::Combined => {
            let contents = rendered
                .iter()
                .map(RenderedCatalogue::to_markdown)
                .collect::<Vec<_>>()
                .join("\n");
            write_file(dir.join(COMBINED_FILE_NAME), &contents, &mut report);
        }
    }
    Ok(report)
}
