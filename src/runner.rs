use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::initials::InitialsDeriver;
use crate::models::{Color, CompanyEntry};
use crate::render::BadgeRenderer;

/// Outcome counts for one generation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Run one idempotent generation pass over `entries`.
///
/// The output directory is created if missing. Entries whose file already
/// exists are skipped unconditionally. A failure in one entry is reported
/// and counted; the remaining entries still run.
pub fn run(entries: &[CompanyEntry], out_dir: &Path) -> Result<RunSummary> {
    fs::create_dir_all(out_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create output directory {:?}: {}", out_dir, e))?;

    let deriver = InitialsDeriver::new();
    let renderer = BadgeRenderer::new();
    let mut summary = RunSummary::default();

    for entry in entries {
        let dest = out_dir.join(&entry.filename);
        if dest.exists() {
            println!("Skipped (exists): {}", entry.filename);
            summary.skipped += 1;
            continue;
        }
        match generate_one(&deriver, &renderer, entry, &dest) {
            Ok(()) => {
                println!("Created: {}", entry.filename);
                summary.created += 1;
            }
            Err(e) => {
                eprintln!("Failed: {}: {:#}", entry.filename, e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

fn generate_one(
    deriver: &InitialsDeriver,
    renderer: &BadgeRenderer,
    entry: &CompanyEntry,
    dest: &Path,
) -> Result<()> {
    let initials = deriver.derive(&entry.display_name)?;
    let color = Color::try_from(entry.color.as_str())?;
    renderer.materialize(&initials, color, dest)
}
