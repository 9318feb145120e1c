use scrubber::{CsvParser, ScrubError, ScrubReport, Table};
use shared_types::ScrubResponse;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const KEPT_FILE_NAME: &str = "client_list_filtered.csv";
pub const REMOVED_FILE_NAME: &str = "removed_rows.csv";

/// Where a run's result files ended up
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub kept: PathBuf,
    pub removed: PathBuf,
}

pub fn render_csv(table: &Table) -> scrubber::Result<String> {
    let bytes = CsvParser::new().write_table(table)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn build_response(run_id: String, report: &ScrubReport) -> scrubber::Result<ScrubResponse> {
    Ok(ScrubResponse {
        run_id,
        message: report.message(),
        summary: report.summary.clone(),
        kept_csv: render_csv(&report.kept)?,
        removed_csv: render_csv(&report.removed)?,
    })
}

/// Write both result tables into `dir`.
///
/// Both files are fully written to temp files next to their targets before
/// either is moved into place. If the second move fails the first result is
/// removed again, so a failed run never leaves one new file beside a stale or
/// missing partner.
pub fn write_outputs(report: &ScrubReport, dir: &Path) -> scrubber::Result<OutputPaths> {
    let parser = CsvParser::new();
    let kept = parser.write_table(&report.kept)?;
    let removed = parser.write_table(&report.removed)?;

    std::fs::create_dir_all(dir)?;

    let staged_kept = stage(dir, &kept)?;
    let staged_removed = stage(dir, &removed)?;

    let paths = OutputPaths {
        kept: dir.join(KEPT_FILE_NAME),
        removed: dir.join(REMOVED_FILE_NAME),
    };

    staged_kept
        .persist(&paths.kept)
        .map_err(|e| ScrubError::Io(e.error))?;

    if let Err(e) = staged_removed.persist(&paths.removed) {
        if let Err(cleanup) = std::fs::remove_file(&paths.kept) {
            tracing::warn!("Failed to remove {}: {}", paths.kept.display(), cleanup);
        }
        return Err(ScrubError::Io(e.error));
    }

    Ok(paths)
}

fn stage(dir: &Path, content: &[u8]) -> scrubber::Result<NamedTempFile> {
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content)?;
    staged.flush()?;
    Ok(staged)
}
