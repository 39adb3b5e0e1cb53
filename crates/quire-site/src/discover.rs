//! Content discovery by filesystem walking.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A markdown source and the HTML file generated from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageJob {
    /// Markdown file inside the content directory.
    pub source: PathBuf,
    /// Output path, mirroring `source` with an `.html` extension.
    pub dest: PathBuf,
}

/// Find every `.md` file under `content_dir`.
///
/// Hidden files and directories (names starting with `.`) are skipped.
/// Returns an empty Vec if the content directory doesn't exist. Jobs are
/// sorted by source path.
pub fn discover_pages(content_dir: &Path, output_dir: &Path) -> io::Result<Vec<PageJob>> {
    let mut jobs = Vec::new();
    if content_dir.is_dir() {
        scan_directory(content_dir, content_dir, output_dir, &mut jobs)?;
    }
    jobs.sort_by(|a, b| a.source.cmp(&b.source));
    tracing::debug!(
        content_dir = %content_dir.display(),
        count = jobs.len(),
        "Discovered pages"
    );
    Ok(jobs)
}

fn scan_directory(
    dir: &Path,
    content_dir: &Path,
    output_dir: &Path,
    jobs: &mut Vec<PageJob>,
) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type()?.is_dir() {
            scan_directory(&path, content_dir, output_dir, jobs)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let Ok(relative) = path.strip_prefix(content_dir) else {
                continue;
            };
            let dest = output_dir.join(relative).with_extension("html");
            jobs.push(PageJob { source: path, dest });
        }
    }
    Ok(())
}
