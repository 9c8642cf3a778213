use anyhow::{Context, Result};
use docx_rs::{Docx, Paragraph, Run};
use padapatha_model::{Document, RunManifest};
use std::fs;
use std::path::Path;

/// Write the document as a `.docx` file, one Word paragraph per paragraph.
pub fn write_docx(document: &Document, path: &Path) -> Result<()> {
    let docx = document
        .paragraphs
        .iter()
        .fold(Docx::new(), |docx, paragraph| {
            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(&paragraph.text)))
        });

    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    docx.build()
        .pack(file)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), paragraphs = document.len(), "Wrote document");
    Ok(())
}

/// Write the run manifest as pretty-printed JSON.
pub fn write_manifest(manifest: &RunManifest, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        pages = manifest.pages.len(),
        truncated = manifest.truncated(),
        "Wrote run manifest"
    );
    Ok(())
}

/// Cache a fetched page's raw HTML so it can be re-examined without
/// re-fetching. Creates `dir` if needed.
pub fn cache_html(dir: &Path, filename: &str, html: &str) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    let path = dir.join(filename);
    fs::write(&path, html).with_context(|| format!("Failed to cache {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = html.len(), "Cached raw HTML");
    Ok(())
}
