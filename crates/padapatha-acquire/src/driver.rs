use crate::extract::Extractor;
use crate::fetch::{fetch_page, FetchOutcome};
use crate::output;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use padapatha_model::{Document, PageRange, PageRecord, RunManifest, SiteConfig, StopRecord};
use reqwest::Client;
use std::path::Path;

/// What to collect and how.
pub struct AcquireOptions<'a> {
    pub site: &'a SiteConfig,
    pub range: &'a PageRange,
    /// When set, each fetched page's raw HTML is written here.
    pub cache_dir: Option<&'a Path>,
    pub show_progress: bool,
}

/// Outcome of one run over a page range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages that returned 200, in fetch order.
    pub pages: Vec<PageRecord>,
    /// Paragraphs appended to the document during this run.
    pub paragraphs: usize,
    /// The page whose non-200 response ended the run early, if any.
    pub stopped_at: Option<StopRecord>,
}

impl RunSummary {
    pub fn pages_fetched(&self) -> usize {
        self.pages.len()
    }

    pub fn into_manifest(self, site: &SiteConfig, range: &PageRange, output: &str) -> RunManifest {
        RunManifest {
            base_url: site.base_url.clone(),
            volume: range.volume.clone(),
            requested_start: range.start,
            requested_end: range.end,
            fetched_at: chrono::Utc::now().to_rfc3339(),
            pages: self.pages,
            stopped_at: self.stopped_at,
            paragraphs: self.paragraphs,
            output: output.to_string(),
        }
    }
}

/// Fetch every page of `range` in order, appending its fragments to `document`.
///
/// Stops at the first page that does not return 200: later pages are never
/// requested, even if they exist. Transport errors abort the run.
pub async fn acquire_range(
    client: &Client,
    options: &AcquireOptions<'_>,
    document: &mut Document,
) -> Result<RunSummary> {
    let progress = progress_bar(options.range.len(), options.show_progress)?;
    acquire_with_progress(client, options, document, &progress).await
}

async fn acquire_with_progress(
    client: &Client,
    options: &AcquireOptions<'_>,
    document: &mut Document,
    progress: &ProgressBar,
) -> Result<RunSummary> {
    let extractor = Extractor::new(options.site)?;
    let mut summary = RunSummary::default();

    tracing::info!(
        volume = %options.range.volume,
        start = options.range.start,
        end = options.range.end,
        "Processing pages"
    );

    let result = collect_pages(client, options, &extractor, document, progress, &mut summary).await;
    // The bar must be gone before an error reaches the terminal
    progress.finish_and_clear();
    result?;

    tracing::info!(
        pages = summary.pages_fetched(),
        paragraphs = summary.paragraphs,
        truncated = summary.stopped_at.is_some(),
        "Finished processing pages"
    );

    Ok(summary)
}

async fn collect_pages(
    client: &Client,
    options: &AcquireOptions<'_>,
    extractor: &Extractor,
    document: &mut Document,
    progress: &ProgressBar,
    summary: &mut RunSummary,
) -> Result<()> {
    for page in options.range.pages() {
        let url = page.url(&options.site.base_url);
        progress.set_message(url.clone());

        let html = match fetch_page(client, &url).await? {
            FetchOutcome::Page(html) => html,
            FetchOutcome::Missing(status) => {
                progress.suspend(|| tracing::info!(index = page.index, "Document search ended"));
                summary.stopped_at = Some(StopRecord {
                    index: page.index,
                    url,
                    status: status.as_u16(),
                });
                break;
            }
        };

        if let Some(dir) = options.cache_dir {
            output::cache_html(dir, &page.file_name(), &html)?;
        }

        let fragments = extractor.extract(&html);
        progress.suspend(|| {
            tracing::debug!(url = %url, fragments = fragments.len(), "Extracted fragments")
        });

        summary.paragraphs += fragments.len();
        summary.pages.push(PageRecord {
            index: page.index,
            url,
            fragments: fragments.len(),
        });
        document.append_fragments(fragments);
        progress.inc(1);
    }

    Ok(())
}

fn progress_bar(len: u64, visible: bool) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Processing URLs [{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );
    Ok(pb)
}
