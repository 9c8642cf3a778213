use anyhow::Result;
use padapatha_model::SiteConfig;
use scraper::{ElementRef, Html, Selector};

/// Pulls fragments out of a page using the container/text markers of a
/// `SiteConfig`. Selectors are compiled once and reused for every page.
#[derive(Debug, Clone)]
pub struct Extractor {
    container: Selector,
    text: Selector,
}

impl Extractor {
    pub fn new(site: &SiteConfig) -> Result<Self> {
        Ok(Self {
            container: parse_selector(&site.container_selector())?,
            text: parse_selector(&site.text_selector())?,
        })
    }

    /// Extract one fragment per container element, in document order.
    ///
    /// Each fragment is the stripped text of every nested text element,
    /// joined with a single space. A container with no text elements
    /// yields an empty fragment. Malformed markup is parsed leniently.
    pub fn extract(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        document
            .select(&self.container)
            .map(|container| {
                container
                    .select(&self.text)
                    .map(stripped_text)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow::anyhow!("Invalid selector '{selector}': {e}"))
}

/// Every descendant text node trimmed, blanks dropped, the rest glued
/// together with no separator.
fn stripped_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
