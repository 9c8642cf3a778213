use serde::{Deserialize, Serialize};

/// Provenance record written alongside the output document.
///
/// Captures what was requested, which pages were actually fetched, and
/// why the run stopped, so a truncated document can be explained later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub base_url: String,
    pub volume: String,
    pub requested_start: u32,
    pub requested_end: u32,
    pub fetched_at: String,
    pub pages: Vec<PageRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped_at: Option<StopRecord>,
    pub paragraphs: usize,
    pub output: String,
}

/// One successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub index: u32,
    pub url: String,
    pub fragments: usize,
}

/// The page whose non-200 response ended the search early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRecord {
    pub index: u32,
    pub url: String,
    pub status: u16,
}

impl RunManifest {
    /// Whether the run ended before reaching the end of the requested range.
    pub fn truncated(&self) -> bool {
        self.stopped_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_run_omits_stop_record() {
        let manifest = RunManifest {
            base_url: "https://example.com/".into(),
            volume: "01".into(),
            requested_start: 1,
            requested_end: 1,
            fetched_at: "2026-01-01T00:00:00+00:00".into(),
            pages: vec![PageRecord {
                index: 1,
                url: "https://example.com/01/01-001.htm".into(),
                fragments: 3,
            }],
            stopped_at: None,
            paragraphs: 3,
            output: "output.docx".into(),
        };

        let json = serde_json::to_value(&manifest).unwrap();
        assert!(json.get("stopped_at").is_none());
        assert_eq!(json["pages"][0]["fragments"], 3);
        assert!(!manifest.truncated());
    }

    #[test]
    fn test_truncated_run_records_status() {
        let json = r#"{
            "base_url": "https://example.com/",
            "volume": "01",
            "requested_start": 1,
            "requested_end": 5,
            "fetched_at": "2026-01-01T00:00:00+00:00",
            "pages": [],
            "stopped_at": { "index": 1, "url": "https://example.com/01/01-001.htm", "status": 404 },
            "paragraphs": 0,
            "output": "out.docx"
        }"#;
        let manifest: RunManifest = serde_json::from_str(json).unwrap();
        assert!(manifest.truncated());
        assert_eq!(manifest.stopped_at.unwrap().status, 404);
    }
}
