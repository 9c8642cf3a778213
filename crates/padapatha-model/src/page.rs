use serde::{Deserialize, Serialize};

/// One page on the source site, addressed by a volume identifier and a
/// numeric index (e.g., volume "01", index 7 → `01/01-007.htm`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageId {
    pub volume: String,
    pub index: u32,
}

impl PageId {
    pub fn new(volume: impl Into<String>, index: u32) -> Self {
        Self {
            volume: volume.into(),
            index,
        }
    }

    /// The index zero-padded to at least three digits ("007", "100", "1234").
    pub fn padded_index(&self) -> String {
        format!("{:03}", self.index)
    }

    /// File name of the page without the directory part, e.g. `01-007.htm`.
    pub fn file_name(&self) -> String {
        format!("{}-{}.htm", self.volume, self.padded_index())
    }

    /// Full page URL. `base_url` must end with `/` (see `SiteConfig`).
    pub fn url(&self, base_url: &str) -> String {
        format!("{base_url}{}/{}", self.volume, self.file_name())
    }
}

/// An inclusive range of page indices within one volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub volume: String,
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    pub fn new(volume: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            volume: volume.into(),
            start,
            end,
        }
    }

    /// Number of pages the range spans; zero when `start > end`.
    pub fn len(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            u64::from(self.end - self.start) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pages in ascending index order.
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        (self.start..=self.end).map(move |index| PageId::new(self.volume.as_str(), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://sri-aurobindo.co.in/workings/matherials/rigveda/";

    #[test]
    fn test_padded_index() {
        assert_eq!(PageId::new("01", 7).padded_index(), "007");
        assert_eq!(PageId::new("01", 42).padded_index(), "042");
        assert_eq!(PageId::new("01", 100).padded_index(), "100");
        assert_eq!(PageId::new("01", 1234).padded_index(), "1234");
    }

    #[test]
    fn test_url_embeds_volume_twice() {
        let page = PageId::new("01", 7);
        assert_eq!(
            page.url(BASE),
            "https://sri-aurobindo.co.in/workings/matherials/rigveda/01/01-007.htm"
        );
        assert_eq!(page.file_name(), "01-007.htm");
    }

    #[test]
    fn test_range_pages_ascending() {
        let range = PageRange::new("10", 98, 101);
        let indices: Vec<u32> = range.pages().map(|p| p.index).collect();
        assert_eq!(indices, vec![98, 99, 100, 101]);
        assert!(range.pages().all(|p| p.volume == "10"));
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn test_single_page_range() {
        let range = PageRange::new("02", 5, 5);
        assert_eq!(range.len(), 1);
        assert_eq!(range.pages().count(), 1);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = PageRange::new("01", 5, 4);
        assert!(range.is_empty());
        assert_eq!(range.pages().count(), 0);
    }

    #[test]
    fn test_range_up_to_u32_max() {
        let range = PageRange::new("01", u32::MAX - 1, u32::MAX);
        assert_eq!(range.len(), 2);
        assert_eq!(range.pages().count(), 2);
    }
}
