use serde::{Deserialize, Serialize};

/// An in-memory document: an ordered list of paragraphs that only grows.
///
/// Built up page by page during a run and written out once at the end
/// (see `padapatha_acquire::output::write_docx`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

/// A single paragraph of plain text. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.paragraphs.push(Paragraph { text: text.into() });
    }

    /// Append one page's fragments as paragraphs, in order.
    ///
    /// Empty fragments still become (empty) paragraphs.
    pub fn append_fragments<I>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = String>,
    {
        for fragment in fragments {
            self.add_paragraph(fragment);
        }
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut doc = Document::new();
        doc.append_fragments(vec!["a b".to_string(), "c d".to_string()]);
        doc.append_fragments(vec!["e".to_string()]);

        let texts: Vec<&str> = doc.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["a b", "c d", "e"]);
    }

    #[test]
    fn test_empty_fragments_are_kept() {
        let mut doc = Document::new();
        doc.append_fragments(vec![String::new(), "x".to_string(), String::new()]);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.paragraphs[0].text, "");
        assert_eq!(doc.paragraphs[2].text, "");
    }

    #[test]
    fn test_no_fragments_appends_nothing() {
        let mut doc = Document::new();
        doc.add_paragraph("first");
        doc.append_fragments(Vec::<String>::new());
        assert_eq!(doc.len(), 1);
    }
}
