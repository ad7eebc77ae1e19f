//! Document model: raw text plus the section map every phase reads.

pub mod sections;

pub use sections::SectionMap;

/// An immutable input document.
///
/// Holds the raw text and a lower-cased copy used by the keyword
/// heuristics. Lines are split on `\n` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    lowercase: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lowercase = text.to_lowercase();
        Self { text, lowercase }
    }

    /// The raw text, exactly as supplied.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lower-cased text.
    pub fn lowercase(&self) -> &str {
        &self.lowercase
    }

    /// Line-split form of the text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
