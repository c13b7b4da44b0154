use once_cell::unsync::OnceCell;
use ruff_source_file::{LineColumn, LineIndex, OneIndexed};
use ruff_text_size::{TextRange, TextSize};

/// Borrowed view over the source text with a lazily built line index.
pub struct Locator<'a> {
    contents: &'a str,
    index: OnceCell<LineIndex>,
}

impl<'a> Locator<'a> {
    pub fn new(contents: &'a str) -> Self {
        Self {
            contents,
            index: OnceCell::new(),
        }
    }

    fn to_index(&self) -> &LineIndex {
        self.index
            .get_or_init(|| LineIndex::from_source_text(self.contents))
    }

    /// 1-based line of the given byte offset.
    pub fn line_index(&self, offset: TextSize) -> OneIndexed {
        self.to_index().line_index(offset)
    }

    /// 1-based line and column of the given byte offset.
    pub fn line_column(&self, offset: TextSize) -> LineColumn {
        self.to_index().line_column(offset, self.contents)
    }

    pub fn slice(&self, range: TextRange) -> &'a str {
        &self.contents[range]
    }

    pub fn contents(&self) -> &'a str {
        self.contents
    }
}
