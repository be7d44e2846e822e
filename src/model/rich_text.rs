// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

/// Styled text as an ordered sequence of styled segments.
///
/// Segments are preserved exactly as constructed: adjacent segments with the
/// same style are never merged, so equality is equality of the segment
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichText {
    segments: Vec<RichTextSegment>,
}

impl RichText {
    pub fn new(segments: Vec<RichTextSegment>) -> Self {
        Self { segments }
    }

    /// Lifts a plain string into a single unstyled segment.
    pub fn of_plain_text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![RichTextSegment::of_plain_text(text)],
        }
    }

    pub fn segments(&self) -> &[RichTextSegment] {
        &self.segments
    }

    /// The concatenated text with all styling stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push_str(segment.text());
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichTextSegment {
    style: RichTextStyle,
    text: String,
}

impl RichTextSegment {
    pub fn new(style: RichTextStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    pub fn of_plain_text(text: impl Into<String>) -> Self {
        Self::new(RichTextStyle::default(), text)
    }

    pub fn style(&self) -> RichTextStyle {
        self.style
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RichTextStyle {
    bold: bool,
    italic: bool,
}

impl RichTextStyle {
    pub fn new(bold: bool, italic: bool) -> Self {
        Self { bold, italic }
    }

    pub fn bold(self) -> bool {
        self.bold
    }

    pub fn italic(self) -> bool {
        self.italic
    }
}

#[cfg(test)]
mod tests {
    use super::{RichText, RichTextSegment, RichTextStyle};

    #[test]
    fn of_plain_text_yields_single_unstyled_segment() {
        let text = RichText::of_plain_text("hello");
        assert_eq!(text.segments().len(), 1);
        assert_eq!(text.segments()[0].text(), "hello");
        assert!(!text.segments()[0].style().bold());
        assert!(!text.segments()[0].style().italic());
    }

    #[test]
    fn adjacent_segments_are_not_merged() {
        let split = RichText::new(vec![
            RichTextSegment::of_plain_text("a"),
            RichTextSegment::of_plain_text("b"),
        ]);
        let joined = RichText::of_plain_text("ab");
        assert_eq!(split.plain_text(), joined.plain_text());
        assert_ne!(split, joined);
    }

    #[test]
    fn equality_considers_style() {
        let bold = RichText::new(vec![RichTextSegment::new(
            RichTextStyle::new(true, false),
            "x",
        )]);
        assert_ne!(bold, RichText::of_plain_text("x"));
    }
}
