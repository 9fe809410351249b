use std::borrow::Cow;

use ratatui::text::{Line, Text};

use crate::domain::text;

/// Paragraph text word-wrapped to a width and cut to a height
#[derive(Clone, Debug, Default)]
pub struct ShrinkText<'a> {
    pub content: Cow<'a, str>,
    pub width: usize,
    pub max_height: usize,
}

impl<'a> ShrinkText<'a> {
    pub fn new<T>(content: T, width: usize, max_height: usize) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Self {
            content: content.into(),
            width,
            max_height,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        text::truncate_lines(text::wrap_words(&self.content, self.width), self.max_height)
    }
}

impl<'a> From<ShrinkText<'a>> for Text<'a> {
    fn from(value: ShrinkText) -> Self {
        Text::from(value.lines().into_iter().map(Line::from).collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_shrink_text_into_text() {
        let text: Text = ShrinkText::new("The best way to predict the future", 12, 2).into();

        assert_eq!(
            text,
            Text::from(vec![Line::from("The best way"), Line::from("…")])
        );
    }
}
