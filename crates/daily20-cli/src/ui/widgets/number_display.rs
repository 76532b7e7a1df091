use ratatui::{
    prelude::{Buffer, Rect},
    style::Modifier,
    text::{Line, Text},
    widgets::{Block, Paragraph, Widget},
};

use crate::ui::widgets::style;

/// The number waiting to be placed.
#[derive(Debug)]
pub struct NumberDisplay {
    current: Option<u16>,
    remaining: usize,
}

impl NumberDisplay {
    pub fn new(current: Option<u16>, remaining: usize) -> Self {
        Self { current, remaining }
    }

    pub fn height(&self) -> u16 {
        3
    }

    fn label(&self) -> String {
        self.current
            .map_or_else(|| "Game Complete".to_owned(), |n| n.to_string())
    }
}

impl Widget for NumberDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let title = match self.current {
            Some(_) => format!("NUMBER ({} left)", self.remaining),
            None => "NUMBER".to_owned(),
        };
        let block = Block::bordered()
            .title(Line::from(title).centered())
            .border_style(style::BORDER);
        Paragraph::new(Text::from(self.label()))
            .centered()
            .style(style::DEFAULT.add_modifier(Modifier::BOLD))
            .block(block)
            .render(area, buf);
    }
}
