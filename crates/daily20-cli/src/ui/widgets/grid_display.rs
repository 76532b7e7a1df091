use daily20_engine::PlacementGrid;
use daily20_evaluator::{
    score::ScoreVector,
    share_text::{ROW_WIDTH, Tier},
};
use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use crate::ui::widgets::style;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// The placement grid, [`ROW_WIDTH`] slots per row, lowest slot top-left.
#[derive(Debug)]
pub struct GridDisplay<'a> {
    grid: &'a PlacementGrid,
    cursor: Option<usize>,
    scores: Option<&'a ScoreVector>,
    revealed: usize,
}

impl<'a> GridDisplay<'a> {
    pub fn new(grid: &'a PlacementGrid) -> Self {
        Self {
            grid,
            cursor: None,
            scores: None,
            revealed: 0,
        }
    }

    pub fn cursor(self, slot: usize) -> Self {
        Self {
            cursor: Some(slot),
            ..self
        }
    }

    /// Colours the first `revealed` slots by their score tier.
    pub fn reveal(self, scores: &'a ScoreVector, revealed: usize) -> Self {
        Self {
            scores: Some(scores),
            revealed,
            ..self
        }
    }

    fn rows(&self) -> usize {
        self.grid.len().div_ceil(ROW_WIDTH)
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        CELL_WIDTH * ROW_WIDTH as u16
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        CELL_HEIGHT * self.rows() as u16
    }

    fn tier(&self, slot: usize) -> Option<Tier> {
        let scores = self.scores?;
        (slot < self.revealed).then(|| Tier::from_score(scores[slot]))
    }

    fn render_cell(&self, slot: usize, area: Rect, buf: &mut Buffer) {
        let border_style = if self.cursor == Some(slot) {
            style::CURSOR
        } else {
            style::BORDER
        };
        let (text, text_style) = match (self.grid.slot(slot), self.tier(slot)) {
            (Some(n), Some(tier)) => (n.to_string(), style::tier(tier)),
            (Some(n), None) => (n.to_string(), style::DEFAULT),
            (None, Some(tier)) => (String::new(), style::tier(tier)),
            (None, None) => ("·".to_owned(), style::EMPTY_SLOT),
        };
        let block = Block::bordered()
            .title(Line::from((slot + 1).to_string()))
            .border_style(border_style);
        Paragraph::new(text)
            .centered()
            .style(text_style)
            .block(block)
            .render(area, buf);
    }
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let row_areas = Layout::vertical(vec![Constraint::Length(CELL_HEIGHT); self.rows()])
            .split(area);
        for (row, row_area) in row_areas.iter().enumerate() {
            let cell_areas =
                Layout::horizontal([Constraint::Length(CELL_WIDTH); ROW_WIDTH]).split(*row_area);
            for (col, cell_area) in cell_areas.iter().enumerate() {
                let slot = row * ROW_WIDTH + col;
                if slot >= self.grid.len() {
                    break;
                }
                self.render_cell(slot, *cell_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_grid_size() {
        let grid = PlacementGrid::empty(20);
        let display = GridDisplay::new(&grid);
        assert_eq!(display.width(), 28);
        assert_eq!(display.height(), 15);
    }

    #[test]
    fn test_only_revealed_slots_have_tiers() {
        let grid = PlacementGrid::from_slots(vec![Some(1), Some(2), Some(3)]);
        let scores = ScoreVector::new(vec![1.0, 0.5, 0.0]);
        let display = GridDisplay::new(&grid).reveal(&scores, 2);
        assert_eq!(display.tier(0), Some(Tier::Perfect));
        assert_eq!(display.tier(1), Some(Tier::Far));
        assert_eq!(display.tier(2), None);
    }

    #[test]
    fn test_renders_numbers_into_buffer() {
        let grid = PlacementGrid::from_slots(vec![Some(954), None]);
        let display = GridDisplay::new(&grid);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        let middle_row = (0..area.width)
            .map(|x| buf[(x, 1)].symbol())
            .collect::<String>();
        assert!(middle_row.contains("954"));
    }
}
