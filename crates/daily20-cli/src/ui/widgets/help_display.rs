use daily20_evaluator::share_text::Tier;
use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BlockExt, Paragraph, Widget, Wrap},
};

use crate::ui::widgets::style;

/// How-to-play panel.
#[derive(Debug, Default)]
pub struct HelpDisplay<'a> {
    block: Option<Block<'a>>,
}

impl<'a> HelpDisplay<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self { block: Some(block) }
    }
}

fn tier_line(tier: Tier, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:>8} ", tier.to_string()), style::tier(tier)),
        Span::raw(format!(" {description}")),
    ])
}

impl Widget for HelpDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let lines = vec![
            Line::from("Numbers are revealed one at a time."),
            Line::from("Place each into an empty slot before"),
            Line::from("the next one appears."),
            Line::default(),
            Line::from("Lowest numbers go top-left,"),
            Line::from("highest bottom-right."),
            Line::default(),
            Line::from("Each slot scores by how far its number"),
            Line::from("is from its ideal position:"),
            tier_line(Tier::Perfect, "exact"),
            tier_line(Tier::Close, "within a quarter"),
            tier_line(Tier::Far, "within half"),
            tier_line(Tier::VeryFar, "further away"),
            Line::default(),
            Line::from("Tip: spread out early numbers to"),
            Line::from("leave space for middle values."),
        ];
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
