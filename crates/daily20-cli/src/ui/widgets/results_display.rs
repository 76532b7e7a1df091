use daily20_evaluator::score::Evaluation;
use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BlockExt, Paragraph, Widget},
};

use crate::ui::widgets::style;

/// Final result: exact matches, summary score and the share text.
#[derive(Debug)]
pub struct ResultsDisplay<'a> {
    evaluation: &'a Evaluation,
    block: Option<Block<'a>>,
}

impl<'a> ResultsDisplay<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Self {
        Self {
            evaluation,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let eval = self.evaluation;
        let mut lines = vec![
            Line::from(vec![
                Span::raw("Numbers in sequence: "),
                Span::styled(format!("{}/{}", eval.exact_matches, eval.total), style::TITLE),
            ]),
            Line::from(vec![
                Span::raw("Score: "),
                Span::styled(eval.summary_score.to_string(), style::TITLE),
            ]),
            Line::default(),
        ];
        lines.extend(eval.share_text().lines().map(|l| Line::from(l.to_owned())));
        lines
    }
}

impl Widget for ResultsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        Paragraph::new(Text::from(self.lines()))
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use daily20_evaluator::score::ScoreVector;

    use super::*;

    #[test]
    fn test_lines_include_share_text() {
        let evaluation = Evaluation::new(5, ScoreVector::new(vec![1.0; 4]));
        let lines = ResultsDisplay::new(&evaluation)
            .lines()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                "Numbers in sequence: 4/4",
                "Score: 100/100",
                "",
                "D20 #5",
                "Score: 100/100",
                "",
                "🟩🟩🟩🟩",
            ]
        );
    }
}
