use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use daily20_engine::GameSession;
use daily20_evaluator::{placement_evaluator, score::Evaluation, share_text::ROW_WIDTH};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::Style,
    text::{Line, Text},
    widgets::Block,
};

use crate::{
    tui::{App, Runtime},
    ui::widgets::{
        GridDisplay, HelpDisplay, KeyBinding, KeyBindingDisplay, NumberDisplay, ResultsDisplay,
        color, style,
    },
};

const REVEAL_INTERVAL: Duration = Duration::from_millis(150);
const SIDE_PANEL_WIDTH: u16 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
enum Phase {
    Placing,
    /// Slots below `revealed` show their score colour.
    Revealing {
        revealed: usize,
    },
    Finished,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    cursor: usize,
    phase: Phase,
    evaluation: Option<Evaluation>,
    show_help: bool,
    status: Option<String>,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: 0,
            phase: Phase::Placing,
            evaluation: None,
            show_help: true,
            status: None,
            is_exiting: false,
        }
    }

    pub fn into_session(self) -> GameSession {
        self.session
    }

    fn slot_count(&self) -> usize {
        self.session.state().grid().len()
    }

    fn move_cursor(&mut self, direction: Direction) {
        let (row, col) = (self.cursor / ROW_WIDTH, self.cursor % ROW_WIDTH);
        let target = match direction {
            Direction::Left => (col > 0).then(|| self.cursor - 1),
            Direction::Right => (col + 1 < ROW_WIDTH).then(|| self.cursor + 1),
            Direction::Up => (row > 0).then(|| self.cursor - ROW_WIDTH),
            Direction::Down => Some(self.cursor + ROW_WIDTH),
        };
        if let Some(target) = target.filter(|t| *t < self.slot_count()) {
            self.cursor = target;
        }
    }

    fn place(&mut self, runtime: &mut Runtime) {
        match self.session.try_place(self.cursor) {
            Ok(_) => {
                self.status = None;
                if self.session.is_complete() {
                    self.finish(runtime);
                } else if let Some(nearest) = self
                    .session
                    .state()
                    .grid()
                    .empty_slots()
                    .min_by_key(|slot| slot.abs_diff(self.cursor))
                {
                    self.cursor = nearest;
                }
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    fn finish(&mut self, runtime: &mut Runtime) {
        let state = self.session.state();
        let scores = placement_evaluator::evaluate(state.grid(), state.sequence());
        let evaluation = Evaluation::new(self.session.game_number(), scores);
        tracing::info!(
            summary = evaluation.summary_score.value(),
            exact_matches = evaluation.exact_matches,
            "game complete"
        );
        self.evaluation = Some(evaluation);
        self.show_help = false;
        self.phase = Phase::Revealing { revealed: 0 };
        runtime.set_tick_interval(Some(REVEAL_INTERVAL));
    }

    fn skip_reveal(&mut self, runtime: &mut Runtime) {
        self.phase = Phase::Finished;
        runtime.set_tick_interval(None);
    }

    fn revealed(&self) -> usize {
        match self.phase {
            Phase::Placing => 0,
            Phase::Revealing { revealed } => revealed,
            Phase::Finished => self.slot_count(),
        }
    }

    fn key_bindings(&self) -> &'static [KeyBinding<'static>] {
        match self.phase {
            Phase::Placing => &[
                (&["←↑↓→", "hjkl"], "Select"),
                (&["Enter", "Space"], "Place"),
                (&["?"], "Help"),
                (&["q"], "Quit"),
            ],
            Phase::Revealing { .. } => &[(&["Enter"], "Skip"), (&["q"], "Quit")],
            Phase::Finished => &[(&["q"], "Quit")],
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(None);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) {
        let Some(key) = event
            .as_key_event()
            .filter(|key| key.kind == KeyEventKind::Press)
        else {
            return;
        };
        let is_placing = self.phase.is_placing();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            KeyCode::Left | KeyCode::Char('h') if is_placing => self.move_cursor(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') if is_placing => {
                self.move_cursor(Direction::Right);
            }
            KeyCode::Up | KeyCode::Char('k') if is_placing => self.move_cursor(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') if is_placing => self.move_cursor(Direction::Down),
            KeyCode::Enter | KeyCode::Char(' ') if is_placing => self.place(runtime),
            KeyCode::Enter if self.phase.is_revealing() => self.skip_reveal(runtime),
            KeyCode::Char('?') if is_placing => self.show_help = !self.show_help,
            _ => {}
        }
    }

    fn update(&mut self, runtime: &mut Runtime) {
        if let Phase::Revealing { revealed } = self.phase {
            let revealed = revealed + 1;
            if revealed >= self.slot_count() {
                self.skip_reveal(runtime);
            } else {
                self.phase = Phase::Revealing { revealed };
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let state = self.session.state();
        let grid = {
            let widget = GridDisplay::new(state.grid());
            let widget = match &self.evaluation {
                Some(evaluation) => widget.reveal(&evaluation.scores, self.revealed()),
                None => widget,
            };
            if self.phase.is_placing() {
                widget.cursor(self.cursor)
            } else {
                widget
            }
        };
        let number = NumberDisplay::new(state.current_number(), state.remaining());
        let title = Text::from(Line::from(format!(
            "D20 #{}  {}",
            self.session.game_number(),
            self.session.date()
        )))
        .style(style::TITLE)
        .centered();
        let status = Text::from(self.status.clone().unwrap_or_default())
            .style(Style::new().fg(color::RED))
            .centered();
        let keys = KeyBindingDisplay::new(self.key_bindings());

        let [title_area, main_area, status_area, keys_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(number.height() + grid.height() + 1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let show_side_panel = self.phase.is_finished() || self.show_help;
        let [left_column, side_area] = Layout::horizontal([
            Constraint::Length(grid.width()),
            Constraint::Length(if show_side_panel { SIDE_PANEL_WIDTH } else { 0 }),
        ])
        .flex(Flex::Center)
        .spacing(2)
        .areas(main_area);

        let [number_area, _, grid_area] = Layout::vertical([
            Constraint::Length(number.height()),
            Constraint::Length(1),
            Constraint::Length(grid.height()),
        ])
        .areas(left_column);

        frame.render_widget(title, title_area);
        frame.render_widget(number, number_area);
        frame.render_widget(grid, grid_area);
        frame.render_widget(status, status_area);
        frame.render_widget(keys, keys_area);

        if self.phase.is_finished()
            && let Some(evaluation) = &self.evaluation
        {
            let results = ResultsDisplay::new(evaluation)
                .block(Block::bordered().title(Line::from("RESULTS").centered()));
            frame.render_widget(results, side_area);
        } else if self.show_help {
            let help = HelpDisplay::new()
                .block(Block::bordered().title(Line::from("HOW TO PLAY").centered()));
            frame.render_widget(help, side_area);
        }
    }
}
