pub use self::{
    grid_display::*, help_display::*, key_binding_display::*, number_display::*,
    results_display::*,
};

mod grid_display;
mod help_display;
mod key_binding_display;
mod number_display;
mod results_display;

pub mod color {
    use ratatui::style::Color;

    pub const GREEN: Color = Color::Rgb(34, 197, 94);
    pub const YELLOW: Color = Color::Rgb(234, 179, 8);
    pub const ORANGE: Color = Color::Rgb(249, 115, 22);
    pub const RED: Color = Color::Rgb(239, 68, 68);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use daily20_evaluator::share_text::Tier;
    use ratatui::style::{Color, Modifier, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const TITLE: Style = Style::new().fg(color::WHITE).add_modifier(Modifier::BOLD);
    pub const BORDER: Style = Style::new().fg(color::GRAY);
    pub const CURSOR: Style = Style::new().fg(color::CYAN).add_modifier(Modifier::BOLD);
    pub const EMPTY_SLOT: Style = Style::new().fg(color::GRAY);

    pub const PERFECT: Style = fg_bg(color::BLACK, color::GREEN);
    pub const CLOSE: Style = fg_bg(color::BLACK, color::YELLOW);
    pub const FAR: Style = fg_bg(color::BLACK, color::ORANGE);
    pub const VERY_FAR: Style = fg_bg(color::WHITE, color::RED);

    pub const fn tier(tier: Tier) -> Style {
        match tier {
            Tier::Perfect => PERFECT,
            Tier::Close => CLOSE,
            Tier::Far => FAR,
            Tier::VeryFar => VERY_FAR,
        }
    }
}
