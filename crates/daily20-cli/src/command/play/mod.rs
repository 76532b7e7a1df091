use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use daily20_engine::{GameSession, today_utc};

use crate::{command::play::app::PlayApp, model::recording::RecordedGame, tui::Runtime};

mod app;

const DEFAULT_RECORD_DIR: &str = "./data/recordings/";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Puzzle date (YYYY-MM-DD, default: today in UTC)
    #[clap(long, value_parser = daily20_engine::parse_puzzle_date)]
    date: Option<NaiveDate>,
    /// Save the game recording to a file when the session ends
    #[clap(long)]
    save_recording: bool,
    /// Directory to save recording files
    #[clap(long, default_value = DEFAULT_RECORD_DIR)]
    record_dir: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            date: None,
            save_recording: false,
            record_dir: PathBuf::from(DEFAULT_RECORD_DIR),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        date,
        save_recording,
        record_dir,
    } = arg;

    let date = date.unwrap_or_else(today_utc);
    let session = GameSession::daily(date)?;
    tracing::info!(%date, game_number = session.game_number(), "starting game");

    let mut app = PlayApp::new(session);
    Runtime::new().run(&mut app)?;

    let session = app.into_session();
    if *save_recording && !session.placements().is_empty() {
        let recording = RecordedGame::from_session(&session, Utc::now());
        let path = recording.save(record_dir)?;
        eprintln!("Saved recording to {}", path.display());
    }

    Ok(())
}
