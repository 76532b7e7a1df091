use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::util::{self, LogTarget};

use self::{evaluate::EvaluateArg, numbers::NumbersArg, play::PlayArg};

mod evaluate;
mod numbers;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug output
    #[clap(long, short, global = true)]
    verbose: bool,
    /// Write logs to this file instead of stderr (required to see logs while playing)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the daily puzzle in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Print a day's puzzle numbers as JSON
    Numbers(#[clap(flatten)] NumbersArg),
    /// Re-check a saved game recording and print its result
    Evaluate(#[clap(flatten)] EvaluateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or(Mode::Play(PlayArg::default()));

    let log_target = match (&args.log_file, &mode) {
        (Some(path), _) => LogTarget::File(path),
        (None, Mode::Play(_)) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    util::init_tracing(args.verbose, log_target)?;

    match mode {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Numbers(arg) => numbers::run(&arg)?,
        Mode::Evaluate(arg) => evaluate::run(&arg)?,
    }
    Ok(())
}
