use std::path::PathBuf;

use chrono::NaiveDate;
use daily20_engine::{DateSeed, NumberSequence, SequenceParams, game_number, today_utc};
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct NumbersArg {
    /// Puzzle date (YYYY-MM-DD, default: today in UTC)
    #[clap(long, value_parser = daily20_engine::parse_puzzle_date)]
    date: Option<NaiveDate>,
    /// How many numbers to draw
    #[clap(long, default_value_t = SequenceParams::DAILY.count)]
    count: usize,
    /// Smallest possible number
    #[clap(long, default_value_t = SequenceParams::DAILY.min)]
    min: u16,
    /// Largest possible number
    #[clap(long, default_value_t = SequenceParams::DAILY.max)]
    max: u16,
    /// Output file path (default: stdout)
    #[clap(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Puzzle {
    date: NaiveDate,
    game_number: i64,
    seed: DateSeed,
    params: SequenceParams,
    numbers: NumberSequence,
    sorted: Vec<u16>,
}

pub(crate) fn run(arg: &NumbersArg) -> anyhow::Result<()> {
    let NumbersArg {
        date,
        count,
        min,
        max,
        output,
    } = arg;

    let date = date.unwrap_or_else(today_utc);
    let seed = DateSeed::from_date(date);
    let params = SequenceParams {
        count: *count,
        min: *min,
        max: *max,
    };
    let numbers = NumberSequence::generate(seed, params)?;

    let puzzle = Puzzle {
        date,
        game_number: game_number(date),
        seed,
        params,
        sorted: numbers.sorted(),
        numbers,
    };
    Output::save_json(&puzzle, output.clone())
}
