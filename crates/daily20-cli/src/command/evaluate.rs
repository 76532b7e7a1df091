use std::path::PathBuf;

use daily20_evaluator::score::Evaluation;

use crate::{model::recording::RecordedGame, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Path to a game recording (JSON) saved by `play --save-recording`
    recording_path: PathBuf,
    /// Print the evaluation as JSON
    #[clap(long, default_value_t = false)]
    json: bool,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let EvaluateArg {
        recording_path,
        json,
    } = arg;

    let recording: RecordedGame = util::read_json_file("recording", recording_path)?;
    let evaluation = recording.verify_and_evaluate()?;

    if *json {
        util::Output::stdout().write_json(&evaluation)?;
    } else {
        println!("{}", render_report(&evaluation));
    }
    Ok(())
}

fn render_report(evaluation: &Evaluation) -> String {
    format!(
        "Numbers in sequence: {}/{}\nScore: {}\n\n{}",
        evaluation.exact_matches,
        evaluation.total,
        evaluation.summary_score,
        evaluation.share_text()
    )
}
