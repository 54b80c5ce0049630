use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use lispy::session::{DEFAULT_PROMPT, ScriptEditor, Session, SessionConfig, Terminal};
use log::info;

/// lispy evaluates prefix-notation integer arithmetic such as `+ 1 (* 2 3)`.
///
/// Without an expression or a file it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates each line of this file instead of reading from the terminal.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prompt shown before each line in the interactive session.
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Does not print the banner when the session starts.
    #[arg(short, long)]
    quiet: bool,

    /// Prints node, leaf and branch counts of each parsed line.
    #[arg(short, long)]
    stats: bool,

    /// Loads and saves the interactive history in this file.
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// A single line to evaluate.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected mode. Outside the interactive session a line that does
/// not parse makes the process fail.
fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let interactive = args.expression.is_none() && args.file.is_none();
    let config = SessionConfig { prompt: args.prompt,
                                 banner: interactive && !args.quiet,
                                 stats:  args.stats, };

    let summary = if let Some(expression) = args.expression {
        info!("evaluating expression from the command line");
        let editor = ScriptEditor::new(io::empty());
        Session::new(editor, io::stdout(), config).run_line(&expression)?
    } else if let Some(path) = args.file {
        info!("evaluating script {}", path.display());
        let file = File::open(&path).map_err(|e| {
                                        format!("Failed to read the input file '{}': {e}",
                                                path.display())
                                    })?;
        let editor = ScriptEditor::new(BufReader::new(file));
        Session::new(editor, io::stdout(), config).run()?
    } else {
        info!("starting interactive session");
        let editor = Terminal::new(args.history)?;
        Session::new(editor, io::stdout(), config).run()?
    };

    if !interactive && !summary.all_parsed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
