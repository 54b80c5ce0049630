use std::{
    io::{BufRead, Lines, Write},
    path::PathBuf,
};

use log::{debug, info, warn};
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    error::{ParseError, SessionError},
    eval,
    interpreter::value::Value,
    parse,
};

/// Lines printed when an interactive session starts.
pub const BANNER: [&str; 2] = ["Lispy Version 0.0.1", "Press Ctrl+c to Exit"];
/// Prompt shown before each line unless configured otherwise.
pub const DEFAULT_PROMPT: &str = "lispy> ";

/// A source of input lines with a history.
///
/// This is the seam between the read-evaluate-print loop and whatever
/// acquires lines: an interactive terminal, a script file or a test fixture.
pub trait LineEditor {
    /// Reads the next line, showing `prompt` if the editor is interactive.
    ///
    /// Returns `Ok(None)` once there is no more input, including when the user
    /// interrupts the session.
    ///
    /// # Errors
    /// Returns a `SessionError` if the underlying input failed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError>;

    /// Records a line that was read in the editor's history.
    fn record_history(&mut self, line: &str);

    /// Called once when the session ends.
    fn finish(&mut self) {}
}

/// An interactive line editor on the terminal.
///
/// History can be loaded from and saved to a file. Problems with the history
/// file are logged and otherwise ignored.
pub struct Terminal {
    editor:  DefaultEditor,
    history: Option<PathBuf>,
}

impl Terminal {
    /// Creates a terminal editor, loading history from `history` if given.
    ///
    /// # Errors
    /// Returns a `SessionError` if the terminal cannot be set up.
    pub fn new(history: Option<PathBuf>) -> Result<Self, SessionError> {
        let mut editor = DefaultEditor::new()?;

        if let Some(path) = &history
           && let Err(e) = editor.load_history(path)
        {
            warn!("could not load history from {}: {e}", path.display());
        }

        Ok(Self { editor, history })
    }
}

impl LineEditor for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) => {
                info!("interrupted, ending session");
                Ok(None)
            },
            Err(ReadlineError::Eof) => {
                info!("end of input, ending session");
                Ok(None)
            },
            Err(e) => Err(e.into()),
        }
    }

    fn record_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            warn!("could not record history entry: {e}");
        }
    }

    fn finish(&mut self) {
        if let Some(path) = &self.history
           && let Err(e) = self.editor.save_history(path)
        {
            warn!("could not save history to {}: {e}", path.display());
        }
    }
}

/// A non-interactive editor that replays lines from a reader.
///
/// Used for script files and tests. The prompt is never echoed; history is
/// kept in memory.
pub struct ScriptEditor<R> {
    lines:   Lines<R>,
    history: Vec<String>,
}

impl<R: BufRead> ScriptEditor<R> {
    /// Creates an editor reading lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self { lines:   reader.lines(),
               history: Vec::new(), }
    }

    /// Lines recorded so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl<R: BufRead> LineEditor for ScriptEditor<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, SessionError> {
        Ok(self.lines.next().transpose()?)
    }

    fn record_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}

/// Settings of a session, usually built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Prompt passed to the editor before each line.
    pub prompt: String,
    /// Whether to print the banner when the session starts.
    pub banner: bool,
    /// Whether to print tree statistics after each parsed line.
    pub stats:  bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { prompt: DEFAULT_PROMPT.to_string(),
               banner: true,
               stats:  false, }
    }
}

/// What happened to a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The line parsed and evaluated to this value.
    Evaluated(Value),
    /// The line did not match the grammar and was skipped.
    Rejected(ParseError),
}

/// Counts of processed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Lines that parsed and were evaluated.
    pub evaluated: usize,
    /// Lines rejected by the parser.
    pub rejected:  usize,
}

impl Summary {
    /// Counts one more line with the given outcome.
    pub const fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Evaluated(_) => self.evaluated += 1,
            Outcome::Rejected(_) => self.rejected += 1,
        }
    }

    /// Whether every processed line matched the grammar.
    #[must_use]
    pub const fn all_parsed(&self) -> bool {
        self.rejected == 0
    }
}

/// A read-evaluate-print loop.
///
/// Every line is handled independently: nothing computed for one line is
/// visible to the next. Results and diagnostics go to the same output.
pub struct Session<E, W> {
    editor: E,
    out:    W,
    config: SessionConfig,
}

impl<E: LineEditor, W: Write> Session<E, W> {
    /// Creates a session reading from `editor` and writing to `out`.
    pub const fn new(editor: E, out: W, config: SessionConfig) -> Self {
        Self { editor,
               out,
               config }
    }

    /// Runs the loop until the editor has no more input.
    ///
    /// # Errors
    /// Returns a `SessionError` if reading input or writing output fails.
    /// Parse failures are not errors; they are reported and counted.
    ///
    /// # Example
    /// ```
    /// use lispy::session::{ScriptEditor, Session, SessionConfig};
    ///
    /// let input = "+ 1 2\n/ 1 0\n( + 1\n";
    /// let config = SessionConfig { banner: false,
    ///                              ..SessionConfig::default() };
    /// let mut session = Session::new(ScriptEditor::new(input.as_bytes()), Vec::new(), config);
    ///
    /// let summary = session.run().unwrap();
    /// assert_eq!(summary.evaluated, 2);
    /// assert_eq!(summary.rejected, 1);
    /// ```
    pub fn run(&mut self) -> Result<Summary, SessionError> {
        if self.config.banner {
            for line in BANNER {
                writeln!(self.out, "{line}\n")?;
            }
            self.out.flush()?;
        }

        let mut summary = Summary::default();
        let result = loop {
            let line = match self.editor.read_line(&self.config.prompt) {
                Ok(Some(line)) => line,
                Ok(None) => break Ok(summary),
                Err(e) => break Err(e),
            };
            self.editor.record_history(&line);

            match self.process_line(&line) {
                Ok(outcome) => summary.record(&outcome),
                Err(e) => break Err(e),
            }
        };

        self.editor.finish();
        debug!("session ended: {summary:?}");
        result
    }

    /// Parses, evaluates and reports a single line.
    ///
    /// Writes the rendered value, or the diagnostic if the line does not
    /// parse, followed by the statistics line when enabled.
    ///
    /// # Errors
    /// Returns a `SessionError` if writing the output fails.
    pub fn process_line(&mut self, line: &str) -> Result<Outcome, SessionError> {
        let outcome = match parse(line) {
            Ok(tree) => {
                let value = eval(&tree);
                debug!("{tree} => {value}");
                writeln!(self.out, "{value}")?;
                if self.config.stats {
                    writeln!(self.out, "{}", tree.stats())?;
                }
                Outcome::Evaluated(value)
            },
            Err(e) => {
                debug!("rejected {line:?}: {e}");
                writeln!(self.out, "{e}")?;
                Outcome::Rejected(e)
            },
        };
        self.out.flush()?;
        Ok(outcome)
    }

    /// Handles `line` as the whole input of the session.
    ///
    /// The line is recorded in history and processed as one line, even if it
    /// is empty or contains line breaks. No banner is printed.
    ///
    /// # Errors
    /// Returns a `SessionError` if writing the output fails.
    ///
    /// # Example
    /// ```
    /// use std::io;
    ///
    /// use lispy::session::{ScriptEditor, Session, SessionConfig};
    ///
    /// let editor = ScriptEditor::new(io::empty());
    /// let mut session = Session::new(editor, Vec::new(), SessionConfig::default());
    ///
    /// assert!(session.run_line("* 2 3").unwrap().all_parsed());
    /// assert!(!session.run_line("").unwrap().all_parsed());
    /// ```
    pub fn run_line(&mut self, line: &str) -> Result<Summary, SessionError> {
        self.editor.record_history(line);
        let mut summary = Summary::default();
        summary.record(&self.process_line(line)?);
        self.editor.finish();
        Ok(summary)
    }

    /// Consumes the session and returns its editor and output.
    pub fn into_parts(self) -> (E, W) {
        (self.editor, self.out)
    }
}
