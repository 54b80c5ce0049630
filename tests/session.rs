use std::{fs, io};

use lispy::{
    EvalError, ParseError, Value,
    error::{Expected, Found},
    session::{BANNER, LineEditor, Outcome, ScriptEditor, Session, SessionConfig, Summary},
};

fn quiet() -> SessionConfig {
    SessionConfig { banner: false,
                    ..SessionConfig::default() }
}

fn run_script(input: &str, config: SessionConfig) -> (Vec<String>, Vec<String>) {
    let mut session = Session::new(ScriptEditor::new(input.as_bytes()), Vec::new(), config);
    session.run().unwrap_or_else(|e| panic!("Session failed: {e}"));

    let (editor, out) = session.into_parts();
    let output = String::from_utf8(out).expect("output is UTF-8");
    (output.lines().map(str::to_string).collect(), editor.history().to_vec())
}

#[test]
fn one_output_line_per_input_line() {
    let (output, _) = run_script("+ 1 2\n/ 10 0\n% 5 2\n", quiet());
    assert_eq!(output,
               ["3", "Error: Division by Zero", "Error: Invalid Operator"]);
}

#[test]
fn parse_failure_does_not_stop_the_session() {
    let (output, _) = run_script("+ (+ 1\n()\n* 6 7\n", quiet());
    assert_eq!(output.len(), 3);
    assert!(output[0].starts_with("<stdin>:1:7: error:"));
    assert!(output[1].starts_with("<stdin>:1:1: error:"));
    assert_eq!(output[2], "42");
}

#[test]
fn every_line_is_recorded_in_history() {
    let input = "+ 1 2\n\nnot lispy\n- 5";
    let (output, history) = run_script(input, quiet());
    assert_eq!(history, ["+ 1 2", "", "not lispy", "- 5"]);
    assert_eq!(output.len(), 4);
}

#[test]
fn banner_is_printed_once_at_start() {
    let (output, _) = run_script("+ 2 2\n", SessionConfig::default());
    assert_eq!(output, [BANNER[0], "", BANNER[1], "", "4"]);
}

#[test]
fn stats_follow_each_value() {
    let config = SessionConfig { stats: true,
                                 ..quiet() };
    let (output, _) = run_script("+ 1 (* 2 3) 4\n+ (\n", config);
    assert_eq!(output[0], "11");
    assert_eq!(output[1], "nodes: 6, leaves: 4, branches: 2, max arity: 3");
    assert!(output[2].contains("error"));
    assert_eq!(output.len(), 3);
}

#[test]
fn process_line_reports_outcome() {
    let mut session = Session::new(ScriptEditor::new(&b""[..]), Vec::new(), quiet());

    assert_eq!(session.process_line("/ 10 0").unwrap(),
               Outcome::Evaluated(Value::Error(EvalError::DivisionByZero)));
    assert!(matches!(session.process_line("+").unwrap(), Outcome::Rejected(_)));

    let first = session.process_line("+ 1 (* 2 3) 4").unwrap();
    let second = session.process_line("+ 1 (* 2 3) 4").unwrap();
    assert_eq!(first, second);
}

#[test]
fn lines_do_not_share_state() {
    let (output, _) = run_script("/ 1 0\n+ 1 1\n", quiet());
    assert_eq!(output, ["Error: Division by Zero", "2"]);
}

fn run_single(line: &str) -> (Summary, Vec<String>, Vec<String>) {
    let mut session = Session::new(ScriptEditor::new(io::empty()), Vec::new(), quiet());
    let summary = session.run_line(line)
                         .unwrap_or_else(|e| panic!("Session failed: {e}"));

    let (editor, out) = session.into_parts();
    let output = String::from_utf8(out).expect("output is UTF-8");
    (summary, output.lines().map(str::to_string).collect(), editor.history().to_vec())
}

#[test]
fn single_line_is_evaluated() {
    let (summary, output, history) = run_single("+ 1 (* 2 3) 4");
    assert_eq!(output, ["11"]);
    assert_eq!(history, ["+ 1 (* 2 3) 4"]);
    assert!(summary.all_parsed());

    let (summary, output, _) = run_single("/ 1 0");
    assert_eq!(output, ["Error: Division by Zero"]);
    assert!(summary.all_parsed());
}

#[test]
fn empty_single_line_is_rejected() {
    let (summary, output, history) = run_single("");
    assert_eq!(output,
               ["<stdin>:1:1: error: expected one of '+', '-', '*', '/', '%' or '^' at end of input"]);
    assert_eq!(history, [""]);
    assert_eq!(summary, Summary { evaluated: 0,
                                  rejected:  1, });
    assert!(!summary.all_parsed());

    let mut session = Session::new(ScriptEditor::new(io::empty()), Vec::new(), quiet());
    assert_eq!(session.process_line("").unwrap(),
               Outcome::Rejected(ParseError::Unexpected { expected: Expected::Operator,
                                                          found:    Found::EndOfInput,
                                                          column:   1, }));
}

#[test]
fn single_line_is_not_split_at_line_breaks() {
    let (summary, output, history) = run_single("+ 1 2\n* 3 4");
    assert_eq!(output,
               ["<stdin>:1:7: error: expected a number, '(' or end of input at '*'"]);
    assert_eq!(history, ["+ 1 2\n* 3 4"]);
    assert!(!summary.all_parsed());

    let (summary, output, _) = run_single("+ 1\n2");
    assert_eq!(output, ["3"]);
    assert!(summary.all_parsed());
}

struct Interrupted {
    calls: usize,
}

impl LineEditor for Interrupted {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, lispy::SessionError> {
        self.calls += 1;
        Ok(if self.calls == 1 { Some("+ 1 1".to_string()) } else { None })
    }

    fn record_history(&mut self, _line: &str) {}
}

#[test]
fn session_ends_when_editor_has_no_more_input() {
    let mut session = Session::new(Interrupted { calls: 0 }, Vec::new(), quiet());
    let summary = session.run().unwrap();
    assert_eq!(summary.evaluated, 1);
    assert_eq!(summary.rejected, 0);

    let (editor, _) = session.into_parts();
    assert_eq!(editor.calls, 2);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.lispy").expect("missing file");
    let mut input = String::new();
    let mut expected = Vec::new();
    for line in script.lines().filter(|l| !l.trim().is_empty()) {
        let (src, out) = line.split_once(" => ").expect("line has the form `input => output`");
        input.push_str(src);
        input.push('\n');
        expected.push(out.to_string());
    }

    let (output, _) = run_script(&input, quiet());
    assert_eq!(output, expected);
}
