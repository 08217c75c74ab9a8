//! Interactive entry point: prompt for a pattern, build the NFA,
//! render it.

use std::io::{self, Write};
use std::process::{Command, ExitCode};

use renfa::{PatternError, compile, to_dot};
use unicode_width::UnicodeWidthChar;

const DOT_FILE: &str = "regex_nfa.dot";
const PNG_FILE: &str = "regex_nfa.png";

fn main() -> io::Result<ExitCode> {
    print!("Enter pattern (use * for Kleene star, () for grouping, | for alternation): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let pattern = line.trim_end_matches(['\r', '\n']);

    let nfa = match compile(pattern) {
        Ok(nfa) => nfa,
        Err(err) => {
            report_rejection(pattern, err);
            return Ok(ExitCode::FAILURE);
        }
    };

    std::fs::write(DOT_FILE, to_dot(&nfa))?;

    // Rendering to an image needs the Graphviz binary; the DOT file
    // stands on its own when that is not installed.
    let rendered = Command::new("dot")
        .args(["-Tpng", DOT_FILE, "-o", PNG_FILE])
        .status()
        .is_ok_and(|status| status.success());
    if rendered {
        println!("NFA visualization saved as {PNG_FILE}");
    } else {
        println!("Graphviz 'dot' not available; DOT source saved as {DOT_FILE}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the pattern with a caret under the offending position.
fn report_rejection(pattern: &str, err: PatternError) {
    eprintln!("{pattern}");
    eprintln!("{}", caret_line(pattern, err));
}

/// The caret line, indented by the display width of the characters
/// preceding the offending position so wide literals do not shift
/// the caret.
fn caret_line(pattern: &str, err: PatternError) -> String {
    let indent: usize = pattern
        .chars()
        .take(err.position())
        .map(|c| c.width().unwrap_or(0))
        .sum();
    format!("{}^ {err}", " ".repeat(indent))
}
