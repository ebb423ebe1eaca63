// Interactive command loop.
//
// Line-driven stand-in for the original four-button window: choose a text
// file, choose a stop-words file, extract, save. Every command reports its
// outcome as a message; failures are printed and the loop keeps going with
// the session untouched.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::TagError;
use crate::output::report;
use crate::session::Session;
use crate::tags::source::display_name;
use crate::tags::BuiltinLanguage;

const HELP: &str = "\
Commands:
  text <path>        choose the text file to analyze
  stopwords <path>   load stop words (one per line)
  builtin <lang>     load a bundled stop-word list (en, fr, de, it, pt, es)
  extract            count tags in the chosen text file
  save <path>        save the last result as a report
  help               show this message
  quit               leave the shell";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Text(PathBuf),
    StopWords(PathBuf),
    Builtin(BuiltinLanguage),
    Extract,
    Save(PathBuf),
    Help,
    Quit,
    Empty,
}

impl Command {
    /// Parse one input line. The argument is everything after the first word,
    /// trimmed, so paths may contain spaces.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };
        let path_arg = |usage: &str| {
            if arg.is_empty() {
                Err(format!("Usage: {usage}"))
            } else {
                Ok(PathBuf::from(arg))
            }
        };

        match word.to_lowercase().as_str() {
            "" => Ok(Command::Empty),
            "text" => path_arg("text <path>").map(Command::Text),
            "stopwords" | "stop-words" => path_arg("stopwords <path>").map(Command::StopWords),
            "builtin" => BuiltinLanguage::parse(arg)
                .map(Command::Builtin)
                .ok_or_else(|| format!("Unknown language {arg:?}. Try en, fr, de, it, pt or es.")),
            "extract" => Ok(Command::Extract),
            "save" => path_arg("save <path>").map(Command::Save),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command {other:?}. Type `help` for a list.")),
        }
    }
}

/// Run the shell until `quit` or end of input.
///
/// `prompt` controls whether a `> ` prompt is written before each command;
/// turn it off when input is not a terminal.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    session: &mut Session,
    prompt: bool,
) -> io::Result<()> {
    writeln!(out, "Tag Extractor. Type `help` for commands.")?;
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        debug!(input = %line, "Shell command");

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(command, out, session)?,
            Err(message) => writeln!(out, "{message}")?,
        }
    }
    Ok(())
}

/// Execute one command against the session, writing its messages to `out`.
pub fn execute<W: Write>(command: Command, out: &mut W, session: &mut Session) -> io::Result<()> {
    match command {
        Command::Empty | Command::Quit => {}
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Text(path) => {
            let name = session.select_text(path);
            writeln!(out, "Selected text file: {name}")?;
        }
        Command::StopWords(path) => {
            writeln!(out, "Selected stop words file: {}", display_name(&path))?;
            match session.load_stop_words(&path) {
                Ok(count) => writeln!(out, "Loaded {count} stop words.")?,
                Err(e) => report_error(out, "Error loading stop words", &e)?,
            }
        }
        Command::Builtin(language) => {
            let count = session.use_builtin_stop_words(language);
            writeln!(out, "Loaded {count} stop words.")?;
        }
        Command::Extract => match session.extract() {
            Ok(table) => {
                writeln!(out, "Tag extraction complete:")?;
                report::write_report(out, table)?;
            }
            Err(e @ (TagError::NoTextSource | TagError::NoStopWords)) => writeln!(out, "{e}")?,
            Err(e) => report_error(out, "Error reading text file", &e)?,
        },
        Command::Save(path) => match session.save(&path) {
            Ok(name) => writeln!(out, "Saved to file: {name}")?,
            Err(e @ TagError::NothingToSave) => writeln!(out, "{e}")?,
            Err(e) => report_error(out, "Error saving to file", &e)?,
        },
    }
    Ok(())
}

fn report_error<W: Write>(out: &mut W, context: &str, error: &TagError) -> io::Result<()> {
    warn!(error = %error, "{context}");
    writeln!(out, "{context}: {error}")
}
