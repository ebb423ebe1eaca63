// Composition tests: the full choose -> load -> extract -> save flow.
//
// These drive Session and the shell the way a front end would, against real
// files in a temp directory, and check that failures leave the session
// exactly as it was.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;

use tagextract::error::{ErrorKind, TagError};
use tagextract::output::report::{parse_report, render};
use tagextract::session::Session;
use tagextract::shell;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================
// Session
// ============================================================

#[test]
fn session_extract_and_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let text = write(dir.path(), "story.txt", "The Quick fox;\nthe QUICK Fox runs.\n");
    let stop = write(dir.path(), "stop.txt", "THE\n\n  a  \n");
    let out = dir.path().join("tags.txt");

    let mut session = Session::new();
    assert_eq!(session.select_text(&text), "story.txt");
    assert_eq!(session.load_stop_words(&stop).unwrap(), 2);

    let rendered = render(session.extract().unwrap());
    assert_eq!(
        rendered,
        vec!["Word - Frequency", "fox - 2", "quick - 2", "runs - 1"]
    );

    assert_eq!(session.save(&out).unwrap(), "tags.txt");
    let saved = fs::read_to_string(&out).unwrap();
    assert_eq!(saved, "Word - Frequency\nfox - 2\nquick - 2\nruns - 1\n");
    assert_eq!(
        &parse_report(saved.lines()).unwrap(),
        session.last_result().unwrap()
    );
}

#[test]
fn failed_stop_word_load_keeps_previous_set() {
    let dir = tempfile::tempdir().unwrap();
    let stop = write(dir.path(), "stop.txt", "the\nand\n");

    let mut session = Session::new();
    session.load_stop_words(&stop).unwrap();
    let err = session
        .load_stop_words(&dir.path().join("missing.txt"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(session.stop_words().len(), 2);
    assert!(session.stop_words().contains("and"));
}

#[test]
fn failed_extract_keeps_previous_result() {
    let dir = tempfile::tempdir().unwrap();
    let text = write(dir.path(), "story.txt", "alpha beta alpha\n");
    let stop = write(dir.path(), "stop.txt", "beta\n");

    let mut session = Session::new();
    session.select_text(&text);
    session.load_stop_words(&stop).unwrap();
    let first = session.extract().unwrap().clone();

    // Point at a file that does not exist and try again.
    session.select_text(dir.path().join("gone.txt"));
    assert_eq!(session.extract().unwrap_err().kind(), ErrorKind::Io);
    assert_eq!(session.last_result(), Some(&first));
}

#[test]
fn stop_words_file_of_blank_lines_counts_as_not_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let text = write(dir.path(), "story.txt", "words\n");
    let stop = write(dir.path(), "stop.txt", "\n   \n\t\n");

    let mut session = Session::new();
    session.select_text(&text);
    assert_eq!(session.load_stop_words(&stop).unwrap(), 0);
    assert!(matches!(session.extract(), Err(TagError::NoStopWords)));
}

#[test]
fn repeated_extraction_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let text = write(
        dir.path(),
        "story.txt",
        "It was the best of times,\nit was the worst of times.\n",
    );
    let stop = write(dir.path(), "stop.txt", "the\nof\nit\nwas\n");

    let mut session = Session::new();
    session.select_text(&text);
    session.load_stop_words(&stop).unwrap();
    let first = session.extract().unwrap().clone();
    let second = session.extract().unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(
        first.iter().collect::<Vec<_>>(),
        vec![("best", 1), ("times", 2), ("worst", 1)]
    );
}

// ============================================================
// Shell
// ============================================================

#[test]
fn shell_full_session() {
    let dir = tempfile::tempdir().unwrap();
    let text = write(dir.path(), "story.txt", "The Quick fox; the QUICK Fox runs.\n");
    let stop = write(dir.path(), "stop.txt", "the\n");
    let out = dir.path().join("saved.txt");

    let script = format!(
        "text {}\nstopwords {}\nextract\nsave {}\nquit\n",
        text.display(),
        stop.display(),
        out.display()
    );
    let mut session = Session::new();
    let mut output = Vec::new();
    shell::run(script.as_bytes(), &mut output, &mut session, false).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Selected text file: story.txt\n"));
    assert!(output.contains("Selected stop words file: stop.txt\n"));
    assert!(output.contains("Loaded 1 stop words.\n"));
    assert!(output.contains(
        "Tag extraction complete:\nWord - Frequency\nfox - 2\nquick - 2\nruns - 1\n"
    ));
    assert!(output.contains("Saved to file: saved.txt\n"));

    // The saved file holds the report once, never the shell's log.
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Word - Frequency\nfox - 2\nquick - 2\nruns - 1\n"
    );
}

#[test]
fn shell_survives_errors() {
    let dir = tempfile::tempdir().unwrap();
    let text = write(dir.path(), "story.txt", "giraffe zucchini\n");
    let missing = dir.path().join("missing.txt");

    let script = format!(
        "bogus\nstopwords {missing}\ntext {text}\nextract\nbuiltin en\nextract\nsave {bad}\n",
        missing = missing.display(),
        text = text.display(),
        bad = dir.path().join("nope").join("out.txt").display(),
    );
    let mut session = Session::new();
    let mut output = Vec::new();
    shell::run(script.as_bytes(), &mut output, &mut session, false).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Unknown command"));
    assert!(output.contains("Error loading stop words: cannot read missing.txt"));
    assert!(output.contains("No stop words loaded."));
    assert!(output.contains("giraffe - 1\nzucchini - 1\n"));
    assert!(output.contains("Error saving to file: cannot write out.txt"));
    assert!(session.last_result().is_some());
}

#[test]
fn shell_prompts_when_interactive() {
    let mut session = Session::new();
    let mut output = Vec::new();
    shell::run("help\n".as_bytes(), &mut output, &mut session, true).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("> "));
    assert!(output.contains("stopwords <path>"));
}

#[test]
fn shell_dash_paths_are_files_not_stdin() {
    // The shell owns the stdin lock while it runs, as `tagextract shell` does.
    // A `-` argument must be read as a file name rather than locking stdin again.
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _stdin = io::stdin().lock();
        let mut session = Session::new();
        let mut output = Vec::new();
        shell::run(
            "stopwords -\ntext -\nextract\n".as_bytes(),
            &mut output,
            &mut session,
            false,
        )
        .unwrap();
        tx.send(String::from_utf8(output).unwrap()).unwrap();
    });

    let output = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("shell blocked on stdin");
    assert!(output.contains("Error loading stop words: cannot read -"));
    assert!(output.contains("Selected text file: -"));
    assert!(output.contains("No stop words loaded."));
}
