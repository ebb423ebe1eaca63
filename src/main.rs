use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use tagextract::config::Config;
use tagextract::output::{report, terminal, OutputFormat};
use tagextract::session::Session;
use tagextract::shell;
use tagextract::tags::source::{display_name, source_from_arg, FileSource, TextSource};
use tagextract::tags::{BuiltinLanguage, StopWordSet, TagCounter, TagExtractor};

/// Tag Extractor: count the significant words in a text file.
///
/// Words are lowercased, stripped of everything but ASCII letters, filtered
/// against a stop-word list, and counted. Results are listed alphabetically.
#[derive(Parser)]
#[command(name = "tagextract", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the tags in a text file
    Extract {
        /// Text file to analyze (`-` reads stdin)
        #[arg(long, short)]
        text: PathBuf,

        #[command(flatten)]
        stop: StopWordArgs,

        /// Save the report to this file instead of printing it
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Output format (default: TAGEXTRACT_FORMAT, else text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Load a stop-word list and report how many words it holds
    StopWords {
        #[command(flatten)]
        stop: StopWordArgs,

        /// Print every stop word as well
        #[arg(long)]
        list: bool,
    },

    /// Display a saved report
    Show {
        /// Report file written by `extract --output` or the shell's `save`
        report: PathBuf,
    },

    /// Interactive session: choose files, extract, save
    Shell,
}

#[derive(Args)]
struct StopWordArgs {
    /// Stop-words file, one word per line (`-` reads stdin)
    #[arg(long, short = 's', conflicts_with = "builtin")]
    stop_words: Option<PathBuf>,

    /// Use a bundled stop-word list instead of a file
    #[arg(long, value_enum)]
    builtin: Option<BuiltinLanguage>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only reports
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tagextract=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Extract {
            text,
            stop,
            output,
            format,
        } => {
            if is_stdin(&text) && stop.stop_words.as_deref().is_some_and(is_stdin) {
                anyhow::bail!("The text and the stop words cannot both be read from stdin.");
            }
            let format = match format {
                Some(format) => format,
                None => config.output_format()?,
            };
            let stop_words = load_stop_words(&config, &stop)?;

            let source = source_from_arg(&text);
            let table = TagCounter::new().extract(source.as_ref(), &stop_words)?;
            if table.is_empty() {
                warn!(source = %source.name(), "No tags left after stop-word filtering");
            }

            match output {
                Some(path) => {
                    format.save(&path, &table)?;
                    println!("{} {}", "Saved to file:".bold(), display_name(&path));
                    println!("  {} distinct tags, {} occurrences", table.len(), table.total());
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    format.write_to(&mut stdout, &table, "<stdout>")?;
                }
            }
        }

        Commands::StopWords { stop, list } => {
            let (name, stop_words) = match stop.builtin {
                Some(language) => (
                    format!("the built-in {language:?} list"),
                    StopWordSet::builtin(language),
                ),
                None => {
                    let path = config.require_stop_words(stop.stop_words.as_deref())?;
                    let source = source_from_arg(path);
                    (source.name(), StopWordSet::from_source(source.as_ref())?)
                }
            };
            terminal::display_stop_words(&name, &stop_words, list);
        }

        Commands::Show { report: path } => {
            let source = FileSource::new(&path);
            let mut lines = Vec::new();
            source.each_line(&mut |line| lines.push(line.to_string()))?;
            let table = report::parse_report(&lines)
                .with_context(|| format!("{} is not a tag report", path.display()))?;
            terminal::display_table(&source.name(), &table);
        }

        Commands::Shell => {
            let mut session = Session::new();
            if let Some(path) = &config.stop_words_path {
                match session.load_stop_words(path) {
                    Ok(count) => println!("Loaded {count} stop words from {}.", display_name(path)),
                    Err(e) => warn!(error = %e, "Could not preload configured stop words"),
                }
            }

            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            let mut stdout = io::stdout().lock();
            shell::run(stdin.lock(), &mut stdout, &mut session, prompt)?;
            info!("Shell closed");
        }
    }

    Ok(())
}

/// Resolve the stop-word flags (or configuration) into a loaded set.
fn load_stop_words(config: &Config, args: &StopWordArgs) -> Result<StopWordSet> {
    if let Some(language) = args.builtin {
        return Ok(StopWordSet::builtin(language));
    }
    let path = config.require_stop_words(args.stop_words.as_deref())?;
    let source = source_from_arg(path);
    let set = StopWordSet::from_source(source.as_ref())?;
    if set.is_empty() {
        anyhow::bail!(
            "{} contains no stop words. Extraction needs at least one.",
            source.name()
        );
    }
    Ok(set)
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}
