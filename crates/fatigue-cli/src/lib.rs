//! `fatigue` command-line interface
//!
//! Argument parsing and command dispatch live here so they can be driven from
//! tests; `main.rs` only installs logging and maps the exit code.

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use fatigue_analysis::{AnalysisRequest, AnalysisService};
use fatigue_corpus::{generate, level_histogram, Corpus, CorpusConfig, LogRecord};
use std::io::Write;
use std::path::PathBuf;

/// Build the command tree
#[must_use]
pub fn cli() -> Command {
    Command::new("fatigue")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Synthetic incident log corpus")
        .subcommand_required(true)
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u32))
                .help("Stream seed (overrides the config file)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with seed and base_time"),
        )
        .subcommand(
            Command::new("generate")
                .about("Print the corpus")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("raw")
                        .value_parser(["raw", "jsonl"])
                        .help("raw lines or one JSON record per line"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Only the first N records"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Case-insensitive substring search")
                .arg(Arg::new("query").default_value("").help("Text to look for")),
        )
        .subcommand(Command::new("answer").about("Print the root-cause record"))
        .subcommand(Command::new("categories").about("Record counts per category and level"))
        .subcommand(Command::new("significant").about("Records worth looking at first"))
        .subcommand(Command::new("verify").about("Check the corpus contract"))
        .subcommand(
            Command::new("analyze")
                .about("Run the analysis contract over the corpus sample")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON request body to analyze instead of the corpus sample"),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .action(ArgAction::SetTrue)
                        .help("Single-line JSON"),
                ),
        )
}

fn load_config(matches: &ArgMatches) -> Result<CorpusConfig> {
    // Global flags are visible on the innermost matches wherever they were typed
    let matches = matches.subcommand().map_or(matches, |(_, sub)| sub);
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CorpusConfig::load(path)?,
        None => CorpusConfig::default(),
    };
    if let Some(seed) = matches.get_one::<u32>("seed") {
        config = config.with_seed(*seed);
    }
    Ok(config)
}

fn print_raw<'a>(out: &mut dyn Write, records: impl IntoIterator<Item = &'a LogRecord>) -> Result<()> {
    for record in records {
        writeln!(out, "{:>4} {}", record.id, record.raw)?;
    }
    Ok(())
}

/// Run the command selected by `matches`, writing results to `out`
///
/// Returns the process exit code.
///
/// # Errors
/// Fails on unreadable config or input files, on output errors, and when the
/// answer record is missing.
pub async fn run(matches: &ArgMatches, out: &mut dyn Write) -> Result<i32> {
    let config = load_config(matches)?;
    let Some((name, args)) = matches.subcommand() else {
        bail!("no command given");
    };

    // analyze may read its request from a file instead of the corpus
    if name == "analyze" {
        return analyze(&config, args, out).await;
    }

    let corpus = generate(&config);
    tracing::debug!("Running {} over seed {}", name, corpus.seed());

    match name {
        "generate" => {
            let limit = args.get_one::<usize>("limit").copied().unwrap_or(corpus.len());
            let records = corpus.sample(limit);
            if args.get_one::<String>("format").map(String::as_str) == Some("jsonl") {
                for record in records {
                    writeln!(out, "{}", serde_json::to_string(record)?)?;
                }
            } else {
                for record in records {
                    writeln!(out, "{}", record.raw)?;
                }
            }
        }
        "search" => {
            let query = args.get_one::<String>("query").map_or("", String::as_str);
            let hits = corpus.search(query);
            print_raw(out, hits.iter().copied())?;
            writeln!(out, "{} of {} records match", hits.len(), corpus.len())?;
        }
        "answer" => {
            let answer = corpus
                .answer()
                .context("answer record missing from corpus")?;
            writeln!(out, "{}", serde_json::to_string_pretty(answer)?)?;
        }
        "categories" => categories(&corpus, out)?,
        "significant" => print_raw(out, corpus.significant_events())?,
        "verify" => {
            return Ok(match corpus.verify() {
                Ok(()) => {
                    writeln!(out, "Corpus: VALID ({} records, seed {})", corpus.len(), corpus.seed())?;
                    0
                }
                Err(e) => {
                    writeln!(out, "Corpus: INVALID ({e})")?;
                    1
                }
            });
        }
        other => bail!("unknown command: {other}"),
    }
    Ok(0)
}

fn categories(corpus: &Corpus, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Categories:")?;
    for (category, bucket) in corpus.group_by_category().iter() {
        writeln!(out, "  {:<9}{:>5}", category.as_str(), bucket.len())?;
    }
    writeln!(out, "Levels:")?;
    for (level, count) in level_histogram(corpus.records()) {
        writeln!(out, "  {:<9}{:>5}", level.as_str(), count)?;
    }
    Ok(())
}

async fn analyze(config: &CorpusConfig, args: &ArgMatches, out: &mut dyn Write) -> Result<i32> {
    let service = AnalysisService::offline();
    let response = match args.get_one::<PathBuf>("input") {
        Some(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            service.analyze_body(&body).await?
        }
        None => service.analyze(&AnalysisRequest::from_corpus(&generate(config))).await,
    };

    let text = if args.get_flag("compact") {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    writeln!(out, "{text}")?;
    Ok(0)
}
