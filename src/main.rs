//! cogscore CLI - cognitive complexity scoring for C/C++.
//!
//! Reads a file, directory, or stdin and prints complexity totals,
//! per-function summaries, an annotated listing, or JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cogscore::analysis::{analyze_path, score_source, summarize};
use cogscore::annotate::annotate;
use cogscore::lang::LanguageRegistry;
use cogscore::score::{ScoreConfig, UnnamedFunctionPolicy};

/// Nesting-aware cognitive complexity for C/C++.
///
/// Scores control-flow constructs with penalties for structural nesting
/// and for spans of code jumped over by goto. Reads stdin when no path is
/// given.
#[derive(Parser)]
#[command(name = "cogscore", version, about)]
struct Cli {
    /// File or directory to analyze; reads stdin when omitted
    path: Option<PathBuf>,

    /// Language to assume for stdin, or to filter directory walks
    #[arg(short, long, env = "COGSCORE_LANGUAGE")]
    language: Option<String>,

    /// Print an annotated source listing (single file or stdin only)
    #[arg(long)]
    annotate: bool,

    /// Print per-function totals instead of a single number
    #[arg(long)]
    functions: bool,

    /// Emit JSON
    #[arg(long)]
    json: bool,

    /// Disable the penalty for code between a goto and its label
    #[arg(long)]
    no_goto_nesting: bool,

    /// Score each goto at its target label's nesting depth
    #[arg(long)]
    structural_gotos: bool,

    /// Drop bodies of functions whose name cannot be extracted, instead
    /// of merging them into the enclosing scope
    #[arg(long)]
    drop_unnamed: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ScoreConfig {
        goto_nesting: !cli.no_goto_nesting,
        structural_gotos: cli.structural_gotos,
        unnamed_functions: if cli.drop_unnamed {
            UnnamedFunctionPolicy::Drop
        } else {
            UnnamedFunctionPolicy::Merge
        },
    };

    match &cli.path {
        Some(path) if path.is_dir() => {
            let report = analyze_path(path, cli.language.as_deref(), &config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for file in &report.files {
                    println!("{}: {}", file.path.display(), file.complexity);
                    if cli.functions {
                        for func in &file.functions {
                            println!("  {}: {}", func.name, func.complexity);
                        }
                    }
                }
                for error in &report.errors {
                    eprintln!("{}: {}", error.file.display(), error.message);
                }
            }
            Ok(())
        }
        _ => score_single_input(&cli, &config),
    }
}

/// Score one file or stdin and print the requested view.
fn score_single_input(cli: &Cli, config: &ScoreConfig) -> Result<()> {
    let (source, language) = read_source(cli)?;

    let scopes = score_source(&source, &language, config)?;
    let summary = summarize(&scopes);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if cli.annotate {
        let text = String::from_utf8_lossy(&source);
        print!("{}", annotate(&text, &scopes));
        println!("Modified cognitive complexity: {}", summary.total);
        return Ok(());
    }

    if cli.functions {
        println!("<toplevel>: {}", summary.toplevel);
        for func in &summary.functions {
            println!("{}: {}", func.name, func.complexity);
        }
        return Ok(());
    }

    println!("{}", summary.total);
    Ok(())
}

/// Read input bytes and decide which grammar to parse them with.
fn read_source(cli: &Cli) -> Result<(Vec<u8>, String)> {
    match &cli.path {
        Some(path) => {
            let source = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let language = match &cli.language {
                Some(language) => language.clone(),
                None => LanguageRegistry::global()
                    .detect_language(path)
                    .map(|l| l.name().to_string())
                    .with_context(|| format!("cannot detect language of {}", path.display()))?,
            };
            Ok((source, language))
        }
        None => {
            let mut source = Vec::new();
            std::io::stdin()
                .read_to_end(&mut source)
                .context("failed to read stdin")?;
            Ok((source, cli.language.clone().unwrap_or_else(|| "c".to_string())))
        }
    }
}
