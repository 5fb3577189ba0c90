use std::path::Path;

use clap::{Parser, Subcommand};

use translit_cli::commands::{accuracy_ops, convert_ops, load_transliterator, rules_ops};

#[derive(Parser)]
#[command(name = "translit", about = "Devanagari to Roman transliteration")]
struct Cli {
    /// Rule TOML overriding some or all of the built-in tables
    #[arg(long, global = true)]
    rules: Option<String>,
    /// Write JSON trace logs to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (reads stdin line by line when omitted)
    Convert {
        /// Devanagari text
        text: Option<String>,
    },
    /// Show the output of every pipeline stage
    Stages {
        /// Devanagari text
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run accuracy tests from a TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Filter by category (only run cases in this category)
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the built-in rule tables as TOML
    RulesExport,
    /// Validate a custom rule TOML file
    RulesValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let _trace = cli.trace_dir.as_deref().and_then(|dir| {
        let guard = hindi_translit::init_tracing(Path::new(dir));
        if guard.is_none() {
            eprintln!("Warning: trace logging not enabled for {dir}");
        }
        guard
    });

    let load = || {
        load_transliterator(cli.rules.as_deref()).unwrap_or_else(|e| {
            eprintln!("Error loading rules: {e}");
            std::process::exit(1);
        })
    };

    match &cli.command {
        Command::Convert { text } => convert_ops::convert_cmd(&load(), text.as_deref()),
        Command::Stages { text, json } => convert_ops::stages_cmd(&load(), text, *json),
        Command::Accuracy {
            corpus_file,
            category,
            verbose,
            json,
        } => accuracy_ops::accuracy_cmd(
            &load(),
            corpus_file,
            category.as_deref(),
            *verbose,
            *json,
        ),
        Command::RulesExport => rules_ops::rules_export(),
        Command::RulesValidate { file } => rules_ops::rules_validate(file),
    }
}
