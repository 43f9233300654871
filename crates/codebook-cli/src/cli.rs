//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use codebook_model::{SemanticType, Sensitivity};
use codebook_report::ReportFormat;

#[derive(Parser)]
#[command(
    name = "codebook",
    version,
    about = "Profile a dataset and generate its codebook or data dictionary",
    long_about = "Profile a tabular dataset and generate documentation for it.\n\n\
                  Infers a type for every column, computes summary statistics and \n\
                  exports a codebook (CSV, text, markdown) or a data dictionary \n\
                  (CSV, markdown) whose hand-edited fields survive re-profiling."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values in trace logs (datasets may contain personal data).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile a dataset and export its codebook.
    Codebook(CodebookArgs),

    /// Profile a dataset and export its data dictionary.
    Dictionary(DictionaryArgs),

    /// Edit a variable in a saved codebook document.
    Edit(EditArgs),

    /// List the entries of the active vocabulary.
    Vocabulary(VocabularyArgs),
}

/// Options shared by every command that profiles a dataset.
#[derive(Args)]
pub struct ProfileArgs {
    /// Delimited text file, or a `.json` dataset preview.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Dataset name shown in exports (default: the input file name).
    #[arg(long = "dataset", value_name = "NAME")]
    pub dataset: Option<String>,

    /// Codebook document from an earlier run whose edits are carried forward.
    #[arg(long = "previous", value_name = "JSON")]
    pub previous: Option<PathBuf>,

    /// Save the assembled codebook document to this path.
    #[arg(long = "save", value_name = "JSON")]
    pub save: Option<PathBuf>,

    #[command(flatten)]
    pub vocabulary: VocabularyArgs,

    /// Output directory for exports (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Profile and summarize without writing exports.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CodebookArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Export format to generate.
    #[arg(long = "format", value_enum, default_value = "all")]
    pub format: CodebookFormatArg,
}

#[derive(Args)]
pub struct DictionaryArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Export format to generate.
    #[arg(long = "format", value_enum, default_value = "all")]
    pub format: DictionaryFormatArg,

    /// Only list variables whose name, label or definition contains this text.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Only list variables of this type.
    #[arg(long = "type", value_name = "TYPE")]
    pub semantic_type: Option<SemanticType>,

    /// Only list variables with this sensitivity.
    #[arg(long = "sensitivity", value_name = "LEVEL")]
    pub sensitivity: Option<Sensitivity>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Codebook document written by `--save`.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Variable to edit.
    #[arg(value_name = "VARIABLE")]
    pub variable: String,

    #[arg(long = "label")]
    pub label: Option<String>,

    #[arg(long = "definition")]
    pub definition: Option<String>,

    #[arg(long = "unit")]
    pub unit: Option<String>,

    /// Public, Internal, Sensitive, PII or "Highly Sensitive".
    #[arg(long = "sensitivity", value_name = "LEVEL")]
    pub sensitivity: Option<Sensitivity>,

    #[arg(long = "source")]
    pub source: Option<String>,

    #[arg(long = "notes")]
    pub notes: Option<String>,

    #[arg(long = "missing-code", value_name = "CODE")]
    pub missing_code: Option<String>,

    /// Override the inferred type (numeric, binary, categorical, text, date).
    #[arg(long = "type", value_name = "TYPE", conflicts_with = "clear_type")]
    pub semantic_type: Option<SemanticType>,

    /// Drop a type override and go back to the inferred type.
    #[arg(long = "clear-type")]
    pub clear_type: bool,

    /// Write the edited document here instead of overwriting DOCUMENT.
    #[arg(long = "output", value_name = "JSON")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct VocabularyArgs {
    /// Vocabulary CSV with Code, Label, Definition and Unit columns.
    #[arg(long = "vocabulary", value_name = "CSV", conflicts_with = "no_vocabulary")]
    pub vocabulary: Option<PathBuf>,

    /// Do not pre-fill labels from any vocabulary.
    #[arg(long = "no-vocabulary")]
    pub no_vocabulary: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CodebookFormatArg {
    Csv,
    Text,
    Markdown,
    All,
}

impl CodebookFormatArg {
    pub fn formats(self) -> Vec<ReportFormat> {
        match self {
            CodebookFormatArg::Csv => vec![ReportFormat::Csv],
            CodebookFormatArg::Text => vec![ReportFormat::Text],
            CodebookFormatArg::Markdown => vec![ReportFormat::Markdown],
            CodebookFormatArg::All => {
                vec![ReportFormat::Csv, ReportFormat::Text, ReportFormat::Markdown]
            }
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DictionaryFormatArg {
    Csv,
    Markdown,
    All,
}

impl DictionaryFormatArg {
    pub fn formats(self) -> Vec<ReportFormat> {
        match self {
            DictionaryFormatArg::Csv => vec![ReportFormat::Csv],
            DictionaryFormatArg::Markdown => vec![ReportFormat::Markdown],
            DictionaryFormatArg::All => vec![ReportFormat::Csv, ReportFormat::Markdown],
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
