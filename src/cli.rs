use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "proteinhub",
    version,
    about = "Local-first protein analysis workbench: browse the protein database, run disease-risk predictions, manage a saved collection."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Backend host; local hosts use the development endpoints
    #[arg(long, global = true, value_name = "HOST")]
    pub host: Option<String>,

    /// Directory for locally stored collections
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and filter the protein database.
    Search(SearchArgs),
    /// Show one protein record by accession id.
    Show {
        /// Protein accession id (e.g. P01308)
        id: String,
    },
    /// Pin a protein to the local saved collection.
    Save {
        id: String,
    },
    /// Remove a protein from the saved collection.
    Remove {
        id: String,
    },
    /// List, export or clear the saved collection.
    Saved(SavedArgs),
    /// Submit a sequence for disease-risk prediction.
    Predict(PredictArgs),
    /// Show the analysis report for a job (latest when omitted).
    Result {
        job_id: Option<String>,
    },
    /// Prediction history, newest first.
    History,
    /// Compare two database proteins side by side.
    Compare {
        id_1: String,
        id_2: String,
    },
    /// Align two sequences.
    Align {
        sequence_1: String,
        sequence_2: String,
    },
    /// Similarity score between two sequences.
    Similarity {
        sequence_1: String,
        sequence_2: String,
    },
    /// Database-wide statistics.
    Stats,
    /// Local overview: counters plus recent saves and predictions.
    Dashboard {
        /// Keep refreshing every two seconds as the store changes
        #[arg(long)]
        watch: bool,
    },
    /// Bulk-import proteins from a CSV file.
    Import {
        path: PathBuf,
    },
    /// Rename or re-annotate a protein record.
    Update {
        id: String,
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
        #[arg(long, value_name = "TEXT")]
        function: Option<String>,
    },
    /// Delete a protein record from the backend.
    Delete {
        id: String,
    },
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Free-text query matched against id, name, gene, organism and function
    pub query: Option<String>,

    /// Restrict to an organism (exact name; repeatable)
    #[arg(long = "organism", value_name = "NAME")]
    pub organisms: Vec<String>,

    /// Require a function keyword (repeatable)
    #[arg(long = "function", value_name = "KEYWORD")]
    pub functions: Vec<String>,

    /// Minimum sequence length, inclusive
    #[arg(long, value_name = "INT")]
    pub min_length: Option<u32>,

    /// Maximum sequence length, inclusive
    #[arg(long, value_name = "INT")]
    pub max_length: Option<u32>,

    /// Minimum molecular weight in Daltons, inclusive
    #[arg(long, value_name = "FLOAT")]
    pub min_weight: Option<f64>,

    /// Maximum molecular weight in Daltons, inclusive
    #[arg(long, value_name = "FLOAT")]
    pub max_weight: Option<f64>,

    /// 1-based result page
    #[arg(short, long, value_name = "INT")]
    pub page: Option<usize>,

    /// Results per page
    #[arg(long, value_name = "INT")]
    pub page_size: Option<usize>,
}

/// Arguments for the `saved` subcommand.
#[derive(Args, Debug)]
pub struct SavedArgs {
    /// Export the collection instead of listing it (json or csv)
    #[arg(long, value_name = "FORMAT")]
    pub export: Option<String>,

    /// Directory the export file is written to (defaults to the current one)
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Remove every saved protein
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Sequence text; may include a FASTA header
    pub sequence: Option<String>,

    /// Read the sequence from a file (.fasta, .fa, .txt, .csv, .pdb)
    #[arg(short, long, value_name = "PATH", conflicts_with = "sequence")]
    pub file: Option<PathBuf>,

    /// Display name for the submission
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Gene symbol
    #[arg(long, value_name = "GENE")]
    pub gene: Option<String>,

    /// Inference model (defaults to lightgbm_best)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Organism annotation
    #[arg(long, value_name = "NAME")]
    pub organism: Option<String>,

    /// Protein family annotation
    #[arg(long, value_name = "NAME")]
    pub family: Option<String>,
}
