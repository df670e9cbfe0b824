// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Four subcommands covering one quiz's life cycle:
//
//   generate → edit (any number of times) → export / show
//
// The session file ties them together: `generate` writes it, the
// others read it. Question type and strategy are parsed with their
// FromStr impls, so a typo is rejected before any work starts.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::generate_use_case::GenerateConfig;
use crate::domain::question::QuestionType;
use crate::quiz::QuestionStrategy;

const DEFAULT_SESSION: &str = "quiz_session.json";

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate questions from a .docx / .pdf file or pasted text
    Generate(GenerateArgs),

    /// Override the answer of one question in a saved session
    Edit(EditArgs),

    /// Render a saved session as a printable PDF
    Export(ExportArgs),

    /// Print the questions of a saved session
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Material to read (.docx or .pdf)
    #[arg(long, conflicts_with = "text", required_unless_present = "text")]
    pub file: Option<PathBuf>,

    /// Material given directly on the command line
    #[arg(long)]
    pub text: Option<String>,

    /// Maximum number of questions
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Question type: pg (multiple-choice) or essay
    #[arg(long = "type", default_value = "pg")]
    pub question_type: QuestionType,

    /// Generator family: concept or legacy
    #[arg(long, default_value = "concept")]
    pub strategy: QuestionStrategy,

    /// Seed for a reproducible quiz
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to save the generated session
    #[arg(long, default_value = DEFAULT_SESSION)]
    pub session: PathBuf,

    /// Also render the questions to this PDF
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Keep a copy of the material in this directory
    #[arg(long)]
    pub store_dir: Option<PathBuf>,
}

/// The application layer never sees clap types
impl From<&GenerateArgs> for GenerateConfig {
    fn from(a: &GenerateArgs) -> Self {
        GenerateConfig {
            count:         a.count,
            question_type: a.question_type,
            strategy:      a.strategy,
            seed:          a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct EditArgs {
    #[arg(long, default_value = DEFAULT_SESSION)]
    pub session: PathBuf,

    /// Question number as shown by `show` (starting at 1)
    #[arg(long)]
    pub number: usize,

    /// The new answer
    #[arg(long)]
    pub answer: String,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(long, default_value = DEFAULT_SESSION)]
    pub session: PathBuf,

    /// Output PDF path
    #[arg(long, default_value = "soal.pdf")]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[arg(long, default_value = DEFAULT_SESSION)]
    pub session: PathBuf,

    /// Print as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}
