// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, routes each subcommand to the
// application layer and prints the outcome. No text analysis or
// question logic lives here.
//
//   generate — material → questions → session file (+ optional PDF)
//   edit     — override one answer in a session file
//   export   — session file → PDF
//   show     — session file → terminal

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use commands::{Commands, EditArgs, ExportArgs, GenerateArgs, ShowArgs};

use crate::application::{generate_use_case::GenerateUseCase, session::QuizSession};
use crate::data::loader::FileLoader;
use crate::domain::{document::Document, traits::{DocumentSource, MaterialStore}};
use crate::infra::{
    material_store::FileMaterialStore,
    pdf_export::render_pdf,
    session_file::SessionFile,
};

#[derive(Parser, Debug)]
#[command(
    name = "soal-gen",
    version,
    about = "Generate multiple-choice and essay questions from study material."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => run_generate(args),
            Commands::Edit(args)     => run_edit(args),
            Commands::Export(args)   => run_export(args),
            Commands::Show(args)     => run_show(args),
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let document = match (&args.file, &args.text) {
        (Some(path), _)    => FileLoader::new(path).load()?,
        (None, Some(text)) => Document::new("<text>", text.as_str()),
        (None, None)       => anyhow::bail!("either --file or --text is required"),
    };
    tracing::info!("Material '{}': {} words", document.source, document.word_count());
    if document.is_blank() {
        tracing::warn!("No text could be extracted from '{}'", document.source);
    }

    if let Some(dir) = &args.store_dir {
        let id = FileMaterialStore::new(dir).store(&document.text)?;
        println!("Material stored as {id}");
    }

    let use_case  = GenerateUseCase::new((&args).into());
    let questions = use_case.execute(&document.text)?;
    let session   = QuizSession::new(args.question_type, questions);

    print_session(&session);
    SessionFile::new(&args.session).save(&session)?;
    println!("\nSession saved to '{}'", args.session.display());

    if let Some(out) = &args.export {
        write_pdf(&session, out)?;
    }
    Ok(())
}

fn run_edit(args: EditArgs) -> Result<()> {
    let file = SessionFile::new(&args.session);
    let mut session = file.load()?;

    session.update_answer(question_index(args.number)?, &args.answer)?;
    file.save(&session)?;

    println!("Question {} updated.", args.number);
    Ok(())
}

/// Shown numbers start at 1, session indices at 0
fn question_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .context("question numbers start at 1")
}

fn run_export(args: ExportArgs) -> Result<()> {
    let session = SessionFile::new(&args.session).load()?;
    write_pdf(&session, &args.out)
}

fn run_show(args: ShowArgs) -> Result<()> {
    let session = SessionFile::new(&args.session).load()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        print_session(&session);
    }
    Ok(())
}

fn write_pdf(session: &QuizSession, out: &std::path::Path) -> Result<()> {
    let bytes = render_pdf(&session.questions, session.question_type)?;
    fs::write(out, bytes).with_context(|| format!("Cannot write PDF to '{}'", out.display()))?;
    println!("Exported {} questions to '{}'", session.len(), out.display());
    Ok(())
}

fn print_session(session: &QuizSession) {
    if session.is_empty() {
        println!("No questions could be generated from this material.");
        return;
    }
    for (i, q) in session.questions.iter().enumerate() {
        println!("\n{}. {}", i + 1, q.prompt());
        if let Some(options) = q.options() {
            for (letter, option) in ('A'..='Z').zip(options) {
                println!("   {letter}. {option}");
            }
        }
        let edited = if q.is_edited() { " (diedit)" } else { "" };
        println!("   Jawaban: {}{}", q.answer(), edited);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_number_to_index() {
        assert_eq!(question_index(1).unwrap(), 0);
        assert_eq!(question_index(3).unwrap(), 2);
    }

    #[test]
    fn test_question_number_zero_rejected() {
        let err = question_index(0).unwrap_err();
        assert_eq!(err.to_string(), "question numbers start at 1");
    }
}
