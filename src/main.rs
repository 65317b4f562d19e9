//! Symptom Interview binary entry point.
//!
//! Runs interviews over stdin/stdout and manages the assessment history.
//! All logs go to stderr; stdout carries only the dialogue.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use symptom_interview::catalog::{Catalog, BODY_SYSTEM_CATEGORIES};
use symptom_interview::cli::{
    format_diagnosis, format_history_line, format_question, format_record, help_text,
    parse_answer_line, Command,
};
use symptom_interview::config::Config;
use symptom_interview::engine::{Demographics, InterviewSession};
use symptom_interview::error::{AppError, CommandParseError, StorageError};
use symptom_interview::storage::SqliteStorage;
use symptom_interview::traits::{AssessmentStore, RealTimeProvider};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Initialize logging to stderr only (stdout is for the interview)
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}\n\n{}", help_text());
            std::process::exit(2);
        }
    };

    if command == Command::Help {
        print!("{}", help_text());
        return;
    }

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::debug!(
        "Configuration loaded: database={}, history_limit={}, max_questions={}",
        config.database_path,
        config.history_limit,
        config.max_interview_questions
    );

    if let Err(e) = run(command, &config).await {
        tracing::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config) -> Result<(), AppError> {
    let mut out = tokio::io::stdout();

    if command == Command::Categories {
        let mut text = String::from("Interview categories:\n");
        for category in BODY_SYSTEM_CATEGORIES {
            text.push_str("  ");
            text.push_str(category);
            text.push('\n');
        }
        return write(&mut out, &text).await;
    }

    let storage = SqliteStorage::new(&config.database_path)
        .await?
        .with_history_limit(config.history_limit);

    match command {
        Command::Interview {
            category,
            age,
            gender,
        } => {
            run_interview(
                &storage,
                &mut out,
                config,
                category,
                Demographics::new(age, gender),
            )
            .await
        }
        Command::History { limit } => {
            let records = storage.list_assessments(limit).await?;
            if records.is_empty() {
                return write(&mut out, "No assessments yet.\n").await;
            }
            let total = storage.count_assessments().await?;
            let mut text = String::new();
            for record in &records {
                text.push_str(&format_history_line(record));
                text.push('\n');
            }
            text.push_str(&format!("Showing {} of {total}.\n", records.len()));
            write(&mut out, &text).await
        }
        Command::Show { id } => {
            let record = storage
                .get_assessment(&id)
                .await?
                .ok_or(StorageError::AssessmentNotFound { id })?;
            write(&mut out, &format_record(&record)).await
        }
        Command::Delete { id } => {
            storage.delete_assessment(&id).await?;
            write(&mut out, &format!("Deleted {id}.\n")).await
        }
        Command::Clear => {
            let removed = storage.clear_assessments().await?;
            write(&mut out, &format!("Removed {removed} assessment(s).\n")).await
        }
        Command::Categories | Command::Help => Ok(()),
    }
}

async fn run_interview(
    store: &dyn AssessmentStore,
    out: &mut Stdout,
    config: &Config,
    category: String,
    demographics: Demographics,
) -> Result<(), AppError> {
    let catalog = Catalog::builtin();
    if !BODY_SYSTEM_CATEGORIES.contains(&category.as_str()) || !catalog.has_category(&category) {
        return Err(CommandParseError::InvalidValue {
            flag: "category".into(),
            value: category,
        }
        .into());
    }

    let mut session = InterviewSession::start(
        &catalog,
        category,
        demographics,
        config.max_interview_questions,
    );
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    write(
        out,
        "Answer each question. This is not a substitute for professional care.\n",
    )
    .await?;

    while let Some(question) = session.next_question().cloned() {
        let number = session.questions_presented();
        write(out, &format_question(number, &question)).await?;

        loop {
            write(out, "> ").await?;
            let Some(line) = lines.next_line().await? else {
                tracing::info!("Input closed, interview abandoned");
                return Ok(());
            };
            match parse_answer_line(&question, &line)
                .and_then(|answer| session.answer_question(&question.id, answer))
            {
                Ok(()) => break,
                Err(e) => write(out, &format!("  {e}\n")).await?,
            }
        }
    }

    let (diagnosis, record) = session.finish(&RealTimeProvider);
    write(out, &format_diagnosis(&diagnosis)).await?;

    match store.save_assessment(&record).await {
        Ok(()) => write(out, &format!("\nSaved as {}\n", record.id)).await?,
        Err(e) => tracing::warn!(error = %e, "Failed to save assessment"),
    }
    Ok(())
}

async fn write(out: &mut Stdout, text: &str) -> Result<(), AppError> {
    out.write_all(text.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}
