use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use email_digest::{
    ContentExtractor, EmailInput, EmailStore, ExtractionResult, ExtractorConfig, ProcessedEmail,
    read_email_file,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "email-digest")]
#[command(about = "Extract important phrases, action items and key points from emails")]
#[command(version)]
struct Cli {
    /// Extractor configuration (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process one or more .eml / .txt files
    Process {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Process a subject and body given on the command line
    Manual {
        #[arg(short, long)]
        subject: String,

        #[arg(short, long)]
        body: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List stored emails, newest first
    List {
        #[arg(long)]
        store: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// Remove all stored emails
    Clear {
        #[arg(long)]
        store: PathBuf,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Append results to this JSON store
    #[arg(long)]
    store: Option<PathBuf>,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_extractor(config: Option<&Path>) -> Result<ContentExtractor> {
    let config = match config {
        Some(path) => ExtractorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ExtractorConfig::default(),
    };
    Ok(ContentExtractor::new(config))
}

fn emit(input: EmailInput, extracted: ExtractionResult, output: &OutputArgs) -> Result<()> {
    let processed = match &output.store {
        Some(path) => EmailStore::new(path)
            .record(input, extracted)
            .with_context(|| format!("saving to {}", path.display()))?,
        None => ProcessedEmail::new(input, extracted),
    };

    if output.json {
        println!("{}", serde_json::to_string_pretty(&processed)?);
    } else {
        print_summary(&processed);
    }

    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("  {title}:");
    for item in items {
        println!("    - {item}");
    }
}

fn print_summary(email: &ProcessedEmail) {
    let content = &email.extracted_content;

    println!("{email}");
    print_list("Important phrases", &content.important_phrases);
    print_list("Action items", &content.action_items);
    print_list("Key points", &content.key_points);
    if content.is_empty() {
        println!("  (nothing extracted)");
    }
    println!();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    match cli.command {
        Command::Process { files, output } => {
            let extractor = load_extractor(cli.config.as_deref())?;
            for file in &files {
                let input = read_email_file(file)
                    .with_context(|| format!("reading {}", file.display()))?;
                let extracted = extractor.extract(&input);
                emit(input, extracted, &output)?;
            }
            info!("Processed {} files", files.len());
        }
        Command::Manual {
            subject,
            body,
            output,
        } => {
            let extractor = load_extractor(cli.config.as_deref())?;
            let input = EmailInput::from_form(subject, body)?;
            let extracted = extractor.extract(&input);
            emit(input, extracted, &output)?;
        }
        Command::List { store, json } => {
            let emails = EmailStore::new(&store)
                .load()
                .with_context(|| format!("loading {}", store.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&emails)?);
            } else if emails.is_empty() {
                println!("No processed emails");
            } else {
                println!("Processed emails ({})", emails.len());
                println!();
                emails.iter().for_each(print_summary);
            }
        }
        Command::Clear { store } => {
            EmailStore::new(&store)
                .clear()
                .with_context(|| format!("clearing {}", store.display()))?;
            println!("Cleared {}", store.display());
        }
    }

    Ok(())
}
