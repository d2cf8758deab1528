use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aac_docgen::docs::{self, DocumentInfo, DocumentKind};
use aac_docgen::generator::{DocumentState, Generator, GeneratorConfig};

#[derive(Parser)]
#[command(name = "aac-docgen")]
#[command(about = "Planning documentation generator for the AAC Communication App")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write all planning documents to the target directory
    Generate {
        /// Directory to write into (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Emit a machine-readable report instead of progress output
        #[arg(long)]
        json: bool,
    },
    /// List the documents this tool generates
    List {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a single document template to stdout
    Show {
        /// Document name: requirements, roadmap, future_vision, repository_setup
        kind: String,
    },
    /// Verify on-disk documents against the embedded templates
    Check {
        /// Directory to check (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Initialize tracing with output to stderr.
///
/// stdout belongs to the documents themselves (`show`) and to JSON reports,
/// so diagnostics must not interleave with it.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "aac_docgen=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_dir(dir: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

fn run_generate(dir: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::new(resolve_dir(dir)?);
    config.quiet = json;

    tracing::info!(base_dir = %config.base_dir.display(), "generating planning documents");

    if !json {
        println!("Generating AAC Communication App planning documentation...\n");
    }

    let generator = Generator::new(config);
    let report = generator.generate_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n✅ All planning documents created successfully!");
    println!("\n📁 Files created in: {}", report.base_dir.display());
    println!("\nNext steps:");
    println!("1. Review all markdown files");
    println!("2. Run: aac-docgen generate (to regenerate if needed)");
    println!("3. Follow GITHUB_SETUP.md to set up your repository");
    println!("4. Begin Phase 1 development from TODO.md");

    Ok(())
}

fn run_list(json: bool) -> anyhow::Result<()> {
    let infos: Vec<DocumentInfo> = docs::all().iter().map(DocumentInfo::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for info in infos {
        println!(
            "{:<18} {:<18} {:>6} bytes",
            info.kind.as_str(),
            info.filename,
            info.bytes
        );
    }

    Ok(())
}

fn run_show(kind: &str) -> anyhow::Result<()> {
    let kind = DocumentKind::from_str(kind).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid document '{}'. Must be: requirements, roadmap, future_vision, or repository_setup",
            kind
        )
    })?;

    print!("{}", docs::get(kind).template);
    Ok(())
}

fn run_check(dir: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let config = GeneratorConfig::new(resolve_dir(dir)?);
    let generator = Generator::new(config);
    let report = generator.check_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for doc in &report.documents {
            match doc.state {
                DocumentState::Ok => println!("✓ {}", doc.filename),
                state => println!("✗ {} ({})", doc.filename, state.as_str()),
            }
        }
    }

    if !report.all_ok() {
        anyhow::bail!("documents in {} differ from their embedded templates", report.base_dir.display());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Generate { dir, json }) => run_generate(dir, json),
        Some(Commands::List { json }) => run_list(json),
        Some(Commands::Show { kind }) => run_show(&kind),
        Some(Commands::Check { dir, json }) => run_check(dir, json),
        // Default: run the full generation sequence in the current directory
        None => run_generate(None, false),
    }
}
