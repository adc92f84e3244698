//! Developer CLI for exercising the sponsor-check engine against saved
//! page snapshots.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sponsorcheck::{canonicalize, current_company, extract_jobs, SponsorMatcher, SponsorRegistry};

#[derive(Parser)]
#[command(name = "dev", about = "Sponsor-check engine developer tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a single company name against the registry
    Check {
        /// Raw company display name, e.g. "ASML Holding N.V."
        name: String,
    },
    /// Show the canonical comparison key for a name
    Canon { name: String },
    /// Extract job records from a saved page snapshot
    Extract {
        /// Path to a saved HTML document
        file: PathBuf,
        /// Emit records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Classify the primary company on a saved company profile page
    Company { file: PathBuf },
    /// List the registry entries
    Registry,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sponsorcheck=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let matcher = SponsorMatcher::builtin();

    match cli.command {
        Command::Check { name } => {
            let verdict = matcher.is_sponsor(&name);
            println!(
                "{name:?} -> {}",
                if verdict { "recognized sponsor" } else { "not a recognized sponsor" }
            );
        }

        Command::Canon { name } => {
            println!("{:?}", canonicalize(&name));
        }

        Command::Extract { file, json } => {
            let html = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let jobs = extract_jobs(&html, &matcher);

            if json {
                println!("{}", serde_json::to_string_pretty(&jobs)?);
            } else {
                for job in &jobs {
                    println!(
                        "[{}] {} - {} ({})",
                        if job.is_sponsor { "SPONSOR" } else { "   -   " },
                        job.company_name_clean,
                        job.job_title,
                        job.job_id,
                    );
                }
                println!("{} job(s)", jobs.len());
            }
        }

        Command::Company { file } => {
            let html = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            match current_company(&html, &matcher) {
                Some(verdict) => println!(
                    "{} -> {}",
                    verdict.company_name,
                    if verdict.is_sponsor { "recognized sponsor" } else { "not a recognized sponsor" }
                ),
                None => println!("No company element found on this page"),
            }
        }

        Command::Registry => {
            for entry in SponsorRegistry::builtin().entries() {
                println!("{}: {}", entry.canonical_key, entry.variants.join(", "));
            }
        }
    }

    Ok(())
}
