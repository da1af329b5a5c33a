//! Command-line front end for the capability registry.
//!
//! Usage:
//!   capsearch search terraform
//!   capsearch search a --category security
//!   capsearch details ml models
//!   capsearch --root /srv/mcp index --show-content

use anyhow::{Context, Result, bail};
use capsearch::{CapabilityRegistry, Category};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "capsearch")]
#[command(about = "Look up installed services by category and name")]
struct Cli {
    /// Install root for service paths (defaults to $CAPSEARCH_ROOT, then /opt/mcp).
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Case-insensitive substring search over service names.
    Search {
        query: String,
        /// Restrict the search to one category; unknown names search everything.
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the descriptor for an exact category/service pair.
    Details { category: String, service: String },
    /// List every registered service with its path.
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Read every installed service path into the content index.
    Index {
        /// Include indexed file contents in the output.
        #[arg(long)]
        show_content: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut registry = match cli.root {
        Some(root) => CapabilityRegistry::with_root(root),
        None => CapabilityRegistry::from_env(),
    };

    match cli.command {
        Command::Search { query, category } => {
            let matches = registry.search(&query, category.as_deref());
            print_json(&matches)
        }
        Command::Details { category, service } => {
            let details = registry.capability_details(&category, &service);
            print_json(&details)?;
            if details.is_none() {
                bail!("no capability registered for {category}/{service}");
            }
            Ok(())
        }
        Command::List { category } => {
            let scope = category
                .as_deref()
                .map(Category::try_from)
                .transpose()?;
            for (category, service, descriptor) in registry.iter() {
                if scope.is_some_and(|wanted| wanted != category) {
                    continue;
                }
                println!("{category}/{service}\t{}", descriptor.path().display());
            }
            Ok(())
        }
        Command::Index { show_content } => {
            let report = registry.update_index();
            if show_content {
                let entries: Vec<IndexedEntry<'_>> = registry
                    .index()
                    .iter()
                    .map(|(key, content)| IndexedEntry {
                        key: key.as_str(),
                        content,
                    })
                    .collect();
                print_json(&IndexOutput {
                    report: &report,
                    entries,
                })
            } else {
                print_json(&report)
            }
        }
    }
}

#[derive(Serialize)]
struct IndexedEntry<'a> {
    key: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct IndexOutput<'a> {
    report: &'a capsearch::IndexReport,
    entries: Vec<IndexedEntry<'a>>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{json}");
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
