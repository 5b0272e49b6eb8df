use clap::{Parser, Subcommand};
use ovlshelf::lang;
use ovlshelf::listing::{self, NameOverrideFn};
use ovlshelf::prefs;
use ovlshelf::scan::{self, ScanConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ovlshelf", about = "Overlay package listing CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List installed overlay packages in display order
    List {
        /// Directory scanned for .ovl packages
        #[arg(short, long, default_value = scan::DEFAULT_ROOT)]
        root: PathBuf,
        /// Preference file, one bare package name per line
        #[arg(short, long)]
        sort_file: Option<PathBuf>,
        /// Language tag used for display-name overrides
        #[arg(short, long, default_value = "en-US")]
        language: String,
        /// Skip the JSON display-name override lookup
        #[arg(long)]
        no_override: bool,
    },
    /// Show the decoded metadata of a single package file
    Info {
        input: PathBuf,
    },
    /// List candidate files without decoding them
    Scan {
        #[arg(short, long, default_value = scan::DEFAULT_ROOT)]
        root: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {

        // ── List ─────────────────────────────────────────────────────────────
        Commands::List { root, sort_file, language, no_override } => {
            let cfg = ScanConfig::at(&root);
            let prefs = prefs::load(&sort_file.unwrap_or_else(prefs::default_path));
            let overrides = lang::json_override(root.join(lang::LANG_DIR), language);
            let lookup: Option<&NameOverrideFn> =
                if no_override { None } else { Some(&overrides) };

            let listing = listing::build(&cfg, &prefs, lookup);
            if listing.is_empty() {
                println!("No overlays found!");
                println!("Place your .ovl files in {}", root.display());
            } else {
                println!("{:<32} {:>12}  Path", "Name", "Version");
                for entry in &listing.entries {
                    println!("{:<32} {:>12}  {}",
                        entry.name, entry.version, entry.path.display());
                }
            }
            if listing.dropped > 0 {
                eprintln!("({} unreadable package(s) skipped)", listing.dropped);
            }
        }

        // ── Info ─────────────────────────────────────────────────────────────
        Commands::Info { input } => {
            let meta = ovlshelf::nro::decode(&input)?;
            println!("── Overlay package ──────────────────────────────────────");
            println!("  Path     {}", input.display());
            println!("  Name     {}", meta.name);
            println!("  Version  {}", meta.version);
        }

        // ── Scan ─────────────────────────────────────────────────────────────
        Commands::Scan { root } => {
            let cfg = ScanConfig::at(&root);
            let found = scan::scan(&cfg);
            println!("{} candidate(s) under {}", found.len(), root.display());
            for candidate in found {
                println!("  {}", candidate.path.display());
            }
        }
    }

    Ok(())
}
