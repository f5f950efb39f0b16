use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use geoblock::{fetch, loader, GeoDatabase};

#[derive(Parser)]
#[command(name = "geoblock")]
#[command(
    about = "Country lookup for IP addresses",
    long_about = "geoblock - Country lookup for IP addresses backed by sorted range tables\n\n\
    Resolves IPv4 and IPv6 addresses to ISO country codes using the public\n\
    geolite2-country CSV datasets, cached locally and loaded into immutable\n\
    binary-searchable tables at startup.\n\n\
    Examples:\n\
      geoblock update --dir /var/cache/geoblock\n\
      geoblock query 1.0.0.5 2001:db8::10\n\
      geoblock lookup --v4 ipv4.csv --v6 ipv6.csv 8.8.8.8"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download or refresh the two country datasets
    Update {
        /// Directory holding the cached CSV datasets
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Re-download even if the cached files exist
        #[arg(long)]
        force: bool,
    },

    /// Resolve addresses against the cached datasets (downloads them if missing)
    Query {
        /// Directory holding the cached CSV datasets
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// IP addresses to resolve
        #[arg(value_name = "ADDR", required = true)]
        addresses: Vec<String>,
    },

    /// Resolve addresses against explicit CSV files (no network)
    Lookup {
        /// IPv4 range dataset (start,end,country_code per line)
        #[arg(long, value_name = "FILE")]
        v4: PathBuf,

        /// IPv6 range dataset (start,end,country_code per line)
        #[arg(long, value_name = "FILE")]
        v6: PathBuf,

        /// IP addresses to resolve
        #[arg(value_name = "ADDR", required = true)]
        addresses: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Update { dir, force } => cmd_update(&dir, force),
        Commands::Query { dir, addresses } => cmd_query(&dir, &addresses),
        Commands::Lookup { v4, v6, addresses } => cmd_lookup(&v4, &v6, &addresses),
    }
}

fn cmd_update(dir: &Path, force: bool) -> Result<()> {
    fetch::ensure_cached(dir, force)
        .with_context(|| format!("Failed to update datasets in {}", dir.display()))?;
    Ok(())
}

fn cmd_query(dir: &Path, addresses: &[String]) -> Result<()> {
    fetch::ensure_cached(dir, false)
        .with_context(|| format!("Failed to fetch datasets into {}", dir.display()))?;
    let db = GeoDatabase::from_dir(dir)
        .with_context(|| format!("Failed to load datasets from {}", dir.display()))?;
    print_lookups(&db, addresses)
}

fn cmd_lookup(v4: &Path, v6: &Path, addresses: &[String]) -> Result<()> {
    let v4 = loader::load_path(v4).context("Failed to load IPv4 dataset")?;
    let v6 = loader::load_path(v6).context("Failed to load IPv6 dataset")?;
    let db = GeoDatabase::new(v4, v6);
    print_lookups(&db, addresses)
}

/// Print `ADDR CC` per match and `ADDR -` per miss.
///
/// A malformed address is an error (nonzero exit); an address no range
/// covers is a miss, not an error.
fn print_lookups(db: &GeoDatabase, addresses: &[String]) -> Result<()> {
    for address in addresses {
        let addr: IpAddr = address
            .parse()
            .with_context(|| format!("Invalid IP address: {}", address))?;

        match db.lookup(addr) {
            Some(code) => println!("{} {}", address, code),
            None => println!("{} -", address),
        }
    }
    Ok(())
}
