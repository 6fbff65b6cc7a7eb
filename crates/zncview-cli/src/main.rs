use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zncview_catalog::{dates, UserIndex};
use zncview_irc::parse_line;

#[derive(Parser)]
#[command(name = "zncview")]
#[command(about = "Browse archived ZNC IRC logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an IRC log file and emit structured JSON
    Parse {
        /// Path to a <channel>_<YYYYMMDD>.log file
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// List the users found under a ZNC directory
    Users {
        /// Path to the .znc directory
        #[arg(value_name = "ZNC_DIR")]
        root: PathBuf,
    },
    /// List a user's logs, optionally filtered by channel and/or date
    Logs {
        /// Path to the .znc directory
        #[arg(value_name = "ZNC_DIR")]
        root: PathBuf,
        /// The user whose logs to list
        user: String,
        /// Only logs for this channel
        #[arg(long)]
        channel: Option<String>,
        /// Only logs for this date (YYYYMMDD, YYYY-MM-DD, or "today")
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse { path } => {
            let bytes = fs::read(path)?;
            let content = String::from_utf8_lossy(&bytes);

            let mut lines = Vec::new();
            for raw in content.lines().filter(|line| !line.trim().is_empty()) {
                match parse_line(raw) {
                    Ok(line) => lines.push(line),
                    Err(err) => log::warn!("skipping line: {err}"),
                }
            }
            println!("{}", serde_json::to_string_pretty(&lines)?);
        }
        Commands::Users { root } => {
            let index = UserIndex::open(root)?;
            for user in index.users() {
                println!("{user}");
            }
        }
        Commands::Logs {
            root,
            user,
            channel,
            date,
        } => {
            let catalog = UserIndex::open(root)?.lookup(user)?;
            let date = date.as_deref().map(dates::parse_date).transpose()?;

            let logs = if date.is_none() && channel.is_none() {
                let mut logs = catalog.all();
                logs.sort();
                logs
            } else {
                catalog.filter(date, channel.as_deref())?
            };

            for log_file in logs {
                println!(
                    "{}  {}  {}",
                    log_file.date,
                    log_file.channel,
                    log_file.path.display()
                );
            }
        }
    }
    Ok(())
}
