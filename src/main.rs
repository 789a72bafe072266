use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cognos_report_analyzer::{analyze_reports, display, AnalyzeOptions};

#[derive(Parser)]
#[command(name = "cognos-report-analyzer")]
#[command(author, version, about = "Fast Rust analyzer for IBM Cognos report specifications")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a report specification and print its structure
    Analyze {
        /// Path to a report XML file, or a directory of report files
        #[arg(short, long)]
        report: PathBuf,

        /// Emit the extracted summaries as JSON
        #[arg(short, long)]
        json: bool,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            report,
            json,
            verbose,
        } => {
            let options = AnalyzeOptions {
                input_path: report,
                verbose,
            };

            let analyzed = analyze_reports(&options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analyzed)?);
            } else {
                for item in &analyzed {
                    if analyzed.len() > 1 {
                        println!("##### {} #####", item.path.display());
                        println!();
                    }
                    display::print_summary(&item.summary);
                }
            }
        }
    }

    Ok(())
}
