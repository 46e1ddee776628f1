mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use pbix_scan::{ContainerError, DecodeError, LayoutParseError, ScanError};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pbix-scan")]
#[command(about = "Scan exported Power BI reports for custom visuals")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Scan one or more exported .pbix files")]
    Scan {
        #[arg(help = "Paths to exported .pbix files", required = true)]
        paths: Vec<String>,
        #[arg(long, default_value = "local", help = "Workspace name to attach to results")]
        workspace: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, short, help = "Quiet mode: only show the run summary")]
        quiet: bool,
    },
    #[command(about = "Show pages and visuals of one exported report")]
    Info {
        #[arg(help = "Path to the exported .pbix file")]
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Jsonl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan {
            paths,
            workspace,
            format,
            quiet,
        } => commands::scan::run(&paths, &workspace, format, quiet),
        Commands::Info { path } => commands::info::run(&path),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e)
        }
    }
}

fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    if is_internal_error(err) {
        ExitCode::from(3)
    } else {
        ExitCode::from(2)
    }
}

fn is_internal_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.is::<ScanError>()
            || cause.is::<ContainerError>()
            || cause.is::<DecodeError>()
            || cause.is::<LayoutParseError>()
    })
}
