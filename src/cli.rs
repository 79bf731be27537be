//! CLI argument parsing via `clap`.

use crate::config::CliOverrides;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "certdrift",
    version,
    about = "Certificate lint regression harness",
    long_about = "certdrift — submit every certificate in a directory to a remote linter and compare the warning tally with checked-in known results.\n\nConfiguration precedence: CLI > certdrift.toml > defaults.",
    after_help = "Examples:\n  certdrift check\n  certdrift check --dir testdata/pem --baseline testdata/knownResults.json\n  certdrift check --output json -v",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v debug, -vv trace)")]
    pub verbose: u8,
    #[arg(short, long, global = true, action = ArgAction::SetTrue, help = "Only log errors")]
    pub quiet: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current certdrift version.")]
    Version,
    /// Lint certificates and compare against known results
    #[command(
        about = "Run the regression check",
        long_about = "Post each certificate to the lint endpoint, tally warning findings by name, and compare the tally with the known results. Exits 1 on any failure or drift.",
        after_help = "Examples:\n  certdrift check --suffix .crt\n  certdrift check --endpoint http://localhost:8080/lintcert --timeout 30"
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Directory scanned for certificates (default: pem)")]
        dir: Option<String>,
        #[arg(long, help = "File name suffix to lint (default: .pem)")]
        suffix: Option<String>,
        #[arg(long, help = "Known results JSON file (default: knownResults.json)")]
        baseline: Option<String>,
        #[arg(long, help = "Lint endpoint URL")]
        endpoint: Option<String>,
        #[arg(long, help = "Linter name counted once per file (default: pkimetal)")]
        linter: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Request timeout in seconds (default: transport default)")]
        timeout: Option<u64>,
    },
}

impl Commands {
    /// CLI overrides for `check`; empty for other commands.
    pub fn overrides(&self) -> CliOverrides {
        match self {
            Commands::Check {
                repo_root,
                dir,
                suffix,
                baseline,
                endpoint,
                linter,
                output,
                timeout,
            } => CliOverrides {
                repo_root: repo_root.clone(),
                dir: dir.clone(),
                suffix: suffix.clone(),
                baseline: baseline.clone(),
                endpoint: endpoint.clone(),
                linter: linter.clone(),
                output: output.clone(),
                timeout: *timeout,
            },
            Commands::Version => CliOverrides::default(),
        }
    }
}
