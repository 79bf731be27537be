//! certdrift CLI binary entry point.
//! Resolves configuration, runs the harness, and maps the outcome to an exit code.

use certdrift::cli::{Cli, Commands};
use certdrift::client::{HttpLintClient, HttpOptions};
use certdrift::error::HarnessError;
use certdrift::{config, harness, output, utils};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let overrides = cli.cmd.overrides();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check { .. } => {
            let eff = match config::resolve_effective(&overrides) {
                Ok(eff) => eff,
                Err(e) => fail(&e),
            };
            if !eff.config_found && eff.output != "json" {
                eprintln!(
                    "{} No certdrift.toml found; using defaults.",
                    utils::note_prefix()
                );
            }
            if eff.output != "json" {
                eprintln!(
                    "{} Linting {} files under {} via {}",
                    utils::info_prefix(),
                    eff.suffix,
                    display_path(&eff.dir, &eff.repo_root),
                    eff.endpoint
                );
            }
            let client = match HttpLintClient::new(&HttpOptions {
                endpoint: eff.endpoint.clone(),
                user_agent: eff.user_agent.clone(),
                timeout: eff.timeout,
            }) {
                Ok(c) => c,
                Err(e) => fail(&e),
            };
            match harness::run(&eff, &client) {
                Ok(report) => {
                    output::print_report(&report, &eff.output);
                    if !report.passed() {
                        std::process::exit(1);
                    }
                }
                Err(e) => fail(&e),
            }
        }
    }
}

fn fail(e: &HarnessError) -> ! {
    eprintln!("{} {}", utils::error_prefix(), e);
    std::process::exit(1);
}

fn display_path(path: &std::path::Path, root: &std::path::Path) -> String {
    pathdiff::diff_paths(path, root)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

fn init_logging(verbosity: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbosity {
            0 => EnvFilter::new("certdrift=warn"),
            1 => EnvFilter::new("certdrift=debug"),
            2 => EnvFilter::new("certdrift=trace"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
