// ABOUTME: Entry point for the crilist CLI application.
// ABOUTME: Parses arguments, loads the container snapshot, and prints listings.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use crilist::config::{self, Config};
use crilist::cri::{ContainerFilter, ListContainersRequest};
use crilist::error::Result;
use crilist::output::{Output, OutputMode};
use crilist::server::ContainerService;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = match &cli.command {
        Commands::List { output, .. } => OutputMode::from(*output),
        Commands::Init { .. } => OutputMode::Normal,
    };

    if let Err(e) = run(cli) {
        Output::new(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, force)?;
            println!("Wrote {}", cwd.join(config::CONFIG_FILENAME).display());
            Ok(())
        }
        Commands::List {
            id,
            pod,
            state,
            labels,
            config: config_path,
            output,
        } => {
            let snapshot = match config_path {
                Some(path) => Config::load(&path)?,
                None => Config::discover(&env::current_dir()?)?,
            };

            let filter = ContainerFilter {
                id,
                pod_sandbox_id: pod,
                state: state.map(Into::into),
                label_selector: config::parse_label_selector(&labels)?,
            };

            let service = ContainerService::new(snapshot.into_store()?);
            let response = service.list_containers(&ListContainersRequest::new(filter));

            Output::new(output.into()).print(&response.containers)
        }
    }
}
