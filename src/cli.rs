// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use crilist::cri::ContainerState;
use crilist::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crilist")]
#[command(about = "List and filter containers from a snapshot")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a template crilist.yml snapshot
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List containers matching the given filters
    List {
        /// Exact container ID
        #[arg(long)]
        id: Option<String>,

        /// Exact pod sandbox ID
        #[arg(long)]
        pod: Option<String>,

        /// Container state
        #[arg(long, value_enum)]
        state: Option<StateArg>,

        /// Required label, as KEY=VALUE (repeatable)
        #[arg(short, long = "label")]
        labels: Vec<String>,

        /// Snapshot file (defaults to discovery in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "normal")]
        output: OutputArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StateArg {
    Created,
    Running,
    Exited,
    Unknown,
}

impl From<StateArg> for ContainerState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Created => ContainerState::Created,
            StateArg::Running => ContainerState::Running,
            StateArg::Exited => ContainerState::Exited,
            StateArg::Unknown => ContainerState::Unknown,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Normal,
    Quiet,
    Json,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Normal => OutputMode::Normal,
            OutputArg::Quiet => OutputMode::Quiet,
            OutputArg::Json => OutputMode::Json,
        }
    }
}
