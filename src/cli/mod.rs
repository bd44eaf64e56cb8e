//! CLI 模块

pub mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "study")]
#[command(version)]
#[command(about = "Keep track of study tasks in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the task manager (default)
    Tui,
    /// Print the config file location and the effective settings
    Config,
}
