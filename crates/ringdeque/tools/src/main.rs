// Dotlanth
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Ringdeque CLI Tool
//!
//! Main entry point for the ringdeque command-line interface.

use clap::{Parser, Subcommand};
use ringdeque_tools::{DemoArgs, ReplayArgs, run_demo, run_replay};
use tracing::Level;

#[derive(Parser)]
#[command(name = "ringdeque")]
#[command(about = "Ringdeque - Resizable double-ended circular buffer")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log buffer resizes and every executed step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in mixed insertion demo
    Demo(DemoArgs),
    /// Replay an operation script against a fresh buffer
    Replay(ReplayArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so report output stays machine readable
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::Demo(args) => run_demo(args)?,
        Commands::Replay(args) => run_replay(args)?,
    }

    Ok(())
}
