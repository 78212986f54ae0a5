// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tilepack
//!
//! Command-line interface for the tilepack reservation planner.
//!
//! ## Usage
//! ```bash
//! # Show how a pair batch packs at given slot parameters
//! tilepack pack --offset 2 --width 4 --align 4 --count 9
//!
//! # Simulate an NV12 reservation against an in-memory container
//! tilepack reserve --count 9 --width 256 --height 144 --align 256 --offset 128
//!
//! # Print the per-format slot geometry table
//! tilepack geom
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tilepack",
    about = "NV12/2D block reservation planner for tiled memory containers",
    version,
    author
)]
struct Cli {
    /// Path to a TOML surface configuration (defaults to 256×128 slots).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a pair co-packing for slot-domain parameters and print it.
    Pack {
        /// Start offset within the alignment window, in slots.
        #[arg(short, long, default_value_t = 0)]
        offset: u16,

        /// Luma block width in slots.
        #[arg(short, long)]
        width: u16,

        /// Alignment in slots.
        #[arg(short, long, default_value_t = 1)]
        align: u16,

        /// Number of pairs wanted.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u16,
    },

    /// Simulate an NV12 reservation against an in-memory container.
    Reserve {
        /// Number of buffer pairs.
        #[arg(short = 'n', long)]
        count: u32,

        /// Luma plane width in pixels.
        #[arg(short, long)]
        width: u32,

        /// Luma plane height in pixels.
        #[arg(long, default_value_t = 144)]
        height: u32,

        /// Start alignment in bytes.
        #[arg(short, long, default_value_t = 256)]
        align: u32,

        /// Start offset in bytes.
        #[arg(short, long, default_value_t = 0)]
        offset: u32,

        /// Disallow co-packing both planes into one area.
        #[arg(long)]
        no_copack: bool,
    },

    /// Simulate a generic same-format 2D block reservation.
    Blocks {
        /// Number of blocks.
        #[arg(short = 'n', long)]
        count: u32,

        /// Pixel format: 8bit, 16bit, or 32bit.
        #[arg(short, long, default_value = "8bit")]
        format: String,

        /// Block width in pixels.
        #[arg(short, long)]
        width: u32,

        /// Block height in pixels.
        #[arg(long, default_value_t = 64)]
        height: u32,

        /// Start alignment in bytes.
        #[arg(short, long, default_value_t = 512)]
        align: u32,

        /// Start offset in bytes.
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },

    /// Print the per-format slot geometry and band table.
    Geom,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => reservation::SurfaceConfig::from_file(path)?,
        None => reservation::SurfaceConfig::default(),
    };

    match cli.command {
        Commands::Pack { offset, width, align, count } => {
            commands::pack::execute(offset, width, align, count)
        }
        Commands::Reserve { count, width, height, align, offset, no_copack } => {
            commands::reserve::execute(&config, count, width, height, align, offset, !no_copack)
        }
        Commands::Blocks { count, format, width, height, align, offset } => {
            commands::blocks::execute(&config, count, &format, width, height, align, offset)
        }
        Commands::Geom => commands::geom::execute(&config),
    }
}
