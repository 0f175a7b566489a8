// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the classcode command-line interface.
//!
//! Two subcommands: `check` validates candidate codes in order against one
//! registry, `groups` shows how a word list partitions into representative
//! groups. Both read word lists from JSON arrays or plain newline-separated
//! text files and can emit machine-readable JSON instead of terminal output.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "classcode",
    about = "Class code validation with distracting-word screening",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate candidate codes against a distracting-word list
    Check {
        /// Candidate codes, validated in order against one shared registry
        #[arg(required = true)]
        codes: Vec<String>,

        /// Word list file (JSON array of strings, or newline-separated text)
        #[arg(short, long)]
        words: Option<String>,

        /// Seed file of already-accepted codes
        #[arg(short, long)]
        existing: Option<String>,

        /// Emit a JSON report instead of terminal output
        #[arg(long)]
        json: bool,
    },

    /// Show the representative groups a word list partitions into
    Groups {
        /// Word list file (JSON array of strings, or newline-separated text)
        #[arg(short, long)]
        words: String,

        /// Emit the partition as JSON
        #[arg(long)]
        json: bool,
    },
}
