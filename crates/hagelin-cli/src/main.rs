//! Hagelin command-line utility.
//!
//! # Usage
//!
//! ```bash
//! # Generate a key list and store it
//! hagelin generate --indicator FM --key-file keys.toml
//!
//! # Encrypt with the standard procedure
//! hagelin encrypt --key-file keys.toml --indicator FM --plaintext "ATTACK AT DAWN"
//!
//! # Decrypt (the key list indicator is read from the message)
//! hagelin decrypt --key-file keys.toml --ciphertext "GGABC DEFFM ..."
//! ```

// The utility's whole purpose is to print results for the operator.
#![allow(clippy::print_stdout)]

mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use hagelin_core::{KeyList, MessageOptions, Procedure};
use hagelin_keygen::KeyListGenerator;

/// M-209 converter simulator
#[derive(Parser, Debug)]
#[command(name = "hagelin")]
#[command(about = "M-209 cipher machine simulator and key list utility")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a plaintext message using the standard procedure
    Encrypt {
        /// Path to the key list file
        #[arg(short, long, default_value = "hagelin-keys.toml")]
        key_file: PathBuf,

        /// 2-letter indicator of the key list to use
        #[arg(short, long)]
        indicator: String,

        /// Plaintext to encrypt (A-Z and spaces)
        #[arg(short, long)]
        plaintext: String,

        /// 6-letter external message indicator; random if omitted
        #[arg(short, long)]
        ext_ind: Option<String>,

        /// 1-letter system indicator; random if omitted
        #[arg(short, long)]
        sys_ind: Option<char>,

        /// Emit the message without 5-letter grouping
        #[arg(long)]
        ungrouped: bool,
    },

    /// Decrypt a framed message
    Decrypt {
        /// Path to the key list file
        #[arg(short, long, default_value = "hagelin-keys.toml")]
        key_file: PathBuf,

        /// Complete framed ciphertext message
        #[arg(short, long)]
        ciphertext: String,
    },

    /// Generate a random key list and store it
    Generate {
        /// Path to the key list file
        #[arg(short, long, default_value = "hagelin-keys.toml")]
        key_file: PathBuf,

        /// 2-letter indicator to label the new key list with
        #[arg(short, long)]
        indicator: String,

        /// Replace an existing key list with the same indicator
        #[arg(long)]
        overwrite: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    match cli.command {
        Command::Encrypt { key_file, indicator, plaintext, ext_ind, sys_ind, ungrouped } => {
            let key_list = load_key_list(&key_file, &indicator)?;
            let mut procedure = Procedure::with_key_list(key_list)?;
            let options = MessageOptions {
                external_indicator: ext_ind,
                system_indicator: sys_ind,
                group: !ungrouped,
                ..MessageOptions::default()
            };
            let message = procedure.encrypt(&plaintext, &options, &mut rand::thread_rng())?;
            println!("{message}");
        },

        Command::Decrypt { key_file, ciphertext } => {
            // The message names its own key list.
            let parsed = Procedure::parse_message(&ciphertext)?;
            let key_list = load_key_list(&key_file, &parsed.key_list_indicator)?;
            let mut procedure = Procedure::with_key_list(key_list)?;
            let plaintext = procedure.decrypt(&ciphertext)?;
            println!("{plaintext}");
        },

        Command::Generate { key_file, indicator, overwrite } => {
            let mut generator = KeyListGenerator::new(rand::thread_rng());
            let key_list = generator.generate(&indicator)?;
            store::save(&key_file, &key_list, overwrite)?;
            print_key_list(&key_list);
        },
    }

    Ok(())
}

fn load_key_list(
    key_file: &std::path::Path,
    indicator: &str,
) -> Result<KeyList, Box<dyn std::error::Error>> {
    store::load(key_file, indicator)?.ok_or_else(|| {
        format!("no key list {indicator} in {}", key_file.display()).into()
    })
}

fn print_key_list(key_list: &KeyList) {
    println!("[{}]", key_list.indicator);
    println!("lugs = {}", key_list.lugs);
    for (n, pins) in key_list.pin_list.iter().enumerate() {
        println!("wheel{} = {pins}", n + 1);
    }
    println!("check = {}", key_list.letter_check);
}
