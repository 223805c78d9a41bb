use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use clientscript::{Catalog, Classify, Lookup};
use eyre::{Result, bail};
use log::{debug, info};

use crate::args::{CategoryArg, InstructionArg};

mod args;
mod render;

#[derive(Parser)]
#[command(name = "cs2ops", version, about = "Inspect the ClientScript instruction catalog")]
struct Cli {
    #[command(subcommand)]
    nested: Command,

    /// log level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// show one instruction, by code or mnemonic
    Lookup {
        /// opcode or mnemonic
        #[arg(allow_hyphen_values = true)]
        instruction: InstructionArg,
    },

    /// print the instruction table
    List {
        /// only instructions of this category
        #[arg(short, long)]
        category: Option<CategoryArg>,

        /// only reserved placeholder slots
        #[arg(short, long)]
        reserved: bool,

        /// print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// rebuild the catalog and print a per-category summary
    Check,

    /// print shell completions
    Completions {
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let level = match args.log_level.as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Warn,
    };
    pretty_env_logger::formatted_builder().filter_level(level).init();

    let catalog = Catalog::init()?;
    debug!("catalog ready: {} instructions", catalog.len());

    match args.nested {
        Command::Lookup { instruction } => {
            let lookup = match instruction {
                InstructionArg::Code(code) => catalog.lookup(code),
                InstructionArg::Mnemonic(name) => Lookup::Known(catalog.lookup_by_mnemonic(&name)?),
            };
            render::print_detail(lookup);
        }
        Command::List { category, reserved, json } => {
            let rows: Vec<_> = catalog
                .all()
                .filter(|d| !reserved || d.is_reserved)
                .filter(|d| category.is_none_or(|c| c.matches(&d.category)))
                .collect();
            info!("{} of {} instructions selected", rows.len(), catalog.len());

            if json {
                serde_json::to_writer_pretty(io::stdout().lock(), &rows)?;
                anstream::println!();
            } else {
                rows.into_iter().for_each(render::print_row);
            }
        }
        Command::Check => {
            let rebuilt = Catalog::from_entries(Catalog::builtin_entries())?;
            if rebuilt.len() != catalog.len() {
                bail!("rebuilt catalog has {} entries, expected {}", rebuilt.len(), catalog.len());
            }
            if let Some(d) = rebuilt.all().find(|d| d.is_pseudo() && d.terminates_block()) {
                bail!("pseudo-instruction {} terminates a block", d.mnemonic);
            }
            render::print_summary(&rebuilt);
        }
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cs2ops", &mut io::stdout());
        }
    }

    Ok(())
}
