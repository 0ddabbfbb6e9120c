//! Treasure Manager CLI
//!
//! Runs one operation against one hunt and exits.

use std::io;
use std::process;

use clap::{ArgAction, Parser};
use treasure_hunt::command::{run, Command};
use treasure_hunt::hunt::validate_hunt_id;
use treasure_hunt::logging::{init_logging, Verbosity};
use treasure_hunt::{Config, HuntStore};

/// Treasure Manager
#[derive(Parser, Debug)]
#[command(name = "treasure_manager")]
#[command(about = "Manage treasure hunts stored as flat record files")]
#[command(override_usage = "treasure_manager --<operation> <HUNT_ID> [TREASURE_ID]")]
#[command(version)]
struct Args {
    #[command(flatten)]
    operation: Operation,

    /// Hunt to operate on (a directory in the working directory)
    hunt_id: String,

    /// Treasure id, required by --view and --remove_treasure
    #[arg(allow_negative_numbers = true)]
    treasure_id: Option<i32>,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,

    /// More diagnostics (repeat for trace output)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Exactly one operation per invocation
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct Operation {
    /// Add a treasure, prompting for its fields on stdin
    #[arg(long)]
    add: bool,

    /// List every treasure in the hunt
    #[arg(long)]
    list: bool,

    /// Show one treasure in full
    #[arg(long)]
    view: bool,

    /// Delete one treasure
    #[arg(long = "remove_treasure")]
    remove_treasure: bool,

    /// Delete the hunt and all of its files
    #[arg(long = "remove_hunt")]
    remove_hunt: bool,
}

impl Operation {
    fn name(&self) -> &'static str {
        if self.add {
            "add"
        } else if self.list {
            "list"
        } else if self.view {
            "view"
        } else if self.remove_treasure {
            "remove_treasure"
        } else {
            "remove_hunt"
        }
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging(Verbosity::from_flags(args.quiet, args.verbose));

    let command = match validate_hunt_id(&args.hunt_id)
        .and_then(|_| Command::from_parts(args.operation.name(), &args.hunt_id, args.treasure_id))
    {
        Ok(command) => command,
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(e.exit_code());
        }
    };

    tracing::debug!("treasure_manager v{}: {}", treasure_hunt::VERSION, command);

    let store = HuntStore::new(Config::default());
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    if let Err(e) = run(&store, &command, &mut input, &mut output) {
        tracing::error!("{} failed: {}", command.name(), e);
        process::exit(e.exit_code());
    }
}
