//! Operations the command-line tool can run
//!
//! Each command targets one hunt and, for `view`/`remove_treasure`, one
//! treasure id. `run` performs it against a store and writes the user-facing
//! result to an output stream.

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::{HuntError, Result};
use crate::prompt;
use crate::report::TreasureDetails;
use crate::store::HuntStore;

/// One operation on one hunt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a treasure and append it
    Add { hunt_id: String },

    /// Print hunt metadata and every treasure
    List { hunt_id: String },

    /// Print one treasure in full
    View { hunt_id: String, treasure_id: i32 },

    /// Delete one treasure
    RemoveTreasure { hunt_id: String, treasure_id: i32 },

    /// Delete the whole hunt
    RemoveHunt { hunt_id: String },
}

impl Command {
    /// Build a command from its operation name (without the leading `--`)
    pub fn from_parts(operation: &str, hunt_id: &str, treasure_id: Option<i32>) -> Result<Self> {
        let hunt_id = hunt_id.to_string();
        let need_id = |op: &str| {
            treasure_id
                .ok_or_else(|| HuntError::usage(format!("Missing treasure ID for {} operation", op)))
        };

        match operation {
            "add" => Ok(Self::Add { hunt_id }),
            "list" => Ok(Self::List { hunt_id }),
            "view" => Ok(Self::View {
                hunt_id,
                treasure_id: need_id(operation)?,
            }),
            "remove_treasure" => Ok(Self::RemoveTreasure {
                hunt_id,
                treasure_id: need_id(operation)?,
            }),
            "remove_hunt" => Ok(Self::RemoveHunt { hunt_id }),
            other => Err(HuntError::usage(format!("Unknown operation: {}", other))),
        }
    }

    pub fn hunt_id(&self) -> &str {
        match self {
            Self::Add { hunt_id }
            | Self::List { hunt_id }
            | Self::View { hunt_id, .. }
            | Self::RemoveTreasure { hunt_id, .. }
            | Self::RemoveHunt { hunt_id } => hunt_id,
        }
    }

    /// Operation name as given on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::List { .. } => "list",
            Self::View { .. } => "view",
            Self::RemoveTreasure { .. } => "remove_treasure",
            Self::RemoveHunt { .. } => "remove_hunt",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{} {}", self.name(), self.hunt_id())?;
        match self {
            Self::View { treasure_id, .. } | Self::RemoveTreasure { treasure_id, .. } => {
                write!(f, " {}", treasure_id)
            }
            _ => Ok(()),
        }
    }
}

/// Execute `command`, reading prompts from `input` and writing results to `output`
///
/// Errors come back untouched; the caller decides how to report them and
/// which exit status they map to.
pub fn run<R, W>(store: &HuntStore, command: &Command, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    match command {
        Command::Add { hunt_id } => {
            if store.ensure_hunt_dir(hunt_id)? {
                writeln!(output, "Created new hunt: {}", hunt_id)?;
            }
            let draft = prompt::read_draft(input, output)?;
            let treasure = store.add_treasure(hunt_id, draft)?;
            writeln!(
                output,
                "Treasure {} added successfully to hunt {}",
                treasure.id, hunt_id
            )?;
        }
        Command::List { hunt_id } => {
            let listing = store.list_treasures(hunt_id)?;
            write!(output, "{}", listing)?;
        }
        Command::View { hunt_id, treasure_id } => {
            let treasure = store.view_treasure(hunt_id, *treasure_id)?;
            write!(output, "{}", TreasureDetails(&treasure))?;
        }
        Command::RemoveTreasure { hunt_id, treasure_id } => {
            store.remove_treasure(hunt_id, *treasure_id)?;
            writeln!(
                output,
                "Treasure {} removed successfully from hunt {}",
                treasure_id, hunt_id
            )?;
        }
        Command::RemoveHunt { hunt_id } => {
            store.remove_hunt(hunt_id)?;
            writeln!(output, "Hunt {} removed successfully", hunt_id)?;
        }
    }
    output.flush()?;
    Ok(())
}
