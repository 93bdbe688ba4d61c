use crate::cli::Cli;
use crate::error::{CaError, Result};
use crate::model::{Catalog, Roster};

/// Per-run state: the fixed career catalog, the in-memory profile roster,
/// and the output knobs from the CLI. Nothing survives the process.
pub struct AppContext {
    pub catalog: Catalog,
    pub roster: Roster,
    pub robot_mode: bool,
    pub top_n: usize,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.top == 0 {
            return Err(CaError::validation("--top must be at least 1"));
        }
        Ok(Self {
            catalog: Catalog::builtin()?,
            roster: Roster::new(),
            robot_mode: cli.robot,
            top_n: cli.top,
        })
    }
}
