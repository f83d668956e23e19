//! Command implementations
//!
//! Every command loads the floor state from the save file (seeding a fresh
//! floor when none exists), acts on it, and writes the whole file back.

pub mod deliver;
pub mod list;
pub mod order;
pub mod produce;
pub mod repair;

use std::path::Path;

use miette::Result;

use crate::core::{save, FactoryState};

pub(crate) fn load_state(path: &Path) -> Result<FactoryState> {
    match save::load(path).map_err(|e| miette::miette!("{}", e))? {
        Some(state) => Ok(state),
        None => FactoryState::seed().map_err(|e| miette::miette!("{}", e)),
    }
}

pub(crate) fn save_state(state: &FactoryState, path: &Path) -> Result<()> {
    save::save(state, path).map_err(|e| miette::miette!("{}", e))
}
