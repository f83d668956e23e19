//! Core module - floor state, persistence, and shared utilities

pub mod catalog;
pub mod sampler;
pub mod save;
pub mod state;

pub use catalog::CatalogItem;
pub use sampler::{RngSampler, Sampler, ScriptedSampler};
pub use save::{load, save, SaveError, SaveFile};
pub use state::{FactoryState, Floor};
