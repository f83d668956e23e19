//! fabrika: furniture factory floor tracker
//!
//! Drives customer orders through a fixed production pipeline (material
//! preparation, element manufacturing, assembly, quality check, packing,
//! storage or delivery) against shared floor resources: warehouse stock,
//! a worker pool, and a tool pool. Floor state persists to a single JSON
//! save file between runs.

pub mod cli;
pub mod core;
pub mod entities;
pub mod ops;
