//! CLI module - argument parsing and command dispatch

pub mod commands;
pub mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fabrika",
    version,
    about = "Furniture factory floor tracker",
    long_about = "Track customer orders through the production pipeline: \
                  material preparation, element manufacturing, assembly, \
                  quality check, packing, and storage or delivery."
)]
pub struct Cli {
    /// Save file holding the floor state
    #[arg(
        long,
        short = 'f',
        global = true,
        default_value = "factory.json",
        env = "FABRIKA_FILE"
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a customer and place an order
    Order(commands::order::OrderArgs),

    /// Run the production pipeline for an order
    Produce(commands::produce::ProduceArgs),

    /// Deliver a packed order to an address
    Deliver(commands::deliver::DeliverArgs),

    /// Show orders, crew, tools, customers, stock, or completed goods
    List(commands::list::ListArgs),

    /// Repair a worn or broken tool
    Repair(commands::repair::RepairArgs),
}
