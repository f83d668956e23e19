//! `fabrika deliver` command - the alternate terminal route for a packed order

use std::path::Path;

use console::style;
use miette::Result;

use crate::cli::commands::{load_state, save_state};
use crate::ops::{DeliverOperation, Operation};

#[derive(clap::Args, Debug)]
pub struct DeliverArgs {
    /// Order ID, as shown by `fabrika list orders`
    pub id: usize,

    /// Delivery address (falls back to one attached to the order)
    #[arg(long, short = 'a')]
    pub address: Option<String>,
}

pub fn run(args: DeliverArgs, file: &Path) -> Result<()> {
    let mut state = load_state(file)?;

    let mut op = DeliverOperation::new(args.address);
    let log = op
        .execute(&mut state.floor(), args.id)
        .map_err(|e| miette::miette!("{}", e))?;

    save_state(&state, file)?;

    let item = &state.furnitures[args.id];
    if let Some(record) = item.delivery() {
        println!(
            "{} {} to {} (courier {}, {})",
            style("Delivered").green().bold(),
            item.furniture_type(),
            record.address,
            log.worker.as_deref().unwrap_or("unknown"),
            record.delivered_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}
