//! `fabrika repair` command - tool maintenance

use std::path::Path;

use console::style;
use miette::Result;

use crate::cli::commands::{load_state, save_state};
use crate::entities::FULL_DURABILITY;

#[derive(clap::Args, Debug)]
pub struct RepairArgs {
    /// Name of the tool to repair
    pub tool: String,

    /// Add this much durability instead of a full reset to 100
    #[arg(long)]
    pub by: Option<i32>,
}

pub fn run(args: RepairArgs, file: &Path) -> Result<()> {
    let mut state = load_state(file)?;

    let Some(tool) = state
        .tools
        .iter_mut()
        .find(|t| t.name().eq_ignore_ascii_case(&args.tool))
    else {
        let known: Vec<&str> = state.tools.iter().map(|t| t.name()).collect();
        return Err(miette::miette!(
            "No tool named '{}'. Tools on the floor: {}",
            args.tool,
            known.join(", ")
        ));
    };

    match args.by {
        Some(amount) => {
            tool.repair_by(amount)
                .map_err(|e| miette::miette!("{}", e))?;
            println!(
                "{} {} by {} (now {})",
                style("Repaired").green().bold(),
                tool.name(),
                amount,
                tool.durability()
            );
        }
        None => {
            tool.repair();
            println!(
                "{} {} to full durability ({})",
                style("Repaired").green().bold(),
                tool.name(),
                FULL_DURABILITY
            );
        }
    }

    save_state(&state, file)?;
    Ok(())
}
