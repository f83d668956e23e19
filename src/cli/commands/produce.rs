//! `fabrika produce` command - drive an order through the pipeline
//!
//! Runs one pass over the stage chain, starting wherever the furniture
//! currently sits. A failed quality check drops the item back to
//! Elements Manufactured and ends the pass; rerunning the command reworks
//! it from assembly.

use std::path::Path;

use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::{load_state, save_state};
use crate::cli::helpers::styled_status;
use crate::core::{FactoryState, RngSampler};
use crate::entities::{FurnitureState, Worker};
use crate::ops::{
    AssembleOperation, InspectOperation, ManufactureOperation, Operation, PackOperation,
    PrepareOperation, StoreOperation, INSPECTOR_SPECIALIZATION,
};

#[derive(clap::Args, Debug)]
pub struct ProduceArgs {
    /// Order ID, as shown by `fabrika list orders` (prompted when omitted)
    pub id: Option<usize>,
}

pub fn run(args: ProduceArgs, file: &Path) -> Result<()> {
    let mut state = load_state(file)?;
    if state.furnitures.is_empty() {
        return Err(miette::miette!(
            "No orders yet. Place one with 'fabrika order'"
        ));
    }

    let id = match args.id {
        Some(id) => id,
        None => pick_order(&state)?,
    };
    let Some(furniture) = state.furnitures.get(id) else {
        return Err(miette::miette!("No order with ID {}", id));
    };
    if furniture.status().is_terminal() {
        println!(
            "Order {} ({}) is already {}",
            id,
            furniture.furniture_type(),
            styled_status(furniture.status())
        );
        return Ok(());
    }

    println!(
        "--- Producing {} (order {}) ---",
        style(furniture.furniture_type()).bold(),
        id
    );

    // Stages that completed before a later failure have consumed resources,
    // so the floor is saved either way.
    let outcome = drive(&mut state, id);
    save_state(&state, file)?;
    outcome?;

    println!(
        "Status: {}",
        styled_status(state.furnitures[id].status())
    );
    Ok(())
}

fn pick_order(state: &FactoryState) -> Result<usize> {
    let labels: Vec<String> = state
        .furnitures
        .iter()
        .enumerate()
        .map(|(i, f)| {
            format!(
                "{}. {} ({}) - {}",
                i,
                f.furniture_type(),
                f.customer().unwrap_or("no customer"),
                f.status()
            )
        })
        .collect();
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Order to produce")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()
}

fn drive(state: &mut FactoryState, id: usize) -> Result<()> {
    if state.furnitures[id].status() == FurnitureState::Created {
        run_stage(state, id, &mut PrepareOperation)?;
    }
    if state.furnitures[id].status() == FurnitureState::MaterialsPrepared {
        run_stage(state, id, &mut ManufactureOperation)?;
    }
    if state.furnitures[id].status() == FurnitureState::ElementsManufactured {
        run_stage(state, id, &mut AssembleOperation)?;
    }
    if state.furnitures[id].status() == FurnitureState::Assembled {
        inspect(state, id)?;
    }
    if state.furnitures[id].status() == FurnitureState::QualityChecked {
        let mut pack = PackOperation::new(RngSampler::new());
        run_stage(state, id, &mut pack)?;
        println!(
            "    packed with: {}",
            state.furnitures[id].packing_materials().join(", ")
        );
    }
    if state.furnitures[id].status() == FurnitureState::Packed {
        StoreOperation
            .execute(&mut state.floor(), id)
            .map_err(|e| miette::miette!("{}", e))?;
        println!(
            "  storage: handed to {}",
            style(state.workshop.name()).bold()
        );
    }
    Ok(())
}

fn run_stage(
    state: &mut FactoryState,
    id: usize,
    op: &mut dyn Operation,
) -> Result<crate::ops::StageLog> {
    let log = op
        .execute(&mut state.floor(), id)
        .map_err(|e| miette::miette!("{}", e))?;
    match (&log.worker, &log.tool) {
        (Some(worker), Some(tool)) => {
            println!("  {}: done (worker {}, tool {})", log.stage, worker, tool)
        }
        (Some(worker), None) => println!("  {}: done (worker {})", log.stage, worker),
        _ => println!("  {}: done", log.stage),
    }
    Ok(log)
}

fn inspect(state: &mut FactoryState, id: usize) -> Result<()> {
    let Some(inspector) = Worker::first_available_with(&state.workers, INSPECTOR_SPECIALIZATION)
    else {
        println!(
            "  quality check: {} (no free inspector)",
            style("skipped").yellow()
        );
        return Ok(());
    };

    let mut op = InspectOperation::new(inspector, RngSampler::new());
    op.execute(&mut state.floor(), id)
        .map_err(|e| miette::miette!("{}", e))?;

    let item = &state.furnitures[id];
    let score = item.quality_score().unwrap_or_default();
    if item.quality_failed() {
        println!(
            "  quality check: {} (score {}, defects: {})",
            style("FAILED").red().bold(),
            score,
            item.defects().join(", ")
        );
        println!("    rework needed: run produce again for this order");
    } else if item.defects().is_empty() {
        println!(
            "  quality check: {} (score {})",
            style("passed").green(),
            score
        );
    } else {
        println!(
            "  quality check: {} (score {}, minor defects: {})",
            style("passed").green(),
            score,
            item.defects().join(", ")
        );
    }
    Ok(())
}
