//! `fabrika list` command - tabled views of the floor state

use std::path::Path;

use clap::ValueEnum;
use console::style;
use miette::Result;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::commands::load_state;
use crate::cli::helpers::truncate_str;
use crate::core::FactoryState;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Subject {
    /// Orders in and out of production
    Orders,
    /// The worker pool
    Workers,
    /// The tool pool
    Tools,
    /// Registered customers
    Customers,
    /// Furniture the workshop has taken custody of
    Completed,
    /// Warehouse stock levels
    Stock,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// What to list
    #[arg(value_enum, default_value = "orders")]
    pub subject: Subject,
}

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: usize,
    #[tabled(rename = "Type")]
    furniture_type: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct WorkerRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Specialization")]
    specialization: String,
    #[tabled(rename = "Experience")]
    experience: u32,
    #[tabled(rename = "State")]
    state: String,
}

#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Tool")]
    name: String,
    #[tabled(rename = "Durability")]
    durability: i32,
    #[tabled(rename = "Condition")]
    condition: String,
}

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Orders")]
    orders: String,
}

#[derive(Tabled)]
struct StockRow {
    #[tabled(rename = "Warehouse")]
    name: String,
    #[tabled(rename = "Capacity")]
    capacity: f64,
    #[tabled(rename = "Metal")]
    metal: f64,
    #[tabled(rename = "Wood")]
    wood: f64,
    #[tabled(rename = "Free")]
    free: f64,
}

pub fn run(args: ListArgs, file: &Path) -> Result<()> {
    let state = load_state(file)?;
    match args.subject {
        Subject::Orders => orders(&state),
        Subject::Workers => workers(&state),
        Subject::Tools => tools(&state),
        Subject::Customers => customers(&state),
        Subject::Completed => completed(&state),
        Subject::Stock => stock(&state),
    }
    Ok(())
}

fn print_table<R: Tabled>(rows: Vec<R>) {
    if rows.is_empty() {
        println!("{}", style("(nothing to show)").dim());
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

fn orders(state: &FactoryState) {
    let rows: Vec<OrderRow> = state
        .furnitures
        .iter()
        .enumerate()
        .map(|(id, f)| OrderRow {
            id,
            furniture_type: f.furniture_type().to_string(),
            customer: truncate_str(f.customer().unwrap_or("-"), 24),
            status: f.status().to_string(),
        })
        .collect();
    print_table(rows);
}

fn workers(state: &FactoryState) {
    let rows: Vec<WorkerRow> = state
        .workers
        .iter()
        .map(|w| WorkerRow {
            name: w.name().to_string(),
            specialization: w.specialization().to_string(),
            experience: w.experience(),
            state: if w.is_busy() { "busy" } else { "free" }.to_string(),
        })
        .collect();
    print_table(rows);
}

fn tools(state: &FactoryState) {
    let rows: Vec<ToolRow> = state
        .tools
        .iter()
        .map(|t| ToolRow {
            name: t.name().to_string(),
            durability: t.durability(),
            condition: if t.is_broken() { "BROKEN" } else { "ok" }.to_string(),
        })
        .collect();
    print_table(rows);
}

fn customers(state: &FactoryState) {
    let rows: Vec<CustomerRow> = state
        .customers
        .iter()
        .map(|c| CustomerRow {
            name: truncate_str(c.name(), 24),
            phone: c.phone().to_string(),
            orders: c
                .orders()
                .iter()
                .map(|o| format!("{} x{}", o.furniture_type(), o.quantity()))
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();
    print_table(rows);
}

fn completed(state: &FactoryState) {
    println!("{}", style(state.workshop.name()).bold());
    let rows: Vec<OrderRow> = state
        .workshop
        .completed()
        .iter()
        .filter_map(|&id| state.furnitures.get(id).map(|f| (id, f)))
        .map(|(id, f)| OrderRow {
            id,
            furniture_type: f.furniture_type().to_string(),
            customer: truncate_str(f.customer().unwrap_or("-"), 24),
            status: f.status().to_string(),
        })
        .collect();
    print_table(rows);
    println!("Total completed: {}", state.workshop.completed_count());
}

fn stock(state: &FactoryState) {
    let rows: Vec<StockRow> = [&state.material_storage, &state.finished_storage]
        .into_iter()
        .map(|w| StockRow {
            name: w.name().to_string(),
            capacity: w.capacity(),
            metal: w.metal_amount(),
            wood: w.wood_amount(),
            free: w.available_space(),
        })
        .collect();
    print_table(rows);
}
