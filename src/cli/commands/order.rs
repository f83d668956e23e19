//! `fabrika order` command - register a customer and place an order

use std::path::Path;

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::{load_state, save_state};
use crate::core::CatalogItem;
use crate::entities::{Customer, Furniture};

#[derive(clap::Args, Debug)]
pub struct OrderArgs {
    /// Customer name (prompted when omitted)
    #[arg(long, short = 'c')]
    pub customer: Option<String>,

    /// Customer phone (prompted when omitted)
    #[arg(long, short = 'p')]
    pub phone: Option<String>,

    /// Customer age
    #[arg(long, default_value_t = 30)]
    pub age: u32,

    /// Furniture to order: chair, table, or wardrobe (prompted when omitted)
    #[arg(long, short = 'i')]
    pub item: Option<String>,
}

pub fn run(args: OrderArgs, file: &Path) -> Result<()> {
    let mut state = load_state(file)?;
    let theme = ColorfulTheme::default();

    let name = match args.customer {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt("Customer name")
            .interact_text()
            .into_diagnostic()?,
    };

    let phone = match args.phone {
        Some(phone) => phone,
        None => Input::with_theme(&theme)
            .with_prompt("Phone")
            .interact_text()
            .into_diagnostic()?,
    };

    let item = match args.item {
        Some(raw) => raw
            .parse::<CatalogItem>()
            .map_err(|e| miette::miette!("{}", e))?,
        None => {
            let labels: Vec<&str> = CatalogItem::ALL.iter().map(|i| i.describe()).collect();
            let pick = Select::with_theme(&theme)
                .with_prompt("Furniture")
                .items(&labels)
                .default(0)
                .interact()
                .into_diagnostic()?;
            CatalogItem::ALL[pick]
        }
    };

    let mut customer =
        Customer::new(name.clone(), args.age, phone).map_err(|e| miette::miette!("{}", e))?;
    customer
        .place_order(item.type_name(), 1)
        .map_err(|e| miette::miette!("{}", e))?;
    state.customers.push(customer);

    let materials = item
        .bill_of_materials()
        .map_err(|e| miette::miette!("{}", e))?;
    let mut furniture =
        Furniture::new(item.type_name(), materials).map_err(|e| miette::miette!("{}", e))?;
    furniture.assign_customer(name.clone());
    state.furnitures.push(furniture);
    let order_id = state.furnitures.len() - 1;

    save_state(&state, file)?;

    println!(
        "{} order {} - {} for {}",
        style("Accepted").green().bold(),
        style(order_id).cyan(),
        item.type_name(),
        name
    );
    Ok(())
}
