//! Convert command handler

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;

use super::ConvertArgs;
use crate::deal::{Deal, build_deal};
use crate::passport::{Passport, load_passport};

/// Handle the convert command: load, map, serialize, write
pub fn handle_convert(args: ConvertArgs) -> Result<()> {
    if !args.file.exists() {
        anyhow::bail!("Input file does not exist: {}", args.file.display());
    }

    let passport = load_passport(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let Some(deal) = build_deal(&passport, Local::now()) else {
        anyhow::bail!("No buildings found in {}", args.file.display());
    };

    let json = if args.compact {
        serde_json::to_string(&deal)
    } else {
        serde_json::to_string_pretty(&deal)
    }
    .context("Failed to serialize deal document")?;

    if args.verbose {
        print_summary(&passport, &deal, json.len());
    }

    if args.stdout {
        println!("{}", json);
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(artifact_filename(&passport.customer_name)));

    fs::write(&path, json.as_bytes())
        .with_context(|| format!("Failed to write output to: {}", path.display()))?;
    log::info!("wrote {}", path.display());

    println!("Wrote {}", path.display().to_string().bright_green());
    Ok(())
}

fn print_summary(passport: &Passport, deal: &Deal, json_size: usize) {
    let total_cleanable: f64 = passport.rows.iter().map(|r| r.cleanable_sq_ft).sum();
    let services: usize = deal.buildings.iter().map(|b| b.services.len()).sum();
    let equipment: usize = deal
        .buildings
        .iter()
        .flat_map(|b| &b.services)
        .map(|s| s.equipment.len())
        .sum();

    println!("Customer: {}", passport.customer_name.cyan());
    println!("Buildings: {}", deal.buildings.len());
    println!("Total cleanable sq ft: {}", total_cleanable);
    println!("Services: {}", services);
    println!("Equipment items: {}", equipment);
    println!("{}", format!("JSON size: {} chars", json_size).dimmed());
    println!();
}

/// Download-artifact filename: customer name with spaces and slashes
/// replaced by underscores
fn artifact_filename(customer: &str) -> String {
    format!("{}_api_input.json", customer.replace([' ', '/'], "_"))
}
