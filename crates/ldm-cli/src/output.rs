//! Output formatting module

use chrono::NaiveDate;
use ldm_app::OrderAnalysis;
use ldm_domain::service::DateResolution;
use ldm_domain::{CargoAnalysisResult, VehicleSuggestion, VEHICLE_CATALOG};
use ldm_types::{OutputFormat, Result};
use serde_json::json;

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!("\nWarnings:");
    for warning in warnings {
        println!("  - {}", warning);
    }
}

pub fn output_analysis(output_format: OutputFormat, analysis: &OrderAnalysis) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(analysis);
    }

    let cargo = &analysis.cargo_analysis;
    println!("\nOrder Analysis");
    println!("==============");
    println!("Analysis ID:     {}", analysis.analysis_id);
    println!("Reference date:  {}", analysis.reference_date);
    println!(
        "Route:           {} -> {}",
        analysis.pickup_postal_code.as_deref().unwrap_or("?"),
        analysis.delivery_postal_code.as_deref().unwrap_or("?")
    );
    println!(
        "Pickup date:     {}",
        analysis.pickup_date.as_deref().unwrap_or("-")
    );
    println!(
        "Delivery date:   {}",
        analysis.delivery_date.as_deref().unwrap_or("-")
    );
    println!("Urgent:          {}", yes_no(analysis.is_urgent));
    println!("Stackable:       {}", yes_no(analysis.is_stackable));

    println!("\n--- Cargo ---");
    for (i, item) in analysis.cargo_items.iter().enumerate() {
        println!(
            "{:>3}. {:.2} x {:.2} x {:.2} m  x{:<4} {:>8.1} kg/pc",
            i + 1,
            item.length_m,
            item.width_m,
            item.height_m,
            item.quantity,
            item.weight_kg
        );
    }
    if !analysis.defaulted_fields.is_empty() {
        println!("Defaulted fields:");
        for defaulted in &analysis.defaulted_fields {
            println!("  item {}: {}", defaulted.item_index + 1, defaulted.field);
        }
    }
    println!("-------------");

    println!("Vehicle:         {}", analysis.vehicle_requested);
    println!("LDM:             {:.2} / {} m", cargo.ldm, cargo.max_ldm);
    println!("Total weight:    {:.0} kg", cargo.total_weight_kg);
    println!("Fits:            {}", yes_no(cargo.fit_in_vehicle));
    println!("Suggestion:      {}", analysis.vehicle_suggestion.identifier());

    print_warnings(&cargo.warnings);

    if !analysis.notices.is_empty() {
        println!("\nNotices:");
        for notice in &analysis.notices {
            println!("  - {}", notice);
        }
    }

    Ok(())
}

pub fn output_cargo_results(
    output_format: OutputFormat,
    results: &[CargoAnalysisResult],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return match results {
            [single] => print_json(single),
            _ => print_json(&results),
        };
    }

    println!(
        "{:<10} {:>8} {:>8} {:>10} {:>5}",
        "Vehicle", "LDM", "Max", "Weight", "Fits"
    );
    println!("{}", "-".repeat(45));
    for result in results {
        println!(
            "{:<10} {:>8.2} {:>8.1} {:>7.0} kg {:>5}",
            result.vehicle_used.identifier(),
            result.ldm,
            result.max_ldm,
            result.total_weight_kg,
            yes_no(result.fit_in_vehicle)
        );
    }

    for result in results {
        if !result.warnings.is_empty() {
            println!("\n[{}]", result.vehicle_used);
            for warning in &result.warnings {
                println!("  - {}", warning);
            }
        }
    }

    Ok(())
}

pub fn output_suggestion(
    output_format: OutputFormat,
    suggestion: &VehicleSuggestion,
    results: &[CargoAnalysisResult],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(suggestion);
    }

    println!("Suggested vehicle: {}", suggestion.identifier());
    if let Some(ref reason) = suggestion.reason {
        println!("Reason:            {}", reason);
    }
    println!();
    output_cargo_results(output_format, results)
}

pub fn output_vehicles(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&VEHICLE_CATALOG);
    }

    println!(
        "{:<10} {:>8} {:>8} {:>8} {:>8} {:>10}",
        "Vehicle", "Length", "Width", "Height", "Max LDM", "Max kg"
    );
    println!("{}", "-".repeat(57));
    for profile in &VEHICLE_CATALOG {
        println!(
            "{:<10} {:>5} cm {:>5} cm {:>5} cm {:>8.1} {:>10}",
            profile.kind.identifier(),
            profile.length_cm,
            profile.width_cm,
            profile.height_cm,
            profile.max_ldm,
            profile.max_weight_kg
        );
    }
    Ok(())
}

pub fn output_date(
    output_format: OutputFormat,
    text: &str,
    reference: NaiveDate,
    resolution: &DateResolution,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({
            "input": text,
            "reference_date": reference,
            "resolved": resolution.is_resolved(),
            "date": resolution.to_string(),
        }));
    }

    println!("{}", resolution);
    if !resolution.is_resolved() {
        eprintln!("Warning: '{}' could not be resolved relative to {}", text, reference);
    }
    Ok(())
}
