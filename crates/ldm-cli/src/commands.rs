//! Command handlers

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use ldm_app::{Config, OrderAnalysisService};
use ldm_domain::service::date_resolver::resolve_date;
use ldm_domain::service::{evaluate, evaluate_all, normalize_cargo, suggest, NormalizedCargo};
use ldm_domain::VehicleKind;
use ldm_infra::{load_cargo_from_csv, load_order_from_json};
use ldm_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{
    output_analysis, output_cargo_results, output_date, output_suggestion, output_vehicles,
};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // `config` runs without loading the file so `--reset` can recover a corrupt one.
    let settings = || -> Result<(Config, OutputFormat)> {
        let config = Config::load()?;
        let output_format = cli.format.unwrap_or(config.output_format);
        Ok((config, output_format))
    };

    match &cli.command {
        Commands::Analyze {
            order,
            vehicle,
            date,
        } => {
            let (config, output_format) = settings()?;
            cmd_analyze(&config, order.clone(), vehicle.clone(), *date, output_format)
        }

        Commands::Check {
            cargo,
            vehicle,
            all,
        } => {
            let (config, output_format) = settings()?;
            let vehicle = vehicle
                .as_deref()
                .map_or_else(|| config.default_vehicle_kind(), VehicleKind::from_identifier);
            cmd_check(cargo.clone(), vehicle, *all, output_format)
        }

        Commands::Suggest { cargo } => {
            let (_, output_format) = settings()?;
            cmd_suggest(cargo.clone(), output_format)
        }

        Commands::ResolveDate { text, date } => {
            let (_, output_format) = settings()?;
            let reference = date.unwrap_or_else(|| Local::now().date_naive());
            output_date(output_format, text, reference, &resolve_date(text, reference))
        }

        Commands::Vehicles => {
            let (_, output_format) = settings()?;
            output_vehicles(output_format)
        }

        Commands::Config {
            show,
            set_default_vehicle,
            set_output,
            set_telemetry,
            reset,
        } => cmd_config(
            &Config::config_path()?,
            ConfigUpdate {
                show: *show,
                set_default_vehicle: set_default_vehicle.clone(),
                set_output: *set_output,
                set_telemetry: *set_telemetry,
                reset: *reset,
            },
        ),
    }
}

fn cmd_analyze(
    config: &Config,
    order_path: PathBuf,
    vehicle: Option<String>,
    date: Option<NaiveDate>,
    output_format: OutputFormat,
) -> Result<()> {
    let mut order = load_order_from_json(&order_path)?;
    if vehicle.is_some() {
        order.vehicle_type = vehicle;
    }

    let service = OrderAnalysisService::from_config(config);
    let analysis = match date {
        Some(reference) => service.analyze(&order, reference),
        None => service.analyze_today(&order),
    };

    output_analysis(output_format, &analysis)?;

    if !analysis.cargo_analysis.fit_in_vehicle {
        eprintln!(
            "\nWarning: cargo does not fit {} (suggested: {})",
            analysis.vehicle_requested,
            analysis.vehicle_suggestion.identifier()
        );
    }
    Ok(())
}

fn load_cargo(cargo_path: &Path) -> Result<NormalizedCargo> {
    let raw = load_cargo_from_csv(cargo_path)?;
    let cargo = normalize_cargo(&raw);
    for defaulted in &cargo.defaulted {
        eprintln!(
            "Warning: row {}: {} missing or invalid, defaulted",
            defaulted.item_index + 1,
            defaulted.field
        );
    }
    Ok(cargo)
}

fn cmd_check(
    cargo_path: PathBuf,
    vehicle: VehicleKind,
    all: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let cargo = load_cargo(&cargo_path)?;

    let results = if all {
        evaluate_all(&cargo.items)
    } else {
        vec![evaluate(vehicle.profile(), &cargo.items)]
    };

    output_cargo_results(output_format, &results)?;

    if !all && results.iter().any(|r| !r.fit_in_vehicle) {
        eprintln!("\nWarning: cargo does not fit {}", vehicle);
    }
    Ok(())
}

fn cmd_suggest(cargo_path: PathBuf, output_format: OutputFormat) -> Result<()> {
    let cargo = load_cargo(&cargo_path)?;
    let suggestion = suggest(&cargo.items);
    output_suggestion(output_format, &suggestion, &evaluate_all(&cargo.items))
}

/// Options of the `config` command
#[derive(Debug, Default)]
struct ConfigUpdate {
    show: bool,
    set_default_vehicle: Option<String>,
    set_output: Option<OutputFormat>,
    set_telemetry: Option<bool>,
    reset: bool,
}

fn cmd_config(config_path: &Path, update: ConfigUpdate) -> Result<()> {
    let ConfigUpdate {
        show,
        set_default_vehicle,
        set_output,
        set_telemetry,
        reset,
    } = update;

    let mut config = if reset {
        log::debug!("Resetting configuration at {}", config_path.display());
        Config::default()
    } else {
        Config::load_from(config_path)?
    };

    let mut changed = reset;

    if let Some(vehicle) = set_default_vehicle {
        let kind = VehicleKind::from_identifier(&vehicle);
        if kind.identifier() != vehicle.trim().to_lowercase() {
            eprintln!("Note: '{}' maps to {}", vehicle, kind);
        }
        config.default_vehicle = kind.identifier().to_string();
        changed = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if let Some(enabled) = set_telemetry {
        config.telemetry_enabled = enabled;
        changed = true;
    }

    if changed {
        config.save_to(config_path)?;
        println!("Configuration saved.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_reset_recovers_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let update = ConfigUpdate {
            reset: true,
            ..Default::default()
        };
        cmd_config(&path, update).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_config_without_reset_reports_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(cmd_config(&path, ConfigUpdate::default()).is_err());
    }

    #[test]
    fn test_config_set_default_vehicle_normalizes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let update = ConfigUpdate {
            set_default_vehicle: Some("Solowka".to_string()),
            set_output: Some(OutputFormat::Json),
            ..Default::default()
        };
        cmd_config(&path, update).unwrap();

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.default_vehicle, "solówka");
        assert_eq!(saved.output_format, OutputFormat::Json);
    }
}
