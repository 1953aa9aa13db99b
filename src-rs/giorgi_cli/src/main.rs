//! The `giorgi` command line tool

use std::process::ExitCode;

use anstream::println;
use clap::Parser as _;
use giorgi_catalog::Catalog;
use giorgi_shared::error::{AsGiorgiError, GiorgiError};
use giorgi_unit::{NumberFormat, Quantity};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::command::{CliCommand, Commands};

mod command;
mod print_error;
mod print_units;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();
    init_logging(cli.verbose);

    let use_colors = !cli.no_color;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error::print(&error, use_colors);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: CliCommand) -> Result<(), GiorgiError> {
    let catalog = giorgi_catalog::catalog().map_err(|error| to_giorgi_error(&error))?;
    let format = NumberFormat::Fixed(cli.precision);
    let use_colors = !cli.no_color;

    let output = match cli.command {
        Commands::Convert { value, from, to } => convert(catalog, value, &from, &to, format)?,
        Commands::Units { dimension } => {
            let dimensions = match dimension {
                Some(name) => vec![
                    catalog
                        .dimension(&name)
                        .map_err(|error| to_giorgi_error(&error))?,
                ],
                None => catalog.dimensions(),
            };
            print_units::units_to_string(&dimensions, use_colors)
        }
        Commands::Dimensions => print_units::dimensions_to_string(&catalog.dimensions(), use_colors),
        Commands::BestFit { value, unit } => {
            let unit = catalog
                .unit(&unit)
                .map_err(|error| to_giorgi_error(&error))?;
            Quantity::of(value, &unit).to_best_fit_string(format)
        }
    };

    println!("{output}");
    Ok(())
}

fn convert(
    catalog: &Catalog,
    value: f64,
    from: &str,
    to: &str,
    format: NumberFormat,
) -> Result<String, GiorgiError> {
    let (from, to) = catalog
        .conversion(from, to)
        .map_err(|error| to_giorgi_error(&error))?;

    tracing::debug!(
        from = from.symbol(),
        to = to.symbol(),
        dimension = %from.dimension(),
        "converting"
    );

    Quantity::of(value, &from)
        .to_string_in(&to, format)
        .map_err(|error| to_giorgi_error(&error))
}

fn to_giorgi_error(error: &impl AsGiorgiError) -> GiorgiError {
    GiorgiError::from_error(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        giorgi_catalog::catalog().expect("catalog should build")
    }

    #[test]
    fn converts_between_compatible_units() {
        let output = convert(catalog(), -40.0, "°F", "celsius", NumberFormat::Fixed(1));

        assert_eq!(output, Ok("-40.0 °C".to_string()));
    }

    #[test]
    fn incompatible_units_report_both_dimensions() {
        let error = convert(catalog(), 1.0, "ft", "s", NumberFormat::default())
            .expect_err("length and time do not convert");

        assert_eq!(error.message(), "cannot convert `ft` (Length) to `s` (Time)");
        assert_eq!(error.context().len(), 1);
    }
}
