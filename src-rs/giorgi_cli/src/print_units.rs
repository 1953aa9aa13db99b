//! Listings of dimensions and their units

use giorgi_unit::{Dimension, NumberFormat, Unit};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// Lists dimensions with their main unit symbols, one per line.
pub fn dimensions_to_string(dimensions: &[Dimension], use_colors: bool) -> String {
    let width = dimensions
        .iter()
        .map(|dimension| dimension.name().chars().count())
        .max()
        .unwrap_or(0);

    dimensions
        .iter()
        .map(|dimension| {
            let name = format!("{:<width$}", dimension.name());
            format!(
                "{}  {}",
                paint(&name, stylesheet::DIMENSION_NAME, use_colors),
                paint(dimension.main_unit().symbol(), stylesheet::UNIT_SYMBOL, use_colors)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lists every unit of each dimension under a header with the dimension's
/// name.
pub fn units_to_string(dimensions: &[Dimension], use_colors: bool) -> String {
    dimensions
        .iter()
        .map(|dimension| {
            let main_unit = dimension.main_unit();
            let header = paint(&dimension.name(), stylesheet::DIMENSION_NAME, use_colors);
            let lines = dimension
                .units()
                .iter()
                .map(|unit| unit_line(unit, &main_unit, use_colors))
                .collect::<Vec<_>>();

            format!("{header}\n{}", lines.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn unit_line(unit: &Unit, main_unit: &Unit, use_colors: bool) -> String {
    let symbol = format!("{:<12}", unit.symbol());
    let name = unit.name().unwrap_or("");
    let scale = NumberFormat::General.apply(unit.scale());

    let conversion = if unit.is_affine() {
        format!(
            "(x + {}) × {scale} {}",
            NumberFormat::General.apply(unit.bias()),
            main_unit.symbol()
        )
    } else {
        format!("{scale} {}", main_unit.symbol())
    };

    format!(
        "  {} {name:<28} {}",
        paint(&symbol, stylesheet::UNIT_SYMBOL, use_colors),
        conversion.trim_end()
    )
}

fn paint(text: &str, style: Style, use_colors: bool) -> String {
    if use_colors {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
