//! Error message formatting
//!
//!     error: cannot convert `ft` (Length) to `s` (Time)
//!       = note: only units of the same dimension can be converted

use anstream::eprintln;
use giorgi_shared::error::{Context, GiorgiError};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// Prints a formatted error message to stderr
pub fn print(error: &GiorgiError, use_colors: bool) {
    let error_string = error_to_string(error, use_colors);
    eprintln!("{error_string}");
}

/// Converts an error to a formatted string representation
fn error_to_string(error: &GiorgiError, use_colors: bool) -> String {
    let message_line = get_message_line("error", stylesheet::ERROR_COLOR, error.message(), use_colors);
    let context_lines = error
        .context()
        .iter()
        .map(|context| get_context_line(context, use_colors));

    std::iter::once(message_line)
        .chain(context_lines)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats a note or help line
fn get_context_line(context: &Context, use_colors: bool) -> String {
    let (kind, kind_color) = match context {
        Context::Note(_) => ("note", stylesheet::NOTE_COLOR),
        Context::Help(_) => ("help", stylesheet::HELP_COLOR),
    };

    let kind_str = paint(kind, kind_color, use_colors);
    format!("  = {kind_str}: {}", context.message())
}

/// Formats a message line with a colored prefix
fn get_message_line(kind: &str, kind_color: Style, message: &str, use_colors: bool) -> String {
    // <kind>: <message>
    let kind_str = paint(kind, kind_color, use_colors);
    let message_line = format!("{kind_str}: {message}");

    if use_colors {
        message_line.bold().to_string()
    } else {
        message_line
    }
}

fn paint(text: &str, style: Style, use_colors: bool) -> String {
    if use_colors {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
