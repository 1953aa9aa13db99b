use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const HELP_COLOR: Style = Style::new().blue();
pub const DIMENSION_NAME: Style = Style::new().bold();
pub const UNIT_SYMBOL: Style = Style::new().green();
