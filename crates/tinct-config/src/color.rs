use crate::ConfigError;

/// A terminal color as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    Named(NamedColor),
    Rgb { r: u8, g: u8, b: u8 },
    /// 256-color palette index
    Ansi(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Reset,
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
}

impl NamedColor {
    fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "reset" => NamedColor::Reset,
            "black" => NamedColor::Black,
            "dark_grey" | "dark_gray" => NamedColor::DarkGrey,
            "red" => NamedColor::Red,
            "dark_red" => NamedColor::DarkRed,
            "green" => NamedColor::Green,
            "dark_green" => NamedColor::DarkGreen,
            "yellow" => NamedColor::Yellow,
            "dark_yellow" => NamedColor::DarkYellow,
            "blue" => NamedColor::Blue,
            "dark_blue" => NamedColor::DarkBlue,
            "magenta" => NamedColor::Magenta,
            "dark_magenta" => NamedColor::DarkMagenta,
            "cyan" => NamedColor::Cyan,
            "dark_cyan" => NamedColor::DarkCyan,
            "white" => NamedColor::White,
            "grey" | "gray" => NamedColor::Grey,
            _ => return None,
        };
        Some(color)
    }
}

impl ColorSpec {
    /// Parse `name`, `#rrggbb` or `ansi:N`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        let invalid = || ConfigError::InvalidColor(value.to_string());

        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
            };
            return Ok(ColorSpec::Rgb {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
            });
        }

        if let Some(index) = value.strip_prefix("ansi:") {
            return index.parse::<u8>().map(ColorSpec::Ansi).map_err(|_| invalid());
        }

        NamedColor::from_name(&value.to_lowercase())
            .map(ColorSpec::Named)
            .ok_or_else(invalid)
    }
}
