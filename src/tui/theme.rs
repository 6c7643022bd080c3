// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

use crate::model::SeatStatus;

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn ansi_color(&self, color: Ansi16) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi[color.idx()],
            None => color.into(),
        }
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.ansi_color(Ansi16::Yellow))
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Red))
    }

    pub(crate) fn warning_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightYellow))
    }

    /// Cell style for one seat. Exit styling wins over availability styling;
    /// the underlying status is untouched.
    pub(crate) fn seat_style(&self, status: SeatStatus, exit_row: bool) -> Style {
        if exit_row {
            return self.base_style().fg(self.ansi_color(Ansi16::BrightYellow)).add_modifier(
                Modifier::BOLD,
            );
        }
        match status {
            SeatStatus::Available => self.base_style().fg(self.ansi_color(Ansi16::Green)),
            SeatStatus::Occupied => self.base_style().fg(self.ansi_color(Ansi16::Red)),
            SeatStatus::Blocked => self.base_style().fg(self.ansi_color(Ansi16::BrightBlack)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Ansi16 {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Ansi16 {
    fn idx(self) -> usize {
        self as usize
    }
}

impl From<Ansi16> for Color {
    fn from(color: Ansi16) -> Self {
        match color {
            Ansi16::Black => Color::Black,
            Ansi16::Red => Color::Red,
            Ansi16::Green => Color::Green,
            Ansi16::Yellow => Color::Yellow,
            Ansi16::Blue => Color::Blue,
            Ansi16::Magenta => Color::Magenta,
            Ansi16::Cyan => Color::Cyan,
            Ansi16::White => Color::Gray,
            Ansi16::BrightBlack => Color::DarkGray,
            Ansi16::BrightRed => Color::LightRed,
            Ansi16::BrightGreen => Color::LightGreen,
            Ansi16::BrightYellow => Color::LightYellow,
            Ansi16::BrightBlue => Color::LightBlue,
            Ansi16::BrightMagenta => Color::LightMagenta,
            Ansi16::BrightCyan => Color::LightCyan,
            Ansi16::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const CSV_LEN: usize = 18;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated hex colors (fg,bg,then 16 ANSI slots), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let fg = parse_palette_color(parts[0])?;
        let bg = parse_palette_color(parts[1])?;

        let mut ansi = [Color::Reset; 16];
        for (idx, part) in parts.iter().skip(2).enumerate() {
            ansi[idx] = parse_palette_color(part)?;
        }

        Ok(Self { fg, bg, ansi })
    }
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {value}"));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|err| format!("invalid hex color {value}: {err}"))
    };
    Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    for name in ["CABINVIEW_TUI_PALETTE", "CABINVIEW_PALETTE"] {
        match env::var(name) {
            Ok(value) => {
                let palette = TuiPalette::parse_csv(&value).map_err(|reason| {
                    ThemeError::InvalidEnv { name: name.to_owned(), reason }
                })?;
                return Ok(Some(palette));
            }
            Err(env::VarError::NotPresent) => continue,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: name.to_owned(),
                    reason: "value is not unicode".to_owned(),
                })
            }
        }
    }
    Ok(None)
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
    InvalidEnv { name: String, reason: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, reason } => write!(f, "invalid {name}: {reason}"),
        }
    }
}

impl Error for ThemeError {}

#[cfg(test)]
mod tests {
    use super::{TuiPalette, TuiTheme};
    use crate::model::SeatStatus;

    #[test]
    fn exit_styling_wins_over_status_styling() {
        let theme = TuiTheme::default();
        let exit_occupied = theme.seat_style(SeatStatus::Occupied, true);
        assert_eq!(exit_occupied, theme.seat_style(SeatStatus::Available, true));
        assert_eq!(exit_occupied, theme.seat_style(SeatStatus::Blocked, true));
        assert_ne!(exit_occupied, theme.seat_style(SeatStatus::Occupied, false));
    }

    #[test]
    fn parses_full_palette_csv() {
        let csv = std::iter::repeat("#102030").take(18).collect::<Vec<_>>().join(",");
        let palette = TuiPalette::parse_csv(&csv).expect("palette");
        assert_eq!(palette.ansi.len(), 16);
    }

    #[test]
    fn rejects_short_csv_and_bad_colors() {
        assert!(TuiPalette::parse_csv("#102030,#405060").is_err());
        let mut parts = vec!["#102030"; 17];
        parts.push("nope");
        assert!(TuiPalette::parse_csv(&parts.join(",")).is_err());
    }
}
