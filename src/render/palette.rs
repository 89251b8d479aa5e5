//! Terminal colors for each row tone.

use super::RowTone;
use crate::error::{PeekError, Result};
use crossterm::style::{style, Color, Stylize};

/// Foreground colors used to paint rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub positive: Color,
    pub negative: Color,
    pub neutral: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            positive: Color::Green,
            negative: Color::Red,
            neutral: Color::Grey,
        }
    }
}

impl Palette {
    /// Builds a palette from crossterm color names (`green`, `dark_red`, ...).
    pub fn from_names(positive: &str, negative: &str, neutral: &str) -> Result<Self> {
        Ok(Self {
            positive: parse_color(positive)?,
            negative: parse_color(negative)?,
            neutral: parse_color(neutral)?,
        })
    }

    /// Returns the color for a tone.
    pub fn color(&self, tone: RowTone) -> Color {
        match tone {
            RowTone::Positive => self.positive,
            RowTone::Negative => self.negative,
            RowTone::Neutral => self.neutral,
        }
    }

    /// Paints `text` in the tone's color, followed by a color reset.
    pub fn paint(&self, tone: RowTone, text: &str) -> String {
        style(text).with(self.color(tone)).to_string()
    }
}

fn parse_color(name: &str) -> Result<Color> {
    Color::try_from(name.trim()).map_err(|_| PeekError::config(format!("Unknown color '{name}'")))
}
