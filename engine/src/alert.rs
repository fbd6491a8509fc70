//! Alert mode, the only state machine we have.
//!
//! Two states, `Safe` (initial) and `Alert`, and one transition, `toggle`, going both ways.
//! Everything displayed about the mode (labels, colour, glyph) hangs off this enum.
//!
use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Operator-controlled alert flag.
///
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    EnumString,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AlertMode {
    /// System armed, nothing going on
    #[default]
    Safe,
    /// Alert raised by the operator
    Alert,
}

/// Display colour of the status.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Green,
    Red,
}

/// Glyph shown in the toggle button.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    ShieldCheck,
    ShieldExclamation,
}

impl AlertMode {
    /// Flip the mode in place and return the new one.
    ///
    #[inline]
    pub fn toggle(&mut self) -> AlertMode {
        *self = self.toggled();
        *self
    }

    #[inline]
    pub fn toggled(self) -> AlertMode {
        match self {
            AlertMode::Safe => AlertMode::Alert,
            AlertMode::Alert => AlertMode::Safe,
        }
    }

    #[inline]
    pub fn is_active(self) -> bool {
        self == AlertMode::Alert
    }

    /// Status panel text
    ///
    pub fn status_label(self) -> &'static str {
        match self {
            AlertMode::Safe => "✅ System Armed",
            AlertMode::Alert => "🚨 Alert Mode Active",
        }
    }

    /// Text attached to the map marker
    ///
    pub fn popup_label(self) -> &'static str {
        match self {
            AlertMode::Safe => "✅ Safe",
            AlertMode::Alert => "🚨 Alert Mode",
        }
    }

    /// What pressing the button would do
    ///
    pub fn button_label(self) -> &'static str {
        match self {
            AlertMode::Safe => "Enable Alert Mode",
            AlertMode::Alert => "Disable Alert Mode",
        }
    }

    pub fn color(self) -> Color {
        match self {
            AlertMode::Safe => Color::Green,
            AlertMode::Alert => Color::Red,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            AlertMode::Safe => Icon::ShieldCheck,
            AlertMode::Alert => Icon::ShieldExclamation,
        }
    }
}
