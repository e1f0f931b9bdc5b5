//! Theme data models

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use super::color::Rgb;

/// Identifier of one of the built-in themes.
///
/// The set is closed: every variant has exactly one registry entry, and the
/// string encodings below are the only forms that ever appear in persisted
/// state or change requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Theme1,
    Theme2,
    Theme3,
}

/// Error returned when a string does not name a known theme.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown theme id '{0}'")]
pub struct UnknownThemeId(pub String);

impl ThemeId {
    /// The fixed string encoding used in persisted state and change requests.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Theme1 => "theme1",
            ThemeId::Theme2 => "theme2",
            ThemeId::Theme3 => "theme3",
        }
    }
}

impl FromStr for ThemeId {
    type Err = UnknownThemeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "theme1" => Ok(ThemeId::Theme1),
            "theme2" => Ok(ThemeId::Theme2),
            "theme3" => Ok(ThemeId::Theme3),
            other => Err(UnknownThemeId(other.to_string())),
        }
    }
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structural arrangement of the page, independent of colors and fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Default,
    /// Collapsible side panel next to the main content.
    Sidebar,
    /// Declared for forward compatibility; no built-in theme uses it yet.
    Grid,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Default => "default",
            Layout::Sidebar => "sidebar",
            Layout::Grid => "grid",
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named color roles shared by every theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRoles {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub accent: Rgb,
}

/// Named font roles; values are font-family specification strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontRoles {
    pub primary: String,
    pub secondary: String,
}

/// Reserved spacing record. Declared in the data model, set by no built-in
/// theme and read by no current consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub padding: String,
    pub margin: String,
    pub border_radius: String,
}

/// Reserved transition record, same status as [`Spacing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration: String,
    pub easing: String,
}

/// Complete theme definition: identity, palette, typography and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    /// Human readable label shown in selection UIs.
    pub name: String,
    pub colors: ColorRoles,
    pub fonts: FontRoles,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}
