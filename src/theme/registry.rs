//! Compiled-in theme table.
//!
//! The registry is fixed at process start and read-only afterwards. Adding a
//! theme means adding a `ThemeId` variant and an entry here; the exhaustive
//! match in [`lookup`] makes the compiler point at every site that must
//! follow.

use enum_iterator::all;
use std::sync::LazyLock;

use super::color::Rgb;
use super::models::{ColorRoles, FontRoles, Layout, Theme, ThemeId};

static THEME1: LazyLock<Theme> = LazyLock::new(|| Theme {
    id: ThemeId::Theme1,
    name: "Minimalist".to_string(),
    colors: ColorRoles {
        primary: Rgb::new(0x3b, 0x82, 0xf6),
        secondary: Rgb::new(0x64, 0x74, 0x8b),
        background: Rgb::new(0xff, 0xff, 0xff),
        surface: Rgb::new(0xf8, 0xfa, 0xfc),
        text: Rgb::new(0x1e, 0x29, 0x3b),
        accent: Rgb::new(0x25, 0x63, 0xeb),
    },
    fonts: FontRoles {
        primary: "Inter, -apple-system, BlinkMacSystemFont, sans-serif".to_string(),
        secondary: "Inter, sans-serif".to_string(),
    },
    layout: Layout::Default,
    spacing: None,
    transition: None,
});

static THEME2: LazyLock<Theme> = LazyLock::new(|| Theme {
    id: ThemeId::Theme2,
    name: "Dark Professional".to_string(),
    colors: ColorRoles {
        primary: Rgb::new(0xfb, 0xbf, 0x24),
        secondary: Rgb::new(0x6b, 0x72, 0x80),
        background: Rgb::new(0x11, 0x18, 0x27),
        surface: Rgb::new(0x1f, 0x29, 0x37),
        text: Rgb::new(0xf9, 0xfa, 0xfb),
        accent: Rgb::new(0xf5, 0x9e, 0x0b),
    },
    fonts: FontRoles {
        primary: "Georgia, 'Times New Roman', serif".to_string(),
        secondary: "Georgia, serif".to_string(),
    },
    layout: Layout::Sidebar,
    spacing: None,
    transition: None,
});

static THEME3: LazyLock<Theme> = LazyLock::new(|| Theme {
    id: ThemeId::Theme3,
    name: "Colorful Playful".to_string(),
    colors: ColorRoles {
        primary: Rgb::new(0xec, 0x48, 0x99),
        secondary: Rgb::new(0x8b, 0x5c, 0xf6),
        background: Rgb::new(0xfd, 0xf2, 0xf8),
        surface: Rgb::new(0xff, 0xff, 0xff),
        text: Rgb::new(0x37, 0x41, 0x51),
        accent: Rgb::new(0xa8, 0x55, 0xf7),
    },
    fonts: FontRoles {
        primary: "'Pacifico', cursive, sans-serif".to_string(),
        secondary: "'Poppins', sans-serif".to_string(),
    },
    layout: Layout::Default,
    spacing: None,
    transition: None,
});

/// Return the theme for an identifier.
///
/// Total over the identifier set: every `ThemeId` has exactly one entry, so
/// there is no failure path.
pub fn lookup(id: ThemeId) -> &'static Theme {
    match id {
        ThemeId::Theme1 => &THEME1,
        ThemeId::Theme2 => &THEME2,
        ThemeId::Theme3 => &THEME3,
    }
}

/// All known themes, in declaration order.
pub fn all_themes() -> impl Iterator<Item = &'static Theme> {
    all::<ThemeId>().map(lookup)
}
