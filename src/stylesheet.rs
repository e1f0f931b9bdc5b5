//! Global style surface.
//!
//! The active theme's colors and fonts are projected into a process-wide
//! variable table, named like the CSS custom properties the front end
//! consumes, so styling code can read them without holding a `Theme` or
//! going through the store at all. The store is the only writer; every
//! projection fully overwrites the previous theme's values.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use log::debug;

use crate::theme::Theme;

pub const COLOR_PRIMARY: &str = "--color-primary";
pub const COLOR_SECONDARY: &str = "--color-secondary";
pub const COLOR_BACKGROUND: &str = "--color-background";
pub const COLOR_SURFACE: &str = "--color-surface";
pub const COLOR_TEXT: &str = "--color-text";
pub const COLOR_ACCENT: &str = "--color-accent";
pub const FONT_PRIMARY: &str = "--font-primary";
pub const FONT_SECONDARY: &str = "--font-secondary";

/// Every variable name the surface exposes, one per color and font role.
pub const VAR_NAMES: [&str; 8] = [
    COLOR_PRIMARY,
    COLOR_SECONDARY,
    COLOR_BACKGROUND,
    COLOR_SURFACE,
    COLOR_TEXT,
    COLOR_ACCENT,
    FONT_PRIMARY,
    FONT_SECONDARY,
];

#[derive(Default)]
struct Vars {
    table: BTreeMap<&'static str, String>,
    theme_class: Option<String>,
}

/// Writer half of the style surface, owned by the theme store.
#[derive(Default)]
pub struct StyleSheet {
    inner: Rc<RefCell<Vars>>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A read-only view sharing this surface.
    pub fn reader(&self) -> StyleVars {
        StyleVars {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Project `theme` into the variable table, replacing all previous
    /// values. Never a partial merge.
    pub fn apply(&self, theme: &Theme) {
        let mut vars = self.inner.borrow_mut();
        vars.table.clear();
        vars.table
            .insert(COLOR_PRIMARY, theme.colors.primary.to_string());
        vars.table
            .insert(COLOR_SECONDARY, theme.colors.secondary.to_string());
        vars.table
            .insert(COLOR_BACKGROUND, theme.colors.background.to_string());
        vars.table
            .insert(COLOR_SURFACE, theme.colors.surface.to_string());
        vars.table.insert(COLOR_TEXT, theme.colors.text.to_string());
        vars.table
            .insert(COLOR_ACCENT, theme.colors.accent.to_string());
        vars.table.insert(FONT_PRIMARY, theme.fonts.primary.clone());
        vars.table
            .insert(FONT_SECONDARY, theme.fonts.secondary.clone());
        vars.theme_class = Some(format!("theme-{}", theme.id));
        debug!("Style surface now reflects theme {}", theme.id);
    }
}

/// Shared read-only view of the style surface.
///
/// Cloning is cheap and every clone observes the same table.
#[derive(Clone)]
pub struct StyleVars {
    inner: Rc<RefCell<Vars>>,
}

impl StyleVars {
    /// Value of a style variable, once a theme has been applied.
    pub fn get(&self, name: &str) -> Option<String> {
        self.inner.borrow().table.get(name).cloned()
    }

    /// Class marker for the active theme, e.g. `theme-theme2`.
    pub fn theme_class(&self) -> Option<String> {
        self.inner.borrow().theme_class.clone()
    }

    /// Names with a value set, in stable order.
    pub fn names(&self) -> Vec<&'static str> {
        self.inner.borrow().table.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{registry, ThemeId};

    #[test]
    fn surface_is_empty_until_a_theme_is_applied() {
        let sheet = StyleSheet::new();
        let vars = sheet.reader();
        assert_eq!(vars.get(COLOR_PRIMARY), None);
        assert_eq!(vars.theme_class(), None);
        assert!(vars.names().is_empty());
    }

    #[test]
    fn apply_sets_every_variable() {
        let sheet = StyleSheet::new();
        sheet.apply(registry::lookup(ThemeId::Theme1));
        let vars = sheet.reader();
        let mut names = vars.names();
        names.sort_unstable();
        let mut expected = VAR_NAMES.to_vec();
        expected.sort_unstable();
        assert_eq!(names, expected);
        assert_eq!(vars.get(COLOR_BACKGROUND).as_deref(), Some("#ffffff"));
        assert_eq!(vars.theme_class().as_deref(), Some("theme-theme1"));
    }

    #[test]
    fn apply_overwrites_the_previous_theme_completely() {
        let sheet = StyleSheet::new();
        let vars = sheet.reader();
        sheet.apply(registry::lookup(ThemeId::Theme1));
        sheet.apply(registry::lookup(ThemeId::Theme2));
        assert_eq!(vars.get(COLOR_BACKGROUND).as_deref(), Some("#111827"));
        assert_eq!(
            vars.get(FONT_PRIMARY).as_deref(),
            Some("Georgia, 'Times New Roman', serif")
        );
        assert_eq!(vars.theme_class().as_deref(), Some("theme-theme2"));
    }

    #[test]
    fn readers_share_the_surface() {
        let sheet = StyleSheet::new();
        let first = sheet.reader();
        let second = first.clone();
        sheet.apply(registry::lookup(ThemeId::Theme3));
        assert_eq!(first.get(COLOR_ACCENT), second.get(COLOR_ACCENT));
        assert_eq!(first.get(COLOR_ACCENT).as_deref(), Some("#a855f7"));
    }
}
