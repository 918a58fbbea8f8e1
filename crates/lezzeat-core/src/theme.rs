//! Light/dark theme store

use serde::{Deserialize, Serialize};

/// Color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl ThemeMode {
    /// The other mode
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Holds the active theme
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    mode: ThemeMode,
}

impl ThemeStore {
    /// Store starting in `mode`
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Active mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether dark mode is on
    #[inline]
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Switch mode; returns the new mode
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        tracing::debug!(mode = ?self.mode, "theme toggled");
        self.mode
    }

    /// Force a mode
    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let mut theme = ThemeStore::default();
        assert!(!theme.is_dark());
        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert!(theme.is_dark());
        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Light);
    }
}
