// SPDX-License-Identifier: MPL-2.0
//! Theme container.

use crate::ui::theming::ThemeMode;

/// Effective color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeFlag {
    Light,
    #[default]
    Dark,
}

impl ThemeFlag {
    /// Resolves a configured mode. `System` asks the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The explicit mode to persist for this flag.
    #[must_use]
    pub fn to_mode(self) -> ThemeMode {
        match self {
            Self::Light => ThemeMode::Light,
            Self::Dark => ThemeMode::Dark,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Holds the theme flag for the lifetime of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeStore {
    flag: ThemeFlag,
}

impl ThemeStore {
    #[must_use]
    pub fn new(flag: ThemeFlag) -> Self {
        Self { flag }
    }

    #[must_use]
    pub fn theme(&self) -> ThemeFlag {
        self.flag
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&mut self) -> ThemeFlag {
        self.flag = self.flag.toggled();
        tracing::debug!(theme = ?self.flag, "theme toggled");
        self.flag
    }
}
