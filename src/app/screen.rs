// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Tab;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Viewer,
    Gallery,
}

impl Screen {
    /// Name recorded in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Viewer => "viewer",
            Screen::Gallery => "gallery",
        }
    }
}

impl From<Tab> for Screen {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Viewer => Screen::Viewer,
            Tab::Gallery => Screen::Gallery,
        }
    }
}

impl From<Screen> for Tab {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Viewer => Tab::Viewer,
            Screen::Gallery => Tab::Gallery,
        }
    }
}
