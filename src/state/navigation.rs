//! Navigation-related state types.
//!
//! This module contains the base views and the focus areas within them. The
//! recipe detail is an overlay on top of any view and is not a view itself.

/// Specifying the different views reachable from the bottom navigation.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Home,
    Explore,
    Favorites,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Explore, View::Favorites];

    /// Return the bottom navigation label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "首页",
            View::Explore => "发现",
            View::Favorites => "收藏",
        }
    }

    pub fn next(&self) -> View {
        match self {
            View::Home => View::Explore,
            View::Explore => View::Favorites,
            View::Favorites => View::Home,
        }
    }

    pub fn previous(&self) -> View {
        match self {
            View::Home => View::Favorites,
            View::Explore => View::Home,
            View::Favorites => View::Explore,
        }
    }
}

/// Specifying the different foci within a view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Categories,
    Recipes,
}
