use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub favorite: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_recipe: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// An RGB color.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::emerald()
    }
}

impl Theme {
    /// Light green palette.
    ///
    pub fn emerald() -> Self {
        Theme {
            name: "emerald".to_string(),
            primary: ColorSpec::new(16, 185, 129),   // Emerald 500
            secondary: ColorSpec::new(20, 184, 166), // Teal 500
            accent: ColorSpec::new(249, 115, 22),    // Orange 500
            banner: ColorSpec::new(5, 150, 105),     // Emerald 600
            text: ColorSpec::new(31, 41, 55),
            text_secondary: ColorSpec::new(75, 85, 99),
            text_muted: ColorSpec::new(156, 163, 175),
            background: ColorSpec::new(249, 250, 251),
            surface: ColorSpec::new(255, 255, 255),
            success: ColorSpec::new(34, 197, 94),
            warning: ColorSpec::new(234, 179, 8),
            error: ColorSpec::new(239, 68, 68),
            favorite: ColorSpec::new(244, 63, 94), // Rose
            border_active: ColorSpec::new(16, 185, 129),
            border_normal: ColorSpec::new(209, 213, 219),
            highlight_bg: ColorSpec::new(209, 250, 229), // Emerald 100
            highlight_fg: ColorSpec::new(6, 95, 70),
            footer_search: ColorSpec::new(167, 243, 208),
            footer_recipe: ColorSpec::new(254, 215, 170),
            footer_normal: ColorSpec::new(229, 231, 235),
        }
    }

    /// Tokyo Night palette.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::new(125, 207, 255),   // Blue
            secondary: ColorSpec::new(158, 206, 106), // Green
            accent: ColorSpec::new(255, 159, 196),    // Magenta
            banner: ColorSpec::new(158, 206, 106),
            text: ColorSpec::new(169, 177, 214),
            text_secondary: ColorSpec::new(192, 202, 245),
            text_muted: ColorSpec::new(117, 121, 148),
            background: ColorSpec::new(26, 27, 38),
            surface: ColorSpec::new(36, 40, 59),
            success: ColorSpec::new(158, 206, 106),
            warning: ColorSpec::new(255, 202, 40),
            error: ColorSpec::new(247, 118, 142),
            favorite: ColorSpec::new(247, 118, 142),
            border_active: ColorSpec::new(125, 207, 255),
            border_normal: ColorSpec::new(65, 72, 104),
            highlight_bg: ColorSpec::new(41, 46, 66),
            highlight_fg: ColorSpec::new(192, 202, 245),
            footer_search: ColorSpec::new(61, 89, 161),
            footer_recipe: ColorSpec::new(118, 70, 112),
            footer_normal: ColorSpec::new(41, 46, 66),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "emerald" => Some(Self::emerald()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    /// Get a theme by name, falling back to the default for unknown names.
    ///
    pub fn by_name(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::warn!("Unknown theme '{}', using default.", name);
            Self::default()
        })
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["emerald".to_string(), "tokyo-night".to_string()]
    }
}
