use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// The two cell colors
    pub red: Color,
    pub blue: Color,
    /// Empty-cell marker
    pub empty: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Violation highlight background
    pub error_bg: Color,
    /// Success/solved color
    pub success: Color,
    /// Status/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark",
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            red: Color::Rgb { r: 224, g: 82, b: 60 },
            blue: Color::Rgb { r: 60, g: 180, b: 214 },
            empty: Color::Rgb { r: 90, g: 95, b: 110 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            error_bg: Color::Rgb { r: 110, g: 30, b: 30 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light",
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            red: Color::Rgb { r: 194, g: 75, b: 49 },
            blue: Color::Rgb { r: 53, g: 134, b: 213 },
            empty: Color::Rgb { r: 170, g: 170, b: 185 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            error_bg: Color::Rgb { r: 255, g: 170, b: 170 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn contrast() -> Self {
        Self {
            name: "contrast",
            bg: Color::Black,
            fg: Color::White,
            border: Color::Grey,
            red: Color::Red,
            blue: Color::Cyan,
            empty: Color::DarkGrey,
            selected_bg: Color::Blue,
            error_bg: Color::DarkRed,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "contrast" => Some(Self::contrast()),
            _ => None,
        }
    }

    /// The next theme in the cycle, for the theme-toggle key.
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::contrast(),
            _ => Self::dark(),
        }
    }
}
