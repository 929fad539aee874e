use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background
    pub bg: Color,
    /// Sidebar background
    pub panel_bg: Color,
    /// Cell background
    pub cell_bg: Color,
    /// Cursor cell background
    pub selected_bg: Color,
    /// Thin grid line color
    pub border: Color,
    /// Thick grid line color (3x3 block separators)
    pub block_border: Color,
    /// Clue digit color
    pub given: Color,
    /// Solver-filled digit color
    pub solved: Color,
    /// Title and section accent color
    pub accent: Color,
    /// Sidebar label color
    pub label: Color,
    /// Metric value and key binding color
    pub value: Color,
    /// Error and conflict color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Busy/warning color
    pub warning: Color,
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
            bg: Color::Rgb { r: 15, g: 15, b: 26 },
            panel_bg: Color::Rgb { r: 26, g: 26, b: 46 },
            cell_bg: Color::Rgb { r: 22, g: 33, b: 62 },
            selected_bg: Color::Rgb { r: 35, g: 50, b: 85 },
            border: Color::Rgb { r: 58, g: 58, b: 92 },
            block_border: Color::Rgb { r: 0, g: 217, b: 255 },
            given: Color::Rgb { r: 255, g: 255, b: 255 },
            solved: Color::Rgb { r: 0, g: 230, b: 118 },
            accent: Color::Rgb { r: 0, g: 217, b: 255 },
            label: Color::Rgb { r: 136, g: 136, b: 170 },
            value: Color::Rgb { r: 255, g: 214, b: 10 },
            error: Color::Rgb { r: 255, g: 0, b: 110 },
            success: Color::Rgb { r: 0, g: 230, b: 118 },
            warning: Color::Rgb { r: 255, g: 214, b: 10 },
        }
    }
}
