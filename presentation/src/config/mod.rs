//! Presentation-level configuration
//!
//! Layout parameters for the chat page and its terminal host.

/// Layout configuration for the chat page
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Width of the centered column in layout units; viewports at or below
    /// this width get the full-width layout
    pub column_width: f32,
    /// Terminal cells per layout unit
    pub cells_per_unit: u16,
    /// Height of the input field in lines
    pub input_height: u16,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            column_width: 40.0,
            cells_per_unit: 2,
            input_height: 8,
        }
    }
}

impl PageConfig {
    /// Convert a terminal width in cells to layout units
    pub fn cells_to_units(&self, cells: u16) -> f32 {
        f32::from(cells) / f32::from(self.cells_per_unit.max(1))
    }

    /// Convert a width in layout units to terminal cells
    pub fn units_to_cells(&self, units: f32) -> u16 {
        (units * f32::from(self.cells_per_unit.max(1))).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        let config = PageConfig::default();
        assert_eq!(config.cells_to_units(80), 40.0);
        assert_eq!(config.cells_to_units(81), 40.5);
        assert_eq!(config.units_to_cells(40.0), 80);
    }
}
