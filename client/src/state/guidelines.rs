#[cfg(test)]
#[path = "guidelines_test.rs"]
mod guidelines_test;

/// Glyph shown while the panel is open.
pub const GLYPH_OPEN: &str = "▲";
/// Glyph shown while the panel is collapsed.
pub const GLYPH_CLOSED: &str = "▼";

/// CSS `display` value of the guidelines panel body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelDisplay {
    Block,
    #[default]
    None,
}

impl PanelDisplay {
    /// Read a CSS `display` value. Anything other than `none` counts as shown.
    pub fn from_css(raw: &str) -> Self {
        if raw.trim() == "none" { Self::None } else { Self::Block }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::None => Self::Block,
            Self::Block => Self::None,
        }
    }

    /// Indicator glyph matching this display state.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Block => GLYPH_OPEN,
            Self::None => GLYPH_CLOSED,
        }
    }
}

/// Collapsible format-guidelines panel. Starts collapsed; not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuidelinesPanel {
    pub display: PanelDisplay,
}

impl GuidelinesPanel {
    pub fn toggle(&mut self) {
        self.display = self.display.toggled();
        log::debug!("guidelines panel display={}", self.display.as_css());
    }

    pub fn glyph(&self) -> &'static str {
        self.display.glyph()
    }

    pub fn is_open(&self) -> bool {
        self.display == PanelDisplay::Block
    }
}
