//! Responsive layout mode derived from terminal width.
//!
//! The terminal analog of a viewport media query: widgets and screens pick
//! between a compact and a wide arrangement based on column count. Hosts
//! re-derive the mode from resize events, so a live terminal resize flips
//! layouts the same way a browser breakpoint would.

// ============================================================================
// Breakpoint
// ============================================================================

/// Minimum column count for the wide layout.
pub const WIDE_MIN_COLS: u16 = 80;

/// Layout arrangement selected from the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Narrow terminal: stacked widgets, icon-only controls.
    #[default]
    Compact,
    /// Wide terminal: side-by-side widgets, labeled controls.
    Wide,
}

impl LayoutMode {
    /// Derives the layout mode for a terminal `width` in columns.
    #[must_use]
    pub const fn from_width(width: u16) -> Self {
        if width >= WIDE_MIN_COLS {
            Self::Wide
        } else {
            Self::Compact
        }
    }

    /// Returns `true` in the wide layout.
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Wide)
    }

    /// Returns `true` in the compact layout.
    #[must_use]
    pub const fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, LayoutMode::Compact)]
    #[case::just_below(79, LayoutMode::Compact)]
    #[case::at_breakpoint(80, LayoutMode::Wide)]
    #[case::well_above(200, LayoutMode::Wide)]
    fn test_mode_from_width(#[case] width: u16, #[case] expected: LayoutMode) {
        assert_eq!(LayoutMode::from_width(width), expected);
    }

    #[test]
    fn test_mode_predicates_are_exclusive() {
        for width in [0_u16, 79, 80, 120] {
            let mode = LayoutMode::from_width(width);
            assert_ne!(mode.is_wide(), mode.is_compact(), "width={width}");
        }
    }
}
