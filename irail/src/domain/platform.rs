//! Platform labels.

use super::sentinel::PLATFORM_NORMAL;

/// Column width platforms are right-aligned to.
pub const PLATFORM_WIDTH: usize = 3;

/// Label shown when the API gives no platform.
const UNKNOWN_PLATFORM: &str = "?";

/// A platform and whether it differs from the scheduled one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    label: String,
    changed: bool,
}

impl Platform {
    pub fn new(label: impl Into<String>, changed: bool) -> Self {
        Self {
            label: label.into(),
            changed,
        }
    }

    /// Build from `platforminfo { name, normal }`.
    ///
    /// Only the literal `"1"` means unchanged; any other value marks a change.
    ///
    /// ```
    /// use irail::domain::Platform;
    ///
    /// assert!(!Platform::from_wire("4", "1").is_changed());
    /// assert!(Platform::from_wire("4", "0").is_changed());
    /// assert!(Platform::from_wire("4", "").is_changed());
    /// ```
    pub fn from_wire(name: &str, normal: &str) -> Self {
        Self::new(name, normal != PLATFORM_NORMAL)
    }

    /// Placeholder for stops without platform information.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_PLATFORM, false)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Left padding that right-aligns the label in [`PLATFORM_WIDTH`] columns.
    pub fn padding(&self) -> String {
        " ".repeat(PLATFORM_WIDTH.saturating_sub(self.label.chars().count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_right_aligns() {
        assert_eq!(Platform::new("4", false).padding(), "  ");
        assert_eq!(Platform::new("12", false).padding(), " ");
        assert_eq!(Platform::new("12A", false).padding(), "");
    }

    #[test]
    fn long_label_never_underflows() {
        assert_eq!(Platform::new("12AB", false).padding(), "");
    }

    #[test]
    fn unknown_is_unchanged() {
        let platform = Platform::unknown();
        assert_eq!(platform.label(), "?");
        assert!(!platform.is_changed());
    }
}
