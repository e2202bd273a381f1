//! Terminal dimensions and capabilities for a rendering pass.

/// Default terminal width when none is configured.
pub const DEFAULT_WIDTH: usize = 80;

/// Default terminal height when none is configured.
pub const DEFAULT_HEIGHT: usize = 24;

/// Everything a renderer needs to know about the terminal.
///
/// Passed explicitly into every rendering call; nothing reads terminal
/// state behind the caller's back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Columns available per line
    pub width: usize,
    /// Rows available on screen
    pub height: usize,
    /// Emit ANSI escapes
    pub color: bool,
}

impl RenderContext {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
