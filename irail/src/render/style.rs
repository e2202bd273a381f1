//! Styled terminal text.
//!
//! A [`Line`] is a sequence of [`Span`]s, each carrying a [`Style`]. Lines
//! know their visible width, so layout code can pad and center them before
//! deciding whether to emit ANSI escapes or plain text.

use std::fmt::Write as _;

/// Combining long stroke overlay, drawn over the preceding character.
const STRIKE_OVERLAY: char = '\u{0336}';

const ESC: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// Text attributes of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub reverse: bool,
    pub red: bool,
    pub dim: bool,
    pub blink: bool,
    pub strike: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        reverse: false,
        red: false,
        dim: false,
        blink: false,
        strike: false,
    };

    pub const REVERSE: Style = Style {
        reverse: true,
        ..Style::PLAIN
    };

    pub const RED: Style = Style {
        red: true,
        ..Style::PLAIN
    };

    pub const DIM: Style = Style {
        dim: true,
        ..Style::PLAIN
    };

    /// Red, blinking and struck through: a cancelled train.
    pub const CANCELLED: Style = Style {
        red: true,
        blink: true,
        strike: true,
        ..Style::PLAIN
    };

    /// Union of both styles' attributes.
    pub const fn merge(self, other: Style) -> Style {
        Style {
            reverse: self.reverse || other.reverse,
            red: self.red || other.red,
            dim: self.dim || other.dim,
            blink: self.blink || other.blink,
            strike: self.strike || other.strike,
        }
    }

    /// SGR parameters for this style, empty when plain.
    fn sgr(&self) -> String {
        let codes: Vec<&str> = [
            (self.dim, "2"),
            (self.blink, "5"),
            (self.reverse, "7"),
            (self.red, "31"),
        ]
        .into_iter()
        .filter_map(|(on, code)| on.then_some(code))
        .collect();

        codes.join(";")
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::PLAIN)
    }

    /// `n` plain spaces.
    pub fn spaces(n: usize) -> Self {
        Self::plain(" ".repeat(n))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Visible width in terminal columns.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn render_into(&self, out: &mut String, color: bool) {
        let text = if self.style.strike {
            self.text
                .chars()
                .flat_map(|c| [c, STRIKE_OVERLAY])
                .collect::<String>()
        } else {
            self.text.clone()
        };

        let sgr = self.style.sgr();
        if color && !sgr.is_empty() {
            let _ = write!(out, "{ESC}{sgr}m{text}{RESET}");
        } else {
            out.push_str(&text);
        }
    }
}

/// One line of terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::from_spans(vec![Span::plain(text)])
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::from_spans(vec![Span::new(text, style)])
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    pub fn extend(&mut self, spans: impl IntoIterator<Item = Span>) {
        self.spans.extend(spans);
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Visible width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Text without any styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }

    /// Add `style` to every span of the line.
    pub fn restyle(mut self, style: Style) -> Self {
        for span in &mut self.spans {
            span.style = span.style.merge(style);
        }
        self
    }

    /// Render with ANSI escapes, or as plain text when `color` is false.
    ///
    /// Strike-through is drawn with combining overlay characters, so it
    /// survives even without color.
    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();
        for span in &self.spans {
            span.render_into(&mut out, color);
        }
        out
    }
}

/// Left and right padding that center `len` columns in `width`.
///
/// Odd margins put the extra column on the left only when `width` is odd,
/// otherwise on the right.
/// Returns `(0, 0)` when the text does not fit.
pub fn center_padding(len: usize, width: usize) -> (usize, usize) {
    let Some(margin) = width.checked_sub(len) else {
        return (0, 0);
    };
    let left = margin / 2 + (margin & width & 1);
    (left, margin - left)
}

/// `text` centered in `width` columns.
pub fn center(text: &str, width: usize) -> String {
    let (left, right) = center_padding(text.chars().count(), width);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// `left` followed by `right` pushed against column `width`.
///
/// When both do not fit, they are joined with no padding at all.
pub fn justify(left: Line, right: Line, width: usize) -> Line {
    let gap = width.saturating_sub(left.width() + right.width());
    let mut line = left;
    if gap > 0 {
        line.push(Span::spaces(gap));
    }
    line.extend(right.spans);
    line
}

/// `text` right-aligned in `width` columns.
pub fn pad_left(text: &str, width: usize) -> String {
    format!("{text:>width$}")
}
