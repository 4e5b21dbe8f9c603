//! Colours and glyphs shared by every view.
//!
//! Views never talk to crossterm directly; they ask a [`Style`] to paint
//! text in a [`Tone`] or to draw an [`Icon`].

use crossterm::style::{Color, Stylize};

/// Semantic colour of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Bad,
    Caution,
    Accent,
    Muted,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Good => Color::Green,
            Tone::Bad => Color::Red,
            Tone::Caution => Color::Yellow,
            Tone::Accent => Color::Cyan,
            Tone::Muted => Color::DarkGrey,
        }
    }
}

/// Status glyphs. Each has a unicode form and an ASCII fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Done,
    Failed,
    Warning,
    Working,
    Unchanged,
    Hint,
    Watch,
    Generate,
    Diff,
}

impl Icon {
    fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            Icon::Done => ("✓", "[OK]"),
            Icon::Failed => ("✗", "[FAIL]"),
            Icon::Warning => ("⚠", "[WARN]"),
            Icon::Working => ("●", "[..]"),
            Icon::Unchanged => ("○", "[--]"),
            Icon::Hint => ("↳", "[>]"),
            Icon::Watch => ("⟳", "[~]"),
            Icon::Generate => ("◆", "[GEN]"),
            Icon::Diff => ("Δ", "[DIFF]"),
        }
    }

    fn tone(self) -> Tone {
        match self {
            Icon::Done => Tone::Good,
            Icon::Failed => Tone::Bad,
            Icon::Warning | Icon::Working => Tone::Caution,
            Icon::Unchanged | Icon::Hint => Tone::Muted,
            Icon::Watch | Icon::Generate | Icon::Diff => Tone::Accent,
        }
    }
}

/// What the current output stream can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
    pub unicode: bool,
}

impl Style {
    /// No colour, ASCII glyphs. Used for pipes, CI logs and tests.
    pub const PLAIN: Style = Style {
        color: false,
        unicode: false,
    };

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if self.color {
            text.with(tone.color()).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn strong(&self, text: &str, tone: Tone) -> String {
        if self.color {
            text.with(tone.color()).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Glyph only, never coloured.
    pub fn glyph(&self, icon: Icon) -> &'static str {
        let (unicode, ascii) = icon.glyphs();
        if self.unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn icon(&self, icon: Icon) -> String {
        self.paint(self.glyph(icon), icon.tone())
    }
}
