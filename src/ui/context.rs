use crate::ui::style::Style;
use crate::ui::terminal::Terminal;

/// Output settings resolved once from the CLI flags and the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: bool,
    pub style: Style,
}

impl UiContext {
    pub fn new(json: bool, verbose: bool) -> Self {
        Self::with_terminal(json, verbose, Terminal::detect())
    }

    fn with_terminal(json: bool, verbose: bool, terminal: Terminal) -> Self {
        let mut style = terminal.style();
        if json {
            style.color = false;
        }
        Self {
            json,
            verbose,
            style,
        }
    }
}
