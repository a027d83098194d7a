//! Terminal rendering for the markdown produced by `cidade-core`.
//!
//! Headers keep their hash marks, finished tasks are shown in green and
//! everything else goes through termimad's inline styling. With colors
//! disabled the markdown is printed untouched.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_COLOR: &str = "\x1b[34m";
const DONE_COLOR: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                match Self::line_color(line) {
                    Some(color) => println!("{color}{line}{RESET}"),
                    None => {
                        self.skin.print_inline(line);
                        println!();
                    }
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Lines printed verbatim in a fixed color instead of being styled.
    fn line_color(line: &str) -> Option<&'static str> {
        if line.starts_with('#') {
            Some(HEADER_COLOR)
        } else if line.starts_with("- [x]") {
            Some(DONE_COLOR)
        } else {
            None
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
