//! Terminal rendering for markdown output
//!
//! Rich mode styles inline markdown with termimad and colors headings and
//! status lines; plain mode prints the markdown untouched.

use anyhow::Result;
use realitylab_core::display::{OperationStatus, StatusLevel};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        // Headings keep their hash marks so nesting stays visible
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Render a one-line status, colored by its level in rich mode
    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        if !self.rich_enabled {
            print!("{status}");
            return Ok(());
        }

        let code = match status.level {
            StatusLevel::Success => 32,
            StatusLevel::Warning => 33,
            StatusLevel::Failure => 31,
        };
        print!("\x1b[{code}m{status}\x1b[0m");
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
