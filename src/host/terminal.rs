use super::status_bar::{DisplaySurface, MenuItem, QUIT};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, dim, paint};
use crate::utils::formatting::bold;
use std::io::Write;

const SEPARATOR: &str = "────────────";

/// Prints the label and the menu to a writer, one block per refresh.
pub struct TerminalSurface<W: Write> {
    out: W,
    plain: bool,
}

impl<W: Write> TerminalSurface<W> {
    /// `plain` disables ANSI styling (pipes, files, tests).
    pub fn new(out: W, plain: bool) -> Self {
        Self { out, plain }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn set_label(&mut self, label: &str) -> AppResult<()> {
        let text = if self.plain {
            label.to_string()
        } else {
            bold(label)
        };
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn set_menu(&mut self, items: &[MenuItem]) -> AppResult<()> {
        for item in items {
            let line = match item {
                MenuItem::Entry(text) => paint(text, CYAN, self.plain),
                MenuItem::Separator if self.plain => SEPARATOR.to_string(),
                MenuItem::Separator => dim(SEPARATOR),
                MenuItem::Quit => QUIT.to_string(),
            };
            writeln!(self.out, "  {}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
