//! Terminal reporting shared by the shell and menu front ends.
//!
//! Both binaries talk to the user through this module so that formatting
//! (and the color policy) lives in exactly one place.

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::{Entry, EntryKind};
use crate::error::FexError;
use crate::ops::{format_mode, FileInfo};
use crate::visitor::VisitResult;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
pub fn color_choice(mode: ColorMode) -> ColorChoice {
    let colored = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    if colored {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

/// Writer for everything the front ends print besides raw file contents.
pub struct Console {
    out: StandardStream,
}

impl Console {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            out: StandardStream::stdout(color_choice(mode)),
        }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// One row of a directory listing: kind marker, size, name.
    pub fn entry(&mut self, entry: &Entry) -> io::Result<()> {
        let marker = match entry.kind {
            EntryKind::Dir => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::File => '-',
            EntryKind::Other => '?',
        };
        match entry.size() {
            Some(size) => write!(self.out, "{marker} {size:>9} ")?,
            None => write!(self.out, "{marker} {:>9} ", "-")?,
        }
        if entry.kind == EntryKind::Dir {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        writeln!(self.out, "{}", entry.name)?;
        self.out.reset()
    }

    pub fn info(&mut self, info: &FileInfo) -> io::Result<()> {
        writeln!(self.out, "Path: {}", info.path.display())?;
        let kind = match info.kind {
            EntryKind::Dir => "directory",
            EntryKind::File => "file",
            EntryKind::Symlink => "symlink",
            EntryKind::Other => "other",
        };
        writeln!(self.out, "Type: {kind}")?;
        match info.size {
            Some(size) => writeln!(self.out, "Size: {size}")?,
            None => writeln!(self.out, "Size: N/A")?,
        }
        match info.modified {
            Some(at) => writeln!(
                self.out,
                "Modified: {}",
                humantime::format_rfc3339_seconds(at)
            )?,
            None => writeln!(self.out, "Modified: N/A")?,
        }
        match info.mode {
            Some(mode) => writeln!(self.out, "Permissions: {}", format_mode(mode))?,
            None => writeln!(self.out, "Permissions: N/A")?,
        }
        Ok(())
    }

    /// Matched paths followed by a dim scan summary.
    pub fn search_report(&mut self, result: &VisitResult) -> io::Result<()> {
        for path in &result.matches {
            writeln!(self.out, "{}", path.display())?;
        }
        self.errors(result)?;
        self.out.set_color(ColorSpec::new().set_dimmed(true))?;
        writeln!(
            self.out,
            "{} match(es), scanned {} file(s) and {} dir(s) in {}",
            result.matches.len(),
            result.stats.files,
            result.stats.dirs,
            humantime::format_duration(result.stats.duration)
        )?;
        self.out.reset()
    }

    /// Outcome of a recursive removal.
    pub fn delete_report(&mut self, result: &VisitResult) -> io::Result<()> {
        self.errors(result)?;
        writeln!(self.out, "Removed {} entr(ies)", result.removed)
    }

    fn errors(&mut self, result: &VisitResult) -> io::Result<()> {
        for err in &result.errors {
            self.error(err)?;
        }
        Ok(())
    }

    /// An error line in red, path and cause included when known.
    pub fn error(&mut self, err: &FexError) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(self.out, "error: {err}")?;
        if let Some(path) = err.path() {
            write!(self.out, ": {}", path.display())?;
        }
        if let Some(source) = std::error::Error::source(err) {
            write!(self.out, " ({source})")?;
        }
        writeln!(self.out)?;
        self.out.reset()
    }
}

/// Print `prompt`, then read one line from stdin.
/// Returns `None` on end of input.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
