//! # Print Surface
//!
//! Hands a snapshot of the rendered table markup to a secondary output
//! surface and asks that surface to print it.
//!
//! The sequence mirrors what a host windowing environment offers:
//! open a new surface, write the document, close it, trigger print.
//! Every step may fail (the host can refuse to open a surface at all).
//! Failures are logged and swallowed; the table keeps working either way.
//!
//! `FileHost` is the host used by the TUI. Its surfaces are fresh HTML
//! files, and "print" runs an optional external command on the file.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Local;
use log::{debug, info, warn};

/// Closing tags written after the table body.
pub const DOCUMENT_TAIL: &str = "</body></html>";

/// Opening of the printed document, up to and including `<body>`.
pub fn document_head(title: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>",
        escape_html(title)
    )
}

/// Escapes text for use inside HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// An environment that can open output surfaces.
pub trait PrintHost {
    /// Opens a new, empty surface. `Err` means the host refused.
    fn open(&mut self) -> io::Result<Box<dyn PrintSurface>>;
}

/// One opened output surface.
pub trait PrintSurface {
    fn write(&mut self, markup: &str) -> io::Result<()>;
    fn close(&mut self) -> io::Result<()>;
    fn print(&mut self) -> io::Result<()>;
    /// Where the output ended up, if it has a name worth showing.
    fn location(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// The document was written and the print action triggered.
    Printed { location: Option<String> },
    /// No markup had been rendered yet.
    NothingRendered,
    /// The host refused to open a surface.
    Blocked,
    /// The surface opened but a later step failed.
    Failed,
}

/// Writes `body` (a rendered table fragment) to a new surface and prints it.
///
/// Never returns an error: every failure degrades to an outcome value.
pub fn print_markup(host: &mut dyn PrintHost, title: &str, body: &str) -> PrintOutcome {
    if body.is_empty() {
        debug!("Print requested before anything was rendered");
        return PrintOutcome::NothingRendered;
    }

    let mut surface = match host.open() {
        Ok(surface) => surface,
        Err(e) => {
            warn!("Print surface blocked: {}", e);
            return PrintOutcome::Blocked;
        }
    };

    match write_document(surface.as_mut(), title, body) {
        Ok(()) => {
            let location = surface.location();
            info!("Printed table to {}", location.as_deref().unwrap_or("surface"));
            PrintOutcome::Printed { location }
        }
        Err(e) => {
            warn!("Print failed: {}", e);
            PrintOutcome::Failed
        }
    }
}

fn write_document(surface: &mut dyn PrintSurface, title: &str, body: &str) -> io::Result<()> {
    surface.write(&document_head(title))?;
    surface.write(body)?;
    surface.write(DOCUMENT_TAIL)?;
    surface.close()?;
    surface.print()
}

// ============================================================================
// File host
// ============================================================================

/// Opens each print as a new HTML file in `output_dir`.
pub struct FileHost {
    pub output_dir: PathBuf,
    /// Program (plus arguments) run with the file path appended. `None` just
    /// writes the file.
    pub command: Option<String>,
}

impl FileHost {
    pub fn new(output_dir: impl Into<PathBuf>, command: Option<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            command,
        }
    }

    fn next_path(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let short = uuid::Uuid::new_v4().simple().to_string();
        self.output_dir
            .join(format!("table-print-{}-{}.html", stamp, &short[..8]))
    }
}

impl PrintHost for FileHost {
    fn open(&mut self) -> io::Result<Box<dyn PrintSurface>> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.next_path();
        // create_new: never clobber an earlier print
        let file = File::options().write(true).create_new(true).open(&path)?;
        debug!("Opened print surface {}", path.display());
        Ok(Box::new(FileSurface {
            path,
            file: Some(file),
            command: self.command.clone(),
        }))
    }
}

struct FileSurface {
    path: PathBuf,
    file: Option<File>,
    command: Option<String>,
}

impl PrintSurface for FileSurface {
    fn write(&mut self, markup: &str) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.write_all(markup.as_bytes()),
            None => Err(io::Error::other("print surface already closed")),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }
        Ok(())
    }

    fn print(&mut self) -> io::Result<()> {
        let Some(command) = self.command.as_deref() else {
            return Ok(());
        };
        run_print_command(command, &self.path)
    }

    fn location(&self) -> Option<String> {
        Some(self.path.display().to_string())
    }
}

fn run_print_command(command: &str, path: &Path) -> io::Result<()> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty print command"))?;

    info!("Running print command: {} {}", command, path.display());
    let output = Command::new(program).args(parts).arg(path).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(io::Error::other(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}
