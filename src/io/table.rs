//! Tab-separated report of drawn templates.

use crate::generator::{Draw, DrawnTemplate};
use crate::templates::{PairedTemplate, UnpairedTemplate};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: &str = "id\tkind\ttemplate\tlength\tmate1_len\tmate2_len\tscore";
const MISSING: &str = ".";

/// Writer for draw reports.
///
/// Writes one line per drawn template after a header line. Unpaired draws
/// have no mate columns; missing values are written as `.`.
pub struct DrawWriter {
    writer: BufWriter<Box<dyn Write>>,
}

impl DrawWriter {
    /// Creates a writer for the given path, or standard output when `None`.
    pub fn new(path: Option<&Path>) -> Result<Self> {
        let inner: Box<dyn Write> = match path {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create report file: {}", path.display()))?,
            ),
            None => Box::new(std::io::stdout()),
        };
        Self::from_writer(inner)
    }

    /// Wraps an arbitrary writer and emits the header line.
    pub fn from_writer(inner: Box<dyn Write>) -> Result<Self> {
        let mut writer = BufWriter::new(inner);
        writeln!(writer, "{}", HEADER).context("Failed to write report header")?;
        Ok(Self { writer })
    }

    /// Writes a single drawn template.
    pub fn write_draw(
        &mut self,
        drawn: &DrawnTemplate<'_, UnpairedTemplate, PairedTemplate>,
    ) -> Result<()> {
        let line = format_draw(drawn);
        writeln!(self.writer, "{}", line).context("Failed to write drawn template")
    }

    /// Flushes buffered lines to the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush report writer")
    }
}

fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

fn format_draw(drawn: &DrawnTemplate<'_, UnpairedTemplate, PairedTemplate>) -> String {
    match drawn.draw {
        Draw::Unpaired(template) => format!(
            "{}\tunpaired\t{}\t{}\t{}\t{}\t{}",
            drawn.id,
            template.name,
            template.ref_len,
            MISSING,
            MISSING,
            format_optional(template.score)
        ),
        Draw::Paired(template) => {
            let (mate1, mate2) = template.mates();
            format!(
                "{}\tpaired\t{}\t{}\t{}\t{}\t{}",
                drawn.id,
                template.name,
                template.fragment_len,
                mate1.ref_len,
                mate2.ref_len,
                format_optional(template.score())
            )
        }
    }
}
