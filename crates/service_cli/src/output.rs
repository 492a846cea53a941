//! Result writers for the `table`, `csv` and `json` formats.

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::Result;

/// Opens the output file, or stdout when no path is given.
pub fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("Writing output to {}", path.display());
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Writes records as CSV with a header row taken from the field names.
pub fn write_csv<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes a value as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Plain box-drawn table.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let widths = self.widths();
        let rule = |left: &str, mid: &str, right: &str| {
            let inner: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, inner.join(mid), right)
        };
        let line = |cells: &[String]| {
            let inner: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!(" {:>w$} ", cell, w = w)
                })
                .collect();
            format!("│{}│", inner.join("│"))
        };

        writeln!(writer, "{}", rule("┌", "┬", "┐"))?;
        writeln!(writer, "{}", line(&self.headers))?;
        writeln!(writer, "{}", rule("├", "┼", "┤"))?;
        for row in &self.rows {
            writeln!(writer, "{}", line(row))?;
        }
        writeln!(writer, "{}", rule("└", "┴", "┘"))?;
        Ok(())
    }
}
