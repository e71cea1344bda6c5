//! Field display.
//!
//! The terminal viewer draws a downsampled ASCII preview; anything else that
//! can present a grayscale grid plugs in through [`Viewer`].

use std::io::Write;

use crate::cymatics::Field;
use crate::error::{EngineError, Result};

/// Characters from dark to bright
const RAMP: &[u8] = b" .:-=+*#%@";

/// Something that can present a rendered field
pub trait Viewer {
    fn show(&mut self, field: &Field, caption: &str) -> Result<()>;
}

/// ASCII-art viewer writing to any output stream
pub struct TerminalViewer<W: Write> {
    out: W,
    columns: u32,
}

impl<W: Write> TerminalViewer<W> {
    pub fn new(out: W, columns: u32) -> Self {
        Self { out, columns }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Viewer for TerminalViewer<W> {
    fn show(&mut self, field: &Field, caption: &str) -> Result<()> {
        let preview = ascii_preview(field, self.columns);
        writeln!(self.out, "{caption}")
            .and_then(|_| self.out.write_all(preview.as_bytes()))
            .and_then(|_| self.out.flush())
            .map_err(|e| EngineError::io("<terminal>", e))
    }
}

/// Render the field as text, `columns` wide.
///
/// Terminal cells are roughly twice as tall as wide, so half as many rows
/// as columns are drawn. Each character averages the block of cells it
/// covers.
pub fn ascii_preview(field: &Field, columns: u32) -> String {
    let size = field.size();
    let cols = columns.clamp(1, size.max(1));
    let rows = (cols / 2).max(1);

    let mut text = String::with_capacity(((cols + 1) * rows) as usize);
    for r in 0..rows {
        let (y0, y1) = span(r, rows, size);
        for c in 0..cols {
            let (x0, x1) = span(c, cols, size);

            let mut sum = 0u64;
            let mut count = 0u64;
            for y in y0..y1 {
                for x in x0..x1 {
                    if let Some(v) = field.get(x, y) {
                        sum += v as u64;
                        count += 1;
                    }
                }
            }

            let mean = if count == 0 { 0 } else { sum / count };
            let level = mean as usize * (RAMP.len() - 1) / 255;
            text.push(RAMP[level] as char);
        }
        text.push('\n');
    }
    text
}

/// Half-open cell range covered by output index `i` of `n`
fn span(i: u32, n: u32, size: u32) -> (u32, u32) {
    let start = (i as u64 * size as u64 / n as u64) as u32;
    let end = ((i as u64 + 1) * size as u64 / n as u64) as u32;
    (start, end.max(start + 1).min(size.max(1)))
}
