//! 8-bit grayscale PNG output.
//!
//! The encoding is always PNG, whatever extension the target path carries.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use tracing::info;

use super::field::Field;
use crate::error::{EngineError, Result};

/// Encode the field as an in-memory grayscale PNG
pub fn encode_png(field: &Field) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    field
        .to_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write the field as a grayscale PNG, creating parent directories
pub fn write_png(field: &Field, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| EngineError::io(dir, e))?;
    }

    field.to_image().save_with_format(path, ImageFormat::Png)?;

    info!("Cymatic saved: {}", path.display());
    Ok(())
}
