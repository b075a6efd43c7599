//! Strip file naming and PNG writing.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::error::SliceError;

/// Name of the file for strip `index` (0-based) of an input named `stem`.
///
/// The suffix is 1-indexed and the extension is always `.png`, so `0.png`
/// produces `0_1.png` through `0_10.png`.
#[must_use]
pub fn strip_filename(stem: &str, index: u32) -> String {
    format!("{stem}_{}.png", index + 1)
}

/// Full output path for strip `index` inside `dir`.
#[must_use]
pub fn strip_path(dir: &Path, stem: &str, index: u32) -> PathBuf {
    dir.join(strip_filename(stem, index))
}

/// File stem of the input path, used as the prefix of every strip name.
#[must_use]
pub fn input_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "image".to_string())
}

/// Encode a strip as PNG, overwriting any existing file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the encoder rejects the
/// image (the PNG encoder refuses zero-width images).
pub fn save_strip(strip: &DynamicImage, path: &Path) -> Result<(), SliceError> {
    strip
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| SliceError::Encode { path: path.to_path_buf(), source })
}
