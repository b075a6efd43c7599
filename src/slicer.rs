//! Cutting a source image into vertical strips.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageReader};

use crate::error::SliceError;
use crate::geometry::{strip_boxes, CropBox};
use crate::output::{input_stem, save_strip, strip_path};

/// Open and decode the source image.
///
/// # Errors
///
/// Returns [`SliceError::Open`] if the file cannot be opened and
/// [`SliceError::Decode`] if its contents are not a supported image.
pub fn load_source(input: &Path) -> Result<DynamicImage, SliceError> {
    let open_err =
        |source: std::io::Error| SliceError::Open { path: input.to_path_buf(), source };
    let decode_err =
        |source: image::ImageError| SliceError::Decode { path: input.to_path_buf(), source };
    ImageReader::open(input)
        .and_then(ImageReader::with_guessed_format)
        .map_err(open_err)?
        .decode()
        .map_err(decode_err)
}

fn crop(source: &DynamicImage, b: CropBox) -> DynamicImage {
    source.crop_imm(b.left, b.top, b.width(), b.height())
}

/// Cut `source` into its strips, left to right, without touching disk.
///
/// Each strip is cropped only when the iterator reaches it.
pub fn strips(source: &DynamicImage) -> impl Iterator<Item = DynamicImage> + '_ {
    let (width, height) = source.dimensions();
    strip_boxes(width, height).into_iter().map(move |b| crop(source, b))
}

/// Progress notifications emitted by [`slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceEvent<'a> {
    /// The source was decoded with these dimensions.
    Loaded {
        /// Source width in pixels.
        width: u32,
        /// Source height in pixels.
        height: u32,
    },
    /// A strip was written to this path.
    Saved(&'a Path),
}

/// Slice the image at `input` and write one PNG per strip into `output_dir`.
///
/// Strips are written in order and the first failure aborts the run, leaving
/// earlier strips on disk. `on_event` sees the decoded dimensions once, then
/// every successful write. Returns the paths written.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or any strip cannot be
/// written. Nothing is written when loading fails.
pub fn slice(
    input: &Path,
    output_dir: &Path,
    mut on_event: impl FnMut(SliceEvent<'_>),
) -> Result<Vec<PathBuf>, SliceError> {
    let source = load_source(input)?;
    let stem = input_stem(input);
    let (width, height) = source.dimensions();
    on_event(SliceEvent::Loaded { width, height });

    let mut written = Vec::new();
    for (index, strip) in (0..).zip(strips(&source)) {
        let path = strip_path(output_dir, &stem, index);
        save_strip(&strip, &path)?;
        on_event(SliceEvent::Saved(&path));
        written.push(path);
    }
    Ok(written)
}
