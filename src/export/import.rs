//! Background image loading.

use super::types::ImportError;
use crate::draw::BackgroundImage;
use cairo::ImageSurface;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decodes the PNG at `path` into a background image.
///
/// The canvas is left untouched by callers when this fails.
pub fn load_background(path: &Path) -> Result<BackgroundImage, ImportError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let surface = ImageSurface::create_from_png(&mut reader)?;

    let (width, height) = (surface.width(), surface.height());
    if width <= 0 || height <= 0 {
        return Err(ImportError::EmptyImage { width, height });
    }

    log::info!(
        "Loaded background image {} ({}x{})",
        path.display(),
        width,
        height
    );
    Ok(BackgroundImage::new(surface))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PixelBuffer;
    use crate::export::save_png_to;

    #[test]
    fn test_load_saved_png() {
        let dir = tempfile::tempdir().unwrap();
        let buffer = PixelBuffer {
            width: 3,
            height: 2,
            stride: 12,
            data: vec![255; 24],
        };
        let path = save_png_to(&buffer, &dir.path().join("bg.png")).unwrap();

        let image = load_background(&path).unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_background(&dir.path().join("nope.png")),
            Err(ImportError::ReadError(_))
        ));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_background(&path),
            Err(ImportError::Decode(_))
        ));
    }
}
