use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use log::info;

use crate::error::ExportError;

pub const PNG_EXTENSION: &str = "png";

/// Append `.png` unless the path already ends with it.
pub fn normalize_png_path(path: PathBuf) -> PathBuf {
    let suffix = format!(".{PNG_EXTENSION}");
    if path.as_os_str().to_string_lossy().ends_with(&suffix) {
        return path;
    }
    let mut raw = path.into_os_string();
    raw.push(&suffix);
    PathBuf::from(raw)
}

/// Encode the buffer as an RGB PNG at `path`.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), ExportError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        "Saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_normalize_appends_missing_extension() {
        assert_eq!(
            normalize_png_path(PathBuf::from("/tmp/drawing")),
            PathBuf::from("/tmp/drawing.png")
        );
        assert_eq!(
            normalize_png_path(PathBuf::from("picture.jpg")),
            PathBuf::from("picture.jpg.png")
        );
    }

    #[test]
    fn test_normalize_keeps_png_paths() {
        assert_eq!(
            normalize_png_path(PathBuf::from("/tmp/drawing.png")),
            PathBuf::from("/tmp/drawing.png")
        );
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let image = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));

        let err = save_png(&image, &path).unwrap_err();
        assert!(err.to_string().contains("out.png"));
        assert!(!path.exists());
    }

    #[test]
    fn test_saved_file_decodes_to_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut image = RgbImage::from_pixel(3, 2, Rgb([255, 255, 255]));
        image.put_pixel(1, 1, Rgb([10, 20, 30]));

        save_png(&image, &path).unwrap();
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded, image);
    }
}
