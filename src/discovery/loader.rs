//! Asset loader - decodes discovered files into bitmaps and spectrums.

use std::path::Path;

use crate::error::{FacesError, Result};
use crate::types::{Bitmap, ImageSpectrum};

use super::scanner::{scan_emotions, scan_frames};

/// Decode a single image file into an RGBA bitmap.
pub fn load_bitmap(path: &Path) -> Result<Bitmap> {
    let decoded = image::open(path).map_err(|e| FacesError::Asset {
        path: path.to_path_buf(),
        message: format!("Failed to load image: {}", e),
    })?;

    Ok(Bitmap::new(decoded.to_rgba8()))
}

/// Load every frame of a directory into a spectrum.
///
/// Files that fail to decode are skipped with a warning. Fails with
/// `EmptySpectrum` when no frame survives.
pub fn load_spectrum(dir: &Path) -> Result<ImageSpectrum> {
    let mut entries = Vec::new();

    for frame in scan_frames(dir) {
        match load_bitmap(&frame.path) {
            Ok(bitmap) => entries.push((frame.position, bitmap)),
            Err(e) => tracing::warn!(error = %e, "skipping unreadable frame"),
        }
    }

    tracing::debug!(dir = %dir.display(), frames = entries.len(), "loaded spectrum");

    ImageSpectrum::new(&dir.display().to_string(), entries)
}

/// Load one spectrum per emotion sub-directory.
///
/// Emotions whose directory yields no frames are left out with a warning so
/// that they fall back to drawing no eye layer.
pub fn load_emotion_spectrums(dir: &Path) -> Vec<(String, ImageSpectrum)> {
    let mut spectrums = Vec::new();

    for (name, path) in scan_emotions(dir) {
        match load_spectrum(&path) {
            Ok(spectrum) => spectrums.push((name, spectrum)),
            Err(e) => tracing::warn!(emotion = %name, error = %e, "emotion unusable"),
        }
    }

    if spectrums.is_empty() {
        tracing::warn!(dir = %dir.display(), "no emotions found");
    }

    spectrums
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_png(path: &Path, colour: [u8; 4]) {
        RgbaImage::from_pixel(2, 2, Rgba(colour)).save(path).unwrap();
    }

    #[test]
    fn test_load_bitmap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nose.png");
        write_png(&path, [10, 20, 30, 255]);

        let bitmap = load_bitmap(&path).unwrap();
        assert_eq!(bitmap.width(), 2);
        assert_eq!(bitmap.get(1, 1), Some(Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn test_load_bitmap_missing() {
        let result = load_bitmap(Path::new("/nonexistent/nose.png"));
        assert!(matches!(result, Err(FacesError::Asset { .. })));
    }

    #[test]
    fn test_load_spectrum_skips_corrupt_frames() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("0.0.png"), [0, 0, 0, 255]);
        write_png(&dir.path().join("1.0.png"), [255, 0, 0, 255]);
        fs::write(dir.path().join("0.5.png"), b"not a png").unwrap();

        let spectrum = load_spectrum(dir.path()).unwrap();
        assert_eq!(spectrum.len(), 2);
    }

    #[test]
    fn test_load_spectrum_empty_directory() {
        let dir = tempdir().unwrap();
        let result = load_spectrum(dir.path());
        assert!(matches!(result, Err(FacesError::EmptySpectrum { .. })));
    }

    #[test]
    fn test_load_emotion_spectrums_skips_unusable() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("happy")).unwrap();
        fs::create_dir_all(dir.path().join("broken")).unwrap();
        fs::create_dir_all(dir.path().join("neutral")).unwrap();
        write_png(&dir.path().join("happy/0.0.png"), [1, 1, 1, 255]);
        write_png(&dir.path().join("neutral/1.0.png"), [2, 2, 2, 255]);
        fs::write(dir.path().join("broken/closed.png"), b"").unwrap();

        let names: Vec<String> = load_emotion_spectrums(dir.path())
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(names, vec!["happy", "neutral"]);
    }
}
