//! File system scanner for face assets.
//!
//! Frame files are named after the proportion they were sampled at
//! (`0.0.png`, `0.5.png`, `1.png`). Emotion directories hold one sub-directory
//! per emotion, each of which is a frame directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::Proportion;

/// A frame file and the position encoded in its name.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameFile {
    pub position: Proportion,
    pub path: PathBuf,
}

/// Parse the proportion encoded in a frame file name.
///
/// The file stem must parse as a number in `[0.0, 1.0]` and the extension
/// must be an image format the loader understands.
pub fn parse_frame_position(path: &Path) -> Option<Proportion> {
    image::ImageFormat::from_path(path).ok()?;
    let stem = path.file_stem()?.to_str()?;
    let value: f64 = stem.trim().parse().ok()?;
    Proportion::new(value).ok()
}

/// List the frame files of a directory, sorted by position.
///
/// Files whose names do not encode a proportion are skipped. A missing
/// directory yields no frames.
pub fn scan_frames(dir: &Path) -> Vec<FrameFile> {
    let mut frames = Vec::new();

    if !dir.is_dir() {
        return frames;
    }

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        match parse_frame_position(path) {
            Some(position) => frames.push(FrameFile {
                position,
                path: path.to_path_buf(),
            }),
            None => tracing::debug!(path = %path.display(), "skipping file without a frame position"),
        }
    }

    frames.sort_by(|a, b| a.position.value().total_cmp(&b.position.value()));
    frames
}

/// List emotion sub-directories as `(name, path)`, sorted by name.
pub fn scan_emotions(dir: &Path) -> Vec<(String, PathBuf)> {
    let mut emotions = Vec::new();

    if !dir.is_dir() {
        return emotions;
    }

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }

        if let Some(name) = entry.file_name().to_str() {
            emotions.push((name.to_string(), entry.path().to_path_buf()));
        }
    }

    emotions
}
