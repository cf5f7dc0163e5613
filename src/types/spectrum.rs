//! Proportion-indexed image strips.
//!
//! An animation such as "eye closing" or "mouth opening" is modelled as a
//! handful of still frames sampled across the openness axis. A spectrum turns
//! a continuous [`Proportion`] into the closest of those frames.

use crate::error::{FacesError, Result};

use super::{Bitmap, Proportion};

/// One frame of a spectrum and the position it was sampled at.
#[derive(Debug, Clone)]
struct SpectrumEntry {
    position: Proportion,
    image: Bitmap,
}

/// Ordered, non-empty sequence of frames with strictly increasing positions.
#[derive(Debug, Clone)]
pub struct ImageSpectrum {
    entries: Vec<SpectrumEntry>,
}

impl ImageSpectrum {
    /// Build a spectrum from `(position, image)` pairs in any order.
    ///
    /// Entries are sorted by position. When two entries share a position the
    /// first one given is kept. Fails if `entries` is empty.
    pub fn new(
        name: &str,
        entries: impl IntoIterator<Item = (Proportion, Bitmap)>,
    ) -> Result<Self> {
        let mut entries: Vec<SpectrumEntry> = entries
            .into_iter()
            .map(|(position, image)| SpectrumEntry { position, image })
            .collect();

        // Stable sort keeps the first of equal positions ahead for dedup.
        entries.sort_by(|a, b| a.position.value().total_cmp(&b.position.value()));
        entries.dedup_by(|later, earlier| later.position == earlier.position);

        if entries.is_empty() {
            return Err(FacesError::EmptySpectrum {
                source_name: name.to_string(),
            });
        }

        Ok(Self { entries })
    }

    /// Build a spectrum whose frames are evenly spaced across `[0.0, 1.0]`.
    ///
    /// A single image is placed at `0.0`.
    pub fn evenly_spaced(name: &str, images: Vec<Bitmap>) -> Result<Self> {
        let last = images.len().saturating_sub(1).max(1) as f64;
        let entries = images
            .into_iter()
            .enumerate()
            .map(|(i, image)| (Proportion::clamped(i as f64 / last), image));
        Self::new(name, entries)
    }

    /// The frame whose position is closest to `p`.
    ///
    /// When `p` lies exactly between two neighbouring frames, the frame with
    /// the even index wins, so ties round half to even across the strip.
    /// This is decided by index, not position: on an unevenly spaced strip
    /// such as `{0.0, 0.25, 0.75}` the tie at `0.5` goes to the larger
    /// position `0.75`.
    pub fn nearest(&self, p: Proportion) -> &Bitmap {
        &self.entries[self.nearest_index(p)].image
    }

    fn nearest_index(&self, p: Proportion) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;

        for (index, entry) in self.entries.iter().enumerate() {
            let distance = entry.position.distance(p);
            if distance < best_distance
                || (distance == best_distance && index % 2 == 0 && best % 2 == 1)
            {
                best = index;
                best_distance = distance;
            }
        }

        best
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Proportion> + '_ {
        self.entries.iter().map(|e| e.position)
    }
}
