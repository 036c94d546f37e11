//! Sparse frame sets and their dense render-order projection

use std::collections::BTreeMap;

use image::RgbaImage;

/// Decoded frames keyed by frame index
///
/// A set loaded from one source is either empty (that source had nothing,
/// fallback continues) or holds at least one frame (that source wins, even
/// when other expected indices are absent from it). Gaps are normal;
/// [`FrameSet::to_sequence`] projects them as explicit placeholders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSet {
    frames: BTreeMap<u32, RgbaImage>,
}

impl FrameSet {
    /// Create an empty frame set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a frame, replacing any previous frame at that index
    pub fn insert(&mut self, index: u32, frame: RgbaImage) {
        self.frames.insert(index, frame);
    }

    /// Get the frame at an index, if present
    pub fn get(&self, index: u32) -> Option<&RgbaImage> {
        self.frames.get(&index)
    }

    /// Number of frames present
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check whether the set holds no frames at all
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate frames in index order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &RgbaImage)> {
        self.frames.iter().map(|(index, frame)| (*index, frame))
    }

    /// Project the set into a dense sequence of exactly `frame_cap` slots
    ///
    /// Slot `i` holds the frame at index `i` when present and `None`
    /// otherwise, so sparse sources keep positional alignment. Pure: no
    /// I/O and no failure cases.
    pub fn to_sequence(&self, frame_cap: usize) -> Vec<Option<RgbaImage>> {
        (0..frame_cap as u32)
            .map(|index| self.frames.get(&index).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn frame(color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(2, 2, Rgba(color))
    }

    #[test]
    fn test_insert_and_get() {
        let mut set = FrameSet::new();
        assert!(set.is_empty());

        set.insert(0, frame([255, 0, 0, 255]));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
        assert!(set.get(0).is_some());
        assert!(set.get(1).is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut set = FrameSet::new();
        set.insert(1, frame([1, 1, 1, 255]));
        set.insert(1, frame([2, 2, 2, 255]));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(1).unwrap().get_pixel(0, 0), &Rgba([2, 2, 2, 255]));
    }

    #[test]
    fn test_iter_is_index_ordered() {
        let mut set = FrameSet::new();
        set.insert(5, frame([0, 0, 0, 255]));
        set.insert(0, frame([0, 0, 0, 255]));
        set.insert(3, frame([0, 0, 0, 255]));

        let indices: Vec<u32> = set.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 3, 5]);
    }

    #[test]
    fn test_to_sequence_fills_gaps() {
        let mut set = FrameSet::new();
        set.insert(0, frame([255, 0, 0, 255]));
        set.insert(3, frame([0, 255, 0, 255]));

        let seq = set.to_sequence(5);
        assert_eq!(seq.len(), 5);
        assert!(seq[0].is_some());
        assert!(seq[1].is_none());
        assert!(seq[2].is_none());
        assert!(seq[3].is_some());
        assert!(seq[4].is_none());
    }

    #[test]
    fn test_to_sequence_of_empty_set() {
        let seq = FrameSet::new().to_sequence(3);
        assert_eq!(seq.len(), 3);
        assert!(seq.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn test_to_sequence_drops_out_of_range_indices() {
        let mut set = FrameSet::new();
        set.insert(7, frame([0, 0, 255, 255]));

        let seq = set.to_sequence(5);
        assert_eq!(seq.len(), 5);
        assert!(seq.iter().all(|slot| slot.is_none()));
    }
}
