//! Frame sources: loose directories and zip archives
//!
//! Both source kinds enumerate numbered PNG files, decode them to RGBA and
//! collect them into a [`FrameSet`]. Every fault degrades to absence: a
//! missing path, an unreadable container or a corrupt file can thin the
//! result but never surfaces as an error to the caller.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::warn;
use zip::ZipArchive;

use super::frames::FrameSet;

/// One candidate location for an entity's frames
///
/// Earlier candidates in a fallback chain strictly shadow later ones; the
/// resolver stops at the first source whose [`load`](FrameSource::load)
/// returns a non-empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameSource {
    /// Loose PNG files directly inside a directory (non-recursive)
    Directory(PathBuf),
    /// PNG entries inside a zip archive, matched by base name at any depth
    Archive(PathBuf),
}

impl FrameSource {
    /// Load every eligible frame from this source
    ///
    /// Eligible means a `.png` file (extension matched case-insensitively)
    /// whose stem parses as an integer in `[0, frame_cap)`. At most
    /// `frame_cap` matches are considered, counted in enumeration order
    /// before any decoding happens.
    pub fn load(&self, frame_cap: usize) -> FrameSet {
        match self {
            FrameSource::Directory(dir) => load_directory(dir, frame_cap),
            FrameSource::Archive(path) => load_archive(path, frame_cap),
        }
    }

    /// The path this source reads from
    pub fn path(&self) -> &Path {
        match self {
            FrameSource::Directory(path) | FrameSource::Archive(path) => path,
        }
    }
}

/// Parse a frame index out of a file name
///
/// Accepts `<index>.png` where `index` is an integer below `frame_cap`;
/// everything else (other extensions, non-numeric or out-of-range stems)
/// is ignored by the loaders rather than treated as an error.
fn parse_frame_name(file_name: &str, frame_cap: usize) -> Option<u32> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if !ext.eq_ignore_ascii_case("png") {
        return None;
    }
    let index = stem.parse::<u32>().ok()?;
    if (index as usize) < frame_cap {
        Some(index)
    } else {
        None
    }
}

/// Decode PNG bytes to RGBA
pub(super) fn decode_frame(bytes: &[u8]) -> Result<RgbaImage, image::ImageError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Load and decode a single frame file
///
/// Absence is silent: fallback probes miss constantly and that is normal.
/// Read and decode faults are logged and collapse to `None`.
pub(super) fn load_frame_file(path: &Path) -> Option<RgbaImage> {
    if !path.is_file() {
        return None;
    }

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("failed to read frame {:?}: {}", path, e);
            return None;
        }
    };

    match decode_frame(&bytes) {
        Ok(frame) => Some(frame),
        Err(e) => {
            warn!("failed to decode frame {:?}: {}", path, e);
            None
        }
    }
}

fn load_directory(dir: &Path, frame_cap: usize) -> FrameSet {
    let mut set = FrameSet::new();
    if !dir.is_dir() {
        return set;
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("failed to enumerate sprite dir {:?}: {}", dir, e);
            return set;
        }
    };

    // Truncation to the cap counts accepted names, not successful decodes,
    // and follows enumeration order (not guaranteed numeric).
    let matches: Vec<(u32, PathBuf)> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter_map(|p| {
            let index = p
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| parse_frame_name(n, frame_cap))?;
            Some((index, p))
        })
        .take(frame_cap)
        .collect();

    for (index, path) in matches {
        if let Some(frame) = load_frame_file(&path) {
            set.insert(index, frame);
        }
    }

    set
}

fn load_archive(path: &Path, frame_cap: usize) -> FrameSet {
    if !path.is_file() {
        return FrameSet::new();
    }

    match read_archive(path, frame_cap) {
        Ok(set) => set,
        Err(e) => {
            warn!("failed to read sprite archive {:?}: {}", path, e);
            FrameSet::new()
        }
    }
}

/// Read frames out of a zip archive
///
/// Container-level faults (open, entry read) bubble up and the caller
/// discards the whole set; a decode fault only drops its own entry.
fn read_archive(path: &Path, frame_cap: usize) -> std::io::Result<FrameSet> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let mut set = FrameSet::new();
    let mut matched = 0;
    for i in 0..archive.len() {
        if matched == frame_cap {
            break;
        }

        let mut entry = archive.by_index(i)?;
        if !entry.is_file() {
            continue;
        }

        // Match by base name only; packs often nest frames in a folder.
        let name = entry.name();
        let base = name.rsplit('/').next().unwrap_or(name).to_string();
        let index = match parse_frame_name(&base, frame_cap) {
            Some(index) => index,
            None => continue,
        };
        matched += 1;

        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes)?;
        match decode_frame(&bytes) {
            Ok(frame) => set.insert(index, frame),
            Err(e) => warn!("failed to decode entry {} in {:?}: {}", base, path, e),
        }
    }

    Ok(set)
}
