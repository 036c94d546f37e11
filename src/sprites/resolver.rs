//! Fallback resolution of creature and attack frames
//!
//! Modules override only what they ship; everything else is inherited from
//! the shared game assets two levels above the module. Creature sprites
//! resolve whole-set-at-a-time across four candidate tiers, attack effects
//! resolve frame-by-frame across two.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::debug;

use super::frames::FrameSet;
use super::name_format::sprite_group_id;
use super::source::{load_frame_file, FrameSource};
use super::{ATTACK_DIR, ATTACK_FRAME_COUNT, MONSTERS_DIR, SHARED_ASSETS_DIR, SHARED_RESOURCES_DIR};

/// Shared game root, two levels above a module
///
/// Modules live at `<root>/<modules dir>/<module>`; anything shallower has
/// no shared tree, so the global tiers are skipped rather than guessed.
fn game_root(module_dir: &Path) -> Option<&Path> {
    module_dir.parent().and_then(Path::parent)
}

/// Ordered candidate locations for a sprite group
///
/// Module-local directory, module-local archive, then the same pair under
/// the shared game assets. The first candidate yielding any frame wins.
pub fn sprite_candidates(group: &str, module_dir: &Path) -> Vec<FrameSource> {
    let local = module_dir.join(MONSTERS_DIR);
    let mut candidates = vec![
        FrameSource::Directory(local.join(group)),
        FrameSource::Archive(local.join(format!("{}.zip", group))),
    ];

    if let Some(root) = game_root(module_dir) {
        let shared = root.join(SHARED_ASSETS_DIR).join(MONSTERS_DIR);
        candidates.push(FrameSource::Directory(shared.join(group)));
        candidates.push(FrameSource::Archive(shared.join(format!("{}.zip", group))));
    }

    candidates
}

/// Resolve a creature's sprite frames through the fallback chain
///
/// Returns an empty set when `logical_name` or `module_dir` is empty and
/// when no tier yields a frame; absence is an expected outcome reported
/// only as a debug line, never an error. A tier that yields any frame at
/// all stops the search, even if some of its indices are missing. Faults
/// inside a tier degrade to that tier being empty (see [`FrameSource::load`]).
pub fn resolve_monster_frames(
    logical_name: &str,
    module_dir: &Path,
    name_format: &str,
    frame_cap: usize,
) -> FrameSet {
    if logical_name.is_empty() || module_dir.as_os_str().is_empty() {
        return FrameSet::new();
    }

    let group = sprite_group_id(logical_name, name_format);
    for source in sprite_candidates(&group, module_dir) {
        let set = source.load(frame_cap);
        if !set.is_empty() {
            debug!(
                "resolved '{}': {} frame(s) from {:?}",
                logical_name,
                set.len(),
                source.path()
            );
            return set;
        }
    }

    debug!(
        "no sprites for '{}' (group '{}') under {:?} or shared assets",
        logical_name, group, module_dir
    );
    FrameSet::new()
}

/// Load the attack-effect frames for a module
///
/// Attack sprites use plain 1-based numeric names and resolve per index:
/// `<module>/atk/<n>.png` first, then `<root>/resources/atk/<n>.png`. An
/// index that misses (or fails to decode) at both tiers stays `None`. The
/// result is always exactly [`ATTACK_FRAME_COUNT`] slots long.
pub fn load_attack_frames(module_dir: &Path) -> Vec<Option<RgbaImage>> {
    let local = module_dir.join(ATTACK_DIR);
    let shared: Option<PathBuf> =
        game_root(module_dir).map(|root| root.join(SHARED_RESOURCES_DIR).join(ATTACK_DIR));

    let frames: Vec<Option<RgbaImage>> = (1..=ATTACK_FRAME_COUNT as u32)
        .map(|n| {
            let name = format!("{}.png", n);
            load_frame_file(&local.join(&name))
                .or_else(|| shared.as_ref().and_then(|dir| load_frame_file(&dir.join(&name))))
        })
        .collect();

    if frames.iter().all(|slot| slot.is_none()) {
        debug!("no attack frames under {:?} or shared resources", module_dir);
    }
    frames
}
