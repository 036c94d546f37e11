//! Sprite resolution for virtual-pet modules
//!
//! A module may override any creature's sprites by shipping them under its
//! own `monsters/` folder, loose or zipped; whatever it does not ship is
//! inherited from the shared game assets two levels up:
//!
//! ```text
//! <game root>/
//! ├── assets/monsters/     # shared creature sprites (dir or .zip per group)
//! ├── resources/atk/       # shared attack effects (1.png .. 117.png)
//! └── modules/<module>/
//!     ├── module.json      # record carrying the group name_format
//!     ├── monster.json     # creature records
//!     ├── monsters/        # creature sprite overrides (dir or .zip per group)
//!     └── atk/             # attack effect overrides
//! ```
//!
//! Resolution never fails: missing assets, unreadable containers and corrupt
//! frames all degrade to absence, which callers render as blank placeholders.

mod frames;
mod name_format;
mod resolver;
mod source;

pub use frames::FrameSet;
pub use name_format::{sprite_group_id, DEFAULT_NAME_FORMAT};
pub use resolver::{load_attack_frames, resolve_monster_frames, sprite_candidates};
pub use source::FrameSource;

/// Most frame indices a creature sprite group may hold (`0.png` .. `19.png`)
pub const MONSTER_FRAME_CAP: usize = 20;

/// Exact number of attack-effect frames (`1.png` .. `117.png`, 1-based)
pub const ATTACK_FRAME_COUNT: usize = 117;

/// Folder of per-group sprite dirs and archives inside a module
pub const MONSTERS_DIR: &str = "monsters";

/// Folder of numbered attack-effect frames
pub const ATTACK_DIR: &str = "atk";

/// Shared sprite tree under the game root
pub const SHARED_ASSETS_DIR: &str = "assets";

/// Shared resources tree under the game root
pub const SHARED_RESOURCES_DIR: &str = "resources";
