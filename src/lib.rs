//! petmod - module editing core for DMC-style virtual pets
//!
//! Everything a module editor needs short of its UI:
//!
//! - [`sprites`] - creature and attack frame resolution through the
//!   module-then-shared fallback chain
//! - [`records`] - module.json / monster.json data containers
//!
//! The sprite core never returns errors; absence and faults degrade to
//! empty results so one bad asset cannot take an editing session down.

pub mod records;
pub mod sprites;
