//! petmod CLI - inspect a module's resolved sprites from a terminal
//!
//! Usage:
//!   petmod <MODULE_DIR>                        # list the module's creatures
//!   petmod <MODULE_DIR> Agumon                 # report Agumon's resolved frames
//!   petmod <MODULE_DIR> Agumon --export out/   # write the frames as PNGs
//!   petmod <MODULE_DIR> --atk                  # attack frame coverage
//!
//! Set RUST_LOG=debug to see which fallback tier supplied each result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use image::RgbaImage;

use petmod::records::{load_monsters, ModuleRecord};
use petmod::sprites::{
    load_attack_frames, resolve_monster_frames, ATTACK_FRAME_COUNT, MONSTER_FRAME_CAP,
};

#[derive(Parser)]
#[command(name = "petmod")]
#[command(version, about = "Inspect a virtual-pet module's resolved sprites")]
struct Cli {
    /// Module directory (the one holding module.json)
    module_dir: PathBuf,

    /// Creature to resolve; omit to list the module's creatures
    monster: Option<String>,

    /// Frame cap for creature sprites
    #[arg(long, default_value_t = MONSTER_FRAME_CAP)]
    cap: usize,

    /// Report attack-effect coverage instead of creature sprites
    #[arg(long)]
    atk: bool,

    /// Write resolved frames as <index>.png files into this directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.atk {
        report_attack_frames(&cli)
    } else {
        match &cli.monster {
            Some(name) => resolve_and_report(&cli, name),
            None => list_monsters(&cli),
        }
    }
}

/// Print one line per creature record in the module
fn list_monsters(cli: &Cli) -> Result<()> {
    let module = ModuleRecord::load(&cli.module_dir)
        .with_context(|| format!("failed to load module record from {:?}", cli.module_dir))?;
    let monsters = load_monsters(&cli.module_dir)
        .with_context(|| format!("failed to load creature records from {:?}", cli.module_dir))?;

    println!("{} ({} creatures)", module.name, monsters.len());
    for m in &monsters {
        println!(
            "  {:<24} stage {:>2}  pow {:>4}  {}",
            m.name, m.stage, m.power, m.attribute
        );
    }
    Ok(())
}

/// Resolve one creature's frames and report them, optionally exporting
fn resolve_and_report(cli: &Cli, name: &str) -> Result<()> {
    // The record supplies the module's name_format; a missing record is a
    // real error here, unlike sprite absence below.
    let module = ModuleRecord::load(&cli.module_dir)
        .with_context(|| format!("failed to load module record from {:?}", cli.module_dir))?;

    let set = resolve_monster_frames(name, &cli.module_dir, &module.name_format, cli.cap);
    let sequence = set.to_sequence(cli.cap);

    println!("{}: {} of {} frames", name, set.len(), cli.cap);
    for (i, slot) in sequence.iter().enumerate() {
        match slot {
            Some(frame) => println!("  {:>3}  {}x{}", i, frame.width(), frame.height()),
            None => println!("  {:>3}  -", i),
        }
    }

    if let Some(dir) = &cli.export {
        export_frames(dir, &sequence, 0)?;
        println!("exported {} frame(s) to {:?}", set.len(), dir);
    }
    Ok(())
}

/// Report which of the attack-effect frames resolve
fn report_attack_frames(cli: &Cli) -> Result<()> {
    let frames = load_attack_frames(&cli.module_dir);
    let present = frames.iter().filter(|slot| slot.is_some()).count();

    println!("attack frames: {} of {}", present, ATTACK_FRAME_COUNT);
    if present > 0 && present < ATTACK_FRAME_COUNT {
        let missing: Vec<String> = frames
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| (i + 1).to_string())
            .collect();
        println!("missing: {}", missing.join(" "));
    }

    if let Some(dir) = &cli.export {
        export_frames(dir, &frames, 1)?;
        println!("exported {} frame(s) to {:?}", present, dir);
    }
    Ok(())
}

/// Write each present frame as `<first_index + i>.png` under `dir`
fn export_frames(dir: &Path, frames: &[Option<RgbaImage>], first_index: usize) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export dir {:?}", dir))?;

    for (i, slot) in frames.iter().enumerate() {
        if let Some(frame) = slot {
            let path = dir.join(format!("{}.png", first_index + i));
            frame
                .save(&path)
                .with_context(|| format!("failed to write {:?}", path))?;
        }
    }
    Ok(())
}
