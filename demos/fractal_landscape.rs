//! Demo generating a fractal landscape heightmap.
//!
//! Demonstrates:
//! - Diamond-square generation at a rendering-friendly resolution
//! - Reproducible output via a seeded RNG (pass a seed as the first arg)
//! - Export as a colormapped PNG and as JSON

use rand::{rngs::StdRng, SeedableRng};

use orogen_rs::{export, ColorMapRegistry, DiamondSquare, Result};

fn main() -> Result<()> {
    env_logger::init();

    // Optional seed argument for reproducible landscapes
    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    // 257 x 257 grid, moderately rough, like a mountain range
    let map = DiamondSquare::new(8).with_roughness(0.6).generate(&mut rng)?;

    let (min, max) = map.min_max();
    println!(
        "generated {side}x{side} landscape, elevation range [{min:.3}, {max:.3}]",
        side = map.side()
    );

    let color_maps = ColorMapRegistry::new();
    let terrain = color_maps
        .get("terrain")
        .expect("default color maps always include 'terrain'");

    export::save_png(&map, terrain, "fractal_landscape.png")?;
    export::save_json(&map, "fractal_landscape.json")?;
    println!("wrote fractal_landscape.png and fractal_landscape.json");

    Ok(())
}
