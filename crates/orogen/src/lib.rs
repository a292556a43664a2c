//! orogen-rs: procedural fractal terrain heightmaps.
//!
//! Generates square heightmaps with the diamond-square (midpoint
//! displacement) algorithm and provides the small set of conveniences a
//! consumer needs before handing the grid to a renderer: elevation color
//! mapping and file export.
//!
//! # Quick Start
//!
//! ```no_run
//! use orogen_rs::*;
//!
//! fn main() -> Result<()> {
//!     // A 257 x 257 grid with fresh terrain each run
//!     let map = generate_terrain(8, 0.6)?;
//!
//!     // Drop it to disk as a colormapped image
//!     let color_maps = ColorMapRegistry::new();
//!     let terrain = color_maps.get("terrain").unwrap();
//!     export::save_png(&map, terrain, "landscape.png")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! For reproducible terrain, drive [`DiamondSquare`] with a seeded RNG:
//!
//! ```
//! use orogen_rs::DiamondSquare;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let map = DiamondSquare::new(5).with_roughness(0.7).generate(&mut rng).unwrap();
//! assert_eq!(map.side(), 33);
//! ```

pub mod color_maps;
pub mod export;

// Re-export core types
pub use orogen_core::{
    error::{OrogenError, Result},
    DiamondSquare, Heightmap, DEFAULT_ROUGHNESS, MAX_SIZE,
};

pub use color_maps::{ColorMap, ColorMapRegistry};

/// Generates a heightmap of side `2^size + 1` using an entropy-seeded RNG.
///
/// Each call produces different terrain. Use [`DiamondSquare::generate`]
/// with a seeded RNG when reproducibility matters.
///
/// # Errors
/// Returns [`OrogenError::InvalidParameter`] if `size` is outside
/// `[1, MAX_SIZE]` or `roughness` is outside `(0, 1)`.
pub fn generate_terrain(size: u32, roughness: f32) -> Result<Heightmap> {
    let mut rng = rand::thread_rng();
    let map = DiamondSquare::new(size)
        .with_roughness(roughness)
        .generate(&mut rng)?;
    log::info!(
        "generated {side}x{side} terrain (size={size_exp}, roughness={roughness})",
        side = map.side(),
        size_exp = size,
    );
    Ok(map)
}
