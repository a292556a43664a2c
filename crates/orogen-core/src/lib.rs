//! Core types for orogen-rs.
//!
//! This crate provides the fundamental pieces of the terrain generator:
//! - [`Heightmap`] — a square grid of elevation values
//! - [`DiamondSquare`] — the midpoint displacement generator
//! - [`OrogenError`] and the crate [`Result`] alias
//!
//! Rendering, color mapping, and file export live in the `orogen-rs`
//! facade crate; this crate is pure computation with no I/O.

// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod diamond_square;
pub mod error;
pub mod heightmap;

pub use diamond_square::{DiamondSquare, DEFAULT_ROUGHNESS, MAX_SIZE};
pub use error::{OrogenError, Result};
pub use heightmap::Heightmap;
