//! Integration tests for orogen-rs: generation through the public API,
//! color mapping, and file export.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use orogen_rs::*;

#[test]
fn test_generate_terrain_shapes() {
    for size in 1..=5 {
        let map = generate_terrain(size, 0.7).expect("generation failed");
        let expected_side = (1 << size) + 1;
        assert_eq!(map.side(), expected_side);
        assert_eq!(map.len(), expected_side * expected_side);
        assert!(map.as_slice().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_generate_terrain_rejects_invalid_parameters() {
    assert!(matches!(
        generate_terrain(0, 0.7),
        Err(OrogenError::InvalidParameter { name: "size", .. })
    ));
    assert!(matches!(
        generate_terrain(4, 1.5),
        Err(OrogenError::InvalidParameter { name: "roughness", .. })
    ));
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let generator = DiamondSquare::new(6).with_roughness(0.6);
    let a = generator.generate(&mut StdRng::seed_from_u64(7)).unwrap();
    let b = generator.generate(&mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b, "same seed must give bit-identical grids");
}

#[test]
fn test_colormapped_elevations() {
    let registry = ColorMapRegistry::new();
    let terrain = registry.get("terrain").expect("terrain map missing");

    let mut rng = StdRng::seed_from_u64(11);
    let map = DiamondSquare::new(4).generate(&mut rng).unwrap();

    let (min, max) = map.min_max();
    assert!(min < max, "generated terrain should not be flat");

    // Every normalized elevation maps to a color inside [0, 1]^3.
    for &v in map.as_slice() {
        let c = terrain.sample(map.normalized(v));
        for channel in [c.x, c.y, c.z] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}

#[test]
fn test_json_roundtrip() {
    let mut rng = StdRng::seed_from_u64(3);
    let map = DiamondSquare::new(3).generate(&mut rng).unwrap();

    let path = std::env::temp_dir().join(format!("orogen_test_{}.json", std::process::id()));
    export::save_json(&map, &path).expect("save failed");
    let loaded = export::load_json(&path).expect("load failed");
    std::fs::remove_file(&path).ok();

    assert_eq!(map, loaded);
}

proptest! {
    // File I/O per case, so keep the case count modest.
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_json_roundtrip_preserves_any_seeded_grid(
        seed in any::<u64>(),
        size in 1_u32..=4,
        roughness in 0.1_f32..0.9,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let map = DiamondSquare::new(size)
            .with_roughness(roughness)
            .generate(&mut rng)
            .unwrap();

        let path = std::env::temp_dir().join(format!(
            "orogen_prop_{}_{size}_{seed}.json",
            std::process::id()
        ));
        export::save_json(&map, &path).expect("save failed");
        let loaded = export::load_json(&path).expect("load failed");
        std::fs::remove_file(&path).ok();

        prop_assert_eq!(map, loaded);
    }
}

#[test]
fn test_png_export_writes_file() {
    let mut rng = StdRng::seed_from_u64(5);
    let map = DiamondSquare::new(3).generate(&mut rng).unwrap();
    let registry = ColorMapRegistry::new();
    let grayscale = registry.get("grayscale").unwrap();

    let path = std::env::temp_dir().join(format!("orogen_test_{}.png", std::process::id()));
    export::save_png(&map, grayscale, &path).expect("png export failed");

    let img = image::open(&path).expect("written file should be a readable image");
    std::fs::remove_file(&path).ok();
    assert_eq!(img.width(), 9);
    assert_eq!(img.height(), 9);
}
