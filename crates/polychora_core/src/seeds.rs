//! Seed table for the regular convex 4-polytopes
//!
//! Every polytope except the 5-cell is described by a handful of seed vertices
//! whose sign/permutation orbits enumerate the full vertex set, plus the edge
//! length used to infer edges. The 5-cell has no such symmetric description in
//! these coordinates, so its seed list already is its vertex list.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::GeometryError;

/// Golden ratio
pub const PHI: f32 = 1.618_034;

/// Shape identifiers known to the kernel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Placeholder with no geometry
    None,
    /// 5-cell (pentachoron): 5 vertices, 10 edges
    Cell5,
    /// 8-cell (tesseract): 16 vertices, 32 edges
    Hypercube,
    /// 16-cell (hexadecachoron): 8 vertices, 24 edges
    Cell16,
    /// 24-cell (icositetrachoron): 24 vertices, 96 edges
    Cell24,
    /// 120-cell (hecatonicosachoron): 600 vertices, 1200 edges
    Cell120,
    /// 600-cell (hexacosichoron): 120 vertices, 720 edges
    Cell600,
    /// Procedural terrain chunk (built by [`crate::TerrainChunk`], not seeded)
    Terrain,
}

impl ShapeKind {
    /// All shape identifiers
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::None,
        ShapeKind::Cell5,
        ShapeKind::Hypercube,
        ShapeKind::Cell16,
        ShapeKind::Cell24,
        ShapeKind::Cell120,
        ShapeKind::Cell600,
        ShapeKind::Terrain,
    ];

    /// Configuration name of the shape
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::None => "none",
            ShapeKind::Cell5 => "cell5",
            ShapeKind::Hypercube => "hypercube",
            ShapeKind::Cell16 => "cell16",
            ShapeKind::Cell24 => "cell24",
            ShapeKind::Cell120 => "cell120",
            ShapeKind::Cell600 => "cell600",
            ShapeKind::Terrain => "terrain",
        }
    }

    /// Whether the seed table has an entry for this shape
    pub fn is_polychoron(self) -> bool {
        !matches!(self, ShapeKind::Terrain)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        let kind = match normalized.as_str() {
            "none" => ShapeKind::None,
            "cell5" | "5cell" | "pentachoron" | "simplex" => ShapeKind::Cell5,
            "hypercube" | "tesseract" | "cell8" | "8cell" => ShapeKind::Hypercube,
            "cell16" | "16cell" | "hexadecachoron" => ShapeKind::Cell16,
            "cell24" | "24cell" | "icositetrachoron" => ShapeKind::Cell24,
            "cell120" | "120cell" | "hecatonicosachoron" => ShapeKind::Cell120,
            "cell600" | "600cell" | "hexacosichoron" => ShapeKind::Cell600,
            "terrain" => ShapeKind::Terrain,
            _ => return Err(GeometryError::unknown_shape(s)),
        };
        Ok(kind)
    }
}

/// Which permutations of a seed's coordinates are kept
///
/// Parity is measured against the sorted coordinate order: a permutation is
/// even when its coordinate sequence has an even number of inversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    /// Every permutation
    All,
    /// Only even permutations
    Even,
    /// Only odd permutations
    Odd,
}

/// One seed vertex and the permutation filter applied to it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedVertex {
    /// Seed coordinates `[x, y, z, w]`
    pub coords: [f32; 4],
    /// Permutation filter for this seed
    pub parity: Parity,
}

impl SeedVertex {
    /// Seed expanded over every permutation
    pub const fn all(coords: [f32; 4]) -> Self {
        Self { coords, parity: Parity::All }
    }

    /// Seed expanded over even permutations only
    pub const fn even(coords: [f32; 4]) -> Self {
        Self { coords, parity: Parity::Even }
    }
}

/// Generating data for one shape
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeSeed {
    /// Seed vertices (in table order)
    pub seeds: Vec<SeedVertex>,
    /// Distance between the endpoints of every edge
    pub edge_length: f32,
    /// The seeds are the final vertex set (no sign/permutation expansion)
    pub seed_is_final: bool,
}

impl ShapeSeed {
    /// Seeds that are expanded under the sign and permutation orbits
    pub fn orbit(seeds: Vec<SeedVertex>, edge_length: f32) -> Self {
        Self { seeds, edge_length, seed_is_final: false }
    }

    /// Seeds that already are the complete vertex list
    pub fn explicit(vertices: Vec<[f32; 4]>, edge_length: f32) -> Self {
        Self {
            seeds: vertices.into_iter().map(SeedVertex::all).collect(),
            edge_length,
            seed_is_final: true,
        }
    }
}

/// Look up the generating seeds for a shape
///
/// Fails with [`GeometryError::Configuration`] for shapes that are not
/// polychora (terrain chunks have no seed entry).
pub fn seed_table(kind: ShapeKind) -> Result<ShapeSeed, GeometryError> {
    let sqrt5 = 5f32.sqrt();
    let phi_n2 = PHI.powi(-2);
    let phi_n1 = PHI.recip();
    let phi_2 = PHI * PHI;

    let seed = match kind {
        ShapeKind::None => ShapeSeed::orbit(Vec::new(), 0.0),
        ShapeKind::Cell5 => {
            let low = -1.0 / sqrt5;
            ShapeSeed::explicit(
                vec![
                    [1.0, 1.0, 1.0, low],
                    [1.0, -1.0, -1.0, low],
                    [-1.0, 1.0, -1.0, low],
                    [-1.0, -1.0, 1.0, low],
                    [0.0, 0.0, 0.0, 4.0 / sqrt5],
                ],
                2.0 * 2f32.sqrt(),
            )
        }
        ShapeKind::Hypercube => {
            ShapeSeed::orbit(vec![SeedVertex::all([1.0, 1.0, 1.0, 1.0])], 2.0)
        }
        ShapeKind::Cell16 => {
            ShapeSeed::orbit(vec![SeedVertex::all([1.0, 0.0, 0.0, 0.0])], 2f32.sqrt())
        }
        ShapeKind::Cell24 => {
            ShapeSeed::orbit(vec![SeedVertex::all([1.0, 1.0, 0.0, 0.0])], 2f32.sqrt())
        }
        ShapeKind::Cell120 => ShapeSeed::orbit(
            vec![
                SeedVertex::all([2.0, 2.0, 0.0, 0.0]),
                SeedVertex::all([sqrt5, 1.0, 1.0, 1.0]),
                SeedVertex::all([PHI, PHI, PHI, phi_n2]),
                SeedVertex::all([phi_2, phi_n1, phi_n1, phi_n1]),
                SeedVertex::even([phi_2, phi_n2, 1.0, 0.0]),
                SeedVertex::even([sqrt5, phi_n1, PHI, 0.0]),
                SeedVertex::even([2.0, 1.0, PHI, phi_n1]),
            ],
            3.0 - sqrt5,
        ),
        ShapeKind::Cell600 => ShapeSeed::orbit(
            vec![
                SeedVertex::all([2.0, 0.0, 0.0, 0.0]),
                SeedVertex::all([1.0, 1.0, 1.0, 1.0]),
                SeedVertex::even([PHI, 1.0, phi_n1, 0.0]),
            ],
            2.0 / PHI,
        ),
        ShapeKind::Terrain => return Err(GeometryError::unknown_shape(kind)),
    };

    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shape_names() {
        assert_eq!("hypercube".parse::<ShapeKind>().unwrap(), ShapeKind::Hypercube);
        assert_eq!("Tesseract".parse::<ShapeKind>().unwrap(), ShapeKind::Hypercube);
        assert_eq!("600-cell".parse::<ShapeKind>().unwrap(), ShapeKind::Cell600);
        assert_eq!(" cell_24 ".parse::<ShapeKind>().unwrap(), ShapeKind::Cell24);
    }

    #[test]
    fn test_parse_unknown_shape_is_configuration_error() {
        let err = "dodecahedron".parse::<ShapeKind>().unwrap_err();
        assert!(matches!(err, GeometryError::Configuration(_)));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_terrain_has_no_seed_entry() {
        assert!(!ShapeKind::Terrain.is_polychoron());
        assert!(matches!(
            seed_table(ShapeKind::Terrain),
            Err(GeometryError::Configuration(_))
        ));
    }

    #[test]
    fn test_every_polychoron_has_an_entry() {
        for kind in ShapeKind::ALL.into_iter().filter(|k| k.is_polychoron()) {
            assert!(seed_table(kind).is_ok(), "{} should have a seed entry", kind);
        }
    }

    #[test]
    fn test_cell5_seeds_are_final() {
        let seed = seed_table(ShapeKind::Cell5).unwrap();
        assert!(seed.seed_is_final);
        assert_eq!(seed.seeds.len(), 5);
    }

    #[test]
    fn test_none_has_no_seeds() {
        let seed = seed_table(ShapeKind::None).unwrap();
        assert!(seed.seeds.is_empty());
    }

    #[test]
    fn test_phi_constant() {
        let phi = (1.0 + 5f32.sqrt()) / 2.0;
        assert!((PHI - phi).abs() < 1e-6);
        assert!((PHI * PHI - PHI - 1.0).abs() < 1e-5);
    }
}
