//! Sign and permutation orbits of 4D points
//!
//! Pure functions over `[f32; 4]`, independent of any particular shape. The
//! sign group has order 16 and the permutation group order 24; a seed's orbit
//! under both gives a symmetric subset of a polytope's vertices.

use crate::seeds::Parity;

/// All 24 orderings of four axes
const PERMUTATIONS: [[usize; 4]; 24] = [
    [0, 1, 2, 3], [0, 1, 3, 2], [0, 2, 1, 3], [0, 2, 3, 1], [0, 3, 1, 2], [0, 3, 2, 1],
    [1, 0, 2, 3], [1, 0, 3, 2], [1, 2, 0, 3], [1, 2, 3, 0], [1, 3, 0, 2], [1, 3, 2, 0],
    [2, 0, 1, 3], [2, 0, 3, 1], [2, 1, 0, 3], [2, 1, 3, 0], [2, 3, 0, 1], [2, 3, 1, 0],
    [3, 0, 1, 2], [3, 0, 2, 1], [3, 1, 0, 2], [3, 1, 2, 0], [3, 2, 0, 1], [3, 2, 1, 0],
];

/// Number of strictly decreasing pairs in a coordinate sequence
pub fn inversion_count(coords: &[f32; 4]) -> usize {
    let mut count = 0;
    for i in 0..4 {
        for j in (i + 1)..4 {
            if coords[i] > coords[j] {
                count += 1;
            }
        }
    }
    count
}

/// Whether a coordinate sequence is an even permutation of its sorted order
pub fn is_even_permutation(coords: &[f32; 4]) -> bool {
    inversion_count(coords) % 2 == 0
}

/// Distinct permutations of a point's coordinates, filtered by parity
///
/// Parity is judged by the inversion count of the permuted values, so the
/// order the seed was written in does not matter.
pub fn permutations(coords: [f32; 4], parity: Parity) -> Vec<[f32; 4]> {
    let mut sorted = coords;
    sorted.sort_by(f32::total_cmp);

    let mut result: Vec<[f32; 4]> = Vec::with_capacity(PERMUTATIONS.len());
    for perm in &PERMUTATIONS {
        let permuted = [sorted[perm[0]], sorted[perm[1]], sorted[perm[2]], sorted[perm[3]]];

        let keep = match parity {
            Parity::All => true,
            Parity::Even => is_even_permutation(&permuted),
            Parity::Odd => !is_even_permutation(&permuted),
        };

        if keep && !result.contains(&permuted) {
            result.push(permuted);
        }
    }
    result
}

/// All 16 sign combinations of a point, including duplicates from zeros
pub fn sign_flips(coords: [f32; 4]) -> [[f32; 4]; 16] {
    let mut result = [[0.0; 4]; 16];
    for (mask, out) in result.iter_mut().enumerate() {
        for axis in 0..4 {
            let sign = if mask & (1 << axis) == 0 { 1.0 } else { -1.0 };
            out[axis] = coords[axis] * sign;
        }
    }
    result
}

/// Full sign and permutation orbit of a seed, without deduplication
pub fn orbit(coords: [f32; 4], parity: Parity) -> Vec<[f32; 4]> {
    permutations(coords, parity)
        .into_iter()
        .flat_map(sign_flips)
        .collect()
}

/// Remove exact duplicates, keeping the first occurrence of each point
///
/// Orbit coincidences are exact (they come from permuting and negating the
/// same values), so no tolerance is needed. `-0.0` equals `0.0`.
pub fn dedup_exact(points: &mut Vec<[f32; 4]>) {
    let mut unique: Vec<[f32; 4]> = Vec::with_capacity(points.len());
    for p in points.drain(..) {
        if !unique.contains(&p) {
            unique.push(p);
        }
    }
    *points = unique;
}
