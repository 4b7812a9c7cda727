//! Pruning-table construction: the symmetry-reduced cocsep table and the
//! bit-packed h48 tables built on top of it.
//!
//! The packed get/set helpers and the depth-by-depth BFS with a running
//! histogram mirror the teacher's own `create_phase1_prun_table`, just
//! generalized from a fixed 2-bit phase-1/phase-2 layout to the
//! parametrised k=2/k=4 h48 layout this crate needs.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::coord::{coord_cocsep, coord_h48, invcoord_h48, CocsepLookup, ESEP_DOMAIN};
use crate::cube::{self, Cube, ALL_MOVES, MOVE_CUBES, N_TRANS, TRANS_INV};
use crate::moves;

/// The whole-cube rotation "rotation UF" is the identity transform; used
/// to skip it when iterating self-similarity orbits.
lazy_static! {
    static ref IDENTITY_TRANSFORM: usize =
        cube::parse_transform("rotation UF").expect("transform name is always valid");
}

pub const COCSEP_MAX_DEPTH: u8 = 9;

/// Number of symmetry classes the cocsep domain quotients down to (spec.md
/// §3); used to size h48 tables without first building the cocsep table.
pub const COCSEP_CLASSES: usize = 3393;

/// Symmetry-reduced table over the cocsep coordinate domain: which class
/// each coordinate belongs to, the transform taking it to that class's
/// representative, its BFS distance, and (per class) a representative cube
/// and a 48-bit self-similarity mask.
pub struct CocsepTable {
    pub class: Vec<u16>,
    pub ttrep: Vec<u8>,
    pub dist: Vec<u8>,
    pub selfsim: Vec<u64>,
    pub reps: Vec<Cube>,
}

impl CocsepLookup for CocsepTable {
    fn classify(&self, cocsep: usize) -> (u16, u8) {
        (self.class[cocsep], self.ttrep[cocsep])
    }
}

const UNSET: u16 = u16::MAX;

/// Registers a newly discovered representative as class `reps.len()`,
/// classifying every coordinate in its 48-transform orbit and recording
/// the self-similarity mask. Returns how many coordinates were freshly
/// labeled (a coordinate already labeled by an earlier call is left alone).
fn classify_new(
    rep_cube: Cube,
    rep_coord: usize,
    depth: u8,
    class: &mut [u16],
    ttrep: &mut [u8],
    dist: &mut [u8],
    selfsim: &mut Vec<u64>,
    reps: &mut Vec<Cube>,
) -> usize {
    let n = reps.len() as u16;
    reps.push(rep_cube);
    let mut mask = 0u64;
    let mut newly_labeled = 0usize;
    for t in 0..N_TRANS {
        let image = rep_cube.transform(t);
        let coord = coord_cocsep(&image);
        if coord == rep_coord {
            mask |= 1 << t;
        }
        if class[coord] == UNSET {
            class[coord] = n;
            ttrep[coord] = TRANS_INV[t] as u8;
            dist[coord] = depth;
            newly_labeled += 1;
        }
    }
    selfsim.push(mask);
    newly_labeled
}

/// Builds the cocsep table by symmetry-reduced BFS: only one representative
/// cube per already-discovered class is expanded through the 18 moves at
/// each depth, and every freshly reached coordinate's entire 48-orbit is
/// classified in one pass.
pub fn build_cocsep_table() -> CocsepTable {
    let mut class = vec![UNSET; crate::coord::COCSEP_DOMAIN];
    let mut ttrep = vec![0u8; crate::coord::COCSEP_DOMAIN];
    let mut dist = vec![0u8; crate::coord::COCSEP_DOMAIN];
    let mut selfsim = Vec::new();
    let mut reps = Vec::new();

    let solved = Cube::solved();
    classify_new(solved, coord_cocsep(&solved), 0, &mut class, &mut ttrep, &mut dist, &mut selfsim, &mut reps);
    log::debug!("cocsep depth 0: 1 class");

    let mut frontier_start = 0usize;
    for depth in 1..=COCSEP_MAX_DEPTH {
        let frontier_end = reps.len();
        let mut new_classes = 0usize;
        for class_idx in frontier_start..frontier_end {
            let rep = reps[class_idx];
            for &mv in &ALL_MOVES {
                let neighbor = MOVE_CUBES[mv.index()].compose(&rep);
                let coord = coord_cocsep(&neighbor);
                if class[coord] != UNSET {
                    continue;
                }
                classify_new(neighbor, coord, depth, &mut class, &mut ttrep, &mut dist, &mut selfsim, &mut reps);
                new_classes += 1;
            }
        }
        log::debug!("cocsep depth {depth}: {new_classes} new classes, {} total", reps.len());
        frontier_start = frontier_end;
    }
    log::info!("cocsep table built: {} classes over {} coordinates", reps.len(), crate::coord::COCSEP_DOMAIN);

    CocsepTable { class, ttrep, dist, selfsim, reps }
}

// ---------------------------------------------------------------------
// Packed k-bit storage (k = 2 or 4).
// ---------------------------------------------------------------------

pub fn packed_words(n: usize, k: u32) -> usize {
    let epw = (32 / k) as usize;
    n.div_ceil(epw)
}

pub fn packed_fill(n: usize, k: u32, sentinel: u32) -> Vec<u32> {
    let epw = 32 / k;
    let mut word = 0u32;
    for s in 0..epw {
        word |= sentinel << (k * s);
    }
    vec![word; packed_words(n, k)]
}

pub fn packed_get(data: &[u32], k: u32, i: usize) -> u32 {
    let epw = (32 / k) as usize;
    let shift = k as usize * (i % epw);
    (data[i / epw] >> shift) & ((1 << k) - 1)
}

pub fn packed_set(data: &mut [u32], k: u32, i: usize, value: u32) {
    let epw = (32 / k) as usize;
    let shift = k as usize * (i % epw);
    let mask = (1u32 << k) - 1;
    let idx = i / epw;
    data[idx] = (data[idx] & !(mask << shift)) | ((value & mask) << shift);
}

pub(crate) fn sentinel_for(k: u32) -> u32 {
    if k == 4 {
        15
    } else {
        3
    }
}

// ---------------------------------------------------------------------
// H48 table: full breadth-first build (k=4, or k=2 with base=0).
// ---------------------------------------------------------------------

pub struct H48Table {
    pub h: u32,
    pub k: u32,
    pub base: u8,
    pub max_value: u8,
    pub data: Vec<u32>,
    pub info: Vec<u64>,
}

impl H48Table {
    pub fn domain(cocsep: &CocsepTable, h: u32) -> usize {
        ESEP_DOMAIN * cocsep.reps.len() * (1usize << h)
    }

    /// Pruning value at coordinate `coord`, already offset by `base`, or
    /// `None` if the entry is unset (the k=2 "unknown, use fallback" case).
    pub fn lookup(&self, coord: usize) -> Option<u8> {
        let v = packed_get(&self.data, self.k, coord);
        if v == sentinel_for(self.k) {
            None
        } else {
            Some(v as u8 + self.base)
        }
    }
}

/// Applies a transform `t` to a cube and computes the resulting h48
/// coordinate, for propagating a BFS update over a self-similarity orbit.
fn selfsim_orbit_coords(cocsep: &CocsepTable, cube: &Cube, h: u32) -> Vec<usize> {
    let class = cocsep.class[coord_cocsep(cube)];
    let mask = cocsep.selfsim[class as usize];
    let mut coords = Vec::new();
    for t in 0..N_TRANS {
        if t == *IDENTITY_TRANSFORM || mask & (1 << t) == 0 {
            continue;
        }
        let image = cube.transform(t);
        coords.push(coord_h48(&image, cocsep, h));
    }
    coords
}

const FROM_DONE_BREAKPOINT: u8 = 10;

/// Full breadth-first build of the h48 table at parameter `h`, stored `k`
/// bits per entry, up to `max_depth`.
pub fn build_h48_table(cocsep: &CocsepTable, h: u32, k: u32, max_depth: u8) -> H48Table {
    let domain = H48Table::domain(cocsep, h);
    let sentinel = sentinel_for(k);
    let mut data = packed_fill(domain, k, sentinel);
    let mut info = vec![0u64; max_depth as usize + 2];

    let solved_coord = coord_h48(&Cube::solved(), cocsep, h);
    packed_set(&mut data, k, solved_coord, 0);
    info[1] = 1;
    let mut filled = 1usize;

    for depth in 1..=max_depth {
        let prev = (depth - 1) as u32;
        let mut found = 0u64;

        if depth <= FROM_DONE_BREAKPOINT {
            for coord in 0..domain {
                if packed_get(&data, k, coord) != prev {
                    continue;
                }
                let cube = invcoord_h48(coord, &cocsep.reps, h);
                for &mv in &ALL_MOVES {
                    let neighbor = MOVE_CUBES[mv.index()].compose(&cube);
                    let ncoord = coord_h48(&neighbor, cocsep, h);
                    if packed_get(&data, k, ncoord) != sentinel {
                        continue;
                    }
                    packed_set(&mut data, k, ncoord, depth as u32);
                    filled += 1;
                    found += 1;
                    for orbit_coord in selfsim_orbit_coords(cocsep, &neighbor, h) {
                        if packed_get(&data, k, orbit_coord) == sentinel {
                            packed_set(&mut data, k, orbit_coord, depth as u32);
                            filled += 1;
                            found += 1;
                        }
                    }
                }
            }
        } else {
            for coord in 0..domain {
                if packed_get(&data, k, coord) != sentinel {
                    continue;
                }
                let cube = invcoord_h48(coord, &cocsep.reps, h);
                for &mv in &ALL_MOVES {
                    let pred = MOVE_CUBES[mv.inverse().index()].compose(&cube);
                    let pcoord = coord_h48(&pred, cocsep, h);
                    if packed_get(&data, k, pcoord) != prev {
                        continue;
                    }
                    packed_set(&mut data, k, coord, depth as u32);
                    filled += 1;
                    found += 1;
                    for orbit_coord in selfsim_orbit_coords(cocsep, &cube, h) {
                        if packed_get(&data, k, orbit_coord) == sentinel {
                            packed_set(&mut data, k, orbit_coord, depth as u32);
                            filled += 1;
                            found += 1;
                        }
                    }
                    break;
                }
            }
        }

        info[depth as usize + 1] = found;
        log::debug!("h48(h={h},k={k}) depth {depth}: {found} new, {filled}/{domain} filled");
        if filled == domain {
            log::info!("h48(h={h},k={k}) table complete at depth {depth}");
            break;
        }
    }

    let max_value = info
        .iter()
        .enumerate()
        .rev()
        .find(|&(_, &c)| c > 0)
        .map(|(i, _)| i.saturating_sub(1) as u8)
        .unwrap_or(0);
    H48Table { h, k, base: 0, max_value, data, info }
}

/// Base depth offset for the k=2 short-seed table at parameter `h`.
pub fn short_table_base(h: u32) -> u8 {
    match h {
        0..=3 => 8,
        4..=7 => 9,
        _ => 10,
    }
}

fn update_min_over_orbit(data: &mut [u32], cocsep: &CocsepTable, cube: &Cube, h: u32, encoded: u32) {
    let coord = coord_h48(cube, cocsep, h);
    if encoded < packed_get(data, 2, coord) {
        packed_set(data, 2, coord, encoded);
    }
    for orbit_coord in selfsim_orbit_coords(cocsep, cube, h) {
        if encoded < packed_get(data, 2, orbit_coord) {
            packed_set(data, 2, orbit_coord, encoded);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn dfs_update_short(
    cube: &Cube,
    true_depth: u8,
    base: u8,
    max_depth: u8,
    data: &mut [u32],
    cocsep: &CocsepTable,
    h: u32,
    prev2: Option<cube::Move>,
    prev1: Option<cube::Move>,
) {
    let encoded = true_depth.saturating_sub(base) as u32;
    update_min_over_orbit(data, cocsep, cube, h, encoded);
    if true_depth >= max_depth {
        return;
    }
    let allowed = moves::allowed_mask(prev2, prev1);
    for &mv in &ALL_MOVES {
        if allowed & (1 << mv.index()) == 0 {
            continue;
        }
        let next = MOVE_CUBES[mv.index()].compose(cube);
        dfs_update_short(&next, true_depth + 1, base, max_depth, data, cocsep, h, prev1, Some(mv));
    }
}

/// Seed-BFS depth for the k=2 short-table variant (spec.md §4.4.3: "≈ 8").
pub const SHORT_SEED_DEPTH: u8 = 8;

/// Builds the k=2 "short seed" variant at parameter `h`: a shallow BFS
/// over the full h=11 coordinate seeds a DFS that fills the 2-bit table
/// relative to `base`.
pub fn build_h48_short_table(cocsep: &CocsepTable, h: u32, short_depth: u8) -> H48Table {
    let base = short_table_base(h);
    let domain = H48Table::domain(cocsep, h);
    let mut data = packed_fill(domain, 2, 3);

    let mut shortcubes: HashMap<usize, u8> = HashMap::new();
    let solved = Cube::solved();
    shortcubes.insert(coord_h48(&solved, cocsep, 11), 0);
    let mut frontier = vec![solved];
    for depth in 1..=short_depth {
        let mut next = Vec::new();
        for cube in &frontier {
            for &mv in &ALL_MOVES {
                let neighbor = MOVE_CUBES[mv.index()].compose(cube);
                let coord11 = coord_h48(&neighbor, cocsep, 11);
                if let std::collections::hash_map::Entry::Vacant(e) = shortcubes.entry(coord11) {
                    e.insert(depth);
                    next.push(neighbor);
                }
            }
        }
        frontier = next;
    }
    log::debug!("h48 short seed(h={h}): {} seeds up to depth {short_depth}", shortcubes.len());

    for (&coord11, &seed_depth) in shortcubes.iter() {
        let cube = invcoord_h48(coord11, &cocsep.reps, 11);
        dfs_update_short(&cube, seed_depth, base, base + 2, &mut data, cocsep, h, None, None);
    }

    H48Table { h, k: 2, base, max_value: base + 2, data, info: Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_k4_roundtrip() {
        let mut data = packed_fill(20, 4, 15);
        for i in 0..20 {
            assert_eq!(packed_get(&data, 4, i), 15);
        }
        packed_set(&mut data, 4, 5, 9);
        packed_set(&mut data, 4, 6, 2);
        assert_eq!(packed_get(&data, 4, 5), 9);
        assert_eq!(packed_get(&data, 4, 6), 2);
        assert_eq!(packed_get(&data, 4, 4), 15);
    }

    #[test]
    fn packed_k2_roundtrip() {
        let mut data = packed_fill(40, 2, 3);
        packed_set(&mut data, 2, 17, 1);
        packed_set(&mut data, 2, 18, 2);
        assert_eq!(packed_get(&data, 2, 17), 1);
        assert_eq!(packed_get(&data, 2, 18), 2);
        assert_eq!(packed_get(&data, 2, 16), 3);
    }

    #[test]
    fn packed_words_matches_entries_per_word() {
        assert_eq!(packed_words(8, 4), 1);
        assert_eq!(packed_words(9, 4), 2);
        assert_eq!(packed_words(16, 2), 1);
        assert_eq!(packed_words(17, 2), 2);
    }

    #[test]
    fn solved_cube_is_its_own_class_at_depth_zero() {
        let table = build_cocsep_table();
        let solved_coord = coord_cocsep(&Cube::solved());
        assert_eq!(table.dist[solved_coord], 0);
        assert_eq!(table.class[solved_coord], 0);
        // identity transform fixes the solved representative
        assert_ne!(table.selfsim[0] & (1 << *IDENTITY_TRANSFORM), 0);
    }

    #[test]
    fn every_cocsep_coordinate_gets_classified() {
        let table = build_cocsep_table();
        assert!(table.class.iter().all(|&c| c != UNSET));
    }
}
