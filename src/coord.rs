//! Symmetry-reduced coordinates: cocsep (corner orientation + separation),
//! esep (edge separation) and eo (edge orientation), and the composite h48
//! coordinate built from them.
//!
//! `esep` and its sub-coordinate are ranked with the standard combinatorial
//! number system (a Pascal's-triangle lookup plus the usual greedy
//! unranking), the same technique the teacher's coordinate layer uses for
//! its own slice coordinates.

use crate::cube::{corner_parity_sign, corner_ori, corner_perm, edge_ori, edge_perm, pack_edge, Cube, N_EDGES};

pub const ORI_RANGE: usize = 2187; // 3^7
pub const SEP_RANGE: usize = 128; // 2^7
pub const COCSEP_DOMAIN: usize = ORI_RANGE * SEP_RANGE; // 279_936

pub const ESEP_SLICE_RANGE: usize = 495; // C(12,4)
pub const ESEP_SUB_RANGE: usize = 70; // C(8,4)
pub const ESEP_DOMAIN: usize = ESEP_SLICE_RANGE * ESEP_SUB_RANGE; // 34_650

pub const EO_BITS: u32 = 11;
pub const EO_DOMAIN: usize = 1 << EO_BITS; // 2048

const MAX_N: usize = 13; // n in 0..=12
const MAX_K: usize = 9; // k in 0..=8

const BINOM: [[u64; MAX_K]; MAX_N] = {
    let mut t = [[0u64; MAX_K]; MAX_N];
    let mut n = 0;
    while n < MAX_N {
        t[n][0] = 1;
        let mut k = 1;
        while k < MAX_K {
            t[n][k] = if n == 0 || k > n { 0 } else { t[n - 1][k - 1] + t[n - 1][k] };
            k += 1;
        }
        n += 1;
    }
    t
};

fn binom(n: usize, k: usize) -> usize {
    if k == 0 {
        return 1;
    }
    if n < k {
        return 0;
    }
    BINOM[n][k] as usize
}

/// Combinatorial-number-system rank of an ascending list of chosen indices.
fn choose_rank(members: &[usize]) -> usize {
    members.iter().enumerate().map(|(i, &c)| binom(c, i + 1)).sum()
}

/// Inverse of [`choose_rank`]: the `k` ascending indices out of `0..n`
/// with the given rank.
fn unrank_combination(rank: usize, k: usize, n: usize) -> Vec<usize> {
    let mut result = vec![0usize; k];
    let mut r = rank;
    for i in (1..=k).rev() {
        let mut c = i - 1;
        while c + 1 < n && binom(c + 1, i) <= r {
            c += 1;
        }
        result[i - 1] = c;
        r -= binom(c, i);
    }
    result
}

fn true_indices(member: &[bool]) -> Vec<usize> {
    member.iter().enumerate().filter(|&(_, &b)| b).map(|(i, _)| i).collect()
}

fn false_indices(member: &[bool]) -> Vec<usize> {
    member.iter().enumerate().filter(|&(_, &b)| !b).map(|(i, _)| i).collect()
}

/// Corner orientation (7 ternary digits) combined with corner separation (7
/// bits: does the piece now at slot `i` belong to the same tetrad slot `i`
/// is home to?). Both halves are 0 for every corner at its own slot, so
/// `coord_cocsep(solved) == 0`.
pub fn coord_cocsep(cube: &Cube) -> usize {
    let mut ori = 0usize;
    for i in 0..7 {
        ori += corner_ori(cube.corners[i]) as usize * 3usize.pow(i as u32);
    }
    let mut sep = 0usize;
    for i in 0..7 {
        let piece = corner_perm(cube.corners[i]) as usize;
        if corner_parity_sign(piece) != corner_parity_sign(i) {
            sep |= 1 << i;
        }
    }
    debug_assert!(ori < ORI_RANGE && sep < SEP_RANGE);
    ori * SEP_RANGE + sep
}

/// Which slots hold the 4 middle-slice (E) edges, and which of the
/// remaining 8 slots hold a U-layer edge. Ranked so the solved cube gives 0.
pub fn coord_esep(cube: &Cube) -> usize {
    let is_e_piece: Vec<bool> = (0..N_EDGES).map(|i| edge_perm(cube.edges[i]) as usize >= 8).collect();
    // Rank the 8 *non*-E slots (ascending) rather than the 4 E slots: for
    // the solved cube those are exactly slots 0..8, the minimal set, which
    // ranks to 0 under the standard combinatorial number system.
    let slice_rank = choose_rank(&false_indices(&is_e_piece));

    let remaining: Vec<usize> = false_indices(&is_e_piece);
    let is_u_piece: Vec<bool> = remaining.iter().map(|&slot| (edge_perm(cube.edges[slot]) as usize) < 4).collect();
    let sub_rank = choose_rank(&true_indices(&is_u_piece));
    slice_rank * ESEP_SUB_RANGE + sub_rank
}

pub fn coord_eo(cube: &Cube) -> usize {
    let mut v = 0usize;
    for i in 1..N_EDGES {
        v |= (edge_ori(cube.edges[i]) as usize) << (i - 1);
    }
    v
}

/// Classifies a cocsep coordinate into its symmetry class and the transform
/// taking that class member to its canonical representative. Implemented
/// by the pruning-table builder, which owns the actual cocsep table.
pub trait CocsepLookup {
    fn classify(&self, cocsep: usize) -> (u16, u8);
}

/// Assembles the composite h48 coordinate for parameter `h`, per the
/// cocsep class lookup, the esep of the class-transformed cube, and the
/// top `h` bits of its eo.
pub fn coord_h48(cube: &Cube, lookup: &impl CocsepLookup, h: u32) -> usize {
    debug_assert!(h <= EO_BITS);
    let (coclass, ttrep) = lookup.classify(coord_cocsep(cube));
    let transformed = cube.transform(ttrep as usize);
    let esep = coord_esep(&transformed);
    let eo = coord_eo(&transformed);
    let scale = 1usize << h;
    (coclass as usize) * ESEP_DOMAIN * scale + esep * scale + (eo >> (EO_BITS - h))
}

/// Inverts a composite h48 coordinate to *some* cube sharing that
/// coordinate: the edge permutation is a canonical skeleton consistent
/// with `esep`, corners come from the class representative, and only the
/// top `h` eo bits recovered from the coordinate are set (the rest are 0).
pub fn invcoord_h48(value: usize, reps: &[Cube], h: u32) -> Cube {
    debug_assert!(h <= EO_BITS);
    let scale = 1usize << h;
    let block = ESEP_DOMAIN * scale;
    let coclass = value / block;
    let rem = value % block;
    let esep = rem / scale;
    let eo_top = rem % scale;

    let slice_rank = esep / ESEP_SUB_RANGE;
    let sub_rank = esep % ESEP_SUB_RANGE;

    let non_e_slots = unrank_combination(slice_rank, 8, N_EDGES);
    let mut is_e_slot = [true; N_EDGES];
    for &s in &non_e_slots {
        is_e_slot[s] = false;
    }
    let u_local = unrank_combination(sub_rank, 4, 8);
    let mut is_u_local = [false; 8];
    for &s in &u_local {
        is_u_local[s] = true;
    }

    let mut edges = [0u8; N_EDGES];
    let mut e_piece = 8u8;
    let mut u_piece = 0u8;
    let mut d_piece = 4u8;
    let mut local = 0usize;
    for slot in 0..N_EDGES {
        if is_e_slot[slot] {
            edges[slot] = pack_edge(e_piece, 0);
            e_piece += 1;
        } else {
            if is_u_local[local] {
                edges[slot] = pack_edge(u_piece, 0);
                u_piece += 1;
            } else {
                edges[slot] = pack_edge(d_piece, 0);
                d_piece += 1;
            }
            local += 1;
        }
    }

    let eo_full = eo_top << (EO_BITS as usize - h as usize);
    let mut parity = 0u8;
    for i in 1..N_EDGES {
        let bit = ((eo_full >> (i - 1)) & 1) as u8;
        let p = edge_perm(edges[i]);
        edges[i] = pack_edge(p, bit);
        parity ^= bit;
    }
    let p0 = edge_perm(edges[0]);
    edges[0] = pack_edge(p0, parity);

    Cube { corners: reps[coclass].corners, edges }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_coordinates_are_zero() {
        let solved = Cube::solved();
        assert_eq!(coord_cocsep(&solved), 0);
        assert_eq!(coord_esep(&solved), 0);
        assert_eq!(coord_eo(&solved), 0);
    }

    #[test]
    fn choose_rank_roundtrips() {
        for k in 1..=4 {
            for n in k..=12 {
                let max = binom(n, k);
                // a hand-picked sample, not exhaustive: first, last, and mid
                for &rank in &[0usize, max.saturating_sub(1), max / 2] {
                    let members = unrank_combination(rank, k, n);
                    assert_eq!(choose_rank(&members), rank, "k={k} n={n} rank={rank}");
                }
            }
        }
    }

    #[test]
    fn esep_domain_bound() {
        assert_eq!(ESEP_DOMAIN, 34_650);
        assert_eq!(COCSEP_DOMAIN, 279_936);
        assert_eq!(EO_DOMAIN, 2048);
    }
}
