//! Cube algebra: the packed-byte cube representation, composition,
//! inversion, whole-cube symmetry transforms, and the static move/transform
//! tables they're built from.
//!
//! A corner byte packs a permutation index (bits 0-2, range 0..8) and an
//! orientation (bits 3-4, range 0..3). An edge byte packs a permutation
//! index (bits 0-3, range 0..12) and an orientation (bit 4, range 0..2).
//! Composition is then one table lookup plus a modular add, as required.
//!
//! The 18 face-turn cubes and 48 transform cubes are not hand-transcribed:
//! they're generated once, at first use, from a small geometric model
//! (every piece slot has a coordinate in `{-1,0,1}^3`; a move or transform
//! is a signed permutation matrix acting on those coordinates). This keeps
//! the two tables provably consistent with each other.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const N_CORNERS: usize = 8;
pub const N_EDGES: usize = 12;
pub const N_MOVES: usize = 18;
pub const N_TRANS: usize = 48;

const CORNER_PERM_MASK: u8 = 0x07;
const CORNER_ORI_SHIFT: u8 = 3;
const EDGE_PERM_MASK: u8 = 0x0F;
const EDGE_ORI_SHIFT: u8 = 4;

#[inline]
pub fn pack_corner(perm: u8, ori: u8) -> u8 {
    perm | (ori << CORNER_ORI_SHIFT)
}

#[inline]
pub fn corner_perm(b: u8) -> u8 {
    b & CORNER_PERM_MASK
}

#[inline]
pub fn corner_ori(b: u8) -> u8 {
    b >> CORNER_ORI_SHIFT
}

#[inline]
pub fn pack_edge(perm: u8, ori: u8) -> u8 {
    perm | (ori << EDGE_ORI_SHIFT)
}

#[inline]
pub fn edge_perm(b: u8) -> u8 {
    b & EDGE_PERM_MASK
}

#[inline]
pub fn edge_ori(b: u8) -> u8 {
    b >> EDGE_ORI_SHIFT
}

/// A cube state: 8 corner slots and 12 edge slots, each a packed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cube {
    pub corners: [u8; N_CORNERS],
    pub edges: [u8; N_EDGES],
}

impl Cube {
    pub const fn solved() -> Self {
        Cube {
            corners: [0, 1, 2, 3, 4, 5, 6, 7],
            edges: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        }
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// Valid piece indices and orientation bits, but not necessarily a
    /// reachable (parity-consistent) cube.
    pub fn is_consistent(&self) -> bool {
        let mut seen = [false; N_CORNERS];
        for &b in &self.corners {
            let p = corner_perm(b) as usize;
            if p >= N_CORNERS || corner_ori(b) >= 3 || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        let mut seen = [false; N_EDGES];
        for &b in &self.edges {
            let p = edge_perm(b) as usize;
            if p >= N_EDGES || edge_ori(b) >= 2 || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        true
    }

    fn corner_parity(&self) -> bool {
        permutation_parity(&self.corners.map(corner_perm))
    }

    fn edge_parity(&self) -> bool {
        permutation_parity(&self.edges.map(edge_perm))
    }

    /// Consistent, and the parity/orientation-sum invariants of a reachable
    /// cube hold.
    pub fn is_solvable(&self) -> bool {
        if !self.is_consistent() {
            return false;
        }
        let co_sum: u32 = self.corners.iter().map(|&b| corner_ori(b) as u32).sum();
        let eo_sum: u32 = self.edges.iter().map(|&b| edge_ori(b) as u32).sum();
        co_sum % 3 == 0 && eo_sum % 2 == 0 && self.corner_parity() == self.edge_parity()
    }

    /// `compose(a, b)`: first apply `b`, then `a`.
    pub fn compose(&self, b: &Cube) -> Cube {
        let mut corners = [0u8; N_CORNERS];
        for i in 0..N_CORNERS {
            let bp = corner_perm(b.corners[i]) as usize;
            let p = corner_perm(self.corners[bp]);
            let o = (corner_ori(self.corners[bp]) + corner_ori(b.corners[i])) % 3;
            corners[i] = pack_corner(p, o);
        }
        let mut edges = [0u8; N_EDGES];
        for i in 0..N_EDGES {
            let bp = edge_perm(b.edges[i]) as usize;
            let p = edge_perm(self.edges[bp]);
            let o = (edge_ori(self.edges[bp]) + edge_ori(b.edges[i])) % 2;
            edges[i] = pack_edge(p, o);
        }
        Cube { corners, edges }
    }

    pub fn inverse(&self) -> Cube {
        let mut corners = [0u8; N_CORNERS];
        for i in 0..N_CORNERS {
            let p = corner_perm(self.corners[i]) as usize;
            let o = corner_ori(self.corners[i]);
            corners[p] = pack_corner(i as u8, (3 - o) % 3);
        }
        let mut edges = [0u8; N_EDGES];
        for i in 0..N_EDGES {
            let p = edge_perm(self.edges[i]) as usize;
            let o = edge_ori(self.edges[i]);
            edges[p] = pack_edge(i as u8, o);
        }
        Cube { corners, edges }
    }

    /// Conjugate by transform `t`: `compose(t, compose(self, inverse(t)))`,
    /// with the chirality fix-up for mirrored transforms.
    pub fn transform(&self, t: usize) -> Cube {
        let tc = &TRANS_CUBES[t];
        let ti = &TRANS_CUBES[TRANS_INV[t]];
        let mut result = tc.compose(&self.compose(ti));
        if t >= N_TRANS / 2 {
            for b in result.corners.iter_mut() {
                let p = corner_perm(*b);
                let o = corner_ori(*b);
                *b = pack_corner(p, (3 - o) % 3);
            }
        }
        result
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

fn permutation_parity(perm: &[u8]) -> bool {
    let mut seen = vec![false; perm.len()];
    let mut swaps = 0usize;
    for start in 0..perm.len() {
        if seen[start] {
            continue;
        }
        let mut len = 0usize;
        let mut j = start;
        while !seen[j] {
            seen[j] = true;
            j = perm[j] as usize;
            len += 1;
        }
        if len > 0 {
            swaps += len - 1;
        }
    }
    swaps % 2 == 0
}

// ---------------------------------------------------------------------
// Geometry: piece coordinates, slot names, and the signed-permutation
// matrices that generate moves and transforms.
// ---------------------------------------------------------------------

type Vec3 = [i8; 3];
/// Row-major 3x3 signed permutation/reflection matrix.
type Mat3 = [[i8; 3]; 3];

const AXIS_X: usize = 0;
const AXIS_Y: usize = 1;
const AXIS_Z: usize = 2;

const IDENTITY: Mat3 = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

fn mat_apply(m: &Mat3, v: Vec3) -> Vec3 {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

fn mat_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut r = [[0i8; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            r[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    r
}

fn mat_transpose(m: &Mat3) -> Mat3 {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// +90 degree rotation about the given axis (right-hand rule).
fn rot90(axis: usize) -> Mat3 {
    match axis {
        AXIS_X => [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
        AXIS_Y => [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
        AXIS_Z => [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
        _ => unreachable!(),
    }
}

fn rot_k(axis: usize, k: u32) -> Mat3 {
    let mut m = IDENTITY;
    let g = rot90(axis);
    for _ in 0..k {
        m = mat_mul(&g, &m);
    }
    m
}

/// Mirror across the plane containing U and F: negate the L/R axis.
const MIRROR_LR: Mat3 = [[-1, 0, 0], [0, 1, 0], [0, 0, 1]];

fn axis_of(v: Vec3) -> (usize, i8) {
    for axis in 0..3 {
        if v[axis] != 0 {
            return (axis, v[axis]);
        }
    }
    unreachable!("zero vector has no axis")
}

fn ud_letter(s: i8) -> char {
    if s > 0 {
        'U'
    } else {
        'D'
    }
}
fn fb_letter(s: i8) -> char {
    if s > 0 {
        'F'
    } else {
        'B'
    }
}
fn lr_letter(s: i8) -> char {
    if s > 0 {
        'R'
    } else {
        'L'
    }
}

/// Corner slot positions, in the U/D, F/B, L/R axis-priority order used for
/// naming: UFR, UFL, UBR, UBL, DFR, DFL, DBR, DBL.
pub const CORNER_POS: [Vec3; N_CORNERS] = {
    let mut out = [[0i8; 3]; N_CORNERS];
    let mut idx = 0;
    let mut sy = 1i8;
    while sy >= -1 {
        let mut sz = 1i8;
        while sz >= -1 {
            let mut sx = 1i8;
            while sx >= -1 {
                out[idx] = [sx, sy, sz];
                idx += 1;
                sx -= 2;
            }
            sz -= 2;
        }
        sy -= 2;
    }
    out
};

/// Edge slot positions: UR,UF,UL,UB,DR,DF,DL,DB,FR,FL,BR,BL.
pub const EDGE_POS: [Vec3; N_EDGES] = [
    [1, 1, 0],
    [0, 1, 1],
    [-1, 1, 0],
    [0, 1, -1],
    [1, -1, 0],
    [0, -1, 1],
    [-1, -1, 0],
    [0, -1, -1],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
];

pub fn corner_name(i: usize) -> String {
    let [sx, sy, sz] = CORNER_POS[i];
    format!("{}{}{}", ud_letter(sy), fb_letter(sz), lr_letter(sx))
}

pub fn edge_name(i: usize) -> String {
    let [sx, sy, sz] = EDGE_POS[i];
    if sy != 0 {
        let second = if sz != 0 { fb_letter(sz) } else { lr_letter(sx) };
        format!("{}{}", ud_letter(sy), second)
    } else {
        format!("{}{}", fb_letter(sz), lr_letter(sx))
    }
}

fn find_corner(p: Vec3) -> usize {
    CORNER_POS.iter().position(|&q| q == p).expect("valid corner position")
}

fn find_edge(p: Vec3) -> usize {
    EDGE_POS.iter().position(|&q| q == p).expect("valid edge position")
}

/// Parity of a corner's octant: +1 ("even") or -1 ("odd"). Matches the
/// cocsep coordinate's even-tetrad bit.
pub fn corner_parity_sign(i: usize) -> i8 {
    let [sx, sy, sz] = CORNER_POS[i];
    sx * sy * sz
}

fn cyclic_order(parity: i8) -> [usize; 3] {
    if parity > 0 {
        [AXIS_Y, AXIS_Z, AXIS_X]
    } else {
        [AXIS_Y, AXIS_X, AXIS_Z]
    }
}

/// Build the cube obtained by applying matrix `m` to every piece whose
/// position satisfies `mask`, leaving the rest fixed. This is the single
/// engine behind both face turns (mask = "on this face") and whole-cube
/// transforms (mask = always true).
fn cube_from_matrix(m: &Mat3, mask: impl Fn(Vec3) -> bool) -> Cube {
    let mt = mat_transpose(m);
    let mut corners = [0u8; N_CORNERS];
    for i in 0..N_CORNERS {
        let pos = CORNER_POS[i];
        if !mask(pos) {
            corners[i] = pack_corner(i as u8, 0);
            continue;
        }
        let src_pos = mat_apply(&mt, pos);
        let j = find_corner(src_pos);
        let primary = {
            let mut v = [0i8; 3];
            v[AXIS_Y] = CORNER_POS[j][AXIS_Y];
            v
        };
        let new_primary = mat_apply(m, primary);
        let (axis, _sign) = axis_of(new_primary);
        let order = cyclic_order(corner_parity_sign(i));
        let o = order.iter().position(|&a| a == axis).expect("axis present") as u8;
        corners[i] = pack_corner(j as u8, o);
    }
    let mut edges = [0u8; N_EDGES];
    for i in 0..N_EDGES {
        let pos = EDGE_POS[i];
        if !mask(pos) {
            edges[i] = pack_edge(i as u8, 0);
            continue;
        }
        let src_pos = mat_apply(&mt, pos);
        let j = find_edge(src_pos);
        let src = EDGE_POS[j];
        let primary = if src[AXIS_Y] != 0 {
            let mut v = [0i8; 3];
            v[AXIS_Y] = src[AXIS_Y];
            v
        } else {
            let mut v = [0i8; 3];
            v[AXIS_Z] = src[AXIS_Z];
            v
        };
        let new_primary = mat_apply(m, primary);
        let (axis, _sign) = axis_of(new_primary);
        let want_primary_axis = if pos[AXIS_Y] != 0 { AXIS_Y } else { AXIS_Z };
        let o = if axis == want_primary_axis { 0 } else { 1 };
        edges[i] = pack_edge(j as u8, o);
    }
    Cube { corners, edges }
}

// ---------------------------------------------------------------------
// Moves
// ---------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    U, U2, U3,
    D, D2, D3,
    R, R2, R3,
    L, L2, L3,
    F, F2, F3,
    B, B2, B3,
}

pub const ALL_MOVES: [Move; N_MOVES] = [
    Move::U, Move::U2, Move::U3,
    Move::D, Move::D2, Move::D3,
    Move::R, Move::R2, Move::R3,
    Move::L, Move::L2, Move::L3,
    Move::F, Move::F2, Move::F3,
    Move::B, Move::B2, Move::B3,
];

impl Move {
    pub fn index(self) -> usize {
        self as usize
    }

    /// The face this move turns: 0=U,1=D,2=R,3=L,4=F,5=B.
    pub fn face(self) -> usize {
        self.index() / 3
    }

    pub fn axis(self) -> usize {
        match self.face() {
            0 | 1 => AXIS_Y,
            2 | 3 => AXIS_X,
            _ => AXIS_Z,
        }
    }

    /// +1 or -1 per the face's home direction sign.
    pub fn sign(self) -> i8 {
        match self.face() {
            0 | 2 | 4 => 1,
            _ => -1,
        }
    }

    pub fn quarter_turns(self) -> u32 {
        (self.index() % 3) as u32 + 1
    }

    /// The move that undoes this one (U <-> U3, U2 is its own inverse).
    pub fn inverse(self) -> Move {
        let off = self.index() % 3;
        ALL_MOVES[self.face() * 3 + (2 - off)]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self.face() {
            0 => 'U',
            1 => 'D',
            2 => 'R',
            3 => 'L',
            4 => 'F',
            _ => 'B',
        };
        match self.index() % 3 {
            0 => write!(f, "{letter}"),
            1 => write!(f, "{letter}2"),
            _ => write!(f, "{letter}'"),
        }
    }
}

impl std::str::FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let face_char = chars
            .next()
            .ok_or_else(|| Error::InvalidMoveString(s.to_string()))?;
        let face = match face_char {
            'U' => 0,
            'D' => 1,
            'R' => 2,
            'L' => 3,
            'F' => 4,
            'B' => 5,
            _ => return Err(Error::InvalidMoveString(s.to_string())),
        };
        let suffix = chars.as_str();
        let offset = match suffix {
            "" | "1" => 0,
            "2" => 1,
            "'" | "3" => 2,
            _ => return Err(Error::InvalidMoveString(s.to_string())),
        };
        Ok(ALL_MOVES[face * 3 + offset])
    }
}

fn build_move_cube(mv: Move) -> Cube {
    let axis = mv.axis();
    let sign = mv.sign();
    let k = mv.quarter_turns();
    let g = if sign > 0 { rot_k(axis, k) } else { rot_k(axis, (4 - k) % 4) };
    cube_from_matrix(&g, |p| p[axis] == sign)
}

// ---------------------------------------------------------------------
// Transforms: 24 rotations ("rotation XY") + 24 mirrors ("mirrored XY").
// ---------------------------------------------------------------------

const FACE_LETTERS: [char; 6] = ['U', 'D', 'R', 'L', 'F', 'B'];

fn face_dir(letter: char) -> Vec3 {
    match letter {
        'U' => [0, 1, 0],
        'D' => [0, -1, 0],
        'R' => [1, 0, 0],
        'L' => [-1, 0, 0],
        'F' => [0, 0, 1],
        'B' => [0, 0, -1],
        _ => unreachable!(),
    }
}

fn opposite(letter: char) -> char {
    match letter {
        'U' => 'D',
        'D' => 'U',
        'R' => 'L',
        'L' => 'R',
        'F' => 'B',
        'B' => 'F',
        _ => unreachable!(),
    }
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn rotation_matrix(u: char, fc: char) -> Mat3 {
    let du = face_dir(u);
    let df = face_dir(fc);
    let dr = cross(du, df);
    [
        [dr[0], du[0], df[0]],
        [dr[1], du[1], df[1]],
        [dr[2], du[2], df[2]],
    ]
}

/// The 24 `(U image, F image)` pairs, in a fixed, arbitrary but stable
/// order. Index `i` for `i in 0..24` is a rotation; `i + 24` is that same
/// pair composed with the L/R mirror.
fn trans_face_pairs() -> Vec<(char, char)> {
    let mut pairs = Vec::with_capacity(24);
    for &u in &FACE_LETTERS {
        for &fc in &FACE_LETTERS {
            if fc != u && fc != opposite(u) {
                pairs.push((u, fc));
            }
        }
    }
    pairs
}

struct TransformTables {
    cubes: [Cube; N_TRANS],
    inverse: [usize; N_TRANS],
    names: [String; N_TRANS],
    by_name: HashMap<String, usize>,
}

fn build_transform_tables() -> TransformTables {
    let pairs = trans_face_pairs();
    debug_assert_eq!(pairs.len(), 24);

    let mut matrices: Vec<Mat3> = Vec::with_capacity(N_TRANS);
    let mut names: Vec<String> = Vec::with_capacity(N_TRANS);
    for &(u, fc) in &pairs {
        matrices.push(rotation_matrix(u, fc));
        names.push(format!("rotation {u}{fc}"));
    }
    for &(u, fc) in &pairs {
        matrices.push(mat_mul(&rotation_matrix(u, fc), &MIRROR_LR));
        names.push(format!("mirrored {u}{fc}"));
    }

    let cubes: Vec<Cube> = matrices.iter().map(|m| cube_from_matrix(m, |_| true)).collect();

    let mut inverse = [0usize; N_TRANS];
    for i in 0..N_TRANS {
        let target = mat_transpose(&matrices[i]);
        inverse[i] = matrices
            .iter()
            .position(|m| *m == target)
            .expect("transform group closed under inverse");
    }

    let mut by_name = HashMap::with_capacity(N_TRANS);
    for (i, name) in names.iter().enumerate() {
        by_name.insert(name.clone(), i);
    }

    let cubes: [Cube; N_TRANS] = cubes.try_into().unwrap();
    let names: [String; N_TRANS] = names.try_into().unwrap();

    TransformTables { cubes, inverse, names, by_name }
}

lazy_static! {
    pub static ref MOVE_CUBES: [Cube; N_MOVES] = {
        let mut out = [Cube::solved(); N_MOVES];
        for (i, &mv) in ALL_MOVES.iter().enumerate() {
            out[i] = build_move_cube(mv);
        }
        out
    };
    static ref TRANSFORM_TABLES: TransformTables = build_transform_tables();
    pub static ref TRANS_CUBES: [Cube; N_TRANS] = TRANSFORM_TABLES.cubes;
    pub static ref TRANS_INV: [usize; N_TRANS] = TRANSFORM_TABLES.inverse;
}

pub fn transform_name(t: usize) -> &'static str {
    &TRANSFORM_TABLES.names[t]
}

pub fn parse_transform(s: &str) -> Result<usize> {
    TRANSFORM_TABLES
        .by_name
        .get(s)
        .copied()
        .ok_or_else(|| Error::InvalidTransformString(s.to_string()))
}

pub fn is_mirror(t: usize) -> bool {
    t >= N_TRANS / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_compose_is_noop() {
        let id = Cube::solved();
        let scrambled = MOVE_CUBES[Move::R.index()];
        assert_eq!(id.compose(&scrambled), scrambled);
        assert_eq!(scrambled.compose(&id), scrambled);
    }

    #[test]
    fn inverse_is_involution() {
        for &mv in &ALL_MOVES {
            let c = MOVE_CUBES[mv.index()];
            assert_eq!(c.inverse().inverse(), c);
            assert!(c.compose(&c.inverse()).is_solved());
            assert!(c.inverse().compose(&c).is_solved());
        }
    }

    #[test]
    fn quarter_turn_four_times_is_identity() {
        for face in 0..6 {
            let q = MOVE_CUBES[face * 3];
            let mut acc = Cube::solved();
            for _ in 0..4 {
                acc = q.compose(&acc);
            }
            assert!(acc.is_solved(), "face {face} turn^4 != identity");
        }
    }

    #[test]
    fn half_turn_is_quarter_twice() {
        for face in 0..6 {
            let q = MOVE_CUBES[face * 3];
            let h = MOVE_CUBES[face * 3 + 1];
            assert_eq!(q.compose(&q), h);
        }
    }

    #[test]
    fn counter_quarter_is_quarter_cubed() {
        for face in 0..6 {
            let q = MOVE_CUBES[face * 3];
            let ccw = MOVE_CUBES[face * 3 + 2];
            assert_eq!(q.compose(&q).compose(&q), ccw);
        }
    }

    #[test]
    fn all_moves_are_solvable_cubes() {
        for &mv in &ALL_MOVES {
            assert!(MOVE_CUBES[mv.index()].is_solvable());
        }
    }

    #[test]
    fn transform_identity_is_identity() {
        let idx = parse_transform("rotation UF").unwrap();
        assert_eq!(TRANS_CUBES[idx], Cube::solved());
    }

    #[test]
    fn transform_roundtrip() {
        let scrambled = MOVE_CUBES[Move::R.index()].compose(&MOVE_CUBES[Move::U.index()]);
        for t in 0..N_TRANS {
            let forward = scrambled.transform(t);
            let back = forward.transform(TRANS_INV[t]);
            assert_eq!(back, scrambled, "transform {} round-trip failed", transform_name(t));
        }
    }

    #[test]
    fn all_transform_names_parse() {
        for t in 0..N_TRANS {
            let name = transform_name(t);
            assert_eq!(parse_transform(name).unwrap(), t);
        }
    }

    #[test]
    fn all_transforms_are_solvable_cubes() {
        for t in 0..N_TRANS {
            assert!(TRANS_CUBES[t].is_consistent());
        }
    }

    #[test]
    fn move_inverse_undoes_move() {
        for &mv in &ALL_MOVES {
            let c = MOVE_CUBES[mv.index()];
            let ci = MOVE_CUBES[mv.inverse().index()];
            assert!(c.compose(&ci).is_solved());
        }
    }

    #[test]
    fn corner_and_edge_names_are_distinct() {
        let mut names: Vec<String> = (0..N_CORNERS).map(corner_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), N_CORNERS);

        let mut names: Vec<String> = (0..N_EDGES).map(edge_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), N_EDGES);
    }
}
