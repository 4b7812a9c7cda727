//! # h48
//! `h48`: cube algebra, symmetry-reduced pruning tables (cocsep + h48) and
//! an IDA*/NISS optimal solver for the 3x3x3 Rubik's cube.
//!
//! The crate is organized the way the search itself is: a packed cube
//! representation and its move/transform tables ([`cube`], [`moves`]), the
//! coordinates and pruning tables built on top of it ([`coord`],
//! [`pruning`], [`table`]), and the solver that ties them together
//! ([`solver`]). [`format`] and [`persist`] round out the ambient I/O
//! surface a caller needs to get cubes and tables in and out of the crate.

#[macro_use]
extern crate lazy_static;

/// Cube algebra: the packed-byte representation, composition, inversion
/// and whole-cube symmetry transforms.
pub mod cube;

/// Move-string parsing and the legal-next-move predicate.
pub mod moves;

/// Symmetry-reduced coordinates (cocsep, esep, eo, h48).
pub mod coord;

/// Pruning-table construction: cocsep and h48.
pub mod pruning;

/// The table blob format and the `data_size`/`generate_data` entry points.
pub mod table;

/// Textual cube formats ("H48", "LST").
pub mod format;

/// Generic bincode/serde persistence helpers.
pub mod persist;

/// The IDA*/NISS solver.
pub mod solver;

/// Random scramble generation for tests and benchmarks.
pub mod scramble;

/// Error define.
pub mod error;

pub use cube::Cube;
pub use error::{Error, Result};
pub use moves::{format_move_sequence, parse_move_sequence};
pub use solver::Solution;

/// Composes two cubes: applies `b`, then `a`.
pub fn compose(a: &Cube, b: &Cube) -> Cube {
    a.compose(b)
}

/// The cube that undoes `cube`.
pub fn inverse(cube: &Cube) -> Cube {
    cube.inverse()
}

/// Applies a move sequence (e.g. `"R U R' U'"`) to `cube`.
pub fn apply_moves(cube: &Cube, moves_str: &str) -> Result<Cube> {
    let seq = moves::parse_move_sequence(moves_str)?;
    Ok(seq.iter().fold(*cube, |c, &m| cube::MOVE_CUBES[m.index()].compose(&c)))
}

/// Applies a named whole-cube transform (e.g. `"rotation UF"`, `"mirrored UF"`).
pub fn apply_transform(cube: &Cube, transform_name: &str) -> Result<Cube> {
    let t = cube::parse_transform(transform_name)?;
    Ok(cube.transform(t))
}

/// Builds the cube reached by applying `moves_str` to the solved cube.
pub fn from_moves(moves_str: &str) -> Result<Cube> {
    apply_moves(&Cube::solved(), moves_str)
}

/// Parses a cube out of `format_name` (`"H48"` or `"LST"`).
pub fn read_cube(format_name: &str, s: &str) -> Result<Cube> {
    format::read_cube(format_name, s)
}

/// Renders `cube` in `format_name` (`"H48"` or `"LST"`).
pub fn write_cube(format_name: &str, cube: &Cube) -> Result<String> {
    format::write_cube(format_name, cube)
}

/// Bytes `generate_data` needs to hold the pruning data for `solver_name`/`options`.
pub fn data_size(solver_name: &str, options: &str) -> Result<usize> {
    table::data_size(solver_name, options)
}

/// Builds the pruning data for `solver_name`/`options` into `out_buffer`.
/// Returns the number of bytes actually written.
pub fn generate_data(solver_name: &str, options: &str, out_buffer: &mut [u8]) -> Result<usize> {
    table::generate_data(solver_name, options, out_buffer)
}

/// Finds solutions for `cube` with `solver_name` (only `"h48"` is
/// implemented), searching depths `min_moves..=max_moves` with NISS,
/// stopping once `max_solutions` are found or (if `optimal_tolerance` is
/// given) once a depth exceeds the first solution's depth by more than the
/// tolerance.
#[allow(clippy::too_many_arguments)]
pub fn solve(
    cube: &Cube,
    solver_name: &str,
    options: &str,
    min_moves: u8,
    max_moves: u8,
    max_solutions: usize,
    optimal_tolerance: Option<u8>,
    table_blob: &[u8],
) -> Result<Vec<Solution>> {
    solver::solve(cube, solver_name, options, min_moves, max_moves, max_solutions, optimal_tolerance, table_blob)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_moves_then_apply_transform_roundtrips_through_compose() {
        let c = from_moves("R U R' U'").unwrap();
        let back = apply_moves(&c, "U R U' R'").unwrap();
        assert!(back.is_solved());
    }

    #[test]
    fn compose_and_inverse_agree_with_cube_methods() {
        let c = from_moves("R U2 F'").unwrap();
        assert_eq!(inverse(&c), c.inverse());
        assert_eq!(compose(&c, &c.inverse()), Cube::solved());
    }

    #[test]
    fn data_size_refuses_unknown_solver() {
        assert!(data_size("two-phase", "0;4;11").is_err());
    }
}
