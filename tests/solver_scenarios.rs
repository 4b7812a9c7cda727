//! End-to-end solver scenarios, gated behind `#[ignore]` since each builds
//! a real h48 table before searching.

use h48::cube::Cube;
use h48::{apply_moves, data_size, from_moves, generate_data, inverse, read_cube, solve, write_cube};

fn table_for(options: &str) -> Vec<u8> {
    let size = data_size("h48", options).unwrap();
    let mut buf = vec![0u8; size];
    let written = generate_data("h48", options, &mut buf).unwrap();
    buf.truncate(written);
    buf
}

#[test]
#[ignore]
fn sexy_move_scramble_solves_to_the_known_four_move_answer() {
    let cube = from_moves("R U R' U'").unwrap();
    let table = table_for("0;4;20");
    let sols = solve(&cube, "h48", "0;4;20", 0, 8, 1, Some(0), &table).unwrap();
    assert_eq!(sols.len(), 1);
    assert_eq!(h48::format_move_sequence(&sols[0].moves), "U R U' R'");
}

#[test]
#[ignore]
fn t_perm_like_scramble_solves_within_twelve_moves() {
    let cube = from_moves("R D' R2 D R U2 R' D' R U2 R D R'").unwrap();
    let table = table_for("0;4;20");
    let sols = solve(&cube, "h48", "0;4;20", 0, 20, 1, None, &table).unwrap();
    assert_eq!(sols.len(), 1);
    assert!(sols[0].moves.len() <= 12);
}

#[test]
#[ignore]
fn alternating_face_scramble_solves_within_twelve_moves() {
    let cube = from_moves("R L U D R L U D R L U D").unwrap();
    let table = table_for("0;4;20");
    let sols = solve(&cube, "h48", "0;4;20", 0, 20, 1, None, &table).unwrap();
    assert_eq!(sols.len(), 1);
    assert!(sols[0].moves.len() <= 12);
}

#[test]
fn eighteen_moves_of_opposite_pairs_is_the_identity() {
    let cube = apply_moves(&Cube::solved(), "U D' R L' F B' U D' R L' F B' U D' R L' F B'").unwrap();
    assert!(cube.is_solved());
}

#[test]
fn h48_text_format_roundtrips_on_a_scramble() {
    let cube = from_moves("R U2 D' B L3").unwrap();
    let s = write_cube("H48", &cube).unwrap();
    assert_eq!(read_cube("H48", &s).unwrap(), cube);
}

#[test]
fn inverse_of_a_scramble_equals_the_reverse_inverted_sequence() {
    let seq = h48::parse_move_sequence("R U2 F' D L B2").unwrap();
    let forward = apply_moves(&Cube::solved(), "R U2 F' D L B2").unwrap();

    let reversed_inverted: Vec<_> = seq.iter().rev().map(|m| m.inverse()).collect();
    let reversed_str = h48::format_move_sequence(&reversed_inverted);
    let via_reverse = apply_moves(&Cube::solved(), &reversed_str).unwrap();

    assert_eq!(inverse(&forward), via_reverse);
}
