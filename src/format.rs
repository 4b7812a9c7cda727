//! Textual cube formats: `"H48"` (named slots + orientation digits) and
//! `"LST"` (the 20 raw packed bytes as decimal integers).

use crate::cube::{corner_name, edge_name, pack_corner, pack_edge, Cube, N_CORNERS, N_EDGES};
use crate::error::{Error, Result};

const H48: &str = "H48";
const LST: &str = "LST";

fn corner_index_by_name(name: &str) -> Option<usize> {
    (0..N_CORNERS).find(|&i| corner_name(i) == name)
}

fn edge_index_by_name(name: &str) -> Option<usize> {
    (0..N_EDGES).find(|&i| edge_name(i) == name)
}

fn fmt_err(format: &str, detail: impl Into<String>) -> Error {
    Error::InvalidCubeFormat { format: format.to_string(), detail: detail.into() }
}

fn read_h48(s: &str) -> Result<Cube> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() != N_EDGES + N_CORNERS {
        return Err(fmt_err(H48, format!("expected {} tokens, got {}", N_EDGES + N_CORNERS, tokens.len())));
    }
    let mut edges = [0u8; N_EDGES];
    for (slot, tok) in tokens[..N_EDGES].iter().enumerate() {
        if tok.len() != 3 {
            return Err(fmt_err(H48, format!("bad edge token {tok:?}")));
        }
        let (name, ori) = tok.split_at(2);
        let piece = edge_index_by_name(name).ok_or_else(|| fmt_err(H48, format!("unknown edge name {name:?}")))?;
        let ori: u8 = ori.parse().map_err(|_| fmt_err(H48, format!("bad edge orientation in {tok:?}")))?;
        if ori >= 2 {
            return Err(fmt_err(H48, format!("edge orientation out of range in {tok:?}")));
        }
        edges[slot] = pack_edge(piece as u8, ori);
    }
    let mut corners = [0u8; N_CORNERS];
    for (slot, tok) in tokens[N_EDGES..].iter().enumerate() {
        if tok.len() != 4 {
            return Err(fmt_err(H48, format!("bad corner token {tok:?}")));
        }
        let (name, ori) = tok.split_at(3);
        let piece = corner_index_by_name(name).ok_or_else(|| fmt_err(H48, format!("unknown corner name {name:?}")))?;
        let ori: u8 = ori.parse().map_err(|_| fmt_err(H48, format!("bad corner orientation in {tok:?}")))?;
        if ori >= 3 {
            return Err(fmt_err(H48, format!("corner orientation out of range in {tok:?}")));
        }
        corners[slot] = pack_corner(piece as u8, ori);
    }
    Ok(Cube { corners, edges })
}

fn write_h48(cube: &Cube) -> String {
    use crate::cube::{corner_ori, corner_perm, edge_ori, edge_perm};
    let mut tokens = Vec::with_capacity(N_EDGES + N_CORNERS);
    for &b in &cube.edges {
        tokens.push(format!("{}{}", edge_name(edge_perm(b) as usize), edge_ori(b)));
    }
    for &b in &cube.corners {
        tokens.push(format!("{}{}", corner_name(corner_perm(b) as usize), corner_ori(b)));
    }
    tokens.join(" ")
}

fn read_lst(s: &str) -> Result<Cube> {
    let values: Vec<u8> = s
        .split(',')
        .map(|tok| tok.trim().parse::<u8>().map_err(|_| fmt_err(LST, format!("not a byte: {tok:?}"))))
        .collect::<Result<_>>()?;
    if values.len() != N_CORNERS + N_EDGES {
        return Err(fmt_err(LST, format!("expected {} integers, got {}", N_CORNERS + N_EDGES, values.len())));
    }
    let mut corners = [0u8; N_CORNERS];
    corners.copy_from_slice(&values[..N_CORNERS]);
    let mut edges = [0u8; N_EDGES];
    edges.copy_from_slice(&values[N_CORNERS..]);
    Ok(Cube { corners, edges })
}

fn write_lst(cube: &Cube) -> String {
    cube.corners.iter().chain(cube.edges.iter()).map(u8::to_string).collect::<Vec<_>>().join(", ")
}

pub fn read_cube(format_name: &str, s: &str) -> Result<Cube> {
    match format_name {
        H48 => read_h48(s),
        LST => read_lst(s),
        other => Err(fmt_err(other, "unknown cube format")),
    }
}

pub fn write_cube(format_name: &str, cube: &Cube) -> Result<String> {
    match format_name {
        H48 => Ok(write_h48(cube)),
        LST => Ok(write_lst(cube)),
        other => Err(fmt_err(other, "unknown cube format")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h48_roundtrip_solved() {
        let solved = Cube::solved();
        let s = write_cube(H48, &solved).unwrap();
        assert_eq!(read_cube(H48, &s).unwrap(), solved);
    }

    #[test]
    fn h48_roundtrip_scrambled() {
        let c = crate::cube::MOVE_CUBES[crate::cube::Move::R.index()]
            .compose(&crate::cube::MOVE_CUBES[crate::cube::Move::U.index()]);
        let s = write_cube(H48, &c).unwrap();
        assert_eq!(read_cube(H48, &s).unwrap(), c);
    }

    #[test]
    fn lst_roundtrip() {
        let c = crate::cube::MOVE_CUBES[crate::cube::Move::F.index()];
        let s = write_cube(LST, &c).unwrap();
        assert_eq!(s.split(", ").count(), 20);
        assert_eq!(read_cube(LST, &s).unwrap(), c);
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert!(read_cube("XYZ", "").is_err());
        assert!(write_cube("XYZ", &Cube::solved()).is_err());
    }

    #[test]
    fn malformed_h48_is_an_error() {
        assert!(read_cube(H48, "too short").is_err());
    }
}
