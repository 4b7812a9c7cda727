//! Generic (de)serialization helpers for crate types that derive
//! `serde::{Serialize, Deserialize}` (namely [`crate::cube::Cube`]).
//!
//! This is a direct generalization of the teacher crate's own
//! `write_table`/`decode_table` pair, ported onto `bincode`'s `serde`
//! compatibility shim instead of its native `Encode`/`Decode` derive (the
//! crate types here only derive `serde` traits). It exists for callers that
//! want to persist a cube or a scramble outside the table-blob format that
//! [`crate::table`] implements for pruning data specifically.

use std::{fs, path::Path};

use bincode::config::{self, Configuration};
use bincode::error::DecodeError;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

const CONFIG: Configuration = config::standard();

pub fn write_table<P, T>(path: P, value: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let encoded = bincode::serde::encode_to_vec(value, CONFIG)?;
    fs::write(path, encoded)?;
    Ok(())
}

pub fn decode_table<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let (decoded, written) = bincode::serde::decode_from_slice(bytes, CONFIG)?;
    let additional = bytes.len() - written;
    if additional != 0 {
        return Err(DecodeError::UnexpectedEnd { additional })?;
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Cube;

    #[test]
    fn cube_roundtrips_through_bincode() {
        let c = crate::cube::MOVE_CUBES[crate::cube::Move::R.index()];
        let bytes = bincode::serde::encode_to_vec(&c, CONFIG).unwrap();
        let decoded: Cube = decode_table(&bytes).unwrap();
        assert_eq!(decoded, c);
    }
}
