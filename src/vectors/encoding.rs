use crate::constants::{F32_BYTES, MULTI_VECTOR_DIM_BYTES};
use crate::proto::v1;
use crate::results::DecodeError;

use super::model::VectorData;

/// Packs a vector into little-endian `f32` bytes.
///
/// Multi-vectors are prefixed with the row dimension as a little-endian `u16`.
/// Rows are assumed to share that dimension; the query builders reject
/// ragged or wider input before packing.
pub fn pack_vector(data: &VectorData) -> (Vec<u8>, v1::VectorType) {
    match data {
        VectorData::Single(values) => (pack_f32(values), v1::VectorType::SingleFp32),
        VectorData::Multi(rows) => {
            let dim = rows.first().map_or(0, Vec::len) as u16;
            let mut bytes = Vec::with_capacity(
                MULTI_VECTOR_DIM_BYTES + rows.len() * dim as usize * F32_BYTES,
            );
            bytes.extend_from_slice(&dim.to_le_bytes());
            for row in rows {
                bytes.extend(row.iter().flat_map(|v| v.to_le_bytes()));
            }
            (bytes, v1::VectorType::MultiFp32)
        }
    }
}

/// Reverses [`pack_vector`]. `name` is only used for error context.
pub fn unpack_vector(
    name: &str,
    bytes: &[u8],
    kind: v1::VectorType,
) -> Result<VectorData, DecodeError> {
    match kind {
        v1::VectorType::MultiFp32 => unpack_multi(name, bytes),
        v1::VectorType::SingleFp32 | v1::VectorType::Unspecified => {
            unpack_f32(name, bytes).map(VectorData::Single)
        }
    }
}

fn pack_f32(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn unpack_f32(name: &str, bytes: &[u8]) -> Result<Vec<f32>, DecodeError> {
    if !bytes.len().is_multiple_of(F32_BYTES) {
        return Err(DecodeError::MalformedVector {
            name: name.to_string(),
            len: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(F32_BYTES)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

fn unpack_multi(name: &str, bytes: &[u8]) -> Result<VectorData, DecodeError> {
    let malformed = || DecodeError::MalformedVector {
        name: name.to_string(),
        len: bytes.len(),
    };

    if bytes.len() < MULTI_VECTOR_DIM_BYTES {
        return Err(malformed());
    }

    let dim = u16::from_le_bytes([bytes[0], bytes[1]]) as usize;
    let body = &bytes[MULTI_VECTOR_DIM_BYTES..];

    if dim == 0 {
        return if body.is_empty() {
            Ok(VectorData::Multi(Vec::new()))
        } else {
            Err(malformed())
        };
    }

    let row_bytes = dim * F32_BYTES;
    if !body.len().is_multiple_of(row_bytes) {
        return Err(malformed());
    }

    body.chunks_exact(row_bytes)
        .map(|row| unpack_f32(name, row))
        .collect::<Result<Vec<_>, _>>()
        .map(VectorData::Multi)
}
