// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Little-endian encoding of typed field values.

use crate::geometry::Quaternion;
use crate::path::SolutionPoint;

/// A fixed-size value that can be read from or written to a panel field.
pub trait FieldValue: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Decode from exactly `SIZE` bytes.
    fn decode(bytes: &[u8]) -> Self;

    fn encode(&self, out: &mut Vec<u8>);
}

fn array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

macro_rules! le_field_value {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn decode(bytes: &[u8]) -> Self {
                    <$ty>::from_le_bytes(array(bytes))
                }

                fn encode(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

le_field_value!(u8, i32, u32, i64, u64, f32);

impl FieldValue for SolutionPoint {
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        SolutionPoint::new(i32::decode(&bytes[..4]), i32::decode(&bytes[4..8]))
    }

    fn encode(&self, out: &mut Vec<u8>) {
        self.point_a.encode(out);
        self.point_b.encode(out);
    }
}

impl FieldValue for Quaternion {
    const SIZE: usize = 16;

    fn decode(bytes: &[u8]) -> Self {
        Quaternion::new(
            f32::decode(&bytes[0..4]),
            f32::decode(&bytes[4..8]),
            f32::decode(&bytes[8..12]),
            f32::decode(&bytes[12..16]),
        )
    }

    fn encode(&self, out: &mut Vec<u8>) {
        for v in [self.x, self.y, self.z, self.w] {
            v.encode(out);
        }
    }
}

/// Encode a slice of values back to back.
pub fn encode_all<T: FieldValue>(values: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * T::SIZE);
    for value in values {
        value.encode(&mut out);
    }
    out
}

/// Decode as many whole values as `bytes` holds.
pub fn decode_all<T: FieldValue>(bytes: &[u8]) -> Vec<T> {
    bytes.chunks_exact(T::SIZE).map(T::decode).collect()
}
