//! 2-bit packing of nucleotide strings into integers.
//!
//! Bases map to `A=0, T=1, C=2, G=3` and the first base lands in the highest-order bits, so a
//! string of length `L` encodes to a value in `[0, 4^L)` and every value in that range is
//! reachable by exactly one string.

use thiserror::Error;

/// Longest string that fits in a `u64` at 2 bits per base
pub const MAX_KMER_LEN: usize = 32;

/// Longest index for which a dense `4^L` lookup table is built
pub const MAX_EXACT_INDEX_LEN: usize = 14;

const VAL_TO_BASE: [u8; 4] = [b'A', b'T', b'C', b'G'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("invalid base '{base}' at position {position}: only A/T/C/G are allowed")]
    InvalidBase { base: char, position: usize },

    #[error("sequence of length {length} exceeds the maximum encodable length of {max}")]
    TooLong { length: usize, max: usize },
}

/// 2-bit value of a base, or `None` for anything outside uppercase `ATCG`
#[inline]
#[must_use]
pub fn base_to_val(base: u8) -> Option<u64> {
    match base {
        b'A' => Some(0),
        b'T' => Some(1),
        b'C' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Encode a nucleotide string, most significant base first.
///
/// # Errors
///
/// Returns `EncodeError::InvalidBase` for the first character outside uppercase `ATCG`, or
/// `EncodeError::TooLong` if the string has more than [`MAX_KMER_LEN`] bases.
pub fn encode_kmer(seq: &[u8]) -> Result<u64, EncodeError> {
    if seq.len() > MAX_KMER_LEN {
        return Err(EncodeError::TooLong {
            length: seq.len(),
            max: MAX_KMER_LEN,
        });
    }

    seq.iter().enumerate().try_fold(0u64, |kmer, (position, &base)| {
        let val = base_to_val(base).ok_or(EncodeError::InvalidBase {
            base: char::from(base),
            position,
        })?;
        Ok((kmer << 2) | val)
    })
}

/// Decode `len` bases from a packed value. Inverse of [`encode_kmer`] for values in `[0, 4^len)`.
#[must_use]
pub fn decode_kmer(kmer: u64, len: usize) -> Vec<u8> {
    (0..len)
        .rev()
        .map(|i| VAL_TO_BASE[((kmer >> (2 * i)) & 0b11) as usize])
        .collect()
}

/// Size of the dense table for indices of length `len` (`4^len`)
#[inline]
#[must_use]
pub fn table_size(len: usize) -> usize {
    1usize << (2 * len)
}
