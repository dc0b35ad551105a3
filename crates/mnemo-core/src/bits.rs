//! Packed bit buffer used by the mnemonic codec.
//!
//! BIP-39 treats entropy and checksum as one big-endian bit string that is
//! cut into 11-bit word indices. [`BitBuf`] stores that string packed into
//! bytes, most significant bit first, so `0x80` is the bit string `10000000`.
//!
//! # Layout
//!
//! Bit `i` lives in byte `i / 8` at mask `0x80 >> (i % 8)`. Bits past `len`
//! in the final byte are always zero, which keeps derived equality exact.

use std::fmt;

use crate::constants::BITS_PER_WORD;
use crate::error::MnemonicError;

/// Growable, MSB-first bit string backed by a byte buffer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitBuf {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuf {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Each byte becomes eight bits, most significant first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Concatenate the 11-bit big-endian form of every index.
    ///
    /// Only the low 11 bits of each index are used.
    pub fn from_word_indices(indices: &[u16]) -> Self {
        let mut buf = Self::with_capacity(indices.len() * BITS_PER_WORD);
        for &index in indices {
            buf.push_bits(u32::from(index), BITS_PER_WORD);
        }
        buf
    }

    /// Number of bits held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the buffer holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit at position `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32, "push_bits width {width} exceeds 32");
        for shift in (0..width).rev() {
            self.push((value >> shift) & 1 == 1);
        }
    }

    /// Append every bit of `other`.
    pub fn extend_from(&mut self, other: &BitBuf) {
        if self.len % 8 == 0 {
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }
        for i in 0..other.len {
            self.push(other.bit(i));
        }
    }

    /// The first `len` bits (the whole buffer if it is shorter).
    pub fn truncated(&self, len: usize) -> BitBuf {
        let len = len.min(self.len);
        let mut bytes = self.bytes[..len.div_ceil(8)].to_vec();
        if len % 8 != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xFF << (8 - len % 8);
            }
        }
        BitBuf { bytes, len }
    }

    /// Split into `[0, mid)` and `[mid, len)`. `mid` is clamped to the length.
    pub fn split_at(&self, mid: usize) -> (BitBuf, BitBuf) {
        let mid = mid.min(self.len);
        let head = self.truncated(mid);
        let mut tail = BitBuf::with_capacity(self.len - mid);
        for i in mid..self.len {
            tail.push(self.bit(i));
        }
        (head, tail)
    }

    /// Cut the buffer into consecutive `width`-bit big-endian integers.
    ///
    /// Fails with [`MnemonicError::MalformedBitLength`] unless the length is
    /// an exact multiple of `width`.
    pub fn chunks(&self, width: usize) -> Result<Vec<u32>, MnemonicError> {
        if width == 0 || width > 32 || self.len % width != 0 {
            return Err(MnemonicError::MalformedBitLength {
                len: self.len,
                chunk: width,
            });
        }
        Ok((0..self.len / width)
            .map(|i| self.read(i * width, width))
            .collect())
    }

    /// Cut the buffer into 11-bit word indices (0..=2047).
    pub fn to_word_indices(&self) -> Result<Vec<u16>, MnemonicError> {
        // An 11-bit chunk always fits in u16.
        Ok(self
            .chunks(BITS_PER_WORD)?
            .into_iter()
            .map(|v| v as u16)
            .collect())
    }

    /// Reassemble whole bytes. Requires a multiple of 8 bits.
    pub fn to_bytes(&self) -> Result<Vec<u8>, MnemonicError> {
        if self.len % 8 != 0 {
            return Err(MnemonicError::MalformedBitLength {
                len: self.len,
                chunk: 8,
            });
        }
        Ok(self.bytes.clone())
    }

    fn bit(&self, index: usize) -> bool {
        self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
    }

    fn read(&self, start: usize, width: usize) -> u32 {
        (start..start + width).fold(0u32, |acc, i| (acc << 1) | u32::from(self.bit(i)))
    }
}

/// Renders the textual bit string, e.g. `"0110"`.
impl fmt::Display for BitBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            f.write_str(if self.bit(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

// Bits are usually secret material; only the length is shown.
impl fmt::Debug for BitBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitBuf").field("len", &self.len).finish_non_exhaustive()
    }
}

/// Expand bytes into their bit string (8 bits per byte, MSB first).
pub fn bytes_to_bits(bytes: &[u8]) -> BitBuf {
    BitBuf::from_bytes(bytes)
}

/// Partition a bit string into 11-bit word indices.
pub fn bits_to_word_indices(bits: &BitBuf) -> Result<Vec<u16>, MnemonicError> {
    bits.to_word_indices()
}

/// Partition a bit string into bytes.
pub fn bits_to_bytes(bits: &BitBuf) -> Result<Vec<u8>, MnemonicError> {
    bits.to_bytes()
}
