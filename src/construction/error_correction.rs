// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module provides the trait a struct should implement if it is a
//! binary block code. Furthermore, it contains the codes implementing the
//! [`BlockCode`] trait.
//!
//! - \[1\] Hamming, Richard W. (1950).
//! Error detecting and error correcting codes.
//! In: The Bell System Technical Journal 29.2.
//! <https://doi.org/10.1002/j.1538-7305.1950.tb00463.x>

mod hamming;

pub use hamming::Hamming74;

/// This trait should be implemented by every binary block code, which maps
/// `DATA_BITS` data bits to `CODE_BITS` code bits.
/// Bits are represented as [`u8`]s with value `0` or `1`.
///
/// The provided methods lift the block-wise encoding and decoding to bit streams.
pub trait BlockCode {
    /// Number of data bits per block.
    const DATA_BITS: usize;
    /// Number of bits per codeword.
    const CODE_BITS: usize;

    /// Encodes exactly [`Self::DATA_BITS`] bits into a codeword.
    fn encode_block(&self, data: &[u8]) -> Vec<u8>;

    /// Decodes exactly [`Self::CODE_BITS`] bits into [`Self::DATA_BITS`] data bits,
    /// correcting errors where the code allows it.
    fn decode_block(&self, codeword: &[u8]) -> Vec<u8>;

    /// Returns the number of bits [`BlockCode::encode_bits`] outputs for `num_bits` input bits.
    fn encoded_len(&self, num_bits: usize) -> usize {
        num_bits.div_ceil(Self::DATA_BITS) * Self::CODE_BITS
    }

    /// Encodes a bit stream block by block.
    /// The stream is padded with zeros to a multiple of [`Self::DATA_BITS`] first.
    ///
    /// Parameters:
    /// - `bits`: the bits to encode
    ///
    /// Returns the concatenation of all codewords.
    ///
    /// # Examples
    /// ```
    /// use multiblock_lwe::construction::error_correction::{BlockCode, Hamming74};
    ///
    /// let encoded = Hamming74.encode_bits(&[1, 0, 1]);
    /// assert_eq!(vec![1, 0, 1, 0, 1, 0, 1], encoded);
    /// ```
    fn encode_bits(&self, bits: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len(bits.len()));
        for chunk in bits.chunks(Self::DATA_BITS) {
            let mut block = chunk.to_vec();
            block.resize(Self::DATA_BITS, 0);
            out.extend(self.encode_block(&block));
        }
        out
    }

    /// Decodes a bit stream block by block.
    /// Trailing bits that do not form a complete codeword are ignored.
    ///
    /// Parameters:
    /// - `bits`: the concatenated codewords
    ///
    /// Returns the concatenation of all decoded data blocks.
    fn decode_bits(&self, bits: &[u8]) -> Vec<u8> {
        bits.chunks_exact(Self::CODE_BITS)
            .flat_map(|codeword| self.decode_block(codeword))
            .collect()
    }
}
