// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the systematic Hamming(7,4) code, which corrects
//! any single bit error per codeword.

use super::BlockCode;
use serde::{Deserialize, Serialize};

/// The generator matrix `G` in systematic form `[I_4 | P]`.
const G: [[u8; 7]; 4] = [
    [1, 0, 0, 0, 0, 1, 1],
    [0, 1, 0, 0, 1, 0, 1],
    [0, 0, 1, 0, 1, 1, 0],
    [0, 0, 0, 1, 1, 1, 1],
];

/// The parity-check matrix `H = [P^t | I_3]`, i.e. `H * G^t = 0 mod 2`.
const H: [[u8; 7]; 3] = [
    [0, 1, 1, 1, 1, 0, 0],
    [1, 0, 1, 1, 0, 1, 0],
    [1, 1, 0, 1, 0, 0, 1],
];

/// Maps a syndrome `s_0 s_1 s_2` (read as a binary number) to the position of
/// the flipped bit. The syndrome of a flip at position `j` is column `j` of `H`.
const SYNDROME_TABLE: [Option<usize>; 8] = build_syndrome_table();

const fn build_syndrome_table() -> [Option<usize>; 8] {
    let mut table = [None; 8];
    let mut j = 0;
    while j < 7 {
        let index = ((H[0][j] << 2) | (H[1][j] << 1) | H[2][j]) as usize;
        table[index] = Some(j);
        j += 1;
    }
    table
}

/// The Hamming(7,4) code.
///
/// # Examples
/// ```
/// use multiblock_lwe::construction::error_correction::Hamming74;
///
/// let mut codeword = Hamming74::encode([1, 0, 1, 1]);
/// codeword[2] ^= 1;
///
/// assert_eq!([1, 0, 1, 1], Hamming74::decode(codeword));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hamming74;

impl Hamming74 {
    /// Encodes four data bits into a codeword by computing `data * G mod 2`.
    /// Only the lowest bit of every entry of `data` is used.
    ///
    /// Parameters:
    /// - `data`: four bits with values in `{0, 1}`
    ///
    /// Returns the codeword, whose first four bits equal `data`.
    pub fn encode(data: [u8; 4]) -> [u8; 7] {
        let data = data.map(|bit| bit & 1);
        let mut codeword = [0u8; 7];
        for (j, bit) in codeword.iter_mut().enumerate() {
            *bit = data
                .iter()
                .zip(G.iter())
                .fold(0, |acc, (d, row)| acc ^ (d & row[j]));
        }
        codeword
    }

    /// Computes the syndrome `H * codeword mod 2`, packed into the three
    /// lowest bits of the returned value.
    /// Only the lowest bit of every entry of `codeword` is used.
    pub fn syndrome(codeword: &[u8; 7]) -> u8 {
        H.iter().fold(0, |acc, row| {
            let parity = row
                .iter()
                .zip(codeword.iter())
                .fold(0, |p, (h, c)| p ^ (h & c & 1));
            (acc << 1) | parity
        })
    }

    /// Decodes a codeword into its four data bits.
    /// If the syndrome is non-zero, the bit at the indicated position is flipped
    /// in a copy of the codeword before the data bits are read.
    /// Only the lowest bit of every entry of `codeword` is used.
    ///
    /// Parameters:
    /// - `codeword`: seven bits with values in `{0, 1}`
    ///
    /// Returns the first four bits of the corrected codeword.
    pub fn decode(codeword: [u8; 7]) -> [u8; 4] {
        let mut corrected = codeword.map(|bit| bit & 1);
        // all 7 non-zero syndromes are covered, `None` is only hit for `0`
        if let Some(position) = SYNDROME_TABLE[Self::syndrome(&codeword) as usize] {
            corrected[position] ^= 1;
        }
        [corrected[0], corrected[1], corrected[2], corrected[3]]
    }
}

impl BlockCode for Hamming74 {
    const DATA_BITS: usize = 4;
    const CODE_BITS: usize = 7;

    fn encode_block(&self, data: &[u8]) -> Vec<u8> {
        let mut block = [0u8; 4];
        block.copy_from_slice(data);
        Self::encode(block).to_vec()
    }

    fn decode_block(&self, codeword: &[u8]) -> Vec<u8> {
        let mut block = [0u8; 7];
        block.copy_from_slice(codeword);
        Self::decode(block).to_vec()
    }
}
