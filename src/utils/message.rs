// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains functions to convert binary message matrices
//! into bit sequences and back.

use crate::error::LweError;
use qfall_math::{
    integer::{MatZ, Z},
    traits::{GetEntry, GetNumColumns, GetNumRows, SetEntry},
};

/// Flattens a binary matrix row by row into a bit sequence.
///
/// Parameters:
/// - `matrix`: a matrix with entries in `{0, 1}`
///
/// Returns the entries of `matrix` in row-major order.
///
/// # Examples
/// ```
/// use multiblock_lwe::utils::message::matrix_to_bits;
/// use qfall_math::integer::MatZ;
/// use std::str::FromStr;
///
/// let matrix = MatZ::from_str("[[1, 0],[0, 1]]").unwrap();
///
/// assert_eq!(vec![1, 0, 0, 1], matrix_to_bits(&matrix).unwrap());
/// ```
///
/// # Errors and Failures
/// - Returns a [`LweError::InvalidMessage`] if an entry is neither `0` nor `1`.
pub fn matrix_to_bits(matrix: &MatZ) -> Result<Vec<u8>, LweError> {
    let mut bits = Vec::new();
    for row in 0..matrix.get_num_rows() {
        for column in 0..matrix.get_num_columns() {
            let entry: Z = matrix.get_entry(row, column)?;
            if entry == Z::ZERO {
                bits.push(0);
            } else if entry == Z::ONE {
                bits.push(1);
            } else {
                return Err(LweError::InvalidMessage(format!(
                    "entry ({row}, {column}) is {entry}, but only 0 and 1 are allowed"
                )));
            }
        }
    }
    Ok(bits)
}

/// Crops a bit sequence to `num_rows * num_cols` bits and reshapes it row by row
/// into a matrix. This reverses [`matrix_to_bits`] on the output of a decryption,
/// which does not know the shape of the original message.
///
/// Parameters:
/// - `bits`: the bit sequence, possibly longer than needed
/// - `num_rows`: number of rows of the output matrix
/// - `num_cols`: number of columns of the output matrix
///
/// Returns a `num_rows x num_cols` matrix filled with the first bits of `bits`.
///
/// # Examples
/// ```
/// use multiblock_lwe::utils::message::bits_to_matrix;
/// use qfall_math::integer::MatZ;
/// use std::str::FromStr;
///
/// let matrix = bits_to_matrix(&[1, 1, 0, 1, 0, 0], 2, 2).unwrap();
///
/// assert_eq!(MatZ::from_str("[[1, 1],[0, 1]]").unwrap(), matrix);
/// ```
///
/// # Errors and Failures
/// - Returns a [`LweError::InvalidMessage`] if `num_rows` or `num_cols` is zero,
///   or if `bits` has fewer than `num_rows * num_cols` entries.
pub fn bits_to_matrix(bits: &[u8], num_rows: usize, num_cols: usize) -> Result<MatZ, LweError> {
    if num_rows == 0 || num_cols == 0 {
        return Err(LweError::InvalidMessage(format!(
            "a {num_rows}x{num_cols} matrix has no entries"
        )));
    }
    let len = num_rows * num_cols;
    if bits.len() < len {
        return Err(LweError::InvalidMessage(format!(
            "{} bits do not suffice for a {num_rows}x{num_cols} matrix",
            bits.len()
        )));
    }

    let mut matrix = MatZ::new(num_rows, num_cols);
    for (index, bit) in bits[..len].iter().enumerate() {
        matrix.set_entry(index / num_cols, index % num_cols, Z::from(*bit))?;
    }
    Ok(matrix)
}
