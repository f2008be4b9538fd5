// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the error type [`LweError`] returned by every
//! fallible operation of this crate.

use qfall_math::error::MathError;
use std::fmt;

/// Errors that can occur while instantiating, encrypting or decrypting
/// with a [`MultiBlockLwe`](crate::construction::pk_encryption::MultiBlockLwe)
/// instance.
#[derive(Debug)]
pub enum LweError {
    /// The public parameters, noise configuration or a provided key
    /// do not fit together.
    Configuration(String),
    /// The Hamming-encoded message does not fit into the `n x n` plaintext matrix.
    EncodingOverflow {
        /// Number of bits after encoding the message.
        encoded_bits: usize,
        /// Number of bits available, i.e. `n^2`.
        capacity: usize,
    },
    /// The message is not binary or too short for the requested shape.
    InvalidMessage(String),
    /// An error raised by the underlying matrix arithmetic.
    Math(MathError),
}

impl fmt::Display for LweError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::EncodingOverflow {
                encoded_bits,
                capacity,
            } => write!(
                f,
                "encoded message has {encoded_bits} bits, but only {capacity} bits fit into the block"
            ),
            Self::InvalidMessage(msg) => write!(f, "invalid message: {msg}"),
            Self::Math(e) => write!(f, "math error: {e}"),
        }
    }
}

impl std::error::Error for LweError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Math(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MathError> for LweError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}
