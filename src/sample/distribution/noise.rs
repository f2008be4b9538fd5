// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the [`NoiseGenerator`] trait and its implementations,
//! from which the error matrices `E_i` of the key generation are sampled.

use crate::{error::LweError, sample::randomness::RandomnessSource};
use qfall_math::integer_mod_q::{MatZq, Modulus};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The standard deviation used by [`Gaussian::default`].
pub const DEFAULT_STDDEV: f64 = 0.01;

/// This trait should be implemented by all distributions which should be
/// used to generate the noise of a key block.
/// Every block of a [`MultiBlockLwe`](crate::construction::pk_encryption::MultiBlockLwe)
/// instance is assigned one noise generator.
///
/// Implementations must draw all randomness from the provided [`RandomnessSource`]
/// to keep instances reproducible.
#[typetag::serde]
pub trait NoiseGenerator: Debug {
    /// Samples a noise matrix.
    ///
    /// Parameters:
    /// - `source`: the randomness source of the cryptosystem instance
    /// - `num_rows`: number of rows of the noise matrix
    /// - `num_cols`: number of columns of the noise matrix
    /// - `modulus`: the modulus `q` the noise is reduced by
    ///
    /// Returns a noise matrix with entries in `[0, q)`.
    fn sample(
        &self,
        source: &mut RandomnessSource,
        num_rows: usize,
        num_cols: usize,
        modulus: &Modulus,
    ) -> Result<MatZq, LweError>;

    /// Returns an upper bound on the absolute value of a single noise entry
    /// that holds with overwhelming probability.
    fn bound(&self) -> f64;
}

/// Rounded centered Gaussian noise with standard deviation `stddev`.
///
/// # Examples
/// ```
/// use multiblock_lwe::sample::distribution::noise::{Gaussian, NoiseGenerator};
/// use multiblock_lwe::sample::randomness::RandomnessSource;
/// use qfall_math::integer_mod_q::Modulus;
///
/// let gaussian = Gaussian::new(2.0).unwrap();
/// let mut source = RandomnessSource::new(Some(3));
///
/// let noise = gaussian.sample(&mut source, 16, 8, &Modulus::from(12289)).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GaussianParams")]
pub struct Gaussian {
    stddev: f64,
}

/// The unchecked serialized form of a [`Gaussian`].
/// Deserialization goes through [`Gaussian::new`].
#[derive(Deserialize)]
struct GaussianParams {
    stddev: f64,
}

impl TryFrom<GaussianParams> for Gaussian {
    type Error = LweError;

    fn try_from(params: GaussianParams) -> Result<Self, Self::Error> {
        Self::new(params.stddev)
    }
}

impl Gaussian {
    /// Instantiates a [`Gaussian`] noise generator.
    ///
    /// Parameters:
    /// - `stddev`: the standard deviation of the Gaussian before rounding
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError::Configuration`] if `stddev` is negative or not finite.
    pub fn new(stddev: f64) -> Result<Self, LweError> {
        if !stddev.is_finite() || stddev < 0.0 {
            return Err(LweError::Configuration(format!(
                "the standard deviation must be finite and non-negative, but is {stddev}"
            )));
        }
        Ok(Self { stddev })
    }

    /// Returns the standard deviation of this generator.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }
}

impl Default for Gaussian {
    /// Returns a [`Gaussian`] with standard deviation [`DEFAULT_STDDEV`].
    fn default() -> Self {
        Self {
            stddev: DEFAULT_STDDEV,
        }
    }
}

#[typetag::serde]
impl NoiseGenerator for Gaussian {
    fn sample(
        &self,
        source: &mut RandomnessSource,
        num_rows: usize,
        num_cols: usize,
        modulus: &Modulus,
    ) -> Result<MatZq, LweError> {
        source.gaussian_noise(num_rows, num_cols, self.stddev, modulus)
    }

    /// Samples exceed six standard deviations with probability below `2^-28`.
    /// Values are rounded, hence the additional `0.5`.
    fn bound(&self) -> f64 {
        (6.0 * self.stddev + 0.5).floor()
    }
}

/// Noise chosen uniformly at random from `[-bound, bound]`.
///
/// # Examples
/// ```
/// use multiblock_lwe::sample::distribution::noise::{Bounded, NoiseGenerator};
///
/// let bounded = Bounded::new(1);
/// assert_eq!(1.0, bounded.bound());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounded {
    bound: u32,
}

impl Bounded {
    /// Instantiates a [`Bounded`] noise generator with entries in `[-bound, bound]`.
    pub fn new(bound: u32) -> Self {
        Self { bound }
    }
}

#[typetag::serde]
impl NoiseGenerator for Bounded {
    fn sample(
        &self,
        source: &mut RandomnessSource,
        num_rows: usize,
        num_cols: usize,
        modulus: &Modulus,
    ) -> Result<MatZq, LweError> {
        source.bounded_noise(num_rows, num_cols, self.bound, modulus)
    }

    fn bound(&self) -> f64 {
        f64::from(self.bound)
    }
}

/// Returns `k` default [`Gaussian`] noise generators.
pub fn default_noise(k: usize) -> Vec<Box<dyn NoiseGenerator>> {
    (0..k)
        .map(|_| Box::new(Gaussian::default()) as Box<dyn NoiseGenerator>)
        .collect()
}
