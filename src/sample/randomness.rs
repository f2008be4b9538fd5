// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the [`RandomnessSource`], a seedable generator
//! from which every random matrix of a cryptosystem instance is drawn.

use crate::error::LweError;
use qfall_math::{
    integer::Z,
    integer_mod_q::{MatZq, Modulus},
    traits::SetEntry,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Normal};

/// A seedable source of uniform matrices, binary matrices and noise matrices
/// over `Z_q`.
///
/// Each instance owns its own [`ChaCha20Rng`], i.e. two sources created
/// from the same seed produce identical sample streams and independent
/// sources never influence each other.
///
/// # Examples
/// ```
/// use multiblock_lwe::sample::randomness::RandomnessSource;
/// use qfall_math::integer_mod_q::Modulus;
///
/// let q = Modulus::from(97);
/// let mut source_1 = RandomnessSource::new(Some(42));
/// let mut source_2 = RandomnessSource::new(Some(42));
///
/// assert_eq!(
///     source_1.uniform(4, 4, &q).unwrap(),
///     source_2.uniform(4, 4, &q).unwrap()
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RandomnessSource {
    rng: ChaCha20Rng,
}

impl RandomnessSource {
    /// Instantiates a [`RandomnessSource`].
    ///
    /// Parameters:
    /// - `seed`: the seed of the generator; if `None`, the generator is
    ///   seeded from the operating system's entropy source
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self { rng }
    }

    /// Samples a matrix whose entries are chosen independently and
    /// uniformly at random from `[0, q)`.
    ///
    /// Parameters:
    /// - `num_rows`: number of rows of the sampled matrix
    /// - `num_cols`: number of columns of the sampled matrix
    /// - `modulus`: specifies `q`
    ///
    /// Returns the sampled [`MatZq`] or a [`LweError`] if `q` does not fit
    /// into an [`i64`].
    pub fn uniform(
        &mut self,
        num_rows: usize,
        num_cols: usize,
        modulus: &Modulus,
    ) -> Result<MatZq, LweError> {
        let q = modulus_to_i64(modulus)?;
        self.fill(num_rows, num_cols, modulus, |rng| rng.gen_range(0..q))
    }

    /// Samples a matrix whose entries are chosen independently and
    /// uniformly at random from `{0, 1}`.
    ///
    /// Parameters:
    /// - `num_rows`: number of rows of the sampled matrix
    /// - `num_cols`: number of columns of the sampled matrix
    /// - `modulus`: specifies the modulus of the returned matrix
    pub fn binary(
        &mut self,
        num_rows: usize,
        num_cols: usize,
        modulus: &Modulus,
    ) -> Result<MatZq, LweError> {
        self.fill(num_rows, num_cols, modulus, |rng| rng.gen_range(0..2))
    }

    /// Samples a noise matrix, where each entry is drawn from a centered
    /// Gaussian with standard deviation `stddev`, rounded to the nearest
    /// integer and reduced modulo `q`.
    ///
    /// Parameters:
    /// - `num_rows`: number of rows of the sampled matrix
    /// - `num_cols`: number of columns of the sampled matrix
    /// - `stddev`: the standard deviation of the Gaussian
    /// - `modulus`: specifies `q`
    ///
    /// # Examples
    /// ```
    /// use multiblock_lwe::sample::randomness::RandomnessSource;
    /// use qfall_math::integer_mod_q::Modulus;
    ///
    /// let mut source = RandomnessSource::new(Some(1));
    /// let noise = source.gaussian_noise(3, 5, 1.5, &Modulus::from(97)).unwrap();
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError::Configuration`] if `stddev` is negative or not finite.
    pub fn gaussian_noise(
        &mut self,
        num_rows: usize,
        num_cols: usize,
        stddev: f64,
        modulus: &Modulus,
    ) -> Result<MatZq, LweError> {
        if !stddev.is_finite() {
            return Err(LweError::Configuration(format!(
                "the standard deviation must be finite, but is {stddev}"
            )));
        }
        let normal = Normal::new(0.0, stddev).map_err(|e| {
            LweError::Configuration(format!("invalid standard deviation {stddev}: {e}"))
        })?;

        self.fill(num_rows, num_cols, modulus, |rng| {
            normal.sample(rng).round() as i64
        })
    }

    /// Samples a noise matrix, where each entry is chosen uniformly at random
    /// from `[-bound, bound]` and reduced modulo `q`.
    ///
    /// Parameters:
    /// - `num_rows`: number of rows of the sampled matrix
    /// - `num_cols`: number of columns of the sampled matrix
    /// - `bound`: the largest absolute value an entry can take
    /// - `modulus`: specifies `q`
    pub fn bounded_noise(
        &mut self,
        num_rows: usize,
        num_cols: usize,
        bound: u32,
        modulus: &Modulus,
    ) -> Result<MatZq, LweError> {
        let bound = i64::from(bound);
        self.fill(num_rows, num_cols, modulus, |rng| {
            rng.gen_range(-bound..=bound)
        })
    }

    /// Draws one value per entry from `sample` and stores it reduced into `[0, q)`.
    fn fill(
        &mut self,
        num_rows: usize,
        num_cols: usize,
        modulus: &Modulus,
        mut sample: impl FnMut(&mut ChaCha20Rng) -> i64,
    ) -> Result<MatZq, LweError> {
        let q = modulus_to_i64(modulus)?;
        let mut matrix = MatZq::new(num_rows, num_cols, modulus);

        for row in 0..num_rows {
            for column in 0..num_cols {
                let value = sample(&mut self.rng).rem_euclid(q);
                matrix.set_entry(row, column, Z::from(value))?;
            }
        }

        Ok(matrix)
    }
}

/// Converts `q` into an [`i64`] or returns a [`LweError::Configuration`].
pub(crate) fn modulus_to_i64(modulus: &Modulus) -> Result<i64, LweError> {
    let q = Z::from(modulus);
    i64::try_from(&q)
        .map_err(|_| LweError::Configuration(format!("the modulus {q} must fit into an i64")))
}

#[cfg(test)]
mod test_randomness_source {
    use super::RandomnessSource;
    use qfall_math::{
        integer::Z,
        integer_mod_q::{MatZq, Modulus, Zq},
        traits::{GetEntry, GetNumColumns, GetNumRows},
    };

    fn entries(matrix: &MatZq) -> Vec<i64> {
        let mut out = Vec::new();
        for i in 0..matrix.get_num_rows() {
            for j in 0..matrix.get_num_columns() {
                let entry: Zq = matrix.get_entry(i, j).unwrap();
                out.push(i64::try_from(&entry.get_value()).unwrap());
            }
        }
        out
    }

    /// Ensures that two sources with the same seed produce the same stream.
    #[test]
    fn same_seed_same_samples() {
        let q = Modulus::from(12289);
        let mut source_1 = RandomnessSource::new(Some(7));
        let mut source_2 = RandomnessSource::new(Some(7));

        assert_eq!(
            source_1.uniform(5, 3, &q).unwrap(),
            source_2.uniform(5, 3, &q).unwrap()
        );
        assert_eq!(
            source_1.gaussian_noise(5, 3, 3.0, &q).unwrap(),
            source_2.gaussian_noise(5, 3, 3.0, &q).unwrap()
        );
        assert_eq!(
            source_1.binary(8, 1, &q).unwrap(),
            source_2.binary(8, 1, &q).unwrap()
        );
    }

    /// Ensures that every call advances the generator state.
    #[test]
    fn state_advances() {
        let q = Modulus::from(12289);
        let mut source = RandomnessSource::new(Some(7));

        let first = source.uniform(8, 8, &q).unwrap();
        let second = source.uniform(8, 8, &q).unwrap();

        assert_ne!(first, second);
    }

    /// Ensures that the sampled matrices have the requested dimensions.
    #[test]
    fn dimensions() {
        let q = Modulus::from(97);
        let mut source = RandomnessSource::new(None);

        let matrix = source.uniform(3, 7, &q).unwrap();

        assert_eq!(3, matrix.get_num_rows());
        assert_eq!(7, matrix.get_num_columns());
    }

    /// Ensures that binary matrices only contain `0` and `1`.
    #[test]
    fn binary_range() {
        let q = Modulus::from(97);
        let mut source = RandomnessSource::new(Some(3));

        let matrix = source.binary(20, 20, &q).unwrap();

        assert!(entries(&matrix).iter().all(|&v| v == 0 || v == 1));
        assert!(entries(&matrix).contains(&0));
        assert!(entries(&matrix).contains(&1));
    }

    /// Ensures that a tiny standard deviation rounds every sample to zero.
    #[test]
    fn tiny_gaussian_is_zero() {
        let q = Modulus::from(97);
        let mut source = RandomnessSource::new(Some(3));

        let noise = source.gaussian_noise(16, 8, 0.01, &q).unwrap();

        assert_eq!(MatZq::new(16, 8, &q), noise);
    }

    /// Ensures that negative Gaussian samples are reduced into `[0, q)`,
    /// i.e. small noise ends up close to `0` or close to `q`.
    #[test]
    fn gaussian_reduced_mod_q() {
        let q = Modulus::from(12289);
        let mut source = RandomnessSource::new(Some(11));

        let noise = source.gaussian_noise(30, 30, 2.0, &q).unwrap();

        for v in entries(&noise) {
            assert!((0..12289).contains(&v));
            assert!(v <= 20 || v >= 12289 - 20);
        }
    }

    /// Ensures that bounded noise stays within `[-bound, bound]` mod `q`.
    #[test]
    fn bounded_range() {
        let q = Modulus::from(97);
        let mut source = RandomnessSource::new(Some(5));

        let noise = source.bounded_noise(10, 10, 2, &q).unwrap();

        for v in entries(&noise) {
            assert!(v <= 2 || v >= 95);
        }
    }

    /// Ensures that invalid standard deviations are rejected.
    #[test]
    fn invalid_stddev() {
        let q = Modulus::from(97);
        let mut source = RandomnessSource::new(Some(5));

        assert!(source.gaussian_noise(2, 2, -1.0, &q).is_err());
        assert!(source.gaussian_noise(2, 2, f64::NAN, &q).is_err());
        assert!(source.gaussian_noise(2, 2, f64::INFINITY, &q).is_err());
    }

    /// Ensures that uniform entries cover more than a single value.
    #[test]
    fn uniform_range() {
        let q = Modulus::from(5);
        let mut source = RandomnessSource::new(Some(9));

        let values = entries(&source.uniform(10, 10, &q).unwrap());

        assert!(values.iter().all(|v| (0..5).contains(v)));
        assert!(values.iter().any(|&v| v != values[0]));
        assert_eq!(Z::from(5), Z::from(&q));
    }
}
