// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of a multi-block LWE public key
//! encryption scheme, which encrypts a whole binary matrix at once and
//! protects it with a Hamming(7,4) code against single bit errors per codeword.

use super::PKEncryption;
use crate::{
    construction::error_correction::{BlockCode, Hamming74},
    error::LweError,
    sample::{
        distribution::noise::{default_noise, NoiseGenerator},
        randomness::{modulus_to_i64, RandomnessSource},
    },
    utils::message::matrix_to_bits,
};
use qfall_math::{
    integer::{MatZ, Z},
    integer_mod_q::{MatZq, Modulus, Zq},
    traits::{GetEntry, GetNumColumns, GetNumRows, SetEntry},
};
use tracing::{debug, warn};

/// This struct manages and stores the public parameters, the per-block noise
/// generators and the randomness source of a [`MultiBlockLwe`] instance.
///
/// Attributes:
/// - `n`: dimension of the square secret key blocks and of the plaintext matrix
/// - `m`: number of samples, i.e. rows of `A_i`, per block
/// - `k`: number of blocks
/// - `q`: specifies the modulus over which the encryption is computed
/// - `noise`: one noise generator per block, used to sample `E_i`
/// - `source`: the randomness source all samples are drawn from
///
/// # Examples
/// ```
/// use multiblock_lwe::construction::pk_encryption::{MultiBlockLwe, PKEncryption};
/// use multiblock_lwe::utils::message::bits_to_matrix;
/// use qfall_math::integer::MatZ;
/// use std::str::FromStr;
///
/// // setup public parameters and key pair
/// let mut lwe = MultiBlockLwe::new(8, 16, 2, 97, None, Some(123)).unwrap();
/// let (pk, sk) = lwe.gen().unwrap();
///
/// // encrypt a binary matrix
/// let msg = MatZ::from_str("[[1, 0, 1, 0],[0, 1, 1, 1],[1, 1, 0, 0],[0, 0, 1, 1]]").unwrap();
/// let cipher = lwe.enc(&pk, &msg).unwrap();
///
/// // decrypt, crop and reshape
/// let bits = lwe.dec(&sk, &cipher).unwrap();
/// let m = bits_to_matrix(&bits, 4, 4).unwrap();
///
/// assert_eq!(msg, m);
/// ```
#[derive(Debug)]
pub struct MultiBlockLwe {
    n: usize,
    m: usize,
    k: usize,
    q: Modulus,
    noise: Vec<Box<dyn NoiseGenerator>>,
    source: RandomnessSource,
}

impl MultiBlockLwe {
    /// Instantiates a [`MultiBlockLwe`] PK encryption instance with the
    /// specified parameters.
    ///
    /// **WARNING:** The given parameters are not checked for security nor
    /// correctness of the scheme.
    /// If you want to check your parameters for correctness,
    /// use [`MultiBlockLwe::check_correctness`].
    ///
    /// Parameters:
    /// - `n`: dimension of the secret key blocks, the plaintext matrix is `n x n`
    /// - `m`: number of rows of each matrix `A_i`
    /// - `k`: number of blocks
    /// - `q`: specifies the modulus
    /// - `noise`: exactly `k` noise generators, one per block; if `None`,
    ///   every block uses [`Gaussian::default`](crate::sample::distribution::noise::Gaussian)
    /// - `seed`: the seed of the randomness source; if `None`, it is seeded
    ///   from the operating system
    ///
    /// Returns a [`MultiBlockLwe`] PK encryption instance or a [`LweError`]
    /// if the parameters are invalid.
    ///
    /// # Examples
    /// ```
    /// use multiblock_lwe::construction::pk_encryption::MultiBlockLwe;
    /// use multiblock_lwe::sample::distribution::noise::{Gaussian, NoiseGenerator};
    ///
    /// let noise: Vec<Box<dyn NoiseGenerator>> = vec![
    ///     Box::new(Gaussian::new(0.5).unwrap()),
    ///     Box::new(Gaussian::default()),
    /// ];
    ///
    /// let lwe = MultiBlockLwe::new(8, 32, 2, 12289, Some(noise), Some(42)).unwrap();
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError::Configuration`] if `n`, `m` or `k` is zero,
    ///   if `q <= 1` or `q` does not fit into an [`i64`],
    ///   or if the number of noise generators differs from `k`.
    pub fn new(
        n: usize,
        m: usize,
        k: usize,
        q: impl Into<Z>,
        noise: Option<Vec<Box<dyn NoiseGenerator>>>,
        seed: Option<u64>,
    ) -> Result<Self, LweError> {
        let q: Z = q.into();

        if n == 0 || m == 0 || k == 0 {
            return Err(LweError::Configuration(format!(
                "n, m and k must be positive, but are n = {n}, m = {m} and k = {k}"
            )));
        }
        if q <= Z::ONE {
            return Err(LweError::Configuration(format!(
                "q must be larger than 1, but is {q}"
            )));
        }

        let noise = match noise {
            Some(noise) if noise.len() != k => {
                return Err(LweError::Configuration(format!(
                    "expected {k} noise generators, one per block, but got {}",
                    noise.len()
                )));
            }
            Some(noise) => noise,
            None => default_noise(k),
        };

        let q = Modulus::from(&q);
        modulus_to_i64(&q)?;

        Ok(Self {
            n,
            m,
            k,
            q,
            noise,
            source: RandomnessSource::new(seed),
        })
    }

    /// Returns the maximal number of message bits that fit into one ciphertext,
    /// i.e. four data bits for every complete codeword in the `n x n` plaintext matrix.
    ///
    /// # Examples
    /// ```
    /// use multiblock_lwe::construction::pk_encryption::MultiBlockLwe;
    ///
    /// let lwe = MultiBlockLwe::new(8, 16, 2, 97, None, None).unwrap();
    ///
    /// assert_eq!(36, lwe.capacity());
    /// ```
    pub fn capacity(&self) -> usize {
        (self.n * self.n / Hamming74::CODE_BITS) * Hamming74::DATA_BITS
    }

    /// Checks whether the accumulated noise of a ciphertext stays below `⌊q/4⌋`.
    /// During decryption each entry carries the noise `sum_i x_i^t * E_i`,
    /// which is bounded by `m * sum_i bound(E_i)`.
    ///
    /// **WARNING:** This condition is necessary, but not sufficient for correct
    /// decryption, as a bit is decrypted to `1` whenever the noisy value exceeds `⌊q/4⌋`.
    /// Hence, negative noise on a `0`-bit may still flip it.
    ///
    /// Returns an empty result or a [`LweError`] if the instance would
    /// not be correct.
    ///
    /// # Examples
    /// ```
    /// use multiblock_lwe::construction::pk_encryption::MultiBlockLwe;
    /// let lwe = MultiBlockLwe::default();
    ///
    /// assert!(lwe.check_correctness().is_ok());
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError::Configuration`] if the noise bound
    ///   is not smaller than `⌊q/4⌋`.
    pub fn check_correctness(&self) -> Result<(), LweError> {
        let threshold = (modulus_to_i64(&self.q)? / 4) as f64;
        let noise_bound = self.m as f64 * self.noise.iter().map(|e| e.bound()).sum::<f64>();

        if noise_bound >= threshold {
            return Err(LweError::Configuration(format!(
                "Completeness is not guaranteed as the noise bound {noise_bound} >= ⌊q/4⌋ = {threshold}"
            )));
        }

        Ok(())
    }

    /// Returns `⌊q/2⌋` and `⌊q/4⌋`.
    fn q_half_and_quarter(&self) -> Result<(i64, i64), LweError> {
        let q = modulus_to_i64(&self.q)?;
        Ok((q / 2, q / 4))
    }

    /// Ensures that `matrix` is a `num_rows x num_cols` matrix modulo `q`.
    fn check_shape(
        &self,
        matrix: &MatZq,
        num_rows: usize,
        num_cols: usize,
        name: &str,
    ) -> Result<(), LweError> {
        if matrix.get_num_rows() != num_rows as i64 || matrix.get_num_columns() != num_cols as i64
        {
            return Err(LweError::Configuration(format!(
                "{name} must be a {num_rows}x{num_cols} matrix, but is {}x{}",
                matrix.get_num_rows(),
                matrix.get_num_columns()
            )));
        }
        if matrix.get_mod() != self.q {
            return Err(LweError::Configuration(format!(
                "{name} is not defined modulo {}",
                self.q
            )));
        }
        Ok(())
    }

    /// Returns the sum of all blocks of the secret key grid.
    fn aggregate(&self, sk: &[Vec<MatZq>]) -> MatZq {
        let mut sum = MatZq::new(self.n, self.n, &self.q);
        for block in sk.iter().flatten() {
            sum = &sum + block;
        }
        sum
    }

    /// Returns the `n x 1` matrix with all entries equal to `1`.
    /// Multiplying it from the left with a `1 x n` row vector
    /// replicates that row vector into all `n` rows.
    fn ones(&self) -> Result<MatZq, LweError> {
        let mut ones = MatZq::new(self.n, 1, &self.q);
        for row in 0..self.n {
            ones.set_entry(row, 0, Z::ONE)?;
        }
        Ok(ones)
    }
}

impl Default for MultiBlockLwe {
    /// Initializes a [`MultiBlockLwe`] struct with `n = 8`, `m = 32`, `k = 2`,
    /// `q = 12289`, default Gaussian noise and an unseeded randomness source.
    /// This parameter choice is not secure as the dimension of the lattice is too small,
    /// but it provides an efficient working example.
    ///
    /// # Examples
    /// ```
    /// use multiblock_lwe::construction::pk_encryption::MultiBlockLwe;
    ///
    /// let lwe = MultiBlockLwe::default();
    /// ```
    fn default() -> Self {
        let k = 2;

        Self {
            n: 8,
            m: 32,
            k,
            q: Modulus::from(12289),
            noise: default_noise(k),
            source: RandomnessSource::new(None),
        }
    }
}

impl PKEncryption for MultiBlockLwe {
    type PublicKey = Vec<(MatZq, MatZq)>;
    type SecretKey = Vec<Vec<MatZq>>;
    type Cipher = (MatZq, MatZq);
    type Message = MatZ;
    type Plaintext = Vec<u8>;
    type Error = LweError;

    /// Generates a (pk, sk) pair for the multi-block LWE public key encryption scheme
    /// by following these steps:
    /// - S[j][l] <- Z_q^{n x n} for all j, l in [0, k)
    /// - S = sum_{j, l} S[j][l]
    /// - for every block i:
    ///   - A_i <- Z_q^{m x n}
    ///   - E_i <- χ_i^{m x n}
    ///   - B_i = A_i * S + E_i
    ///
    /// Then, `pk = [(A_i, B_i)]_i` and `sk = [[S[j][l]]_l]_j` is output.
    ///
    /// # Examples
    /// ```
    /// use multiblock_lwe::construction::pk_encryption::{MultiBlockLwe, PKEncryption};
    /// let mut lwe = MultiBlockLwe::default();
    ///
    /// let (pk, sk) = lwe.gen().unwrap();
    /// ```
    fn gen(&mut self) -> Result<(Self::PublicKey, Self::SecretKey), LweError> {
        // S[j][l] <- Z_q^{n x n}
        let mut sk = Vec::with_capacity(self.k);
        for _ in 0..self.k {
            let mut row = Vec::with_capacity(self.k);
            for _ in 0..self.k {
                row.push(self.source.uniform(self.n, self.n, &self.q)?);
            }
            sk.push(row);
        }
        let mat_s = self.aggregate(&sk);

        let mut pk = Vec::with_capacity(self.k);
        for noise in self.noise.iter() {
            // A_i <- Z_q^{m x n}
            let mat_a = self.source.uniform(self.m, self.n, &self.q)?;
            // E_i <- χ_i^{m x n}
            let mat_e = noise.sample(&mut self.source, self.m, self.n, &self.q)?;

            // B_i = A_i * S + E_i
            let mat_b = &(&mat_a * &mat_s) + &mat_e;
            pk.push((mat_a, mat_b));
        }

        debug!(n = self.n, m = self.m, k = self.k, "generated multi-block LWE key pair");

        Ok((pk, sk))
    }

    /// Generates an encryption of the binary matrix `message` by following these steps:
    /// - encode the row-wise flattened message with Hamming(7,4)
    ///   and embed the padded bits row-wise into an `n x n` matrix `M`
    /// - for every block i: x_i <- Z_2^m
    /// - C1 = 1_n * sum_i x_i^t * A_i
    /// - C2 = 1_n * sum_i x_i^t * B_i + ⌊q/2⌋ * M
    ///
    /// Then, cipher `(C1, C2)` is output.
    ///
    /// Parameters:
    /// - `pk`: specifies the public key `pk = [(A_i, B_i)]_i`
    /// - `message`: specifies a binary matrix of any shape
    ///
    /// Returns a cipher `(C1, C2)` of type `(MatZq, MatZq)`.
    ///
    /// # Examples
    /// ```
    /// use multiblock_lwe::construction::pk_encryption::{MultiBlockLwe, PKEncryption};
    /// use qfall_math::integer::MatZ;
    /// use std::str::FromStr;
    /// let mut lwe = MultiBlockLwe::default();
    /// let (pk, sk) = lwe.gen().unwrap();
    ///
    /// let msg = MatZ::from_str("[[1, 1, 0],[0, 1, 0]]").unwrap();
    /// let cipher = lwe.enc(&pk, &msg).unwrap();
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError::EncodingOverflow`] if the encoded message
    ///   has more than `n^2` bits.
    /// - Returns a [`LweError::InvalidMessage`] if `message` is not binary.
    /// - Returns a [`LweError::Configuration`] if `pk` does not match the
    ///   public parameters of this instance.
    fn enc(&mut self, pk: &Self::PublicKey, message: &MatZ) -> Result<Self::Cipher, LweError> {
        if pk.len() != self.k {
            return Err(LweError::Configuration(format!(
                "the public key must consist of {} blocks, but has {}",
                self.k,
                pk.len()
            )));
        }
        for (mat_a, mat_b) in pk {
            self.check_shape(mat_a, self.m, self.n, "A_i")?;
            self.check_shape(mat_b, self.m, self.n, "B_i")?;
        }

        let mut encoded = Hamming74.encode_bits(&matrix_to_bits(message)?);
        let capacity = self.n * self.n;
        if encoded.len() > capacity {
            warn!(
                encoded_bits = encoded.len(),
                capacity, "message too large for the plaintext matrix"
            );
            return Err(LweError::EncodingOverflow {
                encoded_bits: encoded.len(),
                capacity,
            });
        }
        let encoded_bits = encoded.len();
        encoded.resize(capacity, 0);

        // ⌊q/2⌋ * M
        let (q_half, _) = self.q_half_and_quarter()?;
        let mut mat_msg = MatZq::new(self.n, self.n, &self.q);
        for (index, bit) in encoded.iter().enumerate() {
            if *bit == 1 {
                mat_msg.set_entry(index / self.n, index % self.n, Z::from(q_half))?;
            }
        }

        let ones = self.ones()?;
        let mut c_1 = MatZq::new(self.n, self.n, &self.q);
        let mut c_2 = MatZq::new(self.n, self.n, &self.q);
        for (mat_a, mat_b) in pk {
            // x_i <- Z_2^m
            let vec_x_t = self.source.binary(self.m, 1, &self.q)?.transpose();

            c_1 = &c_1 + &(&ones * &(&vec_x_t * mat_a));
            c_2 = &c_2 + &(&ones * &(&vec_x_t * mat_b));
        }
        let c_2 = &c_2 + &mat_msg;

        debug!(encoded_bits, capacity, blocks = self.k, "encrypted message");

        Ok((c_1, c_2))
    }

    /// Decrypts the provided `cipher` using the secret key `sk` by following these steps:
    /// - CS = sum_{i, j} C1 * S[j][i]
    /// - D = C2 - CS
    /// - output bit 1 for every entry of D larger than ⌊q/4⌋, otherwise 0
    /// - decode the row-wise flattened bits with Hamming(7,4)
    ///
    /// The output has `4 * ⌊n^2 / 7⌋` bits. The shape and length of the
    /// original message are not part of the cipher, see
    /// [`bits_to_matrix`](crate::utils::message::bits_to_matrix).
    ///
    /// Parameters:
    /// - `sk`: specifies the secret key `sk = [[S[j][l]]_l]_j`
    /// - `cipher`: specifies the cipher `(C1, C2)`
    ///
    /// Returns the decoded bits.
    ///
    /// # Examples
    /// ```
    /// use multiblock_lwe::construction::pk_encryption::{MultiBlockLwe, PKEncryption};
    /// use qfall_math::integer::MatZ;
    /// use std::str::FromStr;
    /// let mut lwe = MultiBlockLwe::default();
    /// let (pk, sk) = lwe.gen().unwrap();
    /// let msg = MatZ::from_str("[[1, 0, 1]]").unwrap();
    /// let cipher = lwe.enc(&pk, &msg).unwrap();
    ///
    /// let bits = lwe.dec(&sk, &cipher).unwrap();
    ///
    /// assert_eq!(&[1, 0, 1], &bits[..3]);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`LweError::Configuration`] if `sk` or `cipher` does not
    ///   match the public parameters of this instance.
    fn dec(&self, sk: &Self::SecretKey, cipher: &Self::Cipher) -> Result<Vec<u8>, LweError> {
        if sk.len() != self.k || sk.iter().any(|row| row.len() != self.k) {
            return Err(LweError::Configuration(format!(
                "the secret key must be a {}x{} grid of blocks",
                self.k, self.k
            )));
        }
        for block in sk.iter().flatten() {
            self.check_shape(block, self.n, self.n, "S[j][i]")?;
        }
        let (c_1, c_2) = cipher;
        self.check_shape(c_1, self.n, self.n, "C1")?;
        self.check_shape(c_2, self.n, self.n, "C2")?;

        // CS = sum_{i, j} C1 * S[j][i]
        let mut cs = MatZq::new(self.n, self.n, &self.q);
        for i in 0..self.k {
            for row in sk.iter() {
                cs = &cs + &(c_1 * &row[i]);
            }
        }
        let diff = c_2 - &cs;

        let (_, q_quarter) = self.q_half_and_quarter()?;
        let mut bits = Vec::with_capacity(self.n * self.n);
        for row in 0..self.n {
            for column in 0..self.n {
                let entry: Zq = diff.get_entry(row, column)?;
                let value = i64::try_from(&entry.get_value())?;
                bits.push(u8::from(value > q_quarter));
            }
        }

        let decoded = Hamming74.decode_bits(&bits);
        debug!(decoded_bits = decoded.len(), "decrypted cipher");

        Ok(decoded)
    }
}


#[cfg(test)]
mod test_multi_block_lwe {
    use super::MultiBlockLwe;
    use crate::{
        construction::pk_encryption::PKEncryption,
        error::LweError,
        sample::{
            distribution::noise::{Gaussian, NoiseGenerator},
            randomness::RandomnessSource,
        },
        utils::message::bits_to_matrix,
    };
    use qfall_math::{
        integer::MatZ,
        integer_mod_q::{MatZq, Modulus, Zq},
        traits::{GetEntry, GetNumColumns, GetNumRows, SetEntry},
    };
    use std::str::FromStr;

    /// Samples a binary `num_rows x num_cols` message from a seeded source.
    fn random_message(num_rows: usize, num_cols: usize, seed: u64) -> MatZ {
        let mut source = RandomnessSource::new(Some(seed));
        let bits = source.binary(num_rows, num_cols, &Modulus::from(2)).unwrap();
        let mut msg = MatZ::new(num_rows, num_cols);
        for i in 0..num_rows {
            for j in 0..num_cols {
                let bit: Zq = bits.get_entry(i, j).unwrap();
                msg.set_entry(i, j, bit.get_value()).unwrap();
            }
        }
        msg
    }

    /// Checks the shapes of the generated keys.
    #[test]
    fn keypair_shapes() {
        let (n, m, k) = (8, 32, 3);
        let mut lwe = MultiBlockLwe::new(n, m, k, 12289, None, Some(12345)).unwrap();

        let (pk, sk) = lwe.gen().unwrap();

        assert_eq!(k, pk.len());
        for (mat_a, mat_b) in pk.iter() {
            assert_eq!(m as i64, mat_a.get_num_rows());
            assert_eq!(n as i64, mat_a.get_num_columns());
            assert_eq!(m as i64, mat_b.get_num_rows());
            assert_eq!(n as i64, mat_b.get_num_columns());
        }
        assert_eq!(k, sk.len());
        for row in sk.iter() {
            assert_eq!(k, row.len());
            for block in row {
                assert_eq!(n as i64, block.get_num_rows());
                assert_eq!(n as i64, block.get_num_columns());
            }
        }
    }

    /// Checks that without noise every `B_i` equals `A_i` times the sum
    /// of all blocks of the secret key grid.
    #[test]
    fn key_relation_without_noise() {
        let (n, m, k) = (4, 8, 3);
        let noise: Vec<Box<dyn NoiseGenerator>> = (0..k)
            .map(|_| Box::new(Gaussian::new(0.0).unwrap()) as Box<dyn NoiseGenerator>)
            .collect();
        let mut lwe = MultiBlockLwe::new(n, m, k, 97, Some(noise), Some(17)).unwrap();

        let (pk, sk) = lwe.gen().unwrap();

        let mut mat_s = MatZq::new(n, n, &Modulus::from(97));
        for block in sk.iter().flatten() {
            mat_s = &mat_s + block;
        }
        for (mat_a, mat_b) in pk.iter() {
            assert_eq!(&(mat_a * &mat_s), mat_b);
        }
    }

    /// Checks the full-cycle of gen, enc, dec for the reference message.
    #[test]
    fn cycle_reference_message() {
        let msg =
            MatZ::from_str("[[1, 0, 1, 0],[0, 1, 1, 1],[1, 1, 0, 0],[0, 0, 1, 1]]").unwrap();
        let mut lwe = MultiBlockLwe::new(8, 16, 2, 97, None, Some(123)).unwrap();

        let (pk, sk) = lwe.gen().unwrap();
        let cipher = lwe.enc(&pk, &msg).unwrap();
        let bits = lwe.dec(&sk, &cipher).unwrap();

        assert_eq!(msg, bits_to_matrix(&bits, 4, 4).unwrap());
    }

    /// Checks the full-cycle of gen, enc, dec for random messages of different shapes.
    #[test]
    fn cycle_random_messages() {
        let mut lwe = MultiBlockLwe::new(8, 32, 2, 12289, None, Some(12345)).unwrap();
        let (pk, sk) = lwe.gen().unwrap();

        for (seed, (num_rows, num_cols)) in [(1, 4), (4, 4), (3, 5), (6, 6), (1, 36)]
            .into_iter()
            .enumerate()
        {
            let msg = random_message(num_rows, num_cols, seed as u64);

            let cipher = lwe.enc(&pk, &msg).unwrap();
            let bits = lwe.dec(&sk, &cipher).unwrap();

            assert_eq!(msg, bits_to_matrix(&bits, num_rows, num_cols).unwrap());
        }
    }

    /// Checks the full-cycle with more blocks and without any noise.
    #[test]
    fn cycle_many_blocks() {
        let noise: Vec<Box<dyn NoiseGenerator>> = (0..4)
            .map(|_| Box::new(Gaussian::new(0.0).unwrap()) as Box<dyn NoiseGenerator>)
            .collect();
        let mut lwe = MultiBlockLwe::new(6, 10, 4, 7681, Some(noise), Some(5)).unwrap();
        let msg = random_message(4, 5, 99);

        let (pk, sk) = lwe.gen().unwrap();
        let cipher = lwe.enc(&pk, &msg).unwrap();
        let bits = lwe.dec(&sk, &cipher).unwrap();

        assert_eq!(msg, bits_to_matrix(&bits, 4, 5).unwrap());
    }

    /// Checks that decryption outputs four bits per complete codeword.
    #[test]
    fn decryption_length() {
        let mut lwe = MultiBlockLwe::new(8, 16, 2, 97, None, Some(1)).unwrap();
        let (pk, sk) = lwe.gen().unwrap();

        let cipher = lwe.enc(&pk, &MatZ::from_str("[[1]]").unwrap()).unwrap();
        let bits = lwe.dec(&sk, &cipher).unwrap();

        assert_eq!(36, bits.len());
        assert_eq!(1, bits[0]);
        assert!(bits[1..].iter().all(|&b| b == 0));
    }

    /// Checks that messages with up to `capacity` bits are accepted and
    /// larger messages are rejected with an overflow.
    #[test]
    fn overflow_boundary() {
        let mut lwe = MultiBlockLwe::new(8, 16, 2, 97, None, Some(1)).unwrap();
        let (pk, _) = lwe.gen().unwrap();

        assert!(lwe.enc(&pk, &MatZ::new(6, 6)).is_ok());
        assert!(matches!(
            lwe.enc(&pk, &MatZ::new(1, 37)),
            Err(LweError::EncodingOverflow {
                encoded_bits: 70,
                capacity: 64
            })
        ));
        assert!(matches!(
            lwe.enc(&pk, &MatZ::new(9, 9)),
            Err(LweError::EncodingOverflow { .. })
        ));
    }

    /// Checks that an overflowing message does not consume randomness,
    /// i.e. no partial encryption happens.
    #[test]
    fn overflow_consumes_no_randomness() {
        let mut lwe_1 = MultiBlockLwe::new(8, 16, 2, 97, None, Some(8)).unwrap();
        let mut lwe_2 = MultiBlockLwe::new(8, 16, 2, 97, None, Some(8)).unwrap();
        let (pk_1, _) = lwe_1.gen().unwrap();
        let (pk_2, _) = lwe_2.gen().unwrap();
        let msg = MatZ::from_str("[[1, 1, 0, 1]]").unwrap();

        assert!(lwe_1.enc(&pk_1, &MatZ::new(10, 10)).is_err());

        assert_eq!(lwe_1.enc(&pk_1, &msg).unwrap(), lwe_2.enc(&pk_2, &msg).unwrap());
    }

    /// Checks that identically configured instances produce identical keys and ciphers.
    #[test]
    fn determinism() {
        let mut lwe_1 = MultiBlockLwe::new(8, 16, 2, 97, None, Some(123)).unwrap();
        let mut lwe_2 = MultiBlockLwe::new(8, 16, 2, 97, None, Some(123)).unwrap();
        let msg = random_message(3, 3, 7);

        let (pk_1, sk_1) = lwe_1.gen().unwrap();
        let (pk_2, sk_2) = lwe_2.gen().unwrap();

        assert_eq!(pk_1, pk_2);
        assert_eq!(sk_1, sk_2);
        assert_eq!(lwe_1.enc(&pk_1, &msg).unwrap(), lwe_2.enc(&pk_2, &msg).unwrap());
    }

    /// Checks that different seeds produce different keys.
    #[test]
    fn different_seeds() {
        let mut lwe_1 = MultiBlockLwe::new(8, 16, 2, 97, None, Some(1)).unwrap();
        let mut lwe_2 = MultiBlockLwe::new(8, 16, 2, 97, None, Some(2)).unwrap();

        assert_ne!(lwe_1.gen().unwrap().1, lwe_2.gen().unwrap().1);
    }

    /// Checks that every encryption uses fresh randomness.
    #[test]
    fn fresh_ciphers() {
        let mut lwe = MultiBlockLwe::new(8, 16, 2, 97, None, Some(3)).unwrap();
        let (pk, sk) = lwe.gen().unwrap();
        let msg = MatZ::from_str("[[0, 1],[1, 0]]").unwrap();

        let cipher_1 = lwe.enc(&pk, &msg).unwrap();
        let cipher_2 = lwe.enc(&pk, &msg).unwrap();

        assert_ne!(cipher_1, cipher_2);
        assert_eq!(lwe.dec(&sk, &cipher_1).unwrap(), lwe.dec(&sk, &cipher_2).unwrap());
    }

    /// Checks that non-binary messages are rejected.
    #[test]
    fn non_binary_message() {
        let mut lwe = MultiBlockLwe::new(8, 16, 2, 97, None, Some(3)).unwrap();
        let (pk, _) = lwe.gen().unwrap();

        let res = lwe.enc(&pk, &MatZ::from_str("[[0, 2]]").unwrap());

        assert!(matches!(res, Err(LweError::InvalidMessage(_))));
    }

    /// Checks that keys of another instance are rejected instead of panicking.
    #[test]
    fn mismatching_keys() {
        let mut lwe = MultiBlockLwe::new(8, 16, 2, 97, None, Some(3)).unwrap();
        let mut other = MultiBlockLwe::new(8, 16, 3, 97, None, Some(3)).unwrap();
        let mut other_mod = MultiBlockLwe::new(8, 16, 2, 101, None, Some(3)).unwrap();
        let (pk, sk) = lwe.gen().unwrap();
        let (pk_other, sk_other) = other.gen().unwrap();
        let (pk_mod, _) = other_mod.gen().unwrap();
        let msg = MatZ::from_str("[[1]]").unwrap();
        let cipher = lwe.enc(&pk, &msg).unwrap();

        assert!(matches!(
            lwe.enc(&pk_other, &msg),
            Err(LweError::Configuration(_))
        ));
        assert!(lwe.enc(&pk_mod, &msg).is_err());
        assert!(lwe.dec(&sk_other, &cipher).is_err());
        assert!(other.dec(&sk, &cipher).is_err());
    }
}
