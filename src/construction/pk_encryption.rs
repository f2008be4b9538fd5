// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module provides the trait a struct should implement if it is an
//! instance of a public key encryption scheme. Furthermore, it contains
//! cryptographic schemes implementing the `PKEncryption` trait.
//!
//! The main references are listed in the following:
//! - \[1\] Regev, Oded (2009).
//! On lattices, learning with errors, random linear codes, and cryptography.
//! In: Journal of the ACM 6.
//! <https://dl.acm.org/doi/pdf/10.1145/1568318.1568324>
//! - \[2\] Peikert, Chris (2016).
//! A decade of lattice cryptography.
//! In: Theoretical Computer Science 10.4.
//! <https://web.eecs.umich.edu/~cpeikert/pubs/lattice-survey.pdf>

mod multi_block_lwe;

pub use multi_block_lwe::MultiBlockLwe;

/// This trait should be implemented by every public key encryption scheme.
///
/// Note: The gen does not take in the parameter `1^n`, as this is a public parameter,
/// which shall be defined by the struct implementing this trait.
/// Key generation and encryption take `&mut self`, as the struct owns the
/// randomness they consume.
pub trait PKEncryption {
    /// The type of the public key.
    type PublicKey;
    /// The type of the secret key.
    type SecretKey;
    /// The type of the ciphertext.
    type Cipher;
    /// The type of the messages accepted by [`PKEncryption::enc`].
    type Message;
    /// The type of the output of [`PKEncryption::dec`].
    type Plaintext;
    /// The error returned by every operation of the scheme.
    type Error;

    /// Generates a public key and a secret key from the attributes the
    /// struct has, which implements this trait.
    ///
    /// Returns the public key and the secret key.
    fn gen(&mut self) -> Result<(Self::PublicKey, Self::SecretKey), Self::Error>;

    /// Encrypts a message under the public key.
    ///
    /// Returns the resulting ciphertext.
    fn enc(&mut self, pk: &Self::PublicKey, message: &Self::Message)
        -> Result<Self::Cipher, Self::Error>;

    /// Decrypts a ciphertext using the secret key.
    ///
    /// Returns the decrypted plaintext.
    fn dec(&self, sk: &Self::SecretKey, cipher: &Self::Cipher)
        -> Result<Self::Plaintext, Self::Error>;
}
