// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This crate provides a multi-block Learning With Errors (LWE) public key
//! encryption scheme, which encrypts binary matrices and protects the
//! plaintext with a Hamming(7,4) code against single bit errors, together
//! with the seedable samplers and the error-correcting code it is built from.
//!
//! **WARNING:** No security is claimed for any parameter set.

pub mod construction;
pub mod error;
pub mod sample;
pub mod utils;
