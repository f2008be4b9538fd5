// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the cryptographic constructions of this crate and
//! the error-correcting codes they build on.
//! A construction is built the same way:
//!
//! 1. A trait that combines the common feature, e.g.
//! [`public key encryption`](pk_encryption::PKEncryption).
//! 2. Explicit implementations of the trait, e.g.
//! [`MultiBlockLwe`](pk_encryption::MultiBlockLwe).

pub mod error_correction;
pub mod pk_encryption;
