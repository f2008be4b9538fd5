// Copyright © 2024 multiblock-lwe contributors
//
// This file is part of multiblock-lwe.
//
// multiblock-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains anything that should be easily samplable for the
//! constructions of this crate. This includes the seedable
//! [`RandomnessSource`](randomness::RandomnessSource) and noise distributions.

pub mod distribution;
pub mod randomness;
