// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use super::*;
use crate::pkcs11::*;
use hex;

#[macro_use]
mod util;
use util::*;

mod attrs;
mod ids;
mod objects;
mod params;
