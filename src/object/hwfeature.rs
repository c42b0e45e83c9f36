// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use crate::pkcs11::*;

use super::factory::*;

/// Hardware feature objects are not storage objects, they only carry the
/// feature type on top of the class
pub const HW_FEATURE_LEVEL: ObjectLevel = ObjectLevel::new(
    "Hardware Feature",
    &[attr_decl!(CKA_HW_FEATURE_TYPE; NumType; "Feature Type"; Discriminator)],
);

pub const MONOTONIC_COUNTER_LEVEL: ObjectLevel = ObjectLevel::new(
    "Monotonic Counter",
    &[
        attr_decl!(CKA_RESET_ON_INIT; BoolType; "Reset on Init"),
        attr_decl!(CKA_HAS_RESET; BoolType; "Has been reset"),
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"),
    ],
);

/* The value is the 16 characters YYYYMMDDhhmmssxx time, kept as bytes */
pub const CLOCK_LEVEL: ObjectLevel = ObjectLevel::new(
    "Clock",
    &[attr_decl!(CKA_VALUE; BytesType; "Value (hex)")],
);
