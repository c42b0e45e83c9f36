// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use crate::pkcs11::*;

use super::factory::*;

/// Attributes common to all domain parameters objects
///
/// [Domain parameter objects](https://docs.oasis-open.org/pkcs11/pkcs11-spec/v3.1/os/pkcs11-spec-v3.1-os.html#_Toc111203246)
/// (Version 3.1)
pub const DOMAIN_PARAMETERS_LEVEL: ObjectLevel = ObjectLevel::new(
    "Domain Parameters",
    &[
        attr_decl!(CKA_KEY_TYPE; NumType; "Key Type"; Discriminator),
        attr_decl!(CKA_LOCAL; BoolType; "Local"),
    ],
);

pub const DSA_PARAMETERS_LEVEL: ObjectLevel = ObjectLevel::new(
    "DSA Parameters",
    &[
        attr_decl!(CKA_PRIME; BytesType; "Prime (hex)"),
        attr_decl!(CKA_SUBPRIME; BytesType; "Subprime (hex)"),
        attr_decl!(CKA_BASE; BytesType; "Base (hex)"),
        attr_decl!(CKA_PRIME_BITS; NumType; "Prime Bits (dec)"),
    ],
);

pub const DH_PARAMETERS_LEVEL: ObjectLevel = ObjectLevel::new(
    "DH Parameters",
    &[
        attr_decl!(CKA_PRIME; BytesType; "Prime (hex)"),
        attr_decl!(CKA_BASE; BytesType; "Base (hex)"),
        attr_decl!(CKA_PRIME_BITS; NumType; "Prime Bits (dec)"),
    ],
);

pub const X942_DH_PARAMETERS_LEVEL: ObjectLevel = ObjectLevel::new(
    "X9.42 DH Parameters",
    &[
        attr_decl!(CKA_PRIME; BytesType; "Prime (hex)"),
        attr_decl!(CKA_BASE; BytesType; "Base (hex)"),
        attr_decl!(CKA_SUBPRIME; BytesType; "Subprime (hex)"),
        attr_decl!(CKA_PRIME_BITS; NumType; "Prime Bits (dec)"),
        attr_decl!(CKA_SUBPRIME_BITS; NumType; "Subprime Bits (dec)"),
    ],
);
