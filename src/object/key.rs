// Copyright 2023-2026 Simo Sorce
// See LICENSE.txt file for terms

use crate::pkcs11::*;

use super::factory::*;

/// Attributes common to all key classes
///
/// [Key objects](https://docs.oasis-open.org/pkcs11/pkcs11-spec/v3.1/os/pkcs11-spec-v3.1-os.html#_Toc111203227)
/// (Version 3.1)
pub const KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "Key",
    &[
        attr_decl!(CKA_KEY_TYPE; NumType; "Key Type"; Discriminator),
        attr_decl!(CKA_ID; BytesType; "ID (hex)"),
        attr_decl!(CKA_START_DATE; DateType; "Start Date"),
        attr_decl!(CKA_END_DATE; DateType; "End Date"),
        attr_decl!(CKA_DERIVE; BoolType; "Derive"),
        attr_decl!(CKA_LOCAL; BoolType; "Local"),
        attr_decl!(CKA_KEY_GEN_MECHANISM; MechType; "Key Generation Mechanism"),
        attr_decl!(CKA_ALLOWED_MECHANISMS; UlongArrayType; "Allowed Mechanisms"),
    ],
);

/// Attributes common to all secret keys
///
/// [Secret key objects](https://docs.oasis-open.org/pkcs11/pkcs11-spec/v3.1/os/pkcs11-spec-v3.1-os.html#_Toc111203241)
/// (Version 3.1)
pub const SECRET_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "Secret Key",
    &[
        attr_decl!(CKA_SENSITIVE; BoolType; "Sensitive"),
        attr_decl!(CKA_ENCRYPT; BoolType; "Encrypt"),
        attr_decl!(CKA_DECRYPT; BoolType; "Decrypt"),
        attr_decl!(CKA_SIGN; BoolType; "Sign"),
        attr_decl!(CKA_VERIFY; BoolType; "Verify"),
        attr_decl!(CKA_WRAP; BoolType; "Wrap"),
        attr_decl!(CKA_UNWRAP; BoolType; "Unwrap"),
        attr_decl!(CKA_EXTRACTABLE; BoolType; "Extractable"),
        attr_decl!(CKA_ALWAYS_SENSITIVE; BoolType; "Always Sensitive"),
        attr_decl!(CKA_NEVER_EXTRACTABLE; BoolType; "Never Extractable"),
        attr_decl!(CKA_CHECK_VALUE; BytesType; "Check Value (hex)"),
        attr_decl!(CKA_WRAP_WITH_TRUSTED; BoolType; "Wrap With Trusted"),
        attr_decl!(CKA_TRUSTED; BoolType; "Trusted"),
        attr_decl!(CKA_WRAP_TEMPLATE; AttrArrayType; "Wrap Template"),
        attr_decl!(CKA_UNWRAP_TEMPLATE; AttrArrayType; "Unwrap Template"),
    ],
);

/// Attributes common to all public keys
///
/// [Public key objects](https://docs.oasis-open.org/pkcs11/pkcs11-spec/v3.1/os/pkcs11-spec-v3.1-os.html#_Toc111203230)
/// (Version 3.1)
pub const PUBLIC_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "Public Key",
    &[
        attr_decl!(CKA_SUBJECT; BytesType; "Subject (DER, hex)"),
        attr_decl!(CKA_ENCRYPT; BoolType; "Encrypt"),
        attr_decl!(CKA_VERIFY; BoolType; "Verify"),
        attr_decl!(CKA_VERIFY_RECOVER; BoolType; "Verify Recover"),
        attr_decl!(CKA_WRAP; BoolType; "Wrap"),
        attr_decl!(CKA_TRUSTED; BoolType; "Trusted"),
        attr_decl!(CKA_WRAP_TEMPLATE; AttrArrayType; "Wrap Template"),
        attr_decl!(CKA_PUBLIC_KEY_INFO; BytesType; "Public Key Info (hex)"),
    ],
);

/// Attributes common to all private keys
///
/// [Private key objects](https://docs.oasis-open.org/pkcs11/pkcs11-spec/v3.1/os/pkcs11-spec-v3.1-os.html#_Toc111203235)
/// (Version 3.1)
pub const PRIVATE_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "Private Key",
    &[
        attr_decl!(CKA_SUBJECT; BytesType; "Subject (DER, hex)"),
        attr_decl!(CKA_SENSITIVE; BoolType; "Sensitive"),
        attr_decl!(CKA_DECRYPT; BoolType; "Decrypt"),
        attr_decl!(CKA_SIGN; BoolType; "Sign"),
        attr_decl!(CKA_SIGN_RECOVER; BoolType; "Sign Recover"),
        attr_decl!(CKA_UNWRAP; BoolType; "Unwrap"),
        attr_decl!(CKA_EXTRACTABLE; BoolType; "Extractable"),
        attr_decl!(CKA_ALWAYS_SENSITIVE; BoolType; "Always Sensitive"),
        attr_decl!(CKA_NEVER_EXTRACTABLE; BoolType; "Never Extractable"),
        attr_decl!(CKA_WRAP_WITH_TRUSTED; BoolType; "Wrap With Trusted"),
        attr_decl!(CKA_UNWRAP_TEMPLATE; AttrArrayType; "Unwrap Template"),
        attr_decl!(CKA_ALWAYS_AUTHENTICATE; BoolType; "Always Authenticate"),
        attr_decl!(CKA_PUBLIC_KEY_INFO; BytesType; "Public Key Info (hex)"),
    ],
);

pub const GENERIC_SECRET_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "Generic Secret Key",
    &[
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"; Sensitive),
        attr_decl!(CKA_VALUE_LEN; NumType; "Value Length (dec)"),
    ],
);

pub const AES_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "AES Secret Key",
    &[
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"; Sensitive),
        attr_decl!(CKA_VALUE_LEN; NumType; "Value Length (dec)"),
    ],
);

pub const DES3_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "DES3 Secret Key",
    &[attr_decl!(CKA_VALUE; BytesType; "Value (hex)"; Sensitive)],
);

pub const RSA_PUBLIC_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "RSA Public Key",
    &[
        attr_decl!(CKA_MODULUS; BytesType; "Modulus (hex)"),
        attr_decl!(CKA_MODULUS_BITS; NumType; "Modulus Bits (dec)"),
        attr_decl!(CKA_PUBLIC_EXPONENT; BytesType; "Public Exponent (hex)"),
    ],
);

pub const RSA_PRIVATE_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "RSA Private Key",
    &[
        attr_decl!(CKA_MODULUS; BytesType; "Modulus (hex)"),
        attr_decl!(CKA_PUBLIC_EXPONENT; BytesType; "Public Exponent (hex)"),
        attr_decl!(CKA_PRIVATE_EXPONENT; BytesType; "Private Exponent (hex)"; Sensitive),
        attr_decl!(CKA_PRIME_1; BytesType; "Prime 1 (hex)"; Sensitive),
        attr_decl!(CKA_PRIME_2; BytesType; "Prime 2 (hex)"; Sensitive),
        attr_decl!(CKA_EXPONENT_1; BytesType; "Exponent 1 (hex)"; Sensitive),
        attr_decl!(CKA_EXPONENT_2; BytesType; "Exponent 2 (hex)"; Sensitive),
        attr_decl!(CKA_COEFFICIENT; BytesType; "Coefficient (hex)"; Sensitive),
    ],
);

pub const DSA_PUBLIC_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "DSA Public Key",
    &[
        attr_decl!(CKA_PRIME; BytesType; "Prime (hex)"),
        attr_decl!(CKA_SUBPRIME; BytesType; "Subprime (hex)"),
        attr_decl!(CKA_BASE; BytesType; "Base (hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"),
    ],
);

pub const DSA_PRIVATE_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "DSA Private Key",
    &[
        attr_decl!(CKA_PRIME; BytesType; "Prime (hex)"),
        attr_decl!(CKA_SUBPRIME; BytesType; "Subprime (hex)"),
        attr_decl!(CKA_BASE; BytesType; "Base (hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"; Sensitive),
    ],
);

pub const EC_PUBLIC_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "EC Public Key",
    &[
        attr_decl!(CKA_EC_PARAMS; BytesType; "EC Params (DER, hex)"),
        attr_decl!(CKA_EC_POINT; BytesType; "EC Point (DER, hex)"),
    ],
);

pub const EC_PRIVATE_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "EC Private Key",
    &[
        attr_decl!(CKA_EC_PARAMS; BytesType; "EC Params (DER, hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"; Sensitive),
    ],
);

pub const DH_PUBLIC_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "DH Public Key",
    &[
        attr_decl!(CKA_PRIME; BytesType; "Prime (hex)"),
        attr_decl!(CKA_BASE; BytesType; "Base (hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"),
    ],
);

pub const DH_PRIVATE_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "DH Private Key",
    &[
        attr_decl!(CKA_PRIME; BytesType; "Prime (hex)"),
        attr_decl!(CKA_BASE; BytesType; "Base (hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"; Sensitive),
        attr_decl!(CKA_VALUE_BITS; NumType; "Value Bits (dec)"),
    ],
);

pub const X942_DH_PUBLIC_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "X9.42 DH Public Key",
    &[
        attr_decl!(CKA_PRIME; BytesType; "Prime (hex)"),
        attr_decl!(CKA_BASE; BytesType; "Base (hex)"),
        attr_decl!(CKA_SUBPRIME; BytesType; "Subprime (hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"),
    ],
);

pub const X942_DH_PRIVATE_KEY_LEVEL: ObjectLevel = ObjectLevel::new(
    "X9.42 DH Private Key",
    &[
        attr_decl!(CKA_PRIME; BytesType; "Prime (hex)"),
        attr_decl!(CKA_BASE; BytesType; "Base (hex)"),
        attr_decl!(CKA_SUBPRIME; BytesType; "Subprime (hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"; Sensitive),
    ],
);
