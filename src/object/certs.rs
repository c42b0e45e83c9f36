// Copyright 2024-2026 Simo Sorce
// See LICENSE.txt file for terms

use crate::pkcs11::*;

use super::factory::*;

/// Attributes common to all certificates
///
/// [Certificate objects](https://docs.oasis-open.org/pkcs11/pkcs11-spec/v3.1/os/pkcs11-spec-v3.1-os.html#_Toc111203218)
/// (Version 3.1)
pub const CERTIFICATE_LEVEL: ObjectLevel = ObjectLevel::new(
    "Certificate",
    &[
        attr_decl!(CKA_CERTIFICATE_TYPE; NumType; "Certificate Type"; Discriminator),
        attr_decl!(CKA_TRUSTED; BoolType; "Trusted"),
        attr_decl!(CKA_CERTIFICATE_CATEGORY; NumType; "Certificate Category"),
        attr_decl!(CKA_CHECK_VALUE; BytesType; "Check Value (hex)"),
        attr_decl!(CKA_START_DATE; DateType; "Start Date"),
        attr_decl!(CKA_END_DATE; DateType; "End Date"),
        attr_decl!(CKA_PUBLIC_KEY_INFO; BytesType; "Public Key Info (hex)"),
    ],
);

pub const X509_CERTIFICATE_LEVEL: ObjectLevel = ObjectLevel::new(
    "X.509 Public Key Certificate",
    &[
        attr_decl!(CKA_SUBJECT; BytesType; "Subject (DER, hex)"),
        attr_decl!(CKA_ID; BytesType; "ID (hex)"),
        attr_decl!(CKA_ISSUER; BytesType; "Issuer (DER, hex)"),
        attr_decl!(CKA_SERIAL_NUMBER; BytesType; "Serial Number (DER, hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (BER, hex)"),
        attr_decl!(CKA_URL; StringType; "URL"),
        attr_decl!(CKA_HASH_OF_SUBJECT_PUBLIC_KEY; BytesType; "Hash Of Subject Public Key (hex)"),
        attr_decl!(CKA_HASH_OF_ISSUER_PUBLIC_KEY; BytesType; "Hash Of Issuer Public Key (hex)"),
        attr_decl!(CKA_JAVA_MIDP_SECURITY_DOMAIN; NumType; "Java MIDP Security Domain"),
        attr_decl!(CKA_NAME_HASH_ALGORITHM; MechType; "Name Hash Algorithm"),
    ],
);

pub const WTLS_CERTIFICATE_LEVEL: ObjectLevel = ObjectLevel::new(
    "WTLS Certificate",
    &[
        attr_decl!(CKA_SUBJECT; BytesType; "Subject (hex)"),
        attr_decl!(CKA_ISSUER; BytesType; "Issuer (hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"),
        attr_decl!(CKA_URL; StringType; "URL"),
        attr_decl!(CKA_HASH_OF_SUBJECT_PUBLIC_KEY; BytesType; "Hash Of Subject Public Key (hex)"),
        attr_decl!(CKA_HASH_OF_ISSUER_PUBLIC_KEY; BytesType; "Hash Of Issuer Public Key (hex)"),
    ],
);

pub const X509_ATTR_CERTIFICATE_LEVEL: ObjectLevel = ObjectLevel::new(
    "X.509 Attribute Certificate",
    &[
        attr_decl!(CKA_OWNER; BytesType; "Owner (DER, hex)"),
        attr_decl!(CKA_AC_ISSUER; BytesType; "AC Issuer (DER, hex)"),
        attr_decl!(CKA_SERIAL_NUMBER; BytesType; "Serial Number (DER, hex)"),
        attr_decl!(CKA_ATTR_TYPES; BytesType; "Attribute Types (BER, hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (BER, hex)"),
    ],
);
