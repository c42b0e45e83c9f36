// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

//! PKCS#11 type definitions, constants and fixed-layout native records
//!
//! Only the subset of the v3.0 interface needed to describe objects,
//! attributes and mechanism parameters is mirrored here. All records are
//! `#[repr(C)]` and use the platform `unsigned long` for `CK_ULONG`, with
//! no structure packing, as common on Unix-like platforms.

mod fmt;
mod records;

pub use fmt::*;
pub use records::*;

pub type CK_BYTE = u8;
pub type CK_CHAR = CK_BYTE;
pub type CK_UTF8CHAR = CK_BYTE;
pub type CK_BBOOL = CK_BYTE;
pub type CK_ULONG = std::ffi::c_ulong;
pub type CK_LONG = std::ffi::c_long;
pub type CK_FLAGS = CK_ULONG;
pub type CK_RV = CK_ULONG;

pub type CK_VOID_PTR = *mut std::ffi::c_void;
pub type CK_BYTE_PTR = *mut CK_BYTE;
pub type CK_ULONG_PTR = *mut CK_ULONG;

pub type CK_OBJECT_HANDLE = CK_ULONG;
pub type CK_OBJECT_CLASS = CK_ULONG;
pub type CK_HW_FEATURE_TYPE = CK_ULONG;
pub type CK_KEY_TYPE = CK_ULONG;
pub type CK_CERTIFICATE_TYPE = CK_ULONG;
pub type CK_CERTIFICATE_CATEGORY = CK_ULONG;
pub type CK_ATTRIBUTE_TYPE = CK_ULONG;
pub type CK_MECHANISM_TYPE = CK_ULONG;
pub type CK_EC_KDF_TYPE = CK_ULONG;
pub type CK_GENERATOR_FUNCTION = CK_ULONG;
pub type CK_RSA_PKCS_MGF_TYPE = CK_ULONG;
pub type CK_RSA_PKCS_OAEP_SOURCE_TYPE = CK_ULONG;
pub type CK_MAC_GENERAL_PARAMS = CK_ULONG;

pub const CK_FALSE: CK_BBOOL = 0;
pub const CK_TRUE: CK_BBOOL = 1;

pub const CK_UNAVAILABLE_INFORMATION: CK_ULONG = CK_ULONG::MAX;
pub const CK_EFFECTIVELY_INFINITE: CK_ULONG = 0;
pub const CK_INVALID_HANDLE: CK_OBJECT_HANDLE = 0;

/* Object classes */
pub const CKO_DATA: CK_OBJECT_CLASS = 0x0000_0000;
pub const CKO_CERTIFICATE: CK_OBJECT_CLASS = 0x0000_0001;
pub const CKO_PUBLIC_KEY: CK_OBJECT_CLASS = 0x0000_0002;
pub const CKO_PRIVATE_KEY: CK_OBJECT_CLASS = 0x0000_0003;
pub const CKO_SECRET_KEY: CK_OBJECT_CLASS = 0x0000_0004;
pub const CKO_HW_FEATURE: CK_OBJECT_CLASS = 0x0000_0005;
pub const CKO_DOMAIN_PARAMETERS: CK_OBJECT_CLASS = 0x0000_0006;
pub const CKO_MECHANISM: CK_OBJECT_CLASS = 0x0000_0007;
pub const CKO_OTP_KEY: CK_OBJECT_CLASS = 0x0000_0008;
pub const CKO_PROFILE: CK_OBJECT_CLASS = 0x0000_0009;
pub const CKO_VENDOR_DEFINED: CK_OBJECT_CLASS = 0x8000_0000;

/* Hardware feature types */
pub const CKH_MONOTONIC_COUNTER: CK_HW_FEATURE_TYPE = 0x0000_0001;
pub const CKH_CLOCK: CK_HW_FEATURE_TYPE = 0x0000_0002;
pub const CKH_USER_INTERFACE: CK_HW_FEATURE_TYPE = 0x0000_0003;

/* Key types */
pub const CKK_RSA: CK_KEY_TYPE = 0x0000_0000;
pub const CKK_DSA: CK_KEY_TYPE = 0x0000_0001;
pub const CKK_DH: CK_KEY_TYPE = 0x0000_0002;
pub const CKK_EC: CK_KEY_TYPE = 0x0000_0003;
pub const CKK_X9_42_DH: CK_KEY_TYPE = 0x0000_0004;
pub const CKK_GENERIC_SECRET: CK_KEY_TYPE = 0x0000_0010;
pub const CKK_DES: CK_KEY_TYPE = 0x0000_0013;
pub const CKK_DES2: CK_KEY_TYPE = 0x0000_0014;
pub const CKK_DES3: CK_KEY_TYPE = 0x0000_0015;
pub const CKK_AES: CK_KEY_TYPE = 0x0000_001F;

/* Certificate types and categories */
pub const CKC_X_509: CK_CERTIFICATE_TYPE = 0x0000_0000;
pub const CKC_X_509_ATTR_CERT: CK_CERTIFICATE_TYPE = 0x0000_0001;
pub const CKC_WTLS: CK_CERTIFICATE_TYPE = 0x0000_0002;

pub const CK_CERTIFICATE_CATEGORY_UNSPECIFIED: CK_CERTIFICATE_CATEGORY = 0;
pub const CK_CERTIFICATE_CATEGORY_TOKEN_USER: CK_CERTIFICATE_CATEGORY = 1;
pub const CK_CERTIFICATE_CATEGORY_AUTHORITY: CK_CERTIFICATE_CATEGORY = 2;
pub const CK_CERTIFICATE_CATEGORY_OTHER_ENTITY: CK_CERTIFICATE_CATEGORY = 3;

/* Attribute types */
pub const CKF_ARRAY_ATTRIBUTE: CK_FLAGS = 0x4000_0000;

pub const CKA_CLASS: CK_ATTRIBUTE_TYPE = 0x0000_0000;
pub const CKA_TOKEN: CK_ATTRIBUTE_TYPE = 0x0000_0001;
pub const CKA_PRIVATE: CK_ATTRIBUTE_TYPE = 0x0000_0002;
pub const CKA_LABEL: CK_ATTRIBUTE_TYPE = 0x0000_0003;
pub const CKA_UNIQUE_ID: CK_ATTRIBUTE_TYPE = 0x0000_0004;
pub const CKA_APPLICATION: CK_ATTRIBUTE_TYPE = 0x0000_0010;
pub const CKA_VALUE: CK_ATTRIBUTE_TYPE = 0x0000_0011;
pub const CKA_OBJECT_ID: CK_ATTRIBUTE_TYPE = 0x0000_0012;
pub const CKA_CERTIFICATE_TYPE: CK_ATTRIBUTE_TYPE = 0x0000_0080;
pub const CKA_ISSUER: CK_ATTRIBUTE_TYPE = 0x0000_0081;
pub const CKA_SERIAL_NUMBER: CK_ATTRIBUTE_TYPE = 0x0000_0082;
pub const CKA_AC_ISSUER: CK_ATTRIBUTE_TYPE = 0x0000_0083;
pub const CKA_OWNER: CK_ATTRIBUTE_TYPE = 0x0000_0084;
pub const CKA_ATTR_TYPES: CK_ATTRIBUTE_TYPE = 0x0000_0085;
pub const CKA_TRUSTED: CK_ATTRIBUTE_TYPE = 0x0000_0086;
pub const CKA_CERTIFICATE_CATEGORY: CK_ATTRIBUTE_TYPE = 0x0000_0087;
pub const CKA_JAVA_MIDP_SECURITY_DOMAIN: CK_ATTRIBUTE_TYPE = 0x0000_0088;
pub const CKA_URL: CK_ATTRIBUTE_TYPE = 0x0000_0089;
pub const CKA_HASH_OF_SUBJECT_PUBLIC_KEY: CK_ATTRIBUTE_TYPE = 0x0000_008A;
pub const CKA_HASH_OF_ISSUER_PUBLIC_KEY: CK_ATTRIBUTE_TYPE = 0x0000_008B;
pub const CKA_NAME_HASH_ALGORITHM: CK_ATTRIBUTE_TYPE = 0x0000_008C;
pub const CKA_CHECK_VALUE: CK_ATTRIBUTE_TYPE = 0x0000_0090;
pub const CKA_KEY_TYPE: CK_ATTRIBUTE_TYPE = 0x0000_0100;
pub const CKA_SUBJECT: CK_ATTRIBUTE_TYPE = 0x0000_0101;
pub const CKA_ID: CK_ATTRIBUTE_TYPE = 0x0000_0102;
pub const CKA_SENSITIVE: CK_ATTRIBUTE_TYPE = 0x0000_0103;
pub const CKA_ENCRYPT: CK_ATTRIBUTE_TYPE = 0x0000_0104;
pub const CKA_DECRYPT: CK_ATTRIBUTE_TYPE = 0x0000_0105;
pub const CKA_WRAP: CK_ATTRIBUTE_TYPE = 0x0000_0106;
pub const CKA_UNWRAP: CK_ATTRIBUTE_TYPE = 0x0000_0107;
pub const CKA_SIGN: CK_ATTRIBUTE_TYPE = 0x0000_0108;
pub const CKA_SIGN_RECOVER: CK_ATTRIBUTE_TYPE = 0x0000_0109;
pub const CKA_VERIFY: CK_ATTRIBUTE_TYPE = 0x0000_010A;
pub const CKA_VERIFY_RECOVER: CK_ATTRIBUTE_TYPE = 0x0000_010B;
pub const CKA_DERIVE: CK_ATTRIBUTE_TYPE = 0x0000_010C;
pub const CKA_START_DATE: CK_ATTRIBUTE_TYPE = 0x0000_0110;
pub const CKA_END_DATE: CK_ATTRIBUTE_TYPE = 0x0000_0111;
pub const CKA_MODULUS: CK_ATTRIBUTE_TYPE = 0x0000_0120;
pub const CKA_MODULUS_BITS: CK_ATTRIBUTE_TYPE = 0x0000_0121;
pub const CKA_PUBLIC_EXPONENT: CK_ATTRIBUTE_TYPE = 0x0000_0122;
pub const CKA_PRIVATE_EXPONENT: CK_ATTRIBUTE_TYPE = 0x0000_0123;
pub const CKA_PRIME_1: CK_ATTRIBUTE_TYPE = 0x0000_0124;
pub const CKA_PRIME_2: CK_ATTRIBUTE_TYPE = 0x0000_0125;
pub const CKA_EXPONENT_1: CK_ATTRIBUTE_TYPE = 0x0000_0126;
pub const CKA_EXPONENT_2: CK_ATTRIBUTE_TYPE = 0x0000_0127;
pub const CKA_COEFFICIENT: CK_ATTRIBUTE_TYPE = 0x0000_0128;
pub const CKA_PUBLIC_KEY_INFO: CK_ATTRIBUTE_TYPE = 0x0000_0129;
pub const CKA_PRIME: CK_ATTRIBUTE_TYPE = 0x0000_0130;
pub const CKA_SUBPRIME: CK_ATTRIBUTE_TYPE = 0x0000_0131;
pub const CKA_BASE: CK_ATTRIBUTE_TYPE = 0x0000_0132;
pub const CKA_PRIME_BITS: CK_ATTRIBUTE_TYPE = 0x0000_0133;
pub const CKA_SUBPRIME_BITS: CK_ATTRIBUTE_TYPE = 0x0000_0134;
pub const CKA_VALUE_BITS: CK_ATTRIBUTE_TYPE = 0x0000_0160;
pub const CKA_VALUE_LEN: CK_ATTRIBUTE_TYPE = 0x0000_0161;
pub const CKA_EXTRACTABLE: CK_ATTRIBUTE_TYPE = 0x0000_0162;
pub const CKA_LOCAL: CK_ATTRIBUTE_TYPE = 0x0000_0163;
pub const CKA_NEVER_EXTRACTABLE: CK_ATTRIBUTE_TYPE = 0x0000_0164;
pub const CKA_ALWAYS_SENSITIVE: CK_ATTRIBUTE_TYPE = 0x0000_0165;
pub const CKA_KEY_GEN_MECHANISM: CK_ATTRIBUTE_TYPE = 0x0000_0166;
pub const CKA_MODIFIABLE: CK_ATTRIBUTE_TYPE = 0x0000_0170;
pub const CKA_COPYABLE: CK_ATTRIBUTE_TYPE = 0x0000_0171;
pub const CKA_DESTROYABLE: CK_ATTRIBUTE_TYPE = 0x0000_0172;
pub const CKA_EC_PARAMS: CK_ATTRIBUTE_TYPE = 0x0000_0180;
pub const CKA_EC_POINT: CK_ATTRIBUTE_TYPE = 0x0000_0181;
pub const CKA_ALWAYS_AUTHENTICATE: CK_ATTRIBUTE_TYPE = 0x0000_0202;
pub const CKA_WRAP_WITH_TRUSTED: CK_ATTRIBUTE_TYPE = 0x0000_0210;
pub const CKA_WRAP_TEMPLATE: CK_ATTRIBUTE_TYPE = CKF_ARRAY_ATTRIBUTE | 0x211;
pub const CKA_UNWRAP_TEMPLATE: CK_ATTRIBUTE_TYPE = CKF_ARRAY_ATTRIBUTE | 0x212;
pub const CKA_DERIVE_TEMPLATE: CK_ATTRIBUTE_TYPE = CKF_ARRAY_ATTRIBUTE | 0x213;
pub const CKA_HW_FEATURE_TYPE: CK_ATTRIBUTE_TYPE = 0x0000_0300;
pub const CKA_RESET_ON_INIT: CK_ATTRIBUTE_TYPE = 0x0000_0301;
pub const CKA_HAS_RESET: CK_ATTRIBUTE_TYPE = 0x0000_0302;
pub const CKA_MECHANISM_TYPE: CK_ATTRIBUTE_TYPE = 0x0000_0500;
pub const CKA_ALLOWED_MECHANISMS: CK_ATTRIBUTE_TYPE =
    CKF_ARRAY_ATTRIBUTE | 0x600;
pub const CKA_PROFILE_ID: CK_ATTRIBUTE_TYPE = 0x0000_0601;
pub const CKA_VENDOR_DEFINED: CK_ATTRIBUTE_TYPE = 0x8000_0000;

/* Mechanism types */
pub const CKM_RSA_PKCS_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x0000_0000;
pub const CKM_RSA_PKCS: CK_MECHANISM_TYPE = 0x0000_0001;
pub const CKM_RSA_PKCS_OAEP: CK_MECHANISM_TYPE = 0x0000_0009;
pub const CKM_DSA_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x0000_0010;
pub const CKM_DSA: CK_MECHANISM_TYPE = 0x0000_0011;
pub const CKM_DH_PKCS_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x0000_0020;
pub const CKM_DH_PKCS_DERIVE: CK_MECHANISM_TYPE = 0x0000_0021;
pub const CKM_X9_42_DH_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x0000_0030;
pub const CKM_DES3_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0131;
pub const CKM_SHA_1: CK_MECHANISM_TYPE = 0x0000_0220;
pub const CKM_SHA_1_HMAC: CK_MECHANISM_TYPE = 0x0000_0221;
pub const CKM_SHA_1_HMAC_GENERAL: CK_MECHANISM_TYPE = 0x0000_0222;
pub const CKM_SHA256: CK_MECHANISM_TYPE = 0x0000_0250;
pub const CKM_SHA256_HMAC: CK_MECHANISM_TYPE = 0x0000_0251;
pub const CKM_SHA256_HMAC_GENERAL: CK_MECHANISM_TYPE = 0x0000_0252;
pub const CKM_SHA224: CK_MECHANISM_TYPE = 0x0000_0255;
pub const CKM_SHA384: CK_MECHANISM_TYPE = 0x0000_0260;
pub const CKM_SHA512: CK_MECHANISM_TYPE = 0x0000_0270;
pub const CKM_GENERIC_SECRET_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0350;
pub const CKM_EC_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x0000_1040;
pub const CKM_ECDSA: CK_MECHANISM_TYPE = 0x0000_1041;
pub const CKM_ECDH1_DERIVE: CK_MECHANISM_TYPE = 0x0000_1050;
pub const CKM_ECDH1_COFACTOR_DERIVE: CK_MECHANISM_TYPE = 0x0000_1051;
pub const CKM_ECMQV_DERIVE: CK_MECHANISM_TYPE = 0x0000_1052;
pub const CKM_RSA_AES_KEY_WRAP: CK_MECHANISM_TYPE = 0x0000_1054;
pub const CKM_AES_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_1080;
pub const CKM_AES_ECB: CK_MECHANISM_TYPE = 0x0000_1081;
pub const CKM_AES_CBC: CK_MECHANISM_TYPE = 0x0000_1082;
pub const CKM_AES_MAC: CK_MECHANISM_TYPE = 0x0000_1083;
pub const CKM_AES_MAC_GENERAL: CK_MECHANISM_TYPE = 0x0000_1084;
pub const CKM_AES_GCM: CK_MECHANISM_TYPE = 0x0000_1087;
pub const CKM_AES_CMAC: CK_MECHANISM_TYPE = 0x0000_108A;
pub const CKM_AES_CMAC_GENERAL: CK_MECHANISM_TYPE = 0x0000_108B;
pub const CKM_VENDOR_DEFINED: CK_MECHANISM_TYPE = 0x8000_0000;

/* EC key derivation functions */
pub const CKD_NULL: CK_EC_KDF_TYPE = 0x0000_0001;
pub const CKD_SHA1_KDF: CK_EC_KDF_TYPE = 0x0000_0002;
pub const CKD_SHA1_KDF_ASN1: CK_EC_KDF_TYPE = 0x0000_0003;
pub const CKD_SHA1_KDF_CONCATENATE: CK_EC_KDF_TYPE = 0x0000_0004;
pub const CKD_SHA224_KDF: CK_EC_KDF_TYPE = 0x0000_0005;
pub const CKD_SHA256_KDF: CK_EC_KDF_TYPE = 0x0000_0006;
pub const CKD_SHA384_KDF: CK_EC_KDF_TYPE = 0x0000_0007;
pub const CKD_SHA512_KDF: CK_EC_KDF_TYPE = 0x0000_0008;
pub const CKD_CPDIVERSIFY_KDF: CK_EC_KDF_TYPE = 0x0000_0009;
pub const CKD_SHA3_224_KDF: CK_EC_KDF_TYPE = 0x0000_000A;
pub const CKD_SHA3_256_KDF: CK_EC_KDF_TYPE = 0x0000_000B;
pub const CKD_SHA3_384_KDF: CK_EC_KDF_TYPE = 0x0000_000C;
pub const CKD_SHA3_512_KDF: CK_EC_KDF_TYPE = 0x0000_000D;
pub const CKD_SHA1_KDF_SP800: CK_EC_KDF_TYPE = 0x0000_000E;
pub const CKD_SHA224_KDF_SP800: CK_EC_KDF_TYPE = 0x0000_000F;
pub const CKD_SHA256_KDF_SP800: CK_EC_KDF_TYPE = 0x0000_0010;
pub const CKD_SHA384_KDF_SP800: CK_EC_KDF_TYPE = 0x0000_0011;
pub const CKD_SHA512_KDF_SP800: CK_EC_KDF_TYPE = 0x0000_0012;
pub const CKD_SHA3_224_KDF_SP800: CK_EC_KDF_TYPE = 0x0000_0013;
pub const CKD_SHA3_256_KDF_SP800: CK_EC_KDF_TYPE = 0x0000_0014;
pub const CKD_SHA3_384_KDF_SP800: CK_EC_KDF_TYPE = 0x0000_0015;
pub const CKD_SHA3_512_KDF_SP800: CK_EC_KDF_TYPE = 0x0000_0016;
pub const CKD_BLAKE2B_160_KDF: CK_EC_KDF_TYPE = 0x0000_0017;
pub const CKD_BLAKE2B_256_KDF: CK_EC_KDF_TYPE = 0x0000_0018;
pub const CKD_BLAKE2B_384_KDF: CK_EC_KDF_TYPE = 0x0000_0019;
pub const CKD_BLAKE2B_512_KDF: CK_EC_KDF_TYPE = 0x0000_001A;

/* IV generator functions */
pub const CKG_NO_GENERATE: CK_GENERATOR_FUNCTION = 0x0000_0000;
pub const CKG_GENERATE: CK_GENERATOR_FUNCTION = 0x0000_0001;
pub const CKG_GENERATE_COUNTER: CK_GENERATOR_FUNCTION = 0x0000_0002;
pub const CKG_GENERATE_RANDOM: CK_GENERATOR_FUNCTION = 0x0000_0003;
pub const CKG_GENERATE_COUNTER_XOR: CK_GENERATOR_FUNCTION = 0x0000_0004;

/* Mask generation functions */
pub const CKG_MGF1_SHA1: CK_RSA_PKCS_MGF_TYPE = 0x0000_0001;
pub const CKG_MGF1_SHA256: CK_RSA_PKCS_MGF_TYPE = 0x0000_0002;
pub const CKG_MGF1_SHA384: CK_RSA_PKCS_MGF_TYPE = 0x0000_0003;
pub const CKG_MGF1_SHA512: CK_RSA_PKCS_MGF_TYPE = 0x0000_0004;
pub const CKG_MGF1_SHA224: CK_RSA_PKCS_MGF_TYPE = 0x0000_0005;

pub const CKZ_DATA_SPECIFIED: CK_RSA_PKCS_OAEP_SOURCE_TYPE = 0x0000_0001;

/* Token information flags */
pub const CKF_RNG: CK_FLAGS = 0x0000_0001;
pub const CKF_WRITE_PROTECTED: CK_FLAGS = 0x0000_0002;
pub const CKF_LOGIN_REQUIRED: CK_FLAGS = 0x0000_0004;
pub const CKF_USER_PIN_INITIALIZED: CK_FLAGS = 0x0000_0008;
pub const CKF_RESTORE_KEY_NOT_NEEDED: CK_FLAGS = 0x0000_0020;
pub const CKF_CLOCK_ON_TOKEN: CK_FLAGS = 0x0000_0040;
pub const CKF_PROTECTED_AUTHENTICATION_PATH: CK_FLAGS = 0x0000_0100;
pub const CKF_DUAL_CRYPTO_OPERATIONS: CK_FLAGS = 0x0000_0200;
pub const CKF_TOKEN_INITIALIZED: CK_FLAGS = 0x0000_0400;
pub const CKF_SECONDARY_AUTHENTICATION: CK_FLAGS = 0x0000_0800;
pub const CKF_USER_PIN_COUNT_LOW: CK_FLAGS = 0x0001_0000;
pub const CKF_USER_PIN_FINAL_TRY: CK_FLAGS = 0x0002_0000;
pub const CKF_USER_PIN_LOCKED: CK_FLAGS = 0x0004_0000;
pub const CKF_USER_PIN_TO_BE_CHANGED: CK_FLAGS = 0x0008_0000;
pub const CKF_SO_PIN_COUNT_LOW: CK_FLAGS = 0x0010_0000;
pub const CKF_SO_PIN_FINAL_TRY: CK_FLAGS = 0x0020_0000;
pub const CKF_SO_PIN_LOCKED: CK_FLAGS = 0x0040_0000;
pub const CKF_SO_PIN_TO_BE_CHANGED: CK_FLAGS = 0x0080_0000;
pub const CKF_ERROR_STATE: CK_FLAGS = 0x0100_0000;

/* Mechanism information flags */
pub const CKF_HW: CK_FLAGS = 0x0000_0001;
pub const CKF_MESSAGE_ENCRYPT: CK_FLAGS = 0x0000_0002;
pub const CKF_MESSAGE_DECRYPT: CK_FLAGS = 0x0000_0004;
pub const CKF_MESSAGE_SIGN: CK_FLAGS = 0x0000_0008;
pub const CKF_MESSAGE_VERIFY: CK_FLAGS = 0x0000_0010;
pub const CKF_MULTI_MESSAGE: CK_FLAGS = 0x0000_0020;
pub const CKF_FIND_OBJECTS: CK_FLAGS = 0x0000_0040;
pub const CKF_ENCRYPT: CK_FLAGS = 0x0000_0100;
pub const CKF_DECRYPT: CK_FLAGS = 0x0000_0200;
pub const CKF_DIGEST: CK_FLAGS = 0x0000_0400;
pub const CKF_SIGN: CK_FLAGS = 0x0000_0800;
pub const CKF_SIGN_RECOVER: CK_FLAGS = 0x0000_1000;
pub const CKF_VERIFY: CK_FLAGS = 0x0000_2000;
pub const CKF_VERIFY_RECOVER: CK_FLAGS = 0x0000_4000;
pub const CKF_GENERATE: CK_FLAGS = 0x0000_8000;
pub const CKF_GENERATE_KEY_PAIR: CK_FLAGS = 0x0001_0000;
pub const CKF_WRAP: CK_FLAGS = 0x0002_0000;
pub const CKF_UNWRAP: CK_FLAGS = 0x0004_0000;
pub const CKF_DERIVE: CK_FLAGS = 0x0008_0000;
pub const CKF_EC_F_P: CK_FLAGS = 0x0010_0000;
pub const CKF_EC_F_2M: CK_FLAGS = 0x0020_0000;
pub const CKF_EC_ECPARAMETERS: CK_FLAGS = 0x0040_0000;
pub const CKF_EC_OID: CK_FLAGS = 0x0080_0000;
pub const CKF_EC_UNCOMPRESS: CK_FLAGS = 0x0100_0000;
pub const CKF_EC_COMPRESS: CK_FLAGS = 0x0200_0000;
pub const CKF_EC_CURVENAME: CK_FLAGS = 0x0400_0000;

/* Return values */
pub const CKR_OK: CK_RV = 0x0000_0000;
pub const CKR_CANCEL: CK_RV = 0x0000_0001;
pub const CKR_HOST_MEMORY: CK_RV = 0x0000_0002;
pub const CKR_SLOT_ID_INVALID: CK_RV = 0x0000_0003;
pub const CKR_GENERAL_ERROR: CK_RV = 0x0000_0005;
pub const CKR_FUNCTION_FAILED: CK_RV = 0x0000_0006;
pub const CKR_ARGUMENTS_BAD: CK_RV = 0x0000_0007;
pub const CKR_ATTRIBUTE_READ_ONLY: CK_RV = 0x0000_0010;
pub const CKR_ATTRIBUTE_SENSITIVE: CK_RV = 0x0000_0011;
pub const CKR_ATTRIBUTE_TYPE_INVALID: CK_RV = 0x0000_0012;
pub const CKR_ATTRIBUTE_VALUE_INVALID: CK_RV = 0x0000_0013;
pub const CKR_DEVICE_ERROR: CK_RV = 0x0000_0030;
pub const CKR_DEVICE_MEMORY: CK_RV = 0x0000_0031;
pub const CKR_DEVICE_REMOVED: CK_RV = 0x0000_0032;
pub const CKR_FUNCTION_NOT_SUPPORTED: CK_RV = 0x0000_0054;
pub const CKR_KEY_HANDLE_INVALID: CK_RV = 0x0000_0060;
pub const CKR_MECHANISM_INVALID: CK_RV = 0x0000_0070;
pub const CKR_MECHANISM_PARAM_INVALID: CK_RV = 0x0000_0071;
pub const CKR_OBJECT_HANDLE_INVALID: CK_RV = 0x0000_0082;
pub const CKR_SESSION_CLOSED: CK_RV = 0x0000_00B0;
pub const CKR_SESSION_HANDLE_INVALID: CK_RV = 0x0000_00B3;
pub const CKR_TEMPLATE_INCOMPLETE: CK_RV = 0x0000_00D0;
pub const CKR_TEMPLATE_INCONSISTENT: CK_RV = 0x0000_00D1;
pub const CKR_USER_NOT_LOGGED_IN: CK_RV = 0x0000_0101;
pub const CKR_BUFFER_TOO_SMALL: CK_RV = 0x0000_0150;
pub const CKR_CRYPTOKI_NOT_INITIALIZED: CK_RV = 0x0000_0190;
pub const CKR_VENDOR_DEFINED: CK_RV = 0x8000_0000;
