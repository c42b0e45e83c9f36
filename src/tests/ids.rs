// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use super::tests;
use tests::*;

use serial_test::parallel;

#[test]
#[parallel]
fn test_mechanism_ids() {
    let mechs: [(CK_MECHANISM_TYPE, CK_ULONG); 8] = [
        (CKM_RSA_PKCS_OAEP, 0x0000_0009),
        (CKM_SHA256, 0x0000_0250),
        (CKM_ECDH1_DERIVE, 0x0000_1050),
        (CKM_ECMQV_DERIVE, 0x0000_1052),
        (CKM_RSA_AES_KEY_WRAP, 0x0000_1054),
        (CKM_AES_GCM, 0x0000_1087),
        (CKM_AES_CMAC_GENERAL, 0x0000_108B),
        (CKM_SHA_1_HMAC_GENERAL, 0x0000_0222),
    ];
    for (id, val) in mechs {
        assert_eq!(id, val);
    }
}

#[test]
#[parallel]
fn test_object_discriminator_ids() {
    let ids: [(CK_ULONG, CK_ULONG); 12] = [
        (CKO_DATA, 0),
        (CKO_CERTIFICATE, 1),
        (CKO_PUBLIC_KEY, 2),
        (CKO_PRIVATE_KEY, 3),
        (CKO_SECRET_KEY, 4),
        (CKO_HW_FEATURE, 5),
        (CKO_DOMAIN_PARAMETERS, 6),
        (CKK_RSA, 0),
        (CKK_EC, 3),
        (CKK_X9_42_DH, 4),
        (CKK_AES, 0x1F),
        (CKC_WTLS, 2),
    ];
    for (id, val) in ids {
        assert_eq!(id, val);
    }
}

#[test]
#[parallel]
fn test_parameter_value_ids() {
    assert_eq!(CKD_NULL, 1);
    assert_eq!(CKD_SHA256_KDF, 6);
    assert_eq!(CKD_BLAKE2B_512_KDF, 0x1A);
    assert_eq!(CKG_MGF1_SHA1, 1);
    assert_eq!(CKG_MGF1_SHA224, 5);
    assert_eq!(CKG_GENERATE_COUNTER_XOR, 4);
    assert_eq!(CKZ_DATA_SPECIFIED, 1);
    assert_eq!(CKA_WRAP_TEMPLATE, 0x4000_0211);
    assert_eq!(CKA_ALLOWED_MECHANISMS, 0x4000_0600);
    assert_eq!(CKR_MECHANISM_PARAM_INVALID, 0x71);
    assert_eq!(CKR_ATTRIBUTE_SENSITIVE, 0x11);
}
