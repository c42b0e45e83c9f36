// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use super::tests;
use tests::*;

use crate::config::Render;
use crate::params::*;
use serial_test::parallel;

fn oaep_sha256() -> RsaPkcsOaepParams {
    RsaPkcsOaepParams::new(CKM_SHA256, CKG_MGF1_SHA256, CKZ_DATA_SPECIFIED, vec![])
}

#[test]
#[parallel]
fn test_gcm_round_trip() {
    let params = GcmMessageParams::new(
        hex::decode("cafebabefacedbaddecaf888").unwrap(),
        32,
        CKG_GENERATE_COUNTER,
        128,
    );
    let native = ret_or_panic!(params.to_native());
    assert_eq!(
        ret_or_panic!(native.len()) as usize,
        std::mem::size_of::<CK_GCM_MESSAGE_PARAMS>()
    );
    match native.record() {
        NativeRecord::GcmMessage(r) => {
            assert_eq!(r.ulIvLen, 12);
            assert_eq!(r.ulIvFixedBits, 32);
            assert_eq!(r.ivGenerator, CKG_GENERATE_COUNTER);
            assert_eq!(r.ulTagBits, 128);
            assert!(!r.pTag.is_null());
        }
        _ => panic!("wrong record"),
    }

    let mut copy = params.clone();
    ret_or_panic!(copy.refresh(&native));
    assert_eq!(copy, params);
}

#[test]
#[parallel]
fn test_gcm_refresh_reads_token_output() {
    let mut params = GcmMessageParams::new(vec![0u8; 12], 32, CKG_GENERATE, 96);
    let mut native = ret_or_panic!(params.to_native());

    /* pretend the token generated the IV and computed the tag */
    match native.record_mut() {
        NativeRecord::GcmMessage(r) => unsafe {
            for i in 0..12 {
                *r.pIv.add(i) = i as u8;
                *r.pTag.add(i) = 0xa0 + i as u8;
            }
        },
        _ => panic!("wrong record"),
    }
    ret_or_panic!(params.refresh(&native));
    assert_eq!(params.iv(), &hex::decode("000102030405060708090a0b").unwrap()[..]);
    assert_eq!(params.tag(), &hex::decode("a0a1a2a3a4a5a6a7a8a9aaab").unwrap()[..]);
    assert_eq!(params.tag_bits(), 96);
}

#[test]
#[parallel]
fn test_gcm_validation() {
    /* empty IV */
    let p = GcmMessageParams::new(vec![], 0, CKG_NO_GENERATE, 128);
    assert_eq!(p.to_native().unwrap_err().kind(), ErrorKind::ParamInvalid);
    /* more fixed bits than the IV holds */
    let p = GcmMessageParams::new(vec![0u8; 12], 97, CKG_GENERATE, 128);
    assert_eq!(p.to_native().unwrap_err().rv(), CKR_MECHANISM_PARAM_INVALID);
    /* unknown generator */
    let p = GcmMessageParams::new(vec![0u8; 12], 0, 42, 128);
    assert!(p.to_native().is_err());
    /* tag longer than 16 bytes */
    let p =
        GcmMessageParams::with_tag(vec![0u8; 12], 0, CKG_NO_GENERATE, vec![0u8; 17]);
    assert!(p.to_native().is_err());
}

#[test]
#[parallel]
fn test_gcm_bad_tag_lengths() {
    for bits in [8, 96, 128] {
        let p = GcmMessageParams::new(vec![0u8; 12], 0, CKG_NO_GENERATE, bits);
        assert!(p.to_native().is_ok());
    }
    for bits in [4, 127, 129, 256, CK_ULONG::MAX / 2, CK_ULONG::MAX] {
        let p = GcmMessageParams::new(vec![0u8; 12], 0, CKG_NO_GENERATE, bits);
        let mech = Mechanism::with_params(CKM_AES_GCM, p);
        let err = mech.to_native().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParamInvalid);
        assert_eq!(err.rv(), CKR_MECHANISM_PARAM_INVALID);
    }
}

#[test]
#[parallel]
fn test_refresh_rejects_other_records() {
    let gcm = GcmMessageParams::new(vec![1u8; 12], 0, CKG_NO_GENERATE, 128);
    let mut other = gcm.clone();
    let mac = ret_or_panic!(MacGeneralParams::new(16).to_native());
    let err = other.refresh(&mac).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParamInvalid);
    assert_eq!(other, gcm);

    let mut mac_params = MacGeneralParams::new(16);
    let gcm_native = ret_or_panic!(gcm.to_native());
    assert!(mac_params.refresh(&gcm_native).is_err());
    assert_eq!(mac_params.mac_length(), 16);
}

#[test]
#[parallel]
fn test_mac_general() {
    let params = MacGeneralParams::new(20);
    let native = ret_or_panic!(params.to_native());
    assert_eq!(
        ret_or_panic!(native.len()) as usize,
        std::mem::size_of::<CK_ULONG>()
    );
    let val = unsafe { *(native.as_void_ptr() as *const CK_ULONG) };
    assert_eq!(val, 20);
}

#[test]
#[parallel]
fn test_ecdh1_derive() {
    let peer = hex::decode("04a1b2c3d4").unwrap();
    let params = EcDh1DeriveParams::new(CKD_NULL, vec![], peer.clone());
    let native = ret_or_panic!(params.to_native());
    match native.record() {
        NativeRecord::EcDh1Derive(r) => {
            assert!(r.pSharedData.is_null());
            assert_eq!(r.ulSharedDataLen, 0);
            assert_eq!(r.ulPublicDataLen as usize, peer.len());
        }
        _ => panic!("wrong record"),
    }
    let mut copy = params.clone();
    ret_or_panic!(copy.refresh(&native));
    assert_eq!(copy, params);

    /* shared data is not allowed without a kdf */
    let p = EcDh1DeriveParams::new(CKD_NULL, vec![1, 2], peer.clone());
    assert!(p.to_native().is_err());
    let p = EcDh1DeriveParams::new(CKD_SHA256_KDF, vec![1, 2], peer.clone());
    assert!(p.to_native().is_ok());
    /* public data is mandatory */
    let p = EcDh1DeriveParams::new(CKD_SHA256_KDF, vec![], vec![]);
    assert!(p.to_native().is_err());
    /* unknown kdf */
    let p = EcDh1DeriveParams::new(0x1000, vec![], peer);
    assert!(p.to_native().is_err());
}

#[test]
#[parallel]
fn test_ecmqv_derive() {
    let params = EcMqvDeriveParams::new(
        CKD_SHA1_KDF,
        b"shared".to_vec(),
        hex::decode("04aabb").unwrap(),
        32,
        7,
        hex::decode("04ccdd").unwrap(),
        8,
    );
    let native = ret_or_panic!(params.to_native());
    match native.record() {
        NativeRecord::EcMqvDerive(r) => {
            assert_eq!(r.hPrivateData, 7);
            assert_eq!(r.publicKey, 8);
            assert_eq!(r.ulPublicDataLen2, 3);
            assert_eq!(r.ulSharedDataLen, 6);
        }
        _ => panic!("wrong record"),
    }
    let mut copy = params.clone();
    ret_or_panic!(copy.refresh(&native));
    assert_eq!(copy, params);

    let p = EcMqvDeriveParams::new(
        CKD_SHA1_KDF,
        vec![],
        vec![4],
        32,
        CK_INVALID_HANDLE,
        vec![4],
        8,
    );
    assert!(p.to_native().is_err());
    let p = EcMqvDeriveParams::new(CKD_SHA1_KDF, vec![], vec![4], 32, 7, vec![], 8);
    assert!(p.to_native().is_err());
}

#[test]
#[parallel]
fn test_rsa_aes_key_wrap() {
    let params = RsaAesKeyWrapParams::new(256, oaep_sha256());
    let native = ret_or_panic!(params.to_native());
    match native.record() {
        NativeRecord::RsaAesKeyWrap(r) => {
            assert_eq!(r.ulAESKeyBits, 256);
            assert!(!r.pOAEPParams.is_null());
            let oaep = unsafe { &*r.pOAEPParams };
            assert_eq!(oaep.hashAlg, CKM_SHA256);
            assert_eq!(oaep.mgf, CKG_MGF1_SHA256);
            assert_eq!(oaep.source, CKZ_DATA_SPECIFIED);
        }
        _ => panic!("wrong record"),
    }
    let mut copy = params.clone();
    ret_or_panic!(copy.refresh(&native));
    assert_eq!(copy, params);

    /* source data is copied into the nested record */
    let labeled = RsaAesKeyWrapParams::new(
        192,
        RsaPkcsOaepParams::new(
            CKM_SHA384,
            CKG_MGF1_SHA384,
            CKZ_DATA_SPECIFIED,
            b"label".to_vec(),
        ),
    );
    let native = ret_or_panic!(labeled.to_native());
    match native.record() {
        NativeRecord::RsaAesKeyWrap(r) => {
            let oaep = unsafe { &*r.pOAEPParams };
            assert_eq!(oaep.ulSourceDataLen, 5);
            let data = unsafe {
                std::slice::from_raw_parts(oaep.pSourceData as *const u8, 5)
            };
            assert_eq!(data, b"label");
        }
        _ => panic!("wrong record"),
    }

    /* the nested parameters are owned, not shared */
    let other = RsaAesKeyWrapParams::new(
        256,
        RsaPkcsOaepParams::new(CKM_SHA_1, CKG_MGF1_SHA1, 0, vec![]),
    );
    assert_ne!(other, params);
    assert_eq!(params.oaep(), &oaep_sha256());
}

#[test]
#[parallel]
fn test_rsa_aes_key_wrap_bad_bits() {
    for bits in [0, 64, 127, 512] {
        let params = RsaAesKeyWrapParams::new(bits, oaep_sha256());
        let err = params.to_native().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParamInvalid);
        assert_eq!(err.rv(), CKR_MECHANISM_PARAM_INVALID);
    }

    /* nested parameters are validated too */
    let params = RsaAesKeyWrapParams::new(
        128,
        RsaPkcsOaepParams::new(CKM_AES_GCM, CKG_MGF1_SHA256, 0, vec![]),
    );
    assert!(params.to_native().is_err());
}

#[test]
#[parallel]
fn test_oaep_source_data() {
    let p = RsaPkcsOaepParams::new(
        CKM_SHA256,
        CKG_MGF1_SHA256,
        CKZ_DATA_SPECIFIED,
        b"label".to_vec(),
    );
    let native = ret_or_panic!(p.to_native());
    let mut copy = RsaPkcsOaepParams::new(CKM_SHA_1, CKG_MGF1_SHA1, 0, vec![]);
    ret_or_panic!(copy.refresh(&native));
    assert_eq!(copy, p);

    let p = RsaPkcsOaepParams::new(CKM_SHA256, CKG_MGF1_SHA256, 0, b"x".to_vec());
    assert!(p.to_native().is_err());
    let p = RsaPkcsOaepParams::new(CKM_SHA256, 9, CKZ_DATA_SPECIFIED, vec![]);
    assert!(p.to_native().is_err());
}

#[test]
#[parallel]
fn test_mechanism_to_native() {
    let mech = Mechanism::with_params(
        CKM_AES_GCM,
        GcmMessageParams::new(vec![9u8; 12], 0, CKG_NO_GENERATE, 128),
    );
    let native = ret_or_panic!(mech.to_native());
    let ck = native.as_ck_mechanism();
    assert_eq!(ck.mechanism, CKM_AES_GCM);
    assert_eq!(
        ck.ulParameterLen as usize,
        std::mem::size_of::<CK_GCM_MESSAGE_PARAMS>()
    );
    let gcm = unsafe { &*(ck.pParameter as *const CK_GCM_MESSAGE_PARAMS) };
    assert_eq!(gcm.ulIvLen, 12);
    assert_eq!(gcm.ulTagBits, 128);

    let mut copy = mech.clone();
    ret_or_panic!(copy.refresh(&native));
    assert_eq!(copy, mech);

    let plain = Mechanism::new(CKM_SHA256);
    let native = ret_or_panic!(plain.to_native());
    assert!(native.as_ck_mechanism().pParameter.is_null());
    assert_eq!(native.as_ck_mechanism().ulParameterLen, 0);

    /* validation errors surface when building the native mechanism */
    let bad = Mechanism::with_params(
        CKM_RSA_AES_KEY_WRAP,
        RsaAesKeyWrapParams::new(100, oaep_sha256()),
    );
    assert!(bad.to_native().is_err());
}

#[test]
#[parallel]
fn test_params_rendering() {
    let params = MacGeneralParams::new(16);
    assert_eq!(params.to_string(), "MAC General Parameters:\n  MAC Length: 16");

    let params = EcDh1DeriveParams::new(CKD_NULL, vec![], vec![0x04, 0x01]);
    assert_eq!(
        params.to_string(),
        "EC-DH1 Derive Parameters:\n  kdf: 0x00000001\n  Shared Data: <none>\n  Public Data: 0401"
    );

    let mech = Mechanism::with_params(
        CKM_RSA_AES_KEY_WRAP,
        RsaAesKeyWrapParams::new(128, oaep_sha256()),
    );
    let out = mech.to_string();
    assert!(out.starts_with("Mechanism: 0x00001054\nRSA AES Key Wrap Parameters:"));
    assert!(out.contains("\n    Hash: 0x00000250"));

    /* the configured indent applies to every level */
    let render = Render {
        indent: "\t".to_string(),
    };
    let out = mech.render(&render);
    assert!(out.contains("\n\tAES Key Bits: 128\n\tRSA PKCS OAEP Parameters:"));
    assert!(out.contains("\n\t\tHash: 0x00000250"));
    assert_eq!(
        Params::from(MacGeneralParams::new(16)).render(&render),
        "MAC General Parameters:\n\tMAC Length: 16"
    );
}
