// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::tests;
use tests::*;

use crate::config::Render;
use crate::object::ObjectKind;
use serial_test::parallel;

fn hash_of(obj: &Object) -> u64 {
    let mut hasher = DefaultHasher::new();
    obj.hash(&mut hasher);
    hasher.finish()
}

const ALL_KINDS: [ObjectKind; 22] = [
    ObjectKind::Data,
    ObjectKind::X509Certificate,
    ObjectKind::WtlsCertificate,
    ObjectKind::X509AttributeCertificate,
    ObjectKind::GenericSecretKey,
    ObjectKind::AesSecretKey,
    ObjectKind::Des3SecretKey,
    ObjectKind::RsaPublicKey,
    ObjectKind::RsaPrivateKey,
    ObjectKind::DsaPublicKey,
    ObjectKind::DsaPrivateKey,
    ObjectKind::EcPublicKey,
    ObjectKind::EcPrivateKey,
    ObjectKind::DhPublicKey,
    ObjectKind::DhPrivateKey,
    ObjectKind::X942DhPublicKey,
    ObjectKind::X942DhPrivateKey,
    ObjectKind::DsaParams,
    ObjectKind::DhParams,
    ObjectKind::X942DhParams,
    ObjectKind::MonotonicCounter,
    ObjectKind::Clock,
];

#[test]
#[parallel]
fn test_templates_set_only_discriminators() {
    for kind in ALL_KINDS {
        let obj = Object::template(kind);
        assert_eq!(obj.get_handle(), CK_INVALID_HANDLE);
        assert_eq!(ret_or_panic!(obj.get_attr_as_ulong(CKA_CLASS)), kind.class());
        let subtype_attr = ObjectKind::subtype_attr(kind.class());
        if let (Some(t), Some(val)) = (subtype_attr, kind.subtype()) {
            assert_eq!(ret_or_panic!(obj.get_attr_as_ulong(t)), val);
        }
        for attr in obj.get_attributes().iter() {
            let t = attr.get_type();
            if t == CKA_CLASS || Some(t) == subtype_attr {
                continue;
            }
            assert!(!attr.is_present(), "{} set in {}", attr.name(), kind.name());
        }
        /* the kind can be recovered from its discriminators */
        assert_eq!(
            ret_or_panic!(ObjectKind::from_discriminators(
                kind.class(),
                kind.subtype()
            )),
            kind
        );
    }
}

#[test]
#[parallel]
fn test_dsa_public_key_template() {
    let mut key = Object::template(ObjectKind::DsaPublicKey);
    ret_or_panic!(key.set_bytes(CKA_PRIME, hex::decode("d38311e2cd").unwrap()));
    ret_or_panic!(key.set_bytes(CKA_SUBPRIME, hex::decode("c773218c").unwrap()));
    ret_or_panic!(key.set_bytes(CKA_BASE, hex::decode("e4a5b3").unwrap()));
    ret_or_panic!(key.set_bytes(CKA_VALUE, hex::decode("0102").unwrap()));
    ret_or_panic!(key.set_bool(CKA_VERIFY, true));

    let mut copy = key.clone();
    assert_eq!(key, copy);
    assert_eq!(hash_of(&key), hash_of(&copy));

    ret_or_panic!(copy.set_bytes(CKA_PRIME, vec![0xff; 5]));
    assert_ne!(key, copy);
    assert_eq!(
        ret_or_panic!(key.get_attr_as_bytes(CKA_PRIME)),
        &hex::decode("d38311e2cd").unwrap()
    );
    assert_eq!(ret_or_panic!(copy.get_attr_as_bytes(CKA_PRIME)), &vec![0xff; 5]);
}

#[test]
#[parallel]
fn test_subtypes_are_distinct() {
    let mut generic = Object::template(ObjectKind::GenericSecretKey);
    let mut aes = Object::template(ObjectKind::AesSecretKey);
    for obj in [&mut generic, &mut aes] {
        ret_or_panic!(obj.set_bytes(CKA_VALUE, vec![7u8; 16]));
        ret_or_panic!(obj.set_ulong(CKA_VALUE_LEN, 16));
    }
    assert_ne!(generic, aes);
}

#[test]
#[parallel]
fn test_discriminators_are_read_only() {
    let mut key = Object::template(ObjectKind::RsaPublicKey);
    let err = key.set_ulong(CKA_CLASS, CKO_PRIVATE_KEY).unwrap_err();
    assert_eq!(err.rv(), CKR_ATTRIBUTE_READ_ONLY);
    let err = key.set_ulong(CKA_KEY_TYPE, CKK_EC).unwrap_err();
    assert_eq!(err.rv(), CKR_ATTRIBUTE_READ_ONLY);
    assert!(key.unset(CKA_KEY_TYPE).is_err());
    let err = key
        .set_attr(Attribute::from_ulong(CKA_CLASS, CKO_DATA))
        .unwrap_err();
    assert_eq!(err.rv(), CKR_ATTRIBUTE_READ_ONLY);
    assert_eq!(ret_or_panic!(key.get_attr_as_ulong(CKA_KEY_TYPE)), CKK_RSA);
}

#[test]
#[parallel]
fn test_not_found_versus_not_present() {
    let key = Object::template(ObjectKind::AesSecretKey);

    /* not declared for secret keys */
    let err = key.get_attr(CKA_MODULUS).unwrap_err();
    assert!(err.attr_not_found());
    let err = key.get_attr_as_bytes(CKA_MODULUS).unwrap_err();
    assert!(err.attr_not_found());

    /* declared but unset */
    assert!(key.get_attr(CKA_VALUE).is_ok());
    let err = key.get_attr_as_bytes(CKA_VALUE).unwrap_err();
    assert!(err.value_not_present());
    assert!(!err.attr_not_found());
}

#[test]
#[parallel]
fn test_typed_setters() {
    let mut key = Object::template(ObjectKind::AesSecretKey);

    /* wrong kind for the attribute */
    let err = key.set_bool(CKA_VALUE_LEN, true).unwrap_err();
    assert_eq!(err.rv(), CKR_ATTRIBUTE_TYPE_INVALID);
    let err = key
        .set_attr(Attribute::from_string(CKA_VALUE, "nope".to_string()))
        .unwrap_err();
    assert_eq!(err.rv(), CKR_ATTRIBUTE_TYPE_INVALID);

    /* not declared for this object */
    assert!(key.set_bytes(CKA_MODULUS, vec![1]).unwrap_err().attr_not_found());

    ret_or_panic!(key.set_string(CKA_LABEL, "wrapping key".to_string()));
    ret_or_panic!(key.set_mechanism(CKA_KEY_GEN_MECHANISM, CKM_AES_KEY_GEN));
    ret_or_panic!(key.set_mechanisms(
        CKA_ALLOWED_MECHANISMS,
        vec![CKM_AES_GCM, CKM_AES_CMAC_GENERAL]
    ));
    ret_or_panic!(key.set_date(
        CKA_START_DATE,
        CK_DATE::from_digits(b"20240229")
    ));
    ret_or_panic!(key.set_template(
        CKA_WRAP_TEMPLATE,
        vec![Attribute::from_bool(CKA_EXTRACTABLE, false)]
    ));
    assert_eq!(ret_or_panic!(key.get_attr_as_string(CKA_LABEL)), "wrapping key");
    assert_eq!(
        ret_or_panic!(key.get_attr_as_ulong(CKA_KEY_GEN_MECHANISM)),
        CKM_AES_KEY_GEN
    );
    assert_eq!(
        ret_or_panic!(key.get_attr_as_ulong_array(CKA_ALLOWED_MECHANISMS)),
        &vec![CKM_AES_GCM, CKM_AES_CMAC_GENERAL]
    );
    assert_eq!(
        ret_or_panic!(key.get_attr_as_date_string(CKA_START_DATE)),
        "2024-02-29"
    );

    ret_or_panic!(key.unset(CKA_LABEL));
    assert!(key.get_attr_as_string(CKA_LABEL).unwrap_err().value_not_present());
}

#[test]
#[parallel]
fn test_boolean_defaults() {
    let mut key = Object::template(ObjectKind::AesSecretKey);
    assert!(!key.is_token());
    assert!(key.is_private());
    assert!(key.is_sensitive());
    assert!(!key.is_extractable());
    assert!(key.is_modifiable());

    ret_or_panic!(key.set_bool(CKA_TOKEN, true));
    ret_or_panic!(key.set_bool(CKA_SENSITIVE, false));
    assert!(key.is_token());
    assert!(!key.is_sensitive());
}

#[test]
#[parallel]
fn test_to_ck_template() {
    let mut key = Object::template(ObjectKind::AesSecretKey);
    let tmpl = ret_or_panic!(key.to_ck_template());
    assert_eq!(tmpl.len(), 2);
    assert!(tmpl.find_attr(CKA_CLASS).is_some());
    assert!(tmpl.find_attr(CKA_KEY_TYPE).is_some());

    ret_or_panic!(key.set_ulong(CKA_VALUE_LEN, 32));
    ret_or_panic!(key.set_bool(CKA_ENCRYPT, true));
    let tmpl = ret_or_panic!(key.to_ck_template());
    assert_eq!(tmpl.len(), 4);
    let len = tmpl.find_attr(CKA_VALUE_LEN).unwrap();
    assert_eq!(unsafe { *(len.pValue as *const CK_ULONG) }, 32);
}

#[test]
#[parallel]
fn test_render() {
    let mut data = Object::template(ObjectKind::Data);
    ret_or_panic!(data.set_string(CKA_LABEL, "notes".to_string()));
    ret_or_panic!(data.set_bytes(CKA_VALUE, vec![0xca, 0xfe]));
    ret_or_panic!(data.set_bool(CKA_TOKEN, true));

    let expected = "Data
Object:
  Class: CKO_DATA
Storage:
  Token: true
  Private: <not present>
  Modifiable: <not present>
  Label: notes
  Copyable: <not present>
  Destroyable: <not present>
  Unique ID: <not present>
Data:
  Application: <not present>
  Object ID (DER, hex): <not present>
  Value (hex): cafe";
    assert_eq!(data.to_string(), expected);

    let render = Render {
        indent: "\t".to_string(),
    };
    assert!(data.render(&render).contains("\n\tLabel: notes\n"));

    /* attributes shared by several levels are listed once */
    let key = Object::template(ObjectKind::AesSecretKey);
    let out = key.to_string();
    assert!(out.starts_with("AES Secret Key\nObject:\n  Class: CKO_SECRET_KEY"));
    assert!(out.contains("  Key Type: CKK_AES\n"));
    assert_eq!(out.matches("\n  Value (hex):").count(), 1);
}
