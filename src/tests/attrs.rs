// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use super::tests;
use tests::*;

use serial_test::parallel;

#[test]
#[parallel]
fn test_attr_clone_is_independent() {
    let orig = Attribute::from_bytes(CKA_PRIME, vec![1, 2, 3, 4]);
    let mut copy = orig.clone();
    assert_eq!(orig, copy);

    ret_or_panic!(copy.set_bytes(vec![9, 9]));
    assert_ne!(orig, copy);
    assert_eq!(ret_or_panic!(orig.to_bytes()), &vec![1, 2, 3, 4]);
}

#[test]
#[parallel]
fn test_attr_accessors() {
    let attr = Attribute::from_bool(CKA_TOKEN, true);
    assert_eq!(ret_or_panic!(attr.to_bool()), true);
    let err = attr.to_ulong().unwrap_err();
    assert_eq!(err.rv(), CKR_ATTRIBUTE_TYPE_INVALID);

    let attr = Attribute::from_string(CKA_LABEL, "my key".to_string());
    assert_eq!(ret_or_panic!(attr.to_str()), "my key");

    let attr = Attribute::from_ulong_array(
        CKA_ALLOWED_MECHANISMS,
        vec![CKM_AES_GCM, CKM_ECDH1_DERIVE],
    );
    assert_eq!(
        ret_or_panic!(attr.to_ulong_array()),
        &vec![CKM_AES_GCM, CKM_ECDH1_DERIVE]
    );

    /* setting a value of the wrong kind is refused */
    let mut attr = Attribute::new(CKA_VALUE_LEN, AttrType::NumType);
    assert!(attr.set_bool(true).is_err());
    assert!(!attr.is_present());
}

#[test]
#[parallel]
fn test_attr_zeroize() {
    let mut attr = Attribute::from_string(CKA_LABEL, "secret".to_string());
    attr.zeroize();
    assert_eq!(ret_or_panic!(attr.to_str()), "\0\0\0\0\0\0");

    let mut attr = Attribute::from_bytes(CKA_VALUE, vec![0x2b; 4]);
    attr.zeroize();
    assert_eq!(ret_or_panic!(attr.to_bytes()), &vec![0u8; 4]);

    let mut attr = Attribute::from_template(
        CKA_WRAP_TEMPLATE,
        vec![Attribute::from_string(CKA_LABEL, "kek".to_string())],
    );
    attr.zeroize();
    let members = ret_or_panic!(attr.to_template());
    assert_eq!(ret_or_panic!(members[0].to_str()), "\0\0\0");
}

#[test]
#[parallel]
fn test_attr_absent_and_sensitive() {
    let mut attr = Attribute::new(CKA_VALUE, AttrType::BytesType);
    let err = attr.to_bytes().unwrap_err();
    assert!(err.value_not_present());
    assert_eq!(attr.to_string(), "<not present>");

    attr.mark_sensitive();
    assert!(attr.is_sensitive());
    assert!(!attr.is_present());
    let err = attr.to_bytes().unwrap_err();
    assert!(err.value_not_present());
    assert_eq!(err.rv(), CKR_ATTRIBUTE_SENSITIVE);
    assert_eq!(attr.to_string(), "<sensitive>");

    /* two absent attributes with the same id compare equal */
    assert_eq!(
        Attribute::new(CKA_VALUE, AttrType::BytesType),
        Attribute::new(CKA_VALUE, AttrType::BytesType)
    );
}

#[test]
#[parallel]
fn test_attr_rendering() {
    let attr = Attribute::from_bytes(CKA_ID, hex::decode("00ff10").unwrap());
    assert_eq!(attr.to_string(), "00ff10");

    let attr = Attribute::from_mechanism(CKA_KEY_GEN_MECHANISM, CKM_AES_GCM);
    assert_eq!(attr.to_string(), "0x00001087");

    let attr = Attribute::from_ulong(CKA_VALUE_LEN, 255);
    assert_eq!(attr.to_string(), "255");
    assert_eq!(attr.to_string_radix(16), "ff");
    assert_eq!(attr.to_string_radix(2), "11111111");

    let attr =
        Attribute::from_date(CKA_START_DATE, CK_DATE::from_digits(b"20250131"));
    assert_eq!(attr.to_string(), "2025-01-31");
    assert_eq!(ret_or_panic!(attr.to_date_string()), "2025-01-31");

    let attr = Attribute::from_template(
        CKA_WRAP_TEMPLATE,
        vec![
            Attribute::from_bool(CKA_TOKEN, false),
            Attribute::from_ulong(CKA_VALUE_LEN, 32),
        ],
    );
    assert_eq!(attr.to_string(), "[CKA_TOKEN: false, CKA_VALUE_LEN: 32]");
}

#[test]
#[parallel]
fn test_attr_from_raw() {
    let mut attr = Attribute::new(CKA_VALUE_LEN, AttrType::NumType);
    ret_or_panic!(attr.set_from_raw(&ulong_raw(24)));
    assert_eq!(ret_or_panic!(attr.to_ulong()), 24);

    /* a truncated buffer leaves the value untouched */
    let err = attr.set_from_raw(&[1, 2]).unwrap_err();
    assert_eq!(err.rv(), CKR_ATTRIBUTE_VALUE_INVALID);
    assert_eq!(ret_or_panic!(attr.to_ulong()), 24);

    let mut attr = Attribute::new(CKA_LABEL, AttrType::StringType);
    assert!(attr.set_from_raw(&[0xff, 0xfe]).is_err());
    assert!(!attr.is_present());

    /* unknown members of nested templates are kept as bytes */
    let mut attr = Attribute::new(CKA_WRAP_TEMPLATE, AttrType::AttrArrayType);
    ret_or_panic!(attr.set_template_from_raw(&[
        (CKA_TOKEN, bool_raw(true)),
        (CKA_VENDOR_DEFINED | 5, vec![0xaa, 0xbb]),
    ]));
    let members = ret_or_panic!(attr.to_template());
    assert_eq!(members.len(), 2);
    assert_eq!(ret_or_panic!(members[0].to_bool()), true);
    assert_eq!(members[1].get_attrtype(), AttrType::BytesType);
    assert_eq!(ret_or_panic!(members[1].to_bytes()), &vec![0xaa, 0xbb]);
}

#[test]
#[parallel]
fn test_ck_attrs_encoding() {
    let mut tmpl = CkAttrs::new();
    ret_or_panic!(tmpl.add_attribute(&Attribute::from_ulong(CKA_CLASS, 3)));
    ret_or_panic!(tmpl.add_attribute(&Attribute::new(
        CKA_LABEL,
        AttrType::StringType
    )));
    ret_or_panic!(tmpl.add_attribute(&Attribute::from_template(
        CKA_WRAP_TEMPLATE,
        vec![Attribute::from_bool(CKA_EXTRACTABLE, true)],
    )));
    /* absent values are skipped */
    assert_eq!(tmpl.len(), 2);
    assert!(tmpl.find_attr(CKA_LABEL).is_none());

    let class = tmpl.find_attr(CKA_CLASS).unwrap();
    assert_eq!(class.ulValueLen as usize, std::mem::size_of::<CK_ULONG>());
    let val = unsafe { *(class.pValue as *const CK_ULONG) };
    assert_eq!(val, 3);

    let nested = tmpl.find_attr(CKA_WRAP_TEMPLATE).unwrap();
    assert_eq!(
        nested.ulValueLen as usize,
        std::mem::size_of::<CK_ATTRIBUTE>()
    );
    let member = unsafe { &*(nested.pValue as *const CK_ATTRIBUTE) };
    assert_eq!(member.type_, CKA_EXTRACTABLE);
    assert_eq!(unsafe { *(member.pValue as *const CK_BBOOL) }, CK_TRUE);
}
