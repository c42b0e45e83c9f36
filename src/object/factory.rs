// Copyright 2023-2026 Simo Sorce
// See LICENSE.txt file for terms

//! Static attribute declarations for every object level and the
//! [ObjectKind] registry that maps the class and subtype discriminators
//! found on a token to the chain of levels an object is made of.

use std::fmt::Debug;

use crate::attribute::AttrType;
use crate::error::{Error, Result};
use crate::pkcs11::*;

use super::certs::*;
use super::domain::*;
use super::hwfeature::*;
use super::key::*;

use bitflags::bitflags;

bitflags! {
    /// A bitflag set that defines attribute properties and behaviors
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OAFlags: u32 {
        /// The attribute identifies the object class or subtype, it is
        /// set when the object is constructed and can never change
        const Discriminator = 0x00000001;

        /// The attribute holds secret material (like a key secret value)
        /// and is wiped from memory when the object is dropped
        const Sensitive     = 0x00000002;
    }
}

/// Declares one attribute of an object level
///
/// Holds the attribute id, the kind of value it stores, the label used
/// when rendering objects and the attribute properties.
#[derive(Debug, Clone, Copy)]
pub struct ObjectAttr {
    id: CK_ATTRIBUTE_TYPE,
    atype: AttrType,
    label: &'static str,
    flags: OAFlags,
}

impl ObjectAttr {
    /// Creates a new ObjectAttr
    pub const fn new(
        id: CK_ATTRIBUTE_TYPE,
        atype: AttrType,
        label: &'static str,
        flags: OAFlags,
    ) -> ObjectAttr {
        ObjectAttr {
            id: id,
            atype: atype,
            label: label,
            flags: flags,
        }
    }

    /// Gets the internal attribute id (type)
    pub fn get_type(&self) -> CK_ATTRIBUTE_TYPE {
        self.id
    }

    pub fn get_attrtype(&self) -> AttrType {
        self.atype
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Check if a specific flag is present on the ObjectAttr
    pub fn is(&self, val: OAFlags) -> bool {
        if val.is_empty() {
            return false;
        }
        self.flags.contains(val)
    }
}

/// Helper to quickly declare an ObjectAttr element
macro_rules! attr_decl {
    ($id:expr; $atype:ident; $label:expr) => {
        $crate::object::factory::ObjectAttr::new(
            $id,
            $crate::attribute::AttrType::$atype,
            $label,
            $crate::object::factory::OAFlags::empty(),
        )
    };
    ($id:expr; $atype:ident; $label:expr; $flags:ident) => {
        $crate::object::factory::ObjectAttr::new(
            $id,
            $crate::attribute::AttrType::$atype,
            $label,
            $crate::object::factory::OAFlags::$flags,
        )
    };
}
pub(crate) use attr_decl;

/// One level of the object hierarchy: a name and the attributes it adds
/// on top of its parent levels
#[derive(Debug, Clone, Copy)]
pub struct ObjectLevel {
    name: &'static str,
    attrs: &'static [ObjectAttr],
}

impl ObjectLevel {
    pub const fn new(
        name: &'static str,
        attrs: &'static [ObjectAttr],
    ) -> ObjectLevel {
        ObjectLevel {
            name: name,
            attrs: attrs,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn attrs(&self) -> &'static [ObjectAttr] {
        self.attrs
    }
}

/// The attributes common to every object
///
/// [Common attributes](https://docs.oasis-open.org/pkcs11/pkcs11-spec/v3.1/os/pkcs11-spec-v3.1-os.html#_Toc111203216)
pub const OBJECT_LEVEL: ObjectLevel = ObjectLevel::new(
    "Object",
    &[attr_decl!(CKA_CLASS; NumType; "Class"; Discriminator)],
);

/// The attributes common to all storage objects
pub const STORAGE_LEVEL: ObjectLevel = ObjectLevel::new(
    "Storage",
    &[
        attr_decl!(CKA_TOKEN; BoolType; "Token"),
        attr_decl!(CKA_PRIVATE; BoolType; "Private"),
        attr_decl!(CKA_MODIFIABLE; BoolType; "Modifiable"),
        attr_decl!(CKA_LABEL; StringType; "Label"),
        attr_decl!(CKA_COPYABLE; BoolType; "Copyable"),
        attr_decl!(CKA_DESTROYABLE; BoolType; "Destroyable"),
        attr_decl!(CKA_UNIQUE_ID; StringType; "Unique ID"),
    ],
);

pub const DATA_LEVEL: ObjectLevel = ObjectLevel::new(
    "Data",
    &[
        attr_decl!(CKA_APPLICATION; StringType; "Application"),
        attr_decl!(CKA_OBJECT_ID; BytesType; "Object ID (DER, hex)"),
        attr_decl!(CKA_VALUE; BytesType; "Value (hex)"),
    ],
);

/// Every concrete object type that can be built or materialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Data,
    X509Certificate,
    WtlsCertificate,
    X509AttributeCertificate,
    GenericSecretKey,
    AesSecretKey,
    Des3SecretKey,
    RsaPublicKey,
    RsaPrivateKey,
    DsaPublicKey,
    DsaPrivateKey,
    EcPublicKey,
    EcPrivateKey,
    DhPublicKey,
    DhPrivateKey,
    X942DhPublicKey,
    X942DhPrivateKey,
    DsaParams,
    DhParams,
    X942DhParams,
    MonotonicCounter,
    Clock,
}

impl ObjectKind {
    /// Returns the attribute carrying the subtype discriminator for
    /// objects of the given class, if the class has subtypes
    pub fn subtype_attr(class: CK_OBJECT_CLASS) -> Option<CK_ATTRIBUTE_TYPE> {
        match class {
            CKO_CERTIFICATE => Some(CKA_CERTIFICATE_TYPE),
            CKO_PUBLIC_KEY | CKO_PRIVATE_KEY | CKO_SECRET_KEY
            | CKO_DOMAIN_PARAMETERS => Some(CKA_KEY_TYPE),
            CKO_HW_FEATURE => Some(CKA_HW_FEATURE_TYPE),
            _ => None,
        }
    }

    /// Selects the concrete kind from the class and subtype values read
    /// from a token
    ///
    /// Returns a construction error for any unknown combination.
    pub fn from_discriminators(
        class: CK_OBJECT_CLASS,
        subtype: Option<CK_ULONG>,
    ) -> Result<ObjectKind> {
        let kind = match (class, subtype) {
            (CKO_DATA, _) => ObjectKind::Data,
            (CKO_CERTIFICATE, Some(CKC_X_509)) => ObjectKind::X509Certificate,
            (CKO_CERTIFICATE, Some(CKC_WTLS)) => ObjectKind::WtlsCertificate,
            (CKO_CERTIFICATE, Some(CKC_X_509_ATTR_CERT)) => {
                ObjectKind::X509AttributeCertificate
            }
            (CKO_SECRET_KEY, Some(CKK_GENERIC_SECRET)) => {
                ObjectKind::GenericSecretKey
            }
            (CKO_SECRET_KEY, Some(CKK_AES)) => ObjectKind::AesSecretKey,
            (CKO_SECRET_KEY, Some(CKK_DES3)) => ObjectKind::Des3SecretKey,
            (CKO_PUBLIC_KEY, Some(CKK_RSA)) => ObjectKind::RsaPublicKey,
            (CKO_PRIVATE_KEY, Some(CKK_RSA)) => ObjectKind::RsaPrivateKey,
            (CKO_PUBLIC_KEY, Some(CKK_DSA)) => ObjectKind::DsaPublicKey,
            (CKO_PRIVATE_KEY, Some(CKK_DSA)) => ObjectKind::DsaPrivateKey,
            (CKO_PUBLIC_KEY, Some(CKK_EC)) => ObjectKind::EcPublicKey,
            (CKO_PRIVATE_KEY, Some(CKK_EC)) => ObjectKind::EcPrivateKey,
            (CKO_PUBLIC_KEY, Some(CKK_DH)) => ObjectKind::DhPublicKey,
            (CKO_PRIVATE_KEY, Some(CKK_DH)) => ObjectKind::DhPrivateKey,
            (CKO_PUBLIC_KEY, Some(CKK_X9_42_DH)) => ObjectKind::X942DhPublicKey,
            (CKO_PRIVATE_KEY, Some(CKK_X9_42_DH)) => {
                ObjectKind::X942DhPrivateKey
            }
            (CKO_DOMAIN_PARAMETERS, Some(CKK_DSA)) => ObjectKind::DsaParams,
            (CKO_DOMAIN_PARAMETERS, Some(CKK_DH)) => ObjectKind::DhParams,
            (CKO_DOMAIN_PARAMETERS, Some(CKK_X9_42_DH)) => {
                ObjectKind::X942DhParams
            }
            (CKO_HW_FEATURE, Some(CKH_MONOTONIC_COUNTER)) => {
                ObjectKind::MonotonicCounter
            }
            (CKO_HW_FEATURE, Some(CKH_CLOCK)) => ObjectKind::Clock,
            _ => {
                return Err(Error::construction(format!(
                    "unsupported object class 0x{:08x} subtype {:?}",
                    class, subtype
                )))
            }
        };
        Ok(kind)
    }

    /// The object class of this kind
    pub fn class(self) -> CK_OBJECT_CLASS {
        match self {
            ObjectKind::Data => CKO_DATA,
            ObjectKind::X509Certificate
            | ObjectKind::WtlsCertificate
            | ObjectKind::X509AttributeCertificate => CKO_CERTIFICATE,
            ObjectKind::GenericSecretKey
            | ObjectKind::AesSecretKey
            | ObjectKind::Des3SecretKey => CKO_SECRET_KEY,
            ObjectKind::RsaPublicKey
            | ObjectKind::DsaPublicKey
            | ObjectKind::EcPublicKey
            | ObjectKind::DhPublicKey
            | ObjectKind::X942DhPublicKey => CKO_PUBLIC_KEY,
            ObjectKind::RsaPrivateKey
            | ObjectKind::DsaPrivateKey
            | ObjectKind::EcPrivateKey
            | ObjectKind::DhPrivateKey
            | ObjectKind::X942DhPrivateKey => CKO_PRIVATE_KEY,
            ObjectKind::DsaParams
            | ObjectKind::DhParams
            | ObjectKind::X942DhParams => CKO_DOMAIN_PARAMETERS,
            ObjectKind::MonotonicCounter | ObjectKind::Clock => CKO_HW_FEATURE,
        }
    }

    /// The subtype discriminator value of this kind, if its class has
    /// subtypes
    pub fn subtype(self) -> Option<CK_ULONG> {
        let val = match self {
            ObjectKind::Data => return None,
            ObjectKind::X509Certificate => CKC_X_509,
            ObjectKind::WtlsCertificate => CKC_WTLS,
            ObjectKind::X509AttributeCertificate => CKC_X_509_ATTR_CERT,
            ObjectKind::GenericSecretKey => CKK_GENERIC_SECRET,
            ObjectKind::AesSecretKey => CKK_AES,
            ObjectKind::Des3SecretKey => CKK_DES3,
            ObjectKind::RsaPublicKey | ObjectKind::RsaPrivateKey => CKK_RSA,
            ObjectKind::DsaPublicKey
            | ObjectKind::DsaPrivateKey
            | ObjectKind::DsaParams => CKK_DSA,
            ObjectKind::EcPublicKey | ObjectKind::EcPrivateKey => CKK_EC,
            ObjectKind::DhPublicKey
            | ObjectKind::DhPrivateKey
            | ObjectKind::DhParams => CKK_DH,
            ObjectKind::X942DhPublicKey
            | ObjectKind::X942DhPrivateKey
            | ObjectKind::X942DhParams => CKK_X9_42_DH,
            ObjectKind::MonotonicCounter => CKH_MONOTONIC_COUNTER,
            ObjectKind::Clock => CKH_CLOCK,
        };
        Some(val)
    }

    /// The chain of levels of this kind, base level first
    pub fn levels(self) -> &'static [ObjectLevel] {
        match self {
            ObjectKind::Data => &[OBJECT_LEVEL, STORAGE_LEVEL, DATA_LEVEL],
            ObjectKind::X509Certificate => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                CERTIFICATE_LEVEL,
                X509_CERTIFICATE_LEVEL,
            ],
            ObjectKind::WtlsCertificate => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                CERTIFICATE_LEVEL,
                WTLS_CERTIFICATE_LEVEL,
            ],
            ObjectKind::X509AttributeCertificate => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                CERTIFICATE_LEVEL,
                X509_ATTR_CERTIFICATE_LEVEL,
            ],
            ObjectKind::GenericSecretKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                SECRET_KEY_LEVEL,
                GENERIC_SECRET_KEY_LEVEL,
            ],
            ObjectKind::AesSecretKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                SECRET_KEY_LEVEL,
                AES_KEY_LEVEL,
            ],
            ObjectKind::Des3SecretKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                SECRET_KEY_LEVEL,
                DES3_KEY_LEVEL,
            ],
            ObjectKind::RsaPublicKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                PUBLIC_KEY_LEVEL,
                RSA_PUBLIC_KEY_LEVEL,
            ],
            ObjectKind::RsaPrivateKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                PRIVATE_KEY_LEVEL,
                RSA_PRIVATE_KEY_LEVEL,
            ],
            ObjectKind::DsaPublicKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                PUBLIC_KEY_LEVEL,
                DSA_PUBLIC_KEY_LEVEL,
            ],
            ObjectKind::DsaPrivateKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                PRIVATE_KEY_LEVEL,
                DSA_PRIVATE_KEY_LEVEL,
            ],
            ObjectKind::EcPublicKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                PUBLIC_KEY_LEVEL,
                EC_PUBLIC_KEY_LEVEL,
            ],
            ObjectKind::EcPrivateKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                PRIVATE_KEY_LEVEL,
                EC_PRIVATE_KEY_LEVEL,
            ],
            ObjectKind::DhPublicKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                PUBLIC_KEY_LEVEL,
                DH_PUBLIC_KEY_LEVEL,
            ],
            ObjectKind::DhPrivateKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                PRIVATE_KEY_LEVEL,
                DH_PRIVATE_KEY_LEVEL,
            ],
            ObjectKind::X942DhPublicKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                PUBLIC_KEY_LEVEL,
                X942_DH_PUBLIC_KEY_LEVEL,
            ],
            ObjectKind::X942DhPrivateKey => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                KEY_LEVEL,
                PRIVATE_KEY_LEVEL,
                X942_DH_PRIVATE_KEY_LEVEL,
            ],
            ObjectKind::DsaParams => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                DOMAIN_PARAMETERS_LEVEL,
                DSA_PARAMETERS_LEVEL,
            ],
            ObjectKind::DhParams => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                DOMAIN_PARAMETERS_LEVEL,
                DH_PARAMETERS_LEVEL,
            ],
            ObjectKind::X942DhParams => &[
                OBJECT_LEVEL,
                STORAGE_LEVEL,
                DOMAIN_PARAMETERS_LEVEL,
                X942_DH_PARAMETERS_LEVEL,
            ],
            ObjectKind::MonotonicCounter => &[
                OBJECT_LEVEL,
                HW_FEATURE_LEVEL,
                MONOTONIC_COUNTER_LEVEL,
            ],
            ObjectKind::Clock => &[OBJECT_LEVEL, HW_FEATURE_LEVEL, CLOCK_LEVEL],
        }
    }

    /// Human readable name, used as header when rendering objects
    pub fn name(self) -> &'static str {
        match self.levels().last() {
            Some(l) => l.name(),
            None => "Object",
        }
    }

    /// Whether objects of this kind hold secret material
    pub fn is_sensitive(self) -> bool {
        self.levels()
            .iter()
            .flat_map(|l| l.attrs().iter())
            .any(|a| a.is(OAFlags::Sensitive))
    }

    /// Finds the declaration of an attribute in the chain of levels
    pub fn find_decl(self, t: CK_ATTRIBUTE_TYPE) -> Option<&'static ObjectAttr> {
        self.levels()
            .iter()
            .flat_map(|l| l.attrs().iter())
            .find(|a| a.get_type() == t)
    }
}

/// Returns the symbolic name of a discriminator value, if known
pub fn discriminator_name(
    t: CK_ATTRIBUTE_TYPE,
    val: CK_ULONG,
) -> Option<&'static str> {
    let name = match (t, val) {
        (CKA_CLASS, CKO_DATA) => "CKO_DATA",
        (CKA_CLASS, CKO_CERTIFICATE) => "CKO_CERTIFICATE",
        (CKA_CLASS, CKO_PUBLIC_KEY) => "CKO_PUBLIC_KEY",
        (CKA_CLASS, CKO_PRIVATE_KEY) => "CKO_PRIVATE_KEY",
        (CKA_CLASS, CKO_SECRET_KEY) => "CKO_SECRET_KEY",
        (CKA_CLASS, CKO_HW_FEATURE) => "CKO_HW_FEATURE",
        (CKA_CLASS, CKO_DOMAIN_PARAMETERS) => "CKO_DOMAIN_PARAMETERS",
        (CKA_CERTIFICATE_TYPE, CKC_X_509) => "CKC_X_509",
        (CKA_CERTIFICATE_TYPE, CKC_X_509_ATTR_CERT) => "CKC_X_509_ATTR_CERT",
        (CKA_CERTIFICATE_TYPE, CKC_WTLS) => "CKC_WTLS",
        (CKA_KEY_TYPE, CKK_RSA) => "CKK_RSA",
        (CKA_KEY_TYPE, CKK_DSA) => "CKK_DSA",
        (CKA_KEY_TYPE, CKK_DH) => "CKK_DH",
        (CKA_KEY_TYPE, CKK_EC) => "CKK_EC",
        (CKA_KEY_TYPE, CKK_X9_42_DH) => "CKK_X9_42_DH",
        (CKA_KEY_TYPE, CKK_GENERIC_SECRET) => "CKK_GENERIC_SECRET",
        (CKA_KEY_TYPE, CKK_DES3) => "CKK_DES3",
        (CKA_KEY_TYPE, CKK_AES) => "CKK_AES",
        (CKA_HW_FEATURE_TYPE, CKH_MONOTONIC_COUNTER) => "CKH_MONOTONIC_COUNTER",
        (CKA_HW_FEATURE_TYPE, CKH_CLOCK) => "CKH_CLOCK",
        _ => return None,
    };
    Some(name)
}
