// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! Typed mechanism parameters and their conversion to the fixed native
//! parameter records passed at the token boundary.
//!
//! A conversion produces a [NativeParams] value that owns the record and
//! every buffer or nested record the record points to, so pointers stay
//! valid for as long as the value lives. Validation happens during the
//! conversion, parameters are never silently adjusted.

use std::fmt;

use crate::config::Render;
use crate::error::{Error, Result};
use crate::misc::{sizeof, void_ptr};
use crate::pkcs11::*;

#[cfg(feature = "log")]
use log::debug;

pub mod ecdh;
pub mod ecmqv;
pub mod gcm;
pub mod mac;
pub mod rsa;

pub use ecdh::EcDh1DeriveParams;
pub use ecmqv::EcMqvDeriveParams;
pub use gcm::GcmMessageParams;
pub use mac::MacGeneralParams;
pub use rsa::{RsaAesKeyWrapParams, RsaPkcsOaepParams};

/// The native record produced by a parameter conversion
///
/// Records are boxed so that their address does not change when the
/// owning [NativeParams] is moved.
#[derive(Debug)]
pub enum NativeRecord {
    Ulong(Box<CK_ULONG>),
    EcDh1Derive(Box<CK_ECDH1_DERIVE_PARAMS>),
    EcMqvDerive(Box<CK_ECMQV_DERIVE_PARAMS>),
    GcmMessage(Box<CK_GCM_MESSAGE_PARAMS>),
    RsaPkcsOaep(Box<CK_RSA_PKCS_OAEP_PARAMS>),
    RsaAesKeyWrap(Box<CK_RSA_AES_KEY_WRAP_PARAMS>),
}

/// A native parameter record together with the storage it references
#[derive(Debug)]
pub struct NativeParams {
    record: NativeRecord,
    /// Storage for owned byte buffers referenced by the record
    buffers: Vec<Vec<u8>>,
    /// Nested records referenced by the record
    nested: Vec<NativeParams>,
}

impl NativeParams {
    pub(crate) fn new(record: NativeRecord) -> NativeParams {
        NativeParams {
            record: record,
            buffers: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Takes ownership of a buffer and returns the pointer and length
    /// to store in the record, a null pointer is returned for empty
    /// buffers
    pub(crate) fn own(
        &mut self,
        mut buf: Vec<u8>,
    ) -> Result<(CK_BYTE_PTR, CK_ULONG)> {
        if buf.is_empty() {
            return Ok((std::ptr::null_mut(), 0));
        }
        let len = CK_ULONG::try_from(buf.len())?;
        let ptr = buf.as_mut_ptr();
        self.buffers.push(buf);
        Ok((ptr, len))
    }

    /// Takes ownership of a nested record
    pub(crate) fn own_nested(&mut self, nested: NativeParams) -> &NativeParams {
        self.nested.push(nested);
        &self.nested[self.nested.len() - 1]
    }

    pub fn record(&self) -> &NativeRecord {
        &self.record
    }

    /// Replacing the record invalidates pointers returned earlier by
    /// [NativeParams::as_void_ptr]
    pub(crate) fn record_mut(&mut self) -> &mut NativeRecord {
        &mut self.record
    }

    /// Pointer to the record, suitable for `CK_MECHANISM.pParameter`
    pub fn as_void_ptr(&self) -> CK_VOID_PTR {
        match &self.record {
            NativeRecord::Ulong(r) => void_ptr!(&**r),
            NativeRecord::EcDh1Derive(r) => void_ptr!(&**r),
            NativeRecord::EcMqvDerive(r) => void_ptr!(&**r),
            NativeRecord::GcmMessage(r) => void_ptr!(&**r),
            NativeRecord::RsaPkcsOaep(r) => void_ptr!(&**r),
            NativeRecord::RsaAesKeyWrap(r) => void_ptr!(&**r),
        }
    }

    /// Size of the record, suitable for `CK_MECHANISM.ulParameterLen`
    pub fn len(&self) -> Result<CK_ULONG> {
        Ok(match &self.record {
            NativeRecord::Ulong(_) => sizeof!(CK_ULONG),
            NativeRecord::EcDh1Derive(_) => sizeof!(CK_ECDH1_DERIVE_PARAMS),
            NativeRecord::EcMqvDerive(_) => sizeof!(CK_ECMQV_DERIVE_PARAMS),
            NativeRecord::GcmMessage(_) => sizeof!(CK_GCM_MESSAGE_PARAMS),
            NativeRecord::RsaPkcsOaep(_) => sizeof!(CK_RSA_PKCS_OAEP_PARAMS),
            NativeRecord::RsaAesKeyWrap(_) => {
                sizeof!(CK_RSA_AES_KEY_WRAP_PARAMS)
            }
        })
    }
}

/// Returns a validation error and traces it
pub(crate) fn invalid(msg: String) -> Error {
    #[cfg(feature = "log")]
    debug!("invalid mechanism parameter: {}", msg);
    Error::param_invalid(msg)
}

/// Checks the key derivation function is a known CKD_ value
pub(crate) fn check_kdf(kdf: CK_EC_KDF_TYPE) -> Result<()> {
    match kdf {
        CKD_NULL..=CKD_BLAKE2B_512_KDF => Ok(()),
        _ => Err(invalid(format!("unknown key derivation function {}", kdf))),
    }
}

/// Hex rendering of a buffer, empty buffers are shown as missing
pub(crate) fn hex_or_none(buf: &[u8]) -> String {
    if buf.is_empty() {
        "<none>".to_string()
    } else {
        hex::encode(buf)
    }
}

/// Renders a title followed by one indented `label: value` line per
/// field
pub(crate) fn render_fields(
    conf: &Render,
    title: &str,
    fields: &[(&str, String)],
) -> String {
    let mut out = format!("{}:", title);
    for (label, value) in fields {
        out.push('\n');
        out.push_str(&conf.indent);
        out.push_str(label);
        out.push_str(": ");
        out.push_str(value);
    }
    out
}

/// Fails unless the record is of the expected variant
pub(crate) fn wrong_record(expected: &str) -> Error {
    invalid(format!("native record is not a {} record", expected))
}

/// Common interface of all mechanism parameters
pub trait Parameters: fmt::Debug + fmt::Display {
    /// Validates the parameters and builds the native record
    fn to_native(&self) -> Result<NativeParams>;

    /// Overwrites the parameters with the current values of a native
    /// record produced by [Parameters::to_native]
    ///
    /// Used after a call that writes back into the record, like GCM
    /// message operations returning a generated IV and tag. The record
    /// must be of the matching variant, on any error the parameters are
    /// left unchanged.
    fn refresh(&mut self, native: &NativeParams) -> Result<()>;

    /// Renders the parameters one field per line, using the indent of
    /// the render configuration
    fn render(&self, conf: &Render) -> String;
}

/// Any of the supported mechanism parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Params {
    EcDh1Derive(EcDh1DeriveParams),
    EcMqvDerive(EcMqvDeriveParams),
    GcmMessage(GcmMessageParams),
    MacGeneral(MacGeneralParams),
    RsaPkcsOaep(RsaPkcsOaepParams),
    RsaAesKeyWrap(RsaAesKeyWrapParams),
}

impl Params {
    fn inner(&self) -> &dyn Parameters {
        match self {
            Params::EcDh1Derive(p) => p,
            Params::EcMqvDerive(p) => p,
            Params::GcmMessage(p) => p,
            Params::MacGeneral(p) => p,
            Params::RsaPkcsOaep(p) => p,
            Params::RsaAesKeyWrap(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Parameters {
        match self {
            Params::EcDh1Derive(p) => p,
            Params::EcMqvDerive(p) => p,
            Params::GcmMessage(p) => p,
            Params::MacGeneral(p) => p,
            Params::RsaPkcsOaep(p) => p,
            Params::RsaAesKeyWrap(p) => p,
        }
    }
}

impl Parameters for Params {
    fn to_native(&self) -> Result<NativeParams> {
        self.inner().to_native()
    }

    fn refresh(&mut self, native: &NativeParams) -> Result<()> {
        self.inner_mut().refresh(native)
    }

    fn render(&self, conf: &Render) -> String {
        self.inner().render(conf)
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Render::default()))
    }
}

macro_rules! params_from {
    ($variant:ident, $typ:ty) => {
        impl From<$typ> for Params {
            fn from(p: $typ) -> Params {
                Params::$variant(p)
            }
        }
    };
}

params_from!(EcDh1Derive, EcDh1DeriveParams);
params_from!(EcMqvDerive, EcMqvDeriveParams);
params_from!(GcmMessage, GcmMessageParams);
params_from!(MacGeneral, MacGeneralParams);
params_from!(RsaPkcsOaep, RsaPkcsOaepParams);
params_from!(RsaAesKeyWrap, RsaAesKeyWrapParams);
