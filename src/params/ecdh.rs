// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use std::fmt;

use crate::config::Render;
use crate::error::Result;
use crate::misc::bytes_to_vec;
use crate::pkcs11::*;

use super::{
    check_kdf, hex_or_none, invalid, render_fields, wrong_record,
    NativeParams, NativeRecord, Parameters,
};

/// Checks the rules shared by the EC-DH1 and EC-MQV derive parameters
pub(crate) fn check_derive_data(
    kdf: CK_EC_KDF_TYPE,
    shared_data: &[u8],
    public_data: &[u8],
) -> Result<()> {
    check_kdf(kdf)?;
    if kdf == CKD_NULL && !shared_data.is_empty() {
        return Err(invalid(
            "shared data is not allowed with CKD_NULL".to_string(),
        ));
    }
    if public_data.is_empty() {
        return Err(invalid("public data is empty".to_string()));
    }
    Ok(())
}

/// Parameters of CKM_ECDH1_DERIVE and CKM_ECDH1_COFACTOR_DERIVE
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EcDh1DeriveParams {
    kdf: CK_EC_KDF_TYPE,
    shared_data: Vec<u8>,
    public_data: Vec<u8>,
}

impl EcDh1DeriveParams {
    pub fn new(
        kdf: CK_EC_KDF_TYPE,
        shared_data: Vec<u8>,
        public_data: Vec<u8>,
    ) -> EcDh1DeriveParams {
        EcDh1DeriveParams {
            kdf: kdf,
            shared_data: shared_data,
            public_data: public_data,
        }
    }

    pub fn kdf(&self) -> CK_EC_KDF_TYPE {
        self.kdf
    }

    pub fn shared_data(&self) -> &[u8] {
        &self.shared_data
    }

    pub fn public_data(&self) -> &[u8] {
        &self.public_data
    }
}

impl Parameters for EcDh1DeriveParams {
    fn to_native(&self) -> Result<NativeParams> {
        check_derive_data(self.kdf, &self.shared_data, &self.public_data)?;
        let mut native = NativeParams::new(NativeRecord::Ulong(Box::new(0)));
        let (shared, shared_len) = native.own(self.shared_data.clone())?;
        let (public, public_len) = native.own(self.public_data.clone())?;
        *native.record_mut() =
            NativeRecord::EcDh1Derive(Box::new(CK_ECDH1_DERIVE_PARAMS {
                kdf: self.kdf,
                ulSharedDataLen: shared_len,
                pSharedData: shared,
                ulPublicDataLen: public_len,
                pPublicData: public,
            }));
        Ok(native)
    }

    fn refresh(&mut self, native: &NativeParams) -> Result<()> {
        let params = match native.record() {
            NativeRecord::EcDh1Derive(p) => p,
            _ => return Err(wrong_record("CK_ECDH1_DERIVE_PARAMS")),
        };
        let refreshed = EcDh1DeriveParams {
            kdf: params.kdf,
            shared_data: bytes_to_vec!(
                params.pSharedData,
                params.ulSharedDataLen
            ),
            public_data: bytes_to_vec!(
                params.pPublicData,
                params.ulPublicDataLen
            ),
        };
        *self = refreshed;
        Ok(())
    }

    fn render(&self, conf: &Render) -> String {
        render_fields(
            conf,
            "EC-DH1 Derive Parameters",
            &[
                ("kdf", format!("0x{:08x}", self.kdf)),
                ("Shared Data", hex_or_none(&self.shared_data)),
                ("Public Data", hex_or_none(&self.public_data)),
            ],
        )
    }
}

impl fmt::Display for EcDh1DeriveParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Render::default()))
    }
}
