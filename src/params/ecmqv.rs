// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use std::fmt;

use crate::config::Render;
use crate::error::Result;
use crate::misc::bytes_to_vec;
use crate::pkcs11::*;

use super::ecdh::check_derive_data;
use super::{
    hex_or_none, invalid, render_fields, wrong_record, NativeParams,
    NativeRecord, Parameters,
};

/// Parameters of CKM_ECMQV_DERIVE
///
/// Besides the EC-DH1 fields this carries the second EC private key of
/// the local party (as an object handle, with the length of its private
/// data), the second EC public key of the peer and the handle of the
/// local second public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EcMqvDeriveParams {
    kdf: CK_EC_KDF_TYPE,
    shared_data: Vec<u8>,
    public_data: Vec<u8>,
    private_data_len: CK_ULONG,
    private_data: CK_OBJECT_HANDLE,
    public_data2: Vec<u8>,
    public_key: CK_OBJECT_HANDLE,
}

impl EcMqvDeriveParams {
    pub fn new(
        kdf: CK_EC_KDF_TYPE,
        shared_data: Vec<u8>,
        public_data: Vec<u8>,
        private_data_len: CK_ULONG,
        private_data: CK_OBJECT_HANDLE,
        public_data2: Vec<u8>,
        public_key: CK_OBJECT_HANDLE,
    ) -> EcMqvDeriveParams {
        EcMqvDeriveParams {
            kdf: kdf,
            shared_data: shared_data,
            public_data: public_data,
            private_data_len: private_data_len,
            private_data: private_data,
            public_data2: public_data2,
            public_key: public_key,
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

    pub fn private_data_len(&self) -> CK_ULONG {
        self.private_data_len
    }

    pub fn private_data(&self) -> CK_OBJECT_HANDLE {
        self.private_data
    }

    pub fn public_data2(&self) -> &[u8] {
        &self.public_data2
    }

    pub fn public_key(&self) -> CK_OBJECT_HANDLE {
        self.public_key
    }
}

impl Parameters for EcMqvDeriveParams {
    fn to_native(&self) -> Result<NativeParams> {
        check_derive_data(self.kdf, &self.shared_data, &self.public_data)?;
        if self.public_data2.is_empty() {
            return Err(invalid("second public data is empty".to_string()));
        }
        if self.private_data == CK_INVALID_HANDLE {
            return Err(invalid("invalid private data handle".to_string()));
        }
        if self.public_key == CK_INVALID_HANDLE {
            return Err(invalid("invalid public key handle".to_string()));
        }
        let mut native = NativeParams::new(NativeRecord::Ulong(Box::new(0)));
        let (shared, shared_len) = native.own(self.shared_data.clone())?;
        let (public, public_len) = native.own(self.public_data.clone())?;
        let (public2, public2_len) = native.own(self.public_data2.clone())?;
        *native.record_mut() =
            NativeRecord::EcMqvDerive(Box::new(CK_ECMQV_DERIVE_PARAMS {
                kdf: self.kdf,
                ulSharedDataLen: shared_len,
                pSharedData: shared,
                ulPublicDataLen: public_len,
                pPublicData: public,
                ulPrivateDataLen: self.private_data_len,
                hPrivateData: self.private_data,
                ulPublicDataLen2: public2_len,
                pPublicData2: public2,
                publicKey: self.public_key,
            }));
        Ok(native)
    }

    fn refresh(&mut self, native: &NativeParams) -> Result<()> {
        let params = match native.record() {
            NativeRecord::EcMqvDerive(p) => p,
            _ => return Err(wrong_record("CK_ECMQV_DERIVE_PARAMS")),
        };
        let refreshed = EcMqvDeriveParams {
            kdf: params.kdf,
            shared_data: bytes_to_vec!(
                params.pSharedData,
                params.ulSharedDataLen
            ),
            public_data: bytes_to_vec!(
                params.pPublicData,
                params.ulPublicDataLen
            ),
            private_data_len: params.ulPrivateDataLen,
            private_data: params.hPrivateData,
            public_data2: bytes_to_vec!(
                params.pPublicData2,
                params.ulPublicDataLen2
            ),
            public_key: params.publicKey,
        };
        *self = refreshed;
        Ok(())
    }

    fn render(&self, conf: &Render) -> String {
        render_fields(
            conf,
            "EC-MQV Derive Parameters",
            &[
                ("kdf", format!("0x{:08x}", self.kdf)),
                ("Shared Data", hex_or_none(&self.shared_data)),
                ("Public Data", hex_or_none(&self.public_data)),
                ("Private Data Length", self.private_data_len.to_string()),
                ("Private Data Handle", self.private_data.to_string()),
                ("Public Data 2", hex_or_none(&self.public_data2)),
                ("Public Key Handle", self.public_key.to_string()),
            ],
        )
    }
}

impl fmt::Display for EcMqvDeriveParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Render::default()))
    }
}
