// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use std::fmt;

use crate::config::Render;
use crate::error::Result;
use crate::misc::bytes_to_vec;
use crate::pkcs11::*;

use super::{
    hex_or_none, invalid, render_fields, wrong_record, NativeParams,
    NativeRecord, Parameters,
};

/// Parameters of CKM_RSA_PKCS_OAEP
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RsaPkcsOaepParams {
    hash_alg: CK_MECHANISM_TYPE,
    mgf: CK_RSA_PKCS_MGF_TYPE,
    source: CK_RSA_PKCS_OAEP_SOURCE_TYPE,
    source_data: Vec<u8>,
}

impl RsaPkcsOaepParams {
    pub fn new(
        hash_alg: CK_MECHANISM_TYPE,
        mgf: CK_RSA_PKCS_MGF_TYPE,
        source: CK_RSA_PKCS_OAEP_SOURCE_TYPE,
        source_data: Vec<u8>,
    ) -> RsaPkcsOaepParams {
        RsaPkcsOaepParams {
            hash_alg: hash_alg,
            mgf: mgf,
            source: source,
            source_data: source_data,
        }
    }

    pub fn hash_alg(&self) -> CK_MECHANISM_TYPE {
        self.hash_alg
    }

    pub fn mgf(&self) -> CK_RSA_PKCS_MGF_TYPE {
        self.mgf
    }

    pub fn source(&self) -> CK_RSA_PKCS_OAEP_SOURCE_TYPE {
        self.source
    }

    pub fn source_data(&self) -> &[u8] {
        &self.source_data
    }

    fn check(&self) -> Result<()> {
        match self.hash_alg {
            CKM_SHA_1 | CKM_SHA224 | CKM_SHA256 | CKM_SHA384
            | CKM_SHA512 => (),
            h => {
                return Err(invalid(format!("unsupported hash 0x{:08x}", h)))
            }
        }
        match self.mgf {
            CKG_MGF1_SHA1 | CKG_MGF1_SHA224 | CKG_MGF1_SHA256
            | CKG_MGF1_SHA384 | CKG_MGF1_SHA512 => (),
            m => return Err(invalid(format!("unknown MGF {}", m))),
        }
        match self.source {
            CKZ_DATA_SPECIFIED => (),
            0 => {
                if !self.source_data.is_empty() {
                    return Err(invalid(
                        "source data requires CKZ_DATA_SPECIFIED".to_string(),
                    ));
                }
            }
            s => return Err(invalid(format!("unknown OAEP source {}", s))),
        }
        Ok(())
    }

    fn from_record(params: &CK_RSA_PKCS_OAEP_PARAMS) -> Result<Self> {
        Ok(RsaPkcsOaepParams {
            hash_alg: params.hashAlg,
            mgf: params.mgf,
            source: params.source,
            source_data: bytes_to_vec!(
                params.pSourceData,
                params.ulSourceDataLen
            ),
        })
    }
}

impl Parameters for RsaPkcsOaepParams {
    fn to_native(&self) -> Result<NativeParams> {
        self.check()?;
        let mut native = NativeParams::new(NativeRecord::Ulong(Box::new(0)));
        let (data, data_len) = native.own(self.source_data.clone())?;
        *native.record_mut() =
            NativeRecord::RsaPkcsOaep(Box::new(CK_RSA_PKCS_OAEP_PARAMS {
                hashAlg: self.hash_alg,
                mgf: self.mgf,
                source: self.source,
                pSourceData: data as CK_VOID_PTR,
                ulSourceDataLen: data_len,
            }));
        Ok(native)
    }

    fn refresh(&mut self, native: &NativeParams) -> Result<()> {
        match native.record() {
            NativeRecord::RsaPkcsOaep(p) => {
                *self = Self::from_record(p)?;
                Ok(())
            }
            _ => Err(wrong_record("CK_RSA_PKCS_OAEP_PARAMS")),
        }
    }

    fn render(&self, conf: &Render) -> String {
        render_fields(
            conf,
            "RSA PKCS OAEP Parameters",
            &[
                ("Hash", format!("0x{:08x}", self.hash_alg)),
                ("MGF", format!("0x{:08x}", self.mgf)),
                ("Source", format!("0x{:08x}", self.source)),
                ("Source Data", hex_or_none(&self.source_data)),
            ],
        )
    }
}

impl fmt::Display for RsaPkcsOaepParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Render::default()))
    }
}

/// Parameters of CKM_RSA_AES_KEY_WRAP
///
/// Owns its nested OAEP parameters, clones never share them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RsaAesKeyWrapParams {
    aes_key_bits: CK_ULONG,
    oaep: RsaPkcsOaepParams,
}

impl RsaAesKeyWrapParams {
    pub fn new(
        aes_key_bits: CK_ULONG,
        oaep: RsaPkcsOaepParams,
    ) -> RsaAesKeyWrapParams {
        RsaAesKeyWrapParams {
            aes_key_bits: aes_key_bits,
            oaep: oaep,
        }
    }

    pub fn aes_key_bits(&self) -> CK_ULONG {
        self.aes_key_bits
    }

    pub fn oaep(&self) -> &RsaPkcsOaepParams {
        &self.oaep
    }
}

impl Parameters for RsaAesKeyWrapParams {
    fn to_native(&self) -> Result<NativeParams> {
        match self.aes_key_bits {
            128 | 192 | 256 => (),
            b => {
                return Err(invalid(format!("invalid AES key length {}", b)))
            }
        }
        let oaep = self.oaep.to_native()?;
        let mut native = NativeParams::new(NativeRecord::Ulong(Box::new(0)));
        let oaep_ptr = match native.own_nested(oaep).record() {
            NativeRecord::RsaPkcsOaep(r) => {
                &**r as *const CK_RSA_PKCS_OAEP_PARAMS
                    as *mut CK_RSA_PKCS_OAEP_PARAMS
            }
            _ => return Err(wrong_record("CK_RSA_PKCS_OAEP_PARAMS")),
        };
        *native.record_mut() =
            NativeRecord::RsaAesKeyWrap(Box::new(CK_RSA_AES_KEY_WRAP_PARAMS {
                ulAESKeyBits: self.aes_key_bits,
                pOAEPParams: oaep_ptr,
            }));
        Ok(native)
    }

    fn refresh(&mut self, native: &NativeParams) -> Result<()> {
        let params = match native.record() {
            NativeRecord::RsaAesKeyWrap(p) => p,
            _ => return Err(wrong_record("CK_RSA_AES_KEY_WRAP_PARAMS")),
        };
        if params.pOAEPParams.is_null() {
            return Err(invalid("missing nested OAEP parameters".to_string()));
        }
        let oaep = RsaPkcsOaepParams::from_record(unsafe {
            &*params.pOAEPParams
        })?;
        *self = RsaAesKeyWrapParams {
            aes_key_bits: params.ulAESKeyBits,
            oaep: oaep,
        };
        Ok(())
    }

    fn render(&self, conf: &Render) -> String {
        let mut out = render_fields(
            conf,
            "RSA AES Key Wrap Parameters",
            &[("AES Key Bits", self.aes_key_bits.to_string())],
        );
        let nested_break = format!("\n{}", conf.indent);
        out.push_str(&nested_break);
        out.push_str(&self.oaep.render(conf).replace('\n', &nested_break));
        out
    }
}

impl fmt::Display for RsaAesKeyWrapParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Render::default()))
    }
}
