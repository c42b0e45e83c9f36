// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use std::fmt;

use crate::config::Render;
use crate::error::Result;
use crate::pkcs11::*;

use super::{
    render_fields, wrong_record, NativeParams, NativeRecord, Parameters,
};

/// Output length of the general length MAC mechanisms, like
/// CKM_SHA256_HMAC_GENERAL or CKM_AES_CMAC_GENERAL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacGeneralParams {
    mac_length: CK_MAC_GENERAL_PARAMS,
}

impl MacGeneralParams {
    pub fn new(mac_length: CK_ULONG) -> MacGeneralParams {
        MacGeneralParams {
            mac_length: mac_length,
        }
    }

    pub fn mac_length(&self) -> CK_ULONG {
        self.mac_length
    }
}

impl Parameters for MacGeneralParams {
    fn to_native(&self) -> Result<NativeParams> {
        Ok(NativeParams::new(NativeRecord::Ulong(Box::new(
            self.mac_length,
        ))))
    }

    fn refresh(&mut self, native: &NativeParams) -> Result<()> {
        match native.record() {
            NativeRecord::Ulong(len) => {
                self.mac_length = **len;
                Ok(())
            }
            _ => Err(wrong_record("CK_MAC_GENERAL_PARAMS")),
        }
    }

    fn render(&self, conf: &Render) -> String {
        render_fields(
            conf,
            "MAC General Parameters",
            &[("MAC Length", self.mac_length.to_string())],
        )
    }
}

impl fmt::Display for MacGeneralParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Render::default()))
    }
}
