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

const MAX_TAG_BITS: CK_ULONG = 128;

/// Parameters of CKM_AES_GCM message based operations
///
/// The token may generate (part of) the IV and always writes the tag, so
/// both buffers are handed over with their full length and read back
/// with [Parameters::refresh] once the operation completes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GcmMessageParams {
    iv: Vec<u8>,
    iv_fixed_bits: CK_ULONG,
    iv_generator: CK_GENERATOR_FUNCTION,
    tag: Vec<u8>,
    tag_bits: CK_ULONG,
}

impl GcmMessageParams {
    /// Parameters with a zeroed tag buffer of `tag_bits` bits, to be
    /// filled by an encryption
    ///
    /// No buffer is allocated for a tag length above the GCM maximum,
    /// such parameters fail validation in [Parameters::to_native].
    pub fn new(
        iv: Vec<u8>,
        iv_fixed_bits: CK_ULONG,
        iv_generator: CK_GENERATOR_FUNCTION,
        tag_bits: CK_ULONG,
    ) -> GcmMessageParams {
        let tag_len = if tag_bits <= MAX_TAG_BITS {
            usize::try_from(tag_bits / 8).unwrap_or(0)
        } else {
            0
        };
        GcmMessageParams {
            iv: iv,
            iv_fixed_bits: iv_fixed_bits,
            iv_generator: iv_generator,
            tag: vec![0u8; tag_len],
            tag_bits: tag_bits,
        }
    }

    /// Parameters carrying a known tag, as needed by a decryption
    pub fn with_tag(
        iv: Vec<u8>,
        iv_fixed_bits: CK_ULONG,
        iv_generator: CK_GENERATOR_FUNCTION,
        tag: Vec<u8>,
    ) -> GcmMessageParams {
        let tag_bits = CK_ULONG::try_from(tag.len() * 8).unwrap_or(0);
        GcmMessageParams {
            iv: iv,
            iv_fixed_bits: iv_fixed_bits,
            iv_generator: iv_generator,
            tag: tag,
            tag_bits: tag_bits,
        }
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    pub fn iv_fixed_bits(&self) -> CK_ULONG {
        self.iv_fixed_bits
    }

    pub fn iv_generator(&self) -> CK_GENERATOR_FUNCTION {
        self.iv_generator
    }

    pub fn tag(&self) -> &[u8] {
        &self.tag
    }

    pub fn tag_bits(&self) -> CK_ULONG {
        self.tag_bits
    }

    fn check(&self) -> Result<()> {
        if self.iv.is_empty() {
            return Err(invalid("IV is empty".to_string()));
        }
        let iv_bits = CK_ULONG::try_from(self.iv.len() * 8)?;
        if self.iv_fixed_bits > iv_bits {
            return Err(invalid(format!(
                "{} fixed bits exceed the IV length of {} bits",
                self.iv_fixed_bits, iv_bits
            )));
        }
        match self.iv_generator {
            CKG_NO_GENERATE
            | CKG_GENERATE
            | CKG_GENERATE_COUNTER
            | CKG_GENERATE_RANDOM
            | CKG_GENERATE_COUNTER_XOR => (),
            g => {
                return Err(invalid(format!("unknown IV generator {}", g)))
            }
        }
        if self.tag_bits > MAX_TAG_BITS || self.tag_bits % 8 != 0 {
            return Err(invalid(format!(
                "invalid tag length of {} bits",
                self.tag_bits
            )));
        }
        if CK_ULONG::try_from(self.tag.len() * 8)? != self.tag_bits {
            return Err(invalid(
                "tag buffer does not match the tag length".to_string(),
            ));
        }
        Ok(())
    }
}

impl Parameters for GcmMessageParams {
    fn to_native(&self) -> Result<NativeParams> {
        self.check()?;
        let mut native = NativeParams::new(NativeRecord::Ulong(Box::new(0)));
        let (iv, iv_len) = native.own(self.iv.clone())?;
        let (tag, _) = native.own(self.tag.clone())?;
        *native.record_mut() =
            NativeRecord::GcmMessage(Box::new(CK_GCM_MESSAGE_PARAMS {
                pIv: iv,
                ulIvLen: iv_len,
                ulIvFixedBits: self.iv_fixed_bits,
                ivGenerator: self.iv_generator,
                pTag: tag,
                ulTagBits: self.tag_bits,
            }));
        Ok(native)
    }

    fn refresh(&mut self, native: &NativeParams) -> Result<()> {
        let params = match native.record() {
            NativeRecord::GcmMessage(p) => p,
            _ => return Err(wrong_record("CK_GCM_MESSAGE_PARAMS")),
        };
        if params.ulTagBits > MAX_TAG_BITS {
            return Err(invalid(format!(
                "invalid tag length of {} bits",
                params.ulTagBits
            )));
        }
        let refreshed = GcmMessageParams {
            iv: bytes_to_vec!(params.pIv, params.ulIvLen),
            iv_fixed_bits: params.ulIvFixedBits,
            iv_generator: params.ivGenerator,
            tag: bytes_to_vec!(params.pTag, params.ulTagBits.div_ceil(8)),
            tag_bits: params.ulTagBits,
        };
        *self = refreshed;
        Ok(())
    }

    fn render(&self, conf: &Render) -> String {
        render_fields(
            conf,
            "GCM Message Parameters",
            &[
                ("IV", hex_or_none(&self.iv)),
                ("IV Fixed Bits", self.iv_fixed_bits.to_string()),
                ("IV Generator", format!("0x{:08x}", self.iv_generator)),
                ("Tag", hex_or_none(&self.tag)),
                ("Tag Bits", self.tag_bits.to_string()),
            ],
        )
    }
}

impl fmt::Display for GcmMessageParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Render::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_buffer_sizing() {
        let p = GcmMessageParams::new(vec![1u8; 12], 0, CKG_NO_GENERATE, 96);
        assert_eq!(p.tag().len(), 12);
        let p = GcmMessageParams::with_tag(
            vec![1u8; 12],
            0,
            CKG_NO_GENERATE,
            vec![7u8; 16],
        );
        assert_eq!(p.tag_bits(), 128);
    }

    #[test]
    fn odd_tag_bits_rejected() {
        let p = GcmMessageParams::new(vec![1u8; 12], 0, CKG_NO_GENERATE, 100);
        assert!(p.to_native().is_err());
    }

    #[test]
    fn oversized_tag_bits_rejected() {
        for bits in [136, 1 << 20, CK_ULONG::MAX] {
            let p =
                GcmMessageParams::new(vec![1u8; 12], 0, CKG_NO_GENERATE, bits);
            assert!(p.tag().is_empty());
            assert_eq!(p.tag_bits(), bits);
            let err = p.to_native().unwrap_err();
            assert_eq!(err.rv(), CKR_MECHANISM_PARAM_INVALID);
        }
    }
}
