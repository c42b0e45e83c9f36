// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use crate::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct CK_VERSION {
    pub major: CK_BYTE,
    pub minor: CK_BYTE,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct CK_DATE {
    pub year: [CK_CHAR; 4],
    pub month: [CK_CHAR; 2],
    pub day: [CK_CHAR; 2],
}

#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct CK_ATTRIBUTE {
    pub type_: CK_ATTRIBUTE_TYPE,
    pub pValue: CK_VOID_PTR,
    pub ulValueLen: CK_ULONG,
}
pub type CK_ATTRIBUTE_PTR = *mut CK_ATTRIBUTE;

#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct CK_MECHANISM {
    pub mechanism: CK_MECHANISM_TYPE,
    pub pParameter: CK_VOID_PTR,
    pub ulParameterLen: CK_ULONG,
}
pub type CK_MECHANISM_PTR = *mut CK_MECHANISM;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct CK_MECHANISM_INFO {
    pub ulMinKeySize: CK_ULONG,
    pub ulMaxKeySize: CK_ULONG,
    pub flags: CK_FLAGS,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct CK_TOKEN_INFO {
    pub label: [CK_UTF8CHAR; 32],
    pub manufacturerID: [CK_UTF8CHAR; 32],
    pub model: [CK_UTF8CHAR; 16],
    pub serialNumber: [CK_CHAR; 16],
    pub flags: CK_FLAGS,
    pub ulMaxSessionCount: CK_ULONG,
    pub ulSessionCount: CK_ULONG,
    pub ulMaxRwSessionCount: CK_ULONG,
    pub ulRwSessionCount: CK_ULONG,
    pub ulMaxPinLen: CK_ULONG,
    pub ulMinPinLen: CK_ULONG,
    pub ulTotalPublicMemory: CK_ULONG,
    pub ulFreePublicMemory: CK_ULONG,
    pub ulTotalPrivateMemory: CK_ULONG,
    pub ulFreePrivateMemory: CK_ULONG,
    pub hardwareVersion: CK_VERSION,
    pub firmwareVersion: CK_VERSION,
    pub utcTime: [CK_CHAR; 16],
}

#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct CK_ECDH1_DERIVE_PARAMS {
    pub kdf: CK_EC_KDF_TYPE,
    pub ulSharedDataLen: CK_ULONG,
    pub pSharedData: CK_BYTE_PTR,
    pub ulPublicDataLen: CK_ULONG,
    pub pPublicData: CK_BYTE_PTR,
}

#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct CK_ECMQV_DERIVE_PARAMS {
    pub kdf: CK_EC_KDF_TYPE,
    pub ulSharedDataLen: CK_ULONG,
    pub pSharedData: CK_BYTE_PTR,
    pub ulPublicDataLen: CK_ULONG,
    pub pPublicData: CK_BYTE_PTR,
    pub ulPrivateDataLen: CK_ULONG,
    pub hPrivateData: CK_OBJECT_HANDLE,
    pub ulPublicDataLen2: CK_ULONG,
    pub pPublicData2: CK_BYTE_PTR,
    pub publicKey: CK_OBJECT_HANDLE,
}

#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct CK_GCM_MESSAGE_PARAMS {
    pub pIv: CK_BYTE_PTR,
    pub ulIvLen: CK_ULONG,
    pub ulIvFixedBits: CK_ULONG,
    pub ivGenerator: CK_GENERATOR_FUNCTION,
    pub pTag: CK_BYTE_PTR,
    pub ulTagBits: CK_ULONG,
}

#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct CK_RSA_PKCS_OAEP_PARAMS {
    pub hashAlg: CK_MECHANISM_TYPE,
    pub mgf: CK_RSA_PKCS_MGF_TYPE,
    pub source: CK_RSA_PKCS_OAEP_SOURCE_TYPE,
    pub pSourceData: CK_VOID_PTR,
    pub ulSourceDataLen: CK_ULONG,
}

#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct CK_RSA_AES_KEY_WRAP_PARAMS {
    pub ulAESKeyBits: CK_ULONG,
    pub pOAEPParams: *mut CK_RSA_PKCS_OAEP_PARAMS,
}

/// Records made only of integers and pointers start out zeroed, with
/// every pointer null
macro_rules! null_default {
    ($rec:ident { $($ptr:ident),* ; $($num:ident),* }) => {
        impl Default for $rec {
            fn default() -> Self {
                $rec {
                    $($ptr: std::ptr::null_mut(),)*
                    $($num: 0,)*
                }
            }
        }
    };
}

null_default!(CK_ATTRIBUTE { pValue; type_, ulValueLen });
null_default!(CK_MECHANISM { pParameter; mechanism, ulParameterLen });
null_default!(CK_ECDH1_DERIVE_PARAMS {
    pSharedData, pPublicData;
    kdf, ulSharedDataLen, ulPublicDataLen
});
null_default!(CK_ECMQV_DERIVE_PARAMS {
    pSharedData, pPublicData, pPublicData2;
    kdf, ulSharedDataLen, ulPublicDataLen, ulPrivateDataLen, hPrivateData,
    ulPublicDataLen2, publicKey
});
null_default!(CK_GCM_MESSAGE_PARAMS {
    pIv, pTag;
    ulIvLen, ulIvFixedBits, ivGenerator, ulTagBits
});
null_default!(CK_RSA_PKCS_OAEP_PARAMS {
    pSourceData;
    hashAlg, mgf, source, ulSourceDataLen
});
null_default!(CK_RSA_AES_KEY_WRAP_PARAMS { pOAEPParams; ulAESKeyBits });

/// Copies a string in a fixed size blank-padded array, truncating it if
/// it is too long
pub fn blank_padded<const N: usize>(s: &str) -> [CK_UTF8CHAR; N] {
    let mut buf = [b' '; N];
    let src = s.as_bytes();
    let len = std::cmp::min(src.len(), N);
    buf[..len].copy_from_slice(&src[..len]);
    buf
}

/// Returns the content of a blank-padded array without the trailing
/// padding (NUL bytes are treated as padding as well)
pub fn trim_blank_padded(buf: &[CK_UTF8CHAR]) -> String {
    let end = buf
        .iter()
        .rposition(|c| *c != b' ' && *c != 0)
        .map_or(0, |p| p + 1);
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

impl CK_DATE {
    /// Builds a date from the 8 ASCII digits form `YYYYMMDD`
    pub fn from_digits(digits: &[u8; 8]) -> CK_DATE {
        CK_DATE {
            year: [digits[0], digits[1], digits[2], digits[3]],
            month: [digits[4], digits[5]],
            day: [digits[6], digits[7]],
        }
    }

    pub fn to_digits(&self) -> [u8; 8] {
        [
            self.year[0],
            self.year[1],
            self.year[2],
            self.year[3],
            self.month[0],
            self.month[1],
            self.day[0],
            self.day[1],
        ]
    }
}
