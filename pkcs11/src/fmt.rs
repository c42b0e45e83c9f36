// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! Human readable renderings of the native records, meant for debug
//! output. Every field is printed on its own line.

use std::fmt;

use crate::*;

const INDENT: &str = "  ";

macro_rules! flag_names {
    ($($flag:ident),* $(,)?) => {
        &[$(($flag, stringify!($flag)),)*]
    };
}

static TOKEN_FLAGS: &[(CK_FLAGS, &str)] = flag_names!(
    CKF_RNG,
    CKF_WRITE_PROTECTED,
    CKF_LOGIN_REQUIRED,
    CKF_USER_PIN_INITIALIZED,
    CKF_RESTORE_KEY_NOT_NEEDED,
    CKF_CLOCK_ON_TOKEN,
    CKF_PROTECTED_AUTHENTICATION_PATH,
    CKF_DUAL_CRYPTO_OPERATIONS,
    CKF_TOKEN_INITIALIZED,
    CKF_SECONDARY_AUTHENTICATION,
    CKF_USER_PIN_COUNT_LOW,
    CKF_USER_PIN_FINAL_TRY,
    CKF_USER_PIN_LOCKED,
    CKF_USER_PIN_TO_BE_CHANGED,
    CKF_SO_PIN_COUNT_LOW,
    CKF_SO_PIN_FINAL_TRY,
    CKF_SO_PIN_LOCKED,
    CKF_SO_PIN_TO_BE_CHANGED,
    CKF_ERROR_STATE,
);

static MECHANISM_FLAGS: &[(CK_FLAGS, &str)] = flag_names!(
    CKF_HW,
    CKF_MESSAGE_ENCRYPT,
    CKF_MESSAGE_DECRYPT,
    CKF_MESSAGE_SIGN,
    CKF_MESSAGE_VERIFY,
    CKF_MULTI_MESSAGE,
    CKF_FIND_OBJECTS,
    CKF_ENCRYPT,
    CKF_DECRYPT,
    CKF_DIGEST,
    CKF_SIGN,
    CKF_SIGN_RECOVER,
    CKF_VERIFY,
    CKF_VERIFY_RECOVER,
    CKF_GENERATE,
    CKF_GENERATE_KEY_PAIR,
    CKF_WRAP,
    CKF_UNWRAP,
    CKF_DERIVE,
    CKF_EC_F_P,
    CKF_EC_F_2M,
    CKF_EC_ECPARAMETERS,
    CKF_EC_OID,
    CKF_EC_UNCOMPRESS,
    CKF_EC_COMPRESS,
    CKF_EC_CURVENAME,
);

fn flags_to_string(flags: CK_FLAGS, names: &[(CK_FLAGS, &str)]) -> String {
    let mut parts = Vec::new();
    let mut rest = flags;
    for (flag, name) in names {
        if flags & flag != 0 {
            parts.push(name.to_string());
            rest &= !flag;
        }
    }
    if rest != 0 {
        parts.push(format!("0x{:x}", rest));
    }
    if parts.is_empty() {
        return "0".to_string();
    }
    parts.join(" | ")
}

/// Renders the token information flags by name
pub fn token_flags_to_string(flags: CK_FLAGS) -> String {
    flags_to_string(flags, TOKEN_FLAGS)
}

/// Renders the mechanism information flags by name
pub fn mechanism_flags_to_string(flags: CK_FLAGS) -> String {
    flags_to_string(flags, MECHANISM_FLAGS)
}

/* Maximum counts know both sentinels, plain counts and memory sizes
 * can only be unavailable */
fn max_count(val: CK_ULONG) -> String {
    match val {
        CK_EFFECTIVELY_INFINITE => "CK_EFFECTIVELY_INFINITE".to_string(),
        CK_UNAVAILABLE_INFORMATION => "CK_UNAVAILABLE_INFORMATION".to_string(),
        v => v.to_string(),
    }
}

fn count(val: CK_ULONG) -> String {
    match val {
        CK_UNAVAILABLE_INFORMATION => "CK_UNAVAILABLE_INFORMATION".to_string(),
        v => v.to_string(),
    }
}

/// Reads a buffer referenced by a native record
///
/// Null pointers and zero lengths yield an empty vector. The caller must
/// guarantee a non null pointer references at least `len` readable bytes.
fn native_buffer(ptr: *const u8, len: CK_ULONG) -> Vec<u8> {
    let Ok(size) = usize::try_from(len) else {
        return Vec::new();
    };
    if ptr.is_null() || size == 0 {
        return Vec::new();
    }
    unsafe { std::slice::from_raw_parts(ptr, size) }.to_vec()
}

impl fmt::Display for CK_VERSION {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

impl fmt::Display for CK_DATE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.to_digits();
        write!(
            f,
            "{}-{}-{}",
            String::from_utf8_lossy(&d[0..4]),
            String::from_utf8_lossy(&d[4..6]),
            String::from_utf8_lossy(&d[6..8])
        )
    }
}

impl fmt::Display for CK_TOKEN_INFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{INDENT}label: {}", trim_blank_padded(&self.label))?;
        writeln!(
            f,
            "{INDENT}manufacturerID: {}",
            trim_blank_padded(&self.manufacturerID)
        )?;
        writeln!(f, "{INDENT}model: {}", trim_blank_padded(&self.model))?;
        writeln!(
            f,
            "{INDENT}serialNumber: {}",
            trim_blank_padded(&self.serialNumber)
        )?;
        writeln!(f, "{INDENT}flags: {}", token_flags_to_string(self.flags))?;
        writeln!(
            f,
            "{INDENT}ulMaxSessionCount: {}",
            max_count(self.ulMaxSessionCount)
        )?;
        writeln!(f, "{INDENT}ulSessionCount: {}", count(self.ulSessionCount))?;
        writeln!(
            f,
            "{INDENT}ulMaxRwSessionCount: {}",
            max_count(self.ulMaxRwSessionCount)
        )?;
        writeln!(
            f,
            "{INDENT}ulRwSessionCount: {}",
            count(self.ulRwSessionCount)
        )?;
        writeln!(f, "{INDENT}ulMaxPinLen: {}", self.ulMaxPinLen)?;
        writeln!(f, "{INDENT}ulMinPinLen: {}", self.ulMinPinLen)?;
        writeln!(
            f,
            "{INDENT}ulTotalPublicMemory: {}",
            count(self.ulTotalPublicMemory)
        )?;
        writeln!(
            f,
            "{INDENT}ulFreePublicMemory: {}",
            count(self.ulFreePublicMemory)
        )?;
        writeln!(
            f,
            "{INDENT}ulTotalPrivateMemory: {}",
            count(self.ulTotalPrivateMemory)
        )?;
        writeln!(
            f,
            "{INDENT}ulFreePrivateMemory: {}",
            count(self.ulFreePrivateMemory)
        )?;
        writeln!(f, "{INDENT}hardwareVersion: {}", self.hardwareVersion)?;
        writeln!(f, "{INDENT}firmwareVersion: {}", self.firmwareVersion)?;
        write!(f, "{INDENT}utcTime: {}", trim_blank_padded(&self.utcTime))
    }
}

impl fmt::Display for CK_MECHANISM_INFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{INDENT}ulMinKeySize: {}", count(self.ulMinKeySize))?;
        writeln!(f, "{INDENT}ulMaxKeySize: {}", count(self.ulMaxKeySize))?;
        write!(f, "{INDENT}flags: {}", mechanism_flags_to_string(self.flags))
    }
}

impl fmt::Display for CK_ECMQV_DERIVE_PARAMS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = native_buffer(self.pSharedData, self.ulSharedDataLen);
        let public = native_buffer(self.pPublicData, self.ulPublicDataLen);
        let public2 = native_buffer(self.pPublicData2, self.ulPublicDataLen2);
        writeln!(f, "{INDENT}kdf: 0x{:08x}", self.kdf)?;
        writeln!(f, "{INDENT}ulSharedDataLen: {}", self.ulSharedDataLen)?;
        writeln!(f, "{INDENT}pSharedData: {}", hex::encode(shared))?;
        writeln!(f, "{INDENT}ulPublicDataLen: {}", self.ulPublicDataLen)?;
        writeln!(f, "{INDENT}pPublicData: {}", hex::encode(public))?;
        writeln!(f, "{INDENT}ulPrivateDataLen: {}", self.ulPrivateDataLen)?;
        writeln!(f, "{INDENT}hPrivateData: {}", self.hPrivateData)?;
        writeln!(f, "{INDENT}ulPublicDataLen2: {}", self.ulPublicDataLen2)?;
        writeln!(f, "{INDENT}pPublicData2: {}", hex::encode(public2))?;
        write!(f, "{INDENT}publicKey: {}", self.publicKey)
    }
}

impl fmt::Display for CK_ECDH1_DERIVE_PARAMS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = native_buffer(self.pSharedData, self.ulSharedDataLen);
        let public = native_buffer(self.pPublicData, self.ulPublicDataLen);
        writeln!(f, "{INDENT}kdf: 0x{:08x}", self.kdf)?;
        writeln!(f, "{INDENT}ulSharedDataLen: {}", self.ulSharedDataLen)?;
        writeln!(f, "{INDENT}pSharedData: {}", hex::encode(shared))?;
        writeln!(f, "{INDENT}ulPublicDataLen: {}", self.ulPublicDataLen)?;
        write!(f, "{INDENT}pPublicData: {}", hex::encode(public))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_info_sentinels() {
        let info = CK_TOKEN_INFO {
            label: blank_padded("My Token"),
            manufacturerID: blank_padded("ACME"),
            model: blank_padded("M1"),
            serialNumber: blank_padded("0001"),
            flags: CKF_RNG | CKF_TOKEN_INITIALIZED,
            ulMaxSessionCount: CK_EFFECTIVELY_INFINITE,
            ulSessionCount: CK_UNAVAILABLE_INFORMATION,
            ulMaxRwSessionCount: CK_UNAVAILABLE_INFORMATION,
            ulRwSessionCount: 0,
            ulMaxPinLen: 64,
            ulMinPinLen: 4,
            ulTotalPublicMemory: CK_UNAVAILABLE_INFORMATION,
            ulFreePublicMemory: 1024,
            ulTotalPrivateMemory: CK_UNAVAILABLE_INFORMATION,
            ulFreePrivateMemory: CK_UNAVAILABLE_INFORMATION,
            hardwareVersion: CK_VERSION { major: 1, minor: 2 },
            firmwareVersion: CK_VERSION { major: 3, minor: 0 },
            utcTime: blank_padded(""),
        };
        let s = info.to_string();
        assert!(s.contains("  label: My Token\n"));
        assert!(s.contains("  manufacturerID: ACME\n"));
        assert!(s.contains("  flags: CKF_RNG | CKF_TOKEN_INITIALIZED\n"));
        assert!(s.contains("  ulMaxSessionCount: CK_EFFECTIVELY_INFINITE\n"));
        assert!(s.contains("  ulSessionCount: CK_UNAVAILABLE_INFORMATION\n"));
        assert!(
            s.contains("  ulMaxRwSessionCount: CK_UNAVAILABLE_INFORMATION\n")
        );
        /* a zero count is a number, not a sentinel */
        assert!(s.contains("  ulRwSessionCount: 0\n"));
        assert!(s.contains("  ulFreePublicMemory: 1024\n"));
        assert!(s.contains("  hardwareVersion: 1.02\n"));
        assert!(s.ends_with("  utcTime: "));
    }

    #[test]
    fn blank_padding() {
        let b: [CK_UTF8CHAR; 8] = blank_padded("abc");
        assert_eq!(&b, b"abc     ");
        assert_eq!(trim_blank_padded(&b), "abc");
        let b: [CK_UTF8CHAR; 4] = blank_padded("abcdef");
        assert_eq!(&b, b"abcd");
        assert_eq!(trim_blank_padded(&[0u8; 4]), "");
    }

    #[test]
    fn flags_with_unknown_bits() {
        assert_eq!(token_flags_to_string(0), "0");
        assert_eq!(
            mechanism_flags_to_string(CKF_DERIVE | 0x8000_0000),
            "CKF_DERIVE | 0x80000000"
        );
    }

    #[test]
    fn ecmqv_params_rendering() {
        let mut public = vec![0x04u8, 0xab];
        let params = CK_ECMQV_DERIVE_PARAMS {
            kdf: CKD_NULL,
            ulPublicDataLen: 2,
            pPublicData: public.as_mut_ptr(),
            hPrivateData: 7,
            publicKey: 9,
            ..Default::default()
        };
        let s = params.to_string();
        assert!(s.contains("  kdf: 0x00000001\n"));
        assert!(s.contains("  pSharedData: \n"));
        assert!(s.contains("  pPublicData: 04ab\n"));
        assert!(s.contains("  hPrivateData: 7\n"));
        assert!(s.ends_with("  publicKey: 9"));
    }
}
