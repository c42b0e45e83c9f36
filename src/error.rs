// Copyright 2023 Simo Sorce
// See LICENSE.txt file for terms

use std::error;
use std::fmt;

use crate::pkcs11::*;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    origin: Option<Box<dyn error::Error + Send + Sync>>,
    errmsg: Option<String>,
    ckrv: CK_RV,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /* A Cryptoki-style error, see ckrv Error field */
    CkError,
    /* The attribute is not part of the object, see errmsg */
    AttributeNotFound,
    /* The attribute is known but holds no value */
    ValueNotPresent,
    /* An object or parameter could not be constructed */
    Construction,
    /* Mechanism parameters failed validation */
    ParamInvalid,
    /* Other error, see origin */
    Nested,
}

impl Error {
    pub fn ck_rv(ckrv: CK_RV) -> Error {
        Error {
            kind: ErrorKind::CkError,
            origin: None,
            errmsg: None,
            ckrv: ckrv,
        }
    }

    pub fn ck_rv_from_error<E>(ckrv: CK_RV, error: E) -> Error
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Error {
            kind: ErrorKind::CkError,
            origin: Some(error.into()),
            errmsg: None,
            ckrv: ckrv,
        }
    }

    pub fn ck_rv_with_errmsg(ckrv: CK_RV, errmsg: String) -> Error {
        Error {
            kind: ErrorKind::CkError,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: ckrv,
        }
    }

    pub fn not_found(errmsg: String) -> Error {
        Error {
            kind: ErrorKind::AttributeNotFound,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: CKR_ATTRIBUTE_TYPE_INVALID,
        }
    }

    pub fn not_present(ckrv: CK_RV, errmsg: String) -> Error {
        Error {
            kind: ErrorKind::ValueNotPresent,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: ckrv,
        }
    }

    pub fn construction(errmsg: String) -> Error {
        Error {
            kind: ErrorKind::Construction,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: CKR_ARGUMENTS_BAD,
        }
    }

    pub fn param_invalid(errmsg: String) -> Error {
        Error {
            kind: ErrorKind::ParamInvalid,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: CKR_MECHANISM_PARAM_INVALID,
        }
    }

    pub fn other_error<E>(error: E) -> Error
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Error {
            kind: ErrorKind::Nested,
            origin: Some(error.into()),
            errmsg: None,
            ckrv: CKR_GENERAL_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn attr_not_found(&self) -> bool {
        self.kind == ErrorKind::AttributeNotFound
    }

    pub fn value_not_present(&self) -> bool {
        self.kind == ErrorKind::ValueNotPresent
    }

    pub fn rv(&self) -> CK_RV {
        self.ckrv
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = self.errmsg.as_deref().unwrap_or("");
        match self.kind {
            ErrorKind::CkError => match (&self.errmsg, &self.origin) {
                (Some(e), _) => write!(f, "{}", e),
                (None, Some(o)) => write!(f, "0x{:08x}: {}", self.ckrv, o),
                (None, None) => write!(f, "0x{:08x}", self.ckrv),
            },
            ErrorKind::AttributeNotFound => {
                write!(f, "attribute not found: {}", msg)
            }
            ErrorKind::ValueNotPresent => {
                write!(f, "attribute value not present: {}", msg)
            }
            ErrorKind::Construction => write!(f, "invalid construction: {}", msg),
            ErrorKind::ParamInvalid => {
                write!(f, "invalid mechanism parameter: {}", msg)
            }
            ErrorKind::Nested => match &self.origin {
                Some(o) => fmt::Display::fmt(o, f),
                None => write!(f, "0x{:08x}", self.ckrv),
            },
        }
    }
}

impl error::Error for Error {}

impl From<CK_RV> for Error {
    fn from(error: CK_RV) -> Error {
        Error::ck_rv(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::other_error(error)
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Error {
        Error::other_error(error)
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(error: std::num::TryFromIntError) -> Error {
        Error::other_error(error)
    }
}

impl From<std::array::TryFromSliceError> for Error {
    fn from(error: std::array::TryFromSliceError) -> Error {
        Error::other_error(error)
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(error: std::convert::Infallible) -> Error {
        Error::other_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_error_shows_origin() {
        let origin = u8::try_from(300u32).unwrap_err();
        let expected = origin.to_string();
        let err = Error::from(origin);
        assert_eq!(err.kind(), ErrorKind::Nested);
        assert_eq!(err.rv(), CKR_GENERAL_ERROR);
        assert_eq!(err.to_string(), expected);

        let err = Error::other_error("bad config");
        assert_eq!(err.to_string(), "bad config");
    }
}
