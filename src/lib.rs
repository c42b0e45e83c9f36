// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! Typed PKCS#11 objects and mechanism parameters
//!
//! Objects (data, certificates, keys, domain parameters, hardware
//! features) are modeled as a table of typed attributes declared along
//! their class hierarchy, and can be built as templates or materialized
//! from a token through a [session::Session]. Mechanism parameters are
//! typed values that convert to and from the native records passed to a
//! token.

/// The PKCS#11 constants, types and native records
pub mod pkcs11 {
    pub use ::pkcs11::*;
}

pub mod attribute;
pub mod config;
pub mod error;
pub mod mechanism;
pub mod object;
pub mod params;
pub mod session;

#[cfg(feature = "log")]
pub mod log;

mod misc;

pub use attribute::{AttrType, Attribute, CkAttrs};
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use mechanism::{Mechanism, NativeMechanism};
pub use object::{AttributeTable, Object, ObjectKind};
pub use params::{NativeParams, NativeRecord, Parameters, Params};
pub use session::{Fetched, Session};

#[cfg(test)]
mod tests;
