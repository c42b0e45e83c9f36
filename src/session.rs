// Copyright 2023 Simo Sorce
// See LICENSE.txt file for terms

//! The interface to the session collaborator that talks to the token.
//!
//! Objects never perform native calls themselves, they only ask the
//! session that owns them to fetch attribute values by handle.

use std::fmt::Debug;

use crate::error::Result;
use crate::pkcs11::*;

/// The outcome of fetching a single attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// The raw native encoding of the value
    Value(Vec<u8>),
    /// The raw values of the members of a nested attribute template
    Template(Vec<(CK_ATTRIBUTE_TYPE, Vec<u8>)>),
    /// The token refuses to reveal the value
    Sensitive,
    /// The token does not know this attribute for the object
    Unsupported,
}

/// A session on a token able to read object attributes
///
/// Implementations map transport, permission and handle errors to an
/// `Err` carrying the relevant CK_RV. A per-attribute refusal is not an
/// error and must be reported through [Fetched].
pub trait Session: Debug {
    /// Fetches the values of the listed attributes of the object
    /// identified by `handle`, in one batch
    ///
    /// The result may omit attributes, those are treated as unsupported.
    fn fetch_attributes(
        &self,
        handle: CK_OBJECT_HANDLE,
        types: &[CK_ATTRIBUTE_TYPE],
    ) -> Result<Vec<(CK_ATTRIBUTE_TYPE, Fetched)>>;
}
