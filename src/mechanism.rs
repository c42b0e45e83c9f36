// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use std::fmt;

use crate::config::Render;
use crate::error::Result;
use crate::params::{NativeParams, Parameters, Params};
use crate::pkcs11::*;

/// A mechanism type with its optional typed parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mechanism {
    mechanism: CK_MECHANISM_TYPE,
    params: Option<Params>,
}

impl Mechanism {
    pub fn new(mechanism: CK_MECHANISM_TYPE) -> Mechanism {
        Mechanism {
            mechanism: mechanism,
            params: None,
        }
    }

    pub fn with_params<P: Into<Params>>(
        mechanism: CK_MECHANISM_TYPE,
        params: P,
    ) -> Mechanism {
        Mechanism {
            mechanism: mechanism,
            params: Some(params.into()),
        }
    }

    pub fn get_type(&self) -> CK_MECHANISM_TYPE {
        self.mechanism
    }

    pub fn get_params(&self) -> Option<&Params> {
        self.params.as_ref()
    }

    /// Builds the native `CK_MECHANISM`, validating the parameters
    pub fn to_native(&self) -> Result<NativeMechanism> {
        let params = match &self.params {
            Some(p) => Some(p.to_native()?),
            None => None,
        };
        let mech = match &params {
            Some(p) => CK_MECHANISM {
                mechanism: self.mechanism,
                pParameter: p.as_void_ptr(),
                ulParameterLen: p.len()?,
            },
            None => CK_MECHANISM {
                mechanism: self.mechanism,
                pParameter: std::ptr::null_mut(),
                ulParameterLen: 0,
            },
        };
        Ok(NativeMechanism {
            mech: mech,
            params: params,
        })
    }

    /// Reads back the parameters from a native mechanism after the token
    /// updated them
    pub fn refresh(&mut self, native: &NativeMechanism) -> Result<()> {
        match (&mut self.params, &native.params) {
            (Some(p), Some(n)) => p.refresh(n),
            (None, None) => Ok(()),
            _ => Err(CKR_MECHANISM_PARAM_INVALID)?,
        }
    }

    /// Renders the mechanism type followed by its parameters, if any
    pub fn render(&self, conf: &Render) -> String {
        let mut out = format!("Mechanism: 0x{:08x}", self.mechanism);
        if let Some(p) = &self.params {
            out.push('\n');
            out.push_str(&p.render(conf));
        }
        out
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Render::default()))
    }
}

/// A native `CK_MECHANISM` together with the parameter record it points
/// to
///
/// The record is owned, so the pointer in the `CK_MECHANISM` is valid
/// for as long as this value is alive.
#[derive(Debug)]
pub struct NativeMechanism {
    mech: CK_MECHANISM,
    params: Option<NativeParams>,
}

impl NativeMechanism {
    pub fn as_ck_mechanism(&self) -> &CK_MECHANISM {
        &self.mech
    }

    pub fn as_ptr(&self) -> *const CK_MECHANISM {
        &self.mech as *const CK_MECHANISM
    }

    pub fn params(&self) -> Option<&NativeParams> {
        self.params.as_ref()
    }

    pub fn params_mut(&mut self) -> Option<&mut NativeParams> {
        self.params.as_mut()
    }
}
