// Copyright 2023-2026 Simo Sorce
// See LICENSE.txt file for terms

//! This module defines the typed representation of PKCS#11 objects
//! (`Object`). Every object is made of a chain of levels (the object class
//! hierarchy) each declaring a static list of attributes; the object owns
//! a table holding one typed attribute per declaration. Objects are built
//! as bare templates or materialized from a token through a [Session].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

use crate::attribute::{attr_name, AttrType, Attribute, CkAttrs};
use crate::config::{Config, Render};
use crate::error::{Error, Result};
use crate::pkcs11::*;
use crate::session::{Fetched, Session};

#[cfg(feature = "log")]
use log::{debug, warn};

pub mod certs;
pub mod domain;
pub mod factory;
pub mod hwfeature;
pub mod key;
mod table;

pub use factory::{
    discriminator_name, OAFlags, ObjectAttr, ObjectKind, ObjectLevel,
};
pub use table::AttributeTable;

/// Helper macro that generates methods to check specific boolean
/// attributes on objects
macro_rules! create_bool_checker {
    (make $name:ident; from $id:expr; def $def:expr) => {
        #[doc = concat!("Returns the value of [", stringify!($id), "] as a boolean")]
        pub fn $name(&self) -> bool {
            match self.attributes.get($id) {
                Ok(a) => a.to_bool().unwrap_or($def),
                Err(_) => $def,
            }
        }
    };
}

/// Helper macro that generates methods to retrieve attributes
/// values of a specific type from objects
macro_rules! attr_as_type {
    (make $name:ident; with $r:ty; via $conv:ident) => {
        #[doc = concat!("Returns the value of the attribute as a `", stringify!($r), "`")]
        pub fn $name(&self, t: CK_ULONG) -> Result<$r> {
            self.attributes.get(t)?.$conv()
        }
    };
}

/// Helper macro that generates typed setters routed through the
/// attribute table
macro_rules! attr_setter {
    (make $name:ident; with $v:ty; via $conv:ident) => {
        #[doc = concat!("Sets the attribute from a `", stringify!($v), "`")]
        pub fn $name(&mut self, t: CK_ULONG, val: $v) -> Result<()> {
            self.writable_attr(t)?.$conv(val)
        }
    };
}

/// A typed PKCS#11 object
///
/// For key objects holding secret material every attribute is zeroized
/// when the object is dropped.
#[derive(Debug, Clone)]
pub struct Object {
    /// The concrete object type
    kind: ObjectKind,
    /// The object handle value
    ///
    /// CK_INVALID_HANDLE on templates
    handle: CK_OBJECT_HANDLE,
    /// The session the object was read from, if any
    session: Option<Weak<dyn Session>>,
    /// The object attributes
    attributes: AttributeTable,
    /// Flag to indicate if the object needs to be zeroized when it is
    /// drop()ed
    zeroize: bool,
}

impl Drop for Object {
    fn drop(&mut self) {
        if self.zeroize {
            for a in self.attributes.iter_mut() {
                a.zeroize()
            }
        }
    }
}

impl Object {
    /// Creates an object of the given kind with all the attributes of its
    /// levels allocated and absent, except the class and subtype
    /// discriminators that are set
    pub fn template(kind: ObjectKind) -> Object {
        let mut attributes = AttributeTable::from_levels(kind.levels());
        /* every kind declares its discriminators as numbers */
        let ret = attributes
            .get_mut(CKA_CLASS)
            .and_then(|a| a.set_ulong(kind.class()));
        debug_assert!(ret.is_ok(), "{}: no class attribute", kind.name());
        if let (Some(t), Some(val)) =
            (ObjectKind::subtype_attr(kind.class()), kind.subtype())
        {
            let ret = attributes.get_mut(t).and_then(|a| a.set_ulong(val));
            debug_assert!(
                ret.is_ok(),
                "{}: no {}",
                kind.name(),
                attr_name(t)
            );
        }
        Object {
            kind: kind,
            handle: CK_INVALID_HANDLE,
            session: None,
            attributes: attributes,
            zeroize: kind.is_sensitive(),
        }
    }

    /// Builds an object of the given kind reading all its attributes from
    /// the token object `handle` with the default configuration
    pub fn materialize(
        kind: ObjectKind,
        session: &Arc<dyn Session>,
        handle: CK_OBJECT_HANDLE,
    ) -> Result<Object> {
        Object::materialize_with(kind, session, handle, &Config::default())
    }

    /// Builds an object of the given kind reading all its attributes from
    /// the token object `handle`
    ///
    /// All the absent attributes are fetched in a single batch. Values the
    /// token refuses to reveal are marked sensitive. Unsupported values
    /// stay absent unless the configuration asks for strict behavior.
    /// Errors reported by the session are always returned.
    pub fn materialize_with(
        kind: ObjectKind,
        session: &Arc<dyn Session>,
        handle: CK_OBJECT_HANDLE,
        conf: &Config,
    ) -> Result<Object> {
        let mut obj = Object::template(kind);
        obj.handle = handle;
        obj.session = Some(Arc::downgrade(session));
        obj.fetch(session.as_ref(), conf)?;
        Ok(obj)
    }

    /// Builds an object from a token handle, the concrete kind is chosen
    /// from the class and subtype discriminators read from the token
    pub fn from_handle(
        session: &Arc<dyn Session>,
        handle: CK_OBJECT_HANDLE,
    ) -> Result<Object> {
        Object::from_handle_with(session, handle, &Config::default())
    }

    pub fn from_handle_with(
        session: &Arc<dyn Session>,
        handle: CK_OBJECT_HANDLE,
        conf: &Config,
    ) -> Result<Object> {
        let class = probe_ulong(session.as_ref(), handle, CKA_CLASS)?;
        let subtype = match ObjectKind::subtype_attr(class) {
            Some(t) => Some(probe_ulong(session.as_ref(), handle, t)?),
            None => None,
        };
        let kind = ObjectKind::from_discriminators(class, subtype)?;
        #[cfg(feature = "log")]
        debug!("object {} is a {}", handle, kind.name());
        Object::materialize_with(kind, session, handle, conf)
    }

    fn fetch(&mut self, session: &dyn Session, conf: &Config) -> Result<()> {
        let types: Vec<CK_ATTRIBUTE_TYPE> = self
            .attributes
            .iter()
            .filter(|a| !a.is_present())
            .map(|a| a.get_type())
            .collect();
        if types.is_empty() {
            return Ok(());
        }
        let fetched = session.fetch_attributes(self.handle, &types)?;
        let mut answered = Vec::with_capacity(fetched.len());
        for (t, f) in fetched {
            if !types.contains(&t) {
                #[cfg(feature = "log")]
                debug!("ignoring unrequested attribute {}", attr_name(t));
                continue;
            }
            answered.push(t);
            let attr = self.attributes.get_mut(t)?;
            let ret = match f {
                Fetched::Value(raw) => attr.set_from_raw(&raw),
                Fetched::Template(raw) => attr.set_template_from_raw(&raw),
                Fetched::Sensitive => {
                    attr.mark_sensitive();
                    Ok(())
                }
                Fetched::Unsupported => Err(unsupported(t)),
            };
            if let Err(e) = ret {
                if conf.materialize.strict {
                    return Err(e);
                }
                #[cfg(feature = "log")]
                warn!("{}: {} left absent: {}", self.kind.name(), attr_name(t), e);
            }
        }
        for t in types.iter().filter(|t| !answered.contains(t)) {
            if conf.materialize.strict {
                return Err(unsupported(*t));
            }
            #[cfg(feature = "log")]
            warn!("{}: {} not returned by the token", self.kind.name(), attr_name(*t));
        }
        Ok(())
    }

    pub fn get_kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn get_class(&self) -> CK_OBJECT_CLASS {
        self.kind.class()
    }

    pub fn get_handle(&self) -> CK_OBJECT_HANDLE {
        self.handle
    }

    /// Returns the session this object was read from, if it is still
    /// alive
    pub fn get_session(&self) -> Option<Arc<dyn Session>> {
        self.session.as_ref().and_then(|s| s.upgrade())
    }

    /// Returns a reference to the attribute table
    pub fn get_attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    create_bool_checker! {make is_token; from CKA_TOKEN; def false}
    create_bool_checker! {make is_private; from CKA_PRIVATE; def true}
    create_bool_checker! {make is_sensitive; from CKA_SENSITIVE; def true}
    create_bool_checker! {make is_extractable; from CKA_EXTRACTABLE; def false}
    create_bool_checker! {make is_modifiable; from CKA_MODIFIABLE; def true}

    /// Returns the attribute with the given id
    ///
    /// Fails with an attribute not found error if the object does not
    /// declare it
    pub fn get_attr(&self, t: CK_ULONG) -> Result<&Attribute> {
        self.attributes.get(t)
    }

    attr_as_type! {make get_attr_as_bool; with bool; via to_bool}
    attr_as_type! {make get_attr_as_ulong; with CK_ULONG; via to_ulong}
    attr_as_type! {make get_attr_as_string; with &str; via to_str}
    attr_as_type! {make get_attr_as_bytes; with &Vec<u8>; via to_bytes}
    attr_as_type! {make get_attr_as_date_string; with String; via to_date_string}
    attr_as_type! {make get_attr_as_ulong_array; with &Vec<CK_ULONG>; via to_ulong_array}

    fn writable_attr(&mut self, t: CK_ULONG) -> Result<&mut Attribute> {
        if let Some(decl) = self.kind.find_decl(t) {
            if decl.is(OAFlags::Discriminator) {
                return Err(Error::ck_rv_with_errmsg(
                    CKR_ATTRIBUTE_READ_ONLY,
                    format!("{} can't be changed", attr_name(t)),
                ));
            }
        }
        self.attributes.get_mut(t)
    }

    /// Replaces an attribute with a new one of the same id and kind
    pub fn set_attr(&mut self, attr: Attribute) -> Result<()> {
        let a = self.writable_attr(attr.get_type())?;
        if a.get_attrtype() != attr.get_attrtype() {
            return Err(CKR_ATTRIBUTE_TYPE_INVALID)?;
        }
        a.zeroize();
        *a = attr;
        Ok(())
    }

    attr_setter! {make set_bool; with bool; via set_bool}
    attr_setter! {make set_ulong; with CK_ULONG; via set_ulong}
    attr_setter! {make set_mechanism; with CK_MECHANISM_TYPE; via set_ulong}
    attr_setter! {make set_string; with String; via set_string}
    attr_setter! {make set_bytes; with Vec<u8>; via set_bytes}
    attr_setter! {make set_date; with CK_DATE; via set_date}
    attr_setter! {make set_mechanisms; with Vec<CK_MECHANISM_TYPE>; via set_ulong_array}
    attr_setter! {make set_template; with Vec<Attribute>; via set_template}

    /// Drops the value of an attribute
    pub fn unset(&mut self, t: CK_ULONG) -> Result<()> {
        self.writable_attr(t)?.unset();
        Ok(())
    }

    /// Encodes all present attributes as a native template, usable to
    /// create or search objects on a token
    pub fn to_ck_template(&self) -> Result<CkAttrs> {
        let mut tmpl = CkAttrs::with_capacity(self.attributes.len());
        tmpl.zeroize = self.zeroize;
        for a in self.attributes.iter() {
            tmpl.add_attribute(a)?;
        }
        Ok(tmpl)
    }

    /// Renders the object one attribute per line, grouped by level from
    /// the base level to the most derived one
    pub fn render(&self, conf: &Render) -> String {
        let mut out = String::from(self.kind.name());
        let mut seen = Vec::with_capacity(self.attributes.len());
        for level in self.kind.levels() {
            out.push('\n');
            out.push_str(level.name());
            out.push(':');
            for decl in level.attrs() {
                /* only print attributes at their first declaration */
                if seen.contains(&decl.get_type()) {
                    continue;
                }
                seen.push(decl.get_type());
                let Ok(attr) = self.attributes.get(decl.get_type()) else {
                    continue;
                };
                let discriminator = decl.is(OAFlags::Discriminator);
                let value = match (discriminator, attr.to_ulong()) {
                    (true, Ok(v)) => {
                        match discriminator_name(decl.get_type(), v) {
                            Some(name) => name.to_string(),
                            None => attr.to_string(),
                        }
                    }
                    _ => attr.to_string(),
                };
                out.push('\n');
                out.push_str(&conf.indent);
                out.push_str(decl.label());
                out.push_str(": ");
                out.push_str(&value);
            }
        }
        out
    }
}

fn unsupported(t: CK_ATTRIBUTE_TYPE) -> Error {
    Error::ck_rv_with_errmsg(
        CKR_ATTRIBUTE_TYPE_INVALID,
        format!("{} is not supported by the token", attr_name(t)),
    )
}

/// Reads a single numeric attribute used to identify the object type
fn probe_ulong(
    session: &dyn Session,
    handle: CK_OBJECT_HANDLE,
    t: CK_ATTRIBUTE_TYPE,
) -> Result<CK_ULONG> {
    let fetched = session.fetch_attributes(handle, &[t])?;
    let mut attr = Attribute::new(t, AttrType::NumType);
    match fetched.into_iter().find(|(ft, _)| *ft == t) {
        Some((_, Fetched::Value(raw))) if attr.set_from_raw(&raw).is_ok() => {
            attr.to_ulong()
        }
        _ => Err(Error::construction(format!(
            "object {} has no readable {}",
            handle,
            attr_name(t)
        ))),
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.attributes == other.attributes
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.attributes.hash(state);
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&Render::default()))
    }
}
