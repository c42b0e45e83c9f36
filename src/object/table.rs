// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use crate::attribute::{attr_name, Attribute};
use crate::error::{Error, Result};
use crate::pkcs11::*;

use super::factory::ObjectLevel;

/// The attributes of one object, keyed by attribute id
///
/// Keeps declaration order (base level first) and never holds two
/// attributes with the same id. Only the owning object can modify it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeTable {
    attrs: Vec<Attribute>,
}

impl AttributeTable {
    /// Allocates one absent attribute for every declaration in the
    /// chain of levels
    ///
    /// When a derived level declares an attribute again the first
    /// declaration wins.
    pub(crate) fn from_levels(levels: &[ObjectLevel]) -> AttributeTable {
        let mut table = AttributeTable::default();
        for level in levels {
            for decl in level.attrs() {
                let _ = table.insert(Attribute::new(
                    decl.get_type(),
                    decl.get_attrtype(),
                ));
            }
        }
        table
    }

    /// Adds an attribute, returns false and leaves the table unchanged if
    /// the id is already present
    pub(crate) fn insert(&mut self, attr: Attribute) -> bool {
        if self.contains(attr.get_type()) {
            return false;
        }
        self.attrs.push(attr);
        true
    }

    pub fn contains(&self, t: CK_ATTRIBUTE_TYPE) -> bool {
        self.attrs.iter().any(|a| a.get_type() == t)
    }

    /// Returns the attribute with the given id
    ///
    /// Fails with an attribute not found error for ids that were never
    /// declared for this object.
    pub fn get(&self, t: CK_ATTRIBUTE_TYPE) -> Result<&Attribute> {
        match self.attrs.iter().find(|a| a.get_type() == t) {
            Some(a) => Ok(a),
            None => Err(Error::not_found(attr_name(t))),
        }
    }

    pub(crate) fn get_mut(
        &mut self,
        t: CK_ATTRIBUTE_TYPE,
    ) -> Result<&mut Attribute> {
        match self.attrs.iter_mut().find(|a| a.get_type() == t) {
            Some(a) => Ok(a),
            None => Err(Error::not_found(attr_name(t))),
        }
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Attribute> {
        self.attrs.iter_mut()
    }

    /// Iterates over the attributes in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attrs.iter()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}
