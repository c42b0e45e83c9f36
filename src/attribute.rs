// Copyright 2023 Simo Sorce
// See LICENSE.txt file for terms

//! This module provides the typed attribute value ([Attribute]) used by
//! every object, the conversion to and from the raw native encoding used
//! at the token boundary ([CkAttrs]), and the static mapping between
//! PKCS#11 attribute type values and the data type they represent as
//! described in the [AttrType] enumeration.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::misc::{sizeof, void_ptr, zeromem, CK_ULONG_SIZE};
use crate::pkcs11::*;

use itertools::Itertools;

/// List of attribute types we understand
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AttrType {
    BoolType,
    NumType,
    MechType,
    StringType,
    BytesType,
    DateType,
    UlongArrayType,
    AttrArrayType,
}

impl AttrType {
    /// Finds and return the attribute id and type from the PKCS#11 name
    pub fn attr_name_to_id_type(s: &str) -> Result<(CK_ULONG, AttrType)> {
        match Attrmap::search_by_name(s) {
            Some(a) => Ok((a.id, a.atype)),
            None => Err(Error::not_found(s.to_string())),
        }
    }

    /// Finds the attribute type from the attribute id
    pub fn attr_id_to_attrtype(id: CK_ULONG) -> Result<AttrType> {
        match Attrmap::search_by_id(id) {
            Some(a) => Ok(a.atype),
            None => Err(CKR_ATTRIBUTE_TYPE_INVALID)?,
        }
    }
}

/// Returns the printable name of an attribute id, or its hex value if
/// the attribute is not known
pub fn attr_name(id: CK_ULONG) -> String {
    match Attrmap::search_by_id(id) {
        Some(a) => a.name.to_string(),
        None => format!("0x{:08x}", id),
    }
}

/// Struct to map a PKCS#11 attribute to a type and a printable name
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Attrmap<'a> {
    id: CK_ULONG,
    name: &'a str,
    atype: AttrType,
}

impl PartialOrd for Attrmap<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Attrmap<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Attrmap<'_> {
    /// Convenience function to efficiently search for a mapping by id
    pub fn search_by_id(id: CK_ULONG) -> Option<&'static Attrmap<'static>> {
        match ATTRMAP.binary_search_by(|a| a.id.cmp(&id)) {
            Ok(i) => Some(&ATTRMAP[i]),
            Err(_) => None,
        }
    }

    /// Convenience function to search for a mapping by name
    pub fn search_by_name(s: &str) -> Option<&'static Attrmap<'static>> {
        ATTRMAP.iter().find(|a| a.name == s)
    }
}

/// Helper macro to populate the static attributes map
macro_rules! attrmap_element {
    ($id:expr; as $attrtype:ident) => {
        Attrmap {
            id: $id,
            name: stringify!($id),
            atype: AttrType::$attrtype,
        }
    };
}

/// The main attributes map, list all known attributes sorted by id
static ATTRMAP: &[Attrmap<'_>] = &[
    attrmap_element!(CKA_CLASS; as NumType),
    attrmap_element!(CKA_TOKEN; as BoolType),
    attrmap_element!(CKA_PRIVATE; as BoolType),
    attrmap_element!(CKA_LABEL; as StringType),
    attrmap_element!(CKA_UNIQUE_ID; as StringType),
    attrmap_element!(CKA_APPLICATION; as StringType),
    attrmap_element!(CKA_VALUE; as BytesType),
    attrmap_element!(CKA_OBJECT_ID; as BytesType),
    attrmap_element!(CKA_CERTIFICATE_TYPE; as NumType),
    attrmap_element!(CKA_ISSUER; as BytesType),
    attrmap_element!(CKA_SERIAL_NUMBER; as BytesType),
    attrmap_element!(CKA_AC_ISSUER; as BytesType),
    attrmap_element!(CKA_OWNER; as BytesType),
    attrmap_element!(CKA_ATTR_TYPES; as BytesType),
    attrmap_element!(CKA_TRUSTED; as BoolType),
    attrmap_element!(CKA_CERTIFICATE_CATEGORY; as NumType),
    attrmap_element!(CKA_JAVA_MIDP_SECURITY_DOMAIN; as NumType),
    attrmap_element!(CKA_URL; as StringType),
    attrmap_element!(CKA_HASH_OF_SUBJECT_PUBLIC_KEY; as BytesType),
    attrmap_element!(CKA_HASH_OF_ISSUER_PUBLIC_KEY; as BytesType),
    attrmap_element!(CKA_NAME_HASH_ALGORITHM; as MechType),
    attrmap_element!(CKA_CHECK_VALUE; as BytesType),
    attrmap_element!(CKA_KEY_TYPE; as NumType),
    attrmap_element!(CKA_SUBJECT; as BytesType),
    attrmap_element!(CKA_ID; as BytesType),
    attrmap_element!(CKA_SENSITIVE; as BoolType),
    attrmap_element!(CKA_ENCRYPT; as BoolType),
    attrmap_element!(CKA_DECRYPT; as BoolType),
    attrmap_element!(CKA_WRAP; as BoolType),
    attrmap_element!(CKA_UNWRAP; as BoolType),
    attrmap_element!(CKA_SIGN; as BoolType),
    attrmap_element!(CKA_SIGN_RECOVER; as BoolType),
    attrmap_element!(CKA_VERIFY; as BoolType),
    attrmap_element!(CKA_VERIFY_RECOVER; as BoolType),
    attrmap_element!(CKA_DERIVE; as BoolType),
    attrmap_element!(CKA_START_DATE; as DateType),
    attrmap_element!(CKA_END_DATE; as DateType),
    attrmap_element!(CKA_MODULUS; as BytesType),
    attrmap_element!(CKA_MODULUS_BITS; as NumType),
    attrmap_element!(CKA_PUBLIC_EXPONENT; as BytesType),
    attrmap_element!(CKA_PRIVATE_EXPONENT; as BytesType),
    attrmap_element!(CKA_PRIME_1; as BytesType),
    attrmap_element!(CKA_PRIME_2; as BytesType),
    attrmap_element!(CKA_EXPONENT_1; as BytesType),
    attrmap_element!(CKA_EXPONENT_2; as BytesType),
    attrmap_element!(CKA_COEFFICIENT; as BytesType),
    attrmap_element!(CKA_PUBLIC_KEY_INFO; as BytesType),
    attrmap_element!(CKA_PRIME; as BytesType),
    attrmap_element!(CKA_SUBPRIME; as BytesType),
    attrmap_element!(CKA_BASE; as BytesType),
    attrmap_element!(CKA_PRIME_BITS; as NumType),
    attrmap_element!(CKA_SUBPRIME_BITS; as NumType),
    attrmap_element!(CKA_VALUE_BITS; as NumType),
    attrmap_element!(CKA_VALUE_LEN; as NumType),
    attrmap_element!(CKA_EXTRACTABLE; as BoolType),
    attrmap_element!(CKA_LOCAL; as BoolType),
    attrmap_element!(CKA_NEVER_EXTRACTABLE; as BoolType),
    attrmap_element!(CKA_ALWAYS_SENSITIVE; as BoolType),
    attrmap_element!(CKA_KEY_GEN_MECHANISM; as MechType),
    attrmap_element!(CKA_MODIFIABLE; as BoolType),
    attrmap_element!(CKA_COPYABLE; as BoolType),
    attrmap_element!(CKA_DESTROYABLE; as BoolType),
    attrmap_element!(CKA_EC_PARAMS; as BytesType),
    attrmap_element!(CKA_EC_POINT; as BytesType),
    attrmap_element!(CKA_ALWAYS_AUTHENTICATE; as BoolType),
    attrmap_element!(CKA_WRAP_WITH_TRUSTED; as BoolType),
    attrmap_element!(CKA_HW_FEATURE_TYPE; as NumType),
    attrmap_element!(CKA_RESET_ON_INIT; as BoolType),
    attrmap_element!(CKA_HAS_RESET; as BoolType),
    attrmap_element!(CKA_MECHANISM_TYPE; as MechType),
    attrmap_element!(CKA_PROFILE_ID; as NumType),
    attrmap_element!(CKA_WRAP_TEMPLATE; as AttrArrayType),
    attrmap_element!(CKA_UNWRAP_TEMPLATE; as AttrArrayType),
    attrmap_element!(CKA_DERIVE_TEMPLATE; as AttrArrayType),
    attrmap_element!(CKA_ALLOWED_MECHANISMS; as UlongArrayType),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_order_of_attrmap() {
        let mut copy = ATTRMAP.to_vec();
        copy.sort();
        assert_eq!(ATTRMAP, copy.as_slice());
    }

    #[test]
    fn check_attrmap_lookups() {
        assert_eq!(
            AttrType::attr_id_to_attrtype(CKA_ALLOWED_MECHANISMS).unwrap(),
            AttrType::UlongArrayType
        );
        assert_eq!(
            AttrType::attr_name_to_id_type("CKA_LABEL").unwrap(),
            (CKA_LABEL, AttrType::StringType)
        );
        assert!(AttrType::attr_name_to_id_type("CKA_NOPE")
            .unwrap_err()
            .attr_not_found());
        assert_eq!(attr_name(CKA_VENDOR_DEFINED), "0x80000000");
    }
}

/// The state of an attribute value
///
/// An attribute is either absent (never set, or not returned by the
/// token), sensitive (the token refused to reveal it) or present with a
/// value of the kind matching its [AttrType].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum AttrValue {
    Unset,
    Sensitive,
    Bool(bool),
    Num(CK_ULONG),
    String(String),
    Bytes(Vec<u8>),
    /* either empty or the 8 ASCII digits YYYYMMDD */
    Date(Vec<u8>),
    UlongArray(Vec<CK_ULONG>),
    Template(Vec<Attribute>),
}

/// A Rust native, typed attribute that holds an optional value
///
/// The attribute id and kind are fixed at construction, only the value
/// can change. Two attributes are equal when they have the same id and
/// equal values, where two absent values compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    ck_type: CK_ULONG,
    attrtype: AttrType,
    value: AttrValue,
}

macro_rules! check_kind {
    ($self:expr, $($kind:ident)|+) => {
        match $self.attrtype {
            $(AttrType::$kind)|+ => (),
            _ => return Err(CKR_ATTRIBUTE_TYPE_INVALID)?,
        }
    };
}

impl Attribute {
    /// Creates an attribute without a value
    pub fn new(t: CK_ULONG, at: AttrType) -> Attribute {
        Attribute {
            ck_type: t,
            attrtype: at,
            value: AttrValue::Unset,
        }
    }

    /// Returns the PKCS#11 attribute 'type' which is the attribute ID
    pub fn get_type(&self) -> CK_ULONG {
        self.ck_type
    }

    /// Returns the internal attribute type
    pub fn get_attrtype(&self) -> AttrType {
        self.attrtype
    }

    /// Returns the name of the attribute as an allocated String
    pub fn name(&self) -> String {
        attr_name(self.ck_type)
    }

    /// Whether a value is held
    pub fn is_present(&self) -> bool {
        !matches!(self.value, AttrValue::Unset | AttrValue::Sensitive)
    }

    /// Whether the token reported the value as sensitive
    pub fn is_sensitive(&self) -> bool {
        self.value == AttrValue::Sensitive
    }

    fn absent_error(&self) -> Error {
        match self.value {
            AttrValue::Sensitive => Error::not_present(
                CKR_ATTRIBUTE_SENSITIVE,
                format!("{} is sensitive", self.name()),
            ),
            _ => Error::not_present(
                CKR_ATTRIBUTE_VALUE_INVALID,
                format!("{} is not set", self.name()),
            ),
        }
    }

    /// Returns the internal value as a boolean
    pub fn to_bool(&self) -> Result<bool> {
        check_kind!(self, BoolType);
        match self.value {
            AttrValue::Bool(b) => Ok(b),
            _ => Err(self.absent_error()),
        }
    }

    /// Returns the internal value as a CK_ULONG
    ///
    /// Works for both plain numbers and mechanism types
    pub fn to_ulong(&self) -> Result<CK_ULONG> {
        check_kind!(self, NumType | MechType);
        match self.value {
            AttrValue::Num(n) => Ok(n),
            _ => Err(self.absent_error()),
        }
    }

    /// Returns a reference to the internal value as a string slice
    pub fn to_str(&self) -> Result<&str> {
        check_kind!(self, StringType);
        match &self.value {
            AttrValue::String(s) => Ok(s.as_str()),
            _ => Err(self.absent_error()),
        }
    }

    /// Returns a reference to the internal value wrapped in a Result
    pub fn to_bytes(&self) -> Result<&Vec<u8>> {
        check_kind!(self, BytesType);
        match &self.value {
            AttrValue::Bytes(v) => Ok(v),
            _ => Err(self.absent_error()),
        }
    }

    /// Returns the internal value as a CK_DATE
    ///
    /// An empty date is returned as an all blank CK_DATE
    pub fn to_date(&self) -> Result<CK_DATE> {
        check_kind!(self, DateType);
        match &self.value {
            AttrValue::Date(d) => match <&[u8; 8]>::try_from(d.as_slice()) {
                Ok(digits) => Ok(CK_DATE::from_digits(digits)),
                Err(_) => Ok(CK_DATE::from_digits(b"        ")),
            },
            _ => Err(self.absent_error()),
        }
    }

    /// Returns the value as an allocated String containing a date in the
    /// YYYY-MM-DD format, or an empty string for empty dates
    pub fn to_date_string(&self) -> Result<String> {
        check_kind!(self, DateType);
        match &self.value {
            AttrValue::Date(d) => Ok(date_string(d)),
            _ => Err(self.absent_error()),
        }
    }

    /// Returns a reference to the internal value as a vector of CK_ULONG
    /// values (generally mechanism types)
    pub fn to_ulong_array(&self) -> Result<&Vec<CK_ULONG>> {
        check_kind!(self, UlongArrayType);
        match &self.value {
            AttrValue::UlongArray(v) => Ok(v),
            _ => Err(self.absent_error()),
        }
    }

    /// Returns a reference to the nested attributes template
    pub fn to_template(&self) -> Result<&[Attribute]> {
        check_kind!(self, AttrArrayType);
        match &self.value {
            AttrValue::Template(v) => Ok(v.as_slice()),
            _ => Err(self.absent_error()),
        }
    }

    pub fn set_bool(&mut self, val: bool) -> Result<()> {
        check_kind!(self, BoolType);
        self.value = AttrValue::Bool(val);
        Ok(())
    }

    pub fn set_ulong(&mut self, val: CK_ULONG) -> Result<()> {
        check_kind!(self, NumType | MechType);
        self.value = AttrValue::Num(val);
        Ok(())
    }

    pub fn set_string(&mut self, val: String) -> Result<()> {
        check_kind!(self, StringType);
        self.value = AttrValue::String(val);
        Ok(())
    }

    pub fn set_bytes(&mut self, val: Vec<u8>) -> Result<()> {
        check_kind!(self, BytesType);
        self.value = AttrValue::Bytes(val);
        Ok(())
    }

    pub fn set_date(&mut self, val: CK_DATE) -> Result<()> {
        check_kind!(self, DateType);
        self.value = AttrValue::Date(val.to_digits().to_vec());
        Ok(())
    }

    pub fn set_ulong_array(&mut self, val: Vec<CK_ULONG>) -> Result<()> {
        check_kind!(self, UlongArrayType);
        self.value = AttrValue::UlongArray(val);
        Ok(())
    }

    pub fn set_template(&mut self, val: Vec<Attribute>) -> Result<()> {
        check_kind!(self, AttrArrayType);
        self.value = AttrValue::Template(val);
        Ok(())
    }

    /// Drops the value, the attribute becomes absent
    pub fn unset(&mut self) {
        self.zeroize();
        self.value = AttrValue::Unset;
    }

    /// Drops the value and records the token refused to reveal it
    pub fn mark_sensitive(&mut self) {
        self.zeroize();
        self.value = AttrValue::Sensitive;
    }

    /// Zeroizes byte and string values in place
    pub fn zeroize(&mut self) {
        match &mut self.value {
            AttrValue::Bytes(v) => zeromem(v.as_mut_slice()),
            AttrValue::String(s) => {
                /* reuses the same allocation, zeroes are valid UTF-8 */
                let mut buf = std::mem::take(s).into_bytes();
                zeromem(buf.as_mut_slice());
                *s = String::from_utf8(buf).unwrap_or_default();
            }
            AttrValue::Template(v) => {
                for a in v.iter_mut() {
                    a.zeroize();
                }
            }
            _ => (),
        }
    }

    /// Sets the value by decoding the raw native encoding returned by a
    /// token for this attribute kind
    ///
    /// Returns a CKR_ATTRIBUTE_VALUE_INVALID error if the buffer can't be
    /// decoded, in which case the current value is left untouched
    pub fn set_from_raw(&mut self, raw: &[u8]) -> Result<()> {
        let value = match self.attrtype {
            AttrType::BoolType => match raw {
                [b] => AttrValue::Bool(*b != CK_FALSE),
                _ => return Err(CKR_ATTRIBUTE_VALUE_INVALID)?,
            },
            AttrType::NumType | AttrType::MechType => {
                match <[u8; CK_ULONG_SIZE]>::try_from(raw) {
                    Ok(b) => AttrValue::Num(CK_ULONG::from_ne_bytes(b)),
                    Err(_) => return Err(CKR_ATTRIBUTE_VALUE_INVALID)?,
                }
            }
            AttrType::StringType => match std::str::from_utf8(raw) {
                Ok(s) => AttrValue::String(s.to_string()),
                Err(_) => return Err(CKR_ATTRIBUTE_VALUE_INVALID)?,
            },
            AttrType::BytesType => AttrValue::Bytes(raw.to_vec()),
            AttrType::DateType => match raw.len() {
                0 | 8 => AttrValue::Date(raw.to_vec()),
                _ => return Err(CKR_ATTRIBUTE_VALUE_INVALID)?,
            },
            AttrType::UlongArrayType => {
                if raw.len() % CK_ULONG_SIZE != 0 {
                    return Err(CKR_ATTRIBUTE_VALUE_INVALID)?;
                }
                let mut v = Vec::with_capacity(raw.len() / CK_ULONG_SIZE);
                for elem in raw.chunks_exact(CK_ULONG_SIZE) {
                    v.push(CK_ULONG::from_ne_bytes(elem.try_into()?));
                }
                AttrValue::UlongArray(v)
            }
            /* nested templates are never returned as a flat buffer */
            AttrType::AttrArrayType => {
                return Err(CKR_ATTRIBUTE_TYPE_INVALID)?
            }
        };
        self.value = value;
        Ok(())
    }

    /// Sets a nested template from the raw values of its members
    ///
    /// Members with an id not in the attributes map are kept as byte
    /// sequences.
    pub fn set_template_from_raw(
        &mut self,
        raw: &[(CK_ATTRIBUTE_TYPE, Vec<u8>)],
    ) -> Result<()> {
        check_kind!(self, AttrArrayType);
        let mut v = Vec::with_capacity(raw.len());
        for (t, val) in raw {
            let at = match AttrType::attr_id_to_attrtype(*t) {
                Ok(AttrType::AttrArrayType) => {
                    return Err(CKR_ATTRIBUTE_VALUE_INVALID)?
                }
                Ok(at) => at,
                Err(_) => AttrType::BytesType,
            };
            let mut a = Attribute::new(*t, at);
            a.set_from_raw(val)?;
            v.push(a);
        }
        self.value = AttrValue::Template(v);
        Ok(())
    }

    /// Creates an attribute of type AttrType::BoolType from a bool
    ///
    /// Note: Does not verify that the attribute id type is correct
    pub fn from_bool(t: CK_ULONG, val: bool) -> Attribute {
        Attribute {
            ck_type: t,
            attrtype: AttrType::BoolType,
            value: AttrValue::Bool(val),
        }
    }

    /// Creates an attribute of type AttrType::NumType from a CK_ULONG
    ///
    /// Note: Does not verify that the attribute id type is correct
    pub fn from_ulong(t: CK_ULONG, val: CK_ULONG) -> Attribute {
        Attribute {
            ck_type: t,
            attrtype: AttrType::NumType,
            value: AttrValue::Num(val),
        }
    }

    /// Creates an attribute of type AttrType::MechType
    pub fn from_mechanism(t: CK_ULONG, val: CK_MECHANISM_TYPE) -> Attribute {
        Attribute {
            ck_type: t,
            attrtype: AttrType::MechType,
            value: AttrValue::Num(val),
        }
    }

    /// Creates an attribute of type AttrType::StringType from a String
    ///
    /// Note: Does not verify that the attribute id type is correct
    pub fn from_string(t: CK_ULONG, val: String) -> Attribute {
        Attribute {
            ck_type: t,
            attrtype: AttrType::StringType,
            value: AttrValue::String(val),
        }
    }

    /// Creates an attribute of type AttrType::BytesType from a `Vec<u8>`
    ///
    /// Note: Does not verify that the attribute id type is correct
    pub fn from_bytes(t: CK_ULONG, val: Vec<u8>) -> Attribute {
        Attribute {
            ck_type: t,
            attrtype: AttrType::BytesType,
            value: AttrValue::Bytes(val),
        }
    }

    /// Creates an attribute of type AttrType::DateType from a CK_DATE
    pub fn from_date(t: CK_ULONG, val: CK_DATE) -> Attribute {
        Attribute {
            ck_type: t,
            attrtype: AttrType::DateType,
            value: AttrValue::Date(val.to_digits().to_vec()),
        }
    }

    /// Creates an attribute of type AttrType::UlongArrayType
    pub fn from_ulong_array(t: CK_ULONG, val: Vec<CK_ULONG>) -> Attribute {
        Attribute {
            ck_type: t,
            attrtype: AttrType::UlongArrayType,
            value: AttrValue::UlongArray(val),
        }
    }

    /// Creates an attribute of type AttrType::AttrArrayType holding a
    /// nested template
    pub fn from_template(t: CK_ULONG, val: Vec<Attribute>) -> Attribute {
        Attribute {
            ck_type: t,
            attrtype: AttrType::AttrArrayType,
            value: AttrValue::Template(val),
        }
    }

    /// Renders the value like [fmt::Display] but with integers expressed
    /// in the requested radix (2 to 36)
    pub fn to_string_radix(&self, radix: u32) -> String {
        match (&self.value, self.attrtype) {
            (AttrValue::Num(n), AttrType::NumType) => ulong_radix(*n, radix),
            _ => self.to_string(),
        }
    }
}

fn date_string(d: &[u8]) -> String {
    if d.len() != 8 {
        return String::new();
    }
    format!(
        "{}-{}-{}",
        String::from_utf8_lossy(&d[0..4]),
        String::from_utf8_lossy(&d[4..6]),
        String::from_utf8_lossy(&d[6..8])
    )
}

fn ulong_radix(val: CK_ULONG, radix: u32) -> String {
    let radix = radix.clamp(2, 36);
    let mut n = val;
    let mut digits = Vec::new();
    loop {
        let d = u32::try_from(n % CK_ULONG::from(radix)).unwrap_or(0);
        digits.push(char::from_digit(d, radix).unwrap_or('?'));
        n /= CK_ULONG::from(radix);
        if n == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            AttrValue::Unset => write!(f, "<not present>"),
            AttrValue::Sensitive => write!(f, "<sensitive>"),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Num(n) => match self.attrtype {
                AttrType::MechType => write!(f, "0x{:08x}", n),
                _ => write!(f, "{}", n),
            },
            AttrValue::String(s) => write!(f, "{}", s),
            AttrValue::Bytes(v) => write!(f, "{}", hex::encode(v)),
            AttrValue::Date(d) => write!(f, "{}", date_string(d)),
            AttrValue::UlongArray(v) => write!(
                f,
                "[{}]",
                v.iter().map(|m| format!("0x{:08x}", m)).join(", ")
            ),
            AttrValue::Template(v) => write!(
                f,
                "[{}]",
                v.iter().map(|a| format!("{}: {}", a.name(), a)).join(", ")
            ),
        }
    }
}

/// Helper object to represent owned arrays of CK_ATTRIBUTEs
///
/// All values are copied in buffers owned by this object, the pointers in
/// the CK_ATTRIBUTE array remain valid for as long as the object lives.
/// Nested templates are stored as nested arrays owned by the parent.
#[derive(Debug, Default)]
pub struct CkAttrs {
    /// Storage for owned byte buffers backing the values
    v: Vec<Vec<u8>>,
    /// Storage for the nested arrays backing template values
    nested: Vec<CkAttrs>,
    /// The actual `CK_ATTRIBUTE` array
    p: Vec<CK_ATTRIBUTE>,
    pub zeroize: bool,
}

impl Drop for CkAttrs {
    fn drop(&mut self) {
        if self.zeroize {
            while let Some(mut elem) = self.v.pop() {
                zeromem(elem.as_mut_slice());
            }
        }
    }
}

impl CkAttrs {
    /// Creates a new empty managed array of CK_ATTRIBUTEs
    pub fn new() -> CkAttrs {
        Self::with_capacity(0)
    }

    /// Creates a new empty managed array of CK_ATTRIBUTEs
    /// with the specified capacity
    pub fn with_capacity(capacity: usize) -> CkAttrs {
        CkAttrs {
            v: Vec::new(),
            nested: Vec::new(),
            p: Vec::with_capacity(capacity),
            zeroize: false,
        }
    }

    fn attr_from_last(&self, typ: CK_ATTRIBUTE_TYPE) -> Result<CK_ATTRIBUTE> {
        match self.v.last() {
            Some(r) if r.is_empty() => Ok(CK_ATTRIBUTE {
                type_: typ,
                pValue: std::ptr::null_mut(),
                ulValueLen: 0,
            }),
            Some(r) => Ok(CK_ATTRIBUTE {
                type_: typ,
                pValue: void_ptr!(r.as_ptr()),
                ulValueLen: CK_ULONG::try_from(r.len())?,
            }),
            None => Err(CKR_GENERAL_ERROR)?,
        }
    }

    /// Add a new attribute to the array, the value is a vector of bytes
    ///
    /// The vector ownership is transferred to the array
    pub fn add_vec(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: Vec<u8>,
    ) -> Result<()> {
        self.v.push(val);
        let a = self.attr_from_last(typ)?;
        self.p.push(a);
        Ok(())
    }

    /// Add a new attribute to the array, the value is defined as a slice
    ///
    /// This internally copies the slice to an allocated vector
    pub fn add_owned_slice(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: &[u8],
    ) -> Result<()> {
        self.add_vec(typ, val.to_vec())
    }

    /// Add a new attribute to the array, the value is a CK_ULONG
    pub fn add_owned_ulong(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: CK_ULONG,
    ) -> Result<()> {
        self.add_vec(typ, val.to_ne_bytes().to_vec())
    }

    /// Add a new attribute to the array, the value is a CK_BBOOL
    pub fn add_owned_bool(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: CK_BBOOL,
    ) -> Result<()> {
        self.add_vec(typ, val.to_ne_bytes().to_vec())
    }

    /// Adds a nested array of attributes, as used by template attributes
    pub fn add_nested(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: CkAttrs,
    ) -> Result<()> {
        let len = CK_ULONG::try_from(val.len())? * sizeof!(CK_ATTRIBUTE);
        let ptr = if val.len() == 0 {
            std::ptr::null_mut()
        } else {
            void_ptr!(val.as_ptr())
        };
        self.nested.push(val);
        self.p.push(CK_ATTRIBUTE {
            type_: typ,
            pValue: ptr,
            ulValueLen: len,
        });
        Ok(())
    }

    /// Adds the native encoding of an attribute value
    ///
    /// Attributes without a value are skipped.
    pub fn add_attribute(&mut self, attr: &Attribute) -> Result<()> {
        let typ = attr.get_type();
        match &attr.value {
            AttrValue::Unset | AttrValue::Sensitive => Ok(()),
            AttrValue::Bool(b) => {
                self.add_owned_bool(typ, if *b { CK_TRUE } else { CK_FALSE })
            }
            AttrValue::Num(n) => self.add_owned_ulong(typ, *n),
            AttrValue::String(s) => self.add_owned_slice(typ, s.as_bytes()),
            AttrValue::Bytes(v) => self.add_owned_slice(typ, v.as_slice()),
            AttrValue::Date(d) => self.add_owned_slice(typ, d.as_slice()),
            AttrValue::UlongArray(v) => {
                let mut buf = Vec::with_capacity(v.len() * CK_ULONG_SIZE);
                for e in v {
                    buf.extend_from_slice(&e.to_ne_bytes());
                }
                self.add_vec(typ, buf)
            }
            AttrValue::Template(v) => {
                let mut nested = CkAttrs::with_capacity(v.len());
                nested.zeroize = self.zeroize;
                for a in v {
                    nested.add_attribute(a)?;
                }
                self.add_nested(typ, nested)
            }
        }
    }

    /// Returns the number of elements in the array
    pub fn len(&self) -> usize {
        self.p.len()
    }

    /// Returns a pointer to the array of CK_ATTRIBUTEs
    pub fn as_ptr(&self) -> *const CK_ATTRIBUTE {
        self.p.as_ptr()
    }

    /// Returns a reference to the internal CK_ATTRIBUTEs array
    pub fn as_slice(&self) -> &[CK_ATTRIBUTE] {
        self.p.as_slice()
    }

    /// Finds an attribute by attribute id and return a reference to it
    /// if present, None if not found
    pub fn find_attr(&self, typ: CK_ATTRIBUTE_TYPE) -> Option<&CK_ATTRIBUTE> {
        self.p.iter().find(|a| a.type_ == typ)
    }
}
