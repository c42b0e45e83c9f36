// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::tests;
use tests::*;

use crate::object::ObjectKind;

macro_rules! ret_or_panic {
    ($ret:expr) => {
        match $ret {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    };
}

pub fn ulong_raw(val: CK_ULONG) -> Vec<u8> {
    val.to_ne_bytes().to_vec()
}

pub fn bool_raw(val: bool) -> Vec<u8> {
    vec![if val { CK_TRUE } else { CK_FALSE }]
}

/// An in memory token answering attribute fetches
#[derive(Debug, Default)]
pub struct MockSession {
    objects: HashMap<CK_OBJECT_HANDLE, HashMap<CK_ATTRIBUTE_TYPE, Fetched>>,
    failure: Option<CK_RV>,
    batches: Mutex<Vec<Vec<CK_ATTRIBUTE_TYPE>>>,
}

impl MockSession {
    pub fn new() -> MockSession {
        MockSession::default()
    }

    pub fn add(
        &mut self,
        handle: CK_OBJECT_HANDLE,
        t: CK_ATTRIBUTE_TYPE,
        val: Fetched,
    ) {
        self.objects.entry(handle).or_default().insert(t, val);
    }

    pub fn add_value(
        &mut self,
        handle: CK_OBJECT_HANDLE,
        t: CK_ATTRIBUTE_TYPE,
        raw: Vec<u8>,
    ) {
        self.add(handle, t, Fetched::Value(raw));
    }

    /// Answers every attribute declared for `kind` that was not added
    /// explicitly with a valid value of the matching kind
    pub fn fill_declared(
        &mut self,
        handle: CK_OBJECT_HANDLE,
        kind: ObjectKind,
    ) {
        let template = Object::template(kind);
        for attr in template.get_attributes().iter() {
            let t = attr.get_type();
            if self.objects.get(&handle).is_some_and(|o| o.contains_key(&t)) {
                continue;
            }
            let val = match attr.get_attrtype() {
                AttrType::BoolType => Fetched::Value(bool_raw(false)),
                AttrType::NumType
                | AttrType::MechType
                | AttrType::UlongArrayType => Fetched::Value(ulong_raw(0)),
                AttrType::StringType => Fetched::Value(b"filler".to_vec()),
                AttrType::BytesType => Fetched::Value(vec![0]),
                AttrType::DateType => Fetched::Value(b"20250101".to_vec()),
                AttrType::AttrArrayType => Fetched::Template(Vec::new()),
            };
            self.add(handle, t, val);
        }
    }

    /// Makes every fetch fail with the given error
    pub fn fail_with(&mut self, rv: CK_RV) {
        self.failure = Some(rv);
    }

    /// The list of attribute types requested by each fetch
    pub fn batches(&self) -> Vec<Vec<CK_ATTRIBUTE_TYPE>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn into_session(self) -> (Arc<MockSession>, Arc<dyn Session>) {
        let mock = Arc::new(self);
        let session: Arc<dyn Session> = mock.clone();
        (mock, session)
    }
}

impl Session for MockSession {
    fn fetch_attributes(
        &self,
        handle: CK_OBJECT_HANDLE,
        types: &[CK_ATTRIBUTE_TYPE],
    ) -> Result<Vec<(CK_ATTRIBUTE_TYPE, Fetched)>> {
        self.batches.lock().unwrap().push(types.to_vec());
        if let Some(rv) = self.failure {
            return Err(rv)?;
        }
        let obj = match self.objects.get(&handle) {
            Some(o) => o,
            None => return Err(CKR_OBJECT_HANDLE_INVALID)?,
        };
        Ok(types
            .iter()
            .map(|t| match obj.get(t) {
                Some(f) => (*t, f.clone()),
                None => (*t, Fetched::Unsupported),
            })
            .collect())
    }
}

/// A token holding an AES key at handle 10, without a label
pub fn aes_key_session() -> MockSession {
    let mut mock = MockSession::new();
    mock.add_value(10, CKA_CLASS, ulong_raw(CKO_SECRET_KEY));
    mock.add_value(10, CKA_KEY_TYPE, ulong_raw(CKK_AES));
    mock.add_value(10, CKA_VALUE, vec![0x2b; 16]);
    mock.add_value(10, CKA_VALUE_LEN, ulong_raw(16));
    mock.add_value(10, CKA_TOKEN, bool_raw(true));
    mock.add(10, CKA_LABEL, Fetched::Unsupported);
    mock
}
