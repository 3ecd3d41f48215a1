// SPDX-License-Identifier: GPL-3.0-only

//! Dynamically typed enumeration records
//!
//! Every enumeration source delivers one property bag per device row. Field
//! names and value shapes are fixed by the source's schema; the core never
//! mutates a record, it only reads fields through the typed accessors
//! below. Each accessor is fallible per field so a bad shape is caught at
//! the exact field that carried it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A single field extraction failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("field {0:?} is missing")]
    Missing(&'static str),

    #[error("field {name:?} is not a {expected}")]
    WrongType {
        name: &'static str,
        expected: &'static str,
    },
}

/// One row from an enumeration source. Read-only once constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Untyped access, mainly useful for diagnostics.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    fn present(&self, name: &'static str) -> Result<&Value, FieldError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Err(FieldError::Missing(name)),
            Some(value) => Ok(value),
        }
    }

    pub fn get_str(&self, name: &'static str) -> Result<&str, FieldError> {
        self.present(name)?.as_str().ok_or(FieldError::WrongType {
            name,
            expected: "string",
        })
    }

    pub fn get_u64(&self, name: &'static str) -> Result<u64, FieldError> {
        self.present(name)?.as_u64().ok_or(FieldError::WrongType {
            name,
            expected: "unsigned integer",
        })
    }

    pub fn get_u16(&self, name: &'static str) -> Result<u16, FieldError> {
        self.get_u64(name).and_then(|value| {
            u16::try_from(value).map_err(|_| FieldError::WrongType {
                name,
                expected: "16-bit unsigned integer",
            })
        })
    }

    pub fn get_bool(&self, name: &'static str) -> Result<bool, FieldError> {
        self.present(name)?.as_bool().ok_or(FieldError::WrongType {
            name,
            expected: "boolean",
        })
    }

    /// Binary buffers arrive as arrays of integers 0-255.
    pub fn get_bytes(&self, name: &'static str) -> Result<Vec<u8>, FieldError> {
        let wrong_type = FieldError::WrongType {
            name,
            expected: "byte array",
        };
        let array = self.present(name)?.as_array().ok_or(wrong_type.clone())?;
        array
            .iter()
            .map(|value| value.as_u64().and_then(|n| u8::try_from(n).ok()))
            .collect::<Option<Vec<u8>>>()
            .ok_or(wrong_type)
    }
}

impl FromIterator<(String, Value)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
