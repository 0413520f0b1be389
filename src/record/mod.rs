#![allow(dead_code)] // Complete API module, not all methods currently used
//! Roster record representation
//!
//! This module defines [`Record`], the fixed-shape value stored in each list
//! node: a bounded name plus three numeric measurements. Records carry no
//! identity beyond their field values and are cloned into and out of the list
//! on every operation, so a stored record never aliases a caller-held one.
//!
//! # Name Bounds
//!
//! Names are limited to [`MAX_NAME_LEN`] characters and never contain CR or
//! LF. [`Record::sanitize_name`] applies both rules at the input boundary;
//! the list itself never inspects record contents.

use std::fmt;

/// Maximum number of characters kept in a record name.
pub const MAX_NAME_LEN: usize = 255;

/// A single roster entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub name: String,
    pub age: f64,
    pub weight: f64,
    pub height: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, age: f64, weight: f64, height: f64) -> Self {
        Record {
            name: name.into(),
            age,
            weight,
            height,
        }
    }

    /// Cut raw input at the first CR or LF and truncate to [`MAX_NAME_LEN`]
    /// characters.
    pub fn sanitize_name(raw: &str) -> String {
        let line = raw.split(['\r', '\n']).next().unwrap_or("");
        line.chars().take(MAX_NAME_LEN).collect()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name={}, age={:.1}, weight={:.1}, height={:.1}",
            self.name, self.age, self.weight, self.height
        )
    }
}
