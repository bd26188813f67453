//! Domain types for workforge.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Default paths
// ---------------------------------------------------------------------------

/// Fixed file names, resolved against the working directory.
pub mod paths {
    /// Template read on every run.
    pub const TEMPLATE_FILE: &str = "docker-compose.yml.j2";
    /// Rendered output, overwritten on every run.
    pub const OUTPUT_FILE: &str = "docker-compose.yml";
}

// ---------------------------------------------------------------------------
// WorkerCount
// ---------------------------------------------------------------------------

/// Number of worker replicas substituted into the template.
///
/// Any non-negative integer is accepted, however large. The value is kept
/// in canonical decimal form (no sign, underscores or leading zeros), which
/// is exactly what ends up in the rendered file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkerCount(String);

impl WorkerCount {
    /// Canonical decimal digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as a machine integer, if it fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for WorkerCount {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Serializes as a number when it fits in `u64` (so templates can do
/// arithmetic or `range` on it) and as its decimal string otherwise.
impl Serialize for WorkerCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_u64() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

/// Strip underscores and leading zeros from a digit run.
///
/// Underscores are only valid singly and between two digits.
fn canonical_digits(digits: &str) -> Option<String> {
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return None;
    }
    let mut out = String::with_capacity(digits.len());
    let mut prev_underscore = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {
                if !(out.is_empty() && c == '0') {
                    out.push(c);
                }
                prev_underscore = false;
            }
            '_' if !prev_underscore => prev_underscore = true,
            _ => return None,
        }
    }
    if out.is_empty() {
        out.push('0');
    }
    Some(out)
}

impl FromStr for WorkerCount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidWorkerCount { input: s.to_owned() };
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'+') => (false, &trimmed[1..]),
            Some(b'-') => (true, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let canonical = canonical_digits(digits).ok_or_else(invalid)?;
        // `-0` is still zero.
        if negative && canonical != "0" {
            return Err(invalid());
        }
        Ok(Self(canonical))
    }
}

// ---------------------------------------------------------------------------
// RenderPaths
// ---------------------------------------------------------------------------

/// Where the template is read from and where the rendered file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPaths {
    pub template: PathBuf,
    pub output: PathBuf,
}

impl RenderPaths {
    pub fn new(template: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            output: output.into(),
        }
    }
}

impl Default for RenderPaths {
    fn default() -> Self {
        Self::new(paths::TEMPLATE_FILE, paths::OUTPUT_FILE)
    }
}
