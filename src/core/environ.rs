//! Environment variable sources.
//!
//! The locator reads keys through the `Environ` trait so lookups can run
//! against the real process environment or an explicit set of variables.

use std::collections::{BTreeMap, HashMap};

/// Source of environment variables.
pub trait Environ {
    /// All variables as name/value pairs, in the source's iteration order.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environ for ProcessEnv {
    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

impl Environ for Vec<(String, String)> {
    fn vars(&self) -> Vec<(String, String)> {
        self.clone()
    }
}

impl Environ for [(&str, &str)] {
    fn vars(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl<const N: usize> Environ for [(&str, &str); N] {
    fn vars(&self) -> Vec<(String, String)> {
        self.as_slice().vars()
    }
}

impl Environ for HashMap<String, String> {
    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl Environ for BTreeMap<String, String> {
    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<E: Environ + ?Sized> Environ for &E {
    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}
