//! SU-style `key=value` parameters
//!
//! Seismic Unix programs take their options as `name=value` words after the
//! positional arguments. Every parameter given must be one the program knows,
//! so a misspelt name is an error rather than silently ignored.

use std::collections::BTreeMap;
use thiserror::Error;

/// Parameter names `sucmp` understands
pub const KNOWN_PARAMS: &[&str] = &["limit"];

#[derive(Error, Debug, PartialEq)]
pub enum ParamError {
    #[error("parameter '{0}' is not of the form name=value")]
    Malformed(String),

    #[error("unknown parameter '{0}'")]
    Unknown(String),

    #[error("parameter {name}={value} is not a number")]
    NotANumber { name: String, value: String },
}

/// Parsed `name=value` parameters
///
/// When a name is repeated the last value wins, as with SU `getpar`.
#[derive(Debug, Default)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn parse<I, S>(words: I) -> Result<Self, ParamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = BTreeMap::new();
        for word in words {
            let word = word.as_ref();
            let (name, value) = word
                .split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| ParamError::Malformed(word.to_string()))?;
            values.insert(name.to_string(), value.to_string());
        }
        Ok(Self { values })
    }

    /// Fails on the first parameter that is not in `known`
    pub fn check(&self, known: &[&str]) -> Result<(), ParamError> {
        match self.values.keys().find(|name| !known.contains(&name.as_str())) {
            Some(name) => Err(ParamError::Unknown(name.clone())),
            None => Ok(()),
        }
    }

    pub fn get_f32(&self, name: &str) -> Result<Option<f32>, ParamError> {
        self.values
            .get(name)
            .map(|value| {
                value.trim().parse::<f32>().map_err(|_| ParamError::NotANumber {
                    name: name.to_string(),
                    value: value.clone(),
                })
            })
            .transpose()
    }
}
