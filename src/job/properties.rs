// src/job/properties.rs

use std::collections::BTreeMap;

use crate::job::prefixed;

/// A named bag of properties, emitted as a `.properties` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    name: String,
    properties: BTreeMap<String, String>,
}

impl Properties {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn build_name(&self, prefix: Option<&str>) -> String {
        prefixed(prefix, &self.name)
    }
}
