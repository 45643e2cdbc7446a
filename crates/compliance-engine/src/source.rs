//! Fact sources: where the raw brand and retailer text comes from
//!
//! Page scraping lives outside this crate. Whatever supplies the text only
//! has to implement [`FactSource`] and report a fact it cannot locate as
//! `None` instead of failing.

use shared_types::FactKind;
use std::collections::HashMap;

pub trait FactSource {
    /// Name used in logs and reports (e.g. "brand", "retailer")
    fn name(&self) -> &str;

    /// Raw text for a fact, or `None` when the element was not found
    fn fetch(&self, kind: FactKind) -> Option<String>;
}

impl<S: FactSource + ?Sized> FactSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self, kind: FactKind) -> Option<String> {
        (**self).fetch(kind)
    }
}

/// In-memory fact source
#[derive(Debug, Clone, Default)]
pub struct StaticFactSource {
    name: String,
    facts: HashMap<FactKind, String>,
}

impl StaticFactSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facts: HashMap::new(),
        }
    }

    pub fn with_fact(mut self, kind: FactKind, value: impl Into<String>) -> Self {
        self.facts.insert(kind, value.into());
        self
    }

    pub fn with_optional_fact(self, kind: FactKind, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_fact(kind, value),
            None => self,
        }
    }
}

impl FactSource for StaticFactSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, kind: FactKind) -> Option<String> {
        self.facts.get(&kind).cloned()
    }
}
