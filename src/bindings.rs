// Licensed under MIT. See LICENSE for details.

use std::collections::HashMap;
use std::iter::FromIterator;

use crate::types::Ident;

/// Values of the variables an expression is evaluated against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    vars: HashMap<Ident, f64>,
}

impl Bindings {
    pub fn new() -> Self {
        Self { vars: HashMap::new() }
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.vars.get(id).cloned()
    }

    pub fn has(&self, id: &str) -> bool {
        self.vars.contains_key(id)
    }

    pub fn insert(&mut self, id: Ident, val: f64) -> Option<f64> {
        self.vars.insert(id, val)
    }

    pub fn extend(&self, id: Ident, val: f64) -> Self {
        let mut vars = self.vars.clone();
        vars.insert(id, val);
        Self { vars }
    }

    pub fn without(&self, id: &str) -> Self {
        let mut vars = self.vars.clone();
        vars.remove(id);
        Self { vars }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<HashMap<Ident, f64>> for Bindings {
    fn from(vars: HashMap<Ident, f64>) -> Self {
        Self { vars }
    }
}

impl FromIterator<(Ident, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (Ident, f64)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().collect() }
    }
}
