use std::cell::Cell;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::error::{Error, Result};
use crate::interp::Resolver;
use crate::model::{Definition, Expr};
use crate::HashMap;

/// Resolution state of a single wire within the current generation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mark {
    Unvisited,
    InProgress,
    Resolved(u16),
}

#[derive(Debug)]
pub struct Signal {
    name: String,
    expr: Expr,
    mark: Cell<Mark>,
}

impl Signal {
    fn new(name: String, expr: Expr) -> Self {
        Self {
            name,
            expr,
            mark: Cell::new(Mark::Unvisited),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn cached(&self) -> Option<u16> {
        match self.mark.get() {
            Mark::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn mark(&self) -> Mark {
        self.mark.get()
    }

    pub(crate) fn set_mark(&self, mark: Mark) {
        self.mark.set(mark)
    }
}

/// All wires of one circuit, keyed by name.
///
/// Cached values live inside each [`Signal`] so resolution only needs a
/// shared borrow; anything that changes a definition takes `&mut self` and
/// starts a new generation.
#[derive(Default, Debug)]
pub struct Registry {
    signals: HashMap<String, Signal>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = Definition>) -> Result<Self> {
        let mut registry = Self::new();
        for Definition { dest, expr } in definitions {
            registry.register(dest, expr)?;
        }
        debug!(wires = registry.len(), "circuit loaded");
        Ok(registry)
    }

    /// Add a wire. An existing wire of the same name is left untouched.
    pub fn register(&mut self, name: impl Into<String>, expr: Expr) -> Result<()> {
        match self.signals.entry(name.into()) {
            Entry::Occupied(slot) => Err(Error::DuplicateWire {
                name: slot.key().clone(),
            }),
            Entry::Vacant(slot) => {
                let signal = Signal::new(slot.key().clone(), expr);
                slot.insert(signal);
                Ok(())
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Signal> {
        self.signals.get(name)
    }

    /// Swap the definition of an existing wire and drop every cached value,
    /// since anything downstream may have read the old one.
    pub fn replace(&mut self, name: &str, expr: Expr) -> Result<()> {
        let signal = self
            .signals
            .get_mut(name)
            .ok_or_else(|| Error::undefined(name))?;
        debug!(wire = name, old = ?signal.expr, new = ?expr, "replacing definition");
        signal.expr = expr;
        self.invalidate();
        Ok(())
    }

    pub fn invalidate(&mut self) {
        for signal in self.signals.values_mut() {
            *signal.mark.get_mut() = Mark::Unvisited;
        }
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Wire names in lexical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.signals.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn resolve(&self, name: &str) -> Result<u16> {
        Resolver::new(self).resolve_wire(name)
    }
}
