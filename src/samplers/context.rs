//! Variable bindings for a single output
//!
//! Bindings live in a stack of scopes. The base scope spans the whole
//! output; a nested scope is pushed while a wildcard candidate with inline
//! variables is being resolved and popped when it finishes. Reads search
//! from the innermost scope outward, writes always land in the innermost
//! scope, so inline variables shadow without clobbering.

use std::collections::HashMap;
use std::rc::Rc;

use crate::commands::Command;

/// What a variable name is bound to
///
/// `Evaluated` holds text rendered at assignment time; `Deferred` holds the
/// assigned template, re-rendered on every read.
#[derive(Debug, Clone)]
pub enum Binding {
    Evaluated(String),
    Deferred(Rc<Command>),
}

/// Name-to-binding map with wildcard-scoped shadowing
#[derive(Debug)]
pub struct VariableContext {
    scopes: Vec<HashMap<String, Binding>>,
}

impl VariableContext {
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    /// The innermost binding visible for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Bind `name` in the innermost scope, shadowing outer bindings.
    pub fn set(&mut self, name: impl Into<String>, binding: Binding) {
        // The base scope is created in `new` and never popped.
        self.scopes
            .last_mut()
            .expect("context always has a base scope")
            .insert(name.into(), binding);
    }

    /// Open a nested scope for a wildcard candidate's inline variables.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Close the innermost nested scope, dropping its bindings.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }
}

impl Default for VariableContext {
    fn default() -> Self {
        Self::new()
    }
}
