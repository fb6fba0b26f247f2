use thiserror::Error;

use crate::basic_types::AVar;
use crate::basic_types::HashMap;

/// The logical-variable environment of an abstract domain: an ordered, indexable sequence of
/// textual variable names, each bound to an [`AVar`] handle. Declaration order defines the input
/// order used by [`InputOrder`][crate::branching::variable_selection::InputOrder].
#[derive(Debug, Default, Clone)]
pub struct Environment {
    names: Vec<String>,
    index: HashMap<String, AVar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("variable '{name}' is already declared in the environment")]
pub struct DuplicateVariableError {
    pub name: String,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Binds a fresh [`AVar`] to `name` and returns it. The handles are assigned sequentially in
    /// declaration order.
    pub fn declare(&mut self, name: impl Into<String>) -> Result<AVar, DuplicateVariableError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(DuplicateVariableError { name });
        }
        let var = AVar::new(self.names.len() as u32);
        let _ = self.index.insert(name.clone(), var);
        self.names.push(name);
        Ok(var)
    }

    /// The number of declared variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The handle of the variable at `index` in declaration order, or [`None`] if `index` is out
    /// of range.
    pub fn to_avar(&self, index: usize) -> Option<AVar> {
        (index < self.names.len()).then_some(AVar::new(index as u32))
    }

    /// The name which `var` was declared under.
    pub fn name(&self, var: AVar) -> Option<&str> {
        self.names.get(var.index()).map(|name| name.as_str())
    }

    /// The handle which `name` was bound to by [`Environment::declare`].
    pub fn lookup(&self, name: &str) -> Option<AVar> {
        self.index.get(name).copied()
    }
}
