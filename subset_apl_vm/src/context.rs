//! Execution context: variable bindings plus the session configuration.
//!
//! One context serves one logical thread of evaluation. Bindings are
//! replaced wholesale by plain assignment and mutated in place by indexed
//! assignment.

use std::collections::{BTreeMap, HashMap};

use crate::config::Config;
use crate::error::{EvalError, EvalResult};
use crate::value::Value;

#[derive(Debug, Clone, Default)]
pub struct Context {
    vars: HashMap<String, Value>,
    config: Config,
}

impl Context {
    pub fn new(config: Config) -> Self {
        Self {
            vars: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bind `name` to `value`, replacing any prior binding.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.vars.insert(name.to_string(), value.into_inner());
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Mutable access to a binding, for in-place indexed writes.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.vars.get_mut(name)
    }

    /// Value bound to `name`, or `UndefinedVariable`.
    pub fn get(&self, name: &str) -> EvalResult<&Value> {
        self.lookup(name)
            .ok_or_else(|| EvalError::undefined_variable(name))
    }

    /// Bindings sorted by name.
    pub fn bindings(&self) -> BTreeMap<&str, &Value> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }

    /// Bindings sorted by name, serialized as a JSON object.
    pub fn bindings_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.bindings())
    }
}
