//! HTTP verb resolution
//!
//! Resolution order, first hit wins:
//! 1. the explicit per-action verb constraint (a single one),
//! 2. the conventional-prefix table, iterated in its declared order,
//! 3. the configured default verb.

use crate::error::{CompileError, Result};
use crate::naming;
use dynapi_core::{ActionDescriptor, DynamicApiOptions, HttpVerb, ServiceDescriptor};

/// Resolves an action's HTTP verb against the configured conventions
pub struct VerbResolver<'a> {
    options: &'a DynamicApiOptions,
}

impl<'a> VerbResolver<'a> {
    /// Create a resolver over the given options
    pub fn new(options: &'a DynamicApiOptions) -> Self {
        Self { options }
    }

    /// Resolve the verb for one action
    pub fn resolve(&self, service: &ServiceDescriptor, action: &ActionDescriptor) -> Result<HttpVerb> {
        match action.verb_constraints.as_slice() {
            [] => {}
            [constraint] => return Ok(constraint.verb),
            constraints => {
                let verbs: Vec<&str> = constraints.iter().map(|c| c.verb.as_str()).collect();
                return Err(CompileError::ConfigurationConflict {
                    service: service.name.clone(),
                    action: action.name.clone(),
                    detail: format!("multiple HTTP verbs declared: {}", verbs.join(", ")),
                });
            }
        }

        let name = naming::trim_async_suffix(&action.name);
        for entry in &self.options.conventional_prefixes {
            if entry
                .prefixes
                .iter()
                .any(|prefix| naming::starts_with_ignore_case(name, prefix))
            {
                return Ok(entry.verb);
            }
        }

        Ok(self.options.default_http_method)
    }
}
