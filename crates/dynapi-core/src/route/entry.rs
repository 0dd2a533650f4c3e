//! Route entry definitions

use crate::types::HttpVerb;
use serde::{Deserialize, Serialize};

/// Where a parameter's value comes from at request time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingSource {
    /// Embedded in the URL path template
    Path,
    /// Carried in the request payload
    Body,
    /// An uploaded file or file collection
    File,
    /// Left to the host framework's default binding (typically query string)
    FrameworkDefault,
}

/// Resolved binding for one parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBinding {
    /// Parameter name as declared
    pub name: String,

    /// Resolved binding source
    pub source: BindingSource,
}

impl ParameterBinding {
    /// Create a new parameter binding
    pub fn new(name: impl Into<String>, source: BindingSource) -> Self {
        ParameterBinding {
            name: name.into(),
            source,
        }
    }
}

/// One synthesized route: the compiler's output for a single action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Originating service class name
    pub service: String,

    /// Originating method name
    pub action: String,

    /// Documentation group (the undecorated service name)
    pub group: String,

    /// Resolved HTTP verb
    pub verb: HttpVerb,

    /// Resolved URL path template
    pub template: String,

    /// Resolved bindings, one per parameter, in declaration order
    pub bindings: Vec<ParameterBinding>,
}

impl RouteEntry {
    /// Names of the parameters bound to the path, in declaration order
    pub fn path_parameters(&self) -> impl Iterator<Item = &str> {
        self.bindings
            .iter()
            .filter(|b| b.source == BindingSource::Path)
            .map(|b| b.name.as_str())
    }

    /// Binding for a named parameter, if present
    pub fn binding(&self, name: &str) -> Option<BindingSource> {
        self.bindings
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.source)
    }
}
