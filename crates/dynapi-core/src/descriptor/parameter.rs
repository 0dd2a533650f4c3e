//! Parameter descriptor definitions

use crate::route::BindingSource;
use crate::types::TypeShape;
use serde::{Deserialize, Serialize};

/// One parameter of an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name as declared
    pub name: String,

    /// Declared type shape
    pub shape: TypeShape,

    /// Explicit binding override; inference leaves it untouched
    pub binding_override: Option<BindingSource>,
}

impl ParameterDescriptor {
    /// Create a new parameter descriptor
    pub fn new(name: impl Into<String>, shape: TypeShape) -> Self {
        ParameterDescriptor {
            name: name.into(),
            shape,
            binding_override: None,
        }
    }

    /// Set an explicit binding override
    pub fn with_binding(mut self, source: BindingSource) -> Self {
        self.binding_override = Some(source);
        self
    }
}
