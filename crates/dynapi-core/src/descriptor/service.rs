//! Service descriptor definitions

use super::action::ActionDescriptor;
use serde::{Deserialize, Serialize};

/// One service class whose methods are synthesized into API endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Logical class name (e.g. "UserAppService")
    pub name: String,

    /// Explicit root-path override for this service (the "area" analog)
    pub root_path: Option<String>,

    /// Actions in declaration order
    pub actions: Vec<ActionDescriptor>,
}

impl ServiceDescriptor {
    /// Create a new service descriptor
    pub fn new(name: impl Into<String>) -> Self {
        ServiceDescriptor {
            name: name.into(),
            root_path: None,
            actions: Vec::new(),
        }
    }

    /// Set the root-path override
    pub fn with_root_path(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = Some(root_path.into());
        self
    }

    /// Add an action
    pub fn add_action(mut self, action: ActionDescriptor) -> Self {
        self.actions.push(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = ServiceDescriptor::new("UserAppService")
            .add_action(ActionDescriptor::new("GetAsync"))
            .add_action(ActionDescriptor::new("CreateUserInfoAsync"));

        assert_eq!(service.name, "UserAppService");
        assert!(service.root_path.is_none());
        assert_eq!(service.actions.len(), 2);
    }

    #[test]
    fn test_service_with_root_path() {
        let service = ServiceDescriptor::new("OrderAppService").with_root_path("admin");
        assert_eq!(service.root_path.as_deref(), Some("admin"));
    }
}
