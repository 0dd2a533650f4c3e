//! Action descriptor definitions

use super::parameter::ParameterDescriptor;
use crate::types::HttpVerb;
use serde::{Deserialize, Serialize};

/// One method of a service, synthesized into one route entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Method name (e.g. "CreateUserInfoAsync")
    pub name: String,

    /// Explicit HTTP-verb constraints declared on the method.
    ///
    /// The descriptor can hold more than one so the validator can reject the
    /// malformed input; a well-formed action declares at most one.
    pub verb_constraints: Vec<VerbConstraint>,

    /// Explicit route-template override declared on the method
    pub route_override: Option<String>,

    /// Pre-existing, independently authored route attribute from the host
    /// framework. Its presence together with synthesis is a fatal conflict.
    pub external_route: Option<String>,

    /// Explicit action-name override, used verbatim as the action segment
    pub name_override: Option<String>,

    /// Parameters in declaration order
    pub parameters: Vec<ParameterDescriptor>,
}

impl ActionDescriptor {
    /// Create a new action descriptor
    pub fn new(name: impl Into<String>) -> Self {
        ActionDescriptor {
            name: name.into(),
            verb_constraints: Vec::new(),
            route_override: None,
            external_route: None,
            name_override: None,
            parameters: Vec::new(),
        }
    }

    /// Add an explicit verb constraint without a template fragment
    pub fn with_verb(mut self, verb: HttpVerb) -> Self {
        self.verb_constraints.push(VerbConstraint::new(verb));
        self
    }

    /// Add an explicit verb constraint carrying a template fragment
    pub fn with_verb_template(mut self, verb: HttpVerb, template: impl Into<String>) -> Self {
        self.verb_constraints
            .push(VerbConstraint::new(verb).with_template(template));
        self
    }

    /// Set the explicit route-template override
    pub fn with_route_override(mut self, template: impl Into<String>) -> Self {
        self.route_override = Some(template.into());
        self
    }

    /// Record a pre-existing host-framework route attribute
    pub fn with_external_route(mut self, template: impl Into<String>) -> Self {
        self.external_route = Some(template.into());
        self
    }

    /// Set the explicit action-name override
    pub fn with_name_override(mut self, name: impl Into<String>) -> Self {
        self.name_override = Some(name.into());
        self
    }

    /// Add a parameter
    pub fn add_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Whether any explicit template source is present (route override or a
    /// verb-constraint fragment)
    pub fn has_template_override(&self) -> bool {
        self.route_override.is_some()
            || self.verb_constraints.iter().any(|c| c.template.is_some())
    }
}

/// An explicit verb constraint, optionally carrying a template fragment
/// (the `[HttpGet("path")]` shorthand)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbConstraint {
    /// The constrained verb
    pub verb: HttpVerb,

    /// Optional template fragment supplied alongside the verb
    pub template: Option<String>,
}

impl VerbConstraint {
    /// Create a verb constraint without a template fragment
    pub fn new(verb: HttpVerb) -> Self {
        VerbConstraint {
            verb,
            template: None,
        }
    }

    /// Attach a template fragment
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeShape;

    #[test]
    fn test_action_creation() {
        let action = ActionDescriptor::new("GetAsync")
            .add_parameter(ParameterDescriptor::new("id", TypeShape::Int32));

        assert_eq!(action.name, "GetAsync");
        assert!(action.verb_constraints.is_empty());
        assert_eq!(action.parameters.len(), 1);
        assert!(!action.has_template_override());
    }

    #[test]
    fn test_template_override_detection() {
        let with_route = ActionDescriptor::new("Get").with_route_override("custom/{id}");
        assert!(with_route.has_template_override());

        let with_fragment =
            ActionDescriptor::new("Get").with_verb_template(HttpVerb::Get, "by-name/{name}");
        assert!(with_fragment.has_template_override());

        let bare_verb = ActionDescriptor::new("Get").with_verb(HttpVerb::Get);
        assert!(!bare_verb.has_template_override());
    }

    #[test]
    fn test_multiple_verb_constraints_are_representable() {
        let action = ActionDescriptor::new("Get")
            .with_verb(HttpVerb::Get)
            .with_verb(HttpVerb::Post);

        assert_eq!(action.verb_constraints.len(), 2);
    }
}
