//! Convention validation
//!
//! Rejects descriptor configurations that violate the routing invariants.
//! Checks run in two passes: `validate_action` before synthesis (explicit
//! declarations that conflict with each other or with synthesis) and
//! `validate_template` on the resolved template (path separator rules).
//! Every rejection names the offending service and action.

use crate::error::{CompileError, Result};
use dynapi_core::{ActionDescriptor, ServiceDescriptor};

/// Validates descriptors and resolved templates against the routing
/// invariants
pub struct ConventionValidator;

impl ConventionValidator {
    /// Reject explicit declarations that cannot be synthesized.
    pub fn validate_action(service: &ServiceDescriptor, action: &ActionDescriptor) -> Result<()> {
        if action.verb_constraints.len() > 1 {
            let verbs: Vec<&str> = action
                .verb_constraints
                .iter()
                .map(|c| c.verb.as_str())
                .collect();
            return Err(CompileError::ConfigurationConflict {
                service: service.name.clone(),
                action: action.name.clone(),
                detail: format!("multiple HTTP verbs declared: {}", verbs.join(", ")),
            });
        }

        if let Some(external) = &action.external_route {
            return Err(CompileError::ConfigurationConflict {
                service: service.name.clone(),
                action: action.name.clone(),
                detail: format!(
                    "carries an independently authored route attribute '{}' while a route is \
                     being synthesized; remove the attribute or exclude the service from \
                     synthesis",
                    external
                ),
            });
        }

        let fragment = action
            .verb_constraints
            .iter()
            .find_map(|c| c.template.as_deref());

        if let Some(fragment) = fragment {
            if fragment.trim().is_empty() {
                return Err(CompileError::ConfigurationConflict {
                    service: service.name.clone(),
                    action: action.name.clone(),
                    detail: "verb shorthand supplies an empty template fragment".to_string(),
                });
            }
            if action.route_override.is_some() {
                return Err(CompileError::ConfigurationConflict {
                    service: service.name.clone(),
                    action: action.name.clone(),
                    detail: "both a route override and a verb shorthand template are declared"
                        .to_string(),
                });
            }
        }

        Ok(())
    }

    /// Reject resolved templates that violate the path separator rules.
    pub fn validate_template(service: &str, action: &str, template: &str) -> Result<()> {
        let malformed = |detail: &str| {
            Err(CompileError::MalformedTemplate {
                service: service.to_string(),
                action: action.to_string(),
                template: template.to_string(),
                detail: detail.to_string(),
            })
        };

        if template.is_empty() {
            return malformed("template is empty");
        }

        if template.contains("//") {
            return malformed("template contains consecutive path separators");
        }

        if template != "/" {
            if template.starts_with('/') {
                return malformed("non-root template starts with a path separator");
            }
            if template.ends_with('/') {
                return malformed("non-root template ends with a path separator");
            }
        }

        Ok(())
    }
}
