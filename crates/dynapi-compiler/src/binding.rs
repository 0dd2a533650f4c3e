//! Parameter binding resolution
//!
//! Assigns each parameter a binding source from the resolved verb and the
//! parameter's classification:
//! - query-class verbs (GET/DELETE/HEAD) put every path-suitable parameter
//!   in the path, in declaration order;
//! - mutating verbs (POST/PUT/PATCH) route only a parameter named `id` —
//!   identifiers route, payloads body;
//! - complex parameters bind from the request payload, at most one per
//!   action;
//! - files always use the file source;
//! - explicit overrides are left untouched by inference.

use crate::classify::{self, TypeKind};
use crate::error::{CompileError, Result};
use dynapi_core::{ActionDescriptor, BindingSource, HttpVerb, ParameterBinding};

/// Outcome of binding resolution for one action
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBindings {
    /// One binding per parameter, in declaration order
    pub bindings: Vec<ParameterBinding>,

    /// Names of path-bound parameters, in declaration order, for the
    /// template builder to render as tokens
    pub path_parameters: Vec<String>,
}

/// Resolves parameter bindings for one action
pub struct ParameterBindingResolver;

impl ParameterBindingResolver {
    /// Resolve bindings for `action` under `verb`.
    ///
    /// When the action carries an explicit template override the override
    /// author owns the path tokens, so no Path bindings are inferred.
    pub fn resolve(
        service: &str,
        action: &ActionDescriptor,
        verb: HttpVerb,
        has_template_override: bool,
    ) -> Result<ResolvedBindings> {
        let mut bindings = Vec::with_capacity(action.parameters.len());
        let mut path_parameters = Vec::new();
        let mut body_parameter: Option<&str> = None;

        for parameter in &action.parameters {
            if let Some(source) = parameter.binding_override {
                if source == BindingSource::Path {
                    if !classify::is_suitable_for_path(&parameter.shape) {
                        return Err(CompileError::UnboundParameter {
                            service: service.to_string(),
                            action: action.name.clone(),
                            parameter: parameter.name.clone(),
                            detail: format!(
                                "explicitly bound to the path but its type '{}' is not path-suitable",
                                parameter.shape
                            ),
                        });
                    }
                    if !has_template_override {
                        path_parameters.push(parameter.name.clone());
                    }
                }
                bindings.push(ParameterBinding::new(parameter.name.as_str(), source));
                continue;
            }

            let kind = classify::classify(&parameter.shape).ok_or_else(|| {
                CompileError::UnknownType {
                    service: service.to_string(),
                    action: action.name.clone(),
                    parameter: parameter.name.clone(),
                    type_name: parameter.shape.to_string(),
                }
            })?;

            let source = match kind {
                TypeKind::File => BindingSource::File,
                TypeKind::PrimitiveLike | TypeKind::Parseable => {
                    let path_eligible =
                        verb.is_query_class() || parameter.name.eq_ignore_ascii_case("id");
                    if path_eligible && !has_template_override {
                        path_parameters.push(parameter.name.clone());
                        BindingSource::Path
                    } else {
                        BindingSource::FrameworkDefault
                    }
                }
                TypeKind::Complex => {
                    if let Some(first) = body_parameter {
                        return Err(CompileError::UnboundParameter {
                            service: service.to_string(),
                            action: action.name.clone(),
                            parameter: parameter.name.clone(),
                            detail: format!(
                                "more than one body-bound parameter; '{}' already binds the \
                                 request payload",
                                first
                            ),
                        });
                    }
                    body_parameter = Some(&parameter.name);
                    BindingSource::Body
                }
            };
            bindings.push(ParameterBinding::new(parameter.name.as_str(), source));
        }

        Ok(ResolvedBindings {
            bindings,
            path_parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynapi_core::{ParameterDescriptor, TypeShape};

    fn resolve(action: &ActionDescriptor, verb: HttpVerb) -> Result<ResolvedBindings> {
        ParameterBindingResolver::resolve("SampleAppService", action, verb, false)
    }

    fn complex(name: &str) -> ParameterDescriptor {
        ParameterDescriptor::new(name, TypeShape::Complex("Dto".to_string()))
    }

    #[test]
    fn test_query_class_binds_all_suitable_parameters_in_order() {
        let action = ActionDescriptor::new("Query")
            .add_parameter(ParameterDescriptor::new("a", TypeShape::Int32))
            .add_parameter(ParameterDescriptor::new("b", TypeShape::String))
            .add_parameter(complex("c"));

        let resolved = resolve(&action, HttpVerb::Get).unwrap();

        assert_eq!(resolved.path_parameters, vec!["a", "b"]);
        assert_eq!(resolved.bindings[0].source, BindingSource::Path);
        assert_eq!(resolved.bindings[1].source, BindingSource::Path);
        assert_eq!(resolved.bindings[2].source, BindingSource::Body);
    }

    #[test]
    fn test_mutating_verb_routes_only_id() {
        let action = ActionDescriptor::new("Update")
            .add_parameter(ParameterDescriptor::new("id", TypeShape::Int32))
            .add_parameter(complex("payload"));

        let resolved = resolve(&action, HttpVerb::Put).unwrap();

        assert_eq!(resolved.path_parameters, vec!["id"]);
        assert_eq!(resolved.bindings[0].source, BindingSource::Path);
        assert_eq!(resolved.bindings[1].source, BindingSource::Body);
    }

    #[test]
    fn test_mutating_verb_id_match_is_case_insensitive() {
        let action = ActionDescriptor::new("Update")
            .add_parameter(ParameterDescriptor::new("Id", TypeShape::Uuid));

        let resolved = resolve(&action, HttpVerb::Post).unwrap();
        assert_eq!(resolved.path_parameters, vec!["Id"]);
    }

    #[test]
    fn test_mutating_verb_leaves_other_primitives_to_the_framework() {
        let action = ActionDescriptor::new("Submit")
            .add_parameter(ParameterDescriptor::new("code", TypeShape::Int32))
            .add_parameter(complex("payload"));

        let resolved = resolve(&action, HttpVerb::Post).unwrap();

        assert!(resolved.path_parameters.is_empty());
        assert_eq!(resolved.bindings[0].source, BindingSource::FrameworkDefault);
        assert_eq!(resolved.bindings[1].source, BindingSource::Body);
    }

    #[test]
    fn test_two_complex_parameters_are_rejected() {
        let action = ActionDescriptor::new("Submit")
            .add_parameter(complex("payload"))
            .add_parameter(complex("extra"));

        let err = resolve(&action, HttpVerb::Post).unwrap_err();
        match err {
            CompileError::UnboundParameter { parameter, .. } => assert_eq!(parameter, "extra"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_override_exempts_parameter_from_body_limit() {
        let action = ActionDescriptor::new("Submit")
            .add_parameter(complex("payload"))
            .add_parameter(complex("extra").with_binding(BindingSource::FrameworkDefault));

        let resolved = resolve(&action, HttpVerb::Post).unwrap();
        assert_eq!(resolved.bindings[0].source, BindingSource::Body);
        assert_eq!(resolved.bindings[1].source, BindingSource::FrameworkDefault);
    }

    #[test]
    fn test_files_bind_file_regardless_of_verb() {
        for verb in [HttpVerb::Get, HttpVerb::Post] {
            let action = ActionDescriptor::new("Upload")
                .add_parameter(ParameterDescriptor::new("avatar", TypeShape::File))
                .add_parameter(ParameterDescriptor::new(
                    "attachments",
                    TypeShape::FileCollection,
                ));

            let resolved = resolve(&action, verb).unwrap();
            assert_eq!(resolved.bindings[0].source, BindingSource::File);
            assert_eq!(resolved.bindings[1].source, BindingSource::File);
            assert!(resolved.path_parameters.is_empty());
        }
    }

    #[test]
    fn test_opaque_parameter_is_rejected_without_override() {
        let action = ActionDescriptor::new("Import")
            .add_parameter(ParameterDescriptor::new(
                "blob",
                TypeShape::Opaque("LegacyBlob".to_string()),
            ));

        let err = resolve(&action, HttpVerb::Post).unwrap_err();
        assert!(matches!(err, CompileError::UnknownType { .. }));
    }

    #[test]
    fn test_opaque_parameter_with_override_is_accepted() {
        let action = ActionDescriptor::new("Import").add_parameter(
            ParameterDescriptor::new("blob", TypeShape::Opaque("LegacyBlob".to_string()))
                .with_binding(BindingSource::Body),
        );

        let resolved = resolve(&action, HttpVerb::Post).unwrap();
        assert_eq!(resolved.bindings[0].source, BindingSource::Body);
    }

    #[test]
    fn test_path_override_on_unsuitable_shape_is_rejected() {
        let action = ActionDescriptor::new("Get")
            .add_parameter(complex("filter").with_binding(BindingSource::Path));

        let err = resolve(&action, HttpVerb::Get).unwrap_err();
        assert!(matches!(err, CompileError::UnboundParameter { .. }));
    }

    #[test]
    fn test_template_override_suppresses_path_inference() {
        let action = ActionDescriptor::new("Get")
            .add_parameter(ParameterDescriptor::new("id", TypeShape::Int32));

        let resolved =
            ParameterBindingResolver::resolve("SampleAppService", &action, HttpVerb::Get, true)
                .unwrap();

        assert!(resolved.path_parameters.is_empty());
        assert_eq!(resolved.bindings[0].source, BindingSource::FrameworkDefault);
    }
}
