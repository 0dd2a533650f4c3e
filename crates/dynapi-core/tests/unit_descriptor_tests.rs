//! Unit tests for descriptor construction and serialization

use dynapi_core::{
    ActionDescriptor, BindingSource, HttpVerb, ParameterDescriptor, ServiceDescriptor, TypeShape,
};

fn user_service() -> ServiceDescriptor {
    ServiceDescriptor::new("UserAppService")
        .add_action(
            ActionDescriptor::new("GetAsync")
                .add_parameter(ParameterDescriptor::new("id", TypeShape::Int32)),
        )
        .add_action(
            ActionDescriptor::new("CreateUserInfoAsync").add_parameter(ParameterDescriptor::new(
                "user",
                TypeShape::Complex("User".to_string()),
            )),
        )
}

#[test]
fn test_descriptor_graph_construction() {
    let service = user_service();

    assert_eq!(service.name, "UserAppService");
    assert_eq!(service.actions.len(), 2);
    assert_eq!(service.actions[0].parameters[0].name, "id");
    assert_eq!(
        service.actions[1].parameters[0].shape,
        TypeShape::Complex("User".to_string())
    );
}

#[test]
fn test_descriptor_serde_round_trip() {
    let service = user_service();

    let json = serde_json::to_string_pretty(&service).unwrap();
    let back: ServiceDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, service);
}

#[test]
fn test_explicit_overrides_survive_round_trip() {
    let action = ActionDescriptor::new("Submit")
        .with_verb_template(HttpVerb::Put, "submit/{code}")
        .with_name_override("finalize")
        .add_parameter(
            ParameterDescriptor::new("report", TypeShape::Complex("Report".to_string()))
                .with_binding(BindingSource::Body),
        );

    let json = serde_json::to_string(&action).unwrap();
    let back: ActionDescriptor = serde_json::from_str(&json).unwrap();

    assert_eq!(back, action);
    assert!(back.has_template_override());
    assert_eq!(back.name_override.as_deref(), Some("finalize"));
    assert_eq!(
        back.parameters[0].binding_override,
        Some(BindingSource::Body)
    );
}

#[test]
fn test_root_path_override() {
    let service = user_service().with_root_path("admin");
    assert_eq!(service.root_path.as_deref(), Some("admin"));
}
