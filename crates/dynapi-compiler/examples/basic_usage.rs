//! Basic usage example for dynapi-compiler
//!
//! Run with: cargo run --example basic_usage

use dynapi_compiler::compile;
use dynapi_core::{
    ActionDescriptor, DynamicApiOptions, HttpVerb, ParameterDescriptor, ServiceDescriptor,
    TypeShape,
};

fn main() -> anyhow::Result<()> {
    println!("=== DYNAPI Basic Usage Example ===\n");

    // 1. Describe the services the way a metadata adapter would
    println!("1. Describing services:");
    let services = vec![
        ServiceDescriptor::new("UserAppService")
            .add_action(
                ActionDescriptor::new("GetAsync")
                    .add_parameter(ParameterDescriptor::new("id", TypeShape::Int32)),
            )
            .add_action(
                ActionDescriptor::new("CreateUserInfoAsync").add_parameter(
                    ParameterDescriptor::new("user", TypeShape::Complex("User".to_string())),
                ),
            )
            .add_action(
                ActionDescriptor::new("DeleteAsync")
                    .add_parameter(ParameterDescriptor::new("id", TypeShape::Int32)),
            ),
        ServiceDescriptor::new("DocumentAppService").add_action(
            ActionDescriptor::new("UploadAsync")
                .add_parameter(ParameterDescriptor::new("file", TypeShape::File)),
        ),
    ];
    for service in &services {
        println!("   {} ({} actions)", service.name, service.actions.len());
    }

    // 2. Compile with the conventional defaults
    println!("\n2. Compiling with default options:");
    let table = compile(&services, &DynamicApiOptions::default())?;
    for entry in table.iter() {
        println!("   {:6} {}", entry.verb, entry.template);
        for binding in &entry.bindings {
            println!("          {} <- {:?}", binding.name, binding.source);
        }
    }

    // 3. Compile with customized options
    println!("\n3. Compiling with a custom prefix and GET default:");
    let options = DynamicApiOptions::default()
        .with_route_prefix("v2")
        .with_default_http_method(HttpVerb::Get);
    let table = compile(&services, &options)?;
    for entry in table.iter() {
        println!("   {:6} {}", entry.verb, entry.template);
    }

    // 4. The table is plain data for routers and doc generators
    println!("\n4. Serialized route table:");
    println!("{}", serde_json::to_string_pretty(&table)?);

    Ok(())
}
