//! Route compiler
//!
//! Sequences validation, verb resolution, binding resolution and template
//! building over every service/action pair and produces the final route
//! table. The whole compilation is a pure function of descriptors plus
//! options: no hidden state, identical output for identical input, and the
//! first invalid action aborts the run.

use crate::binding::ParameterBindingResolver;
use crate::error::Result;
use crate::template::RouteTemplateBuilder;
use crate::validator::ConventionValidator;
use crate::verb::VerbResolver;
use dynapi_core::{
    ActionDescriptor, DynamicApiOptions, RouteEntry, RouteTable, RouteTableMetadata,
    ServiceDescriptor,
};

/// The route compiler
pub struct RouteCompiler {
    /// Synthesis options, read-only for the compiler's lifetime
    options: DynamicApiOptions,
}

impl RouteCompiler {
    /// Create a compiler over the given options
    pub fn new(options: DynamicApiOptions) -> Self {
        Self { options }
    }

    /// Get a reference to the options
    pub fn options(&self) -> &DynamicApiOptions {
        &self.options
    }

    /// Compile a route table from the selected services.
    ///
    /// Services arrive pre-filtered by the external service selector; the
    /// compiler takes every one of them at face value.
    pub fn compile(&self, services: &[ServiceDescriptor]) -> Result<RouteTable> {
        if !self.options.enabled {
            tracing::debug!("dynamic API synthesis is disabled; emitting empty route table");
            return Ok(RouteTable::empty());
        }

        self.options.sanity_check()?;

        let mut entries = Vec::new();
        for service in services {
            tracing::debug!(service = %service.name, "compiling service");
            for action in &service.actions {
                let entry = self.compile_action(service, action)?;
                tracing::debug!(
                    verb = %entry.verb,
                    template = %entry.template,
                    "synthesized route for {}.{}",
                    service.name,
                    action.name
                );
                entries.push(entry);
            }
        }

        tracing::info!(
            "route table compiled: {} routes from {} services",
            entries.len(),
            services.len()
        );

        let metadata = RouteTableMetadata::new(services.len(), entries.len());
        Ok(RouteTable::new(entries, metadata))
    }

    fn compile_action(
        &self,
        service: &ServiceDescriptor,
        action: &ActionDescriptor,
    ) -> Result<RouteEntry> {
        ConventionValidator::validate_action(service, action)?;

        let verb = VerbResolver::new(&self.options).resolve(service, action)?;
        let resolved = ParameterBindingResolver::resolve(
            &service.name,
            action,
            verb,
            action.has_template_override(),
        )?;
        let template = RouteTemplateBuilder::new(&self.options).build(
            service,
            action,
            verb,
            &resolved.path_parameters,
        );
        ConventionValidator::validate_template(&service.name, &action.name, &template)?;

        Ok(RouteEntry {
            service: service.name.clone(),
            action: action.name.clone(),
            group: service.name.clone(),
            verb,
            template,
            bindings: resolved.bindings,
        })
    }
}

impl Default for RouteCompiler {
    fn default() -> Self {
        Self::new(DynamicApiOptions::default())
    }
}

/// Compile a route table in one call.
///
/// This is the boundary collaborators use: descriptors in, route table (or
/// the first fatal error) out.
pub fn compile(services: &[ServiceDescriptor], options: &DynamicApiOptions) -> Result<RouteTable> {
    RouteCompiler::new(options.clone()).compile(services)
}
