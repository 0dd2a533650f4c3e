//! Route template composition
//!
//! Joins the present segments — route prefix, root path, controller, action,
//! path parameters — with `/`, omitting absent ones. An explicit template
//! override replaces the controller/action/parameter segments; a relative
//! override is still mounted under the prefix and root path, a rooted one
//! (leading `/`) is used verbatim.

use crate::naming;
use dynapi_core::{ActionDescriptor, DynamicApiOptions, HttpVerb, ServiceDescriptor};

/// Builds URL path templates from descriptors and configuration
pub struct RouteTemplateBuilder<'a> {
    options: &'a DynamicApiOptions,
}

impl<'a> RouteTemplateBuilder<'a> {
    /// Create a builder over the given options
    pub fn new(options: &'a DynamicApiOptions) -> Self {
        Self { options }
    }

    /// Build the template for one action.
    ///
    /// `path_parameters` are the names the binding resolver marked Path, in
    /// declaration order; each is rendered as a kebab-cased `{token}`.
    pub fn build(
        &self,
        service: &ServiceDescriptor,
        action: &ActionDescriptor,
        verb: HttpVerb,
        path_parameters: &[String],
    ) -> String {
        if let Some(overridden) = Self::template_override(action) {
            if let Some(rooted) = overridden.strip_prefix('/') {
                return rooted.to_string();
            }
            let mut segments = self.base_segments(service);
            segments.push(overridden.to_string());
            return segments.join("/");
        }

        let mut segments = self.base_segments(service);
        segments.push(self.controller_segment(service));
        if let Some(segment) = self.action_segment(action, verb) {
            segments.push(segment);
        }
        for name in path_parameters {
            segments.push(format!("{{{}}}", naming::to_kebab_case(name)));
        }
        segments.join("/")
    }

    fn template_override(action: &ActionDescriptor) -> Option<&str> {
        action
            .route_override
            .as_deref()
            .or_else(|| action.verb_constraints.iter().find_map(|c| c.template.as_deref()))
    }

    fn base_segments(&self, service: &ServiceDescriptor) -> Vec<String> {
        let mut segments = Vec::new();

        if self.options.add_route_prefix_to_route
            && !self.options.default_route_prefix.trim().is_empty()
        {
            segments.push(self.options.default_route_prefix.clone());
        }

        if self.options.add_root_path_to_route {
            let root_path = service
                .root_path
                .as_deref()
                .unwrap_or(&self.options.default_root_path);
            if !root_path.trim().is_empty() {
                segments.push(root_path.to_string());
            }
        }

        segments
    }

    fn controller_segment(&self, service: &ServiceDescriptor) -> String {
        let name = if self.options.remove_controller_suffix {
            naming::strip_suffix(&service.name, &self.options.controller_suffixes)
        } else {
            service.name.as_str()
        };
        naming::to_kebab_case(name)
    }

    /// The action segment, or `None` when the stripped name is empty (an
    /// action literally named after its verb)
    fn action_segment(&self, action: &ActionDescriptor, verb: HttpVerb) -> Option<String> {
        if let Some(name) = &action.name_override {
            // explicit names are used verbatim
            return if name.is_empty() {
                None
            } else {
                Some(name.clone())
            };
        }

        let name = naming::trim_async_suffix(&action.name);
        let name = if self.options.remove_action_prefix {
            match self.options.prefixes_for(verb) {
                Some(prefixes) => naming::strip_prefix_ignore_case(name, prefixes),
                None => name,
            }
        } else {
            name
        };

        let segment = naming::to_kebab_case(name);
        if segment.is_empty() {
            None
        } else {
            Some(segment)
        }
    }
}
