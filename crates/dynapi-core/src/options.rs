//! Configuration for dynamic Web API synthesis
//!
//! Options are constructed once, before compilation, and shared read-only for
//! the lifetime of the process. Defaults mirror the conventional setup:
//! `api/<controller>/<action>` routes, POST as the fallback verb, and the
//! usual service-class suffixes stripped from controller names.

use crate::error::{CoreError, Result};
use crate::types::HttpVerb;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered prefix list for one HTTP verb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbPrefixes {
    /// The verb the prefixes resolve to
    pub verb: HttpVerb,

    /// Name prefixes, in match-priority order
    pub prefixes: Vec<String>,
}

impl VerbPrefixes {
    /// Create a prefix list for a verb
    pub fn new(verb: HttpVerb, prefixes: &[&str]) -> Self {
        VerbPrefixes {
            verb,
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Process-wide synthesis configuration, immutable after construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicApiOptions {
    /// Whether synthesis runs at all; when false, compilation yields an
    /// empty route table
    pub enabled: bool,

    /// Verb assigned when neither an explicit constraint nor a
    /// conventional prefix matches
    pub default_http_method: HttpVerb,

    /// Route prefix segment (e.g. "api")
    pub default_route_prefix: String,

    /// Root path segment used when a service has no explicit override
    pub default_root_path: String,

    /// Whether the route prefix participates in templates
    pub add_route_prefix_to_route: bool,

    /// Whether the root path participates in templates
    pub add_root_path_to_route: bool,

    /// Whether verb prefixes are stripped from action segments
    pub remove_action_prefix: bool,

    /// Whether configured suffixes are stripped from controller segments
    pub remove_controller_suffix: bool,

    /// Controller-name suffixes to strip, in match-priority order
    pub controller_suffixes: Vec<String>,

    /// Verb inference table, iterated in declared order
    pub conventional_prefixes: Vec<VerbPrefixes>,
}

impl Default for DynamicApiOptions {
    fn default() -> Self {
        DynamicApiOptions {
            enabled: true,
            default_http_method: HttpVerb::Post,
            default_route_prefix: "api".to_string(),
            default_root_path: "app".to_string(),
            add_route_prefix_to_route: true,
            add_root_path_to_route: false,
            remove_action_prefix: true,
            remove_controller_suffix: true,
            controller_suffixes: [
                "ApplicationService",
                "AppService",
                "AppServices",
                "Service",
                "Services",
                "ApiController",
                "Controller",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            conventional_prefixes: vec![
                VerbPrefixes::new(HttpVerb::Get, &["Get", "Query", "Find", "Fetch", "Select"]),
                VerbPrefixes::new(
                    HttpVerb::Post,
                    &["Post", "Create", "Add", "Insert", "Submit", "Save"],
                ),
                VerbPrefixes::new(HttpVerb::Patch, &["Patch"]),
                VerbPrefixes::new(HttpVerb::Put, &["Put", "Update"]),
                VerbPrefixes::new(HttpVerb::Delete, &["Delete", "Remove", "Clear"]),
            ],
        }
    }
}

impl DynamicApiOptions {
    /// Create options with the conventional defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback HTTP verb
    pub fn with_default_http_method(mut self, verb: HttpVerb) -> Self {
        self.default_http_method = verb;
        self
    }

    /// Set the route prefix segment
    pub fn with_route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_route_prefix = prefix.into();
        self
    }

    /// Set the default root path segment
    pub fn with_root_path(mut self, root_path: impl Into<String>) -> Self {
        self.default_root_path = root_path.into();
        self
    }

    /// Toggle the route prefix segment
    pub fn with_route_prefix_in_route(mut self, add: bool) -> Self {
        self.add_route_prefix_to_route = add;
        self
    }

    /// Toggle the root path segment
    pub fn with_root_path_in_route(mut self, add: bool) -> Self {
        self.add_root_path_to_route = add;
        self
    }

    /// Disable synthesis entirely
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Prefix list for a verb, if the table has one
    pub fn prefixes_for(&self, verb: HttpVerb) -> Option<&[String]> {
        self.conventional_prefixes
            .iter()
            .find(|entry| entry.verb == verb)
            .map(|entry| entry.prefixes.as_slice())
    }

    /// Load options from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let options: DynamicApiOptions =
            serde_yaml::from_str(content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        options.sanity_check()?;
        Ok(options)
    }

    /// Load options from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        let options: DynamicApiOptions =
            serde_json::from_str(content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        options.sanity_check()?;
        Ok(options)
    }

    /// Check structural invariants of the verb table.
    ///
    /// Duplicate verbs are rejected. A prefix listed under more than one verb
    /// is only warned about: the first table entry wins at resolution time,
    /// so the configuration stays deterministic.
    pub fn sanity_check(&self) -> Result<()> {
        let mut seen_verbs = HashSet::new();
        for entry in &self.conventional_prefixes {
            if !seen_verbs.insert(entry.verb) {
                return Err(CoreError::InvalidConfiguration(format!(
                    "verb '{}' appears more than once in conventional_prefixes",
                    entry.verb
                )));
            }
        }

        let mut seen_prefixes: HashSet<String> = HashSet::new();
        for entry in &self.conventional_prefixes {
            for prefix in &entry.prefixes {
                let key = prefix.to_ascii_lowercase();
                if !seen_prefixes.insert(key) {
                    log::warn!(
                        "conventional prefix '{}' is listed under more than one verb; \
                         the first entry in the table wins",
                        prefix
                    );
                }
            }
        }

        Ok(())
    }
}
