//! DYNAPI Core - Core types for dynamic Web API route synthesis
//!
//! This crate provides the fundamental types shared across the DYNAPI
//! workspace:
//! - Descriptor types describing services, actions and parameters
//! - The declared-type model (`TypeShape`) used for binding classification
//! - Configuration (`DynamicApiOptions`)
//! - The route-table output model (`RouteEntry`, `RouteTable`)
//! - Error types

pub mod descriptor;
pub mod error;
pub mod options;
pub mod route;
pub mod types;

// Re-export commonly used types
pub use descriptor::{ActionDescriptor, ParameterDescriptor, ServiceDescriptor, VerbConstraint};
pub use error::CoreError;
pub use options::{DynamicApiOptions, VerbPrefixes};
pub use route::{BindingSource, ParameterBinding, RouteEntry, RouteTable, RouteTableMetadata};
pub use types::{HttpVerb, TypeShape};
