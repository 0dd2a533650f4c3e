//! Descriptor definitions for DYNAPI
//!
//! Descriptors are the compiler's input: a plain, framework-free snapshot of
//! the service classes an external selector picked out, built once by a
//! metadata adapter at startup and read-only thereafter.

pub mod action;
pub mod parameter;
pub mod service;

pub use action::{ActionDescriptor, VerbConstraint};
pub use parameter::ParameterDescriptor;
pub use service::ServiceDescriptor;
