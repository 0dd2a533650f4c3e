//! DYNAPI Compiler - convention-based route synthesis
//!
//! Turns plain service descriptors into a complete REST route table: HTTP
//! verb, URL path template and per-parameter binding source, derived from
//! naming conventions, declared type shapes and a small set of explicit
//! overrides. Compilation runs once at startup, performs no I/O, and rejects
//! malformed or ambiguous configurations instead of emitting a partially
//! correct table.
//!
//! # Example
//!
//! ```
//! use dynapi_compiler::compile;
//! use dynapi_core::{
//!     ActionDescriptor, DynamicApiOptions, ParameterDescriptor, ServiceDescriptor, TypeShape,
//! };
//!
//! let services = vec![ServiceDescriptor::new("UserAppService").add_action(
//!     ActionDescriptor::new("GetAsync")
//!         .add_parameter(ParameterDescriptor::new("id", TypeShape::Int32)),
//! )];
//!
//! let table = compile(&services, &DynamicApiOptions::default()).unwrap();
//! assert_eq!(table.entries[0].template, "api/user/{id}");
//! ```

pub mod binding;
pub mod classify;
pub mod compiler;
pub mod error;
pub mod naming;
pub mod template;
pub mod validator;
pub mod verb;

pub use binding::{ParameterBindingResolver, ResolvedBindings};
pub use classify::TypeKind;
pub use compiler::{compile, RouteCompiler};
pub use error::{CompileError, Result};
pub use template::RouteTemplateBuilder;
pub use validator::ConventionValidator;
pub use verb::VerbResolver;
