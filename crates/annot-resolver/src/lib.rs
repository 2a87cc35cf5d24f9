//! Annotation resolution for class hierarchies.
//!
//! Given a class, the resolver collects the class-level annotations of the
//! class and each of its ancestors (nearest first), then merges that chain
//! into the annotations of every public method the class declares itself:
//!
//! - a group the method lacks is copied from the ancestor,
//! - a string parameter present on both sides gets the ancestor value as a
//!   prefix (`/api` + `/users` = `/api/users`),
//! - a list parameter present on both sides becomes the union of both lists,
//! - a string meeting a list is an `AnnotationConflictError`.
//!
//! ```ignore
//! let registry = ClassRegistry::from_manifest_str(manifest)?;
//! let resolved = AnnotationResolver::new(&registry)
//!     .with_filter(Some("Action"))
//!     .resolve("App\\UserController")?;
//! let path = resolved.get_resolved("indexAction").and_then(|m| m.parameter("route", "path"));
//! ```

pub mod class_info;
pub use class_info::ClassAnnotationInfo;

pub mod method_info;
pub use method_info::MethodAnnotationInfo;

pub mod error;
pub use error::{AnnotationConflictError, ResolveError};

pub mod merge;
pub use merge::merge_parameters;

pub mod resolved;
pub use resolved::ResolvedAnnotations;

pub mod resolver;
pub use resolver::{AnnotationResolver, resolve_class};

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod resolver_tests;
