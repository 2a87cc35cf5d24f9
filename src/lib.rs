//! annot: inherited method annotations for class hierarchies.
//!
//! Re-exports the workspace crates under one roof:
//! - [`common`]: parameter sets and limits
//! - [`reflect`]: reflection providers, class manifests, annotation sources
//! - [`resolver`]: the ancestor walk and merge engine
//!
//! plus [`tracing_config`] for binaries that want log output.

pub use annot_common as common;
pub use annot_reflect as reflect;
pub use annot_resolver as resolver;

pub use annot_common::{ParamGroup, ParamValue, ParameterSet, ValueKind};
pub use annot_reflect::{
    AnnotationSource, ClassDecl, ClassManifest, ClassRegistry, ClassTarget, DeclaredAnnotations,
    MethodDecl, MethodRef, ReflectionProvider, RegistryError, Visibility,
};
pub use annot_resolver::{
    AnnotationConflictError, AnnotationResolver, ClassAnnotationInfo, MethodAnnotationInfo,
    ResolveError, ResolvedAnnotations, merge_parameters, resolve_class,
};

// Tracing subscriber setup (ANNOT_LOG / ANNOT_LOG_FORMAT)
pub mod tracing_config;
