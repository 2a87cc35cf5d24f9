//! Reflection boundary for the annot resolver.
//!
//! The resolver never looks at source code. It asks a `ReflectionProvider`
//! for class declarations, parent links and public methods, and asks an
//! `AnnotationSource` for the parameter set attached to each declaration.
//!
//! - Declarations (`ClassDecl`, `MethodDecl`, `Visibility`)
//! - The provider trait and its method handles (`ReflectionProvider`, `MethodRef`)
//! - An in-memory provider loaded from JSON manifests (`ClassRegistry`)
//! - The docblock-parser boundary (`AnnotationSource`, `DeclaredAnnotations`)

pub mod decl;
pub use decl::{ClassDecl, MethodDecl, Visibility};

pub mod provider;
pub use provider::{ClassTarget, MethodRef, ReflectionProvider};

pub mod registry;
pub use registry::{ClassManifest, ClassRegistry, RegistryError};

pub mod source;
pub use source::{AnnotationSource, DeclaredAnnotations};
