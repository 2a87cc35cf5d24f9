//! Annotation sources.
//!
//! An `AnnotationSource` turns a reflected declaration into its parameter
//! set. A host that parses docblock comments plugs its parser in here; the
//! resolver only ever sees the resulting `ParameterSet`.

use crate::decl::{ClassDecl, MethodDecl};
use annot_common::ParameterSet;

pub trait AnnotationSource {
    /// Class-level annotations of `class`.
    fn class_parameters(&self, class: &ClassDecl) -> ParameterSet;

    /// Annotations of `method`, declared on `class`.
    fn method_parameters(&self, class: &ClassDecl, method: &MethodDecl) -> ParameterSet;
}

/// Uses the parameter sets already attached to the declarations.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclaredAnnotations;

impl AnnotationSource for DeclaredAnnotations {
    fn class_parameters(&self, class: &ClassDecl) -> ParameterSet {
        class.annotations.clone()
    }

    fn method_parameters(&self, _class: &ClassDecl, method: &MethodDecl) -> ParameterSet {
        method.annotations.clone()
    }
}
