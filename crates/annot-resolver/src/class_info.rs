use annot_common::ParameterSet;
use annot_reflect::{AnnotationSource, ClassDecl};
use serde::Serialize;

/// Class-level annotations of one class in an ancestor chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassAnnotationInfo {
    #[serde(rename = "class")]
    class_name: String,
    parameters: ParameterSet,
}

impl ClassAnnotationInfo {
    pub fn new(class_name: impl Into<String>, parameters: ParameterSet) -> Self {
        ClassAnnotationInfo {
            class_name: class_name.into(),
            parameters,
        }
    }

    /// Read the class-level annotations of `class` through `source`.
    pub fn from_decl<S>(class: &ClassDecl, source: &S) -> Self
    where
        S: AnnotationSource + ?Sized,
    {
        Self::new(class.name.clone(), source.class_parameters(class))
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// True when the class carries no annotation groups.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
