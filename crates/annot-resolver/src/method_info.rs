use crate::class_info::ClassAnnotationInfo;
use crate::error::AnnotationConflictError;
use crate::merge::merge_parameters;
use annot_common::{ParamGroup, ParamValue, ParameterSet};
use serde::Serialize;

/// Annotations of one public method.
///
/// Starts out holding the method's own parameter set. During resolution the
/// set is replaced once by the result of merging it with the ancestor chain;
/// after that the info is read-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodAnnotationInfo {
    name: String,
    #[serde(rename = "class")]
    class_name: String,
    parameters: ParameterSet,
}

impl MethodAnnotationInfo {
    pub fn new(
        name: impl Into<String>,
        class_name: impl Into<String>,
        parameters: ParameterSet,
    ) -> Self {
        MethodAnnotationInfo {
            name: name.into(),
            class_name: class_name.into(),
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class that declares the method.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn into_parameters(self) -> ParameterSet {
        self.parameters
    }

    pub fn group(&self, group: &str) -> Option<&ParamGroup> {
        self.parameters.group(group)
    }

    pub fn parameter(&self, group: &str, param: &str) -> Option<&ParamValue> {
        self.parameters.get(group, param)
    }

    pub(crate) fn set_parameters(&mut self, parameters: ParameterSet) {
        self.parameters = parameters;
    }

    /// Merge the ancestor chain into this method's parameters.
    pub(crate) fn merge_ancestors(
        &mut self,
        ancestors: &[ClassAnnotationInfo],
    ) -> Result<(), AnnotationConflictError> {
        let own = std::mem::take(&mut self.parameters);
        let merged = merge_parameters(own, ancestors)?;
        self.set_parameters(merged);
        Ok(())
    }
}
