use crate::class_info::ClassAnnotationInfo;
use crate::method_info::MethodAnnotationInfo;
use indexmap::IndexMap;
use serde::Serialize;

/// Resolved method annotations of one class, in method declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedAnnotations {
    #[serde(rename = "class")]
    class_name: String,
    #[serde(skip)]
    ancestors: Vec<ClassAnnotationInfo>,
    methods: IndexMap<String, MethodAnnotationInfo>,
}

impl ResolvedAnnotations {
    pub(crate) fn new(
        class_name: String,
        ancestors: Vec<ClassAnnotationInfo>,
        methods: IndexMap<String, MethodAnnotationInfo>,
    ) -> Self {
        ResolvedAnnotations {
            class_name,
            ancestors,
            methods,
        }
    }

    /// The class that was resolved.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The class-level annotation chain used for the merge, nearest first.
    /// The resolved class itself is the first entry.
    pub fn ancestors(&self) -> &[ClassAnnotationInfo] {
        &self.ancestors
    }

    pub fn get_all_resolved(&self) -> &IndexMap<String, MethodAnnotationInfo> {
        &self.methods
    }

    /// Resolved annotations of one method.
    ///
    /// `None` when the method is not a qualifying method of the class:
    /// unknown, inherited without being redeclared, not public, or removed
    /// by the name filter.
    pub fn get_resolved(&self, name: &str) -> Option<&MethodAnnotationInfo> {
        self.methods.get(name)
    }

    /// Entry at `position` in declaration order.
    pub fn get_index(&self, position: usize) -> Option<(&str, &MethodAnnotationInfo)> {
        self.methods
            .get_index(position)
            .map(|(name, info)| (name.as_str(), info))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, MethodAnnotationInfo> {
        self.methods.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ResolvedAnnotations {
    type Item = (&'a String, &'a MethodAnnotationInfo);
    type IntoIter = indexmap::map::Iter<'a, String, MethodAnnotationInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.methods.iter()
    }
}

impl IntoIterator for ResolvedAnnotations {
    type Item = (String, MethodAnnotationInfo);
    type IntoIter = indexmap::map::IntoIter<String, MethodAnnotationInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.methods.into_iter()
    }
}
