//! Annotation Resolver
//!
//! Walks a class's inheritance chain, picks the public methods the class
//! declares itself, and merges the chain's class-level annotations into each
//! of them.
//!
//! The resolver only holds references and options. Everything built during a
//! pass (the ancestor chain, the method map) is local to `resolve`, so one
//! resolver can be reused for any number of classes.

use crate::class_info::ClassAnnotationInfo;
use crate::error::ResolveError;
use crate::method_info::MethodAnnotationInfo;
use crate::resolved::ResolvedAnnotations;
use annot_common::limits::{ANCESTOR_CHAIN_CAPACITY, MAX_ANCESTOR_DEPTH};
use annot_reflect::{
    AnnotationSource, ClassDecl, ClassTarget, DeclaredAnnotations, ReflectionProvider,
};
use indexmap::IndexMap;
use tracing::{debug, trace};

pub struct AnnotationResolver<'p, P: ?Sized, S: ?Sized = DeclaredAnnotations> {
    provider: &'p P,
    source: &'p S,
    filter: Option<String>,
}

impl<'p, P> AnnotationResolver<'p, P, DeclaredAnnotations>
where
    P: ReflectionProvider + ?Sized,
{
    /// A resolver reading the annotations attached to the declarations.
    pub fn new(provider: &'p P) -> Self {
        AnnotationResolver {
            provider,
            source: &DeclaredAnnotations,
            filter: None,
        }
    }
}

impl<'p, P, S> AnnotationResolver<'p, P, S>
where
    P: ReflectionProvider + ?Sized,
    S: AnnotationSource + ?Sized,
{
    /// Use another annotation source, e.g. a docblock parser.
    pub fn with_source<T>(self, source: &'p T) -> AnnotationResolver<'p, P, T>
    where
        T: AnnotationSource + ?Sized,
    {
        AnnotationResolver {
            provider: self.provider,
            source,
            filter: self.filter,
        }
    }

    /// Only resolve methods whose name contains `filter` (case-sensitive).
    pub fn with_filter(mut self, filter: Option<&str>) -> Self {
        self.filter = filter.map(str::to_string);
        self
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Resolve the annotations of every qualifying method of `target`.
    pub fn resolve<'t>(
        &self,
        target: impl Into<ClassTarget<'t>>,
    ) -> Result<ResolvedAnnotations, ResolveError> {
        let target = target.into();
        let class = target
            .reflect(self.provider)
            .ok_or_else(|| ResolveError::UnknownClass {
                name: target.name().to_string(),
            })?;
        self.resolve_decl(class)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(class = %class.name))]
    fn resolve_decl(&self, class: &ClassDecl) -> Result<ResolvedAnnotations, ResolveError> {
        let ancestors = self.collect_ancestors(class)?;
        let mut methods: IndexMap<String, MethodAnnotationInfo> = IndexMap::new();

        for method in self.provider.public_methods(class) {
            if !self.provider.is_declared_by(&method, class) {
                trace!(
                    method = method.name(),
                    declared_in = method.declaring_class,
                    "skip inherited method"
                );
                continue;
            }
            if let Some(filter) = self.filter.as_deref() {
                if !method.name().contains(filter) {
                    trace!(method = method.name(), filter, "skip filtered method");
                    continue;
                }
            }

            let own = self.source.method_parameters(class, method.method);
            let mut info = MethodAnnotationInfo::new(method.name(), class.name.clone(), own);
            info.merge_ancestors(&ancestors)
                .map_err(|source| ResolveError::Conflict {
                    class: class.name.clone(),
                    method: method.name().to_string(),
                    source,
                })?;
            methods.insert(info.name().to_string(), info);
        }

        debug!(
            methods = methods.len(),
            levels = ancestors.len(),
            "resolved class annotations"
        );
        Ok(ResolvedAnnotations::new(class.name.clone(), ancestors, methods))
    }

    /// Class-level annotations of `class` and each of its ancestors,
    /// nearest first (`class` itself, then its parent, up to the root).
    pub fn collect_ancestors(
        &self,
        class: &ClassDecl,
    ) -> Result<Vec<ClassAnnotationInfo>, ResolveError> {
        let mut path = Vec::new();
        self.collect_from(class, Vec::with_capacity(ANCESTOR_CHAIN_CAPACITY), &mut path)
    }

    fn collect_from(
        &self,
        class: &ClassDecl,
        mut chain: Vec<ClassAnnotationInfo>,
        path: &mut Vec<String>,
    ) -> Result<Vec<ClassAnnotationInfo>, ResolveError> {
        if let Some(start) = path.iter().position(|name| *name == class.name) {
            let mut cycle = path[start..].to_vec();
            cycle.push(class.name.clone());
            return Err(ResolveError::CyclicInheritance { cycle });
        }
        if chain.len() >= MAX_ANCESTOR_DEPTH {
            return Err(ResolveError::HierarchyTooDeep {
                class: path.first().cloned().unwrap_or_else(|| class.name.clone()),
                limit: MAX_ANCESTOR_DEPTH,
            });
        }

        path.push(class.name.clone());
        chain.push(ClassAnnotationInfo::from_decl(class, self.source));

        let Some(parent_name) = self.provider.parent_of(class) else {
            return Ok(chain);
        };
        let parent = self
            .provider
            .reflect(parent_name)
            .ok_or_else(|| ResolveError::UnknownParent {
                class: class.name.clone(),
                parent: parent_name.to_string(),
            })?;
        trace!(class = %class.name, parent = %parent.name, "walk to parent");
        self.collect_from(parent, chain, path)
    }
}

/// Resolve `target` against `provider` in one call.
pub fn resolve_class<'t, P>(
    provider: &P,
    target: impl Into<ClassTarget<'t>>,
    filter: Option<&str>,
) -> Result<ResolvedAnnotations, ResolveError>
where
    P: ReflectionProvider + ?Sized,
{
    AnnotationResolver::new(provider)
        .with_filter(filter)
        .resolve(target)
}
