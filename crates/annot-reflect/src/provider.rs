//! Reflection provider trait.

use crate::decl::{ClassDecl, MethodDecl};

/// A public method as seen from some class, tagged with the class that
/// actually declares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodRef<'a> {
    pub method: &'a MethodDecl,
    pub declaring_class: &'a str,
}

impl<'a> MethodRef<'a> {
    pub fn name(&self) -> &'a str {
        &self.method.name
    }
}

/// Source of class metadata.
pub trait ReflectionProvider {
    /// Look up a class by name.
    fn reflect(&self, name: &str) -> Option<&ClassDecl>;

    /// Name of the direct parent class, if any.
    ///
    /// The name is not guaranteed to be reflectable; callers report that.
    fn parent_of<'a>(&'a self, class: &'a ClassDecl) -> Option<&'a str> {
        class.extends.as_deref()
    }

    /// All public methods callable on `class`: its own public methods first,
    /// in declaration order, then inherited public methods it does not
    /// redeclare, nearest ancestor first.
    fn public_methods<'a>(&'a self, class: &'a ClassDecl) -> Vec<MethodRef<'a>>;

    /// Whether `method` is declared directly on `class` rather than inherited.
    fn is_declared_by(&self, method: &MethodRef<'_>, class: &ClassDecl) -> bool {
        method.declaring_class == class.name
    }
}

/// What to resolve: a class name still to be reflected, or a declaration
/// that has already been reflected.
#[derive(Clone, Copy, Debug)]
pub enum ClassTarget<'a> {
    Name(&'a str),
    Decl(&'a ClassDecl),
}

impl<'a> ClassTarget<'a> {
    /// The class name this target refers to.
    pub fn name(&self) -> &'a str {
        match self {
            ClassTarget::Name(name) => name,
            ClassTarget::Decl(decl) => &decl.name,
        }
    }

    /// Turn the target into a declaration, reflecting it if needed.
    pub fn reflect<P>(self, provider: &'a P) -> Option<&'a ClassDecl>
    where
        P: ReflectionProvider + ?Sized,
    {
        match self {
            ClassTarget::Name(name) => provider.reflect(name),
            ClassTarget::Decl(decl) => Some(decl),
        }
    }
}

impl<'a> From<&'a str> for ClassTarget<'a> {
    fn from(name: &'a str) -> Self {
        ClassTarget::Name(name)
    }
}

impl<'a> From<&'a String> for ClassTarget<'a> {
    fn from(name: &'a String) -> Self {
        ClassTarget::Name(name)
    }
}

impl<'a> From<&'a ClassDecl> for ClassTarget<'a> {
    fn from(decl: &'a ClassDecl) -> Self {
        ClassTarget::Decl(decl)
    }
}
