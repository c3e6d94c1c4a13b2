//! Append-only store of raw fragment contributions.
//!
//! The registry keeps two ordered sequences, one per contribution axis,
//! populated in arrival order. Composition reads the sequences as slices
//! and never mutates them; arrival order is observable in the composed SDL.

use crate::fragment::{ResolverSet, SchemaFragment, TypeDefs};

/// Ordered collection of schema fragments contributed over a manager's
/// lifetime.
///
/// Created empty, grown monotonically by [`push`](SchemaRegistry::push),
/// and read by the composers. A fragment empty on one axis is ignored for
/// that axis only.
///
/// # Examples
///
/// ```rust
/// use gqlweave::fragment::{SchemaFragment, TypeDefs};
/// use gqlweave::registry::SchemaRegistry;
///
/// let mut registry = SchemaRegistry::new();
/// registry.push(SchemaFragment::new().with_type_defs(TypeDefs::new().with_queries("  a: Int")));
/// registry.push(SchemaFragment::new()); // no-op on both axes
///
/// assert_eq!(registry.type_defs().len(), 1);
/// assert!(registry.resolvers().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SchemaRegistry {
    type_defs: Vec<TypeDefs>,
    resolvers: Vec<ResolverSet>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment's contributions, preserving arrival order.
    ///
    /// No validation is performed: fragments are accepted as-is, and absent
    /// or blank sections simply contribute nothing.
    pub fn push(&mut self, fragment: SchemaFragment) {
        if let Some(type_defs) = fragment.type_defs
            && !type_defs.is_empty()
        {
            self.type_defs.push(type_defs);
        }

        if let Some(resolvers) = fragment.resolvers
            && !resolvers.is_empty()
        {
            self.resolvers.push(resolvers);
        }

        tracing::debug!(
            type_def_fragments = self.type_defs.len(),
            resolver_fragments = self.resolvers.len(),
            "fragment registered"
        );
    }

    /// All SDL contributions, in arrival order.
    #[must_use]
    pub fn type_defs(&self) -> &[TypeDefs] {
        &self.type_defs
    }

    /// All handler contributions, in arrival order.
    #[must_use]
    pub fn resolvers(&self) -> &[ResolverSet] {
        &self.resolvers
    }

    /// True when no fragment has contributed on either axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.type_defs.is_empty() && self.resolvers.is_empty()
    }
}
