//! Schema fragments: one contributor's partial piece of the API.
//!
//! A [`SchemaFragment`] bundles up to two axes of contribution: SDL text
//! ([`TypeDefs`]) and field handlers ([`ResolverSet`]). Either axis may be
//! absent; a fragment empty on one axis is a legal no-op for that axis.
//!
//! Handlers are opaque to the composition core: they are stored, merged,
//! and handed to the execution runtime, but never invoked here.
//!
//! # Examples
//!
//! ```rust
//! use gqlweave::fragment::{ResolverSet, SchemaFragment, TypeDefs};
//! use serde_json::json;
//!
//! let fragment = SchemaFragment::new()
//!     .with_type_defs(
//!         TypeDefs::new()
//!             .with_types("type User {\n  id: ID!\n  name: String\n}")
//!             .with_queries("  me: User"),
//!     )
//!     .with_resolvers(ResolverSet::new().query("me", |_args| json!({ "id": "1" })));
//!
//! assert!(fragment.type_defs.is_some());
//! assert!(fragment.resolvers.is_some());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::types::OperationKind;

/// Opaque field handler carried through composition.
///
/// The payload shape and calling convention belong to the execution
/// runtime; the composition core only stores and merges these values.
pub type FieldResolver = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Field-name to handler mapping for one root operation type.
pub type FieldMap = FxHashMap<String, FieldResolver>;

/// SDL text contributed by one fragment, split by destination.
///
/// `types` holds arbitrary auxiliary declarations emitted verbatim;
/// `queries`/`mutations`/`subscriptions` each hold a block of
/// field-signature lines destined for the respective root operation type.
///
/// Empty-string sections are treated as absent at composition time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefs {
    /// Auxiliary type declarations, emitted with no wrapper.
    pub types: Option<String>,
    /// Field signatures for `type Query`.
    pub queries: Option<String>,
    /// Field signatures for `type Mutation`.
    pub mutations: Option<String>,
    /// Field signatures for `type Subscription`.
    pub subscriptions: Option<String>,
}

impl TypeDefs {
    /// Creates an empty set of type definitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auxiliary `types` block.
    #[must_use]
    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Sets the query field signatures.
    #[must_use]
    pub fn with_queries(mut self, queries: impl Into<String>) -> Self {
        self.queries = Some(queries.into());
        self
    }

    /// Sets the mutation field signatures.
    #[must_use]
    pub fn with_mutations(mut self, mutations: impl Into<String>) -> Self {
        self.mutations = Some(mutations.into());
        self
    }

    /// Sets the subscription field signatures.
    #[must_use]
    pub fn with_subscriptions(mut self, subscriptions: impl Into<String>) -> Self {
        self.subscriptions = Some(subscriptions.into());
        self
    }

    /// Returns the SDL block destined for the given operation kind.
    #[must_use]
    pub fn section(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.queries.as_deref(),
            OperationKind::Mutation => self.mutations.as_deref(),
            OperationKind::Subscription => self.subscriptions.as_deref(),
        }
    }

    /// True when every section is absent or blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.types, &self.queries, &self.mutations, &self.subscriptions]
            .into_iter()
            .all(|section| section.as_deref().is_none_or(str::is_empty))
    }
}

/// Field handlers contributed by one fragment, grouped by operation kind.
///
/// Each group is optional. A group that is present but empty still creates
/// the corresponding top-level group in the composed resolver map, while an
/// absent group contributes nothing.
#[derive(Clone, Default)]
pub struct ResolverSet {
    /// Handlers for `Query` fields.
    pub queries: Option<FieldMap>,
    /// Handlers for `Mutation` fields.
    pub mutations: Option<FieldMap>,
    /// Handlers for `Subscription` fields.
    pub subscriptions: Option<FieldMap>,
}

impl ResolverSet {
    /// Creates an empty resolver set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a query field handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gqlweave::fragment::ResolverSet;
    /// use serde_json::json;
    ///
    /// let set = ResolverSet::new().query("ping", |_args| json!("pong"));
    /// assert_eq!(set.field_names(gqlweave::types::OperationKind::Query), vec!["ping"]);
    /// ```
    #[must_use]
    pub fn query<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.insert(OperationKind::Query, name, Arc::new(handler))
    }

    /// Registers a mutation field handler.
    #[must_use]
    pub fn mutation<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.insert(OperationKind::Mutation, name, Arc::new(handler))
    }

    /// Registers a subscription field handler.
    #[must_use]
    pub fn subscription<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.insert(OperationKind::Subscription, name, Arc::new(handler))
    }

    /// Registers an already-shared handler under the given operation kind.
    #[must_use]
    pub fn insert(
        mut self,
        kind: OperationKind,
        name: impl Into<String>,
        handler: FieldResolver,
    ) -> Self {
        self.group_mut(kind)
            .get_or_insert_with(FieldMap::default)
            .insert(name.into(), handler);
        self
    }

    /// Returns the handler group for the given operation kind, if present.
    #[must_use]
    pub fn get(&self, kind: OperationKind) -> Option<&FieldMap> {
        match kind {
            OperationKind::Query => self.queries.as_ref(),
            OperationKind::Mutation => self.mutations.as_ref(),
            OperationKind::Subscription => self.subscriptions.as_ref(),
        }
    }

    /// Sorted field names registered under the given kind. Diagnostic aid.
    #[must_use]
    pub fn field_names(&self, kind: OperationKind) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .get(kind)
            .map(|group| group.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// True when every group is absent.
    ///
    /// A present-but-empty group counts as a contribution: it creates its
    /// top-level group in the composed map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_none() && self.mutations.is_none() && self.subscriptions.is_none()
    }

    fn group_mut(&mut self, kind: OperationKind) -> &mut Option<FieldMap> {
        match kind {
            OperationKind::Query => &mut self.queries,
            OperationKind::Mutation => &mut self.mutations,
            OperationKind::Subscription => &mut self.subscriptions,
        }
    }
}

impl fmt::Debug for ResolverSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Handlers are opaque closures; show field names only.
        f.debug_struct("ResolverSet")
            .field("queries", &self.field_names(OperationKind::Query))
            .field("mutations", &self.field_names(OperationKind::Mutation))
            .field("subscriptions", &self.field_names(OperationKind::Subscription))
            .finish()
    }
}

/// One contributor's partial piece of the schema.
#[derive(Clone, Debug, Default)]
pub struct SchemaFragment {
    /// SDL text contribution, if any.
    pub type_defs: Option<TypeDefs>,
    /// Handler contribution, if any.
    pub resolvers: Option<ResolverSet>,
}

impl SchemaFragment {
    /// Creates a fragment with no contributions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches SDL text to the fragment.
    #[must_use]
    pub fn with_type_defs(mut self, type_defs: TypeDefs) -> Self {
        self.type_defs = Some(type_defs);
        self
    }

    /// Attaches field handlers to the fragment.
    #[must_use]
    pub fn with_resolvers(mut self, resolvers: ResolverSet) -> Self {
        self.resolvers = Some(resolvers);
        self
    }
}
