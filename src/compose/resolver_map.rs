//! Resolver map composition.

use std::fmt;
use std::sync::Arc;

use tracing::instrument;

use crate::fragment::{FieldMap, FieldResolver, ResolverSet};
use crate::types::OperationKind;

/// Composed field-handler map, grouped by root operation type.
///
/// Groups exist only for kinds that received at least one contribution; a
/// present-but-empty contribution still creates its group. Handlers are
/// shared ([`FieldResolver`] is an `Arc`), so composing is cheap and the
/// registry keeps its own copies.
#[derive(Clone, Default)]
pub struct ResolverMap {
    query: Option<FieldMap>,
    mutation: Option<FieldMap>,
    subscription: Option<FieldMap>,
}

impl ResolverMap {
    /// Returns the handler group for the given kind, if any fragment
    /// contributed to it.
    #[must_use]
    pub fn get(&self, kind: OperationKind) -> Option<&FieldMap> {
        match kind {
            OperationKind::Query => self.query.as_ref(),
            OperationKind::Mutation => self.mutation.as_ref(),
            OperationKind::Subscription => self.subscription.as_ref(),
        }
    }

    /// Looks up a single field handler.
    #[must_use]
    pub fn field(&self, kind: OperationKind, name: &str) -> Option<&FieldResolver> {
        self.get(kind).and_then(|group| group.get(name))
    }

    /// True when no group exists at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.mutation.is_none() && self.subscription.is_none()
    }

    /// Sorted field names in the given group. Diagnostic aid.
    #[must_use]
    pub fn field_names(&self, kind: OperationKind) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .get(kind)
            .map(|group| group.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    fn group_mut(&mut self, kind: OperationKind) -> &mut Option<FieldMap> {
        match kind {
            OperationKind::Query => &mut self.query,
            OperationKind::Mutation => &mut self.mutation,
            OperationKind::Subscription => &mut self.subscription,
        }
    }
}

impl fmt::Debug for ResolverMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverMap")
            .field("query", &self.field_names(OperationKind::Query))
            .field("mutation", &self.field_names(OperationKind::Mutation))
            .field("subscription", &self.field_names(OperationKind::Subscription))
            .finish()
    }
}

/// Reduces handler contributions into one [`ResolverMap`].
///
/// Fragments are folded in arrival order. For each operation kind present
/// in a fragment, every `(field, handler)` pair is inserted-or-overwritten
/// into the corresponding group, creating the group on first contribution.
/// Within one kind, a field name defined by two fragments resolves to the
/// later fragment's handler — last write wins, silently. No
/// duplicate-field error is raised.
///
/// # Examples
///
/// ```rust
/// use gqlweave::compose::compose_resolvers;
/// use gqlweave::fragment::ResolverSet;
/// use gqlweave::types::OperationKind;
/// use serde_json::{Value, json};
///
/// let fragments = vec![
///     ResolverSet::new().query("version", |_| json!(1)),
///     ResolverSet::new().query("version", |_| json!(2)),
/// ];
///
/// let map = compose_resolvers(&fragments);
/// let handler = map.field(OperationKind::Query, "version").unwrap();
/// assert_eq!(handler(Value::Null), json!(2));
/// ```
#[instrument(skip_all, fields(fragments = fragments.len()))]
pub fn compose_resolvers(fragments: &[ResolverSet]) -> ResolverMap {
    let mut map = ResolverMap::default();

    for set in fragments {
        for kind in OperationKind::ALL {
            let Some(fields) = set.get(kind) else {
                continue;
            };
            let group = map.group_mut(kind).get_or_insert_with(FieldMap::default);
            for (name, handler) in fields {
                group.insert(name.clone(), Arc::clone(handler));
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn absent_kinds_stay_absent() {
        let map = compose_resolvers(&[ResolverSet::new().mutation("save", |_| Value::Null)]);
        assert!(map.get(OperationKind::Query).is_none());
        assert!(map.get(OperationKind::Subscription).is_none());
        assert!(map.field(OperationKind::Mutation, "save").is_some());
    }

    #[test]
    fn present_but_empty_group_is_created() {
        let set = ResolverSet {
            queries: Some(FieldMap::default()),
            ..ResolverSet::default()
        };
        let map = compose_resolvers(&[set]);
        assert!(map.get(OperationKind::Query).is_some());
        assert!(map.get(OperationKind::Query).unwrap().is_empty());
    }

    #[test]
    fn later_fragment_wins_field_collisions() {
        let fragments = vec![
            ResolverSet::new().query("greet", |_| json!("first")),
            ResolverSet::new().query("greet", |_| json!("second")),
        ];
        let map = compose_resolvers(&fragments);
        let handler = map.field(OperationKind::Query, "greet").unwrap();
        assert_eq!(handler(Value::Null), json!("second"));
    }
}
