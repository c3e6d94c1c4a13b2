//! Reduction of registered fragments into the final schema artifact.
//!
//! Two independent reductions run over the registry: [`compose_type_defs`]
//! folds SDL text contributions into one string, and [`compose_resolvers`]
//! folds handler contributions into one [`ResolverMap`]. Both preserve
//! fragment arrival order; neither validates its input.

mod resolver_map;
mod type_defs;

pub use resolver_map::{ResolverMap, compose_resolvers};
pub use type_defs::compose_type_defs;

use std::fmt;

/// Final composed artifact handed to the execution runtime.
///
/// `type_defs` is SDL text containing, in order: the verbatim auxiliary
/// `types` contributions, then one `type Query { ... }`, `type Mutation
/// { ... }`, and `type Subscription { ... }` block for each kind that
/// received at least one contribution. Kinds with zero contributions
/// produce no block at all.
#[derive(Clone)]
pub struct ComposedSchema {
    /// Composed SDL text; empty string when nothing was contributed.
    pub type_defs: String,
    /// Composed handler map; groups absent when never contributed.
    pub resolvers: ResolverMap,
}

impl fmt::Debug for ComposedSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedSchema")
            .field("type_defs", &self.type_defs)
            .field("resolvers", &self.resolvers)
            .finish()
    }
}
