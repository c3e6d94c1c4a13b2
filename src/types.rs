//! Core vocabulary for the gqlweave composition engine.
//!
//! This module defines [`OperationKind`], the grouping key used by the
//! registry and both composers to partition fragment contributions by
//! GraphQL root operation type.
//!
//! # Examples
//!
//! ```rust
//! use gqlweave::types::OperationKind;
//!
//! // Blocks are always emitted in this order.
//! let order: Vec<&str> = OperationKind::ALL.iter().map(|k| k.sdl_name()).collect();
//! assert_eq!(order, ["Query", "Mutation", "Subscription"]);
//!
//! println!("composing {} block", OperationKind::Query);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root operation type of a GraphQL schema.
///
/// `OperationKind` identifies which root type a fragment contribution
/// belongs to. Each kind maps to one `type <Kind> { ... }` block in the
/// composed SDL and one top-level group in the composed resolver map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// Read operations (`type Query`).
    Query,
    /// Write operations (`type Mutation`).
    Mutation,
    /// Event-driven operations (`type Subscription`), typically backed by
    /// the manager's shared event channel.
    Subscription,
}

impl OperationKind {
    /// Fixed composition order: Query, then Mutation, then Subscription.
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];

    /// SDL spelling of the root type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gqlweave::types::OperationKind;
    /// assert_eq!(OperationKind::Query.sdl_name(), "Query");
    /// assert_eq!(OperationKind::Subscription.sdl_name(), "Subscription");
    /// ```
    #[must_use]
    pub fn sdl_name(&self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sdl_name())
    }
}
