//! # Gqlweave: Composable GraphQL Schema Aggregation
//!
//! Gqlweave lets independent producers each contribute a partial piece of a
//! GraphQL API — SDL type-definition text and the handlers that resolve
//! fields — and composes all contributions into one unified schema artifact
//! consumable by a query-execution runtime.
//!
//! ## Core Concepts
//!
//! - **Fragments**: One contributor's partial piece of type definitions
//!   and/or resolvers
//! - **Registry**: Ordered, append-only store of contributions
//! - **Composition**: Reduction of all fragments into one SDL string and
//!   one resolver map, grouped by operation kind
//! - **Event channel**: One shared publish/subscribe handle per manager,
//!   for subscription-type fields
//!
//! The crate deliberately stops at composition: it does not validate SDL
//! syntax, execute queries, or invoke a single handler. Those concerns
//! belong to the execution runtime consuming the composed artifact.
//!
//! ## Quick Start
//!
//! ```rust
//! use gqlweave::config::ManagerConfig;
//! use gqlweave::fragment::{ResolverSet, SchemaFragment, TypeDefs};
//! use gqlweave::manager::SchemaManager;
//! use gqlweave::types::OperationKind;
//! use serde_json::json;
//!
//! let mut manager = SchemaManager::new(ManagerConfig::default());
//!
//! // Each producer registers its own slice of the API.
//! manager.add_schema(
//!     SchemaFragment::new()
//!         .with_type_defs(
//!             TypeDefs::new()
//!                 .with_types("type User {\n  id: ID!\n}")
//!                 .with_queries("  user(id: ID!): User"),
//!         )
//!         .with_resolvers(ResolverSet::new().query("user", |args| args)),
//! );
//! manager.add_schema(
//!     SchemaFragment::new()
//!         .with_type_defs(TypeDefs::new().with_mutations("  ping: String"))
//!         .with_resolvers(ResolverSet::new().mutation("ping", |_| json!("pong"))),
//! );
//!
//! // One caller composes the final artifact.
//! let schema = manager.get_schema();
//! assert!(schema.type_defs.starts_with("type User {"));
//! assert!(schema.type_defs.contains("type Query {"));
//! assert!(schema.type_defs.contains("type Mutation {"));
//! assert!(schema.resolvers.field(OperationKind::Mutation, "ping").is_some());
//! ```
//!
//! ## Shared Event Channel
//!
//! Subscription resolvers need a pub/sub handle. Every manager creates
//! exactly one [`event_channel::EventChannel`] and exposes it by reference,
//! so all contributors of one instance publish into the same channel:
//!
//! ```rust
//! use gqlweave::manager::SchemaManager;
//! use serde_json::json;
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! # rt.block_on(async {
//! let manager = SchemaManager::default();
//! let mut updates = manager.event_channel().subscribe_topic("post_added");
//!
//! manager
//!     .event_channel()
//!     .publish("post_added", json!({ "title": "hello" }))
//!     .unwrap();
//!
//! assert_eq!(updates.recv().await.unwrap().payload["title"], "hello");
//! # });
//! ```
//!
//! ## Module Guide
//!
//! - [`manager`] - The [`SchemaManager`](manager::SchemaManager) facade
//! - [`fragment`] - Fragment, type-def, and resolver-set types
//! - [`registry`] - The append-only contribution store
//! - [`compose`] - SDL and resolver-map reduction
//! - [`event_channel`] - The per-manager pub/sub handle
//! - [`logging`] - Log sink capability and the wrapping adapter
//! - [`config`] - Construction-time configuration
//! - [`types`] - Operation-kind vocabulary

pub mod compose;
pub mod config;
pub mod event_channel;
pub mod fragment;
pub mod logging;
pub mod manager;
pub mod registry;
pub mod types;
