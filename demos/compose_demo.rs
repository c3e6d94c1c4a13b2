//! End-to-end composition walkthrough.
//!
//! This demo shows two independent producers contributing fragments, the
//! composed SDL and resolver map, test-mode diagnostics, and one event
//! delivered through the shared channel.
//!
//! Run with: `cargo run --example compose_demo`

use std::sync::Arc;

use serde_json::json;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use gqlweave::config::ManagerConfig;
use gqlweave::fragment::{ResolverSet, SchemaFragment, TypeDefs};
use gqlweave::manager::SchemaManager;
use gqlweave::types::OperationKind;

fn init_tracing() {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("error,gqlweave=debug"))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// The "users" producer: a type, a query, and a resolver.
fn users_fragment() -> SchemaFragment {
    SchemaFragment::new()
        .with_type_defs(
            TypeDefs::new()
                .with_types("type User {\n  id: ID!\n  name: String\n}")
                .with_queries("  user(id: ID!): User"),
        )
        .with_resolvers(
            ResolverSet::new().query("user", |args| json!({ "id": args["id"], "name": "Ada" })),
        )
}

/// The "posts" producer: a mutation plus a subscription wired to the
/// shared event channel.
fn posts_fragment(manager: &SchemaManager) -> SchemaFragment {
    let channel = Arc::clone(manager.event_channel());

    SchemaFragment::new()
        .with_type_defs(
            TypeDefs::new()
                .with_mutations("  addPost(title: String!): Boolean")
                .with_subscriptions("  postAdded: String"),
        )
        .with_resolvers(
            ResolverSet::new()
                .mutation("addPost", move |args| {
                    let delivered = channel.publish("post_added", args).is_ok();
                    json!(delivered)
                })
                .subscription("postAdded", |_| json!("post_added")),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let mut manager = SchemaManager::new(ManagerConfig::from_env().with_test(true));
    info!("manager ready:\n{manager}");

    let posts = posts_fragment(&manager);
    manager.add_schema(users_fragment());
    manager.add_schema(posts);

    // A subscriber a subscription resolver would hand to the runtime.
    let mut post_events = manager.event_channel().subscribe_topic("post_added");

    let schema = manager.get_schema();
    println!("--- composed SDL ---\n{}", schema.type_defs);
    println!("--- resolver map ---\n{:#?}", schema.resolvers);

    // Drive the mutation handler the way an execution runtime would.
    let add_post = schema
        .resolvers
        .field(OperationKind::Mutation, "addPost")
        .expect("addPost resolver");
    let delivered = add_post(json!({ "title": "composing schemas" }));
    println!("addPost delivered: {delivered}");

    let event = post_events.recv().await.expect("post_added event");
    println!("received {} event: {}", event.topic, event.payload);
}
