//! The schema manager facade.
//!
//! [`SchemaManager`] ties the pieces together: it owns the fragment
//! registry, the logger adapter, and the per-instance event channel, and
//! drives both composers when the final schema is requested.

use std::fmt;
use std::sync::Arc;

use serde_json::json;
use tracing::instrument;

use crate::compose::{ComposedSchema, compose_resolvers, compose_type_defs};
use crate::config::ManagerConfig;
use crate::event_channel::EventChannel;
use crate::fragment::{ResolverSet, SchemaFragment, TypeDefs};
use crate::logging::{LoggerAdapter, MODULE_TAG};
use crate::registry::SchemaRegistry;

/// Field signature exposed by the built-in diagnostic fragment.
const TEST_QUERY: &str = "  hello: String";

/// Fixed greeting returned by the diagnostic resolver.
const TEST_GREETING: &str = "Hello world!";

/// The diagnostic fragment injected by test-mode `get_schema` calls.
fn test_fragment() -> SchemaFragment {
    SchemaFragment::new()
        .with_type_defs(TypeDefs::new().with_queries(TEST_QUERY))
        .with_resolvers(ResolverSet::new().query("hello", |_args| json!(TEST_GREETING)))
}

/// Facade over fragment registration and schema composition.
///
/// Contributors call [`add_schema`](Self::add_schema) during setup; once
/// setup is done, a single caller invokes [`get_schema`](Self::get_schema)
/// to reduce the accumulated registry into a [`ComposedSchema`]. The
/// manager also owns the one [`EventChannel`] shared by every contributor
/// of this instance.
///
/// # Examples
///
/// ```rust
/// use gqlweave::config::ManagerConfig;
/// use gqlweave::fragment::{ResolverSet, SchemaFragment, TypeDefs};
/// use gqlweave::manager::SchemaManager;
/// use gqlweave::types::OperationKind;
/// use serde_json::json;
///
/// let mut manager = SchemaManager::new(ManagerConfig::default());
///
/// manager.add_schema(
///     SchemaFragment::new()
///         .with_type_defs(TypeDefs::new().with_queries("  users: [User]"))
///         .with_resolvers(ResolverSet::new().query("users", |_| json!([]))),
/// );
///
/// let schema = manager.get_schema();
/// assert!(schema.type_defs.contains("type Query {"));
/// assert!(schema.resolvers.field(OperationKind::Query, "users").is_some());
/// ```
pub struct SchemaManager {
    logger: LoggerAdapter,
    test: bool,
    registry: SchemaRegistry,
    channel: Arc<EventChannel>,
}

impl SchemaManager {
    /// Builds a manager from the given configuration.
    ///
    /// Creates the instance's event channel and emits an informational
    /// "Initialized" line through the logger adapter.
    pub fn new(config: ManagerConfig) -> Self {
        let manager = Self {
            logger: LoggerAdapter::new(config.logger, config.i18n),
            test: config.test,
            registry: SchemaRegistry::new(),
            channel: EventChannel::new(config.channel_capacity),
        };
        manager.logger.info("Initialized");
        manager
    }

    /// Registers one contributor's fragment.
    ///
    /// Appends the fragment's type definitions and resolvers to the
    /// registry, each only when present and non-empty. Accepts anything:
    /// there is no validation and no error condition.
    #[instrument(skip_all)]
    pub fn add_schema(&mut self, fragment: SchemaFragment) {
        self.registry.push(fragment);
    }

    /// Composes the accumulated registry into the final schema artifact.
    ///
    /// In test mode the built-in diagnostic fragment (`hello: String`
    /// resolving to `"Hello world!"`) is registered first — on every call,
    /// not just the first, so repeated reads accumulate it in the registry.
    #[instrument(skip_all)]
    pub fn get_schema(&mut self) -> ComposedSchema {
        if self.test {
            self.add_schema(test_fragment());
            self.logger.info("Added testing schema.");
        }

        ComposedSchema {
            type_defs: compose_type_defs(self.registry.type_defs()),
            resolvers: compose_resolvers(self.registry.resolvers()),
        }
    }

    /// The publish/subscribe handle shared by all contributors of this
    /// manager instance. The manager owns the channel; consumers borrow it.
    #[must_use]
    pub fn event_channel(&self) -> &Arc<EventChannel> {
        &self.channel
    }

    /// The logger adapter used for this instance's diagnostics.
    #[must_use]
    pub fn logger(&self) -> &LoggerAdapter {
        &self.logger
    }

    /// Read access to the accumulated registry.
    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Whether test-mode injection is active.
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.test
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        Self::new(ManagerConfig::default())
    }
}

impl fmt::Display for SchemaManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{MODULE_TAG}]")?;
        writeln!(
            f,
            "\tlogger: {}",
            if self.logger.has_custom_sink() { "yes" } else { "no" }
        )?;
        writeln!(f, "\ttest: {}", self.test)
    }
}
