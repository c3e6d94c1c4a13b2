//! Construction-time configuration for the schema manager.

use std::fmt;
use std::sync::Arc;

use crate::logging::{LogSink, Translator};

/// Configuration accepted by
/// [`SchemaManager::new`](crate::manager::SchemaManager::new).
///
/// Everything is optional: the defaults are no external logger (stdout
/// fallback), test mode off, no translator, and the default event-channel
/// capacity.
///
/// # Examples
///
/// ```rust
/// use gqlweave::config::ManagerConfig;
///
/// let config = ManagerConfig::new().with_test(true).with_channel_capacity(64);
/// assert!(config.test);
/// assert_eq!(config.channel_capacity, 64);
/// ```
#[derive(Clone)]
pub struct ManagerConfig {
    /// External log destination; `None` selects the stdout fallback.
    pub logger: Option<Arc<dyn LogSink>>,
    /// When true, `get_schema` injects the built-in diagnostic fragment on
    /// every call.
    pub test: bool,
    /// Message translation applied before log delivery; `None` is the
    /// identity.
    pub i18n: Option<Translator>,
    /// Event-channel buffer capacity per subscriber.
    pub channel_capacity: usize,
}

impl ManagerConfig {
    /// Default per-subscriber event-channel capacity.
    pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves configuration from the environment.
    ///
    /// Reads `GQLWEAVE_TEST_SCHEMA` (`1` or `true` enables test mode) after
    /// loading `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let test = std::env::var("GQLWEAVE_TEST_SCHEMA")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self::new().with_test(test)
    }

    /// Supplies an external log sink.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn LogSink>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enables or disables test mode.
    #[must_use]
    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    /// Supplies a message translator.
    #[must_use]
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.i18n = Some(translator);
        self
    }

    /// Overrides the event-channel capacity. Zero is coerced to the
    /// default.
    #[must_use]
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = if capacity == 0 {
            Self::DEFAULT_CHANNEL_CAPACITY
        } else {
            capacity
        };
        self
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            logger: None,
            test: false,
            i18n: None,
            channel_capacity: Self::DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl fmt::Debug for ManagerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerConfig")
            .field("logger", &self.logger.is_some())
            .field("test", &self.test)
            .field("i18n", &self.i18n.is_some())
            .field("channel_capacity", &self.channel_capacity)
            .finish()
    }
}
