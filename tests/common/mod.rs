#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use gqlweave::fragment::{ResolverSet, SchemaFragment, TypeDefs};
use gqlweave::logging::{LogLevel, LogSink};
use serde_json::Value;

/// Fragment contributing only query field signatures.
pub fn queries_fragment(lines: &str) -> SchemaFragment {
    SchemaFragment::new().with_type_defs(TypeDefs::new().with_queries(lines))
}

/// Fragment contributing only a verbatim `types` block.
pub fn types_fragment(text: &str) -> SchemaFragment {
    SchemaFragment::new().with_type_defs(TypeDefs::new().with_types(text))
}

/// Fragment contributing one query resolver returning a fixed value.
pub fn query_resolver_fragment(name: &str, value: Value) -> SchemaFragment {
    SchemaFragment::new()
        .with_resolvers(ResolverSet::new().query(name, move |_args| value.clone()))
}

/// One captured log line: (module, level, message).
pub type LogLine = (String, LogLevel, String);

/// Log sink capturing lines in memory for assertions.
#[derive(Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<LogLine>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines.
    pub fn snapshot(&self) -> Vec<LogLine> {
        self.lines.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.snapshot()
            .into_iter()
            .map(|(_, _, message)| message)
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn log(&self, module: &str, level: LogLevel, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((module.to_owned(), level, message.to_owned()));
    }
}
