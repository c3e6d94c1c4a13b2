//! SDL text composition.

use tracing::instrument;

use crate::fragment::TypeDefs;
use crate::types::OperationKind;

/// Reduces SDL contributions into one schema-definition text blob.
///
/// Contributions are partitioned by section, preserving arrival order
/// within each section. The auxiliary `types` sections are emitted first,
/// verbatim and unwrapped; each operation kind with at least one
/// contribution is then emitted as a `type <Kind> { ... }` block whose body
/// is the contributions joined with newlines. Kinds with zero contributions
/// produce no block. The text is opaque: no deduplication, no syntax
/// validation.
///
/// # Examples
///
/// ```rust
/// use gqlweave::compose::compose_type_defs;
/// use gqlweave::fragment::TypeDefs;
///
/// let fragments = vec![
///     TypeDefs::new().with_queries("  users: [User]"),
///     TypeDefs::new().with_queries("  posts: [Post]"),
/// ];
///
/// let sdl = compose_type_defs(&fragments);
/// assert_eq!(sdl, "type Query {\n  users: [User]\n  posts: [Post]\n}\n");
/// ```
#[instrument(skip_all, fields(fragments = fragments.len()))]
pub fn compose_type_defs(fragments: &[TypeDefs]) -> String {
    let types: Vec<&str> = fragments
        .iter()
        .filter_map(|td| non_blank(td.types.as_deref()))
        .collect();

    let mut sdl = String::new();
    if !types.is_empty() {
        sdl.push_str(&types.join("\n"));
        sdl.push('\n');
    }

    for kind in OperationKind::ALL {
        let bodies: Vec<&str> = fragments
            .iter()
            .filter_map(|td| non_blank(td.section(kind)))
            .collect();
        if bodies.is_empty() {
            continue;
        }

        sdl.push_str("type ");
        sdl.push_str(kind.sdl_name());
        sdl.push_str(" {\n");
        sdl.push_str(&bodies.join("\n"));
        sdl.push_str("\n}\n");
    }

    sdl
}

fn non_blank(section: Option<&str>) -> Option<&str> {
    section.filter(|text| !text.is_empty())
}
