#[macro_use]
extern crate proptest;

use proptest::prelude::{Strategy, prop};

use gqlweave::compose::compose_type_defs;
use gqlweave::fragment::TypeDefs;

/// Generate plausible SDL field-signature lines.
///
/// Constraints:
/// - Field name starts with a letter, short alphanumeric tail
/// - Simple scalar return type
fn field_line_strategy() -> impl Strategy<Value = String> {
    let name = prop::string::string_regex("[a-z][a-zA-Z0-9]{0,12}").unwrap();
    let ty = prop::sample::select(vec!["String", "Int", "Boolean", "ID"]);
    (name, ty).prop_map(|(name, ty)| format!("  {name}: {ty}"))
}

proptest! {
    /// Query lines appear in the composed SDL in exact arrival order.
    #[test]
    fn prop_query_lines_preserve_arrival_order(
        lines in prop::collection::vec(field_line_strategy(), 1..12),
    ) {
        let fragments: Vec<TypeDefs> = lines
            .iter()
            .map(|line| TypeDefs::new().with_queries(line.clone()))
            .collect();

        let sdl = compose_type_defs(&fragments);

        let mut cursor = 0;
        for line in &lines {
            let found = sdl[cursor..]
                .find(line.as_str())
                .expect("line missing from composed SDL");
            cursor += found + line.len();
        }
    }

    /// Exactly one block per contributed kind, none for the rest.
    #[test]
    fn prop_one_block_per_contributed_kind(
        queries in prop::collection::vec(field_line_strategy(), 0..4),
        mutations in prop::collection::vec(field_line_strategy(), 0..4),
    ) {
        let mut fragments = Vec::new();
        for line in &queries {
            fragments.push(TypeDefs::new().with_queries(line.clone()));
        }
        for line in &mutations {
            fragments.push(TypeDefs::new().with_mutations(line.clone()));
        }

        let sdl = compose_type_defs(&fragments);

        let expected_query_blocks = usize::from(!queries.is_empty());
        let expected_mutation_blocks = usize::from(!mutations.is_empty());
        prop_assert_eq!(sdl.matches("type Query {").count(), expected_query_blocks);
        prop_assert_eq!(sdl.matches("type Mutation {").count(), expected_mutation_blocks);
        prop_assert_eq!(sdl.matches("type Subscription {").count(), 0);
    }
}
