//! Property tests for the table-name extractor.

use std::collections::BTreeSet;

use proptest::prelude::*;
use radar_verify::extract_table_names;

/// Build a model source declaring one type per name, in the registry's
/// declaration convention.
fn source_for(names: &BTreeSet<String>) -> String {
    let mut source = String::new();
    for (index, name) in names.iter().enumerate() {
        source.push_str(&format!(
            "pub struct Table{index};\n\n\
             impl Table{index} {{\n    pub const TABLE_NAME: &'static str = \"{name}\";\n}}\n\n"
        ));
    }
    source
}

proptest! {
    #[test]
    fn extraction_recovers_exactly_the_declared_names(
        names in prop::collection::btree_set("[a-z][a-z0-9_]{0,12}", 0..16)
    ) {
        let source = source_for(&names);
        let extracted = extract_table_names(&source).expect("generated source parses");
        prop_assert_eq!(extracted, names);
    }

    #[test]
    fn extraction_is_idempotent(
        names in prop::collection::btree_set("[a-z][a-z0-9_]{0,12}", 0..16)
    ) {
        let source = source_for(&names);
        let first = extract_table_names(&source).expect("generated source parses");
        let second = extract_table_names(&source).expect("generated source parses");
        prop_assert_eq!(first, second);
    }
}
