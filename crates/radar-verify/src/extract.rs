//! Static extraction of declared table names from model source text.
//!
//! The model convention binds each table's name as an associated constant
//! on the declaring type:
//!
//! ```ignore
//! pub struct Patient;
//!
//! impl Patient {
//!     pub const TABLE_NAME: &'static str = "patient";
//!     ...
//! }
//! ```
//!
//! Extraction parses the source into a syntax tree and collects the string
//! literal bound to that constant in each impl block. Code is never
//! evaluated: a name computed through a path, macro, or any other
//! expression is skipped, exactly as a dynamically computed name would be.

use std::collections::BTreeSet;

use crate::error::{Result, VerifyError};

/// The well-known associated constant that binds a type to its table.
pub const TABLE_NAME_BINDING: &str = "TABLE_NAME";

/// Extract the set of table names declared in `source`.
///
/// Pure function of the input text: no side effects, no shared state, safe
/// to call repeatedly and concurrently. Duplicate declarations collapse
/// into one entry; colliding names are caught later when the catalog is
/// built, not here.
///
/// # Errors
///
/// Returns [`VerifyError::Parse`] if `source` is not valid Rust. There is
/// no partial result on parse failure.
pub fn extract_table_names(source: &str) -> Result<BTreeSet<String>> {
    let file = syn::parse_file(source).map_err(|error| VerifyError::Parse {
        message: error.to_string(),
    })?;
    let mut names = BTreeSet::new();
    collect_from_items(&file.items, &mut names);
    Ok(names)
}

fn collect_from_items(items: &[syn::Item], names: &mut BTreeSet<String>) {
    for item in items {
        match item {
            // Only direct impl items count as the binding; constants inside
            // function bodies or at module level are not table-name
            // declarations.
            syn::Item::Impl(item_impl) => {
                for impl_item in &item_impl.items {
                    if let syn::ImplItem::Const(constant) = impl_item
                        && constant.ident == TABLE_NAME_BINDING
                        && let syn::Expr::Lit(expr_lit) = &constant.expr
                        && let syn::Lit::Str(literal) = &expr_lit.lit
                    {
                        names.insert(literal.value());
                    }
                }
            }
            syn::Item::Mod(module) => {
                if let Some((_, nested)) = &module.content {
                    collect_from_items(nested, names);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_literal_bindings() {
        let source = r#"
            pub struct Patient;

            impl Patient {
                pub const TABLE_NAME: &'static str = "patient";
            }

            pub struct Hospital;

            impl Hospital {
                pub const TABLE_NAME: &'static str = "hospital";
            }
        "#;
        let names = extract_table_names(source).expect("source parses");
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            ["hospital", "patient"]
        );
    }

    #[test]
    fn skips_types_without_a_binding() {
        let source = r#"
            pub struct AbstractBase;

            impl AbstractBase {
                pub const VERSION: u32 = 3;
            }
        "#;
        let names = extract_table_names(source).expect("source parses");
        assert!(names.is_empty());
    }

    #[test]
    fn skips_computed_bindings() {
        let source = r#"
            const PREFIX: &str = "radar";

            pub struct Dynamic;

            impl Dynamic {
                pub const TABLE_NAME: &'static str = PREFIX;
            }

            pub struct Concatenated;

            impl Concatenated {
                pub const TABLE_NAME: &'static str = concat!("pat", "ient");
            }
        "#;
        let names = extract_table_names(source).expect("source parses");
        assert!(names.is_empty());
    }

    #[test]
    fn ignores_constants_inside_function_bodies() {
        let source = r#"
            pub struct Outer;

            impl Outer {
                pub fn helper() -> &'static str {
                    const TABLE_NAME: &str = "sneaky";
                    TABLE_NAME
                }
            }
        "#;
        let names = extract_table_names(source).expect("source parses");
        assert!(names.is_empty());
    }

    #[test]
    fn module_level_constants_are_not_bindings() {
        let source = r#"
            pub const TABLE_NAME: &str = "free_floating";
        "#;
        let names = extract_table_names(source).expect("source parses");
        assert!(names.is_empty());
    }

    #[test]
    fn recurses_into_inline_modules() {
        let source = r#"
            mod people {
                pub struct Patient;

                impl Patient {
                    pub const TABLE_NAME: &'static str = "patient";
                }
            }
        "#;
        let names = extract_table_names(source).expect("source parses");
        assert!(names.contains("patient"));
    }

    #[test]
    fn duplicate_literals_collapse() {
        let source = r#"
            pub struct A;
            impl A {
                pub const TABLE_NAME: &'static str = "patient";
            }
            pub struct B;
            impl B {
                pub const TABLE_NAME: &'static str = "patient";
            }
        "#;
        let names = extract_table_names(source).expect("source parses");
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn invalid_source_is_a_parse_error() {
        let result = extract_table_names("struct {{{{ not rust");
        assert!(matches!(
            result,
            Err(crate::VerifyError::Parse { .. })
        ));
    }
}
