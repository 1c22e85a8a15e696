//! Predicate evaluation tests
//!
//! Filter semantics against the bookstore document: relational
//! operators, permissive type coercion, regex patterns, existence
//! checks, and the keyword operators.

use docpath_core::{Configuration, PathCompiler, PathEvaluator};
use serde_json::{json, Value};

fn document() -> Value {
    json!({
        "store": {
            "book": [
                {
                    "category": "reference",
                    "author": "Nigel Rees",
                    "title": "Sayings of the Century",
                    "display-price": 8.95
                },
                {
                    "category": "fiction",
                    "author": "Evelyn Waugh",
                    "title": "Sword of Honour",
                    "display-price": 12.99
                },
                {
                    "category": "fiction",
                    "author": "Herman Melville",
                    "title": "Moby Dick",
                    "isbn": "0-553-21311-3",
                    "display-price": 8.99
                },
                {
                    "category": "fiction",
                    "author": "J. R. R. Tolkien",
                    "title": "The Lord of the Rings",
                    "isbn": "0-395-19395-8",
                    "display-price": 22.99
                }
            ],
            "bicycle": {
                "color": "red",
                "display-price": 19.95
            }
        },
        "max-price": 10
    })
}

fn read(document: &Value, path: &str) -> Vec<Value> {
    let compiled = PathCompiler::compile(path).unwrap();
    PathEvaluator::evaluate(&compiled, document, &Configuration::default())
        .unwrap()
        .values
}

mod relational_operators {
    use super::*;

    #[test]
    fn root_context_can_be_referred_in_predicate() {
        let document = document();
        let prices = read(
            &document,
            "$.store.book[?(@.display-price <= $.max-price)].display-price",
        );
        assert_eq!(prices, vec![json!(8.95), json!(8.99)]);
    }

    #[test]
    fn path_can_be_on_either_side_of_operator() {
        let document = document();
        let left = read(&document, "$.store.book[?(@.category == 'reference')].author");
        let right = read(&document, "$.store.book[?('reference' == @.category)].author");
        assert_eq!(left, vec![json!("Nigel Rees")]);
        assert_eq!(right, vec![json!("Nigel Rees")]);
    }

    #[test]
    fn path_can_be_on_both_sides_of_operator() {
        let document = document();
        let all = read(&document, "$.store.book[?(@.category == @.category)]");
        assert_eq!(all.len(), 4);

        let all = read(&document, "$.store.book[?(@.category == @['category'])]");
        assert_eq!(all.len(), 4);

        let all = read(&document, "$.store.book[?(@ == @)]");
        assert_eq!(all.len(), 4);

        let none = read(&document, "$.store.book[?(@.category != @.category)]");
        assert_eq!(none.len(), 0);

        // Mismatched kinds are unequal, so != is true for every book
        let mismatched = read(&document, "$.store.book[?(@.category != @)]");
        assert_eq!(mismatched.len(), 4);
    }

    #[test]
    fn literal_only_predicates_evaluate() {
        let document = document();
        assert_eq!(read(&document, "$.store.book[?('a' == 'a')]").len(), 4);
        assert_eq!(read(&document, "$.store.book[?('a' == 'b')]").len(), 0);
    }

    #[test]
    fn boolean_operators_short_circuit_left_to_right() {
        let document = document();

        let either = read(
            &document,
            "$.store.book[?(@.author == 'Nigel Rees' || @.author == 'Evelyn Waugh')].author",
        );
        assert_eq!(either, vec![json!("Nigel Rees"), json!("Evelyn Waugh")]);

        let both = read(
            &document,
            "$.store.book[?((@.author == 'Nigel Rees' || @.author == 'Evelyn Waugh') && @.display-price < 15)].author",
        );
        assert_eq!(both, vec![json!("Nigel Rees"), json!("Evelyn Waugh")]);

        let narrowed = read(
            &document,
            "$.store.book[?((@.author == 'Nigel Rees' || @.author == 'Evelyn Waugh') && @.category == 'reference')].author",
        );
        assert_eq!(narrowed, vec![json!("Nigel Rees")]);

        let grouped = read(
            &document,
            "$.store.book[?((@.author == 'Nigel Rees') || (@.author == 'Evelyn Waugh' && @.category != 'fiction'))].author",
        );
        assert_eq!(grouped, vec![json!("Nigel Rees")]);
    }
}

mod type_coercion {
    use super::*;

    #[test]
    fn equality_check_does_not_break_evaluation() {
        let doc = json!([{"value": "5"}]);
        assert_eq!(read(&doc, "$[?(@.value=='5')]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.value=='5.1.26')]").len(), 0);

        let doc = json!([{"value": 5}]);
        assert_eq!(read(&doc, "$[?(@.value==5)]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.value=='5.1.26')]").len(), 0);

        let doc = json!([{"value": 5.1}]);
        assert_eq!(read(&doc, "$[?(@.value=='5.1.26')]").len(), 0);

        let doc = json!([{"value": "5.1.26"}]);
        assert_eq!(read(&doc, "$[?(@.value=='5.1.26')]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.value=='5')]").len(), 0);
        assert_eq!(read(&doc, "$[?(@.value==5)]").len(), 0);
        assert_eq!(read(&doc, "$[?(@.value==5.1)]").len(), 0);
    }

    #[test]
    fn ordering_check_does_not_break_evaluation() {
        let doc = json!([{"value": "5"}]);
        assert_eq!(read(&doc, "$[?(@.value<'7')]").len(), 1);

        let doc = json!([{"value": "7"}]);
        assert_eq!(read(&doc, "$[?(@.value<'5')]").len(), 0);

        let doc = json!([{"value": 5}]);
        assert_eq!(read(&doc, "$[?(@.value<7)]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.value<7.1)]").len(), 1);

        let doc = json!([{"value": 7}]);
        assert_eq!(read(&doc, "$[?(@.value<5)]").len(), 0);
        assert_eq!(read(&doc, "$[?(@.value<5.1)]").len(), 0);

        let doc = json!([{"value": 5.1}]);
        assert_eq!(read(&doc, "$[?(@.value<7)]").len(), 1);

        // Mismatched kinds are unordered, never an error
        let doc = json!([{"value": "seven"}]);
        assert_eq!(read(&doc, "$[?(@.value<5)]").len(), 0);
    }

    #[test]
    fn integer_and_decimal_representations_compare_numerically() {
        let doc = json!([{"value": 5}]);
        assert_eq!(read(&doc, "$[?(@.value == 5.0)]").len(), 1);
    }
}

mod existence {
    use super::*;

    #[test]
    fn bare_path_is_an_existence_check() {
        let document = document();
        let with_isbn = read(&document, "$.store.book[?(@.isbn)].author");
        assert_eq!(
            with_isbn,
            vec![json!("Herman Melville"), json!("J. R. R. Tolkien")]
        );
    }

    #[test]
    fn negated_existence_is_the_exact_complement() {
        let document = document();
        let with_isbn = read(&document, "$.store.book[?(@.isbn)]");
        let without_isbn = read(&document, "$.store.book[?(!@.isbn)]");
        assert_eq!(with_isbn.len() + without_isbn.len(), 4);

        let authors = read(&document, "$.store.book[?(!@.isbn)].author");
        assert_eq!(authors, vec![json!("Nigel Rees"), json!("Evelyn Waugh")]);
    }

    #[test]
    fn truthiness_over_primitive_candidates() {
        let doc = json!([0, 1, null, 2, 3]);

        // Null is falsy for bare predicates; scalars are their own candidate
        let truthy = read(&doc, "$[?(@)]");
        assert_eq!(truthy, vec![json!(0), json!(1), json!(2), json!(3)]);

        let non_null = read(&doc, "$[?(@ != null)]");
        assert_eq!(non_null, vec![json!(0), json!(1), json!(2), json!(3)]);

        let falsy = read(&doc, "$[?(!@)]");
        assert_eq!(falsy, vec![json!(null)]);
    }

    #[test]
    fn missing_compares_unequal_to_everything() {
        let doc = json!([{"a": 1}, {"b": 2}]);
        // Only the candidate without 'a' can satisfy "a absent"
        assert_eq!(read(&doc, "$[?(@.a != 1)]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.a == @.missing)]").len(), 1);
    }
}

mod patterns {
    use super::*;

    #[test]
    fn patterns_can_be_evaluated() {
        let document = document();
        let authors = read(&document, "$.store.book[?(@.category =~ /reference/)].author");
        assert_eq!(authors, vec![json!("Nigel Rees")]);

        let flipped = read(&document, "$.store.book[?(/reference/ =~ @.category)].author");
        assert_eq!(flipped, vec![json!("Nigel Rees")]);
    }

    #[test]
    fn patterns_honor_the_ignore_case_flag() {
        let document = document();
        let strict = read(&document, "$.store.book[?(@.category =~ /REFERENCE/)].author");
        assert!(strict.is_empty());

        let relaxed = read(&document, "$.store.book[?(@.category =~ /REFERENCE/i)].author");
        assert_eq!(relaxed, vec![json!("Nigel Rees")]);
    }

    #[test]
    fn patterns_match_against_node_lists() {
        let doc = json!({"store": [
            {"name": "First", "book": [
                {"category": "reference"},
                {"category": "fiction"}
            ]},
            {"name": "Second", "book": [
                {"category": "fiction"}
            ]}
        ]});
        let names = read(&doc, "$.store[?(@.book[*].category =~ /Reference/i)].name");
        assert_eq!(names, vec![json!("First")]);
    }

    #[test]
    fn escaped_delimiters_inside_patterns() {
        let doc = json!(["x"]);
        assert_eq!(read(&doc, r"$[?(@ =~ /\/|x/)]").len(), 1);
        assert_eq!(read(&doc, r#"$[?(@ == "abc" || @ =~ /\/|x/)]"#).len(), 1);
        assert_eq!(read(&doc, r#"$[?(@ =~ /\/|x/ || @ == "abc")]"#).len(), 1);
    }

    #[test]
    fn non_string_operands_never_match_patterns() {
        let doc = json!([42, true, {"a": 1}, "reference"]);
        assert_eq!(read(&doc, "$[?(@ =~ /reference/)]").len(), 1);
    }
}

mod escaped_literals {
    use super::*;

    #[test]
    fn escaped_quote_in_single_quoted_literal() {
        let doc = json!(["'foo"]);
        assert_eq!(read(&doc, r"$[?(@ == '\'foo')]").len(), 1);
    }

    #[test]
    fn escaped_backslash_in_double_quoted_literal() {
        let doc = json!(["\\'foo"]);
        assert_eq!(read(&doc, r#"$[?(@ == "\\'foo")]"#).len(), 1);
    }
}

mod keyword_operators {
    use super::*;

    #[test]
    fn membership_in_a_literal_list() {
        let document = document();
        let fiction = read(
            &document,
            "$.store.book[?(@.category in ['fiction', 'poetry'])]",
        );
        assert_eq!(fiction.len(), 3);

        let other = read(
            &document,
            "$.store.book[?(@.category nin ['fiction', 'poetry'])]",
        );
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn subset_and_intersection_operators() {
        let doc = json!([
            {"sizes": ["S", "M"]},
            {"sizes": ["M", "L", "XL"]}
        ]);
        assert_eq!(read(&doc, "$[?(@.sizes subsetof ['S', 'M', 'L'])]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.sizes anyof ['M'])]").len(), 2);
        assert_eq!(read(&doc, "$[?(@.sizes noneof ['XXL'])]").len(), 2);
        assert_eq!(read(&doc, "$[?(@.sizes noneof ['XL'])]").len(), 1);
    }

    #[test]
    fn size_operator_compares_lengths() {
        let doc = json!([
            {"s": "fo", "expected_size": "m"},
            {"s": "lo", "expected_size": 2}
        ]);
        // The mismatched expectation is false, not an error
        assert_eq!(read(&doc, "$[?(@.s size @.expected_size)]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.s size 2)]").len(), 2);
    }

    #[test]
    fn empty_operator_checks_emptiness() {
        let doc = json!([
            {"name": ""},
            {"name": "full"},
            {"name": []}
        ]);
        assert_eq!(read(&doc, "$[?(@.name empty true)]").len(), 2);
        assert_eq!(read(&doc, "$[?(@.name empty false)]").len(), 1);
    }

    #[test]
    fn exists_operator_takes_a_boolean_operand() {
        let document = document();
        assert_eq!(read(&document, "$.store.book[?(@.isbn exists true)]").len(), 2);
        assert_eq!(read(&document, "$.store.book[?(@.isbn exists false)]").len(), 2);
    }

    #[test]
    fn type_operator_compares_type_names() {
        let doc = json!([
            {"v": "text"},
            {"v": 3},
            {"v": [1]},
            {"v": null}
        ]);
        assert_eq!(read(&doc, "$[?(@.v type 'string')]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.v type 'number')]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.v type 'array')]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.v type 'null')]").len(), 1);
    }

    #[test]
    fn contains_operator_covers_strings_and_arrays() {
        let doc = json!([
            {"text": "hello world", "tags": ["a", "b"]},
            {"text": "goodbye", "tags": ["c"]}
        ]);
        assert_eq!(read(&doc, "$[?(@.text contains 'world')]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.tags contains 'b')]").len(), 1);
        assert_eq!(read(&doc, "$[?(@.tags contains 'z')]").len(), 0);
    }
}

mod filter_targets {
    use super::*;

    #[test]
    fn filters_over_map_values() {
        let doc = json!({"inventory": {
            "first": {"price": 5},
            "second": {"price": 15}
        }});
        let cheap = read(&doc, "$.inventory[?(@.price < 10)].price");
        assert_eq!(cheap, vec![json!(5)]);
    }

    #[test]
    fn filter_evaluation_never_aborts_on_heterogeneous_candidates() {
        let doc = json!([
            {"price": 5},
            "just a string",
            42,
            {"price": "not a number"},
            {"price": 9}
        ]);
        let cheap = read(&doc, "$[?(@.price < 10)].price");
        assert_eq!(cheap, vec![json!(5), json!(9)]);
    }
}
