//! Integration tests for `first_string`.

mod common;

use common::*;
use jsonselector::{JsonSelect, JsonSelector};

fn check(payload: &str, cases: &[(&str, Option<&str>)]) {
    let selector = JsonSelector::new();
    for (path, expected) in cases {
        assert_eq!(
            selector.first_string(payload, path).as_deref(),
            *expected,
            "selector {}",
            path
        );
    }
}

#[test]
fn test_first_string_simple_payload() {
    check(
        SIMPLE_PAYLOAD,
        &[
            ("$.id", Some("1001")),
            ("$.name", Some("alpha")),
            ("$.missing", None),
            ("$.tags", None),
        ],
    );
}

#[test]
fn test_first_string_alternate_payload() {
    check(
        ALTERNATE_PAYLOAD,
        &[
            ("$.ref", Some("2002")),
            ("$.label", Some("beta")),
            ("$.missing", None),
        ],
    );
}

#[test]
fn test_first_string_array_payload() {
    check(
        ARRAY_PAYLOAD,
        &[
            ("$.items[?(@.kind=='x')].id", Some("A1")),
            ("$.items[?(@.kind=='y')].id", Some("B2")),
            ("$.items[?(@.kind=='z')].id", None),
            ("$.items[?(@.kind=='x' && @.code=='10')].id", Some("A1")),
            ("$.items[?(@.kind=='x' && @.code=='99')].id", None),
            (
                "$.items[?(@.kind=='x' && (@.code=='10' || @.code=='30'))].id",
                Some("A1"),
            ),
            (
                "$.items[?(@.kind=='x' && isOneOf(@.code, '10','30'))].id",
                Some("A1"),
            ),
            ("$.items[?(@.code > 15)].id", Some("B2")),
            ("$.items[?(@.kind=='x')].code", Some("10")),
        ],
    );
}

#[test]
fn test_first_string_nested_payload() {
    check(
        NESTED_PAYLOAD,
        &[
            ("$.data.id", Some("1001")),
            ("$.data.items[?(@.kind=='x')].id", Some("A1")),
            ("$.data.items[?(@.kind=='x')].code", Some("10")),
            ("$.data.missing", None),
        ],
    );
}

#[test]
fn test_first_string_ledger_payload() {
    check(
        LEDGER_PAYLOAD,
        &[
            (
                "$.journalEntries[?(@.entryType=='credit')].accountId",
                Some("1234567"),
            ),
            (
                "$.journalEntries[?(@.entryType=='debit')].accountId",
                Some("3456789"),
            ),
            ("$.journalEntries[0].amount", Some("21.22")),
            ("$.availableBalance", Some("0")),
        ],
    );
}

#[test]
fn test_first_string_numbers_render_as_decimals() {
    check(
        r#"{"a": 12.50, "b": -0.001, "c": 2.5e3, "d": 1e-2}"#,
        &[
            ("$.a", Some("12.50")),
            ("$.b", Some("-0.001")),
            ("$.c", Some("2500")),
            ("$.d", Some("0.01")),
        ],
    );
}

#[test]
fn test_first_string_value_predicate_returns_value() {
    check(
        SIMPLE_PAYLOAD,
        &[
            ("$.name == 'alpha'", Some("alpha")),
            ("$.id > 1000", Some("1001")),
            ("$.id > 5000", None),
        ],
    );
}

#[test]
fn test_first_string_wrapped_payload() {
    let payload = r#"{"data":{"journalEntries":[{"accountId":1234567,"entryType":"credit","tranCode":"10101"}]}}"#;
    check(
        payload,
        &[(
            "$.data.journalEntries[?(@.entryType=='credit')].accountId",
            Some("1234567"),
        )],
    );
}

#[test]
fn test_first_string_rejects_bad_input() {
    let selector = JsonSelector::new();
    assert_eq!(selector.first_string("", "$.id"), None);
    assert_eq!(selector.first_string("{ invalid }", "$.id"), None);
    assert_eq!(selector.first_string(SIMPLE_PAYLOAD, "$.id[?broken"), None);
}
