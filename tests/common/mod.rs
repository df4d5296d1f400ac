//! Shared payloads for integration tests.

#![allow(dead_code)]

pub const SIMPLE_PAYLOAD: &str = r#"
{
  "id": 1001,
  "name": "alpha",
  "tags": []
}
"#;

pub const ALTERNATE_PAYLOAD: &str = r#"
{
  "ref": 2002,
  "label": "beta",
  "tags": []
}
"#;

pub const ARRAY_PAYLOAD: &str = r#"
{
  "items": [
    { "id": "A1", "kind": "x", "code": "10" },
    { "id": "B2", "kind": "y", "code": "20" },
    { "id": "C3", "kind": "x", "code": "30" }
  ]
}
"#;

pub const NESTED_PAYLOAD: &str = r#"
{
  "data": {
    "id": 1001,
    "items": [
      { "id": "A1", "kind": "x", "code": "10" }
    ]
  }
}
"#;

pub const INDEX_PAYLOAD: &str = r#"
{
  "data": {
    "myArray": [
      { "myItem": "first" },
      { "myItem": "second" },
      { "myItem": "third" }
    ]
  }
}
"#;

pub const LEDGER_PAYLOAD: &str = r#"
{
  "availableBalance": 0,
  "journalEntries": [
    {
      "accountId": 1234567,
      "entryType": "credit",
      "tranCode": "10101",
      "amount": 21.22
    },
    {
      "accountId": 3456789,
      "entryType": "debit",
      "tranCode": "10101",
      "amount": 21.22
    }
  ]
}
"#;
