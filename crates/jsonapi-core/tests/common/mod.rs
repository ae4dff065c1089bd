use serde_json::{json, Value};

/// Primary data shared by the comparison fixtures
#[allow(dead_code)]
pub fn article(title: &str) -> Value {
    json!({
        "id": "1",
        "type": "articles",
        "attributes": {"title": title},
        "relationships": {
            "author": {"data": {"id": "9", "type": "people"}},
            "comments": {"data": [
                {"id": "5", "type": "comments"},
                {"id": "12", "type": "comments"}
            ]}
        }
    })
}

/// A side-loaded person
#[allow(dead_code)]
pub fn person(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "type": "people",
        "attributes": {"name": name}
    })
}

/// A side-loaded comment
#[allow(dead_code)]
pub fn comment(id: &str, body: &str) -> Value {
    json!({
        "id": id,
        "type": "comments",
        "attributes": {"body": body}
    })
}

/// Compound document with the given primary data and included resources
#[allow(dead_code)]
pub fn compound(data: Value, included: Vec<Value>) -> Value {
    json!({
        "data": data,
        "included": included
    })
}
