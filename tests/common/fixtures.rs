//! JSON payload builders

use serde_json::{Value, json};

/// Pull request payload with the given author and head commit
pub fn pull_request(number: u64, author: u64, head_sha: &str) -> Value {
    json!({
        "number": number,
        "state": "open",
        "title": "Add widget",
        "user": {"id": author, "login": format!("user{author}")},
        "head": {"ref": "feature", "sha": head_sha},
        "base": {"ref": "main", "sha": "base0000"}
    })
}

/// One issue comment payload
pub fn comment(author: u64, body: &str) -> Value {
    json!({
        "id": author * 1000,
        "user": {"id": author, "login": format!("user{author}")},
        "body": body
    })
}

/// Comment list payload, in the order given
pub fn comments(entries: &[(u64, &str)]) -> Value {
    Value::Array(entries.iter().map(|(author, body)| comment(*author, body)).collect())
}

/// Pull request payload whose author has a string id
pub fn pull_request_by(number: u64, author: &str, head_sha: &str) -> Value {
    json!({
        "number": number,
        "user": {"id": author},
        "head": {"sha": head_sha}
    })
}

/// Comment list payload whose authors have string ids
pub fn comments_by(entries: &[(&str, &str)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(author, body)| json!({"user": {"id": author}, "body": body}))
            .collect(),
    )
}

/// Combined status payload with one entry per `(context, state)`
pub fn combined_status(sha: &str, state: &str, entries: &[(&str, &str)]) -> Value {
    let statuses: Vec<Value> = entries
        .iter()
        .map(|(context, state)| json!({"context": context, "state": state}))
        .collect();
    json!({
        "state": state,
        "sha": sha,
        "total_count": statuses.len(),
        "statuses": statuses
    })
}
