//! Result rendering: plain lines or JSON
//!
//! The JSON form is the Alfred-compatible item list earlier releases
//! emitted: `{"items": [{"title": ..., "arg": ...}, ...]}`.

use serde_json::json;

/// Render a list of results to stdout.
pub fn emit(items: &[String], as_json: bool) {
    if as_json {
        let items: Vec<_> = items
            .iter()
            .map(|item| json!({ "title": item, "arg": item }))
            .collect();
        println!("{}", json!({ "items": items }));
    } else {
        for item in items {
            println!("{}", item);
        }
    }
}
