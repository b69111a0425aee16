use super::*;
use crate::pipeline::run;

#[test]
fn test_render_compact_result() {
    let out = render_json(&run(0, Some(1)), false).unwrap();
    assert_eq!(
        out,
        r#"{"inputSize":0,"filteredSize":0,"totalScore":"0.00","groupedCounts":{},"topItem":null}"#
    );
}

#[test]
fn test_render_pretty_is_valid_json() {
    let out = render_json(&run(5, Some(42)), true).unwrap();
    assert!(out.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["topItem"]["id"], 4);
    assert_eq!(value["topItem"]["score"], "61.23");
    assert_eq!(value["groupedCounts"]["C"], 2);
}
