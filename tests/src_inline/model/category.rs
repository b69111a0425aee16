use super::*;

#[test]
fn test_from_draw_buckets() {
    assert_eq!(Category::from_draw(0.0), Category::A);
    assert_eq!(Category::from_draw(0.2499), Category::A);
    assert_eq!(Category::from_draw(0.25), Category::B);
    assert_eq!(Category::from_draw(0.5), Category::C);
    assert_eq!(Category::from_draw(0.9999), Category::D);
}

#[test]
fn test_from_draw_clamps_unit_draw() {
    assert_eq!(Category::from_draw(1.0), Category::D);
}

#[test]
fn test_labels_follow_fixed_order() {
    let labels: Vec<&str> = CATEGORIES.iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["A", "B", "C", "D"]);
    assert_eq!(Category::C.to_string(), "C");
}
