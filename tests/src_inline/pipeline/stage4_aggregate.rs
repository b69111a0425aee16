use super::*;
use crate::model::Item;

#[test]
fn test_total_and_groups() {
    let items = vec![
        ScoredItem::from_item(Item::new(0, 0.75, Category::C)),
        ScoredItem::from_item(Item::new(1, 0.5, Category::A)),
        ScoredItem::from_item(Item::new(2, 0.5, Category::C)),
    ];
    let agg = aggregate(&items);
    assert_eq!(agg.total_score, 175.0);
    assert_eq!(agg.grouped.get(&Category::A), Some(&1));
    assert_eq!(agg.grouped.get(&Category::C), Some(&2));
    assert_eq!(agg.grouped.get(&Category::B), None);
}

#[test]
fn test_empty_aggregate() {
    let agg = aggregate(&[]);
    assert_eq!(agg.total_score, 0.0);
    assert!(agg.grouped.is_empty());
}
