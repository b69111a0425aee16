use super::*;
use crate::model::{Category, Item};

fn scored(id: usize, value: f64) -> ScoredItem {
    ScoredItem::from_item(Item::new(id, value, Category::A))
}

#[test]
fn test_sorts_descending() {
    let mut items = vec![scored(0, 0.4), scored(1, 0.9), scored(2, 0.6)];
    sort_by_score_desc(&mut items);
    let ids: Vec<usize> = items.iter().map(|s| s.item.id).collect();
    assert_eq!(ids, vec![1, 2, 0]);
    assert!(is_sorted_desc(&items));
}

#[test]
fn test_ties_keep_all_items() {
    let mut items = vec![scored(0, 0.5), scored(1, 0.5), scored(2, 0.8)];
    sort_by_score_desc(&mut items);
    assert_eq!(items[0].item.id, 2);
    let mut tied: Vec<usize> = items[1..].iter().map(|s| s.item.id).collect();
    tied.sort();
    assert_eq!(tied, vec![0, 1]);
}

#[test]
fn test_is_sorted_desc_rejects_ascending() {
    assert!(!is_sorted_desc(&[scored(0, 0.4), scored(1, 0.5)]));
    assert!(is_sorted_desc(&[]));
}
