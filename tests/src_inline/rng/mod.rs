use super::*;

#[test]
fn test_select_source_seeded_is_lcg() {
    let mut source = select_source(Some(42));
    assert_eq!(source.source_name(), "lcg");
    let mut reference = Lcg::new(42);
    for _ in 0..10 {
        assert_eq!(source.next_unit().to_bits(), reference.next_unit().to_bits());
    }
}

#[test]
fn test_select_source_unseeded_draws_unit_interval() {
    let mut source = select_source(None);
    assert_eq!(source.source_name(), "system");
    for _ in 0..1000 {
        let v = source.next_unit();
        assert!((0.0..1.0).contains(&v));
    }
}
