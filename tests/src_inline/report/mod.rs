use super::*;

#[test]
fn test_format_2dp() {
    assert_eq!(format_2dp(0.0), "0.00");
    assert_eq!(format_2dp(123.456), "123.46");
    assert_eq!(format_2dp(61.233_968_455_919_05), "61.23");
    assert_eq!(format_2dp(50.0), "50.00");
}

#[test]
fn test_percentile_interpolates() {
    let v = vec![1.0, 2.0, 3.0, 4.0];
    assert_eq!(percentile(&v, 0.0), 1.0);
    assert_eq!(percentile(&v, 50.0), 2.5);
    assert_eq!(percentile(&v, 100.0), 4.0);
    assert_eq!(percentile(&[10.0], 99.0), 10.0);
    assert_eq!(percentile(&[], 50.0), 0.0);
}

#[test]
fn test_mean_and_sorting() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    assert_eq!(sorted_ascending(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
}
