use super::*;

const SUS: [f64; 10] = [85.0, 67.5, 75.0, 90.0, 70.0, 55.0, 77.5, 85.0, 62.5, 80.0];

#[test]
fn test_quantile_linear() {
    let v = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(quantile_linear(&v, 0.5), 3.0);
    assert_eq!(quantile_linear(&v, 0.25), 2.0);
    assert_eq!(quantile_linear(&[1.0, 2.0], 0.5), 1.5);
    assert_eq!(quantile_linear(&[], 0.5), 0.0);
}

#[test]
fn test_box_stats_sus_scores() {
    let stats = box_stats(&SUS);
    assert_eq!(stats.q1, 68.125);
    assert_eq!(stats.median, 76.25);
    assert_eq!(stats.q3, 83.75);
    assert_eq!(stats.whisker_lo, 55.0);
    assert_eq!(stats.whisker_hi, 90.0);
    assert!(stats.fliers.is_empty());
}

#[test]
fn test_box_stats_marks_fliers() {
    let stats = box_stats(&[10.0, 11.0, 12.0, 13.0, 50.0]);
    assert_eq!(stats.fliers, vec![50.0]);
    assert_eq!(stats.whisker_hi, 13.0);
}

#[test]
fn test_format_f64_1() {
    assert_eq!(format_f64_1(74.8), "74.8");
    assert_eq!(format_f64_1(3.0), "3.0");
}
