use super::*;
use crate::model::datasets::FEATURE_USEFULNESS;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("feature_usefulness_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_rows_keep_input_order_top_down() {
    let bars = FeatureUsefulnessChart::new(FEATURE_USEFULNESS).bars();
    assert_eq!(bars.len(), 4);
    assert!(bars.windows(2).all(|w| w[0].y > w[1].y));
    assert_eq!(bars[0].width, 5.0);
    assert_eq!(bars[0].label.as_deref(), Some("n=5 (50%)"));
    assert_eq!(bars[3].label.as_deref(), Some("n=1 (10%)"));
}

#[test]
fn test_zero_count_has_no_label() {
    let data = FeatureUsefulness {
        counts: &[5, 3, 2, 0],
        percentages: &[50, 30, 20, 0],
        ..FEATURE_USEFULNESS
    };
    let bars = FeatureUsefulnessChart::new(data).bars();
    assert!(bars[3].label.is_none());
}

#[test]
fn test_highlights_exactly_first_bar() {
    let chart = FeatureUsefulnessChart::new(FEATURE_USEFULNESS);
    assert_eq!(chart.highlighted(), Some(0));
    let [(x0, y0), (x1, y1)] = chart.highlight_rect().unwrap();
    let top = &chart.bars()[0];
    assert!(y0 < top.y && top.y < y1);
    assert!((x0 + 0.1).abs() < 1e-12);
    assert!((x1 - 5.2).abs() < 1e-12);
}

#[test]
fn test_highlight_follows_input_order_not_count() {
    let data = FeatureUsefulness {
        counts: &[1, 5, 3, 2],
        ..FEATURE_USEFULNESS
    };
    let chart = FeatureUsefulnessChart::new(data);
    assert_eq!(chart.highlighted(), Some(0));
    let [(_, y0), (_, y1)] = chart.highlight_rect().unwrap();
    assert!((y1 - y0 - BAR_HEIGHT).abs() < 1e-12);
    assert!(y0 > 2.0);
}

#[test]
fn test_renders_png() {
    let dir = make_temp_dir();
    let style = StyleProfile::paper_v1();
    let path = FeatureUsefulnessChart::new(FEATURE_USEFULNESS)
        .draw(&dir, &style)
        .unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
