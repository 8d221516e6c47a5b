use super::*;
use crate::model::datasets::LEARNING_GAINS;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("learning_gains_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_gain_label_only_for_positive_gain() {
    let chart = LearningGainsChart::new(LEARNING_GAINS);
    let labels = chart.gain_labels();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].category, 0);
    assert_eq!(labels[0].text, "+3.0");
    assert!((labels[0].y - 4.7).abs() < 1e-9);
    assert_eq!(labels[1].category, 1);
    assert_eq!(labels[1].text, "+1.0");
    assert!(labels.iter().all(|l| l.category != 2));
}

#[test]
fn test_negative_gain_gets_no_label() {
    let data = LearningGains {
        gains: &[-0.5, 0.0, 0.1],
        ..LEARNING_GAINS
    };
    let labels = LearningGainsChart::new(data).gain_labels();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].category, 2);
    assert_eq!(labels[0].text, "+0.1");
}

#[test]
fn test_bars_grouped_around_category() {
    let chart = LearningGainsChart::new(LEARNING_GAINS);
    let (before, after) = chart.bars();
    assert_eq!(before.len(), 3);
    assert_eq!(after.len(), 3);
    for (i, (b, a)) in before.iter().zip(&after).enumerate() {
        assert!((b.x1 - a.x0).abs() < 1e-12);
        assert!((b.x1 - i as f64).abs() < 1e-12);
        assert!(b.height <= Y_MAX && a.height <= Y_MAX);
    }
    assert_eq!(before[0].height, 1.5);
    assert_eq!(after[0].height, 4.5);
}

#[test]
fn test_renders_png() {
    let dir = make_temp_dir();
    let style = StyleProfile::paper_v1();
    let chart = LearningGainsChart::new(LEARNING_GAINS);
    let path = chart.draw(&dir, &style).unwrap();
    assert_eq!(path, dir.join("chart1_learning_gains.png"));
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_malformed_data_fails_before_drawing() {
    let dir = make_temp_dir();
    let style = StyleProfile::paper_v1();
    let data = LearningGains {
        post_means: &[4.5],
        ..LEARNING_GAINS
    };
    let err = LearningGainsChart::new(data).draw(&dir, &style).unwrap_err();
    assert!(matches!(err, crate::error::RenderError::MalformedData { .. }));
}

#[test]
fn test_y_title_is_two_lines() {
    let lines = Y_TITLE.lines().collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "STAR Framework Understanding",
            "(1=Don't understand, 5=Fully understand)"
        ]
    );
}
