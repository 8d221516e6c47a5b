use super::*;
use crate::model::datasets::SUS_DISTRIBUTION;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("sus_distribution_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_points_keep_scores_and_labels() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let chart = SusDistributionChart::new(SUS_DISTRIBUTION, &mut rng).unwrap();
    let points = chart.points();
    assert_eq!(points.len(), 10);
    for (i, p) in points.iter().enumerate() {
        assert_eq!(p.participant, SUS_DISTRIBUTION.participants[i]);
        assert_eq!(p.score, SUS_DISTRIBUTION.scores[i]);
        assert!(p.y > Y_RANGE.0 && p.y < Y_RANGE.1);
    }
}

#[test]
fn test_jitter_changes_only_vertical_position() {
    let a =
        SusDistributionChart::new(SUS_DISTRIBUTION, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
    let b =
        SusDistributionChart::new(SUS_DISTRIBUTION, &mut ChaCha8Rng::seed_from_u64(2)).unwrap();
    let xs_a = a.points().iter().map(|p| p.score).collect::<Vec<_>>();
    let xs_b = b.points().iter().map(|p| p.score).collect::<Vec<_>>();
    assert_eq!(xs_a, xs_b);
    assert!(a.points().iter().zip(b.points()).any(|(p, q)| p.y != q.y));
}

#[test]
fn test_seeded_jitter_is_reproducible() {
    let a = jitter(&mut ChaCha8Rng::seed_from_u64(42), 10).unwrap();
    let b = jitter(&mut ChaCha8Rng::seed_from_u64(42), 10).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_jitter_centred_on_box() {
    let ys = jitter(&mut ChaCha8Rng::seed_from_u64(3), 2000).unwrap();
    let mean = ys.iter().sum::<f64>() / ys.len() as f64;
    assert!((mean - JITTER_CENTRE).abs() < 0.01);
    let var = ys.iter().map(|y| (y - mean).powi(2)).sum::<f64>() / ys.len() as f64;
    assert!((var.sqrt() - JITTER_SD).abs() < 0.005);
}

#[test]
fn test_title_and_mean_label() {
    let chart =
        SusDistributionChart::new(SUS_DISTRIBUTION, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
    assert_eq!(
        chart.title(),
        "System Usability Scale (SUS) Distribution (N=10, Mean=74.8, SD=9.8)"
    );
    assert_eq!(chart.mean_label(), "Mocksy Mean (74.8)");
    let labels = chart.zones().iter().map(|z| z.label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Poor", "OK", "Good", "Excellent"]);
}

#[test]
fn test_renders_png() {
    let dir = make_temp_dir();
    let style = StyleProfile::paper_v1();
    let chart =
        SusDistributionChart::new(SUS_DISTRIBUTION, &mut ChaCha8Rng::seed_from_u64(11)).unwrap();
    let path = chart.draw(&dir, &style).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_jitter_length_follows_request() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    assert!(jitter(&mut rng, 0).unwrap().is_empty());
    assert_eq!(jitter(&mut rng, 10).unwrap().len(), 10);
}
