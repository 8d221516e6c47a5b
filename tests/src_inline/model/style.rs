use super::*;

#[test]
fn test_paper_profile_pixel_size() {
    let style = StyleProfile::paper_v1();
    assert_eq!(style.dpi, 300);
    assert_eq!(style.pixel_size(), (2400, 1500));
}

#[test]
fn test_points_scale_with_dpi() {
    let style = StyleProfile::paper_v1();
    assert!((style.px(72.0) - 300.0).abs() < 1e-9);
    assert_eq!(style.px_u32(0.0), 1);
    assert_eq!(style.px_u32(2.0), 8);
}
