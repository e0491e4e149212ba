use tagcloud_renderer::layout::{
    LayoutError, Orientation, Packer, PackerConfig, Point, Rect, Size, pack_words,
};
use tagcloud_renderer::{CloudConfig, Config, Word, render_text};

fn size(width: f32, height: f32) -> Size {
    Size::new(width, height).unwrap()
}

fn scenario_measure(text: &str, _: &str, _: f32) -> Result<Size, LayoutError> {
    Ok(match text {
        "a" => size(30.0, 10.0),
        "bb" => size(10.0, 20.0),
        _ => size(10.0, 10.0),
    })
}

/// Deterministic pseudo-measurement: width grows with text length and font
/// size, with a little per-word jitter so boxes differ.
fn varied_measure(text: &str, _: &str, font_size: f32) -> Result<Size, LayoutError> {
    let jitter = text.bytes().fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32)) % 7;
    Size::new(
        (text.len() as f32 * font_size * 0.6).ceil() + jitter as f32,
        (font_size * 1.2).ceil(),
    )
}

fn scenario_config() -> PackerConfig {
    PackerConfig::new(Point::new(50.0, 50.0), size(10.0, 10.0), "sans-serif")
}

fn sample_words(count: usize) -> Vec<Word> {
    (0..count)
        .map(|i| Word::new(format!("w{i}{}", "x".repeat(i % 9)), (count - i) as u32 / 4 + 1))
        .collect()
}

fn assert_no_overlaps(rects: &[Rect]) {
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn concrete_two_word_scenario() {
    let words = vec![Word::new("a", 3), Word::new("bb", 1)];
    let layout = pack_words(&words, scenario_config(), scenario_measure).unwrap();
    let a = &layout.labels[0];
    let bb = &layout.labels[1];

    assert_eq!(a.position, Point::new(50.0, 50.0));
    assert_eq!(a.orientation, Orientation::Horizontal);
    assert_eq!(a.font_size, 30.0);

    assert_eq!(bb.orientation, Orientation::Vertical);
    assert!(!a.rect().intersects(&bb.rect()));
    // "bb" hangs off a corner of "a".
    let a_corners = a.rect().corners();
    assert!(bb.rect().corners().iter().any(|c| a_corners.contains(c)));
    assert_eq!(bb.position, Point::new(40.0, 50.0));
}

#[test]
fn nearest_collision_falls_through_to_next_offset() {
    let mut packer = Packer::new(scenario_config(), scenario_measure).unwrap();
    packer.place("a", 3).unwrap();
    packer.place("bb", 1).unwrap();
    // The center is blocked with no offset and with the left offset, so the
    // upward offset at the same point wins over any farther candidate.
    let c = packer.place("c", 1).unwrap();
    assert_eq!(c.position, Point::new(50.0, 40.0));
}

#[test]
fn every_placement_is_first_free_candidate() {
    let mut packer = Packer::new(scenario_config(), varied_measure).unwrap();
    for word in sample_words(40) {
        let font_size = packer.font_size_for(word.weight);
        let measured = varied_measure(&word.text, "sans-serif", font_size).unwrap();
        let expected = packer
            .frontier()
            .iter()
            .flat_map(|p| {
                [
                    p,
                    p.offset(-measured.width(), 0.0),
                    p.offset(0.0, -measured.height()),
                ]
            })
            .find(|anchor| !packer.occupancy().intersects(&Rect::new(*anchor, measured)))
            .unwrap();
        let label = packer.place(&word.text, word.weight).unwrap();
        assert_eq!(label.position, expected, "{}", word.text);
    }
}

#[test]
fn large_run_never_overlaps() {
    let layout = pack_words(&sample_words(150), scenario_config(), varied_measure).unwrap();
    assert_eq!(layout.labels.len(), 150);
    let rects: Vec<Rect> = layout.labels.iter().map(|l| l.rect()).collect();
    assert_no_overlaps(&rects);
}

#[test]
fn runs_are_deterministic() {
    let words = sample_words(60);
    let first = pack_words(&words, scenario_config(), varied_measure).unwrap();
    let second = pack_words(&words, scenario_config(), varied_measure).unwrap();
    assert_eq!(first.labels, second.labels);
}

#[test]
fn orientation_matches_measured_aspect() {
    let measure = |text: &str, _: &str, _: f32| match text {
        "tall" => Size::new(5.0, 9.0),
        "square" => Size::new(8.0, 8.0),
        _ => Size::new(9.0, 5.0),
    };
    let words = vec![Word::new("tall", 1), Word::new("square", 1), Word::new("wide", 1)];
    let layout = pack_words(&words, scenario_config(), measure).unwrap();
    let orientations: Vec<Orientation> = layout.labels.iter().map(|l| l.orientation).collect();
    assert_eq!(
        orientations,
        vec![Orientation::Vertical, Orientation::Horizontal, Orientation::Horizontal]
    );
}

#[test]
fn exhausted_frontier_is_reported() {
    let config = scenario_config().with_bounds(size(100.0, 60.0));
    let measure = |text: &str, _: &str, _: f32| match text {
        "first" => Size::new(50.0, 40.0),
        _ => Size::new(60.0, 40.0),
    };
    let words = vec![Word::new("first", 1), Word::new("second", 1)];
    // "first" only fits above the center; "second" is too wide for what is left.
    let err = pack_words(&words, config, measure).unwrap_err();
    assert!(
        matches!(err, LayoutError::PlacementExhausted { ref text, .. } if text == "second"),
        "{err:?}"
    );
}

#[test]
fn zero_area_measurement_is_rejected() {
    let measure = |_: &str, _: &str, _: f32| Size::new(0.0, 0.0);
    let err = pack_words(&[Word::new("ghost", 1)], scenario_config(), measure).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidMeasurement { .. }));
}

#[test]
fn negative_measurement_is_rejected() {
    let measure = |_: &str, _: &str, _: f32| Size::new(-3.0, 2.0);
    let err = pack_words(&[Word::new("ghost", 1)], scenario_config(), measure).unwrap_err();
    assert!(
        matches!(err, LayoutError::InvalidMeasurement { ref text, .. } if text == "ghost"),
        "{err:?}"
    );
}

#[test]
fn invalid_center_is_rejected_before_packing() {
    let config = PackerConfig::new(Point::new(-5.0, 10.0), size(10.0, 10.0), "serif");
    let err = pack_words(&[Word::new("a", 1)], config, scenario_measure).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidConfiguration { .. }));
}

#[test]
fn renders_text_end_to_end() {
    let config = Config {
        cloud: CloudConfig {
            fast_text_metrics: true,
            ..CloudConfig::default()
        },
        ..Config::default()
    };
    let svg = render_text("rust\ncloud\nrust\ntag\nrust\ncloud\n", &config).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    for word in ["rust", "cloud", "tag"] {
        assert!(svg.contains(&format!(">{word}</text>")), "missing {word}");
    }
    assert!(svg.contains("data-weight=\"3\""));
}
