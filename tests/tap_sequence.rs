use std::time::Duration;

use squarerotpath::config::{Config, Settings, PALETTE_SIZE};
use squarerotpath::views::SquareRotPathView;

const FRAME: Duration = Duration::from_millis(16);

// Taps once and feeds frames until the view goes idle, returning the frame count.
fn tap_and_settle(view: &mut SquareRotPathView) -> usize {
    assert!(view.handle_tap(), "tap was ignored");
    let mut frames = 0;
    let mut completions = 0;
    while view.is_animating() {
        if view.advance(FRAME) {
            completions += 1;
        }
        frames += 1;
        assert!(frames < 1_000, "view never settled");
    }
    assert_eq!(completions, 1);
    frames
}

#[test]
fn test_single_tap_moves_to_next_node() {
    let mut view = SquareRotPathView::new(&Settings::default());
    let frames = tap_and_settle(&mut view);

    // ~200 ticks of 20ms at 16ms frames
    assert!(frames > 200, "finished after only {} frames", frames);
    assert!(!view.is_animating());
    assert_eq!(view.path().current_index(), 1);

    let first = view.path().node(0).unwrap();
    assert_eq!(first.state.scale, 1.0);
    assert_eq!(first.state.checkpoint, 1.0);
    assert_eq!(first.state.direction, 0.0);
}

#[test]
fn test_taps_sweep_the_chain_back_and_forth() {
    let mut view = SquareRotPathView::new(&Settings::default());

    let mut visited = vec![view.path().current_index()];
    for _ in 0..(2 * PALETTE_SIZE) {
        tap_and_settle(&mut view);
        visited.push(view.path().current_index());
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 4, 4, 3, 2, 1, 0, 0]);
    assert_eq!(view.path().direction(), 1);
}

#[test]
fn test_faster_config_settles_sooner() {
    let config = Config::from_toml_str(
        r#"
        [animation]
        base_gap = 0.2
        delay_ms = 16
        "#,
    )
    .unwrap();
    let mut view = SquareRotPathView::new(&config.resolve().unwrap());

    let frames = tap_and_settle(&mut view);
    assert!(frames <= 21, "took {} frames", frames);
    assert_eq!(view.path().current_index(), 1);
}
