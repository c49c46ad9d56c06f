// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the bundled scenario scripts
//!
//! Each file under `scenarios/` is replayed with default settings and its
//! recorded views are checked step by step.

use approx::assert_abs_diff_eq;
use playback_overlay::config::ControllerSettings;
use playback_overlay::scenario::{Scenario, ScenarioReport};
use playback_overlay::ui::controls::{PlayGlyph, VolumeGlyph};
use std::path::PathBuf;

fn run(name: &str) -> ScenarioReport {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name);
    let scenario = Scenario::load(&path).expect("scenario should parse");
    scenario
        .run(ControllerSettings::default())
        .expect("scenario should run")
}

#[test]
fn test_touch_walkthrough() {
    let report = run("touch_walkthrough.toml");
    let views: Vec<_> = report.steps.iter().map(|step| &step.view).collect();
    assert_eq!(views.len(), 9);

    // tap: playing, center glyph flashed
    assert!(views[0].center_visible);
    assert_eq!(views[0].play_glyph, PlayGlyph::Pause);

    // second touch within 300 ms skips from 2.0 to 12.0
    assert!(views[3].forward_visible);
    assert_abs_diff_eq!(views[3].scrubber_position_secs, 12.0);

    // third touch is 400 ms later: no further skip
    assert_abs_diff_eq!(views[4].scrubber_position_secs, 12.0);

    // indicator gone by 3000 ms
    assert!(!views[5].forward_visible);
    assert_eq!(views[5].volume_glyph, VolumeGlyph::High);
    assert_eq!(views[5].volume_slider, 80);

    assert_eq!(views[6].volume_glyph, VolumeGlyph::Muted);
    assert_eq!(views[6].volume_slider, 0);

    // landscape entered fullscreen, platform exit left it
    assert!(views[7].is_full_screen);
    assert!(!views[8].is_full_screen);
    assert_eq!(views[8].play_glyph, PlayGlyph::Pause);

    assert!(!report.final_state.is_paused);
    assert!(report.final_state.is_muted);
    assert_eq!(report.final_state.volume.value(), 80);
}

#[test]
fn test_ios_native_player() {
    let report = run("ios_native_player.toml");

    assert!(report.steps[1].view.is_full_screen);
    assert_eq!(report.steps[1].view.play_glyph, PlayGlyph::Pause);

    assert!(!report.final_state.is_full_screen);
    assert!(report.final_state.is_paused);
    assert_eq!(report.final_view.play_glyph, PlayGlyph::Play);
}

#[test]
fn test_polling_fallback() {
    let report = run("polling_fallback.toml");

    // no timeupdate: the mirror lags until the next poll
    assert_abs_diff_eq!(report.steps[1].view.scrubber_position_secs, 0.0);
    assert_abs_diff_eq!(report.steps[2].view.scrubber_position_secs, 0.5);

    assert_eq!(report.steps[3].view.play_glyph, PlayGlyph::Replay);
    assert!(report.final_state.is_paused);
    assert_abs_diff_eq!(report.final_state.position_secs, 1.0);
}
