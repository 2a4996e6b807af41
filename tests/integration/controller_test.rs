//! End-to-end scenarios for the playback controller
//!
//! Time is injected, so every scenario is deterministic.

use std::time::Instant;

use qrcast::player::{PlaybackEvent, PlaybackPhase, Release};
use qrcast::transfer::{checksum, ParsedFrame};

use super::helpers::{controller, ms};

#[test]
fn twelve_hundred_chars_at_five_hundred_make_three_even_frames() {
    let payload = "q".repeat(1200);
    let c = controller(&payload, 500, &[0, 500, 350, 200], 1, Instant::now());

    assert_eq!(c.total(), 3);
    let chunks = c.chunks().chunks();
    assert!(chunks.iter().all(|chunk| chunk.chars().count() == 400));
    assert_eq!(chunks.concat(), payload);

    let sum = c.chunks().checksum();
    assert_eq!(sum, checksum(&payload));
    assert_eq!(sum.len(), 32);
    assert!(sum
        .chars()
        .all(|ch| ch.is_ascii_digit() || ('A'..='F').contains(&ch)));
    assert_eq!(
        c.current_frame(),
        format!("0:3:{}/{}", sum, &payload[..400])
    );

    for i in 0..3 {
        let frame = c.chunks().frame(i).to_string();
        let parsed = ParsedFrame::parse(&frame).unwrap();
        assert_eq!(parsed.index, i);
        assert_eq!(parsed.total, 3);
        assert_eq!(parsed.checksum, c.chunks().checksum());
    }
}

#[test]
fn auto_advance_wraps_after_every_chunk() {
    let t0 = Instant::now();
    let mut c = controller("abcdefghij", 4, &[0, 500], 1, t0);
    assert_eq!(c.total(), 3);

    let mut seen = Vec::new();
    for n in 1..=7u32 {
        let event = c.poll(t0 + ms(500) * n);
        assert!(matches!(event, Some(PlaybackEvent::Advanced { .. })));
        seen.push(c.current_index());
    }
    assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
}

#[test]
fn momentum_release_resumes_after_its_grace() {
    let t0 = Instant::now();
    let mut c = controller("abcdefghij", 4, &[0, 500], 1, t0);

    c.begin_interaction();
    assert_eq!(c.phase(), PlaybackPhase::Paused);
    assert!(c.scroll_to(250.0));
    assert_eq!(c.current_index(), 2);

    // Nothing may fire while the user holds the surface
    assert_eq!(c.poll(t0 + ms(10_000)), None);
    assert_eq!(c.current_index(), 2);

    let released = t0 + ms(10_000);
    c.end_interaction(Release::Momentum, released);
    assert_eq!(c.poll(released + ms(499)), None);
    assert_eq!(c.poll(released + ms(500)), Some(PlaybackEvent::Resumed));
    assert!(matches!(c.phase(), PlaybackPhase::Playing { .. }));

    // First tick continues from the scrubbed position
    assert_eq!(
        c.poll(released + ms(1000)),
        Some(PlaybackEvent::Advanced { from: 2, to: 0 })
    );
}

#[test]
fn drag_release_waits_longer_than_momentum() {
    let t0 = Instant::now();
    let mut c = controller("abcdefghij", 4, &[0, 500], 1, t0);

    c.begin_interaction();
    c.end_interaction(Release::Drag, t0);
    assert_eq!(c.poll(t0 + ms(1499)), None);
    assert_eq!(c.poll(t0 + ms(1500)), Some(PlaybackEvent::Resumed));
}

#[test]
fn new_interaction_cancels_pending_resume() {
    let t0 = Instant::now();
    let mut c = controller("abcdefghij", 4, &[0, 500], 1, t0);

    c.begin_interaction();
    c.end_interaction(Release::Momentum, t0);
    c.begin_interaction();

    assert_eq!(c.next_deadline(), None);
    assert_eq!(c.poll(t0 + ms(5000)), None);
}

#[test]
fn cycling_every_speed_returns_to_the_start() {
    let t0 = Instant::now();
    let mut c = controller("abcdefghij", 4, &[0, 500, 350, 200], 1, t0);
    let initial = c.current_delay();

    let delays: Vec<u128> = (0..4).map(|_| c.cycle_speed(t0).as_millis()).collect();
    assert_eq!(delays, vec![350, 200, 0, 500]);
    assert_eq!(c.current_delay(), initial);
}

#[test]
fn zero_speed_stops_auto_advance() {
    let t0 = Instant::now();
    let mut c = controller("abcdefghij", 4, &[0, 500], 1, t0);

    c.cycle_speed(t0);
    assert_eq!(c.phase(), PlaybackPhase::Idle);
    assert_eq!(c.poll(t0 + ms(60_000)), None);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn reconfigure_restarts_at_the_first_chunk() {
    let t0 = Instant::now();
    let mut c = controller("abcdefghij", 4, &[0, 500], 1, t0);
    c.poll(t0 + ms(500));
    assert_eq!(c.current_index(), 1);

    c.reconfigure("0123456789abcdef", 4, t0 + ms(600)).unwrap();
    assert_eq!(c.total(), 4);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.scroll_position(), 0.0);
    assert_eq!(c.next_deadline(), Some(t0 + ms(1100)));
}

#[test]
fn failed_reconfigure_keeps_the_old_payload() {
    let t0 = Instant::now();
    let mut c = controller("abcdefghij", 4, &[0, 500], 1, t0);
    let before = c.current_frame();

    assert!(c.reconfigure("", 4, t0).is_err());
    assert!(c.reconfigure("abc", 0, t0).is_err());
    assert_eq!(c.current_frame(), before);
    assert_eq!(c.total(), 3);
}

#[test]
fn teardown_silences_everything() {
    let t0 = Instant::now();
    let mut c = controller("abcdefghij", 4, &[0, 500], 1, t0);

    c.teardown();
    c.teardown();
    assert_eq!(c.phase(), PlaybackPhase::Stopped);
    assert_eq!(c.poll(t0 + ms(10_000)), None);
    assert!(!c.scroll_to(250.0));
    c.begin_interaction();
    c.end_interaction(Release::Drag, t0);
    assert_eq!(c.phase(), PlaybackPhase::Stopped);
    assert_eq!(c.current_index(), 0);
}
