// tests/timeline.rs
use buff_rotation::{BuffInterval, BuffTimeline, Effect};

fn wog(s: i64, e: i64) -> BuffInterval {
    BuffInterval::new(Effect::WrathOfGod, s, e)
}

fn hb(s: i64, e: i64) -> BuffInterval {
    BuffInterval::new(Effect::HeavenlyBlessings, s, e)
}

/* ──────────────────────────────────────────────────────────────────────────
1) Empty timeline
────────────────────────────────────────────────────────────────────────── */

#[test]
fn empty_timeline_has_no_uptime() {
    let t = BuffTimeline::new();
    assert!(t.is_empty());
    assert_eq!(t.len(), 0);
    assert_eq!(t.uptime(), 0);
    assert_eq!(t.ends_at(), 0);
    assert!(t.last().is_none());
    assert_eq!(t.to_string(), "[]");
}

/* ──────────────────────────────────────────────────────────────────────────
2) Append is non-destructive and branches stay isolated
────────────────────────────────────────────────────────────────────────── */

#[test]
fn append_leaves_the_original_untouched() {
    let base = BuffTimeline::new().append(wog(0, 7));
    let left = base.append(hb(7, 14));
    let right = base.append(wog(20, 27));

    assert_eq!(base.intervals(), vec![wog(0, 7)]);
    assert_eq!(left.intervals(), vec![wog(0, 7), hb(7, 14)]);
    assert_eq!(right.intervals(), vec![wog(0, 7), wog(20, 27)]);

    // Dropping one branch does not disturb the shared prefix.
    drop(left);
    assert_eq!(right.len(), 2);
    assert_eq!(base.uptime(), 7);
}

#[test]
fn uptime_sums_interval_durations() {
    let t = BuffTimeline::new()
        .append(wog(0, 7))
        .append(hb(7, 14))
        .append(wog(17, 24))
        .append(hb(29, 30));
    assert_eq!(t.uptime(), 7 + 7 + 7 + 1);
    let summed: i64 = t.intervals().iter().map(BuffInterval::duration).sum();
    assert_eq!(t.uptime(), summed);
    assert_eq!(t.ends_at(), 30);
}

#[test]
fn zero_length_interval_adds_nothing() {
    let t = BuffTimeline::new().append(wog(0, 7)).append(hb(7, 7));
    assert_eq!(t.len(), 2);
    assert_eq!(t.uptime(), 7);
}

/* ──────────────────────────────────────────────────────────────────────────
3) Ordering, preview, formatting
────────────────────────────────────────────────────────────────────────── */

#[test]
fn intervals_are_chronological_and_iter_rev_is_newest_first() {
    let t = BuffTimeline::new().append(wog(0, 7)).append(hb(7, 14)).append(wog(17, 24));
    let fwd = t.intervals();
    let rev: Vec<BuffInterval> = t.iter_rev().copied().collect();
    assert_eq!(fwd, vec![wog(0, 7), hb(7, 14), wog(17, 24)]);
    assert_eq!(rev, vec![wog(17, 24), hb(7, 14), wog(0, 7)]);
    assert_eq!(t.last(), Some(&wog(17, 24)));
}

#[test]
fn preview_truncates_to_leading_intervals() {
    let mut t = BuffTimeline::new();
    for i in 0..15 {
        t = t.append(wog(i * 7, i * 7 + 7));
    }
    let p = t.preview(10);
    assert_eq!(p.len(), 10);
    assert_eq!(p[0], wog(0, 7));
    assert_eq!(p[9], wog(63, 70));
    assert_eq!(t.preview(100).len(), 15);
    assert_eq!(t.preview(15), t.intervals());
    assert!(t.preview(0).is_empty());
    assert!(BuffTimeline::new().preview(10).is_empty());
}

#[test]
fn display_matches_report_format() {
    let t = BuffTimeline::new().append(wog(0, 7)).append(hb(7, 14));
    assert_eq!(wog(0, 7).to_string(), "WOG:[0,7]");
    assert_eq!(hb(7, 14).to_string(), "HB:[7,14]");
    assert_eq!(t.to_string(), "[WOG:[0,7], HB:[7,14]]");
}

#[test]
fn effect_labels_and_durations() {
    assert_eq!(Effect::WrathOfGod.label(), "WOG");
    assert_eq!(Effect::HeavenlyBlessings.label(), "HB");
    for e in Effect::ALL {
        assert_eq!(e.duration(), buff_rotation::BUFF_DURATION);
    }
}

/* ──────────────────────────────────────────────────────────────────────────
4) Invariants
────────────────────────────────────────────────────────────────────────── */

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "overlaps")]
fn overlapping_append_is_caught_in_debug() {
    let t = BuffTimeline::new().append(wog(0, 7));
    let _ = t.append(hb(5, 12));
}

#[test]
fn very_long_timeline_drops_without_recursion() {
    let mut t = BuffTimeline::new();
    for i in 0..200_000 {
        t = t.append(hb(i, i + 1));
    }
    assert_eq!(t.len(), 200_000);
    assert_eq!(t.uptime(), 200_000);
    drop(t);
}
