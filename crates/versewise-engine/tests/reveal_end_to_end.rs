//! Drives a full reveal of a tagged answer and checks what the renderer
//! would see at each stage: plain text while the block is open, a verse
//! card once the closing tag has been revealed.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use versewise_engine::{Reveal, Segment, extract_segments};

const STEP: Duration = Duration::from_millis(10);

#[test]
fn fully_revealed_answer_yields_one_verse_segment() {
    let answer = "[VERSE title=\"Gita 2.47\"]You have the right to perform your duty[/VERSE]";
    let t0 = Instant::now();
    let mut reveal = Reveal::new(STEP);
    reveal.start(answer, t0);

    let mut now = t0;
    while !reveal.is_complete() {
        now += STEP;
        assert!(reveal.poll(now));
    }

    assert_eq!(
        extract_segments(reveal.revealed_text()),
        vec![Segment::verse(
            "Gita 2.47",
            "You have the right to perform your duty"
        )]
    );
}

#[test]
fn open_block_renders_as_text_until_its_close_is_revealed() {
    let answer = "Arjuna hesitates. [VERSE title=\"Gita 2.47\"]Act, and let go.[/VERSE] So act.";
    let t0 = Instant::now();
    let mut reveal = Reveal::new(STEP);
    reveal.start(answer, t0);

    let mut now = t0;
    let mut saw_verse_at: Option<usize> = None;
    while !reveal.is_complete() {
        now += STEP;
        reveal.poll(now);
        let segments = extract_segments(reveal.revealed_text());
        if segments.iter().any(Segment::is_verse) {
            saw_verse_at.get_or_insert(reveal.revealed_chars());
        }
    }

    // The verse appears only once the closing tag is fully revealed, and it
    // stays a verse from then on.
    let close_revealed_at = answer
        .find("[/VERSE]")
        .map(|at| answer[..at + "[/VERSE]".len()].chars().count())
        .unwrap();
    assert_eq!(saw_verse_at, Some(close_revealed_at));

    assert_eq!(
        extract_segments(reveal.revealed_text()),
        vec![
            Segment::text("Arjuna hesitates. "),
            Segment::verse("Gita 2.47", "Act, and let go."),
            Segment::text(" So act."),
        ]
    );
}

#[test]
fn replacing_the_answer_mid_reveal_restarts_from_nothing() {
    let t0 = Instant::now();
    let mut reveal = Reveal::new(STEP);
    reveal.start("first answer", t0);
    reveal.poll(t0 + STEP);
    assert_eq!(reveal.revealed_text(), "f");

    reveal.start("second", t0 + STEP);
    assert_eq!(extract_segments(reveal.revealed_text()), vec![]);
    reveal.poll(t0 + STEP * 2);
    assert_eq!(reveal.revealed_text(), "s");
}
