use super::{kinds::VerseTag, types::Segment};

/// Splits assistant answer text into an ordered sequence of [`Segment`]s.
///
/// Scans left to right for `[VERSE title="<title>"]<body>[/VERSE]` blocks.
/// Text between blocks (and before the first / after the last) is emitted as
/// `Segment::Text`; empty runs are dropped. Blocks do not nest and never
/// overlap; scanning resumes immediately after each closing tag.
///
/// An opener that is never completed (no `"]` or no `[/VERSE]` before end of
/// input) does not match at all and its text flows into the surrounding
/// `Text` segment. This is what makes a half-revealed block render as plain
/// text while the reveal is still in progress.
///
/// Total over all inputs: never errors, never panics.
pub fn extract_segments(input: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut search = 0;

    // Helper to flush accumulated plain text as a Text segment
    fn flush_text(out: &mut Vec<Segment>, input: &str, start: usize, end: usize) {
        if end > start {
            out.push(Segment::text(&input[start..end]));
        }
    }

    while let Some(found) = input[search..].find(VerseTag::OPEN) {
        let open_at = search + found;
        match try_parse_verse(input, open_at) {
            Some(verse) => {
                flush_text(&mut out, input, text_start, open_at);
                out.push(Segment::verse(verse.title, verse.body.trim()));
                text_start = verse.end;
                search = verse.end;
            }
            None => {
                // Opener never closes; leave it to the text flush and keep
                // scanning one byte further along, like a failed regex
                // candidate position.
                search = open_at + 1;
            }
        }
    }

    flush_text(&mut out, input, text_start, input.len());
    out
}

struct ParsedVerse<'a> {
    title: &'a str,
    body: &'a str,
    /// Byte offset just past the closing tag.
    end: usize,
}

/// Attempts to parse a complete verse block whose opener starts at `open_at`.
///
/// Returns `None` if the title is never closed with `"]` or the body is
/// never closed with `[/VERSE]`. Both title and body are non-greedy: each
/// ends at the first occurrence of its closing delimiter.
fn try_parse_verse(input: &str, open_at: usize) -> Option<ParsedVerse<'_>> {
    let title_start = open_at + VerseTag::OPEN.len();
    let title_len = input[title_start..].find(VerseTag::TITLE_CLOSE)?;
    let body_start = title_start + title_len + VerseTag::TITLE_CLOSE.len();
    let body_len = input[body_start..].find(VerseTag::CLOSE)?;

    Some(ParsedVerse {
        title: &input[title_start..title_start + title_len],
        body: &input[body_start..body_start + body_len],
        end: body_start + body_len + VerseTag::CLOSE.len(),
    })
}
