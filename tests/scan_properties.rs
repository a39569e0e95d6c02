//! Property tests for the span scanner.

use linkspan::{scan, RULES};
use proptest::prelude::*;

/// Text biased towards link-like fragments.
fn link_soup() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("http://".to_string()),
        Just("https://".to_string()),
        Just("ftp://".to_string()),
        Just("www.".to_string()),
        Just("mailto:".to_string()),
        Just("@".to_string()),
        Just(".".to_string()),
        Just(",".to_string()),
        Just("/".to_string()),
        Just(" ".to_string()),
        Just("<".to_string()),
        Just(">".to_string()),
        Just("\u{e9}".to_string()),
        "[a-zA-Z0-9]{1,6}",
    ];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn spans_are_ordered_disjoint_and_in_bounds(line in link_soup()) {
        let spans = scan(&line);
        for span in &spans {
            prop_assert!(span.begin < span.end);
            prop_assert!(span.end as usize <= line.len());
            prop_assert!(line.is_char_boundary(span.begin as usize));
            prop_assert!(line.is_char_boundary(span.end as usize));
            prop_assert!(span.len() > span.rule(&RULES).needle.len() + 1);
        }
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].begin);
        }
    }

    #[test]
    fn scanning_is_idempotent(line in link_soup()) {
        prop_assert_eq!(scan(&line), scan(&line));
    }

    #[test]
    fn spans_are_ascii(line in link_soup()) {
        for span in scan(&line) {
            prop_assert!(span.as_str(&line).is_ascii());
        }
    }

    #[test]
    fn email_targets_have_mailto_prefix(line in link_soup()) {
        for span in scan(&line) {
            let target = span.target(line.as_bytes(), &RULES);
            prop_assert!(target.ends_with(span.as_str(&line)));
            if span.rule(&RULES).needle == b"@" {
                prop_assert_eq!(target, format!("mailto:{}", span.as_str(&line)));
            }
        }
    }

    #[test]
    fn no_needle_no_spans(line in "[a-zA-Z0-9 .,;:!?()\u{e0}-\u{ff}]{0,64}") {
        let lower = line.to_ascii_lowercase();
        prop_assume!(!["http://", "https://", "ftp://", "www.", "mailto:", "@"]
            .iter()
            .any(|n| lower.contains(n)));
        prop_assert!(scan(&line).is_empty());
    }

    #[test]
    fn arbitrary_text_never_panics(line in any::<String>()) {
        let _ = scan(&line);
    }
}
