//! Property tests for framing and scroll mapping

use std::time::Instant;

use proptest::prelude::*;

use qrcast::player::playback::{index_from_scroll, scroll_from_index};
use qrcast::transfer::{checksum, encode, split, ParsedFrame};

use super::helpers::{controller, ms};

proptest! {
    #[test]
    fn chunks_concatenate_to_payload(payload in "\\PC{1,400}", max in 1usize..64) {
        let set = split(&payload, max).unwrap();
        prop_assert_eq!(set.chunks().concat(), payload.clone());
        prop_assert_eq!(set.checksum(), checksum(&payload));
    }

    #[test]
    fn chunks_are_balanced_and_bounded(payload in "[a-z:/ ]{1,400}", max in 1usize..64) {
        let set = split(&payload, max).unwrap();
        let len = payload.chars().count();

        prop_assert_eq!(set.len(), len.div_ceil(max));
        let sizes: Vec<usize> = set.chunks().iter().map(|c| c.chars().count()).collect();
        prop_assert!(sizes.iter().all(|&s| s >= 1 && s <= max));
        prop_assert!(sizes[..sizes.len() - 1].iter().all(|&s| s == set.chunk_size()));
    }

    #[test]
    fn frames_parse_back_with_delimiters_in_content(
        content in "[a-z0-9:/]{0,80}",
        index in 0usize..50,
        extra in 1usize..50,
    ) {
        let total = index + extra;
        let sum = checksum(&content);
        let frame = encode(index, total, &sum, &content);
        let parsed = ParsedFrame::parse(&frame).unwrap();

        prop_assert_eq!(parsed.index, index);
        prop_assert_eq!(parsed.total, total);
        prop_assert_eq!(parsed.checksum, sum);
        prop_assert_eq!(parsed.content, content);
    }

    #[test]
    fn scroll_from_index_round_trips(index in 0usize..500, width in 1.0f64..1000.0) {
        let total = index + 1;
        prop_assert_eq!(index_from_scroll(scroll_from_index(index, width), width, total), index);
    }

    #[test]
    fn index_from_scroll_stays_in_range(
        position in proptest::num::f64::ANY,
        width in 0.5f64..500.0,
        total in 1usize..200,
    ) {
        prop_assert!(index_from_scroll(position, width, total) < total);
    }

    #[test]
    fn ticks_advance_modulo_total(payload in "[a-z]{1,60}", max in 1usize..10, ticks in 0u32..40) {
        let t0 = Instant::now();
        let mut c = controller(&payload, max, &[0, 100], 1, t0);
        for n in 1..=ticks {
            c.poll(t0 + ms(100) * n);
        }
        prop_assert_eq!(c.current_index(), ticks as usize % c.total());
    }
}
