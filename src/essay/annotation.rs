use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` char-offset range into an example text,
/// paired with an explanatory note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub start: usize,
    pub end: usize,
    pub note: String,
}

impl Annotation {
    pub fn new(start: usize, end: usize, note: &str) -> Self {
        Self {
            start,
            end,
            note: note.to_string(),
        }
    }
}

/// A contiguous run of characters that share the same annotation (or none).
/// `annotation` is an index into the annotation list the segment was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub annotation: Option<usize>,
}

/// First annotation in list order covering char index `i`, if any.
/// Overlaps resolve to the earliest list entry; `end` past the text is
/// handled by the caller clamping `text_len`.
pub fn annotation_at(annotations: &[Annotation], i: usize) -> Option<usize> {
    annotations.iter().position(|a| a.start <= i && i < a.end)
}

/// Split `[0, text_len)` into maximal segments of equal annotation coverage.
///
/// Output is equivalent to scanning every char index through `annotation_at`,
/// including the first-match tie-break for overlapping annotations, but runs
/// as a sweep over range boundaries instead of a per-char linear search.
pub fn segments(text_len: usize, annotations: &[Annotation]) -> Vec<Segment> {
    if text_len == 0 {
        return Vec::new();
    }

    let mut bounds: Vec<usize> = vec![0, text_len];
    for a in annotations {
        if a.start < text_len {
            bounds.push(a.start);
        }
        bounds.push(a.end.min(text_len));
    }
    bounds.sort_unstable();
    bounds.dedup();

    let mut out: Vec<Segment> = Vec::new();
    for pair in bounds.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        if start >= end {
            continue;
        }
        let annotation = annotation_at(annotations, start);
        match out.last_mut() {
            // Adjacent runs with the same winner merge back together
            Some(prev) if prev.annotation == annotation && prev.end == start => {
                prev.end = end;
            }
            _ => out.push(Segment {
                start,
                end,
                annotation,
            }),
        }
    }
    out
}

/// Quoted excerpt of the annotated range, capped at 40 chars with an ellipsis.
pub fn excerpt(text: &str, annotation: &Annotation) -> String {
    let chars: Vec<char> = text.chars().collect();
    let start = annotation.start.min(chars.len());
    let end = annotation.end.min(chars.len()).min(start + 40);
    let snippet: String = chars[start..end].iter().collect();
    if annotation.end.min(chars.len()) > start + 40 {
        format!("\"{snippet}...\"")
    } else {
        format!("\"{snippet}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann(start: usize, end: usize) -> Annotation {
        Annotation::new(start, end, "note")
    }

    /// Reference implementation: the per-char scan the sweep must match.
    fn marked_by_scan(text_len: usize, annotations: &[Annotation]) -> Vec<Option<usize>> {
        (0..text_len)
            .map(|i| annotation_at(annotations, i))
            .collect()
    }

    fn marked_by_segments(text_len: usize, annotations: &[Annotation]) -> Vec<Option<usize>> {
        let mut out = vec![None; text_len];
        for seg in segments(text_len, annotations) {
            for slot in &mut out[seg.start..seg.end] {
                *slot = seg.annotation;
            }
        }
        out
    }

    #[test]
    fn test_empty_annotations_all_unmarked() {
        let segs = segments(10, &[]);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0], Segment { start: 0, end: 10, annotation: None });
    }

    #[test]
    fn test_empty_text() {
        assert!(segments(0, &[ann(0, 5)]).is_empty());
    }

    #[test]
    fn test_single_annotation_marks_exactly_its_range() {
        let anns = vec![ann(2, 5)];
        let marks = marked_by_segments(8, &anns);
        for (i, mark) in marks.iter().enumerate() {
            let expected = (2..5).contains(&i).then_some(0);
            assert_eq!(*mark, expected, "char {i}");
        }
    }

    #[test]
    fn test_sweep_matches_per_char_scan() {
        let cases: Vec<Vec<Annotation>> = vec![
            vec![ann(0, 3), ann(3, 7), ann(10, 12)],
            vec![ann(2, 9), ann(5, 7)],  // nested overlap
            vec![ann(5, 7), ann(2, 9)],  // nested overlap, reversed list order
            vec![ann(0, 6), ann(4, 10)], // partial overlap
            vec![ann(0, 12)],            // full cover
        ];
        for anns in cases {
            assert_eq!(
                marked_by_segments(12, &anns),
                marked_by_scan(12, &anns),
                "annotations: {anns:?}"
            );
        }
    }

    #[test]
    fn test_overlap_first_in_list_wins() {
        // Both cover index 3; list order decides
        let anns = vec![ann(3, 6), ann(0, 10)];
        assert_eq!(annotation_at(&anns, 3), Some(0));
        assert_eq!(annotation_at(&anns, 2), Some(1));

        let segs = segments(10, &anns);
        let covering = segs.iter().find(|s| s.start <= 3 && 3 < s.end).unwrap();
        assert_eq!(covering.annotation, Some(0));
    }

    #[test]
    fn test_end_past_text_len_clamps() {
        let anns = vec![ann(5, 100)];
        let segs = segments(10, &anns);
        assert_eq!(segs.last().unwrap().end, 10);
        assert_eq!(segs.last().unwrap().annotation, Some(0));
    }

    #[test]
    fn test_adjacent_annotations_stay_separate() {
        let anns = vec![ann(0, 4), ann(4, 8)];
        let segs = segments(8, &anns);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].annotation, Some(0));
        assert_eq!(segs[1].annotation, Some(1));
    }

    #[test]
    fn test_excerpt_short_range_no_ellipsis() {
        let a = ann(0, 5);
        assert_eq!(excerpt("hello world", &a), "\"hello\"");
    }

    #[test]
    fn test_excerpt_long_range_truncates_at_40() {
        let text = "a".repeat(100);
        let a = ann(0, 100);
        let quoted = excerpt(&text, &a);
        assert_eq!(quoted, format!("\"{}...\"", "a".repeat(40)));
    }
}
