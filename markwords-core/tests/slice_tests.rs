//! End-to-end slicing behavior

use markwords_core::*;

fn options() -> MatchStrategy {
    MatchStrategy::Options(MatchOptions::default())
}

fn with(options: MatchOptions) -> MatchStrategy {
    MatchStrategy::Options(options)
}

fn marked<'a>(text: &'a str, segments: &[Segment]) -> Vec<&'a str> {
    segments
        .iter()
        .filter(|s| s.matched)
        .map(|s| s.text(text))
        .collect()
}

fn pieces<'a>(text: &'a str, segments: &[Segment]) -> Vec<(&'a str, bool)> {
    segments.iter().map(|s| (s.text(text), s.matched)).collect()
}

#[test]
fn test_empty_words_returns_whole_text() {
    let text = "Hello World";
    let segments = slice::<&str>(text, &[], &options()).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text(text), "Hello World");
    assert!(!segments[0].matched);
}

#[test]
fn test_empty_text_returns_nothing() {
    assert!(slice("", &["test"], &options()).unwrap().is_empty());
    assert!(slice::<&str>("", &[], &options()).unwrap().is_empty());
}

#[test]
fn test_multiple_words() {
    let text = "Hello World";
    let segments = slice(text, &["Hello", "World"], &options()).unwrap();

    assert_eq!(
        pieces(text, &segments),
        vec![("Hello", true), (" ", false), ("World", true)]
    );
}

#[test]
fn test_overlapping_words_whole_token() {
    let text = "Hello Worldwide";
    let segments = slice(text, &["World", "Worldwide"], &options()).unwrap();

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].text(text), "Worldwide");
    assert!(segments[1].matched);
}

#[test]
fn test_punctuation_between_matches() {
    let text = "test! test? test.";
    let segments = slice(text, &["test"], &options()).unwrap();

    assert_eq!(segments.len(), 6);
    assert_eq!(marked(text, &segments), ["test", "test", "test"]);
}

#[test]
fn test_boundary_true_matches_isolated_token() {
    let text = "test testing tested";
    let segments = slice(text, &["test"], &options()).unwrap();

    assert_eq!(
        segments,
        vec![
            Segment::new(0..4, 0..4, true),
            Segment::new(4..text.len(), 4..text.len(), false),
        ]
    );
}

#[test]
fn test_boundary_start() {
    let text = "test testing tested";
    let strategy = with(MatchOptions::builder().boundary(Boundary::Start).build());
    let segments = slice(text, &["test"], &strategy).unwrap();

    assert_eq!(marked(text, &segments), ["testing", "tested"]);
}

#[test]
fn test_boundary_end() {
    let text = "test contest tested";
    let strategy = with(MatchOptions::builder().boundary(Boundary::End).build());
    let segments = slice(text, &["test"], &strategy).unwrap();

    assert_eq!(marked(text, &segments), ["contest"]);
}

#[test]
fn test_boundary_false_matches_anywhere() {
    let text = "contest";
    let strategy = with(MatchOptions::builder().boundary(false).build());
    let segments = slice(text, &["test"], &strategy).unwrap();

    assert_eq!(pieces(text, &segments), vec![("con", false), ("test", true)]);
}

#[test]
fn test_case_insensitive_by_default() {
    let text = "Test TEST test";
    let segments = slice(text, &["test"], &options()).unwrap();

    assert_eq!(marked(text, &segments).len(), 3);
}

#[test]
fn test_case_sensitive() {
    let text = "Test TEST test";
    let strategy = with(MatchOptions::builder().case_sensitive(true).build());
    let segments = slice(text, &["test"], &strategy).unwrap();

    assert_eq!(marked(text, &segments), ["test"]);
    assert_eq!(segments.last().unwrap().range(), 10..14);
}

#[test]
fn test_escape_matches_literal_metacharacters() {
    let text = "a.c abc a*c aac";
    let literal = with(MatchOptions::builder().boundary(false).build());

    let dot = slice(text, &["a.c"], &literal).unwrap();
    assert_eq!(marked(text, &dot), ["a.c"]);

    let star = slice(text, &["a*c"], &literal).unwrap();
    assert_eq!(marked(text, &star), ["a*c"]);
}

#[test]
fn test_no_escape_interprets_metacharacters() {
    let text = "a.c abc a*c aac";
    let raw = with(MatchOptions::builder().escape(false).boundary(false).build());

    let dot = slice(text, &["a.c"], &raw).unwrap();
    assert_eq!(marked(text, &dot), ["a.c", "abc", "a*c", "aac"]);

    let star = slice(text, &["a*c"], &raw).unwrap();
    assert_eq!(marked(text, &star), ["c", "c", "c", "aac"]);
}

#[test]
fn test_invalid_unescaped_pattern_fails_whole_call() {
    let raw = with(MatchOptions::builder().escape(false).build());
    let err = slice("some (text)", &["text", "(broken"], &raw).unwrap_err();

    assert!(matches!(err, SliceError::InvalidPattern { .. }));
    assert_eq!(err.word(), "(broken");
}

#[test]
fn test_custom_matcher_overrides_options() {
    let text = "testWorld helloWorld";
    let strategy = MatchStrategy::custom(|word| Ok(Regex::new(&format!("test{word}"))?));
    let segments = slice(text, &["World"], &strategy).unwrap();

    assert_eq!(segments[0].text(text), "testWorld");
    assert!(segments[0].matched);
    assert_eq!(marked(text, &segments), ["testWorld"]);
}

#[test]
fn test_custom_matcher_plain_word() {
    let text = "Hello World";
    let strategy = MatchStrategy::custom(|word| Ok(Regex::new(word)?));
    let segments = slice(text, &["World"], &strategy).unwrap();

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].text(text), "World");
    assert!(segments[1].matched);
}

#[test]
fn test_custom_matcher_multiple_matches() {
    let text = "testing tester tested";
    let strategy = MatchStrategy::custom(|word| Ok(Regex::new(&format!(r"{word}\w+"))?));
    let segments = slice(text, &["test"], &strategy).unwrap();

    assert_eq!(marked(text, &segments), ["testing", "tester", "tested"]);
}

#[test]
fn test_custom_matcher_ignores_case_option() {
    // The factory's regex is used verbatim, so it stays case-sensitive.
    let text = "World world";
    let strategy = MatchStrategy::custom(|word| Ok(Regex::new(word)?));
    let segments = slice(text, &["world"], &strategy).unwrap();

    assert_eq!(pieces(text, &segments), vec![("World ", false), ("world", true)]);
}

#[test]
fn test_custom_matcher_failure() {
    let strategy = MatchStrategy::custom(|word| Ok(Regex::new(&format!("({word}"))?));
    let err = slice("anything", &["word"], &strategy).unwrap_err();

    assert!(matches!(err, SliceError::InvalidMatcher { .. }));
    assert!(err.to_string().contains("word"));
}

#[test]
fn test_custom_matcher_failure_with_empty_text() {
    let strategy = MatchStrategy::custom(|_| Err("no matcher".into()));
    assert!(slice("", &["word"], &strategy).is_err());
}

#[test]
fn test_tie_break_by_word_order() {
    let text = "foobar";
    let strategy = with(MatchOptions::builder().boundary(false).build());

    let first_short = slice(text, &["foo", "foobar"], &strategy).unwrap();
    assert_eq!(pieces(text, &first_short), vec![("foo", true), ("bar", false)]);

    let first_long = slice(text, &["foobar", "foo"], &strategy).unwrap();
    assert_eq!(pieces(text, &first_long), vec![("foobar", true)]);
}

#[test]
fn test_overlap_later_start_dropped_not_truncated() {
    let text = "abcdef";
    let strategy = with(MatchOptions::builder().boundary(false).build());
    let segments = slice(text, &["cdef", "abcd"], &strategy).unwrap();

    assert_eq!(pieces(text, &segments), vec![("abcd", true), ("ef", false)]);
}

#[test]
fn test_adjacent_matches_merge() {
    let text = "abcd!";
    let strategy = with(MatchOptions::builder().boundary(false).build());
    let segments = slice(text, &["ab", "cd"], &strategy).unwrap();

    assert_eq!(pieces(text, &segments), vec![("abcd", true), ("!", false)]);
}

#[test]
fn test_zero_width_custom_matcher() {
    let text = "a b";
    let strategy = MatchStrategy::custom(|_| Ok(Regex::new(r"\b")?));
    let segments = slice(text, &["anything"], &strategy).unwrap();

    assert_eq!(pieces(text, &segments), vec![("a b", false)]);
}

#[test]
fn test_blank_word_matches_literally() {
    let text = " word ";
    let segments = slice(text, &[" "], &options()).unwrap();

    assert_eq!(
        pieces(text, &segments),
        vec![(" ", true), ("word", false), (" ", true)]
    );
}

#[test]
fn test_unicode_text_offsets() {
    let text = "東京 café and Café";
    let segments = slice(text, &["caf"], &options()).unwrap();

    assert_eq!(marked(text, &segments), ["caf", "Caf"]);
    let first = segments.iter().find(|s| s.matched).unwrap();
    assert_eq!(first.char_range(), 3..6);
    assert_eq!(first.range(), 7..10);
}

#[test]
fn test_non_ascii_letters_end_a_word() {
    let text = "café";
    let segments = slice(text, &["caf"], &options()).unwrap();
    assert_eq!(pieces(text, &segments), vec![("caf", true), ("é", false)]);
    assert_eq!(segments[1].range(), 3..5);
    assert_eq!(segments[1].char_range(), 3..4);

    // A word ending in a non-ASCII letter has no trailing boundary.
    assert!(marked(text, &slice(text, &["café"], &options()).unwrap()).is_empty());
    let anywhere = with(MatchOptions::builder().boundary(false).build());
    assert_eq!(marked(text, &slice(text, &["café"], &anywhere).unwrap()), ["café"]);
}

#[test]
fn test_start_boundary_stops_at_non_ascii_letter() {
    let text = "naïve native";
    let start = with(MatchOptions::builder().boundary(Boundary::Start).build());
    let segments = slice(text, &["na"], &start).unwrap();

    assert_eq!(marked(text, &segments), ["native"]);
}

#[test]
fn test_words_as_owned_strings() {
    let words = vec!["quick".to_string(), "lazy".to_string()];
    let text = "the quick brown fox jumps over the lazy dog";
    let segments = slice(text, &words, &options()).unwrap();

    assert_eq!(marked(text, &segments), ["quick", "lazy"]);
}

#[test]
fn test_deterministic() {
    let text = "alpha beta gamma alpha";
    let words = ["alpha", "gamma"];
    let first = slice(text, &words, &options()).unwrap();
    let second = slice(text, &words, &options()).unwrap();

    assert_eq!(first, second);
}

#[test]
#[cfg(feature = "serde")]
fn test_segment_serialization() {
    let segment = Segment::new(0..4, 0..4, true);
    let json = serde_json::to_string(&segment).unwrap();

    assert_eq!(
        json,
        r#"{"start":0,"end":4,"char_start":0,"char_end":4,"matched":true}"#
    );
}
