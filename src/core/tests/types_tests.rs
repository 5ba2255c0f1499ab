use global_hotkey::hotkey::Code;

use crate::core::types::{parse_key_code, Chord, Modifier};

#[test]
fn test_modifier_display() {
    assert_eq!(format!("{}", Modifier::Ctrl), "CTRL");
    assert_eq!(format!("{}", Modifier::Shift), "SHIFT");
    assert_eq!(format!("{}", Modifier::Super), "SUPER");
}

#[test]
fn test_chord_normalization() {
    // Order and case don't matter
    let chord1 = Chord::new(vec![Modifier::Ctrl, Modifier::Shift], "z");
    let chord2 = Chord::new(vec![Modifier::Shift, Modifier::Ctrl], "Z");

    assert_eq!(chord1, chord2);
}

#[test]
fn test_chord_deduplicates_modifiers() {
    let chord = Chord::new(vec![Modifier::Ctrl, Modifier::Ctrl], "X");
    assert_eq!(chord.modifiers.len(), 1);
}

#[test]
fn test_chord_display() {
    let chord = Chord::new(vec![Modifier::Ctrl, Modifier::Shift], "Z");
    let display = format!("{}", chord);

    assert!(display.contains("CTRL"));
    assert!(display.contains("SHIFT"));
    assert!(display.ends_with("Z"));
}

#[test]
fn test_chord_display_without_modifiers() {
    let chord = Chord::new(vec![], "F5");
    assert_eq!(format!("{}", chord), "F5");
}

#[test]
fn test_parse_letters_case_insensitive() {
    assert_eq!(parse_key_code("z"), Some(Code::KeyZ));
    assert_eq!(parse_key_code("Z"), Some(Code::KeyZ));
    assert_eq!(parse_key_code("a"), Some(Code::KeyA));
}

#[test]
fn test_parse_digits() {
    assert_eq!(parse_key_code("1"), Some(Code::Digit1));
    assert_eq!(parse_key_code("5"), Some(Code::Digit5));
    assert_eq!(parse_key_code("0"), Some(Code::Digit0));
}

#[test]
fn test_parse_function_keys() {
    assert_eq!(parse_key_code("F1"), Some(Code::F1));
    assert_eq!(parse_key_code("F12"), Some(Code::F12));
    assert_eq!(parse_key_code("F13"), None);
}

#[test]
fn test_parse_named_keys() {
    assert_eq!(parse_key_code("RETURN"), Some(Code::Enter));
    assert_eq!(parse_key_code("enter"), Some(Code::Enter));
    assert_eq!(parse_key_code("SPACE"), Some(Code::Space));
    assert_eq!(parse_key_code("ESC"), Some(Code::Escape));
}

#[test]
fn test_parse_rejects_unknown_names() {
    assert_eq!(parse_key_code("CAPSLOCK"), None);
    assert_eq!(parse_key_code(""), None);
    assert_eq!(parse_key_code("?"), None);
}

#[test]
fn test_native_id_is_stable() {
    let chord = Chord::new(vec![Modifier::Ctrl, Modifier::Shift], "Z");
    let id1 = chord.native_id().unwrap();
    let id2 = chord.native_id().unwrap();

    assert_eq!(id1, id2, "native id must be deterministic for a chord");
}

#[test]
fn test_native_id_differs_per_chord() {
    let z = Chord::new(vec![Modifier::Ctrl, Modifier::Shift], "Z");
    let x = Chord::new(vec![Modifier::Ctrl, Modifier::Shift], "X");

    assert_ne!(z.native_id().unwrap(), x.native_id().unwrap());
}

#[test]
fn test_unbindable_chord_has_no_hotkey() {
    let chord = Chord::new(vec![Modifier::Ctrl], "NOSUCHKEY");
    assert!(chord.to_hotkey().is_none());
    assert!(chord.native_id().is_none());
}
