use super::*;

#[test]
fn side_class_plain() {
    assert_eq!(side_class("rightSide", false, false), "rightSide");
}

#[test]
fn side_class_flipped() {
    assert_eq!(side_class("leftSide", true, false), "leftSide flipped");
}

#[test]
fn side_class_dark_uses_suffixed_modifier() {
    assert_eq!(side_class("rightSide", true, true), "rightSide flipped rightSideDark");
    assert_eq!(side_class("leftSide", false, true), "leftSide leftSideDark");
}
