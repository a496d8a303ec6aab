use super::*;

#[test]
fn steam_screenshot_name() {
    assert_eq!(parse_app_id("440_20240101123456_1"), Some(440));
}

#[test]
fn id_with_single_suffix() {
    assert_eq!(parse_app_id("730_shot"), Some(730));
    assert_eq!(parse_app_id("0_x"), Some(0));
}

#[test]
fn name_without_delimiter_is_one_token() {
    assert_eq!(parse_app_id("1091500"), Some(1091500));
    assert_eq!(parse_app_id("screenshot"), None);
}

#[test]
fn leading_token_must_be_numeric() {
    assert_eq!(parse_app_id("abc_shot2"), None);
    assert_eq!(parse_app_id("44a0_shot"), None);
    assert_eq!(parse_app_id("_440_shot"), None);
    assert_eq!(parse_app_id(""), None);
}

#[test]
fn whitespace_around_id_ignored() {
    assert_eq!(parse_app_id(" 440_shot"), Some(440));
    assert_eq!(parse_app_id("440 _shot"), Some(440));
    assert_eq!(parse_app_id("4 40_shot"), None);
    assert_eq!(parse_app_id("   _shot"), None);
}

#[test]
fn explicit_plus_sign_accepted() {
    assert_eq!(parse_app_id("+440_shot"), Some(440));
}

#[test]
fn negative_or_overflowing_ids_rejected() {
    assert_eq!(parse_app_id("-440_shot"), None);
    assert_eq!(parse_app_id("99999999999_shot"), None);
}

#[test]
fn candidate_derives_fields() {
    let c = ScreenshotCandidate::new("/shots/440_20240101_1.JPG");
    assert_eq!(c.base_name, "440_20240101_1");
    assert_eq!(c.extension, "jpg");
    assert_eq!(c.app_id, Some(440));
}

#[test]
fn candidate_without_id() {
    let c = ScreenshotCandidate::new("/shots/holiday.png");
    assert_eq!(c.base_name, "holiday");
    assert_eq!(c.extension, "png");
    assert_eq!(c.app_id, None);
}
