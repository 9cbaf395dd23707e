use super::*;

/// Tests a fully filled form.
///
/// Expected: no errors
#[test]
fn accepts_complete_form() {
    let errors = validate_blink_form(&filled_form());

    assert!(errors.is_empty());
}

/// Tests a form with blank required fields.
///
/// Expected: title and description errors, no image error for an empty URL
#[test]
fn requires_title_and_description() {
    let form = BlinkFormDto {
        title: "  ".to_string(),
        description: String::new(),
        icon_url: String::new(),
    };

    let errors = validate_blink_form(&form);

    assert!(errors.get(FormField::Title).is_some());
    assert!(errors.get(FormField::Description).is_some());
    assert!(errors.get(FormField::IconUrl).is_none());
}

/// Tests an image URL without an http scheme.
///
/// Expected: only the image URL error is set
#[test]
fn rejects_image_url_without_http_scheme() {
    let form = BlinkFormDto {
        icon_url: "ftp://example.com/a.png".to_string(),
        ..filled_form()
    };

    let errors = validate_blink_form(&form);

    assert!(errors.icon_url.is_some());
    assert!(errors.title.is_none());
    assert!(errors.description.is_none());
}
