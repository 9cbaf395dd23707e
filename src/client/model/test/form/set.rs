use super::*;

/// Tests that each input writes only its own field.
///
/// Verifies the image URL input updates `icon_url` rather than the title.
///
/// Expected: each field holds the value written to it
#[test]
fn writes_only_the_addressed_field() {
    let mut form = BlinkFormDto::default();

    form.set(FormField::Title, "Title".to_string());
    form.set(FormField::IconUrl, "https://example.com/a.png".to_string());
    form.set(FormField::Description, "Desc".to_string());

    assert_eq!(form.title, "Title");
    assert_eq!(form.icon_url, "https://example.com/a.png");
    assert_eq!(form.description, "Desc");
}
