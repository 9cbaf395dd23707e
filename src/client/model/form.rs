use crate::model::blink::BlinkFormDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    IconUrl,
}

impl BlinkFormDto {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::IconUrl => self.icon_url = value,
        }
    }
}

/// Per-field messages rendered under the server form inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub icon_url: Option<String>,
    pub description: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.icon_url.is_none() && self.description.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Title => self.title.as_deref(),
            FormField::Description => self.description.as_deref(),
            FormField::IconUrl => self.icon_url.as_deref(),
        }
    }
}

/// Presence and format checks run by the page hosting the server form.
pub fn validate_blink_form(form: &BlinkFormDto) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.title.trim().is_empty() {
        errors.title = Some("Title is required".to_string());
    }
    if form.description.trim().is_empty() {
        errors.description = Some("Description is required".to_string());
    }

    let icon_url = form.icon_url.trim();
    if !icon_url.is_empty() && !(icon_url.starts_with("https://") || icon_url.starts_with("http://"))
    {
        errors.icon_url = Some("Image URL must start with http:// or https://".to_string());
    }

    errors
}
