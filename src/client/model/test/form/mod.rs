use crate::{
    client::model::form::{validate_blink_form, FormField},
    model::blink::BlinkFormDto,
};

mod set;
mod validate_blink_form;

fn filled_form() -> BlinkFormDto {
    BlinkFormDto {
        title: "VIP access".to_string(),
        description: "Unlock the VIP lounge".to_string(),
        icon_url: "https://example.com/vip.png".to_string(),
    }
}
