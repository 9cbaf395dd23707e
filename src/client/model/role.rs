use crate::{client::model::error::PriceError, model::discord::DiscordRoleDto};

/// Parses owner input from a role's price field.
pub fn parse_price(input: &str) -> Result<f64, PriceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PriceError::Empty);
    }

    let price = trimmed
        .parse::<f64>()
        .map_err(|_| PriceError::NotANumber(trimmed.to_string()))?;

    if !price.is_finite() {
        return Err(PriceError::NotANumber(trimmed.to_string()));
    }
    if price < 0.0 {
        return Err(PriceError::Negative);
    }

    Ok(price)
}

/// Flips `enabled` on the role with `role_id`. Unknown ids are ignored.
pub fn toggle_role(roles: &mut [DiscordRoleDto], role_id: &str) {
    if let Some(role) = roles.iter_mut().find(|role| role.id == role_id) {
        role.enabled = !role.enabled;
    }
}

/// Sets the price of the role with `role_id` from raw input.
///
/// On a parse failure every role is left untouched and the error is returned
/// so the form can show it next to the field.
pub fn set_role_price(
    roles: &mut [DiscordRoleDto],
    role_id: &str,
    input: &str,
) -> Result<(), PriceError> {
    let price = parse_price(input)?;
    if let Some(role) = roles.iter_mut().find(|role| role.id == role_id) {
        role.price = price;
    }
    Ok(())
}
