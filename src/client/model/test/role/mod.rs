use crate::{
    client::model::{
        error::PriceError,
        role::{parse_price, set_role_price, toggle_role},
    },
    model::discord::DiscordRoleDto,
};

mod set_role_price;
mod toggle_role;

fn role(id: &str, price: f64, enabled: bool) -> DiscordRoleDto {
    DiscordRoleDto {
        id: id.to_string(),
        name: format!("Role {}", id),
        enabled,
        price,
    }
}
