use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaFloppyDisk, Icon};
use dioxus_logger::tracing;

use crate::{
    client::model::{
        error::PriceError,
        form::{FormErrors, FormField},
        role::{set_role_price, toggle_role},
    },
    model::{blink::BlinkFormDto, discord::DiscordRoleDto},
};

/// Blink settings form bound to the form store in context.
///
/// Validation is left to the host page, which passes its messages back in
/// through `form_errors`.
#[component]
pub fn ServerForm(
    mut discord_roles: Signal<Vec<DiscordRoleDto>>,
    form_errors: FormErrors,
    on_submit: EventHandler<()>,
) -> Element {
    let mut form_data = use_context::<Signal<BlinkFormDto>>();
    let mut price_errors = use_signal(HashMap::<String, PriceError>::new);

    let mut handle_input_change =
        move |field: FormField, value: String| form_data.write().set(field, value);

    let mut handle_discord_role_toggle =
        move |role_id: String| toggle_role(&mut discord_roles.write(), &role_id);

    let mut handle_discord_role_price_change = move |(role_id, price): (String, String)| {
        match set_role_price(&mut discord_roles.write(), &role_id, &price) {
            Ok(()) => {
                price_errors.write().remove(&role_id);
            }
            Err(err) => {
                tracing::warn!("Rejected price for role {}: {}", role_id, err);
                price_errors.write().insert(role_id, err);
            }
        }
    };

    let form = form_data();

    rsx!(
        form {
            class: "space-y-6",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.call(());
            },
            FormInput {
                id: "title",
                label: "Blink Title",
                placeholder: "Enter a title for your blink",
                value: form.title,
                error: form_errors.get(FormField::Title).map(str::to_string),
                on_input: move |value| handle_input_change(FormField::Title, value),
            }
            FormInput {
                id: "icon-url",
                label: "Blink Image URL",
                placeholder: "Enter an image URL for your blink",
                value: form.icon_url,
                error: form_errors.get(FormField::IconUrl).map(str::to_string),
                on_input: move |value| handle_input_change(FormField::IconUrl, value),
            }
            div {
                class: "flex flex-col gap-2",
                label {
                    class: "label",
                    r#for: "description",
                    span { class: "label-text", "Blink Description" }
                }
                textarea {
                    id: "description",
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Enter blink description",
                    value: "{form.description}",
                    oninput: move |e| handle_input_change(FormField::Description, e.value()),
                }
                if let Some(error) = form_errors.get(FormField::Description) {
                    p { class: "text-error text-sm mt-1", "{error}" }
                }
            }
            div {
                class: "flex flex-col gap-2",
                h3 { class: "font-semibold", "Premium Roles" }
                if discord_roles.read().is_empty() {
                    p { class: "text-sm opacity-60", "This server has no roles to sell yet." }
                }
                for role in discord_roles() {
                    RoleRow {
                        key: "{role.id}",
                        price_error: price_errors.read().get(&role.id).map(|err| err.to_string()),
                        role: role.clone(),
                        on_toggle: move |role_id| handle_discord_role_toggle(role_id),
                        on_price_change: move |change| handle_discord_role_price_change(change),
                    }
                }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary w-full flex gap-2 items-center",
                Icon { width: 16, height: 16, icon: FaFloppyDisk }
                "Save"
            }
        }
    )
}

#[component]
fn FormInput(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: String,
    error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    rsx!(
        div {
            class: "flex flex-col gap-2",
            label {
                class: "label",
                r#for: id,
                span { class: "label-text", "{label}" }
            }
            input {
                id,
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder,
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
            if let Some(error) = error {
                p { class: "text-error text-sm mt-1", "{error}" }
            }
        }
    )
}

#[component]
fn RoleRow(
    role: DiscordRoleDto,
    price_error: Option<String>,
    on_toggle: EventHandler<String>,
    on_price_change: EventHandler<(String, String)>,
) -> Element {
    let toggle_id = role.id.clone();
    let price_id = role.id.clone();

    rsx!(
        div {
            class: "flex flex-col gap-1 p-3 border border-base-300 rounded-lg",
            div {
                class: "flex items-center justify-between gap-4",
                label {
                    class: "flex items-center gap-2 cursor-pointer",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: role.enabled,
                        onchange: move |_| on_toggle.call(toggle_id.clone()),
                    }
                    span { "{role.name}" }
                }
                input {
                    r#type: "text",
                    inputmode: "decimal",
                    class: "input input-bordered w-32",
                    class: if price_error.is_some() { "input-error" },
                    value: "{role.price}",
                    disabled: !role.enabled,
                    oninput: move |e| on_price_change.call((price_id.clone(), e.value())),
                }
            }
            if let Some(error) = &price_error {
                p { class: "text-error text-sm", "{error}" }
            }
        }
    )
}
