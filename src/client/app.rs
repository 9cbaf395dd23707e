use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    client::{
        constant::{SITE_DESCRIPTION, SITE_NAME},
        flow::OwnerFlow,
        router::Route,
        store::{KeyValueStorage, SessionStore, ThemeStore},
    },
    model::blink::BlinkFormDto,
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[cfg(feature = "web")]
fn browser_storage() -> Rc<dyn KeyValueStorage> {
    Rc::new(crate::client::store::LocalStorage)
}

#[cfg(not(feature = "web"))]
fn browser_storage() -> Rc<dyn KeyValueStorage> {
    Rc::new(crate::client::store::MemoryStorage::default())
}

#[component]
pub fn App() -> Element {
    let storage = use_hook(browser_storage);

    // Every store is handed down through context; nothing is global.
    use_context_provider({
        let storage = storage.clone();
        move || Signal::new(SessionStore::new(storage))
    });
    use_context_provider(move || Signal::new(ThemeStore::new(storage)));
    use_context_provider(|| Signal::new(BlinkFormDto::default()));
    use_context_provider(|| Signal::new(OwnerFlow::default()));

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: SITE_DESCRIPTION
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
