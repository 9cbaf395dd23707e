use dioxus::prelude::*;

use crate::client::hook::dom;

/// Viewport width, `None` until it can be measured. Follows `resize`.
pub fn use_window_width() -> Signal<Option<f64>> {
    let width = use_signal(dom::window_width);

    #[cfg(feature = "web")]
    {
        let mut width = width;
        // Kept for the lifetime of the component; dropping it detaches the listener.
        use_hook(move || {
            std::rc::Rc::new(gloo::events::EventListener::new(
                &gloo::utils::window(),
                "resize",
                move |_| width.set(dom::window_width()),
            ))
        });
    }

    width
}

/// Vertical scroll offset of the page. Follows `scroll`.
pub fn use_scroll_y() -> Signal<f64> {
    let scroll_y = use_signal(dom::scroll_y);

    #[cfg(feature = "web")]
    {
        let mut scroll_y = scroll_y;
        use_hook(move || {
            std::rc::Rc::new(gloo::events::EventListener::new(
                &gloo::utils::window(),
                "scroll",
                move |_| scroll_y.set(dom::scroll_y()),
            ))
        });
    }

    scroll_y
}
