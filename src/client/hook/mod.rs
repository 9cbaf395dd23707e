pub mod dom;
pub mod window;

pub use window::{use_scroll_y, use_window_width};
