use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{EditServer, Home, ManageServer, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/?:code")]
    Home { code: String },

    #[route("/:server_id/edit")]
    EditServer { server_id: String },

    #[route("/:server_id/manage")]
    ManageServer { server_id: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
