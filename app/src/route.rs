use dioxus::prelude::*;

use crate::components::Layout;
use crate::pages::{About, Grid};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Grid {},  // The live grid is the landing page
    #[route("/about")]
    About {},
}
