#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::icons::IconId;

#[component]
pub fn Icon(icon: IconId) -> Element {
    let asset = icon.asset();
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: asset.view_box,
            stroke_width: asset.stroke_width,
            stroke: "currentColor",
            class: "graphiql-toolbar-icon",
            "aria-hidden": "true",
            for d in asset.paths.iter() {
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    d: *d,
                }
            }
        }
    }
}
