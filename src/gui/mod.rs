// gui/mod.rs
// GUI module root for symbol-recolor

pub mod bridge;
pub mod hooks;
pub mod util;
pub mod components {
    pub mod color_picker;
    pub mod header;
    pub mod region_selector;
    pub mod result_panel; // final image and exit
}
pub mod dioxus_app; // main app
