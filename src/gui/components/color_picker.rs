// gui/components/color_picker.rs
use crate::gui::bridge::PickView;
use crate::gui::hooks::StageSignals;
use crate::gui::util::{GRADIENT_ZOOM, css_rgb, gradient_pixel};
use crate::recolor::{Color, parse_hex_color, to_hex};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ColorPickerProps {
    pub view: PickView,
    pub signals: StageSignals,
}

#[component]
pub fn ColorPicker(props: ColorPickerProps) -> Element {
    let signals = props.signals;
    let view = props.view.clone();
    let gradient_w = view.gradient.width() * GRADIENT_ZOOM;
    let gradient_h = view.gradient.height() * GRADIENT_ZOOM;
    let hover_gradient = view.gradient.clone();
    let pick_gradient = view.gradient.clone();
    let (gradient_url, overview_url, symbol_url) = (view.gradient_url, view.overview_url, view.symbol_url);
    let match_count = view.match_count;

    let mut hovered = use_signal(|| None::<Color>);
    // Free-form entry, kept as typed so partial hex stays editable
    let mut custom = use_signal(|| "#ff0000".to_string());
    let custom_color = parse_hex_color(&custom.read());
    let picker_value = custom_color.map(to_hex).unwrap_or_else(|| "#000000".to_string());
    let swatch = (*hovered.read()).map(|c| (css_rgb(c), format!("{},{},{}", c[0], c[1], c[2])));

    rsx! {
        div { style: "display:flex; gap:14px; align-items:flex-start;",
            // Picker
            div { style: "flex:0 0 auto; background:rgba(255,255,255,0.1); backdrop-filter:blur(10px); padding:15px; border-radius:15px; border:1px solid rgba(255,255,255,0.2);",
                h2 { style: "margin-top:0; color:#87ceeb;", "🎨 Pick a color" }
                img { src: "{gradient_url}", draggable: "false",
                    style: format!("display:block; width:{gradient_w}px; height:{gradient_h}px; image-rendering:pixelated; cursor:crosshair; border-radius:6px; user-select:none;"),
                    onmousemove: move |evt| {
                        let p = evt.element_coordinates();
                        hovered.set(gradient_pixel(&hover_gradient, p.x, p.y));
                    },
                    onmouseleave: move |_| hovered.set(None),
                    onclick: move |evt| {
                        let p = evt.element_coordinates();
                        if let Some(color) = gradient_pixel(&pick_gradient, p.x, p.y) {
                            signals.answer_color(Some(color));
                        }
                    },
                }
                div { style: "display:flex; align-items:center; gap:8px; margin-top:10px; min-height:28px;",
                    if let Some((css, label)) = swatch {
                        div { style: format!("width:28px; height:28px; border-radius:6px; border:2px solid rgba(255,255,255,0.6); background:{css};") }
                        span { style: "font-family:monospace; font-size:0.85em;", "{label}" }
                    } else {
                        span { style: "font-size:0.8em; opacity:0.7;", "Hover to preview, click to pick" }
                    }
                }
                // Any color, not only the strip
                div { style: "display:flex; align-items:center; gap:8px; margin-top:10px;",
                    input { r#type: "color", value: "{picker_value}",
                        style: "width:36px; height:28px; border:none; padding:0; background:none; cursor:pointer;",
                        oninput: move |evt| custom.set(evt.value()),
                    }
                    input { r#type: "text", value: "{custom}", maxlength: "7",
                        style: "width:80px; font-family:monospace; padding:4px 6px; border-radius:6px; border:1px solid rgba(255,255,255,0.4); background:rgba(0,0,0,0.2); color:white;",
                        oninput: move |evt| custom.set(evt.value()),
                    }
                    button { style: if custom_color.is_some() { "background:linear-gradient(45deg,#28a745,#20c997); color:white; padding:6px 12px; border:none; border-radius:8px; cursor:pointer; font-weight:bold;" } else { "background:rgba(255,255,255,0.15); color:rgba(255,255,255,0.5); padding:6px 12px; border:none; border-radius:8px; cursor:not-allowed; font-weight:bold;" },
                        disabled: custom_color.is_none(),
                        onclick: move |_| {
                            if let Some(color) = custom_color {
                                signals.answer_color(Some(color));
                            }
                        },
                        "✅ Use color"
                    }
                }
                button { style: "margin-top:10px; background:linear-gradient(45deg,#dc3545,#e74c3c); color:white; padding:8px 18px; border:none; border-radius:10px; cursor:pointer; font-weight:bold;",
                    onclick: move |_| signals.answer_color(None),
                    "✖ Cancel"
                }
            }
            // Matcher results
            div { style: "flex:1; min-width:0; display:flex; flex-direction:column; gap:10px;",
                div { style: "background:rgba(255,255,255,0.1); padding:15px; border-radius:15px; border:1px solid rgba(255,255,255,0.2);",
                    h2 { style: "margin-top:0; color:#ffd700;", "🔍 Overview ({match_count} matches)" }
                    img { src: "{overview_url}", style: "max-width:100%; border-radius:6px;" }
                }
                div { style: "background:rgba(255,255,255,0.1); padding:15px; border-radius:15px; border:1px solid rgba(255,255,255,0.2);",
                    h2 { style: "margin-top:0; color:#ffd700;", "🟦 Selected symbol" }
                    img { src: "{symbol_url}", style: "image-rendering:pixelated; border-radius:4px;" }
                }
            }
        }
    }
}
