// gui/components/region_selector.rs
use crate::gui::bridge::SelectView;
use crate::gui::hooks::StageSignals;
use crate::gui::util::{PATCH_PREVIEW_SIZE, patch_crop, selection_rect};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct RegionSelectorProps {
    pub view: SelectView,
    pub signals: StageSignals,
}

#[component]
pub fn RegionSelector(props: RegionSelectorProps) -> Element {
    let signals = props.signals;
    let mut status = props.signals.status;
    let image_url = props.view.image_url.clone();
    let (width, height, scale) = (props.view.width, props.view.height, props.view.scale);
    let display_w = (width as f64 * scale).round();
    let display_h = (height as f64 * scale).round();

    // Drag corners in displayed (element) coordinates
    let mut drag_start = use_signal(|| None::<(f64, f64)>);
    let mut drag_end = use_signal(|| None::<(f64, f64)>);
    let mut dragging = use_signal(|| false);

    let selection = match (*drag_start.read(), *drag_end.read()) {
        (Some(a), Some(b)) => Some(selection_rect(a, b, scale, width, height)),
        _ => None,
    };
    let confirmed = selection.filter(|rect| !rect.is_empty());
    // Live preview of the patch under the drag rectangle
    let patch_style = confirmed
        .and_then(|rect| patch_crop(rect, width, height))
        .map(|crop| crop.style(&image_url));

    // Overlay snapped to whole image pixels
    let overlay = confirmed.map(|r| {
        (
            r.x as f64 * scale,
            r.y as f64 * scale,
            r.width as f64 * scale,
            r.height as f64 * scale,
            r.width,
            r.height,
        )
    });

    rsx! {
        div { style: "background:rgba(255,255,255,0.1); backdrop-filter:blur(10px); padding:15px; border-radius:15px; border:1px solid rgba(255,255,255,0.2);",
            h2 { style: "margin-top:0; color:#87ceeb;", "🟦 Select symbol" }
            p { style: "margin:0 0 10px 0; font-size:0.85em; opacity:0.85;", "Drag a rectangle around the symbol, then confirm." }
            div { style: "display:flex; justify-content:center; align-items:flex-start; gap:14px;",
                div { style: "position:relative; width:fit-content;",
                    img { src: "{image_url}", draggable: "false",
                        style: format!("display:block; width:{display_w}px; height:{display_h}px; image-rendering:pixelated; cursor:crosshair; user-select:none; box-shadow:0 4px 15px rgba(0,0,0,0.3);"),
                        onmousedown: move |evt| {
                            let p = evt.element_coordinates();
                            drag_start.set(Some((p.x, p.y)));
                            drag_end.set(Some((p.x, p.y)));
                            dragging.set(true);
                        },
                        onmousemove: move |evt| {
                            if *dragging.read() {
                                let p = evt.element_coordinates();
                                drag_end.set(Some((p.x, p.y)));
                            }
                        },
                        onmouseup: move |evt| {
                            if !*dragging.read() { return; }
                            let p = evt.element_coordinates();
                            drag_end.set(Some((p.x, p.y)));
                            dragging.set(false);
                            if let Some(start) = *drag_start.read() {
                                let rect = selection_rect(start, (p.x, p.y), scale, width, height);
                                if rect.is_empty() {
                                    status.set("⚠️ Empty selection - drag to draw a rectangle".to_string());
                                } else {
                                    status.set(format!("🟦 Selected rectangle {} size {}x{}", rect, rect.width, rect.height));
                                }
                            }
                        },
                        onmouseleave: move |_| { dragging.set(false); },
                    }
                    if let Some((left, top, w, h, px_w, px_h)) = overlay {
                        div { style: format!("position:absolute; left:{left}px; top:{top}px; width:{w}px; height:{h}px; box-sizing:border-box; border:2px solid #4da3ff; background:rgba(77,163,255,0.12); box-shadow:0 0 10px rgba(77,163,255,0.5); pointer-events:none; z-index:10;"),
                            div { style: "position:absolute; right:0; bottom:0; background:rgba(0,0,0,0.55); color:#fff; font-size:10px; padding:2px 4px; border-top-left-radius:4px;", "{px_w}x{px_h}" }
                        }
                    }
                }
                // Patch preview
                div { style: format!("flex:0 0 auto; width:{PATCH_PREVIEW_SIZE}px; display:flex; flex-direction:column; align-items:center; gap:6px;"),
                    span { style: "font-size:0.8em; opacity:0.85;", "🔎 Patch" }
                    if let Some(style) = patch_style {
                        div { style: "{style} border:1px solid rgba(255,255,255,0.4); box-shadow:0 2px 8px rgba(0,0,0,0.3);" }
                    } else {
                        div { style: format!("width:{PATCH_PREVIEW_SIZE}px; height:{PATCH_PREVIEW_SIZE}px; border:1px dashed rgba(255,255,255,0.35); border-radius:6px;") }
                    }
                }
            }
            div { style: "display:flex; gap:15px; justify-content:center; margin-top:12px;",
                button { style: if confirmed.is_some() { "background:linear-gradient(45deg,#28a745,#20c997); color:white; padding:10px 20px; border:none; border-radius:10px; cursor:pointer; font-weight:bold; min-width:130px;" } else { "background:rgba(255,255,255,0.15); color:rgba(255,255,255,0.5); padding:10px 20px; border:none; border-radius:10px; cursor:not-allowed; font-weight:bold; min-width:130px;" },
                    disabled: confirmed.is_none(),
                    onclick: move |_| {
                        if let Some(rect) = confirmed {
                            signals.answer_region(Some(rect));
                        }
                    },
                    "✅ Confirm"
                }
                button { style: "background:linear-gradient(45deg,#dc3545,#e74c3c); color:white; padding:10px 20px; border:none; border-radius:10px; cursor:pointer; font-weight:bold; min-width:130px;",
                    onclick: move |_| signals.answer_region(None),
                    "✖ Cancel"
                }
            }
        }
    }
}
