// gui/components/result_panel.rs
use crate::gui::bridge::ResultView;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ResultPanelProps {
    pub view: ResultView,
}

#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let exit_code = props.view.exit_code;
    let message = props.view.message.clone();
    let title_color = if exit_code == 0 { "#48ff9b" } else { "#ff6262" };

    rsx! {
        div { style: "background:rgba(255,255,255,0.1); backdrop-filter:blur(10px); padding:20px; border-radius:15px; border:1px solid rgba(255,255,255,0.2);",
            h2 { style: format!("margin-top:0; color:{title_color};"), if exit_code == 0 { "🖼️ Final image" } else { "⚠️ Nothing written" } }
            p { style: "font-size:1.0em; margin:10px 0;", "{message}" }
            if let Some(url) = props.view.preview_url.clone() {
                img { src: "{url}", style: "max-width:100%; border-radius:6px; box-shadow:0 4px 15px rgba(0,0,0,0.3);" }
            }
            div { style: "display:flex; justify-content:center; margin-top:14px;",
                button { style: "background:linear-gradient(45deg,#6c757d,#495057); color:white; padding:12px 25px; border:none; border-radius:10px; cursor:pointer; font-size:1.05em; font-weight:bold; min-width:150px;",
                    onclick: move |_| { std::process::exit(exit_code); },
                    "🚪 Close"
                }
            }
        }
    }
}
