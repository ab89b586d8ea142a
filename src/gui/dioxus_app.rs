use crate::gui::bridge::{SessionOutcome, create_ui_channel, spawn_session};
use crate::gui::components::{
    color_picker::ColorPicker, header::Header, region_selector::RegionSelector,
    result_panel::ResultPanel,
};
use crate::gui::hooks::{Stage, StageSignals, use_request_loop};
use crate::recolor::RecolorConfig;
use dioxus::prelude::*;

const BUILD_YEAR: &str = env!("APP_BUILD_YEAR");

/// Input file name shown in the header
#[derive(Clone)]
struct InputName(String);

/// Run the GUI session and return the process exit code.
///
/// The desktop event loop normally ends the process itself, so every close
/// path exits with the shared [`SessionOutcome`] directly.
pub fn run_gui(config: RecolorConfig) -> i32 {
    use dioxus::desktop::{Config, WindowBuilder};
    let input_name = InputName(config.input_path.display().to_string());
    let (requests, receiver) = create_ui_channel();
    let outcome = SessionOutcome::new();
    // Session runs on its own thread and blocks on GUI replies
    let _session = spawn_session(config, requests, outcome.clone());

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Symbol Recolor")
            .with_resizable(true)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100, 800)),
    );
    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(receiver)
        .with_context(input_name)
        .with_context(outcome.clone())
        .launch(App);
    outcome.code()
}

#[component]
fn App() -> Element {
    let signals = StageSignals {
        stage: use_signal(|| Stage::Working("📂 Loading image...".to_string())),
        status: use_signal(|| "Initializing...".to_string()),
        region_reply: use_signal(|| None),
        color_reply: use_signal(|| None),
    };
    use_request_loop(signals);
    let input_name = use_context::<InputName>().0;
    let outcome = use_context::<SessionOutcome>();

    // Title-bar close: exit with the session result instead of the event loop's 0
    let close_outcome = outcome.clone();
    dioxus::desktop::use_wry_event_handler(move |event, _| {
        if let dioxus::desktop::tao::event::Event::WindowEvent {
            event: dioxus::desktop::tao::event::WindowEvent::CloseRequested,
            ..
        } = event
        {
            let code = close_outcome.code();
            log::debug!("Window closed, exiting with {}", code);
            std::process::exit(code);
        }
    });

    let stage = signals.stage.read().clone();
    let current_status = signals.status.read().clone();
    let status_style = if current_status.starts_with('❌') || current_status.starts_with('🚫') {
        "background: #5a1f1f; color: #ff6262; border: 1px solid #ff6262; padding: 4px 10px; border-radius: 16px; font-size: 0.8em; letter-spacing: 0.5px; font-weight: 600;"
    } else if current_status.starts_with('✅') {
        "background: #1f5130; color: #48ff9b; border: 1px solid #48ff9b; padding: 4px 10px; border-radius: 16px; font-size: 0.8em; letter-spacing: 0.5px; font-weight: 600;"
    } else {
        "background: #5a4b1f; color: #ffd857; border: 1px solid #ffd857; padding: 4px 10px; border-radius: 16px; font-size: 0.8em; letter-spacing: 0.5px; font-weight: 600;"
    };

    rsx! {
        div { style: "min-height:97vh; display:flex; flex-direction:column; gap:10px; padding:10px; font-family:'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background:linear-gradient(135deg,#667eea 0%,#764ba2 100%); color:white; box-sizing:border-box;",
            Header { input_name, on_close: move |_| { let code = outcome.code(); std::thread::spawn(move || std::process::exit(code)); } }
            div { style: "flex:1; min-height:0;",
                {match stage {
                    Stage::Working(message) => rsx! {
                        div { style: "background:rgba(255,255,255,0.1); padding:40px; border-radius:15px; text-align:center; font-size:1.2em;",
                            "{message}"
                        }
                    },
                    Stage::SelectRegion(view) => rsx! { RegionSelector { view, signals } },
                    Stage::PickColor(view) => rsx! { ColorPicker { view, signals } },
                    Stage::Finished(view) => rsx! { ResultPanel { view } },
                }}
            }
            // Status bar and credits
            div { style: "display:flex; align-items:center; gap:10px;",
                span { style: "{status_style}", "{current_status}" }
                div { style: "flex:1; text-align:right; font-size:0.7em; opacity:0.75; letter-spacing:0.5px;",
                    "Built with Rust 🦀 and Dioxus ⚛️ · {BUILD_YEAR}"
                }
            }
        }
    }
}
