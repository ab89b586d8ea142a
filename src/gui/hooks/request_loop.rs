use crate::gui::bridge::UiRequestReceiver;
use crate::gui::hooks::types::StageSignals;
use dioxus::prelude::*;

/// Receives session requests and switches the window to the asked-for stage
pub fn use_request_loop(signals: StageSignals) {
    let receiver = use_context::<UiRequestReceiver>();
    use_future(move || {
        let receiver = receiver.clone();
        async move {
            let Some(mut requests) = receiver.take() else {
                log::warn!("Session request channel already in use");
                return;
            };
            while let Some(request) = requests.recv().await {
                signals.apply(request);
            }
            log::debug!("Session thread finished, request loop ending");
        }
    });
}
