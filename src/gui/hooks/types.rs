use crate::gui::bridge::{PickView, ResultView, SelectView, UiRequest};
use crate::recolor::Color;
use crate::template_matching::Rect;
use dioxus::prelude::*;
use tokio::sync::oneshot;

/// Pending answer for the region selector
pub type RegionReplySignal = Signal<Option<oneshot::Sender<Option<Rect>>>>;

/// Pending answer for the color picker
pub type ColorReplySignal = Signal<Option<oneshot::Sender<Option<Color>>>>;

/// Which stage the window currently hosts
#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
    /// Session is busy (loading, matching, writing)
    Working(String),
    SelectRegion(SelectView),
    PickColor(PickView),
    Finished(ResultView),
}

/// Stage-related signals grouped together
#[derive(Clone, Copy, PartialEq)]
pub struct StageSignals {
    pub stage: Signal<Stage>,
    pub status: Signal<String>, // Status bar message
    pub region_reply: RegionReplySignal,
    pub color_reply: ColorReplySignal,
}

impl StageSignals {
    /// Show the stage a session request asks for
    pub fn apply(mut self, request: UiRequest) {
        match request {
            UiRequest::SelectRegion { view, reply } => {
                self.region_reply.set(Some(reply));
                self.status
                    .set(format!("🖼️ Image {}x{} - drag around the symbol", view.width, view.height));
                self.stage.set(Stage::SelectRegion(view));
            }
            UiRequest::PickColor { view, reply } => {
                self.color_reply.set(Some(reply));
                self.status
                    .set(format!("✅ {} match(es) found - click a color", view.match_count));
                self.stage.set(Stage::PickColor(view));
            }
            UiRequest::Finished(view) => {
                self.status.set(view.message.clone());
                self.stage.set(Stage::Finished(view));
            }
        }
    }

    /// Answer the region request and close the selector
    pub fn answer_region(mut self, answer: Option<Rect>) {
        if let Some(reply) = self.region_reply.write().take() {
            if reply.send(answer).is_err() {
                log::warn!("Session stopped waiting for a selection");
            }
        }
        let message = match answer {
            Some(_) => "🔍 Performing template matching...",
            None => "🚫 Selection cancelled",
        };
        self.status.set(message.to_string());
        self.stage.set(Stage::Working(message.to_string()));
    }

    /// Answer the color request and close the picker
    pub fn answer_color(mut self, answer: Option<Color>) {
        if let Some(reply) = self.color_reply.write().take() {
            if reply.send(answer).is_err() {
                log::warn!("Session stopped waiting for a color");
            }
        }
        let message = match answer {
            Some(_) => "🎨 Recoloring matches...",
            None => "🚫 Color pick cancelled",
        };
        self.status.set(message.to_string());
        self.stage.set(Stage::Working(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recolor::HueGradient;
    use dioxus::dioxus_core::{ScopeId, VirtualDom};
    use image::Rgb;

    fn empty_app() -> Element {
        rsx! { div {} }
    }

    /// Run `f` with fresh stage signals owned by a live virtual dom
    fn with_signals(f: impl FnOnce(StageSignals)) {
        let mut dom = VirtualDom::new(empty_app);
        dom.rebuild_in_place();
        dom.in_scope(ScopeId::ROOT, || {
            let signals = StageSignals {
                stage: Signal::new(Stage::Working(String::new())),
                status: Signal::new(String::new()),
                region_reply: Signal::new(None),
                color_reply: Signal::new(None),
            };
            f(signals)
        });
    }

    fn pick_view() -> PickView {
        PickView {
            gradient: HueGradient::new(),
            gradient_url: String::new(),
            overview_url: String::new(),
            symbol_url: String::new(),
            match_count: 4,
        }
    }

    #[test]
    fn test_answer_color_resolves_waiting_pick() {
        with_signals(|signals| {
            let (reply, mut answer) = oneshot::channel();
            signals.apply(UiRequest::PickColor {
                view: pick_view(),
                reply,
            });
            assert!(matches!(*signals.stage.read(), Stage::PickColor(_)));
            assert!(signals.color_reply.read().is_some());

            signals.answer_color(Some(Rgb([0, 255, 0])));
            assert_eq!(answer.try_recv().unwrap(), Some(Rgb([0, 255, 0])));
            assert!(signals.color_reply.read().is_none());
            assert!(matches!(*signals.stage.read(), Stage::Working(_)));
        });
    }

    #[test]
    fn test_answer_region_cancel_resolves_waiting_select() {
        with_signals(|signals| {
            let (reply, mut answer) = oneshot::channel();
            signals.apply(UiRequest::SelectRegion {
                view: SelectView {
                    image_url: String::new(),
                    width: 10,
                    height: 10,
                    scale: 8.0,
                },
                reply,
            });
            assert!(matches!(*signals.stage.read(), Stage::SelectRegion(_)));

            signals.answer_region(None);
            assert_eq!(answer.try_recv().unwrap(), None);
            assert_eq!(*signals.status.read(), "🚫 Selection cancelled");
        });
    }

    #[test]
    fn test_second_answer_is_ignored() {
        with_signals(|signals| {
            let (reply, mut answer) = oneshot::channel();
            signals.apply(UiRequest::PickColor {
                view: pick_view(),
                reply,
            });
            signals.answer_color(Some(Rgb([1, 2, 3])));
            // Nothing pending any more; must not panic
            signals.answer_color(None);
            assert_eq!(answer.try_recv().unwrap(), Some(Rgb([1, 2, 3])));
        });
    }

    #[test]
    fn test_finished_shows_result() {
        with_signals(|signals| {
            signals.apply(UiRequest::Finished(ResultView {
                preview_url: None,
                message: "❌ boom".to_string(),
                exit_code: 1,
            }));
            assert!(matches!(&*signals.stage.read(), Stage::Finished(view) if view.exit_code == 1));
            assert_eq!(*signals.status.read(), "❌ boom");
        });
    }
}
