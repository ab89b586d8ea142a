// gui/bridge.rs
// Connects the session thread to the desktop GUI.
//
// The session thread sends one request per interactive stage and blocks on
// a oneshot reply; the GUI resolves the reply from its event handlers and
// closes the stage.

use crate::gui::util::{display_scale, png_data_url};
use crate::recolor::{
    Color, HueGradient, Interaction, MatchPreview, RecolorConfig, RecolorError, RecolorResult,
    SessionSummary, run_session,
};
use crate::template_matching::Rect;
use image::{DynamicImage, GrayImage, RgbImage};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use tokio::sync::{mpsc, oneshot};

/// Everything the region selector stage displays
#[derive(Clone, Debug, PartialEq)]
pub struct SelectView {
    pub image_url: String,
    pub width: u32,
    pub height: u32,
    /// Displayed pixels per image pixel
    pub scale: f64,
}

/// Everything the color picker stage displays
#[derive(Clone, Debug, PartialEq)]
pub struct PickView {
    pub gradient: HueGradient,
    pub gradient_url: String,
    pub overview_url: String,
    pub symbol_url: String,
    pub match_count: usize,
}

/// Final stage: the result or the reason there is none
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub preview_url: Option<String>,
    pub message: String,
    pub exit_code: i32,
}

impl ResultView {
    pub fn failure(error: &RecolorError) -> Self {
        let message = if error.is_user_cancellation() {
            format!("🚫 Cancelled: {}", error)
        } else {
            format!("❌ {}", error)
        };
        Self {
            preview_url: None,
            message,
            exit_code: 1,
        }
    }
}

/// Requests from the session thread to the GUI
#[derive(Debug)]
pub enum UiRequest {
    SelectRegion {
        view: SelectView,
        reply: oneshot::Sender<Option<Rect>>,
    },
    PickColor {
        view: PickView,
        reply: oneshot::Sender<Option<Color>>,
    },
    Finished(ResultView),
}

pub type UiRequestSender = mpsc::UnboundedSender<UiRequest>;

/// Receiving end handed to the GUI through the launch context.
/// The first component to take it owns it.
#[derive(Clone)]
pub struct UiRequestReceiver(Arc<Mutex<Option<mpsc::UnboundedReceiver<UiRequest>>>>);

impl UiRequestReceiver {
    pub fn take(&self) -> Option<mpsc::UnboundedReceiver<UiRequest>> {
        // A panic while holding the lock leaves the receiver itself intact
        self.0.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

/// Helper function to create the request channel
pub fn create_ui_channel() -> (UiRequestSender, UiRequestReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UiRequestReceiver(Arc::new(Mutex::new(Some(rx)))))
}

/// Process exit code of the GUI session, shared by the session thread and
/// every way of closing the window. Starts as a failure and only turns into
/// success once the session has written its result.
#[derive(Clone, Debug)]
pub struct SessionOutcome(Arc<AtomicI32>);

impl SessionOutcome {
    pub fn new() -> Self {
        Self(Arc::new(AtomicI32::new(1)))
    }

    pub fn code(&self) -> i32 {
        self.0.load(Ordering::SeqCst)
    }

    fn record(&self, result: &RecolorResult<SessionSummary>) {
        let code = if result.is_ok() { 0 } else { 1 };
        self.0.store(code, Ordering::SeqCst);
    }
}

impl Default for SessionOutcome {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Interaction`] backed by the desktop GUI
pub struct GuiInteraction {
    requests: UiRequestSender,
}

impl GuiInteraction {
    pub fn new(requests: UiRequestSender) -> Self {
        Self { requests }
    }

    /// Send a request; the caller blocks on the returned reply.
    fn ask<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> UiRequest,
    ) -> RecolorResult<oneshot::Receiver<T>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.requests
            .send(build(reply_tx))
            .map_err(|_| RecolorError::UiClosed)?;
        Ok(reply_rx)
    }
}

impl Interaction for GuiInteraction {
    fn select_region(&mut self, gray: &GrayImage) -> RecolorResult<Option<Rect>> {
        let view = SelectView {
            image_url: png_data_url(&DynamicImage::ImageLuma8(gray.clone()))?,
            width: gray.width(),
            height: gray.height(),
            scale: display_scale(gray.width(), gray.height()),
        };
        self.ask(|reply| UiRequest::SelectRegion { view, reply })?
            .blocking_recv()
            .map_err(|_| RecolorError::UiClosed)
    }

    fn pick_color(
        &mut self,
        gradient: &HueGradient,
        preview: &MatchPreview,
    ) -> RecolorResult<Option<Color>> {
        let view = PickView {
            gradient: gradient.clone(),
            gradient_url: png_data_url(&DynamicImage::ImageRgb8(gradient.image().clone()))?,
            overview_url: png_data_url(&DynamicImage::ImageRgb8(preview.overview.clone()))?,
            symbol_url: png_data_url(&DynamicImage::ImageLuma8(preview.symbol.clone()))?,
            match_count: preview.match_count,
        };
        let reply = self.ask(|reply| UiRequest::PickColor { view, reply })?;
        // A dropped reply means the picker went away without a choice
        Ok(reply.blocking_recv().unwrap_or(None))
    }

    fn present_result(&mut self, preview: &RgbImage, summary: &SessionSummary) -> RecolorResult<()> {
        let view = ResultView {
            preview_url: Some(png_data_url(&DynamicImage::ImageRgb8(preview.clone()))?),
            message: format!("✅ {}", summary.describe()),
            exit_code: 0,
        };
        self.requests
            .send(UiRequest::Finished(view))
            .map_err(|_| RecolorError::UiClosed)
    }
}

/// Run a session on its own thread, reporting failures to the GUI and the
/// final exit code to `outcome`.
pub fn spawn_session(
    config: RecolorConfig,
    requests: UiRequestSender,
    outcome: SessionOutcome,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let mut ui = GuiInteraction::new(requests.clone());
        let result = run_session(&config, &mut ui);
        outcome.record(&result);
        match result {
            Ok(summary) => log::info!("✅ {}", summary.describe()),
            Err(e) => {
                log::error!("❌ Session ended: {}", e);
                if requests.send(UiRequest::Finished(ResultView::failure(&e))).is_err() {
                    log::debug!("GUI already closed, nothing to report to");
                }
            }
        }
    })
}
