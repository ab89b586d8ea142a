//! One recolor session: Load → Select → Match → Pick → Composite → Write
//!
//! The pipeline itself never touches a window. Everything interactive goes
//! through the [`Interaction`] trait so the same pipeline drives the desktop
//! GUI, the headless CLI mode and the tests.

use super::compositor::composite;
use super::config::RecolorConfig;
use super::error::{RecolorError, RecolorResult};
use super::loader::{SourceImage, write_image};
use super::palette::{Color, HueGradient};
use super::preview::{MatchPreview, scale_image};
use crate::template_matching::{MatchLocation, Rect, Template, TemplateMatcher};
use image::{GrayImage, RgbImage};
use std::path::PathBuf;

/// The interactive stages of a session.
///
/// Every call blocks until the user has answered.
pub trait Interaction {
    /// Let the user drag a rectangle over `gray`. `None` means cancelled.
    fn select_region(&mut self, gray: &GrayImage) -> RecolorResult<Option<Rect>>;

    /// Let the user pick a color from `gradient` while `preview` is shown.
    /// `None` means cancelled.
    fn pick_color(
        &mut self,
        gradient: &HueGradient,
        preview: &MatchPreview,
    ) -> RecolorResult<Option<Color>>;

    /// Show the written result.
    fn present_result(&mut self, preview: &RgbImage, summary: &SessionSummary) -> RecolorResult<()>;
}

/// What a finished session did
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSummary {
    pub selection: Rect,
    pub matches: Vec<MatchLocation>,
    pub color: Color,
    pub pixels_blended: usize,
    pub output_path: PathBuf,
}

impl SessionSummary {
    pub fn describe(&self) -> String {
        format!(
            "Recolored {} match(es) of {} with ({},{},{}) → {}",
            self.matches.len(),
            self.selection,
            self.color[0],
            self.color[1],
            self.color[2],
            self.output_path.display()
        )
    }
}

/// Run a full session against `ui`.
pub fn run_session<I: Interaction>(
    config: &RecolorConfig,
    ui: &mut I,
) -> RecolorResult<SessionSummary> {
    let source = SourceImage::load(&config.input_path)?;
    recolor_source(source, config, ui)
}

/// Everything after loading; split out so callers can supply the image.
pub fn recolor_source<I: Interaction>(
    source: SourceImage,
    config: &RecolorConfig,
    ui: &mut I,
) -> RecolorResult<SessionSummary> {
    let selection = ui
        .select_region(&source.gray)?
        .ok_or_else(RecolorError::selection_cancelled)?;
    // Extraction rejects empty, oversized and out-of-bounds rectangles
    let template = Template::extract(&source.gray, selection)?;
    log::info!("🟦 Selected symbol {}", selection);

    log::info!("🔍 Performing template matching");
    let matcher = TemplateMatcher::new(config.threshold);
    let matches = matcher.find_matches(&source.gray, &template)?;
    log::info!(
        "✅ Found {} match(es) below threshold {}",
        matches.len(),
        matcher.threshold()
    );
    for location in &matches {
        log::debug!("  match {}", location);
    }

    let preview = MatchPreview::render(
        &source.gray,
        &template,
        &matches,
        config.overview_scale,
        config.symbol_scale,
    );
    let gradient = HueGradient::new();
    let color = ui
        .pick_color(&gradient, &preview)?
        .ok_or(RecolorError::PickCancelled)?;
    log::info!("🎨 Picked color ({},{},{})", color[0], color[1], color[2]);

    let mut output = source.color;
    let pixels_blended = composite(&mut output, &matches, selection.size(), color, config.alpha);
    write_image(&output, &config.output_path)?;

    let summary = SessionSummary {
        selection,
        matches,
        color,
        pixels_blended,
        output_path: config.output_path.clone(),
    };
    ui.present_result(&scale_image(&output, config.overview_scale), &summary)?;
    Ok(summary)
}

/// How a scripted session picks its color
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorChoice {
    /// Click the first column of this hue row
    Hue(u8),
    /// Use this color directly
    Exact(Color),
    /// Close the picker without choosing
    Cancel,
}

/// Non-interactive answers for headless runs and tests
#[derive(Clone, Debug)]
pub struct ScriptedInteraction {
    pub selection: Option<Rect>,
    pub color: ColorChoice,
    /// Match count seen by the picker stage
    pub seen_matches: Option<usize>,
    /// Summary handed to the result stage
    pub presented: Option<SessionSummary>,
}

impl ScriptedInteraction {
    pub fn new(selection: Option<Rect>, color: ColorChoice) -> Self {
        Self {
            selection,
            color,
            seen_matches: None,
            presented: None,
        }
    }
}

impl Interaction for ScriptedInteraction {
    fn select_region(&mut self, _gray: &GrayImage) -> RecolorResult<Option<Rect>> {
        Ok(self.selection)
    }

    fn pick_color(
        &mut self,
        gradient: &HueGradient,
        preview: &MatchPreview,
    ) -> RecolorResult<Option<Color>> {
        self.seen_matches = Some(preview.match_count);
        Ok(match self.color {
            ColorChoice::Hue(hue) => gradient.hue_color(hue),
            ColorChoice::Exact(color) => Some(color),
            ColorChoice::Cancel => None,
        })
    }

    fn present_result(&mut self, _preview: &RgbImage, summary: &SessionSummary) -> RecolorResult<()> {
        self.presented = Some(summary.clone());
        Ok(())
    }
}
