use std::cell::Cell;
use std::rc::Rc;

use crate::color::Color;

/// A view floating above the sheet (a locate button, a compass). The
/// coordinator writes its vertical translation; the host reads it back when
/// rendering.
#[derive(Default)]
pub struct FloatingItem {
    translation_y: Cell<f32>,
}

impl FloatingItem {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn translation_y(&self) -> f32 {
        self.translation_y.get()
    }

    pub fn set_translation_y(&self, translation_y: f32) {
        self.translation_y.set(translation_y);
    }
}

/// Everything the coordinator needs from the host UI.
///
/// The companion content is the full-bleed surface behind the sheet. Chrome
/// is the status-bar-like strip whose color and icon contrast track the
/// sheet near full expansion.
pub trait PresentationSink {
    /// Items floating above the sheet, re-queried on every slide because the
    /// host may add or remove them.
    fn floating_items(&self) -> Vec<Rc<FloatingItem>>;

    /// Chrome color while the sheet is anywhere below full expansion.
    fn chrome_color_default(&self) -> Color;

    /// Chrome color at full expansion.
    fn chrome_color_expanded(&self) -> Color;

    fn set_content_visible(&self, visible: bool);

    fn set_content_gestures_enabled(&self, enabled: bool);

    fn set_content_padding(&self, left: f32, top: f32, right: f32, bottom: f32);

    fn set_content_translation_y(&self, translation_y: f32);

    /// Performance hint mirrored onto the content while the sheet animates;
    /// the sheet view itself carries the same hint via
    /// [`sheet_motion::SheetView::set_render_boost`].
    fn set_content_render_boost(&self, enabled: bool);

    fn set_chrome_color(&self, color: Color);

    fn set_chrome_contrast_icons(&self, dark: bool);
}
