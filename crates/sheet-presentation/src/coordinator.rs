//! Keeps the companion content and chrome in sync with the sheet.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use sheet_motion::{SheetCallback, SheetMotionController, SheetState, SheetView};

use crate::color::Color;
use crate::sink::PresentationSink;

/// Slide offset where the chrome color starts blending toward expanded.
const CHROME_BLEND_START: f32 = 0.9;

/// Slide offset where chrome icons flip to their contrast variant.
const CHROME_CONTRAST_THRESHOLD: f32 = 0.975;

const EXPANDED_SLIDE_OFFSET: f32 = 1.0;

struct CoordinatorInner {
    sink: Rc<dyn PresentationSink>,

    collapsed_height: Cell<f32>,
    semi_collapsed_height: Cell<f32>,

    content_top_inset: f32,
    content_left_inset: f32,
    content_bottom_inset: f32,

    view: RefCell<Weak<SheetView>>,
    controller: RefCell<Weak<RefCell<SheetMotionController>>>,
}

/// Wires a [`SheetMotionController`] to a [`PresentationSink`] and translates
/// sheet motion into content padding, parallax translation, floating-item
/// translation, and chrome appearance.
///
/// The coordinator never owns the view or the controller; both are held
/// weakly and every operation degrades to a no-op once the host drops them.
pub struct SheetPresentationCoordinator {
    inner: Rc<CoordinatorInner>,
}

impl SheetPresentationCoordinator {
    pub fn builder(sink: Rc<dyn PresentationSink>) -> CoordinatorBuilder {
        CoordinatorBuilder::new(sink)
    }

    /// Wires `controller` with an explicit height triple and installs this
    /// coordinator as its callback. The named presets are the usual entry
    /// points; this is the general form.
    pub fn attach(
        &self,
        view: &Rc<SheetView>,
        controller: &Rc<RefCell<SheetMotionController>>,
        collapsed_height: f32,
        semi_collapsed_height: f32,
        initial_height: f32,
    ) {
        log::debug!(
            "attaching sheet: collapsed {collapsed_height}, semi-collapsed {semi_collapsed_height}, initial {initial_height}"
        );
        self.inner.collapsed_height.set(collapsed_height);
        self.inner.semi_collapsed_height.set(semi_collapsed_height);
        *self.inner.view.borrow_mut() = Rc::downgrade(view);
        *self.inner.controller.borrow_mut() = Rc::downgrade(controller);
        view.bind_controller(controller);

        {
            let mut controller = controller.borrow_mut();
            controller.set_peek_heights(collapsed_height, semi_collapsed_height, true);
            controller.set_initial_height(initial_height);
            controller.set_callback(Some(self.inner.clone() as Rc<dyn SheetCallback>));
        }
        self.inner.apply_content_geometry_from_view();
    }

    /// Two resting heights; the sheet starts at the semi-collapsed one.
    pub fn use_two_states(
        &self,
        view: &Rc<SheetView>,
        controller: &Rc<RefCell<SheetMotionController>>,
    ) {
        let collapsed = self.inner.collapsed_height.get();
        let semi = self.inner.semi_collapsed_height.get();
        self.attach(view, controller, collapsed, semi, semi);
    }

    /// A single resting height, the semi-collapsed one.
    pub fn use_semi_collapsed_only(
        &self,
        view: &Rc<SheetView>,
        controller: &Rc<RefCell<SheetMotionController>>,
    ) {
        let semi = self.inner.semi_collapsed_height.get();
        self.attach(view, controller, semi, semi, semi);
    }

    /// A single resting height, the collapsed one.
    pub fn use_collapsed_only(
        &self,
        view: &Rc<SheetView>,
        controller: &Rc<RefCell<SheetMotionController>>,
    ) {
        let collapsed = self.inner.collapsed_height.get();
        self.attach(view, controller, collapsed, collapsed, collapsed);
    }

    /// Animates back to the two-height configuration.
    ///
    /// A no-op when the controller already carries both heights, so calling
    /// it during an in-flight animation does not disturb the animation.
    pub fn animate_to_two_states(&self) {
        let Some(controller) = self.inner.controller() else {
            return;
        };
        {
            let mut controller = controller.borrow_mut();
            if !self.inner.has_two_state_heights(&controller) {
                controller.animate_and_set_heights(
                    self.inner.semi_collapsed_height.get(),
                    self.inner.collapsed_height.get(),
                    self.inner.semi_collapsed_height.get(),
                );
            }
        }
        self.inner.apply_content_geometry_from_view();
    }

    /// Re-establishes the two-height configuration without animating. May
    /// bump the sheet at the next layout when the collapsed height grew.
    /// Idempotent under the same condition as [`Self::animate_to_two_states`].
    pub fn restore_two_states(&self) {
        let Some(controller) = self.inner.controller() else {
            return;
        };
        {
            let mut controller = controller.borrow_mut();
            if !self.inner.has_two_state_heights(&controller) {
                controller.set_peek_heights(
                    self.inner.collapsed_height.get(),
                    self.inner.semi_collapsed_height.get(),
                    false,
                );
            }
        }
        self.inner.apply_content_geometry_from_view();
    }

    /// Animates to the semi-collapsed height as the only resting height.
    pub fn animate_to_semi_collapsed(&self) {
        let Some(controller) = self.inner.controller() else {
            return;
        };
        controller
            .borrow_mut()
            .animate_to_height(self.inner.semi_collapsed_height.get());
        self.inner.apply_content_geometry_from_view();
    }

    /// Installs the semi-collapsed height as the only resting height without
    /// animating.
    pub fn restore_semi_collapsed_state(&self) {
        let Some(controller) = self.inner.controller() else {
            return;
        };
        let semi = self.inner.semi_collapsed_height.get();
        controller.borrow_mut().set_peek_heights(semi, semi, true);
        self.inner.apply_content_geometry_from_view();
    }

    /// Current sheet state, `Hidden` when nothing is attached.
    pub fn state(&self) -> SheetState {
        self.inner
            .controller()
            .map(|controller| controller.borrow().state())
            .unwrap_or(SheetState::Hidden)
    }

    pub fn set_state(&self, state: SheetState) {
        if let Some(controller) = self.inner.controller() {
            controller.borrow_mut().set_state(state);
        }
    }

    /// Call after the host restores persisted state. A sheet restored in the
    /// expanded state replays the slide computation at full offset so chrome
    /// and translation match without waiting for a gesture.
    pub fn on_restore(&self) {
        let (Some(controller), Some(view)) = (self.inner.controller(), self.inner.view()) else {
            return;
        };
        if controller.borrow().state() == SheetState::Expanded {
            self.inner.apply_slide(&view, EXPANDED_SLIDE_OFFSET);
        }
    }

    /// Recomputes content padding and translation from the sheet's current
    /// position, outside of any slide event.
    pub fn refresh_content(&self) {
        self.inner.apply_content_geometry_from_view();
    }
}

impl CoordinatorInner {
    fn controller(&self) -> Option<Rc<RefCell<SheetMotionController>>> {
        self.controller.borrow().upgrade()
    }

    fn view(&self) -> Option<Rc<SheetView>> {
        self.view.borrow().upgrade()
    }

    fn has_two_state_heights(&self, controller: &SheetMotionController) -> bool {
        controller.peek_height_collapsed() == self.collapsed_height.get()
            && controller.peek_height_semi_collapsed() == self.semi_collapsed_height.get()
    }

    fn apply_content_geometry_from_view(&self) {
        if let Some(view) = self.view() {
            self.apply_content_geometry(&view);
        }
    }

    /// Content padding and translation for the current sheet position.
    ///
    /// Once the visible sheet height passes the semi-collapsed height the
    /// values saturate and the sheet simply overlaps the content.
    fn apply_content_geometry(&self, view: &SheetView) {
        let visible = f32::min(view.height() - view.top(), self.semi_collapsed_height.get());
        let translation_y = f32::min(0.0, -(visible - self.collapsed_height.get()) / 2.0);
        let padding_top = f32::max(0.0, self.content_top_inset - translation_y);
        let padding_bottom = f32::max(0.0, visible + translation_y) + self.content_bottom_inset;

        self.sink
            .set_content_padding(self.content_left_inset, padding_top, 0.0, padding_bottom);
        self.sink.set_content_translation_y(translation_y);
        for item in self.sink.floating_items() {
            item.set_translation_y(-visible);
        }
    }

    fn apply_slide(&self, view: &SheetView, slide_offset: f32) {
        self.apply_content_geometry(view);

        let offset = slide_offset.max(0.0);
        let default = self.sink.chrome_color_default();
        let expanded = self.sink.chrome_color_expanded();
        if offset >= CHROME_BLEND_START {
            let fraction = (offset - CHROME_BLEND_START) * 10.0;
            self.sink.set_chrome_color(default.lerp(expanded, fraction));
        } else {
            self.sink.set_chrome_color(default);
        }
        self.sink
            .set_chrome_contrast_icons(offset >= CHROME_CONTRAST_THRESHOLD);
    }
}

impl SheetCallback for CoordinatorInner {
    fn on_state_changed(
        &self,
        sheet: &mut SheetMotionController,
        view: &SheetView,
        new_state: SheetState,
    ) {
        let expanded = new_state == SheetState::Expanded;
        self.sink.set_content_gestures_enabled(!expanded);
        self.sink.set_content_visible(!expanded);

        // Accelerated layers make the motion smoother; drop them at rest.
        let boost = new_state.is_transient();
        self.sink.set_content_render_boost(boost);
        view.set_render_boost(boost);

        sheet.set_auto_init_height();
    }

    fn on_slide(&self, _sheet: &mut SheetMotionController, view: &SheetView, slide_offset: f32) {
        self.apply_slide(view, slide_offset);
    }
}

pub struct CoordinatorBuilder {
    sink: Rc<dyn PresentationSink>,
    collapsed_height: f32,
    semi_collapsed_height: f32,
    content_top_inset: f32,
    content_left_inset: f32,
    content_bottom_inset: f32,
}

impl CoordinatorBuilder {
    pub fn new(sink: Rc<dyn PresentationSink>) -> Self {
        Self {
            sink,
            collapsed_height: 0.0,
            semi_collapsed_height: 0.0,
            content_top_inset: 0.0,
            content_left_inset: 0.0,
            content_bottom_inset: 0.0,
        }
    }

    /// Sheet height when fully collapsed.
    pub fn collapsed_height(mut self, px: f32) -> Self {
        self.collapsed_height = px;
        self
    }

    /// Sheet height when partially collapsed.
    pub fn semi_collapsed_height(mut self, px: f32) -> Self {
        self.semi_collapsed_height = px;
        self
    }

    /// Fixed top padding kept on the content (status bar plus toolbar, in
    /// the typical map host).
    pub fn content_top_inset(mut self, px: f32) -> Self {
        self.content_top_inset = px;
        self
    }

    /// Fixed left padding kept on the content (attribution logo clearance).
    pub fn content_left_inset(mut self, px: f32) -> Self {
        self.content_left_inset = px;
        self
    }

    /// Fixed bottom padding added on top of the derived one.
    pub fn content_bottom_inset(mut self, px: f32) -> Self {
        self.content_bottom_inset = px;
        self
    }

    pub fn build(self) -> SheetPresentationCoordinator {
        SheetPresentationCoordinator {
            inner: Rc::new(CoordinatorInner {
                sink: self.sink,
                collapsed_height: Cell::new(self.collapsed_height),
                semi_collapsed_height: Cell::new(self.semi_collapsed_height),
                content_top_inset: self.content_top_inset,
                content_left_inset: self.content_left_inset,
                content_bottom_inset: self.content_bottom_inset,
                view: RefCell::new(Weak::new()),
                controller: RefCell::new(Weak::new()),
            }),
        }
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
