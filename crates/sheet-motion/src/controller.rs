//! The sheet behavior state machine.
//!
//! Owns all sheet geometry and the ephemeral drag session. The host feeds it
//! layout passes, pointer events, nested-scroll deltas, and frame ticks; it
//! moves the attached [`SheetView`] and reports through [`SheetCallback`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use sheet_animation::{SettleTween, SETTLE_DURATION_MS};
use sheet_gesture::{DragSession, PointerEvent, PointerEventKind, PointerId, MAX_FLING_VELOCITY, TOUCH_SLOP};

use crate::callback::SheetCallback;
use crate::error::SheetError;
use crate::saved::SavedGeometry;
use crate::state::SheetState;
use crate::view::{NestedScrollChild, SheetView};

/// Sentinel for [`SheetMotionController::set_peek_height`]: peek at the 16:9
/// keyline of the parent instead of a fixed height.
pub const PEEK_HEIGHT_AUTO: f32 = -1.0;

/// Smallest peek height the auto mode resolves to.
pub const MIN_PEEK_HEIGHT: f32 = 64.0;

/// Projected travel past the collapsed line, as a fraction of the small peek
/// height, beyond which a release hides the sheet.
pub const HIDE_THRESHOLD: f32 = 0.5;

/// Friction applied to release velocity when projecting travel for
/// [`HIDE_THRESHOLD`].
pub const HIDE_FRICTION: f32 = 0.1;

/// Positions closer than this settle immediately instead of animating.
const SETTLE_EPSILON: f32 = 0.5;

/// Initial peek height, fixed or derived from the parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PeekHeight {
    Auto,
    Px(f32),
}

/// Construction-time configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetConfig {
    pub peek_height: PeekHeight,
    pub hideable: bool,
    pub skip_collapsed: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            peek_height: PeekHeight::Auto,
            hideable: false,
            skip_collapsed: false,
        }
    }
}

struct PendingHeights {
    small: f32,
    big: f32,
    initial: f32,
}

struct SettleSession {
    tween: SettleTween,
    target_state: SheetState,
    after: Option<PendingHeights>,
}

struct ReleaseTarget {
    top: f32,
    state: SheetState,
}

pub struct SheetMotionController {
    skip_collapsed: bool,
    hideable: bool,
    drag_enabled: bool,

    peek_height: f32,
    peek_height_auto: bool,
    peek_height_min: f32,
    peek_small: f32,
    peek_big: f32,

    min_offset: f32,
    max_offset: f32,
    parent_width: f32,
    parent_height: f32,
    initial_height: f32,

    state: SheetState,
    pending_state: Option<SheetState>,

    session: Option<DragSession>,
    initial_y: f32,
    ignore_events: bool,
    touching_nested_child: bool,
    active_pointer: Option<PointerId>,

    last_nested_dy: f32,
    nested_scrolled: bool,

    settle: Option<SettleSession>,

    callback: Option<Rc<dyn SheetCallback>>,
    view: Weak<SheetView>,
    nested_child: Option<Weak<dyn NestedScrollChild>>,
}

impl Default for SheetMotionController {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}

impl SheetMotionController {
    pub fn new(config: SheetConfig) -> Self {
        let mut controller = Self {
            skip_collapsed: config.skip_collapsed,
            hideable: config.hideable,
            drag_enabled: true,
            peek_height: 0.0,
            peek_height_auto: false,
            peek_height_min: 0.0,
            peek_small: 0.0,
            peek_big: 0.0,
            min_offset: 0.0,
            max_offset: 0.0,
            parent_width: 0.0,
            parent_height: 0.0,
            initial_height: 0.0,
            state: SheetState::Collapsed,
            pending_state: None,
            session: None,
            initial_y: 0.0,
            ignore_events: false,
            touching_nested_child: false,
            active_pointer: None,
            last_nested_dy: 0.0,
            nested_scrolled: false,
            settle: None,
            callback: None,
            view: Weak::new(),
            nested_child: None,
        };
        match config.peek_height {
            PeekHeight::Auto => controller.set_peek_height(PEEK_HEIGHT_AUTO),
            PeekHeight::Px(px) => controller.set_peek_height(px),
        }
        controller
    }

    /// Convenience for hosts that share the controller with a coordinator.
    pub fn new_shared(config: SheetConfig) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(config)))
    }

    /// Looks up the controller bound to `view`.
    ///
    /// Precondition failure: the view was never attached through a layout
    /// pass and bound via [`SheetView::bind_controller`].
    pub fn from_view(view: &SheetView) -> Result<Rc<RefCell<Self>>, SheetError> {
        view.controller().ok_or(SheetError::NoController)
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    pub fn is_hideable(&self) -> bool {
        self.hideable
    }

    pub fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn skip_collapsed(&self) -> bool {
        self.skip_collapsed
    }

    /// The smaller collapsed peek height.
    pub fn peek_height_collapsed(&self) -> f32 {
        self.peek_small
    }

    /// The larger ("semi-collapsed") peek height.
    pub fn peek_height_semi_collapsed(&self) -> f32 {
        self.peek_big
    }

    /// The explicit peek height, or [`PEEK_HEIGHT_AUTO`] in auto mode.
    pub fn peek_height(&self) -> f32 {
        if self.peek_height_auto {
            PEEK_HEIGHT_AUTO
        } else {
            self.peek_height
        }
    }

    pub fn min_offset(&self) -> f32 {
        self.min_offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn parent_height(&self) -> f32 {
        self.parent_height
    }

    pub fn initial_height(&self) -> f32 {
        self.initial_height
    }

    pub fn set_hideable(&mut self, hideable: bool) {
        self.hideable = hideable;
    }

    pub fn set_skip_collapsed(&mut self, skip_collapsed: bool) {
        self.skip_collapsed = skip_collapsed;
    }

    /// Disabling drag suppresses all touch and nested-scroll handling;
    /// events fall through unconsumed.
    pub fn set_drag_enabled(&mut self, drag_enabled: bool) {
        self.drag_enabled = drag_enabled;
    }

    /// Installs the single active observer, replacing any previous one.
    pub fn set_callback(&mut self, callback: Option<Rc<dyn SheetCallback>>) {
        self.callback = callback;
    }

    /// Initial height used to position the sheet at the next layout pass;
    /// 0 defers to the `max_offset` default.
    pub fn set_initial_height(&mut self, initial_height: f32) {
        self.initial_height = initial_height.max(0.0);
    }

    /// Sets the single collapsed peek height, or [`PEEK_HEIGHT_AUTO`].
    ///
    /// When the sheet rests collapsed, a change requests a host re-layout so
    /// the new height materializes.
    pub fn set_peek_height(&mut self, peek_height: f32) {
        let mut needs_layout = false;
        if peek_height == PEEK_HEIGHT_AUTO {
            if !self.peek_height_auto {
                self.peek_height_auto = true;
                needs_layout = true;
            }
        } else {
            let clamped = peek_height.max(0.0);
            if self.peek_height_auto || self.peek_height != clamped {
                self.peek_height_auto = false;
                self.peek_height = clamped;
                needs_layout = true;
            }
        }
        if needs_layout && self.state == SheetState::Collapsed {
            if let Some(view) = self.view.upgrade() {
                view.request_layout();
            }
        }
    }

    /// Sets both collapsed peek heights; `small` and `big` are clamped to
    /// non-negative and reordered so the pair is never inconsistent.
    ///
    /// With `affect_initial_height`, an initial height below `small` is
    /// raised to `small` (recomputing `max_offset` from the attached view);
    /// an initial height already at or above `small` resets to 0 and defers
    /// to the layout default. Unattached controllers buffer the values; the
    /// next layout pass applies them.
    pub fn set_peek_heights(&mut self, small: f32, big: f32, affect_initial_height: bool) {
        let (small, big) = ordered_pair(small, big);
        self.set_peek_height(small);
        self.peek_small = small;
        self.peek_big = big;

        if affect_initial_height {
            if self.initial_height < small {
                self.initial_height = small;
                if let Some(view) = self.view.upgrade() {
                    self.max_offset = view.height() - small;
                }
            } else {
                self.initial_height = 0.0;
            }
        }
    }

    /// Picks the initial height matching the current collapsed resting
    /// position, so a later layout pass reproduces the same sub-state.
    pub fn set_auto_init_height(&mut self) {
        let Some(view) = self.view.upgrade() else {
            return;
        };
        if self.state != SheetState::Collapsed {
            return;
        }
        let big_top = view.height() - self.peek_big;
        self.initial_height = if (view.top() - big_top).abs() < SETTLE_EPSILON {
            self.peek_big
        } else {
            self.peek_small
        };
    }

    /// Requests an animated transition to a stable state.
    ///
    /// `Collapsed` is always re-appliable: it encodes a layout choice
    /// between the two peek heights. With no view attached the target is
    /// stored (same validity rule) and consumed by the next layout pass.
    pub fn set_state(&mut self, target: SheetState) {
        if target == self.state && target != SheetState::Collapsed {
            return;
        }
        let Some(view) = self.view.upgrade() else {
            match target {
                SheetState::Collapsed | SheetState::Expanded => {
                    self.pending_state = Some(target)
                }
                SheetState::Hidden if self.hideable => self.pending_state = Some(target),
                _ => log::warn!("ignoring transition request to {target:?} before layout"),
            }
            return;
        };
        self.start_settling_to_state(&view, target);
    }

    /// Animates to the absolute visible height `target_px`, then installs
    /// `(small, big)` as the new peek pair without re-running the
    /// affect-initial-height logic and locks `initial_height = target_px`.
    pub fn animate_and_set_heights(&mut self, target_px: f32, small: f32, big: f32) {
        let Some(view) = self.view.upgrade() else {
            return;
        };
        let (small, big) = ordered_pair(small, big);
        let after = PendingHeights {
            small,
            big,
            initial: target_px.max(0.0),
        };
        let target_top = self.parent_height - target_px;
        self.start_settle(&view, target_top, SheetState::Collapsed, Some(after));
    }

    /// Animates to a single height; both peek heights become `target_px`.
    pub fn animate_to_height(&mut self, target_px: f32) {
        self.animate_and_set_heights(target_px, target_px, target_px);
    }

    // ---- layout ----

    /// Runs the layout algorithm for a host measure pass.
    ///
    /// Re-binds the view handle, consumes any pending state, recomputes the
    /// offsets, repositions the view per the current state, and re-resolves
    /// the nested scrolling descendant (its identity may change between
    /// passes).
    pub fn on_layout(
        &mut self,
        view: &Rc<SheetView>,
        parent_width: f32,
        parent_height: f32,
        nested_child: Option<&Rc<dyn NestedScrollChild>>,
    ) {
        if let Some(pending) = self.pending_state.take() {
            log::debug!("applying pending state {pending:?} at layout");
            self.state = pending;
        }

        let saved_top = view.top();
        self.parent_width = parent_width;
        self.parent_height = parent_height;

        let peek = if self.peek_height_auto {
            if self.peek_height_min == 0.0 {
                self.peek_height_min = MIN_PEEK_HEIGHT;
            }
            f32::max(self.peek_height_min, parent_height - parent_width * 9.0 / 16.0)
        } else {
            self.peek_height
        };
        self.min_offset = f32::max(0.0, parent_height - view.height());
        self.max_offset = f32::max(parent_height - peek, self.min_offset);

        match self.state {
            SheetState::Expanded => view.set_top(self.min_offset),
            SheetState::Hidden if self.hideable => view.set_top(parent_height),
            SheetState::Collapsed => {
                let top = if self.initial_height == 0.0 {
                    self.max_offset
                } else {
                    parent_height - self.initial_height
                };
                view.set_top(top);
            }
            // Mid-gesture and mid-settle layouts keep the current position.
            SheetState::Dragging | SheetState::Settling => view.set_top(saved_top),
            SheetState::Hidden => {}
        }

        self.view = Rc::downgrade(view);
        self.nested_child = nested_child.map(Rc::downgrade);
        log::trace!(
            "layout: parent {parent_width}x{parent_height}, offsets [{}, {}], state {:?}",
            self.min_offset,
            self.max_offset,
            self.state
        );
    }

    // ---- touch ----

    /// Decides whether the sheet wants the pointer stream.
    ///
    /// Content wins ties: a gesture that starts over the nested scrolling
    /// child stays with the content until it either stops being able to
    /// scroll or the movement leaves the child past the touch slop.
    pub fn on_intercept_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let Some(view) = self.view.upgrade() else {
            return false;
        };
        if !view.is_shown() || !self.drag_enabled {
            self.ignore_events = true;
            return false;
        }

        if event.kind == PointerEventKind::Down {
            self.session = Some(DragSession::begin(event));
        } else if let Some(session) = &mut self.session {
            session.observe(event);
        }

        match event.kind {
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.touching_nested_child = false;
                self.active_pointer = None;
                if self.ignore_events {
                    self.ignore_events = false;
                    return false;
                }
            }
            PointerEventKind::Down => {
                self.initial_y = event.position.y;
                let over_child = self
                    .nested_child()
                    .is_some_and(|child| child.bounds().contains(event.position));
                if over_child {
                    self.active_pointer = Some(event.id);
                    self.touching_nested_child = true;
                }
                self.ignore_events =
                    self.active_pointer.is_none() && !view.contains(event.position);
            }
            _ => {}
        }

        if !self.ignore_events && event.kind == PointerEventKind::Move {
            let slop_crossed = self
                .session
                .as_ref()
                .is_some_and(|session| !session.is_captured() && session.slop_exceeded(event.position.y));
            if slop_crossed && self.can_capture(event.id) {
                self.capture_drag();
                return true;
            }
        }

        // The sheet may not be the top-most sibling; movement past the slop
        // that is not over the scrolling content grabs it anyway. Gestures
        // over the content are left to nested-scroll handling.
        let over_child = self
            .nested_child()
            .is_some_and(|child| child.bounds().contains(event.position));
        event.kind == PointerEventKind::Move
            && self.nested_child.is_some()
            && !self.ignore_events
            && self.state != SheetState::Dragging
            && !over_child
            && (self.initial_y - event.position.y).abs() > TOUCH_SLOP
    }

    /// Handles a pointer event routed to the sheet after interception.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let Some(view) = self.view.upgrade() else {
            return false;
        };
        if !view.is_shown() || !self.drag_enabled {
            return false;
        }
        if self.state == SheetState::Dragging && event.kind == PointerEventKind::Down {
            return true;
        }

        if event.kind == PointerEventKind::Down && self.session.is_none() {
            self.initial_y = event.position.y;
            self.session = Some(DragSession::begin(event));
        }
        let dy = match (&mut self.session, event.kind) {
            (Some(session), kind) if kind != PointerEventKind::Down => session.observe(event),
            _ => 0.0,
        };

        match event.kind {
            PointerEventKind::Move if !self.ignore_events => {
                let captured = self.session.as_ref().is_some_and(DragSession::is_captured);
                if !captured && (self.initial_y - event.position.y).abs() > TOUCH_SLOP {
                    self.capture_drag();
                }
                if self.session.as_ref().is_some_and(DragSession::is_captured) && dy != 0.0 {
                    self.drag_by(&view, dy);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let captured = self.session.as_ref().is_some_and(DragSession::is_captured);
                if captured {
                    let velocity = if event.kind == PointerEventKind::Up {
                        self.session
                            .as_ref()
                            .map(|session| session.vertical_velocity(MAX_FLING_VELOCITY))
                            .unwrap_or(0.0)
                    } else {
                        0.0
                    };
                    self.release_drag(&view, velocity);
                }
                self.session = None;
                self.touching_nested_child = false;
                self.active_pointer = None;
            }
            _ => {}
        }
        !self.ignore_events
    }

    // ---- nested scroll ----

    /// Start of a nested scroll; only vertical scrolls participate, and only
    /// while drag is enabled.
    pub fn on_start_nested_scroll(&mut self, vertical: bool) -> bool {
        self.last_nested_dy = 0.0;
        self.nested_scrolled = false;
        vertical && self.drag_enabled
    }

    /// Offers a scroll delta to the sheet before the content consumes it.
    ///
    /// `dy > 0` scrolls up. Returns the amount consumed by moving the sheet.
    /// While moving down and the content can still scroll toward its top,
    /// the sheet either follows (below the collapsed line or when hideable)
    /// or pins at `max_offset` and the content keeps the remainder.
    pub fn on_nested_pre_scroll(&mut self, target: &Rc<dyn NestedScrollChild>, dy: f32) -> f32 {
        let Some(view) = self.view.upgrade() else {
            return 0.0;
        };
        if !self.is_nested_child(target) {
            return 0.0;
        }

        let current_top = view.top();
        let new_top = current_top - dy;
        let mut consumed = 0.0;

        if dy > 0.0 {
            // Upward
            if new_top < self.min_offset {
                consumed = current_top - self.min_offset;
                view.set_top(self.min_offset);
                self.set_state_internal(SheetState::Expanded);
            } else {
                consumed = dy;
                view.set_top(new_top);
                self.set_state_internal(SheetState::Dragging);
            }
        } else if dy < 0.0 {
            // Downward
            if target.can_scroll_up() {
                if new_top <= self.max_offset || self.hideable {
                    consumed = dy;
                    view.set_top(new_top);
                    self.set_state_internal(SheetState::Dragging);
                } else {
                    consumed = current_top - self.max_offset;
                    view.set_top(self.max_offset);
                    self.set_state_internal(SheetState::Collapsed);
                }
            }
        }

        self.dispatch_slide(view.top());
        self.last_nested_dy = dy;
        self.nested_scrolled = true;
        consumed
    }

    /// End of a nested scroll: applies the release policy with the last
    /// scroll direction standing in for fling velocity. A sheet already at
    /// `min_offset` is forced Expanded unconditionally.
    pub fn on_stop_nested_scroll(&mut self, target: &Rc<dyn NestedScrollChild>) {
        let Some(view) = self.view.upgrade() else {
            return;
        };
        if view.top() == self.min_offset {
            self.set_state_internal(SheetState::Expanded);
            return;
        }
        if !self.is_nested_child(target) || !self.nested_scrolled {
            return;
        }

        // dy > 0 is upward; the release table reads negative as up.
        let target_release = self.release_target(&view, -self.last_nested_dy);
        self.start_settle(&view, target_release.top, target_release.state, None);
        self.nested_scrolled = false;
    }

    /// Whether the sheet claims a fling instead of the content. Expanded
    /// sheets let the content fling itself.
    pub fn on_nested_pre_fling(&self, target: &Rc<dyn NestedScrollChild>) -> bool {
        self.is_nested_child(target) && self.state != SheetState::Expanded
    }

    // ---- settle ----

    /// Advances an in-flight settle by one frame tick. Returns true while
    /// more ticks are needed; on the final tick the target state commits.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let Some(view) = self.view.upgrade() else {
            self.settle = None;
            return false;
        };
        let Some(mut session) = self.settle.take() else {
            return false;
        };

        let (top, finished) = session.tween.value_at(frame_time_nanos);
        view.set_top(top);
        self.dispatch_slide(top);

        if finished {
            if let Some(after) = session.after.take() {
                self.set_peek_heights(after.small, after.big, false);
                self.initial_height = after.initial;
            }
            self.set_state_internal(session.target_state);
            false
        } else {
            self.settle = Some(session);
            true
        }
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    // ---- persistence ----

    /// Snapshots the state that survives a destroy/recreate cycle.
    pub fn save_geometry(&self, ancestor: Option<String>) -> SavedGeometry {
        SavedGeometry {
            state: self.state,
            peek_height_big: self.peek_big,
            peek_height_small: self.peek_small,
            initial_height: self.initial_height,
            ancestor,
        }
    }

    /// Restores a snapshot; transient states normalize to `Collapsed`.
    pub fn restore_geometry(&mut self, saved: &SavedGeometry) {
        self.state = if saved.state.is_transient() {
            SheetState::Collapsed
        } else {
            saved.state
        };
        self.peek_big = saved.peek_height_big;
        self.peek_small = saved.peek_height_small;
        self.peek_height = saved.peek_height_small;
        self.peek_height_auto = false;
        self.initial_height = saved.initial_height;
    }

    // ---- internals ----

    fn nested_child(&self) -> Option<Rc<dyn NestedScrollChild>> {
        self.nested_child.as_ref().and_then(Weak::upgrade)
    }

    fn is_nested_child(&self, target: &Rc<dyn NestedScrollChild>) -> bool {
        self.nested_child()
            .is_some_and(|child| Rc::as_ptr(&child) as *const () == Rc::as_ptr(target) as *const ())
    }

    fn can_capture(&self, pointer: PointerId) -> bool {
        if self.state == SheetState::Dragging {
            return false;
        }
        if self.touching_nested_child {
            return false;
        }
        if self.state == SheetState::Expanded && self.active_pointer == Some(pointer) {
            // Content keeps priority while it can still scroll up.
            if let Some(child) = self.nested_child() {
                if child.can_scroll_up() {
                    return false;
                }
            }
        }
        true
    }

    fn capture_drag(&mut self) {
        // A grab supersedes any in-flight settle.
        self.settle = None;
        if let Some(session) = &mut self.session {
            session.capture();
        }
        self.set_state_internal(SheetState::Dragging);
    }

    fn drag_by(&mut self, view: &Rc<SheetView>, dy: f32) {
        let max = if self.hideable {
            self.parent_height
        } else {
            self.max_offset
        };
        let new_top = (view.top() + dy).clamp(self.min_offset, max);
        if new_top != view.top() {
            view.set_top(new_top);
            self.dispatch_slide(new_top);
        }
    }

    fn release_drag(&mut self, view: &Rc<SheetView>, velocity: f32) {
        let target = self.release_target(view, velocity);
        self.start_settle(view, target.top, target.state, None);
    }

    /// The release-policy table: where the sheet settles for a given
    /// position and release velocity (negative is up).
    fn release_target(&self, view: &SheetView, velocity: f32) -> ReleaseTarget {
        let px_from_bottom = view.height() - view.top();
        if velocity < 0.0 {
            self.release_moving_up(view, px_from_bottom)
        } else if self.hideable && self.should_hide(view.top(), velocity) {
            ReleaseTarget {
                top: self.parent_height,
                state: SheetState::Hidden,
            }
        } else if velocity == 0.0 {
            self.release_without_fling(view, px_from_bottom)
        } else {
            self.release_moving_down(view, px_from_bottom)
        }
    }

    fn release_moving_up(&self, view: &SheetView, px_from_bottom: f32) -> ReleaseTarget {
        if px_from_bottom > self.peek_big {
            ReleaseTarget {
                top: self.min_offset,
                state: SheetState::Expanded,
            }
        } else {
            ReleaseTarget {
                top: view.height() - self.peek_big,
                state: SheetState::Collapsed,
            }
        }
    }

    fn release_without_fling(&self, view: &SheetView, px_from_bottom: f32) -> ReleaseTarget {
        if px_from_bottom > 0.0 && px_from_bottom < self.peek_big {
            ReleaseTarget {
                top: view.height() - self.peek_small,
                state: SheetState::Collapsed,
            }
        } else if px_from_bottom < self.peek_big {
            ReleaseTarget {
                top: view.height() - self.peek_big,
                state: SheetState::Collapsed,
            }
        } else {
            ReleaseTarget {
                top: self.min_offset,
                state: SheetState::Expanded,
            }
        }
    }

    fn release_moving_down(&self, view: &SheetView, px_from_bottom: f32) -> ReleaseTarget {
        if px_from_bottom > 0.0 && px_from_bottom < self.peek_big {
            ReleaseTarget {
                top: self.max_offset,
                state: SheetState::Collapsed,
            }
        } else {
            ReleaseTarget {
                top: view.height() - self.peek_big,
                state: SheetState::Collapsed,
            }
        }
    }

    fn should_hide(&self, top: f32, velocity: f32) -> bool {
        if self.skip_collapsed {
            return true;
        }
        if top < self.max_offset {
            // Still above the collapsed line; collapse, never hide.
            return false;
        }
        if self.peek_small <= f32::EPSILON {
            return true;
        }
        let projected_top = top + velocity * HIDE_FRICTION;
        (projected_top - self.max_offset).abs() / self.peek_small > HIDE_THRESHOLD
    }

    fn start_settling_to_state(&mut self, view: &Rc<SheetView>, target: SheetState) {
        let top = match target {
            SheetState::Collapsed => {
                let big_top = view.height() - self.peek_big;
                // Re-applying Collapsed at the big height drops to the small
                // one.
                if (view.top() - big_top).abs() < SETTLE_EPSILON {
                    view.height() - self.peek_small
                } else {
                    big_top
                }
            }
            SheetState::Expanded => self.min_offset,
            SheetState::Hidden if self.hideable => self.parent_height,
            _ => {
                log::warn!("ignoring transition request to {target:?}");
                return;
            }
        };
        self.start_settle(view, top, target, None);
    }

    fn start_settle(
        &mut self,
        view: &Rc<SheetView>,
        target_top: f32,
        target_state: SheetState,
        after: Option<PendingHeights>,
    ) {
        let current_top = view.top();
        if (current_top - target_top).abs() < SETTLE_EPSILON {
            view.set_top(target_top);
            if let Some(after) = after {
                self.set_peek_heights(after.small, after.big, false);
                self.initial_height = after.initial;
            }
            self.set_state_internal(target_state);
            return;
        }

        log::trace!("settling from {current_top} to {target_top} ({target_state:?})");
        self.settle = Some(SettleSession {
            tween: SettleTween::new(current_top, target_top, SETTLE_DURATION_MS),
            target_state,
            after,
        });
        self.set_state_internal(SheetState::Settling);
    }

    fn set_state_internal(&mut self, state: SheetState) {
        if self.state == state {
            return;
        }
        log::debug!("state {:?} -> {state:?}", self.state);
        self.state = state;
        let (Some(view), Some(callback)) = (self.view.upgrade(), self.callback.clone()) else {
            return;
        };
        callback.on_state_changed(self, &view, state);
    }

    fn dispatch_slide(&mut self, top: f32) {
        let (Some(view), Some(callback)) = (self.view.upgrade(), self.callback.clone()) else {
            return;
        };
        let collapsed_top = self.parent_height - self.peek_big;
        let offset = if top > collapsed_top {
            // Between the collapsed line and hidden.
            let hidden_range = self.parent_height - collapsed_top;
            if hidden_range > 0.0 {
                (collapsed_top - top) / hidden_range
            } else {
                -1.0
            }
        } else {
            let expanded_range = collapsed_top - self.min_offset;
            if expanded_range > 0.0 {
                (collapsed_top - top) / expanded_range
            } else {
                0.0
            }
        };
        callback.on_slide(self, &view, offset);
    }
}

fn ordered_pair(small: f32, big: f32) -> (f32, f32) {
    let small = small.max(0.0);
    let big = big.max(0.0);
    if small <= big {
        (small, big)
    } else {
        (big, small)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
