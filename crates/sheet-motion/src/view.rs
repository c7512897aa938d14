//! Attachment handles.
//!
//! The controller never owns the sheet view; the host does. It holds a weak
//! handle that is re-bound on every layout pass and re-checked on every use,
//! so a detached or recreated view degrades operations to no-ops.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use sheet_gesture::{Bounds, Point};

use crate::controller::SheetMotionController;

/// Host-owned handle for the sheet's view: position, size, and a couple of
/// flags the host polls back out.
pub struct SheetView {
    top: Cell<f32>,
    width: Cell<f32>,
    height: Cell<f32>,
    shown: Cell<bool>,
    render_boost: Cell<bool>,
    layout_requested: Cell<bool>,
    controller: RefCell<Weak<RefCell<SheetMotionController>>>,
}

impl SheetView {
    pub fn new(width: f32, height: f32) -> Rc<Self> {
        Rc::new(Self {
            top: Cell::new(0.0),
            width: Cell::new(width),
            height: Cell::new(height),
            shown: Cell::new(true),
            render_boost: Cell::new(false),
            layout_requested: Cell::new(false),
            controller: RefCell::new(Weak::new()),
        })
    }

    pub fn top(&self) -> f32 {
        self.top.get()
    }

    pub fn set_top(&self, top: f32) {
        self.top.set(top);
    }

    pub fn width(&self) -> f32 {
        self.width.get()
    }

    pub fn height(&self) -> f32 {
        self.height.get()
    }

    pub fn set_size(&self, width: f32, height: f32) {
        self.width.set(width);
        self.height.set(height);
    }

    pub fn is_shown(&self) -> bool {
        self.shown.get()
    }

    pub fn set_shown(&self, shown: bool) {
        self.shown.set(shown);
    }

    /// Performance hint: render this view on its own accelerated layer while
    /// it is animating. Set by the presentation layer, consumed by the host.
    pub fn render_boost(&self) -> bool {
        self.render_boost.get()
    }

    pub fn set_render_boost(&self, enabled: bool) {
        self.render_boost.set(enabled);
    }

    /// Asks the host for another measure/layout pass.
    pub fn request_layout(&self) {
        self.layout_requested.set(true);
    }

    /// Returns and clears the pending layout request.
    pub fn take_layout_request(&self) -> bool {
        self.layout_requested.replace(false)
    }

    /// Whether `point` (parent coordinates) falls on the sheet.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, self.top.get(), self.width.get(), self.top.get() + self.height.get())
    }

    /// Binds the controller driving this view; see
    /// [`SheetMotionController::from_view`].
    pub fn bind_controller(&self, controller: &Rc<RefCell<SheetMotionController>>) {
        *self.controller.borrow_mut() = Rc::downgrade(controller);
    }

    pub(crate) fn controller(&self) -> Option<Rc<RefCell<SheetMotionController>>> {
        self.controller.borrow().upgrade()
    }
}

/// The nearest scrollable descendant of the sheet, for nested-scroll
/// cooperation. Implemented by the host; queried fresh on every use.
pub trait NestedScrollChild {
    /// The child's bounds in parent coordinates.
    fn bounds(&self) -> Bounds;

    /// Whether the content can still scroll toward its top.
    fn can_scroll_up(&self) -> bool;
}
