use crate::controller::SheetMotionController;
use crate::state::SheetState;
use crate::view::SheetView;

/// Observer for sheet events. At most one callback is active at a time.
///
/// Both hooks run synchronously inside the controller's own mutation, so the
/// controller hands itself back as `&mut`: observers may re-enter documented
/// operations (`set_auto_init_height` in particular) without going through a
/// shared handle that is already borrowed.
pub trait SheetCallback {
    /// Called on every state change with the new state.
    fn on_state_changed(
        &self,
        sheet: &mut SheetMotionController,
        view: &SheetView,
        new_state: SheetState,
    );

    /// Called on every position change during drag, settle, and nested
    /// scroll.
    ///
    /// `slide_offset` is in [-1, 1]: 0 at the larger collapsed height, 1 at
    /// full expansion, negative between the collapsed line and hidden.
    fn on_slide(&self, sheet: &mut SheetMotionController, view: &SheetView, slide_offset: f32);
}
