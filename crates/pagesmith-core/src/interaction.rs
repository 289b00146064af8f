//! Drag and resize interactions.
//!
//! Raw pointer-move events can arrive faster than the display refreshes.
//! The controller therefore stages at most one pending store update at a
//! time: each new pointer computation replaces the staged one, and the host
//! drains the slot once per frame via [`DragController::on_frame`].
//! Pointer-up always commits synchronously (with grid snapping when
//! enabled) so the committed state is never stale relative to the last
//! pointer event.

use crate::component::{ComponentId, ComponentPatch};
use crate::geometry::{clamp_origin, MIN_COMPONENT_SIZE};
use crate::store::DocumentStore;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Phase of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    /// No pointer capture.
    #[default]
    Idle,
    /// Pointer is down and moving; provisional updates are flowing.
    Active,
    /// Pointer released; the final value has been committed.
    Committed,
}

/// The eight resize handle directions. Handles are only shown for the
/// selected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeDirection {
    /// All directions, in the order the handles are laid out.
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::Nw,
        ResizeDirection::Ne,
        ResizeDirection::Sw,
        ResizeDirection::Se,
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::W,
        ResizeDirection::E,
    ];

    fn has_east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    fn has_west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    fn has_north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    fn has_south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }
}

/// Compute a moved origin from the interaction start state.
/// The result is clamped so the component stays on the canvas.
pub fn apply_move(start_origin: Point, delta: Vec2) -> Point {
    clamp_origin(Point::new(start_origin.x + delta.x, start_origin.y + delta.y))
}

/// Compute resized geometry from the interaction start state.
///
/// East/south handles grow width/height directly. West/north handles shrink
/// while shifting the origin so the opposite edge stays fixed; the
/// effective delta is clamped at the minimum size, never rejected.
pub fn apply_resize(start: Rect, direction: ResizeDirection, delta: Vec2) -> Rect {
    let start_width = start.width();
    let start_height = start.height();
    let mut x = start.x0;
    let mut y = start.y0;
    let mut width = start_width;
    let mut height = start_height;

    if direction.has_east() {
        width = (start_width + delta.x).max(MIN_COMPONENT_SIZE);
    }
    if direction.has_south() {
        height = (start_height + delta.y).max(MIN_COMPONENT_SIZE);
    }
    if direction.has_west() {
        // Clamp the delta itself so the east edge stays fixed even when
        // the minimum size kicks in.
        let dx = delta.x.min(start_width - MIN_COMPONENT_SIZE);
        width = start_width - dx;
        x = start.x0 + dx;
    }
    if direction.has_north() {
        let dy = delta.y.min(start_height - MIN_COMPONENT_SIZE);
        height = start_height - dy;
        y = start.y0 + dy;
    }

    Rect::new(x, y, x + width, y + height)
}

/// What the active interaction manipulates.
#[derive(Debug, Clone, Copy, PartialEq)]
enum InteractionKind {
    Move { start_origin: Point },
    Resize { start: Rect, direction: ResizeDirection },
}

/// A staged, not-yet-committed store update.
#[derive(Debug, Clone, PartialEq)]
struct PendingUpdate {
    component_id: ComponentId,
    patch: ComponentPatch,
}

/// State of the interaction in flight.
#[derive(Debug, Clone)]
struct ActiveInteraction {
    component_id: ComponentId,
    kind: InteractionKind,
    start_pointer: Point,
}

/// Translates pointer events into throttled position/size updates.
///
/// One controller drives one interaction at a time; beginning a new one
/// cancels whatever the previous interaction still had staged
/// (cancel-and-replace, never stack).
#[derive(Debug, Clone, Default)]
pub struct DragController {
    phase: InteractionPhase,
    active: Option<ActiveInteraction>,
    pending: Option<PendingUpdate>,
}

impl DragController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    /// Whether an update is staged for the next frame.
    pub fn has_pending_update(&self) -> bool {
        self.pending.is_some()
    }

    /// Pointer-down on a component body: start a move.
    /// No-op when the component does not resolve on the current page.
    pub fn begin_move(&mut self, store: &DocumentStore, id: &str, pointer: Point) {
        let Some(component) = store.component(id) else {
            return;
        };
        self.pending = None;
        self.active = Some(ActiveInteraction {
            component_id: component.id.clone(),
            kind: InteractionKind::Move {
                start_origin: component.origin(),
            },
            start_pointer: pointer,
        });
        self.phase = InteractionPhase::Active;
    }

    /// Pointer-down on a resize handle: start a resize.
    pub fn begin_resize(
        &mut self,
        store: &DocumentStore,
        id: &str,
        direction: ResizeDirection,
        pointer: Point,
    ) {
        let Some(component) = store.component(id) else {
            return;
        };
        self.pending = None;
        self.active = Some(ActiveInteraction {
            component_id: component.id.clone(),
            kind: InteractionKind::Resize {
                start: component.bounds(),
                direction,
            },
            start_pointer: pointer,
        });
        self.phase = InteractionPhase::Active;
    }

    /// Pointer moved: stage a provisional update, replacing any staged one.
    pub fn pointer_moved(&mut self, pointer: Point) {
        let Some(active) = &self.active else {
            return;
        };
        let patch = Self::compute_patch(active, pointer, None);
        self.pending = Some(PendingUpdate {
            component_id: active.component_id.clone(),
            patch,
        });
    }

    /// Frame tick: flush the staged update into the store, if any.
    /// At most one store mutation happens per call, using the latest
    /// computed value.
    pub fn on_frame(&mut self, store: &mut DocumentStore) {
        if let Some(update) = self.pending.take() {
            store.update_component(&update.component_id, &update.patch);
        }
    }

    /// Pointer released (or left the canvas): commit the final value
    /// synchronously, applying grid snapping per axis when enabled.
    pub fn pointer_released(&mut self, store: &mut DocumentStore, pointer: Point) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.pending = None;

        let settings = store.settings;
        let patch = Self::compute_patch(&active, pointer, Some(&settings));
        store.update_component(&active.component_id, &patch);
        self.phase = InteractionPhase::Committed;
    }

    /// Cancel the interaction without committing (e.g. Escape).
    pub fn cancel(&mut self) {
        self.active = None;
        self.pending = None;
        self.phase = InteractionPhase::Idle;
    }

    fn compute_patch(
        active: &ActiveInteraction,
        pointer: Point,
        snap: Option<&crate::geometry::CanvasSettings>,
    ) -> ComponentPatch {
        let delta = Vec2::new(
            pointer.x - active.start_pointer.x,
            pointer.y - active.start_pointer.y,
        );
        match active.kind {
            InteractionKind::Move { start_origin } => {
                let mut origin = apply_move(start_origin, delta);
                if let Some(settings) = snap {
                    origin.x = settings.snap_if_enabled(origin.x);
                    origin.y = settings.snap_if_enabled(origin.y);
                }
                ComponentPatch::position(origin.x, origin.y)
            }
            InteractionKind::Resize { start, direction } => {
                let rect = apply_resize(start, direction, delta);
                let (mut x, mut y) = (rect.x0, rect.y0);
                let (mut width, mut height) = (rect.width(), rect.height());
                if let Some(settings) = snap {
                    x = settings.snap_if_enabled(x);
                    y = settings.snap_if_enabled(y);
                    width = settings.snap_if_enabled(width);
                    height = settings.snap_if_enabled(height);
                }
                ComponentPatch::geometry(x, y, width, height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentInstance, WidgetKind};

    fn store_with_component(x: f64, y: f64, w: f64, h: f64) -> (DocumentStore, String) {
        let mut store = DocumentStore::new();
        let instance = ComponentInstance::new(WidgetKind::Card, x, y, w, h);
        let id = instance.id.clone();
        store.add_component(instance);
        (store, id)
    }

    #[test]
    fn test_move_clamps_to_canvas() {
        let moved = apply_move(Point::new(10.0, 10.0), Vec2::new(-50.0, 5.0));
        assert_eq!(moved, Point::new(0.0, 15.0));
    }

    #[test]
    fn test_resize_east_grows_width() {
        let rect = apply_resize(
            Rect::new(100.0, 100.0, 180.0, 160.0),
            ResizeDirection::E,
            Vec2::new(25.0, 999.0),
        );
        assert_eq!(rect.width(), 105.0);
        assert_eq!(rect.height(), 60.0);
        assert_eq!((rect.x0, rect.y0), (100.0, 100.0));
    }

    #[test]
    fn test_resize_nw_shifts_origin() {
        // Dragging the north-west handle outward grows the component and
        // moves its origin so the south-east corner stays put.
        let rect = apply_resize(
            Rect::new(100.0, 100.0, 180.0, 160.0),
            ResizeDirection::Nw,
            Vec2::new(-30.0, -10.0),
        );
        assert_eq!(rect.width(), 110.0);
        assert_eq!(rect.height(), 70.0);
        assert_eq!((rect.x0, rect.y0), (70.0, 90.0));
        // South-east corner unchanged.
        assert_eq!((rect.x1, rect.y1), (180.0, 160.0));
    }

    #[test]
    fn test_resize_never_goes_below_floor() {
        for direction in ResizeDirection::ALL {
            for delta in [
                Vec2::new(-500.0, -500.0),
                Vec2::new(500.0, -500.0),
                Vec2::new(-500.0, 500.0),
                Vec2::new(70.0, 45.0),
            ] {
                let rect = apply_resize(Rect::new(50.0, 50.0, 130.0, 110.0), direction, delta);
                assert!(rect.width() >= MIN_COMPONENT_SIZE, "{direction:?} {delta:?}");
                assert!(rect.height() >= MIN_COMPONENT_SIZE, "{direction:?} {delta:?}");
            }
        }
    }

    #[test]
    fn test_resize_west_clamp_keeps_east_edge_fixed() {
        let start = Rect::new(100.0, 100.0, 180.0, 160.0);
        let rect = apply_resize(start, ResizeDirection::W, Vec2::new(500.0, 0.0));
        assert_eq!(rect.width(), MIN_COMPONENT_SIZE);
        assert_eq!(rect.x1, start.x1);
    }

    #[test]
    fn test_pointer_moves_coalesce_to_one_update_per_frame() {
        let (mut store, id) = store_with_component(10.0, 10.0, 120.0, 40.0);
        let mut controller = DragController::new();

        controller.begin_move(&store, &id, Point::new(0.0, 0.0));
        controller.pointer_moved(Point::new(3.0, 3.0));
        controller.pointer_moved(Point::new(7.0, 7.0));
        controller.pointer_moved(Point::new(12.0, 9.0));

        // Nothing hits the store until the frame tick.
        assert_eq!(store.component(&id).unwrap().x, 10.0);
        assert!(controller.has_pending_update());

        controller.on_frame(&mut store);
        let component = store.component(&id).unwrap();
        // Only the latest computation is applied.
        assert_eq!((component.x, component.y), (22.0, 19.0));

        // Slot is drained; the next frame mutates nothing.
        assert!(!controller.has_pending_update());
        controller.on_frame(&mut store);
        assert_eq!(store.component(&id).unwrap().x, 22.0);
    }

    #[test]
    fn test_release_commits_with_snap() {
        let (mut store, id) = store_with_component(50.0, 70.0, 120.0, 40.0);
        store.update_grid_settings(Some(20.0), Some(true));
        let mut controller = DragController::new();

        // Move by (+3, +7): raw position (53, 77) snaps to (60, 80).
        controller.begin_move(&store, &id, Point::new(0.0, 0.0));
        controller.pointer_moved(Point::new(3.0, 7.0));
        controller.pointer_released(&mut store, Point::new(3.0, 7.0));

        let component = store.component(&id).unwrap();
        assert_eq!((component.x, component.y), (60.0, 80.0));
        assert_eq!(controller.phase(), InteractionPhase::Committed);
    }

    #[test]
    fn test_release_without_snap_commits_raw_value() {
        let (mut store, id) = store_with_component(50.0, 70.0, 120.0, 40.0);
        store.update_grid_settings(None, Some(false));
        let mut controller = DragController::new();

        controller.begin_move(&store, &id, Point::new(0.0, 0.0));
        controller.pointer_released(&mut store, Point::new(3.0, 7.0));

        let component = store.component(&id).unwrap();
        assert_eq!((component.x, component.y), (53.0, 77.0));
    }

    #[test]
    fn test_release_ignores_stale_pending_update() {
        let (mut store, id) = store_with_component(0.0, 0.0, 120.0, 40.0);
        store.update_grid_settings(None, Some(false));
        let mut controller = DragController::new();

        controller.begin_move(&store, &id, Point::new(0.0, 0.0));
        controller.pointer_moved(Point::new(5.0, 5.0));
        // Release at a later position without a frame in between; the
        // staged (5, 5) update must not fire afterwards.
        controller.pointer_released(&mut store, Point::new(30.0, 30.0));
        controller.on_frame(&mut store);

        let component = store.component(&id).unwrap();
        assert_eq!((component.x, component.y), (30.0, 30.0));
    }

    #[test]
    fn test_new_interaction_cancels_staged_update() {
        let (mut store, id) = store_with_component(0.0, 0.0, 120.0, 40.0);
        let other = ComponentInstance::new(WidgetKind::Text, 300.0, 300.0, 100.0, 30.0);
        let other_id = other.id.clone();
        store.add_component(other);
        store.update_grid_settings(None, Some(false));
        let mut controller = DragController::new();

        controller.begin_move(&store, &id, Point::new(0.0, 0.0));
        controller.pointer_moved(Point::new(50.0, 50.0));
        // Pointer-down on another component before the frame fired.
        controller.begin_move(&store, &other_id, Point::new(0.0, 0.0));
        controller.on_frame(&mut store);

        // The first component never received the orphaned update.
        assert_eq!(store.component(&id).unwrap().x, 0.0);
        assert_eq!(store.component(&other_id).unwrap().x, 300.0);
    }

    #[test]
    fn test_resize_commit_snaps_all_axes() {
        let (mut store, id) = store_with_component(40.0, 40.0, 120.0, 40.0);
        store.update_grid_settings(Some(20.0), Some(true));
        let mut controller = DragController::new();

        controller.begin_resize(&store, &id, ResizeDirection::Se, Point::new(0.0, 0.0));
        controller.pointer_released(&mut store, Point::new(13.0, 27.0));

        let component = store.component(&id).unwrap();
        // width 133 -> 140, height 67 -> 60.
        assert_eq!((component.width, component.height), (140.0, 60.0));
        assert_eq!((component.x, component.y), (40.0, 40.0));
    }

    #[test]
    fn test_begin_on_missing_component_is_noop() {
        let mut store = DocumentStore::new();
        let mut controller = DragController::new();
        controller.begin_move(&store, "missing", Point::new(0.0, 0.0));
        controller.pointer_moved(Point::new(10.0, 10.0));
        controller.pointer_released(&mut store, Point::new(10.0, 10.0));
        assert_eq!(controller.phase(), InteractionPhase::Idle);
    }

    #[test]
    fn test_cancel_discards_everything() {
        let (mut store, id) = store_with_component(10.0, 10.0, 120.0, 40.0);
        let mut controller = DragController::new();

        controller.begin_move(&store, &id, Point::new(0.0, 0.0));
        controller.pointer_moved(Point::new(40.0, 40.0));
        controller.cancel();
        controller.on_frame(&mut store);

        assert_eq!(store.component(&id).unwrap().x, 10.0);
        assert_eq!(controller.phase(), InteractionPhase::Idle);
    }
}
