//! Context-menu requests and guarded event dispatch.
//!
//! Right-clicking a component asks an external menu collaborator to open at
//! a screen position. Rather than a stringly-named global event, consumers
//! register callbacks on a [`ContextMenuHub`]; the hub computes the flipped
//! placement and fans the request out. Callbacks and user widget event
//! handlers run behind a panic guard so a broken handler cannot take the
//! editor down.

use crate::component::ComponentInstance;
use kurbo::{Point, Rect, Size};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Approximate rendered menu dimensions, used for viewport flipping.
const MENU_WIDTH: f64 = 220.0;
const MENU_HEIGHT: f64 = 320.0;
const MENU_MARGIN: f64 = 6.0;

/// A request to open the component context menu at a screen position.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuRequest {
    /// Screen-space x, already flip-adjusted to fit the viewport.
    pub x: f64,
    /// Screen-space y, already flip-adjusted to fit the viewport.
    pub y: f64,
    /// The component the menu operates on.
    pub component: ComponentInstance,
}

/// Place the menu next to the component's screen rectangle.
///
/// The menu opens to the right of the anchor, top-aligned. If it would
/// overflow the right edge it flips to the left side; if it would overflow
/// the bottom it is pushed up to fit.
pub fn place_context_menu(anchor: Rect, viewport: Size) -> Point {
    let mut x = anchor.x1 + MENU_MARGIN;
    let mut y = anchor.y0;

    if x + MENU_WIDTH > viewport.width {
        x = anchor.x0 - MENU_WIDTH - MENU_MARGIN;
    }
    if y + MENU_HEIGHT > viewport.height {
        y = viewport.height - MENU_HEIGHT - MENU_MARGIN;
    }

    Point::new(x, y)
}

/// Run a user-supplied handler, swallowing any panic.
///
/// Widget event handlers and menu callbacks are foreign code as far as the
/// editor is concerned; a panic in one is logged and discarded.
pub fn invoke_guarded<F: FnOnce()>(label: &str, handler: F) {
    if catch_unwind(AssertUnwindSafe(handler)).is_err() {
        log::warn!("handler `{}` panicked; ignoring", label);
    }
}

type MenuCallback = Box<dyn Fn(&ContextMenuRequest)>;

/// Registry of context-menu observers.
#[derive(Default)]
pub struct ContextMenuHub {
    callbacks: Vec<MenuCallback>,
}

impl ContextMenuHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked on every open request.
    pub fn register<F: Fn(&ContextMenuRequest) + 'static>(&mut self, callback: F) {
        self.callbacks.push(Box::new(callback));
    }

    /// Compute the flipped placement and notify all observers.
    pub fn request_open(&self, anchor: Rect, viewport: Size, component: ComponentInstance) {
        let position = place_context_menu(anchor, viewport);
        let request = ContextMenuRequest {
            x: position.x,
            y: position.y,
            component,
        };
        for callback in &self.callbacks {
            invoke_guarded("context-menu callback", || callback(&request));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentInstance, WidgetKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn viewport() -> Size {
        Size::new(1920.0, 1080.0)
    }

    #[test]
    fn test_menu_opens_right_of_anchor() {
        let anchor = Rect::new(100.0, 100.0, 300.0, 200.0);
        let position = place_context_menu(anchor, viewport());
        assert_eq!(position, Point::new(306.0, 100.0));
    }

    #[test]
    fn test_menu_flips_left_near_right_edge() {
        let anchor = Rect::new(1800.0, 100.0, 1900.0, 200.0);
        let position = place_context_menu(anchor, viewport());
        // 1800 - 220 - 6
        assert_eq!(position.x, 1574.0);
        assert_eq!(position.y, 100.0);
    }

    #[test]
    fn test_menu_pushed_up_near_bottom_edge() {
        let anchor = Rect::new(100.0, 900.0, 300.0, 1000.0);
        let position = place_context_menu(anchor, viewport());
        assert_eq!(position.x, 306.0);
        // 1080 - 320 - 6
        assert_eq!(position.y, 754.0);
    }

    #[test]
    fn test_hub_delivers_flipped_request() {
        let mut hub = ContextMenuHub::new();
        let seen: Rc<RefCell<Vec<(f64, f64)>>> = Rc::default();
        let sink = seen.clone();
        hub.register(move |request| sink.borrow_mut().push((request.x, request.y)));

        let component = ComponentInstance::new(WidgetKind::Button, 0.0, 0.0, 120.0, 40.0);
        hub.request_open(Rect::new(100.0, 100.0, 300.0, 200.0), viewport(), component);

        assert_eq!(seen.borrow().as_slice(), &[(306.0, 100.0)]);
    }

    #[test]
    fn test_panicking_callback_does_not_poison_others() {
        let mut hub = ContextMenuHub::new();
        hub.register(|_| panic!("broken handler"));
        let seen: Rc<RefCell<usize>> = Rc::default();
        let sink = seen.clone();
        hub.register(move |_| *sink.borrow_mut() += 1);

        let component = ComponentInstance::new(WidgetKind::Button, 0.0, 0.0, 120.0, 40.0);
        hub.request_open(Rect::new(0.0, 0.0, 100.0, 40.0), viewport(), component);

        assert_eq!(*seen.borrow(), 1);
    }
}
