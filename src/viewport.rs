//! Zoom state and pan delegation.
//!
//! The viewport owns the zoom scale, clamped to `[min_scale, max_scale]`.
//! Panning is not applied here: the controller asks the host to scroll its
//! container and the viewport only records the accumulated offset.

use crate::config::CanvasConfig;
use crate::geometry::Point;
use std::rc::Rc;

/// Visual transform the canvas surface applies after a zoom change.
///
/// The surface is scaled about its origin, so a margin proportional to
/// `scale - 1` keeps the zoom visually centered on the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    pub scale: f32,
    /// Top margin in percent of viewport height
    pub margin_top_percent: f32,
    /// Left margin in percent of viewport width
    pub margin_left_percent: f32,
}

impl SurfaceTransform {
    /// Margins converted to pixels for a viewport of the given size, as (left, top).
    pub fn margin_px(&self, viewport_width: f32, viewport_height: f32) -> (f32, f32) {
        (
            self.margin_left_percent / 100.0 * viewport_width,
            self.margin_top_percent / 100.0 * viewport_height,
        )
    }
}

#[derive(Debug, Clone)]
pub struct ViewportController {
    scale: f32,
    min_scale: f32,
    max_scale: f32,
    wheel_zoom_factor: f32,
    centering_margin_percent: f32,
    scroll_offset: Point,
    width: f32,
    height: f32,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}

impl ViewportController {
    pub fn from_config(config: &CanvasConfig) -> Self {
        let mut viewport = Self {
            scale: 1.0,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            wheel_zoom_factor: config.wheel_zoom_factor,
            centering_margin_percent: config.centering_margin_percent,
            scroll_offset: Point::default(),
            width: config.viewport_width,
            height: config.viewport_height,
        };
        viewport.scale = viewport.clamp_scale(1.0);
        viewport
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn scale_bounds(&self) -> (f32, f32) {
        (self.min_scale, self.max_scale)
    }

    /// Apply a wheel delta and return the transform the surface must apply.
    ///
    /// Negative `wheel_delta_y` (scrolling up) zooms in. Non-finite input is
    /// ignored so the scale can never leave its bounds.
    pub fn zoom(&mut self, wheel_delta_y: f32) -> SurfaceTransform {
        if wheel_delta_y.is_finite() {
            let target = self.scale - wheel_delta_y * self.wheel_zoom_factor;
            self.scale = self.clamp_scale(target);
        }
        self.transform()
    }

    /// Set the scale directly, clamped to the bounds.
    pub fn set_scale(&mut self, scale: f32) -> SurfaceTransform {
        if scale.is_finite() {
            self.scale = self.clamp_scale(scale);
        }
        self.transform()
    }

    pub fn transform(&self) -> SurfaceTransform {
        let margin = (self.scale - 1.0) * self.centering_margin_percent;
        SurfaceTransform {
            scale: self.scale,
            margin_top_percent: margin,
            margin_left_percent: margin,
        }
    }

    /// Record a relative scroll issued to the host container.
    pub fn scroll_by(&mut self, delta: Point) {
        self.scroll_offset = self.scroll_offset + delta;
    }

    /// Sum of all scroll deltas issued so far.
    pub fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    // `f32::clamp` panics on inverted bounds; max/min never does.
    fn clamp_scale(&self, scale: f32) -> f32 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

// === Wheel subscription ===

/// Handle identifying one wheel handler registered on a [`WheelSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WheelConnection(pub u64);

/// A host surface that delivers wheel events (signed vertical delta).
pub trait WheelSource {
    fn connect_wheel(&self, handler: Box<dyn Fn(f32)>) -> WheelConnection;
    fn disconnect_wheel(&self, connection: WheelConnection);
}

/// Live wheel handler on a [`WheelSource`]; disconnects when dropped.
pub struct WheelBinding {
    source: Rc<dyn WheelSource>,
    connection: WheelConnection,
}

impl WheelBinding {
    pub fn new(source: Rc<dyn WheelSource>, handler: Box<dyn Fn(f32)>) -> Self {
        let connection = source.connect_wheel(handler);
        Self { source, connection }
    }

    pub fn connection(&self) -> WheelConnection {
        self.connection
    }
}

impl Drop for WheelBinding {
    fn drop(&mut self) {
        self.source.disconnect_wheel(self.connection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;

    #[test]
    fn test_default_scale_is_one() {
        let viewport = ViewportController::default();
        assert_eq!(viewport.scale(), 1.0);
        assert_eq!(viewport.scale_bounds(), (1.0, 2.0));
    }

    #[test]
    fn test_wheel_up_zooms_in() {
        let mut viewport = ViewportController::default();
        let t = viewport.zoom(-100.0);
        assert_eq!(t.scale, 1.5);
        assert_eq!(viewport.scale(), 1.5);
    }

    #[test]
    fn test_wheel_down_clamps_at_min() {
        let mut viewport = ViewportController::default();
        viewport.zoom(100.0);
        assert_eq!(viewport.scale(), 1.0);
    }

    #[test]
    fn test_large_delta_saturates_at_max() {
        let mut viewport = ViewportController::default();
        viewport.zoom(-100_000.0);
        assert_eq!(viewport.scale(), 2.0);
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let mut viewport = ViewportController::default();
        viewport.zoom(-100.0);
        viewport.zoom(f32::NAN);
        viewport.zoom(f32::NEG_INFINITY);
        assert_eq!(viewport.scale(), 1.5);
    }

    #[test]
    fn test_transform_margins() {
        let mut viewport = ViewportController::default();
        assert_eq!(viewport.transform().margin_top_percent, 0.0);

        let t = viewport.zoom(-200.0);
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.margin_top_percent, 50.0);
        assert_eq!(t.margin_left_percent, 50.0);
        assert_eq!(t.margin_px(1000.0, 600.0), (500.0, 300.0));
    }

    #[test]
    fn test_scroll_offset_accumulates() {
        let mut viewport = ViewportController::default();
        viewport.scroll_by(Point::new(-10.0, 5.0));
        viewport.scroll_by(Point::new(-2.0, -1.0));
        assert_eq!(viewport.scroll_offset(), Point::new(-12.0, 4.0));
    }

    #[test]
    fn test_set_size_rejects_negative() {
        let mut viewport = ViewportController::default();
        viewport.set_size(-5.0, 300.0);
        assert_eq!(viewport.size(), (0.0, 300.0));
    }

    #[derive(Default)]
    struct FakeSurface {
        handlers: RefCell<Vec<(u64, Box<dyn Fn(f32)>)>>,
    }

    impl FakeSurface {
        fn fire(&self, delta: f32) {
            for (_, h) in self.handlers.borrow().iter() {
                h(delta);
            }
        }
    }

    impl WheelSource for FakeSurface {
        fn connect_wheel(&self, handler: Box<dyn Fn(f32)>) -> WheelConnection {
            let id = self.handlers.borrow().len() as u64 + 1;
            self.handlers.borrow_mut().push((id, handler));
            WheelConnection(id)
        }

        fn disconnect_wheel(&self, connection: WheelConnection) {
            self.handlers.borrow_mut().retain(|(id, _)| *id != connection.0);
        }
    }

    #[test]
    fn test_wheel_binding_disconnects_on_drop() {
        let surface = Rc::new(FakeSurface::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let binding = WheelBinding::new(
            surface.clone(),
            Box::new(move |d| sink.borrow_mut().push(d)),
        );
        assert_eq!(binding.connection(), WheelConnection(1));
        surface.fire(-3.0);
        drop(binding);
        surface.fire(-4.0);

        assert_eq!(*seen.borrow(), vec![-3.0]);
        assert!(surface.handlers.borrow().is_empty());
    }

    proptest! {
        #[test]
        fn prop_scale_stays_in_bounds(deltas in proptest::collection::vec(-5000.0f32..5000.0, 0..64)) {
            let mut viewport = ViewportController::default();
            for d in deltas {
                let t = viewport.zoom(d);
                prop_assert!((1.0..=2.0).contains(&t.scale));
                prop_assert!((1.0..=2.0).contains(&viewport.scale()));
            }
        }
    }
}
