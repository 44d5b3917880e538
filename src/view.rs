use crate::cursor::Crosshair;
use crate::enums::ViewKind;

use image::RgbaImage;

/// Data-space units removed from each end of an axis per scroll step.
pub const ZOOM_STEP: f64 = 10.0;

/// Narrowest a zoom window may get, in voxels.
pub const MIN_EXTENT: f64 = 1.0;

/// One pane's local axis limits.
///
/// Zoom is strictly view-local: it never touches the cursor or any other
/// pane. The window stays inside the full slice extent and never collapses
/// below [`MIN_EXTENT`] per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomWindow {
    u_lim: (f64, f64),
    v_lim: (f64, f64),
    u_full: f64,
    v_full: f64,
}

impl ZoomWindow {
    /// A window covering the full slice extent.
    pub fn full(u_extent: usize, v_extent: usize) -> Self {
        let u_full = u_extent as f64;
        let v_full = v_extent as f64;
        Self {
            u_lim: (0.0, u_full),
            v_lim: (0.0, v_full),
            u_full,
            v_full,
        }
    }

    pub fn u_lim(&self) -> (f64, f64) {
        self.u_lim
    }

    pub fn v_lim(&self) -> (f64, f64) {
        self.v_lim
    }

    /// Zoom about the window center. Positive steps zoom in; the v-axis step
    /// is scaled by the slice aspect ratio so zoom appears isotropic.
    pub fn zoom_by(&mut self, steps: f64) {
        let du = steps * ZOOM_STEP;
        let dv = du * (self.v_full / self.u_full);
        self.u_lim = Self::shrink(self.u_lim, du, self.u_full);
        self.v_lim = Self::shrink(self.v_lim, dv, self.v_full);
    }

    fn shrink(lim: (f64, f64), delta: f64, full: f64) -> (f64, f64) {
        let (lo, hi) = (lim.0 + delta, lim.1 - delta);
        let width = (hi - lo).clamp(MIN_EXTENT, full);
        let mid = (0.5 * (lo + hi)).clamp(0.5 * width, full - 0.5 * width);
        (mid - 0.5 * width, mid + 0.5 * width)
    }
}

/// One pane of the viewer: its fixed axis convention plus its local zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub kind: ViewKind,
    pub zoom: ZoomWindow,
}

impl View {
    pub fn new(kind: ViewKind, u_extent: usize, v_extent: usize) -> Self {
        Self {
            kind,
            zoom: ZoomWindow::full(u_extent, v_extent),
        }
    }
}

/// Everything the display substrate needs to repaint one pane, computed as a
/// value. Image rows run along the pane's v axis; `invert_v` asks the
/// substrate to draw v increasing upward so anatomy keeps its "up".
#[derive(Debug, Clone, PartialEq)]
pub struct ViewFrame {
    pub kind: ViewKind,
    pub image: RgbaImage,
    pub crosshair: Crosshair,
    pub limits: ZoomWindow,
    pub invert_v: bool,
}

#[cfg(test)]
mod tests {
    use super::{MIN_EXTENT, View, ZOOM_STEP, ZoomWindow};
    use crate::enums::ViewKind;

    #[test]
    fn full_window_covers_the_slice() {
        let window = ZoomWindow::full(64, 128);
        assert_eq!(window.u_lim(), (0.0, 64.0));
        assert_eq!(window.v_lim(), (0.0, 128.0));
    }

    #[test]
    fn zoom_in_is_symmetric_and_aspect_scaled() {
        let mut window = ZoomWindow::full(64, 128);
        window.zoom_by(1.0);
        assert_eq!(window.u_lim(), (ZOOM_STEP, 64.0 - ZOOM_STEP));
        assert_eq!(window.v_lim(), (2.0 * ZOOM_STEP, 128.0 - 2.0 * ZOOM_STEP));
    }

    #[test]
    fn zoom_out_stops_at_the_full_extent() {
        let mut window = ZoomWindow::full(32, 32);
        window.zoom_by(-5.0);
        assert_eq!(window.u_lim(), (0.0, 32.0));
        assert_eq!(window.v_lim(), (0.0, 32.0));
    }

    #[test]
    fn zoom_in_never_collapses_the_window() {
        let mut window = ZoomWindow::full(32, 32);
        for _ in 0..10 {
            window.zoom_by(1.0);
        }
        let (lo, hi) = window.u_lim();
        assert!(hi - lo >= MIN_EXTENT);
        assert!(lo >= 0.0 && hi <= 32.0);
    }

    #[test]
    fn zoom_round_trip_returns_to_full() {
        let mut window = ZoomWindow::full(64, 64);
        window.zoom_by(1.0);
        window.zoom_by(-1.0);
        assert_eq!(window, ZoomWindow::full(64, 64));
    }

    #[test]
    fn views_start_with_full_limits() {
        let view = View::new(ViewKind::Coronal, 10, 20);
        assert_eq!(view.kind, ViewKind::Coronal);
        assert_eq!(view.zoom, ZoomWindow::full(10, 20));
    }
}
