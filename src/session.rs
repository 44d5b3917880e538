use crate::cursor::{Crosshair, Cursor};
use crate::display::DisplaySink;
use crate::enums::ViewKind;
use crate::layout::Layout;
use crate::orientation::{self, OrientationError};
use crate::render::{self, IntensityWindow};
use crate::resample;
use crate::router::{self, Action, InputEvent};
use crate::view::{View, ViewFrame};
use crate::volume::{self, Volume};

use ndarray::{Array2, Array3, ArrayView2};
use thiserror::Error;

/// Edge length of the common cubic grid both scans are resampled onto.
pub const DEFAULT_GRID_SIZE: usize = 256;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("anatomical volume: {0}")]
    PrimaryOrientation(#[source] OrientationError),

    #[error("overlay volume: {0}")]
    SecondaryOrientation(#[source] OrientationError),
}

/// Startup knobs; contrast itself has no runtime UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub grid_size: usize,
    /// Percentile window for the anatomical grayscale.
    pub primary_percentiles: (f64, f64),
    /// Fixed clip for the overlay before color mapping; the default picks
    /// out dense material such as electrode contacts on CT.
    pub overlay_window: IntensityWindow,
    pub overlay_alpha: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            primary_percentiles: (1.0, 99.0),
            overlay_window: IntensityWindow::new(1000.0, 3000.0),
            overlay_alpha: 0.5,
        }
    }
}

/// What one handled event invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Cursor moved: every pane's image and crosshairs.
    Everything,
    /// Only this pane's axis limits changed.
    View(ViewKind),
    Nothing,
}

/// One viewing session over a pair of co-registered scans.
///
/// Owns all mutable interaction state (cursor, per-pane zoom); the resampled
/// grids are read-only for the session's lifetime. Events are applied one at
/// a time and each is fully rendered before the next, so the four panes are
/// never observed mid-update.
pub struct ViewerSession {
    primary: Array3<f32>,
    secondary: Array3<f32>,
    /// Maximum-intensity projection of the overlay, fixed at startup.
    projection: Array2<f32>,
    primary_window: IntensityWindow,
    projection_window: IntensityWindow,
    overlay_window: IntensityWindow,
    overlay_alpha: f32,
    cursor: Cursor,
    views: [View; 4],
    layout: Layout,
}

impl ViewerSession {
    /// Build a session: orient both scans into the shared anatomical axis
    /// convention, resample them onto the common cubic grid, fix the
    /// contrast windows, and center the cursor.
    ///
    /// # Errors
    ///
    /// Fails only on a degenerate affine; nothing after construction can
    /// fail.
    pub fn new(
        primary: Volume,
        secondary: Volume,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let n = config.grid_size;
        let target = (n, n, n);

        let oriented_primary = orientation::normalize(primary.data, &primary.affine)
            .map_err(SessionError::PrimaryOrientation)?;
        let oriented_secondary = orientation::normalize(secondary.data, &secondary.affine)
            .map_err(SessionError::SecondaryOrientation)?;

        let primary_grid = resample::to_shape(oriented_primary, target);
        let secondary_grid = resample::to_shape(oriented_secondary, target);

        let projection =
            volume::max_projection(&secondary_grid, ViewKind::Projection.normal_axis());
        let (lo_pct, hi_pct) = config.primary_percentiles;
        let primary_window = IntensityWindow::from_percentiles(&primary_grid, lo_pct, hi_pct);
        let projection_window = IntensityWindow::from_percentiles(&projection, 0.0, 100.0);

        Ok(Self {
            primary: primary_grid,
            secondary: secondary_grid,
            projection,
            primary_window,
            projection_window,
            overlay_window: config.overlay_window,
            overlay_alpha: config.overlay_alpha,
            cursor: Cursor::centered([n, n, n]),
            views: ViewKind::ALL.map(|kind| View::new(kind, n, n)),
            layout: Layout::default(),
        })
    }

    pub fn cursor(&self) -> [usize; 3] {
        self.cursor.index()
    }

    pub fn grid_shape(&self) -> (usize, usize, usize) {
        self.primary.dim()
    }

    pub fn primary(&self) -> &Array3<f32> {
        &self.primary
    }

    pub fn secondary(&self) -> &Array3<f32> {
        &self.secondary
    }

    pub fn view(&self, kind: ViewKind) -> &View {
        &self.views[Self::view_slot(kind)]
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The anatomical slice a pane currently displays, straight from the
    /// common grid at the cursor.
    pub fn plane(&self, kind: ViewKind) -> ArrayView2<'_, f32> {
        let index = self.cursor.index()[kind.normal_axis()];
        volume::slice_plane(&self.primary, kind, index)
    }

    /// Apply one input event and report what needs repainting.
    ///
    /// Runs synchronously on the event-delivery path; by the time it
    /// returns, the session state is fully consistent again.
    pub fn handle_event(&mut self, event: &InputEvent) -> Redraw {
        match router::route(&self.layout, event) {
            Action::StepSlice { view, delta } => {
                self.cursor.step(view.normal_axis(), delta);
                Redraw::Everything
            }
            Action::JumpCursor { view, plane } => {
                self.cursor.set_in_plane(view, plane.u, plane.v);
                Redraw::Everything
            }
            Action::Zoom { view, steps } => {
                self.views[Self::view_slot(view)].zoom.zoom_by(steps);
                Redraw::View(view)
            }
            Action::Ignore => Redraw::Nothing,
        }
    }

    /// Recompute all four panes from the current state.
    ///
    /// Pure in the cursor and the (immutable) grids: two calls without an
    /// intervening mutation produce bit-identical frames.
    pub fn render(&self) -> [ViewFrame; 4] {
        ViewKind::ALL.map(|kind| self.render_view(kind))
    }

    /// Render every pane and hand the frames to the display substrate.
    pub fn present<S: DisplaySink>(&self, sink: &mut S) {
        for frame in self.render() {
            sink.present_view(&frame);
        }
        sink.request_repaint();
    }

    fn render_view(&self, kind: ViewKind) -> ViewFrame {
        let image = match kind {
            ViewKind::Projection => {
                render::compose_grayscale(&self.projection.view(), self.projection_window)
            }
            _ => {
                let index = self.cursor.index()[kind.normal_axis()];
                let primary = volume::slice_plane(&self.primary, kind, index);
                let secondary = volume::slice_plane(&self.secondary, kind, index);
                render::compose_overlay(
                    &primary,
                    &secondary,
                    self.primary_window,
                    self.overlay_window,
                    self.overlay_alpha,
                )
            }
        };

        let (d0, d1, d2) = self.primary.dim();
        let extents = [d0, d1, d2];
        let (u_axis, v_axis) = kind.in_plane_axes();
        ViewFrame {
            kind,
            image,
            crosshair: Crosshair::for_view(&self.cursor, kind, extents[u_axis], extents[v_axis]),
            limits: self.view(kind).zoom,
            invert_v: true,
        }
    }

    fn view_slot(kind: ViewKind) -> usize {
        match kind {
            ViewKind::Axial => 0,
            ViewKind::Coronal => 1,
            ViewKind::Sagittal => 2,
            ViewKind::Projection => 3,
        }
    }
}
