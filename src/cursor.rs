use crate::enums::ViewKind;

/// The single 3D voxel index shared by every pane.
///
/// Each coordinate stays inside `[0, dim - 1]` for its axis; out-of-range
/// targets clamp, they never wrap. The cursor is the only piece of state the
/// orthogonal panes agree on, so all mutation goes through the methods here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: [usize; 3],
    shape: [usize; 3],
}

impl Cursor {
    /// Cursor at the geometric center of a grid.
    pub fn centered(shape: [usize; 3]) -> Self {
        Self {
            index: [shape[0] / 2, shape[1] / 2, shape[2] / 2],
            shape,
        }
    }

    pub fn index(&self) -> [usize; 3] {
        self.index
    }

    /// The cursor's in-plane coordinates for one pane, in (u, v) order.
    pub fn position(&self, view: ViewKind) -> (usize, usize) {
        let (u_axis, v_axis) = view.in_plane_axes();
        (self.index[u_axis], self.index[v_axis])
    }

    /// Move one axis by a signed number of slices, clamped to the grid.
    pub fn step(&mut self, axis: usize, delta: i64) {
        let dim = self.shape[axis] as i64;
        let target = self.index[axis] as i64 + delta;
        self.index[axis] = target.clamp(0, dim - 1) as usize;
    }

    /// Jump the two in-plane coordinates of one pane to a data-space
    /// position, rounded to the nearest voxel. The pane's normal-axis
    /// coordinate is left untouched.
    pub fn set_in_plane(&mut self, view: ViewKind, u: f64, v: f64) {
        let (u_axis, v_axis) = view.in_plane_axes();
        self.index[u_axis] = self.clamp_to_axis(u_axis, u);
        self.index[v_axis] = self.clamp_to_axis(v_axis, v);
    }

    fn clamp_to_axis(&self, axis: usize, value: f64) -> usize {
        let dim = self.shape[axis] as i64;
        (value.round() as i64).clamp(0, dim - 1) as usize
    }
}

/// One crosshair line in a pane's data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// The pair of lines marking the cursor inside one pane: a vertical line at
/// the cursor's u coordinate and a horizontal line at its v coordinate, each
/// spanning the full slice extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshair {
    pub vertical: Segment,
    pub horizontal: Segment,
}

impl Crosshair {
    pub fn for_view(cursor: &Cursor, view: ViewKind, u_extent: usize, v_extent: usize) -> Self {
        let (u, v) = cursor.position(view);
        let (u, v) = (u as f64, v as f64);
        Self {
            vertical: Segment {
                start: (u, 0.0),
                end: (u, v_extent as f64),
            },
            horizontal: Segment {
                start: (0.0, v),
                end: (u_extent as f64, v),
            },
        }
    }
}
