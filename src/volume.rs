use crate::enums::ViewKind;

use ndarray::Array2;
use ndarray::Array3;
use ndarray::ArrayView2;
use ndarray::Axis;
use ndarray::s;

/// Voxel-to-world transform of a loaded scan, row major.
pub type Affine = [[f64; 4]; 4];

/// A loaded 3D scan: scalar intensities plus the affine that places its
/// voxel grid in physical space.
///
/// Two instances exist per session, the anatomical reference and the modality
/// overlay. Both are read-only once loaded.
#[derive(Debug, Clone)]
pub struct Volume {
    pub data: Array3<f32>,
    pub affine: Affine,
}

impl Volume {
    pub fn new(data: Array3<f32>, affine: Affine) -> Self {
        Self { data, affine }
    }

    /// Get the dimensions of the volume (axis 0, axis 1, axis 2)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }
}

/// Extract the 2D plane a pane displays, fixing the pane's normal axis at
/// `index`. The result's axes are the pane's (u, v) in-plane axes, in order.
///
/// `index` must already be clamped to the grid; the cursor guarantees this.
pub fn slice_plane(grid: &Array3<f32>, view: ViewKind, index: usize) -> ArrayView2<'_, f32> {
    match view.normal_axis() {
        0 => grid.slice(s![index, .., ..]),
        1 => grid.slice(s![.., index, ..]),
        _ => grid.slice(s![.., .., index]),
    }
}

/// Maximum-intensity projection over one full axis of a volume.
pub fn max_projection(grid: &Array3<f32>, axis: usize) -> Array2<f32> {
    grid.map_axis(Axis(axis), |lane| {
        lane.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v))
    })
}
