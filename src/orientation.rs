use crate::volume::Affine;

use ndarray::Array3;
use ndarray::Axis;
use thiserror::Error;

/// Direction cosines below this norm are treated as missing.
const MIN_COLUMN_NORM: f64 = 1e-6;

#[derive(Debug, Error)]
pub enum OrientationError {
    #[error("affine column {0} has a near-zero direction")]
    DegenerateColumn(usize),

    #[error("affine maps voxel axes {0} and {1} to the same world axis")]
    CollapsedAxes(usize, usize),
}

/// One entry per voxel axis: the world axis it runs along, and whether it
/// points against that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCode {
    pub world_axis: usize,
    pub flipped: bool,
}

/// Read the anatomical axis codes implied by an affine.
///
/// Each voxel axis is assigned the world axis its direction column is most
/// aligned with. An affine whose columns are near zero, or that maps two
/// voxel axes onto the same world axis, cannot orient a volume.
///
/// # Errors
///
/// Returns [`OrientationError`] for degenerate affines; this is fatal at
/// startup and never recovered.
pub fn axis_codes(affine: &Affine) -> Result<[AxisCode; 3], OrientationError> {
    let mut codes = [AxisCode {
        world_axis: 0,
        flipped: false,
    }; 3];

    for (j, code) in codes.iter_mut().enumerate() {
        let column = [affine[0][j], affine[1][j], affine[2][j]];
        let norm = column.iter().map(|c| c * c).sum::<f64>().sqrt();
        if norm < MIN_COLUMN_NORM {
            return Err(OrientationError::DegenerateColumn(j));
        }

        let mut world_axis = 0;
        for (i, component) in column.iter().enumerate() {
            if component.abs() > column[world_axis].abs() {
                world_axis = i;
            }
        }
        *code = AxisCode {
            world_axis,
            flipped: column[world_axis] < 0.0,
        };
    }

    for a in 0..3 {
        for b in (a + 1)..3 {
            if codes[a].world_axis == codes[b].world_axis {
                return Err(OrientationError::CollapsedAxes(a, b));
            }
        }
    }

    Ok(codes)
}

/// Reorder and flip a voxel array so its axes follow the canonical
/// left-right / posterior-anterior / inferior-superior ordering.
pub fn reorient(data: Array3<f32>, codes: [AxisCode; 3]) -> Array3<f32> {
    let mut permutation = [0usize; 3];
    for (voxel_axis, code) in codes.iter().enumerate() {
        permutation[code.world_axis] = voxel_axis;
    }

    let mut oriented = data.permuted_axes(permutation);
    for world_axis in 0..3 {
        if codes[permutation[world_axis]].flipped {
            oriented.invert_axis(Axis(world_axis));
        }
    }

    if oriented.is_standard_layout() {
        oriented
    } else {
        oriented.as_standard_layout().into_owned()
    }
}

/// Normalize a volume's array into the canonical anatomical axis ordering
/// implied by its affine.
pub fn normalize(data: Array3<f32>, affine: &Affine) -> Result<Array3<f32>, OrientationError> {
    Ok(reorient(data, axis_codes(affine)?))
}

#[cfg(test)]
mod tests {
    use super::{OrientationError, axis_codes, normalize, reorient};
    use ndarray::Array3;

    const IDENTITY: [[f64; 4]; 4] = [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];

    fn numbered(shape: (usize, usize, usize)) -> Array3<f32> {
        let (_, d1, d2) = shape;
        Array3::from_shape_fn(shape, |(i, j, k)| (i * d1 * d2 + j * d2 + k) as f32)
    }

    #[test]
    fn identity_affine_yields_unflipped_codes() {
        let codes = axis_codes(&IDENTITY).unwrap();
        for (j, code) in codes.iter().enumerate() {
            assert_eq!(code.world_axis, j);
            assert!(!code.flipped);
        }
    }

    #[test]
    fn identity_codes_leave_the_array_untouched() {
        let data = numbered((2, 3, 4));
        let oriented = normalize(data.clone(), &IDENTITY).unwrap();
        assert_eq!(oriented, data);
    }

    #[test]
    fn negated_columns_flip_their_axes() {
        let mut affine = IDENTITY;
        affine[0][0] = -1.0;
        affine[1][1] = -1.0;
        let codes = axis_codes(&affine).unwrap();
        assert!(codes[0].flipped);
        assert!(codes[1].flipped);
        assert!(!codes[2].flipped);

        let data = numbered((2, 2, 2));
        let oriented = reorient(data.clone(), codes);
        assert_eq!(oriented[[1, 1, 0]], data[[0, 0, 0]]);
        assert_eq!(oriented[[0, 0, 1]], data[[1, 1, 1]]);
    }

    #[test]
    fn permuted_columns_permute_the_array() {
        // Voxel axis 0 runs along world z, axis 1 along world x, axis 2
        // along world y.
        let affine = [
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let codes = axis_codes(&affine).unwrap();
        assert_eq!(codes[0].world_axis, 2);
        assert_eq!(codes[1].world_axis, 0);
        assert_eq!(codes[2].world_axis, 1);

        let data = numbered((2, 3, 4));
        let oriented = reorient(data.clone(), codes);
        assert_eq!(oriented.dim(), (3, 4, 2));
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(oriented[[j, k, i]], data[[i, j, k]]);
                }
            }
        }
    }

    #[test]
    fn near_zero_column_is_rejected() {
        let mut affine = IDENTITY;
        affine[0][0] = 0.0;
        assert!(matches!(
            axis_codes(&affine),
            Err(OrientationError::DegenerateColumn(0))
        ));
    }

    #[test]
    fn collapsed_axes_are_rejected() {
        let affine = [
            [1.0, 0.9, 0.0, 0.0],
            [0.0, 0.1, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        assert!(matches!(
            axis_codes(&affine),
            Err(OrientationError::CollapsedAxes(0, 1))
        ));
    }

    #[test]
    fn oriented_arrays_are_contiguous() {
        let mut affine = IDENTITY;
        affine[0][0] = -1.0;
        let oriented = normalize(numbered((3, 3, 3)), &affine).unwrap();
        assert!(oriented.is_standard_layout());
    }
}
