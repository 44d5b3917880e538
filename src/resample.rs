use crate::interpolator::Interpolator;

use ndarray::Array3;
use ndarray::Axis;
use rayon::prelude::*;

/// Resample a volume onto `target` voxels per axis with trilinear smoothing.
///
/// Returns the input untouched when its shape already matches. Sampling uses
/// normalized coordinates with a half-pixel offset, clamped at the edges, so
/// the first and last output voxels sit on the first and last input voxels.
/// Runs once at startup; output slabs are filled in parallel.
pub fn to_shape(data: Array3<f32>, target: (usize, usize, usize)) -> Array3<f32> {
    if data.dim() == target {
        return data;
    }

    let (s0, s1, s2) = data.dim();
    let (t0, t1, t2) = target;
    let source = data.view();

    let mut resampled = Array3::zeros(target);
    resampled
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut plane)| {
            let si = source_coordinate(i, t0, s0);
            for j in 0..t1 {
                let sj = source_coordinate(j, t1, s1);
                for k in 0..t2 {
                    let sk = source_coordinate(k, t2, s2);
                    plane[[j, k]] = Interpolator::trilinear_interpolate(&source, si, sj, sk);
                }
            }
        });

    resampled
}

#[inline]
fn source_coordinate(index: usize, target_len: usize, source_len: usize) -> f32 {
    let normalized = (index as f32 + 0.5) / target_len as f32;
    let coordinate = normalized * source_len as f32 - 0.5;
    coordinate.max(0.0).min((source_len - 1) as f32)
}
