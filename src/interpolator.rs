use ndarray::ArrayView3;

pub(crate) struct Interpolator;

impl Interpolator {
    /// Trilinear sample at fractional voxel coordinates.
    ///
    /// Coordinates must already be clamped to `[0, dim - 1]` on each axis.
    #[inline]
    pub(crate) fn trilinear_interpolate(volume: &ArrayView3<f32>, i: f32, j: f32, k: f32) -> f32 {
        let (d0, d1, d2) = volume.dim();

        let i0 = i.floor() as usize;
        let j0 = j.floor() as usize;
        let k0 = k.floor() as usize;
        let i1 = (i0 + 1).min(d0 - 1);
        let j1 = (j0 + 1).min(d1 - 1);
        let k1 = (k0 + 1).min(d2 - 1);

        let di = i - i0 as f32;
        let dj = j - j0 as f32;
        let dk = k - k0 as f32;
        let one_minus_dk = 1.0 - dk;

        let c00 = volume[[i0, j0, k0]].mul_add(one_minus_dk, volume[[i0, j0, k1]] * dk);
        let c01 = volume[[i0, j1, k0]].mul_add(one_minus_dk, volume[[i0, j1, k1]] * dk);
        let c10 = volume[[i1, j0, k0]].mul_add(one_minus_dk, volume[[i1, j0, k1]] * dk);
        let c11 = volume[[i1, j1, k0]].mul_add(one_minus_dk, volume[[i1, j1, k1]] * dk);

        let c0 = c00.mul_add(1.0 - dj, c01 * dj);
        let c1 = c10.mul_add(1.0 - dj, c11 * dj);

        c0.mul_add(1.0 - di, c1 * di)
    }
}

#[cfg(test)]
mod tests {
    use super::Interpolator;
    use ndarray::Array3;

    #[test]
    fn lattice_points_are_exact() {
        let volume =
            Array3::from_shape_fn((2, 2, 2), |(i, j, k)| (i * 4 + j * 2 + k) as f32 * 10.0);
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    let sampled = Interpolator::trilinear_interpolate(
                        &volume.view(),
                        i as f32,
                        j as f32,
                        k as f32,
                    );
                    assert_eq!(sampled, volume[[i, j, k]]);
                }
            }
        }
    }

    #[test]
    fn cell_center_averages_all_corners() {
        let volume = Array3::from_shape_fn((2, 2, 2), |(i, j, k)| (i + j + k) as f32);
        let sampled = Interpolator::trilinear_interpolate(&volume.view(), 0.5, 0.5, 0.5);
        let mean = volume.iter().sum::<f32>() / 8.0;
        assert!((sampled - mean).abs() < 1e-6);
    }

    #[test]
    fn upper_edge_clamps_to_last_voxel() {
        let volume = Array3::from_shape_fn((3, 3, 3), |(i, _, _)| i as f32);
        let sampled = Interpolator::trilinear_interpolate(&volume.view(), 2.0, 2.0, 2.0);
        assert_eq!(sampled, 2.0);
    }
}
