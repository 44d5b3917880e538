use crate::volume::{Affine, Volume};

use ndarray::{Array3, ArrayD, Axis};
use nifti::{IntoNdArray, NiftiHeader, NiftiObject, ReaderOptions};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VolumeLoaderError {
    #[error("expected a 3D volume, file has {0} dimensions")]
    NotAVolume(usize),

    #[error("NIfTI error: {0}")]
    Nifti(#[from] nifti::NiftiError),
}

pub struct VolumeLoader;

impl VolumeLoader {
    /// Load a volume from a NIfTI-1 file (`.nii` or `.nii.gz`)
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the NIfTI file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or does not hold at least a
    /// 3D intensity array
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Volume, VolumeLoaderError> {
        let object = ReaderOptions::new().read_file(path.as_ref())?;
        let header = object.header().clone();
        let array = object.into_volume().into_ndarray::<f32>()?;
        Self::from_parts(array, &header)
    }

    fn from_parts(array: ArrayD<f32>, header: &NiftiHeader) -> Result<Volume, VolumeLoaderError> {
        let data = Self::first_frame(array)?;
        let data = Self::apply_scaling(data, header);
        Ok(Volume::new(data, Self::affine_from_header(header)))
    }

    /// Reduce the array to 3D, taking the first frame of any trailing axes
    /// (multi-echo or time series data keeps only its first volume).
    fn first_frame(array: ArrayD<f32>) -> Result<Array3<f32>, VolumeLoaderError> {
        let ndim = array.ndim();
        if ndim < 3 {
            return Err(VolumeLoaderError::NotAVolume(ndim));
        }
        let mut array = array;
        while array.ndim() > 3 {
            let last = array.ndim() - 1;
            array = array.index_axis_move(Axis(last), 0);
        }
        array
            .into_dimensionality()
            .map_err(|_| VolumeLoaderError::NotAVolume(ndim))
    }

    fn apply_scaling(mut data: Array3<f32>, header: &NiftiHeader) -> Array3<f32> {
        // A zero slope means "no scaling stored", not "erase the image".
        let slope = if header.scl_slope == 0.0 {
            1.0
        } else {
            header.scl_slope
        };
        let intercept = header.scl_inter;
        if slope != 1.0 || intercept != 0.0 {
            data.mapv_inplace(|v| v.mul_add(slope, intercept));
        }
        data
    }

    /// Affine from the sform rows when present, else a diagonal built from
    /// the voxel sizes.
    fn affine_from_header(header: &NiftiHeader) -> Affine {
        if header.sform_code > 0 {
            let rows = [&header.srow_x, &header.srow_y, &header.srow_z];
            let mut affine = [[0.0; 4]; 4];
            for (i, row) in rows.iter().enumerate() {
                for j in 0..4 {
                    affine[i][j] = row[j] as f64;
                }
            }
            affine[3] = [0.0, 0.0, 0.0, 1.0];
            affine
        } else {
            let mut affine = [[0.0; 4]; 4];
            for i in 0..3 {
                affine[i][i] = header.pixdim[i + 1] as f64;
            }
            affine[3][3] = 1.0;
            affine
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{VolumeLoader, VolumeLoaderError};
    use ndarray::{Array, ArrayD, IxDyn};
    use nifti::NiftiHeader;

    fn dyn_array(shape: &[usize]) -> ArrayD<f32> {
        let len: usize = shape.iter().product();
        Array::from_shape_vec(IxDyn(shape), (0..len).map(|v| v as f32).collect())
            .expect("shape matches data")
    }

    #[test]
    fn sform_rows_become_the_affine() {
        let mut header = NiftiHeader::default();
        header.sform_code = 1;
        header.srow_x = [1.0, 0.0, 0.0, 10.0];
        header.srow_y = [0.0, 2.0, 0.0, 20.0];
        header.srow_z = [0.0, 0.0, 3.0, 30.0];
        let affine = VolumeLoader::affine_from_header(&header);
        assert_eq!(affine[0], [1.0, 0.0, 0.0, 10.0]);
        assert_eq!(affine[1], [0.0, 2.0, 0.0, 20.0]);
        assert_eq!(affine[2], [0.0, 0.0, 3.0, 30.0]);
        assert_eq!(affine[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn missing_sform_falls_back_to_voxel_sizes() {
        let mut header = NiftiHeader::default();
        header.sform_code = 0;
        header.pixdim = [1.0, 1.5, 2.5, 3.5, 0.0, 0.0, 0.0, 0.0];
        let affine = VolumeLoader::affine_from_header(&header);
        assert_eq!(affine[0][0], 1.5);
        assert_eq!(affine[1][1], 2.5);
        assert_eq!(affine[2][2], 3.5);
        assert_eq!(affine[3][3], 1.0);
        assert_eq!(affine[0][1], 0.0);
    }

    #[test]
    fn scaling_applies_slope_and_intercept() {
        let mut header = NiftiHeader::default();
        header.scl_slope = 2.0;
        header.scl_inter = 1.0;
        let volume = VolumeLoader::from_parts(dyn_array(&[2, 2, 2]), &header).unwrap();
        assert_eq!(volume.data[[0, 0, 0]], 1.0);
        assert_eq!(volume.data[[1, 1, 1]], 15.0);
    }

    #[test]
    fn zero_slope_means_unscaled() {
        let mut header = NiftiHeader::default();
        header.scl_slope = 0.0;
        header.scl_inter = 0.0;
        let volume = VolumeLoader::from_parts(dyn_array(&[2, 2, 2]), &header).unwrap();
        assert_eq!(volume.data[[1, 1, 1]], 7.0);
    }

    #[test]
    fn trailing_axes_keep_their_first_frame() {
        let header = NiftiHeader::default();
        let volume = VolumeLoader::from_parts(dyn_array(&[2, 3, 4, 5]), &header).unwrap();
        assert_eq!(volume.dim(), (2, 3, 4));
        // First frame of the fourth axis: elements with stride 5.
        assert_eq!(volume.data[[0, 0, 1]], 5.0);
    }

    #[test]
    fn flat_images_are_rejected() {
        let header = NiftiHeader::default();
        let result = VolumeLoader::from_parts(dyn_array(&[4, 4]), &header);
        assert!(matches!(result, Err(VolumeLoaderError::NotAVolume(2))));
    }
}
