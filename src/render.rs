use image::Rgba;
use image::RgbaImage;
use ndarray::ArrayBase;
use ndarray::ArrayView2;
use ndarray::Data;
use ndarray::Dimension;

/// A lower/upper intensity clip applied before color mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityWindow {
    pub lo: f32,
    pub hi: f32,
}

impl IntensityWindow {
    pub fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Window spanning the given percentiles of the data.
    pub fn from_percentiles<S, D>(data: &ArrayBase<S, D>, lo_pct: f64, hi_pct: f64) -> Self
    where
        S: Data<Elem = f32>,
        D: Dimension,
    {
        let mut values: Vec<f32> = data.iter().copied().collect();
        if values.is_empty() {
            return Self { lo: 0.0, hi: 0.0 };
        }
        let lo = percentile(&mut values, lo_pct);
        let hi = percentile(&mut values, hi_pct);
        Self { lo, hi }
    }

    /// Map an intensity into `[0, 1]`, clipped at the window edges.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        if self.hi <= self.lo {
            return 0.0;
        }
        ((value - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0)
    }
}

fn percentile(values: &mut [f32], pct: f64) -> f32 {
    let rank = ((pct / 100.0) * (values.len() - 1) as f64).round() as usize;
    let (_, value, _) = values.select_nth_unstable_by(rank, |a, b| a.total_cmp(b));
    *value
}

#[inline]
fn to_u8(channel: f32) -> u8 {
    (channel * 255.0).clamp(0.0, 255.0) as u8
}

/// Heat color ramp: black through red and yellow to white.
#[inline]
pub fn heat(value: f32) -> [f32; 3] {
    let v = value.clamp(0.0, 1.0);
    [
        (v * 3.0).min(1.0),
        (v * 3.0 - 1.0).clamp(0.0, 1.0),
        (v * 3.0 - 2.0).clamp(0.0, 1.0),
    ]
}

/// Compose a grayscale slice image under an intensity window.
///
/// The slice arrives with axes (u, v); rows of the output image run along v,
/// so the buffer is already in the pane's display orientation.
pub fn compose_grayscale(slice: &ArrayView2<'_, f32>, window: IntensityWindow) -> RgbaImage {
    let (nu, nv) = slice.dim();
    RgbaImage::from_fn(nu as u32, nv as u32, |x, y| {
        let gray = to_u8(window.normalize(slice[[x as usize, y as usize]]));
        Rgba([gray, gray, gray, 255])
    })
}

/// Compose one pane's image: grayscale anatomy below, heat-mapped overlay
/// above at the given opacity. High overlay intensities read as bright color
/// on top of the anatomy; intensities below the overlay window fade to the
/// darkened base.
pub fn compose_overlay(
    primary: &ArrayView2<'_, f32>,
    secondary: &ArrayView2<'_, f32>,
    primary_window: IntensityWindow,
    overlay_window: IntensityWindow,
    overlay_alpha: f32,
) -> RgbaImage {
    let (nu, nv) = primary.dim();
    let base_weight = 1.0 - overlay_alpha;
    RgbaImage::from_fn(nu as u32, nv as u32, |x, y| {
        let (u, v) = (x as usize, y as usize);
        let gray = primary_window.normalize(primary[[u, v]]);
        let color = heat(overlay_window.normalize(secondary[[u, v]]));
        Rgba([
            to_u8(gray.mul_add(base_weight, color[0] * overlay_alpha)),
            to_u8(gray.mul_add(base_weight, color[1] * overlay_alpha)),
            to_u8(gray.mul_add(base_weight, color[2] * overlay_alpha)),
            255,
        ])
    })
}
