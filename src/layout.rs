use crate::enums::ViewKind;

/// A position in normalized figure coordinates, origin at the bottom-left,
/// both components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPos {
    pub x: f64,
    pub y: f64,
}

/// One pane's rectangle in figure coordinates. Half-open on the upper edges
/// so adjoining panes never claim the same point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRegion {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl ViewRegion {
    pub fn contains(&self, pos: ScreenPos) -> bool {
        pos.x >= self.x0 && pos.x < self.x1 && pos.y >= self.y0 && pos.y < self.y1
    }
}

/// Where each pane sits on screen; the router's hit-test table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    regions: [(ViewKind, ViewRegion); 4],
}

impl Layout {
    /// The 2x2 arrangement: axial top-left, coronal top-right, sagittal
    /// bottom-left, projection bottom-right.
    pub fn two_by_two() -> Self {
        let quadrant = |x0: f64, y0: f64| ViewRegion {
            x0,
            y0,
            x1: x0 + 0.5,
            y1: y0 + 0.5,
        };
        Self {
            regions: [
                (ViewKind::Axial, quadrant(0.0, 0.5)),
                (ViewKind::Coronal, quadrant(0.5, 0.5)),
                (ViewKind::Sagittal, quadrant(0.0, 0.0)),
                (ViewKind::Projection, quadrant(0.5, 0.0)),
            ],
        }
    }

    /// The pane whose rectangle contains `pos`, if any.
    pub fn view_at(&self, pos: ScreenPos) -> Option<ViewKind> {
        self.regions
            .iter()
            .find(|(_, region)| region.contains(pos))
            .map(|(kind, _)| *kind)
    }

    /// A position safely inside one pane's rectangle; handy for tests and
    /// synthetic events.
    pub fn center_of(&self, kind: ViewKind) -> ScreenPos {
        let (_, region) = self
            .regions
            .iter()
            .find(|(k, _)| *k == kind)
            .copied()
            .unwrap_or(self.regions[0]);
        ScreenPos {
            x: 0.5 * (region.x0 + region.x1),
            y: 0.5 * (region.y0 + region.y1),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::two_by_two()
    }
}
