/// The four panes of the viewer.
///
/// The first three fix one axis of the common grid at the cursor and show the
/// remaining two; `Projection` shows the maximum of the overlay volume taken
/// over its whole normal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Axial,
    Coronal,
    Sagittal,
    Projection,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Axial,
        ViewKind::Coronal,
        ViewKind::Sagittal,
        ViewKind::Projection,
    ];

    /// The grid axis this pane fixes (or, for `Projection`, projects over).
    ///
    /// Together with [`ViewKind::in_plane_axes`] this is the single source of
    /// truth for the axis conventions of every pane; the router, cursor,
    /// crosshairs and slice extraction all read from here.
    pub fn normal_axis(self) -> usize {
        match self {
            ViewKind::Axial => 0,
            ViewKind::Coronal => 1,
            ViewKind::Sagittal => 2,
            ViewKind::Projection => 0,
        }
    }

    /// The grid axes shown as the pane's horizontal (u) and vertical (v)
    /// image axes, in that order.
    pub fn in_plane_axes(self) -> (usize, usize) {
        match self {
            ViewKind::Axial => (1, 2),
            ViewKind::Coronal => (0, 2),
            ViewKind::Sagittal => (0, 1),
            ViewKind::Projection => (1, 2),
        }
    }
}
