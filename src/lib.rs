//! # electrode-picker library
//!
//! This crate is the interaction core of a four-pane viewer for locating
//! electrode contacts in a pair of co-registered scans: an anatomical
//! reference volume (typically a T1 MRI) and a modality overlay (typically a
//! post-implant CT).
//!
//! At startup both scans are reoriented into one anatomical axis convention
//! using their affines and resampled onto a common cubic grid, so a single
//! voxel index addresses both volumes identically. The session then exposes
//! four synchronized panes:
//!  - Axial
//!  - Coronal
//!  - Sagittal
//!  - Projection (maximum-intensity projection of the overlay)
//!
//! The three orthogonal panes share one crosshair cursor; page keys step the
//! hovered pane's slice, clicks jump the cursor in-plane, and scrolling zooms
//! only the hovered pane. Every event is routed, applied and fully rendered
//! before the next, so the panes can never drift apart. Rendering produces
//! plain image buffers handed to a [`display::DisplaySink`]; window creation,
//! painting and event capture belong to the embedding application.
//!
//! File I/O is delegated to the `nifti` crate; the core only consumes each
//! scan's intensity array, shape and affine.
//!
//! # Examples
//!
//! ## Browsing a T1/CT pair
//!
//! Load both scans, build a session, and step one slice forward in the
//! axial pane:
//!
//! ```no_run
//! # use electrode_picker::enums::ViewKind;
//! # use electrode_picker::router::InputEvent;
//! # use electrode_picker::session::{SessionConfig, ViewerSession};
//! # use electrode_picker::volume_loader::VolumeLoader;
//! let anatomy = VolumeLoader::load_from_file("T1.nii")?;
//! let ct = VolumeLoader::load_from_file("rCT.nii")?;
//! let mut session = ViewerSession::new(anatomy, ct, SessionConfig::default())?;
//!
//! let event = InputEvent::KeyPress {
//!     key: "pageup".into(),
//!     screen: session.layout().center_of(ViewKind::Axial),
//! };
//! session.handle_event(&event);
//! let frames = session.render();
//! assert_eq!(frames.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cursor;
pub mod display;
pub mod enums;
mod interpolator;
pub mod layout;
pub mod orientation;
pub mod render;
pub mod resample;
pub mod router;
pub mod session;
pub mod view;
pub mod volume;
pub mod volume_loader;
