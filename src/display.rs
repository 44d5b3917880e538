use crate::view::ViewFrame;

/// Painting side of the viewer.
///
/// The session computes every pane's [`ViewFrame`] as a value and hands it
/// over here; the substrate owns windows, widgets and scheduling. Keeping the
/// seam this narrow lets the whole interaction loop run in tests without a
/// display.
pub trait DisplaySink {
    /// Receive one pane's freshly computed frame.
    fn present_view(&mut self, frame: &ViewFrame);

    /// All frames for this update have been presented; repaint when possible.
    fn request_repaint(&mut self);
}

#[cfg(test)]
mod tests {
    use super::DisplaySink;
    use crate::enums::ViewKind;
    use crate::view::ViewFrame;

    #[derive(Default)]
    struct Recorder {
        presented: Vec<ViewKind>,
        repaints: usize,
    }

    impl DisplaySink for Recorder {
        fn present_view(&mut self, frame: &ViewFrame) {
            self.presented.push(frame.kind);
        }

        fn request_repaint(&mut self) {
            self.repaints += 1;
        }
    }

    #[test]
    fn sinks_are_object_safe() {
        let mut recorder = Recorder::default();
        let sink: &mut dyn DisplaySink = &mut recorder;
        sink.request_repaint();
        assert_eq!(recorder.repaints, 1);
        assert!(recorder.presented.is_empty());
    }
}
