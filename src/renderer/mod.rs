//! Rendering module
//!
//! The simulation never draws. Hosts take a snapshot from the loop, build a
//! [`Frame`] from it and hand the frame to whatever [`RenderSink`] they own.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, Overlay};
pub use vertex::Vertex;

/// Receives finished frames
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}

/// Sink that logs a one-line summary per frame (headless runs)
#[derive(Debug, Default)]
pub struct LogSink {
    pub frames: u64,
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        match &frame.overlay {
            Some(overlay) => log::info!("{} - {}", overlay.title, overlay.subtitle),
            None => log::trace!(
                "Frame {}: {} triangles ({} bytes)",
                self.frames,
                frame.triangle_count(),
                vertex::as_bytes(&frame.vertices).len()
            ),
        }
    }
}
