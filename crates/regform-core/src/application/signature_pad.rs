//! Signature pad
//!
//! Wraps a [`SignatureCanvas`] with the widget's notifications, hands saved
//! artifacts to the owning form and schedules the post-save auto-clear.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::{RegformConfig, Timings, ToastDurations};
use crate::domain::signature::{Point, SignatureCanvas, SignatureError};
use crate::domain::value_objects::SignatureArtifact;
use crate::infrastructure::scheduler::TaskScope;
use crate::ports::inbound::SignatureInput;
use crate::ports::outbound::{Notification, Notifier, SignatureSink};

pub struct SignaturePad {
    canvas: Arc<Mutex<SignatureCanvas>>,
    notifier: Arc<dyn Notifier>,
    sink: Arc<dyn SignatureSink>,
    timings: Timings,
    toasts: ToastDurations,
    scope: TaskScope,
}

impl SignaturePad {
    pub fn new(sink: Arc<dyn SignatureSink>, notifier: Arc<dyn Notifier>, config: &RegformConfig) -> Self {
        let canvas = SignatureCanvas::new(config.canvas.width, config.canvas.height, config.canvas.pen);
        Self {
            canvas: Arc::new(Mutex::new(canvas)),
            notifier,
            sink,
            timings: config.timings,
            toasts: config.toasts,
            scope: TaskScope::new(),
        }
    }

    pub fn has_content(&self) -> bool {
        self.canvas.lock().has_content()
    }

    pub fn undo_depth(&self) -> usize {
        self.canvas.lock().undo_depth()
    }

    /// Read the canvas under the lock
    pub fn with_canvas<T>(&self, f: impl FnOnce(&SignatureCanvas) -> T) -> T {
        f(&self.canvas.lock())
    }

    /// Draw a polyline as one stroke
    pub fn draw(&self, points: &[Point]) -> Result<(), SignatureError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.stroke_start(*first)?;
        for point in rest {
            self.stroke_to(*point);
        }
        self.stroke_end();
        Ok(())
    }

    /// Cancel a pending auto-clear
    pub fn close(&self) {
        self.scope.cancel_all();
    }
}

impl SignatureInput for SignaturePad {
    fn stroke_start(&self, point: Point) -> Result<(), SignatureError> {
        self.canvas.lock().stroke_start(point)
    }

    fn stroke_to(&self, point: Point) {
        self.canvas.lock().stroke_to(point);
    }

    fn stroke_end(&self) {
        self.canvas.lock().stroke_end();
    }

    fn clear(&self) {
        self.canvas.lock().clear();
        self.sink.signature_changed(None);
        self.notifier
            .show(Notification::info("Signature cleared successfully", self.toasts.info()));
        debug!("signature cleared");
    }

    fn undo(&self) -> Result<bool, SignatureError> {
        let undone = self.canvas.lock().undo()?;
        if undone {
            self.notifier.show(Notification::info("Signature undone", self.toasts.info()));
        } else {
            self.notifier.show(Notification::error("Nothing to undo", self.toasts.info()));
        }
        Ok(undone)
    }

    /// Must be called from within a tokio runtime when the canvas has content.
    fn save(&self) -> Result<SignatureArtifact, SignatureError> {
        let exported = self.canvas.lock().export();
        let artifact = match exported {
            Ok(artifact) => artifact,
            Err(SignatureError::SignatureMissing) => {
                self.notifier.show(Notification::error(
                    "Please provide a signature before saving",
                    self.toasts.signature(),
                ));
                return Err(SignatureError::SignatureMissing);
            }
            Err(e) => return Err(e),
        };

        self.sink.signature_changed(Some(artifact.clone()));
        self.notifier
            .show(Notification::success("Signature saved successfully!", self.toasts.signature()));
        info!(bytes = artifact.len(), "signature saved");

        // The saved artifact stays with the form; only the surface is reset.
        let canvas = Arc::clone(&self.canvas);
        let notifier = Arc::clone(&self.notifier);
        let info_duration = self.toasts.info();
        self.scope.schedule(self.timings.auto_clear_delay(), move || {
            canvas.lock().clear();
            notifier.show(Notification::info("Canvas cleared for next signature", info_duration));
            debug!("canvas auto-cleared");
        });

        Ok(artifact)
    }
}
