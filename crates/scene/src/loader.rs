//! Background model loading
//!
//! Decoding a glTF file takes long enough to stutter the first frames, so
//! it runs on its own thread. The handoff is a single-producer/
//! single-consumer channel carrying exactly one message: the render loop
//! polls it once per frame and keeps animating an empty group until the
//! result arrives. If the producer dies without sending (or never
//! finishes), polling simply keeps returning nothing.

use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{bounded, Receiver, TryRecvError};

use crate::model::{load_model, MeshData, ModelError};

/// Receiving end of an in-flight model load.
pub struct PendingModel {
    rx: Receiver<Result<MeshData, ModelError>>,
}

impl PendingModel {
    /// Non-blocking check for the load result.
    ///
    /// Returns `None` while the load is still running or if it will never
    /// resolve; returns the result exactly once when it lands.
    #[must_use]
    pub fn poll(&self) -> Option<Result<MeshData, ModelError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

/// Start decoding `path` on a background thread.
pub fn spawn_load(path: PathBuf) -> PendingModel {
    let (tx, rx) = bounded(1);
    thread::spawn(move || {
        let result = load_model(&path);
        // The receiver may already be gone on shutdown; nothing to do then.
        let _ = tx.send(result);
    });
    PendingModel { rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vertex;

    fn one_triangle() -> MeshData {
        MeshData {
            vertices: vec![
                Vertex {
                    position: [0.0, 0.0, 0.0],
                    normal: [0.0, 0.0, 1.0],
                    color: [1.0; 4],
                };
                3
            ],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn poll_is_empty_while_load_is_pending() {
        let (_tx, rx) = bounded::<Result<MeshData, ModelError>>(1);
        let pending = PendingModel { rx };
        assert!(pending.poll().is_none());
        assert!(pending.poll().is_none());
    }

    #[test]
    fn poll_yields_the_result_exactly_once() {
        let (tx, rx) = bounded(1);
        let pending = PendingModel { rx };
        tx.send(Ok(one_triangle())).unwrap();

        let first = pending.poll();
        assert!(matches!(first, Some(Ok(_))));
        assert!(pending.poll().is_none());
    }

    #[test]
    fn dead_producer_reads_as_never_resolving() {
        let (tx, rx) = bounded::<Result<MeshData, ModelError>>(1);
        drop(tx);
        let pending = PendingModel { rx };
        assert!(pending.poll().is_none());
    }

    #[test]
    fn spawn_load_reports_missing_files() {
        let pending = spawn_load(PathBuf::from("no/such/model.glb"));
        // Loading a missing path fails fast; wait for the thread to land it.
        let mut result = None;
        for _ in 0..200 {
            if let Some(r) = pending.poll() {
                result = Some(r);
                break;
            }
            thread::sleep(std::time::Duration::from_millis(5));
        }
        assert!(matches!(result, Some(Err(ModelError::Decode(_)))));
    }
}
