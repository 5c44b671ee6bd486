use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;

use tokio::sync::oneshot;

use crate::capture::{BusyGate, BusyToken, CaptureOutput, CaptureService, Stage};
use crate::rendering::raster::{Rasterizer, ResvgRasterizer};
use crate::rendering::Card;
use crate::{Error, Result, StudioConfig};

enum Command {
    Capture(Card, i64, BusyToken, oneshot::Sender<Result<CaptureOutput>>),
    Close(oneshot::Sender<Result<()>>),
}

/// An async-friendly capture service backed by a dedicated worker thread.
///
/// The worker owns the stage and the rasterizer, so rasterization and file
/// writes never block the caller's runtime. Requests made while a capture
/// is in flight resolve to `Ok(None)` right away instead of queueing.
#[derive(Clone)]
pub struct CaptureWorker {
    cmd_tx: Sender<Command>,
    gate: BusyGate,
}

impl CaptureWorker {
    /// Spawn a worker using the resvg rasterizer.
    pub async fn new(config: StudioConfig) -> Result<Self> {
        let rasterizer = Arc::new(ResvgRasterizer::new(config.load_system_fonts));
        Self::with_rasterizer(config, rasterizer).await
    }

    pub async fn with_rasterizer(config: StudioConfig, rasterizer: Arc<dyn Rasterizer>) -> Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (init_tx, init_rx) = oneshot::channel::<Result<BusyGate>>();

        thread::spawn(move || {
            let service = match CaptureService::new(rasterizer, &config) {
                Ok(s) => s,
                Err(err) => {
                    let _ = init_tx.send(Err(err));
                    return;
                }
            };
            let _ = init_tx.send(Ok(service.gate()));

            let mut stage = Stage::new();
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Capture(card, now_ms, token, resp) => {
                        let live = stage.mount(card);
                        let res = service.run_capture(&mut stage, live, now_ms);
                        stage.unmount(live);
                        drop(token);
                        let _ = resp.send(res);
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(Ok(()));
                        break;
                    }
                }
            }
        });

        let gate = init_rx
            .await
            .map_err(|e| Error::Other(format!("Worker init canceled: {}", e)))??;

        Ok(Self { cmd_tx, gate })
    }

    /// Export `card`. `Ok(None)` when another capture is still running.
    pub async fn capture(&self, card: Card) -> Result<Option<CaptureOutput>> {
        let Some(token) = self.gate.try_acquire() else {
            log::debug!("capture already in flight, ignoring request");
            return Ok(None);
        };
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Capture(card, crate::now_ms(), token, tx))
            .map_err(|e| Error::Other(format!("Send capture failed: {}", e)))?;
        rx.await
            .map_err(|e| Error::Other(format!("Capture canceled: {}", e)))?
            .map(Some)
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Stop the worker thread.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Close canceled: {}", e)))?
    }
}
