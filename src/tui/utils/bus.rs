use flume::{Receiver, Sender};

use crate::flow::Intent;

/// Messages sent from UI threads to the core task.
#[derive(Debug, Clone, PartialEq)]
pub enum UiToCore {
    /// A screen asked the flow controller to do something.
    Intent(Intent),
    /// Request an immediate UI redraw.
    Refresh,
    /// Graceful shutdown request.
    Quit,
}

/// Messages sent from the core task back to the render thread.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreToUi {
    /// Periodic wake-up so animations keep moving.
    Tick,
    /// Core applied a change; UI should redraw.
    Refreshed,
    /// Core encountered an error condition (already stored in Status, provided for wake-up).
    Error,
    /// Core is requesting UI to quit.
    Quit,
}

/// Simple holder passed into UI loops containing the receiving side from core and the sending side to core.
#[derive(Debug, Clone)]
pub struct Bus {
    pub core_rx: Receiver<CoreToUi>,
    pub ui_tx: Sender<UiToCore>,
}

impl Bus {
    pub fn new(core_rx: Receiver<CoreToUi>, ui_tx: Sender<UiToCore>) -> Self {
        Self { core_rx, ui_tx }
    }

    pub fn send_intent(&self, intent: Intent) -> anyhow::Result<()> {
        log::info!("📨 Intent {intent}");
        self.ui_tx
            .send(UiToCore::Intent(intent))
            .map_err(|err| anyhow::anyhow!("Failed to send intent {intent}: {err}"))
    }
}
