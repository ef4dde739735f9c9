//! Terminal front end.
//!
//! Three contexts cooperate over flume channels: the core task owns the flow
//! controller and its timers, the input thread turns key presses into
//! intents, and the rendering thread redraws whenever the core says so.

pub mod input;
pub mod rendering;
pub mod runtime;
pub mod status;
pub mod ui;
pub mod utils;

use anyhow::{anyhow, Result};

use crate::{
    config::AppConfig,
    flow::FlowController,
    tui::{
        runtime::{run_core, CoreOptions},
        status::{new_shared, Status},
        utils::bus::{Bus, CoreToUi, UiToCore},
    },
};

pub async fn start(config: AppConfig) -> Result<()> {
    log::info!("[TUI] traywise TUI starting...");

    let status = new_shared(Status::with_flow(FlowController::new(config.timings())));

    let (core_tx, core_rx) = flume::unbounded::<CoreToUi>();
    let (ui_tx, ui_rx) = flume::unbounded::<UiToCore>();
    let bus = Bus::new(core_rx, ui_tx.clone());

    let (thr_tx, thr_rx) = flume::unbounded::<Result<()>>();
    let (input_kill_tx, input_kill_rx) = flume::bounded::<()>(1);

    let core_task = tokio::spawn({
        let status = status.clone();
        let thr_tx = thr_tx.clone();
        let input_kill_tx = input_kill_tx.clone();
        let options = CoreOptions {
            status_dump: config.status_dump.clone(),
            ..CoreOptions::default()
        };

        async move {
            let res = run_core(status, ui_rx, core_tx, input_kill_tx, options).await;
            if let Err(err) = thr_tx.send(res) {
                log::warn!("Failed to report core task exit: {err}");
            }
        }
    });

    let input_task = tokio::task::spawn_blocking({
        let status = status.clone();
        let bus = bus.clone();
        let thr_tx = thr_tx.clone();

        move || {
            let res = input::run_input_thread(status, bus, input_kill_rx);
            if res.is_err() {
                if let Err(err) = thr_tx.send(res) {
                    log::warn!("Failed to report input thread exit: {err}");
                }
            }
        }
    });

    let render_task =
        tokio::task::spawn_blocking(move || rendering::run_rendering_loop(status, bus, thr_rx));

    let render_result = render_task
        .await
        .map_err(|err| anyhow!("Failed to join render thread: {err:?}"))?;

    // The render loop may have stopped on its own (e.g. a failed draw); make
    // sure the other two contexts wind down as well.
    if ui_tx.send(UiToCore::Quit).is_err() {
        log::debug!("core task already stopped");
    }
    if input_kill_tx.try_send(()).is_err() {
        log::debug!("input thread already signalled");
    }

    core_task
        .await
        .map_err(|err| anyhow!("Failed to join core task: {err:?}"))?;
    input_task
        .await
        .map_err(|err| anyhow!("Failed to join input thread: {err:?}"))?;

    log::info!("[TUI] traywise TUI exited");
    render_result
}
