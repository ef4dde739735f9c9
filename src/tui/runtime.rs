use anyhow::{anyhow, Result};
use std::{path::PathBuf, time::Duration};
use tokio::time::MissedTickBehavior;

use crate::{
    flow::{Effect, Intent, Scheduler, TimerToken},
    tui::{
        status::{read_status, write_status, SharedStatus, TuiStatus},
        utils::bus::{CoreToUi, UiToCore},
    },
};

#[derive(Debug, Clone)]
pub struct CoreOptions {
    /// Spinner / redraw cadence.
    pub tick_interval: Duration,
    /// Where to write a JSON snapshot after every state change.
    pub status_dump: Option<PathBuf>,
}

impl Default for CoreOptions {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
            status_dump: None,
        }
    }
}

/// Core task: the only place the flow controller is mutated.
///
/// Applies intents coming from the UI, runs the resulting timers through a
/// [`Scheduler`] and wakes the render thread whenever something changed.
pub async fn run_core(
    status: SharedStatus,
    ui_rx: flume::Receiver<UiToCore>,
    core_tx: flume::Sender<CoreToUi>,
    input_kill_tx: flume::Sender<()>,
    options: CoreOptions,
) -> Result<()> {
    let (fired_tx, fired_rx) = flume::unbounded::<TimerToken>();
    let mut scheduler = Scheduler::new(fired_tx);

    let mut tick = tokio::time::interval(options.tick_interval);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    dump_status(&status, &options);
    log::info!("🧠 Core task started");

    loop {
        tokio::select! {
            msg = ui_rx.recv_async() => {
                let Ok(msg) = msg else {
                    log::info!("UI channel closed; core task exiting");
                    scheduler.shutdown();
                    return Ok(());
                };
                log::info!("🔵 Core received message: {msg:?}");
                match msg {
                    UiToCore::Quit => {
                        log::info!("Received quit signal");
                        scheduler.shutdown();
                        if let Err(err) = input_kill_tx.send(()) {
                            log::warn!("Failed to send input kill signal: {err}");
                        }
                        core_tx
                            .send(CoreToUi::Quit)
                            .map_err(|err| anyhow!("Failed to send Quit to UI: {err}"))?;
                        return Ok(());
                    }
                    UiToCore::Refresh => {
                        core_tx
                            .send(CoreToUi::Refreshed)
                            .map_err(|err| anyhow!("Failed to send Refreshed event to UI: {err}"))?;
                    }
                    UiToCore::Intent(intent) => {
                        let reply = apply_intent(&status, &mut scheduler, intent)?;
                        dump_status(&status, &options);
                        core_tx
                            .send(reply)
                            .map_err(|err| anyhow!("Failed to notify UI after {intent}: {err}"))?;
                    }
                }
            }
            token = fired_rx.recv_async() => {
                // The scheduler keeps a sender alive, so this never disconnects while we loop.
                let Ok(token) = token else { continue };
                scheduler.complete(token);
                if apply_timer(&status, token)? {
                    dump_status(&status, &options);
                    core_tx
                        .send(CoreToUi::Refreshed)
                        .map_err(|err| anyhow!("Failed to notify UI after timer {token}: {err}"))?;
                }
            }
            _ = tick.tick() => {
                write_status(&status, |s| {
                    s.temporarily.busy.spinner_frame = s.temporarily.busy.spinner_frame.wrapping_add(1);
                    Ok(())
                })?;
                core_tx
                    .send(CoreToUi::Tick)
                    .map_err(|err| anyhow!("failed to send Tick: {err}"))?;
            }
        }
    }
}

/// Apply one intent under the status lock and start / cancel the timers it asks for.
///
/// A rejected intent is not fatal: it is logged and shown as the transient UI error.
fn apply_intent(
    status: &SharedStatus,
    scheduler: &mut Scheduler,
    intent: Intent,
) -> Result<CoreToUi> {
    let outcome = write_status(status, |s| {
        let before = s.flow.screen();
        match s.flow.apply(intent) {
            Ok(effects) => {
                s.clear_error();
                if effects
                    .iter()
                    .any(|effect| matches!(effect, Effect::Schedule { .. }))
                {
                    s.temporarily.timer_started = Some(std::time::Instant::now());
                } else if s.flow.pending().is_none() {
                    s.temporarily.timer_started = None;
                }
                if matches!(intent, Intent::Start | Intent::Retry) {
                    s.temporarily.prompt_choice = Default::default();
                }
                log::info!(
                    "✅ {intent}: {before} -> {} (permission {})",
                    s.flow.screen(),
                    s.flow.permission()
                );
                Ok(Ok(effects))
            }
            Err(err) => {
                s.set_error(err.to_string());
                Ok(Err(err.to_string()))
            }
        }
    })?;

    match outcome {
        Ok(effects) => {
            scheduler.apply(effects);
            Ok(CoreToUi::Refreshed)
        }
        Err(message) => {
            log::warn!("⚠️ Rejected intent {intent}: {message}");
            Ok(CoreToUi::Error)
        }
    }
}

fn apply_timer(status: &SharedStatus, token: TimerToken) -> Result<bool> {
    write_status(status, |s| {
        let applied = s.flow.timer_elapsed(token);
        if applied {
            s.temporarily.timer_started = None;
        }
        Ok(applied)
    })
}

fn dump_status(status: &SharedStatus, options: &CoreOptions) {
    let Some(path) = &options.status_dump else {
        return;
    };
    let written = read_status(status, |s| Ok(TuiStatus::from_status(s)))
        .and_then(|snapshot| snapshot.write_to(path));
    if let Err(err) = written {
        log::warn!("Failed to dump status: {err:#}");
    }
}
