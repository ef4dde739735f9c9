// Drives the core task end to end with tokio's paused clock, the way the
// input thread would, and checks the timed transitions.

use anyhow::Result;
use std::time::Duration;
use tokio::{task::JoinHandle, time::Instant};

use traywise::{
    flow::{FlowController, FlowTimings, Intent, PermissionState, Screen},
    tui::{
        runtime::{run_core, CoreOptions},
        status::{new_shared, SharedStatus, Status, TuiStatus},
        utils::bus::{CoreToUi, UiToCore},
    },
};

struct Harness {
    status: SharedStatus,
    ui_tx: flume::Sender<UiToCore>,
    core_rx: flume::Receiver<CoreToUi>,
    kill_rx: flume::Receiver<()>,
    core: JoinHandle<Result<()>>,
}

fn spawn_core(options: CoreOptions) -> Harness {
    let status = new_shared(Status::with_flow(FlowController::new(FlowTimings::default())));
    let (core_tx, core_rx) = flume::unbounded();
    let (ui_tx, ui_rx) = flume::unbounded();
    let (kill_tx, kill_rx) = flume::bounded(1);
    let core = tokio::spawn(run_core(status.clone(), ui_rx, core_tx, kill_tx, options));
    Harness {
        status,
        ui_tx,
        core_rx,
        kill_rx,
        core,
    }
}

impl Harness {
    fn send(&self, intent: Intent) -> Result<()> {
        self.ui_tx.send(UiToCore::Intent(intent))?;
        Ok(())
    }

    fn screen(&self) -> Screen {
        self.status.read().flow.screen()
    }

    async fn wait_for(&self, screen: Screen) {
        while self.screen() != screen {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    async fn quit(self) -> Result<()> {
        self.ui_tx.send(UiToCore::Quit)?;
        tokio_test::assert_ok!(self.core.await?);
        assert!(self.kill_rx.try_recv().is_ok(), "input thread must be told to stop");
        assert!(self.core_rx.try_iter().any(|msg| msg == CoreToUi::Quit));
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn full_cycle_follows_scripted_delays() -> Result<()> {
    let h = spawn_core(CoreOptions::default());

    h.send(Intent::Start)?;
    h.wait_for(Screen::Camera).await;
    assert_eq!(h.status.read().flow.permission(), PermissionState::Unset);

    let granted_at = Instant::now();
    h.send(Intent::CameraPermission(true))?;
    h.wait_for(Screen::Results).await;
    assert!(granted_at.elapsed() >= Duration::from_millis(3000));
    assert!(granted_at.elapsed() < Duration::from_millis(3200));
    assert!(h.status.read().temporarily.timer_started.is_none());

    let finished_at = Instant::now();
    h.send(Intent::Finish)?;
    h.wait_for(Screen::Finish).await;
    h.wait_for(Screen::Landing).await;
    assert!(finished_at.elapsed() >= Duration::from_millis(5000));
    assert!(finished_at.elapsed() < Duration::from_millis(5200));

    {
        let status = h.status.read();
        assert_eq!(status.flow.permission(), PermissionState::Unset);
        assert!(status.flow.pending().is_none());
    }

    h.quit().await
}

#[tokio::test(start_paused = true)]
async fn abort_during_scan_cancels_the_timer() -> Result<()> {
    let h = spawn_core(CoreOptions::default());

    h.send(Intent::Start)?;
    h.wait_for(Screen::Camera).await;
    h.send(Intent::CameraPermission(true))?;
    tokio::time::sleep(Duration::from_millis(1000)).await;

    h.send(Intent::Abort)?;
    h.wait_for(Screen::Landing).await;

    // Well past the original deadline: the cancelled scan must not resurface.
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(h.screen(), Screen::Landing);
    assert!(h.status.read().flow.pending().is_none());

    h.send(Intent::Start)?;
    h.wait_for(Screen::Camera).await;
    assert_eq!(h.status.read().flow.permission(), PermissionState::Unset);

    h.quit().await
}

#[tokio::test(start_paused = true)]
async fn denied_then_retry_shows_prompt_again() -> Result<()> {
    let h = spawn_core(CoreOptions::default());

    h.send(Intent::Start)?;
    h.send(Intent::CameraPermission(false))?;
    while h.status.read().flow.permission() != PermissionState::Denied {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(h.screen(), Screen::Camera);
    assert!(h.status.read().flow.pending().is_none());

    h.send(Intent::Retry)?;
    while h.status.read().flow.permission() != PermissionState::Unset {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(h.screen(), Screen::Camera);

    h.quit().await
}

#[tokio::test(start_paused = true)]
async fn rejected_intent_surfaces_an_error() -> Result<()> {
    let h = spawn_core(CoreOptions::default());

    h.send(Intent::Finish)?;
    loop {
        let msg = h.core_rx.recv_async().await?;
        if msg == CoreToUi::Error {
            break;
        }
    }
    {
        let status = h.status.read();
        assert_eq!(status.flow.screen(), Screen::Landing);
        assert!(status.temporarily.error.is_some());
    }

    // The next accepted intent clears it.
    h.send(Intent::Start)?;
    h.wait_for(Screen::Camera).await;
    assert!(h.status.read().temporarily.error.is_none());

    h.quit().await
}

#[tokio::test(start_paused = true)]
async fn status_dump_tracks_the_flow() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("status.json");
    let h = spawn_core(CoreOptions {
        status_dump: Some(path.clone()),
        ..CoreOptions::default()
    });

    h.send(Intent::Start)?;
    h.wait_for(Screen::Camera).await;
    h.send(Intent::CameraPermission(true))?;
    while h.status.read().flow.pending().is_none() {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    // Let the core finish writing after the state change.
    tokio::time::sleep(Duration::from_millis(10)).await;

    let snapshot: TuiStatus = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(snapshot.screen, Screen::Camera);
    assert_eq!(snapshot.permission, PermissionState::Granted);
    assert!(snapshot.pending_timer.is_some());
    assert!(snapshot.result.is_none());

    h.wait_for(Screen::Results).await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    let snapshot: TuiStatus = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(snapshot.screen, Screen::Results);
    assert_eq!(
        snapshot.result.map(|r| r.confidence.percent()),
        Some(87)
    );

    h.quit().await
}
