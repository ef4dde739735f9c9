// Renders each screen into an off-screen buffer and checks the visible text.

use anyhow::Result;

use traywise::{
    flow::{Confidence, FlowController, FlowTimings, ScanResult, Screen},
    tui::{
        rendering::render_to_text,
        status::{PromptChoice, Status},
    },
};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 32;

/// Blank out spinner glyphs so assertions do not depend on the animation frame.
fn filter_dynamic_content(content: &str) -> String {
    let spinner_chars = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    content
        .chars()
        .map(|c| if spinner_chars.contains(&c) { ' ' } else { c })
        .collect()
}

fn screen_text(status: &Status) -> Result<String> {
    Ok(filter_dynamic_content(&render_to_text(status, WIDTH, HEIGHT)?))
}

fn results_status(result: ScanResult) -> Result<Status> {
    let mut flow = FlowController::new(FlowTimings::default()).with_result(result);
    flow.start()?;
    let effects = flow.set_permission(true)?;
    let token = match effects.as_slice() {
        [traywise::flow::Effect::Schedule { token, .. }] => *token,
        other => anyhow::bail!("unexpected effects {other:?}"),
    };
    assert!(flow.timer_elapsed(token));
    assert_eq!(flow.screen(), Screen::Results);
    Ok(Status::with_flow(flow))
}

#[test]
fn landing_shows_title_and_prompt() -> Result<()> {
    let text = screen_text(&Status::default())?;
    assert!(text.contains("TrayWise AI"));
    assert!(text.contains("Enter: start"));
    assert!(text.contains("q: quit"));
    assert!(!text.contains("Esc: back to start"));
    Ok(())
}

#[test]
fn camera_prompt_offers_both_buttons() -> Result<()> {
    let mut status = Status::default();
    status.flow.start()?;
    status.temporarily.prompt_choice = PromptChoice::Deny;
    let text = screen_text(&status)?;
    assert!(text.contains("[ Deny ]"));
    assert!(text.contains("[ Allow Camera ]"));
    assert!(text.contains("Esc: back to start"));
    Ok(())
}

#[test]
fn camera_scanning_shows_processing() -> Result<()> {
    let mut status = Status::default();
    status.flow.start()?;
    status.flow.set_permission(true)?;
    status.temporarily.timer_started = Some(std::time::Instant::now());
    let text = screen_text(&status)?;
    assert!(text.contains("AI Processing in progress..."));
    assert!(!text.contains("[ Allow Camera ]"));
    Ok(())
}

#[test]
fn camera_denied_offers_retry() -> Result<()> {
    let mut status = Status::default();
    status.flow.start()?;
    status.flow.set_permission(false)?;
    let text = screen_text(&status)?;
    assert!(text.contains("[ Try Again ]"));
    assert!(text.contains("Enter/r: try again"));
    Ok(())
}

#[test]
fn results_list_fixture_recommendations() -> Result<()> {
    let text = screen_text(&results_status(ScanResult::fixture())?)?;
    assert!(text.contains("1. Separate bottle cap"));
    assert!(text.contains("2. Drain remaining soup"));
    assert!(text.contains("3. Remove plastic wrapper"));
    assert!(text.contains("Mixed Waste"));
    assert!(text.contains("87%"));
    assert!(text.contains("[ Finish ]"));
    Ok(())
}

#[test]
fn confidence_extremes_render() -> Result<()> {
    for percent in [0, 100] {
        let result = ScanResult {
            confidence: Confidence::new(percent)?,
            ..ScanResult::fixture()
        };
        let text = screen_text(&results_status(result)?)?;
        assert!(text.contains(&format!("{percent}%")), "missing {percent}% in\n{text}");
    }
    Ok(())
}

#[test]
fn finish_screen_thanks_the_user() -> Result<()> {
    let mut status = results_status(ScanResult::fixture())?;
    status.flow.finish()?;
    let text = screen_text(&status)?;
    assert!(text.contains("Sorting Complete!"));
    assert!(text.contains("Thank you for using TrayWise AI"));
    assert!(text.contains("Redirecting"));
    Ok(())
}

#[test]
fn error_line_and_dismiss_hint_appear() -> Result<()> {
    let mut status = Status::default();
    status.set_error("cannot finish from the landing screen");
    let text = screen_text(&status)?;
    assert!(text.contains("cannot finish from the landing screen"));
    assert!(text.contains("c: dismiss error"));
    Ok(())
}

#[test]
fn tiny_terminal_does_not_panic() -> Result<()> {
    let status = results_status(ScanResult::fixture())?;
    render_to_text(&status, 20, 6)?;
    render_to_text(&Status::default(), 30, 8)?;
    Ok(())
}
