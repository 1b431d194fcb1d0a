// Headless mode: drive a carousel from a script instead of a terminal UI
//
// Each script word is one input (`next`, `previous`, `hold`, `dismiss`) or a
// pause (`wait`, `wait:<ms>`). An observer task subscribes to the controller
// and prints every state it publishes, so the tooltip's auto-dismiss shows up
// on its own line.
//
// Run with: artspace --headless --script next,hold,wait

use crate::carousel::{CarouselController, CarouselInput, CarouselState};
use anyhow::{bail, Context, Result};
use std::time::Duration;
use tokio::time::sleep;

/// Script used when none is given
pub const DEFAULT_SCRIPT: &str = "next,next,next,previous,hold,wait,dismiss";

/// Pause between steps so the observer sees each state
const STEP_DELAY: Duration = Duration::from_millis(150);

/// Extra time a bare `wait` adds past the tooltip lifetime
const WAIT_SLACK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Input(CarouselInput),
    /// Sleep past the tooltip lifetime
    WaitForTooltip,
    Wait(Duration),
}

/// Parse a comma-separated script
pub fn parse_script(script: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();

    for word in script.split(',').map(str::trim).filter(|w| !w.is_empty()) {
        let step = if word.eq_ignore_ascii_case("wait") {
            Step::WaitForTooltip
        } else if let Some(ms) = word.strip_prefix("wait:") {
            let ms: u64 = ms
                .parse()
                .with_context(|| format!("invalid wait duration '{}'", word))?;
            Step::Wait(Duration::from_millis(ms))
        } else if let Some(input) = CarouselInput::from_word(word) {
            Step::Input(input)
        } else {
            bail!("unknown script step '{}'", word);
        };
        steps.push(step);
    }

    if steps.is_empty() {
        bail!("script has no steps");
    }
    Ok(steps)
}

/// One line describing a published state
pub fn describe(state: &CarouselState, tooltip_message: &str) -> String {
    let (position, len) = state.position();
    let mut line = format!("[{}/{}] {}", position, len, state.current_item().caption());
    if state.tooltip_visible() {
        line.push_str(&format!("  💬 {}", tooltip_message));
    }
    line
}

/// Run `steps` against `controller`, printing each published state
///
/// Returns the printed lines. The controller is dropped at the end, which
/// also cancels a tooltip timer the script left running.
pub async fn run_demo(
    mut controller: CarouselController,
    steps: &[Step],
    tooltip_duration: Duration,
    tooltip_message: &str,
) -> Result<Vec<String>> {
    let mut rx = controller.subscribe();
    let message = tooltip_message.to_string();

    let observer = tokio::spawn(async move {
        let mut transcript = Vec::new();
        loop {
            let line = describe(&rx.borrow_and_update(), &message);
            println!("{}", line);
            transcript.push(line);

            // Err once the controller is gone
            if rx.changed().await.is_err() {
                break;
            }
        }
        transcript
    });

    for step in steps {
        sleep(STEP_DELAY).await;
        tracing::debug!("Step: {:?}", step);
        match *step {
            Step::Input(input) => controller.apply(input),
            Step::WaitForTooltip => sleep(tooltip_duration + WAIT_SLACK).await,
            Step::Wait(duration) => sleep(duration).await,
        }
    }

    sleep(STEP_DELAY).await;
    drop(controller);

    observer.await.context("State observer failed")
}
