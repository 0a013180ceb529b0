use dioxus::prelude::*;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval};
use vesla_domain::counter::CounterAnimation;

/// Repaint cadence of running animations (~60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Context marker present when the tree is rendered once to static HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prerendered;

/// Counts from zero up to `target` over `duration`, one step per frame.
///
/// The animation restarts from zero whenever `target` or `duration` changes and stops
/// once the final value is shown. Under [`Prerendered`] the target is returned as is.
pub fn use_counter(target: u64, duration: Duration) -> Signal<u64> {
    let prerendered = try_use_context::<Prerendered>().is_some();
    let count = use_signal(move || if prerendered { target } else { 0 });

    let _animation = use_resource(use_reactive!(|(target, duration)| async move {
        let mut count = count;
        if prerendered {
            count.set(target);
            return;
        }

        let animation = CounterAnimation::new(target, duration);
        count.set(0);

        let started = Instant::now();
        let mut ticker = interval(FRAME_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let frame = animation.frame(started.elapsed());
            // peek: reading would subscribe this resource to its own output
            if *count.peek() != frame.value {
                count.set(frame.value);
            }
            if frame.finished {
                tracing::trace!(target, "Counter animation finished");
                break;
            }
        }
    }));

    count
}
