use proptest::prelude::*;
use std::time::Duration;
use vesla_domain::counter::CounterAnimation;

proptest! {
    #[test]
    fn reaches_target_once_duration_has_elapsed(
        target in any::<u32>(),
        duration_ms in 0_u64..10_000,
        overrun_ms in 0_u64..10_000,
    ) {
        let counter = CounterAnimation::new(u64::from(target), Duration::from_millis(duration_ms));
        let frame = counter.frame(Duration::from_millis(duration_ms + overrun_ms));
        prop_assert_eq!(frame.value, u64::from(target));
        prop_assert!(frame.finished);
    }

    #[test]
    fn never_decreases_over_time(
        target in any::<u32>(),
        duration_ms in 1_u64..10_000,
        mut ticks in proptest::collection::vec(0_u64..12_000, 1..64),
    ) {
        let counter = CounterAnimation::new(u64::from(target), Duration::from_millis(duration_ms));
        ticks.sort_unstable();

        let mut previous = 0;
        for tick in ticks {
            let value = counter.value(Duration::from_millis(tick));
            prop_assert!(value >= previous, "{value} < {previous} at {tick}ms");
            prop_assert!(value <= u64::from(target));
            previous = value;
        }
    }

    #[test]
    fn unfinished_frames_stay_below_target(
        target in 1_u64..1_000_000,
        duration_ms in 2_u64..10_000,
    ) {
        let counter = CounterAnimation::new(target, Duration::from_millis(duration_ms));
        let frame = counter.frame(Duration::from_millis(duration_ms - 1));
        prop_assert!(!frame.finished);
        prop_assert!(frame.value < target);
    }
}
