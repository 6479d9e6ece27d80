//! Wall-clock timing loop shared by every suite.

use alg_core::stats::SampleStats;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Time `routine` over `runs` repetitions and summarise the samples.
///
/// `setup` runs before every repetition outside the timed region and hands
/// its output to `routine`. The routine's result is passed through
/// [`black_box`] so the work cannot be optimised away.
pub fn time_runs<I, O, S, F>(label: &str, runs: usize, mut setup: S, mut routine: F) -> SampleStats
where
    S: FnMut() -> I,
    F: FnMut(I) -> O,
{
    let mut durations: Vec<Duration> = Vec::with_capacity(runs);

    for run in 0..runs {
        let input = setup();

        let start = Instant::now();
        let output = routine(black_box(input));
        let elapsed = start.elapsed();

        black_box(output);
        log::debug!(
            "{label} run {}: {:.6} seconds",
            run + 1,
            elapsed.as_secs_f64()
        );
        durations.push(elapsed);
    }

    SampleStats::from_durations(&durations)
}

#[cfg(test)]
mod tests {
    use super::time_runs;
    use std::cell::Cell;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn records_one_sample_per_run() {
        let stats = time_runs("noop", 4, || (), |()| 1 + 1);
        assert_eq!(stats.len(), 4);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn setup_runs_once_per_repetition_and_feeds_routine() {
        let setups = Cell::new(0);
        let mut seen = Vec::new();

        time_runs(
            "counting",
            3,
            || {
                setups.set(setups.get() + 1);
                setups.get()
            },
            |n| seen.push(n),
        );

        assert_eq!(setups.get(), 3);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn setup_time_is_not_measured() {
        let stats = time_runs(
            "slow setup",
            2,
            || thread::sleep(Duration::from_millis(30)),
            |()| (),
        );
        assert!(stats.max < 0.03, "setup leaked into timing: {}", stats.max);
    }

    #[test]
    fn routine_time_is_measured() {
        let stats = time_runs("sleep", 2, || (), |()| thread::sleep(Duration::from_millis(5)));
        assert!(stats.min >= 0.005);
    }

    #[test]
    fn zero_runs_yields_empty_stats() {
        let stats = time_runs("never", 0, || (), |()| ());
        assert!(stats.is_empty());
        assert_eq!(stats.mean, 0.0);
    }
}
