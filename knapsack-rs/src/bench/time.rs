use std::sync::LazyLock;
use std::time::{Duration, Instant};

use cpu_time::ThreadTime;
use log::trace;

use crate::bench::TimedResult;
use crate::entities::Solution;

/// Instant the library first read a clock
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Moment in time, read from both the wall clock and the CPU clock of the calling thread
#[derive(Debug, Clone, Copy)]
pub struct TimeStamp {
    wall: Instant,
    cpu: Duration,
}

impl TimeStamp {
    pub fn now() -> Self {
        TimeStamp {
            wall: Instant::now(),
            cpu: thread_cpu_time(),
        }
    }

    /// CPU time consumed by the calling thread since this timestamp, in seconds.
    /// Only meaningful on the thread which created the timestamp.
    pub fn cpu_elapsed_secs(&self) -> f64 {
        thread_cpu_time().saturating_sub(self.cpu).as_secs_f64()
    }

    /// Wall clock time since this timestamp, in seconds
    pub fn wall_elapsed_secs(&self) -> f64 {
        self.wall.elapsed().as_secs_f64()
    }
}

/// CPU time consumed by the calling thread.
/// Reads as zero if the thread's CPU clock is unavailable.
pub fn thread_cpu_time() -> Duration {
    ThreadTime::try_now()
        .map(|t| t.as_duration())
        .unwrap_or(Duration::ZERO)
}

/// Measures the execution time of `solve`, such that both the CPU and the wall clock time are non-zero.
///
/// `solve` is run once, then twice, four times, ... until both accumulated times are strictly positive.
/// The returned times are the totals over all runs (not an average), the solution is the one of the last run.
pub fn execution_time(mut solve: impl FnMut() -> Solution) -> TimedResult {
    let mut exec_count: u64 = 1;
    let mut cpu_time = 0.0;
    let mut wall_clock_time = 0.0;

    loop {
        let start = TimeStamp::now();
        let mut solution = solve();
        for _ in 1..exec_count {
            solution = solve();
        }
        cpu_time += start.cpu_elapsed_secs();
        wall_clock_time += start.wall_elapsed_secs();

        if cpu_time > 0.0 && wall_clock_time > 0.0 {
            trace!(
                "[TIME] measured after {} runs: {:.6}s cpu, {:.6}s wall",
                2 * exec_count - 1,
                cpu_time,
                wall_clock_time
            );
            return TimedResult {
                solution,
                cpu_time,
                wall_clock_time,
                relative_error: None,
            };
        }
        exec_count *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn times_are_positive() {
        let res = execution_time(|| Solution {
            price: 3,
            config: vec![true],
        });
        assert!(res.cpu_time > 0.0);
        assert!(res.wall_clock_time > 0.0);
        assert_eq!(res.solution.price, 3);
        assert_eq!(res.relative_error, None);
    }

    #[test]
    fn thread_cpu_time_only_counts_work_on_this_thread() {
        let before = thread_cpu_time();
        std::thread::sleep(std::time::Duration::from_millis(50));
        let slept = thread_cpu_time().saturating_sub(before);
        assert!(slept < std::time::Duration::from_millis(25));

        let start = TimeStamp::now();
        let mut x = 0u64;
        while start.cpu_elapsed_secs() == 0.0 {
            x = std::hint::black_box(x.wrapping_add(1));
        }
        assert!(thread_cpu_time() > before);
    }

    #[test]
    fn solution_comes_from_last_run() {
        let n_runs = Cell::new(0u64);
        let res = execution_time(|| {
            n_runs.set(n_runs.get() + 1);
            Solution {
                price: n_runs.get(),
                config: vec![],
            }
        });
        // runs happen in rounds of 1, 2, 4, ... so the total is always 2^r - 1
        let total = n_runs.get();
        assert!((total + 1).is_power_of_two());
        assert_eq!(res.solution.price, total);
    }
}
