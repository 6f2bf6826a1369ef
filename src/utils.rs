use std::time::{Duration, Instant};

pub(crate) fn trace(l_type: &str, l_step: &str, start: Instant, prev_elapsed: Duration) -> Duration {
    log::trace!("{} | Total={:.2?} | {}={:.2?}", l_type, start.elapsed(), l_step, start.elapsed() - prev_elapsed);
    start.elapsed()
}
