use std::io::Write;
use std::time::{Duration, Instant};

/// Whole milliseconds in `elapsed`, truncated.
pub fn elapsed_ms(elapsed: Duration) -> u64 {
    1000 * elapsed.as_secs() + elapsed.subsec_millis() as u64
}

/// Wall-clock timer that reports itself when it goes out of scope.
///
/// The report is a single `"<ms>ms"` line written to the borrowed sink from `Drop`,
/// so it is emitted on a normal return, an early `?` return and while unwinding
/// from a panic alike.
pub struct ScopedTimer<'a, W: Write + ?Sized> {
    start: Instant,
    sink: &'a mut W,
}

impl<'a, W: Write + ?Sized> ScopedTimer<'a, W> {
    pub fn start(sink: &'a mut W) -> ScopedTimer<'a, W> {
        ScopedTimer { start: Instant::now(), sink }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<W: Write + ?Sized> Drop for ScopedTimer<'_, W> {
    fn drop(&mut self) {
        let ms = elapsed_ms(self.start.elapsed());
        // Drop can't fail, a broken sink only loses the report
        if let Err(err) = writeln!(self.sink, "{}ms", ms).and_then(|_| self.sink.flush()) {
            tracing::warn!(elapsed_ms = ms, error = %err, "failed to write timing report");
        }
    }
}

/// Call `f(arg0, arg1)` exactly once and report how long it took to `sink`.
///
/// Whatever `f` returns is handed back untouched, `Err` included. The timing line
/// is written before this function returns or unwinds.
pub fn timed<W, F, A, B, R>(sink: &mut W, f: F, arg0: A, arg1: B) -> R
where
    W: Write + ?Sized,
    F: FnOnce(A, B) -> R,
{
    let timer = ScopedTimer::start(sink);
    let result = f(arg0, arg1);
    tracing::trace!(elapsed = ?timer.elapsed(), "timed call returned");
    result
}

/// Closure flavour of [`timed`].
pub fn measure<W, F, R>(sink: &mut W, f: F) -> R
where
    W: Write + ?Sized,
    F: FnOnce() -> R,
{
    let _timer = ScopedTimer::start(sink);
    f()
}
