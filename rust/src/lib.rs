//! Driver that times the relaxation and reports on stdout.
//!
//! Each run writes two lines: the elapsed time as `<ms>ms`, then `1`/`0` for the
//! completion flag, or `exception` if the computation failed in any way.

pub mod cli;

use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use relax::ComputationFailure;
use tools::timer;

pub use cli::{Cli, Config};

/// What a single timed run reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed { flag: bool },
    Exception,
}

impl Outcome {
    pub fn is_exception(&self) -> bool {
        matches!(self, Outcome::Exception)
    }

    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Outcome::Completed { flag } => writeln!(out, "{}", *flag as u8),
            Outcome::Exception => writeln!(out, "exception"),
        }
    }
}

/// Time one relaxation of an `n`x`n` matrix and report it to `out`.
///
/// Failures of the computation never surface as `Err`, they are reported as
/// `exception`. Only a failing `out` does.
pub fn run_once<W: Write + ?Sized>(n: i32, seed: u64, out: &mut W) -> io::Result<Outcome> {
    run_guarded(out, n, |n, completed| relax::calculate_seeded(n, seed, completed))
}

/// Run `config.iterations` timed relaxations back to back.
pub fn run<W: Write + ?Sized>(config: &Config, out: &mut W) -> io::Result<Vec<Outcome>> {
    tracing::info!(
        n = config.size,
        seed = config.seed,
        iterations = config.iterations,
        "benchmarking relaxation"
    );
    (0..config.iterations)
        .map(|_| run_once(config.size, config.seed, &mut *out))
        .collect()
}

fn run_guarded<W, F>(out: &mut W, n: i32, compute: F) -> io::Result<Outcome>
where
    W: Write + ?Sized,
    F: FnOnce(i32, &mut bool) -> Result<(), ComputationFailure>,
{
    let mut completed = false;
    // Catch panics as well so that every failure ends up as the same marker
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        timer::timed(&mut *out, compute, n, &mut completed)
    }));
    let outcome = match result {
        Ok(Ok(())) => Outcome::Completed { flag: completed },
        Ok(Err(err)) => {
            tracing::info!(n, error = %err, "computation failed");
            Outcome::Exception
        }
        Err(payload) => {
            tracing::warn!(n, panic = panic_message(payload.as_ref()), "computation panicked");
            Outcome::Exception
        }
    };
    outcome.write_to(out)?;
    out.flush()?;
    Ok(outcome)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic payload"
    }
}
