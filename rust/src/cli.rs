use clap::Parser;

/// Time a random min-relaxation pass over an n x n matrix
#[derive(Parser, Debug)]
#[command(name = "timed-relax", long_about = None)]
pub struct Cli {
    /// Matrix dimension, negative values make the computation fail
    #[arg(short = 'n', long = "size", default_value_t = -1, allow_negative_numbers = true)]
    pub size: i32,

    /// Seed of the matrix fill
    #[arg(long, default_value_t = relax::DEFAULT_SEED)]
    pub seed: u64,

    /// Number of timed runs
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: u32,

    /// More log output on stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Exit with status 1 if any run reported an exception
    #[arg(long)]
    pub fail_exit_code: bool,
}

/// Settings of a benchmark session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: i32,
    pub seed: u64,
    pub iterations: u32,
    pub fail_exit_code: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: -1,
            seed: relax::DEFAULT_SEED,
            iterations: 1,
            fail_exit_code: false,
        }
    }
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            size: self.size,
            seed: self.seed,
            iterations: self.iterations,
            fail_exit_code: self.fail_exit_code,
        }
    }

    /// Default log filter for the `-v` count, `RUST_LOG` takes precedence.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_failing_run() {
        let cli = Cli::try_parse_from(["timed-relax"]).unwrap();
        assert_eq!(cli.config(), Config::default());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn accepts_negative_size() {
        let cli = Cli::try_parse_from(["timed-relax", "-n", "-5"]).unwrap();
        assert_eq!(cli.size, -5);
        let cli = Cli::try_parse_from(["timed-relax", "--size", "-1"]).unwrap();
        assert_eq!(cli.size, -1);
    }

    #[test]
    fn parses_all_options() {
        let cli = Cli::try_parse_from([
            "timed-relax", "--size", "50", "--seed", "7", "-i", "3", "-vv", "--fail-exit-code",
        ])
        .unwrap();
        assert_eq!(
            cli.config(),
            Config { size: 50, seed: 7, iterations: 3, fail_exit_code: true }
        );
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn rejects_zero_iterations() {
        assert!(Cli::try_parse_from(["timed-relax", "-i", "0"]).is_err());
    }
}
