use crate::{
    cabin::CabinLayout,
    error::{ReservationError, Result},
    grouping::GroupingPolicy,
    seat::MAX_ROWS,
};
use clap::Parser;

pub const DEFAULT_RESERVATIONS: &str = "";
pub const DEFAULT_GROUPING: i64 = 1;

const ENV_LAYOUT: &str = "PLANE_RESERVATIONS_LAYOUT";
const ENV_POLICY: &str = "PLANE_RESERVATIONS_POLICY";

#[derive(Parser, Debug)]
#[command(author, version, about = "Reserve cabin seats and count groups of adjacent free seats", long_about = None)]
pub struct Args {
    /// Number of rows [required]
    #[arg(long = "number-rows", allow_negative_numbers = true)]
    pub number_rows: i64,

    /// Seat reservations, example '1F 2A 1G 2E 3D 3F'
    #[arg(long)]
    pub reservations: Option<String>,

    /// Seat grouping size
    #[arg(long, default_value_t = DEFAULT_GROUPING, allow_negative_numbers = true)]
    pub grouping: i64,

    /// Log finer grained trace detail
    #[arg(short, long)]
    pub verbose: bool,

    /// Cabin storage used for the seat map
    #[arg(long, value_enum, default_value_t, env = ENV_LAYOUT)]
    pub layout: CabinLayout,

    /// How groups inside a run of free seats are counted
    #[arg(long, value_enum, default_value_t, env = ENV_POLICY)]
    pub policy: GroupingPolicy,

    /// Print seat letters and row numbers around the seat map
    #[arg(long)]
    pub labels: bool,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub number_rows: usize,
    pub reservations: String,
    pub grouping: usize,
    pub verbose: bool,
    pub layout: CabinLayout,
    pub policy: GroupingPolicy,
    pub labels: bool,
}

fn positive(value: i64, flag: &str) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| ReservationError::InvalidConfiguration(format!("Provide valid --{flag}")))
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let number_rows = positive(args.number_rows, "number-rows")?;
        if number_rows > MAX_ROWS {
            return Err(ReservationError::InvalidConfiguration(format!(
                "Provide valid --number-rows (at most {MAX_ROWS})"
            )));
        }
        let grouping = positive(args.grouping, "grouping")?;

        // Omitting --reservations means none; passing it empty is a mistake.
        let reservations = match args.reservations {
            Some(reservations) if reservations.is_empty() => {
                return Err(ReservationError::InvalidConfiguration(
                    "Provide valid --reservations".to_string(),
                ));
            }
            Some(reservations) => reservations,
            None => DEFAULT_RESERVATIONS.to_string(),
        };

        Ok(Self {
            number_rows,
            reservations,
            grouping,
            verbose: args.verbose,
            layout: args.layout,
            policy: args.policy,
            labels: args.labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn parse(argv: &[&str]) -> Result<Config> {
        let args = Args::try_parse_from(std::iter::once("plane_reservations").chain(argv.iter().copied()))
            .unwrap();
        Config::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["--number-rows", "3"]).unwrap();
        assert_eq!(config.number_rows, 3);
        assert_eq!(config.reservations, "");
        assert_eq!(config.grouping, 1);
        assert!(!config.verbose);
        assert!(!config.labels);
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "-v",
            "--number-rows",
            "3",
            "--reservations",
            "1F 2A 1G 2E 3D 3F",
            "--grouping",
            "2",
            "--layout",
            "sectioned",
            "--policy",
            "partition",
            "--labels",
        ])
        .unwrap();
        assert_eq!(config.reservations, "1F 2A 1G 2E 3D 3F");
        assert_eq!(config.grouping, 2);
        assert!(config.verbose);
        assert_eq!(config.layout, CabinLayout::Sectioned);
        assert_eq!(config.policy, GroupingPolicy::Partition);
        assert!(config.labels);
    }

    #[test]
    fn test_policy_names() {
        let config = parse(&["--number-rows", "1", "--policy", "sliding-window"]).unwrap();
        assert_eq!(config.policy, GroupingPolicy::SlidingWindow);
    }

    #[test]
    fn test_layout_and_policy_from_env() {
        // Store original values
        let orig_layout = env::var(ENV_LAYOUT).ok();
        let orig_policy = env::var(ENV_POLICY).ok();

        unsafe {
            env::set_var(ENV_LAYOUT, "sectioned");
            env::set_var(ENV_POLICY, "partition");
        }

        let config = parse(&["--number-rows", "2"]).unwrap();
        assert_eq!(config.layout, CabinLayout::Sectioned);
        assert_eq!(config.policy, GroupingPolicy::Partition);

        // Explicit flags win over the environment
        let config = parse(&[
            "--number-rows",
            "2",
            "--layout",
            "flat",
            "--policy",
            "sliding-window",
        ])
        .unwrap();
        assert_eq!(config.layout, CabinLayout::Flat);
        assert_eq!(config.policy, GroupingPolicy::SlidingWindow);

        // Restore original values
        unsafe {
            env::remove_var(ENV_LAYOUT);
            env::remove_var(ENV_POLICY);
            if let Some(value) = orig_layout {
                env::set_var(ENV_LAYOUT, value);
            }
            if let Some(value) = orig_policy {
                env::set_var(ENV_POLICY, value);
            }
        }
    }

    #[test]
    fn test_number_rows_required() {
        assert!(Args::try_parse_from(["plane_reservations"]).is_err());
        assert!(Args::try_parse_from(["plane_reservations", "--number-rows", "x"]).is_err());
    }

    #[test]
    fn test_out_of_range_values() {
        for argv in [
            &["--number-rows", "0"][..],
            &["--number-rows", "-2"],
            &["--number-rows", "10001"],
            &["--number-rows", "9223372036854775807"],
            &["--number-rows", "2", "--grouping", "0"],
            &["--number-rows", "2", "--grouping", "-1"],
            &["--number-rows", "2", "--reservations", ""],
        ] {
            assert!(matches!(
                parse(argv),
                Err(ReservationError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_error_names_the_flag() {
        let err = parse(&["--number-rows", "2", "--grouping", "0"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration: Provide valid --grouping");
    }
}
