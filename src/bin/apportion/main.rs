mod args;

use std::process::ExitCode;

use apportion::{evenly::evenly_ranges, split::split, Portion, Result};

use args::{options, Command};

fn main() -> ExitCode {
    env_logger::init();

    let command = options().run();
    match run(&command) {
        Ok(portions) => {
            for portion in portions {
                println!("{portion}\t{}", portion.len());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command) -> Result<Vec<Portion>> {
    match command {
        Command::Split(params) => split(params.amount, &params.weights),
        Command::Evenly(params) => evenly_ranges(params.amount, params.portions, params.strategy()),
    }
}

#[cfg(test)]
mod tests {
    use super::{options, run, Command};
    use apportion::{ApportionError, DistributionStrategy};

    fn parse(line: &str) -> Option<Command> {
        let args: Vec<&str> = line.split_whitespace().collect();
        options().run_inner(&args[..]).ok()
    }

    fn sizes(line: &str) -> Vec<usize> {
        let command = parse(line).unwrap();
        run(&command).unwrap().iter().map(|p| p.len()).collect()
    }

    #[test]
    fn split_command() {
        assert_eq!(sizes("split 6 1 1 1 1"), vec![2, 1, 1, 2]);
        assert_eq!(sizes("split 5 3.0 1.0"), vec![4, 1]);
    }

    #[test]
    fn evenly_command_defaults_to_outside_spaced() {
        assert_eq!(sizes("evenly 5 3"), vec![2, 1, 2]);
        assert_eq!(sizes("evenly --strategy from-left 5 3"), vec![2, 2, 1]);
    }

    #[test]
    fn seed_reaches_the_random_strategy() {
        let Some(Command::Evenly(params)) = parse("evenly -s random --seed 4 11 8") else {
            panic!("evenly command did not parse");
        };
        assert_eq!(params.strategy(), DistributionStrategy::Random { seed: 4 });
        assert_eq!(sizes("evenly -s random --seed 4 11 8"), sizes("evenly -s random --seed 4 11 8"));
        assert_eq!(sizes("evenly -s random --seed 4 11 8").iter().sum::<usize>(), 11);
    }

    #[test]
    fn seed_without_random_strategy_is_rejected() {
        assert_eq!(parse("evenly --seed 4 11 8"), None);
        assert_eq!(parse("evenly -s from-left --seed 4 11 8"), None);
    }

    #[test]
    fn rejects_malformed_command_lines() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("split 6"), None);
        assert_eq!(parse("evenly 6"), None);
        assert_eq!(parse("evenly -s diagonal 6 2"), None);
        assert_eq!(parse("shuffle 6"), None);
    }

    #[test]
    fn reports_invalid_arguments() {
        let zero_portions = parse("evenly 6 0").unwrap();
        assert_eq!(run(&zero_portions), Err(ApportionError::NoPortions));

        let bad_weight = Command::Split(super::args::SplitParams {
            amount: 6,
            weights: vec![1.0, -1.0],
        });
        assert!(matches!(
            run(&bad_weight),
            Err(ApportionError::InvalidWeight { index: 1, .. })
        ));
    }
}
