use bpaf::{construct, long, positional, OptionParser, Parser};

use apportion::DistributionStrategy;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Split(SplitParams),
    Evenly(EvenlyParams),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SplitParams {
    pub(crate) amount: usize,
    pub(crate) weights: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EvenlyParams {
    strategy: DistributionStrategy,
    seed: Option<u64>,
    pub(crate) amount: usize,
    pub(crate) portions: usize,
}

impl EvenlyParams {
    /// The chosen strategy, with `--seed` applied to `random`.
    pub(crate) fn strategy(&self) -> DistributionStrategy {
        match (self.strategy, self.seed) {
            (DistributionStrategy::Random { .. }, Some(seed)) => DistributionStrategy::Random { seed },
            (strategy, _) => strategy,
        }
    }
}

fn amount_parser() -> impl Parser<usize> {
    positional::<usize>("AMOUNT").help("Amount to divide")
}

fn split_parser() -> impl Parser<SplitParams> {
    let amount = amount_parser();
    let weights = positional::<f64>("WEIGHT")
        .help("Non-negative weight of each portion")
        .some("at least one weight is required");

    construct!(SplitParams { amount, weights })
}

fn strategy_parser() -> impl Parser<DistributionStrategy> {
    long("strategy")
        .short('s')
        .argument::<DistributionStrategy>("STRATEGY")
        .help(
            "Where leftover units go: from-left, from-right, from-center, from-outside, \
             from-left-spaced, from-outside-spaced or random",
        )
        .fallback(DistributionStrategy::default())
        .display_fallback()
}

fn seed_parser() -> impl Parser<Option<u64>> {
    long("seed")
        .argument::<u64>("SEED")
        .help("Seed for the random strategy")
        .optional()
}

fn evenly_parser() -> impl Parser<EvenlyParams> {
    let strategy = strategy_parser();
    let seed = seed_parser();
    let amount = amount_parser();
    let portions = positional::<usize>("PORTIONS").help("Number of portions");

    construct!(EvenlyParams {
        strategy,
        seed,
        amount,
        portions
    })
    .guard(
        |params: &EvenlyParams| params.seed.is_none() || !params.strategy.is_deterministic(),
        "--seed only applies to the random strategy",
    )
}

pub(crate) fn options() -> OptionParser<Command> {
    let split = construct!(Command::Split(split_parser()))
        .to_options()
        .command("split")
        .help("Divide an amount proportionally to a list of weights");
    let evenly = construct!(Command::Evenly(evenly_parser()))
        .to_options()
        .command("evenly")
        .help("Divide an amount into equal portions");

    construct!([split, evenly])
        .to_options()
        .descr("Exact, order-stable proportional division of integer amounts")
}
