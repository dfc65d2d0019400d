use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "train and play against the self-learning game tree")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// train a game tree through self-play and save it to disk
    Learn {
        #[arg(long, default_value_t = 1000)]
        hands: usize,
        #[arg(long, default_value = "gametree.txt")]
        path: String,
    },
    /// play interactive hands against a trained game tree
    Play {
        #[arg(long, default_value_t = 1)]
        hands: usize,
        #[arg(long, default_value = "gametree.txt")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    deeppoker::log();
    match Args::parse().command {
        Command::Learn { hands, path } => deeppoker::training::learn(hands, &path),
        Command::Play { hands, path } => deeppoker::training::play(hands, &path),
    }
}
