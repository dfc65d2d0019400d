/// the two-phase training schedule. half the hands seed the tree from
/// scripted baseline matchups, the other half let the tree play its
/// own hands with an exploration rate that decays to zero over the
/// first three quarters of the phase.
pub fn learn(hands: usize, path: &str) -> Result<()> {
    let mut tree = GameTree::root();
    let mut rng = rand::rng();
    let seeding = hands / 2;
    log::info!("seeding the tree with {} baseline hands", seeding);
    for i in 0..seeding {
        let mut sparring = TestingPlayer::new(STACK);
        let mut baseline = NaivePlayer::new(STACK);
        let states = match rng.random::<bool>() {
            true => run_round(&mut sparring, &mut baseline),
            false => run_round(&mut baseline, &mut sparring),
        };
        remember(&mut tree, &states);
        if (i + 1) % 500 == 0 {
            log::info!("seeded {} hands", i + 1);
        }
    }
    let learning = hands - seeding;
    let horizon = learning * 3 / 4;
    log::info!(
        "learning over {} hands, exploring for the first {}",
        learning,
        horizon
    );
    for i in 0..learning {
        let threshold = 1.0 - i as Probability / horizon.max(1) as Probability;
        let exploring = i < horizon && rng.random::<Probability>() <= threshold;
        let states = {
            let mut learner = TreePlayer::new(STACK, &tree, exploring);
            let mut baseline = NaivePlayer::new(STACK);
            match rng.random::<bool>() {
                true => run_round(&mut learner, &mut baseline),
                false => run_round(&mut baseline, &mut learner),
            }
        };
        remember(&mut tree, &states);
        if (i + 1) % 500 == 0 {
            log::info!("learned {} hands", i + 1);
        }
    }
    tree.save(Path::new(path))?;
    log::info!("saved the game tree to {}", path);
    Ok(())
}

/// play interactive hands at the terminal against a trained tree
pub fn play(hands: usize, path: &str) -> Result<()> {
    let tree = GameTree::load(Path::new(path))?;
    log::info!("loaded the game tree from {}", path);
    for _ in 0..hands {
        let mut human = Terminal::new(STACK);
        let mut agent = TreePlayer::new(STACK, &tree, false);
        let states = run_round(&mut human, &mut agent);
        let last = states.last().context("the hand produced no states")?;
        println!(
            "\nBOARD [{}]   YOU [{}]   AGENT [{}]",
            last.board(),
            last.hole(0),
            last.hole(1)
        );
        match last.winner() {
            Some(winner) => println!("{} takes the pool of {}", winner, last.pool()),
            None => println!("the hand did not settle"),
        }
    }
    Ok(())
}

/// every finished hand is inserted from both perspectives
fn remember(tree: &mut GameTree, states: &[Game]) {
    let moves = match states.last() {
        Some(last) => last.move_sequence(),
        None => return,
    };
    tree.witness(&moves, states, 0);
    tree.witness(&moves, states, 1);
}

use crate::gameplay::engine::run_round;
use crate::gameplay::game::Game;
use crate::players::naive::NaivePlayer;
use crate::players::terminal::Terminal;
use crate::players::testing::TestingPlayer;
use crate::players::tree::TreePlayer;
use crate::tree::tree::GameTree;
use crate::{Probability, STACK};
use anyhow::{Context, Result};
use rand::Rng;
use std::path::Path;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_small_run_grows_the_tree() {
        let mut tree = GameTree::root();
        for _ in 0..10 {
            let mut sparring = TestingPlayer::new(STACK);
            let mut baseline = NaivePlayer::new(STACK);
            let states = run_round(&mut sparring, &mut baseline);
            remember(&mut tree, &states);
        }
        assert_eq!(tree.total(), 20);
        assert!(tree.children().count() >= 1);
    }

    #[test]
    fn learn_writes_a_loadable_tree() {
        let path = std::env::temp_dir().join("gametree-training-test.txt");
        let path = path.to_str().unwrap();
        learn(20, path).unwrap();
        let tree = GameTree::load(Path::new(path)).unwrap();
        assert_eq!(tree.total(), 40);
        std::fs::remove_file(path).unwrap();
    }
}
