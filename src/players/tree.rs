/// the learning seat. it walks a borrowed game tree as the hand
/// unfolds, descending through the tag sets that describe what it
/// sees, and acts out the child with the highest confidence. when the
/// walk falls off the tree, or when the trainer asks for it, the seat
/// switches to exploring and plays uniformly random legal moves so
/// the tree grows new branches.
pub struct TreePlayer<'a> {
    seat: Seat,
    node: &'a GameTree,
    exploring: bool,
    new_stage: bool,
    old_stage: Stage,
    old_board: Hand,
}

impl<'a> TreePlayer<'a> {
    pub fn new(stack: Chips, tree: &'a GameTree, exploring: bool) -> Self {
        Self {
            seat: Seat::new(stack),
            node: tree,
            exploring,
            new_stage: false,
            old_stage: Stage::NotDealt,
            old_board: Hand::empty(),
        }
    }

    /// descend into the child keyed by `tags`, or start exploring if
    /// the situation has never been seen before
    fn descend(&mut self, tags: &Tags) {
        match self.node.child(tags) {
            Some(child) => self.node = child,
            None => {
                log::debug!("unfamiliar situation {}", tags);
                self.exploring = true;
            }
        }
    }

    /// descend if the child exists; our own move may land on a branch
    /// the tree has not grown yet, which is fine
    fn follow(&mut self, tags: &Tags) {
        if let Some(child) = self.node.child(tags) {
            self.node = child;
        }
    }

    /// act out the most confident child under the cursor. ties keep
    /// the first child in key order.
    fn consult(&mut self, game: &Game) -> Option<Action> {
        let best = self
            .node
            .children()
            .filter_map(|(tags, child)| child.confidence().map(|c| (tags, c)))
            .fold(None::<(&Tags, Probability)>, |best, (tags, c)| match best {
                Some((_, held)) if held >= c => best,
                _ => Some((tags, c)),
            })
            .map(|(tags, _)| tags.clone());
        let Some(tags) = best else {
            self.exploring = true;
            return None;
        };
        let Some(tag) = tags.move_tag() else {
            self.exploring = true;
            return None;
        };
        let action = match tag {
            Tag::Fold => self.fold(),
            Tag::Check => self.check(),
            Tag::Call => self.call(game),
            Tag::AllIn => self.shove(),
            Tag::Bet(volatility) => self.wager(game, volatility, false),
            Tag::Raise(volatility) => self.wager(game, volatility, true),
            _ => return None,
        };
        let own = classify(action, game, game.turn(), true);
        self.follow(&own);
        Some(action)
    }

    /// size a wager off the pool at the chosen volatility, strictly
    /// above the standing bet when raising and never beyond the stack
    fn wager(&mut self, game: &Game, volatility: Volatility, raising: bool) -> Action {
        let all = self.seat.stake + self.seat.stack;
        let floor = match raising {
            true => game.last_bet() + 1,
            false => game.last_bet(),
        };
        let amount = (game.pool() * volatility.pot_multiple())
            .max(floor)
            .min(all);
        if amount == all {
            self.shove()
        } else if raising {
            self.raise_to(amount)
        } else {
            self.bet(amount)
        }
    }

    /// uniform over the legal moves in this spot
    fn explore(&mut self, game: &Game) -> Action {
        let ref mut rng = rand::rng();
        loop {
            let code = rng.random_range(0..6);
            match code {
                1 | 3 if game.last_bet() > 0 => continue,
                2 | 4 if game.last_bet() == 0 => continue,
                4 if self.seat.raised => continue,
                0 => return self.fold(),
                1 => return self.check(),
                2 => return self.call(game),
                3 => return self.wager(game, Volatility::random(), false),
                4 => return self.wager(game, Volatility::random(), true),
                _ => return self.shove(),
            }
        }
    }
}

impl<'a> Player for TreePlayer<'a> {
    fn make_move(&mut self, game: &Game) -> Action {
        if game.stage() != self.old_stage {
            self.new_stage = true;
            self.old_stage = game.stage();
        }
        if !self.exploring {
            let turn = game.turn();
            let prev = match game.log(1 - turn).last() {
                Some(action) => *action,
                None => Action::Fold,
            };
            // a passive opponent move happened against the board they
            // actually saw, which may predate the latest street
            if matches!(prev, Action::Check | Action::Call(_)) {
                let view = game.clone().with_turn(1 - turn).with_board(self.old_board);
                let view = match self.old_board.size() {
                    0 => view.with_stage(Stage::PreFlop),
                    _ => view,
                };
                let tags = classify(prev, &view, turn, true);
                self.descend(&tags);
            }
            if self.new_stage {
                let tags = classify(Action::Check, game, turn, false);
                self.descend(&tags);
                self.new_stage = false;
            }
            if matches!(prev, Action::Bet(_) | Action::Raise(_) | Action::Shove(_)) {
                let view = game.clone().with_turn(1 - turn);
                let tags = classify(prev, &view, turn, true);
                self.descend(&tags);
            }
            self.old_board = game.board();
            if !self.exploring {
                if let Some(action) = self.consult(game) {
                    return action;
                }
            }
        }
        self.explore(game)
    }
    fn seat(&self) -> &Seat {
        &self.seat
    }
    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }
}

use super::player::Player;
use crate::cards::hand::Hand;
use crate::gameplay::action::Action;
use crate::gameplay::game::Game;
use crate::gameplay::seat::Seat;
use crate::gameplay::stage::Stage;
use crate::tree::classifier::classify;
use crate::tree::tag::{Tag, Volatility};
use crate::tree::tags::Tags;
use crate::tree::tree::GameTree;
use crate::{Chips, Probability};
use rand::Rng;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STACK;

    #[test]
    fn exploit_walks_the_tree() {
        // preflop with a premium hole: the walk goes root -> strong
        // hole -> most confident child, which says to check
        let mut tree = GameTree::root();
        tree.absorb("{};0.5;1;2${Strong Hole};0.5;1;2${Check};1;1;1")
            .unwrap();
        tree.absorb("{};0.5;1;2${Strong Hole};0.5;1;2${Fold};0;0;1")
            .unwrap();
        let game = Game::new()
            .with_hole(0, Hand::from("As Ah"))
            .with_stage(Stage::PreFlop);
        let mut player = TreePlayer::new(STACK, &tree, false);
        assert_eq!(player.make_move(&game), Action::Check);
        assert!(!player.exploring);
    }

    #[test]
    fn unfamiliar_situations_flip_to_exploring() {
        let tree = GameTree::root();
        let game = Game::new()
            .with_hole(0, Hand::from("As Ah"))
            .with_stage(Stage::PreFlop);
        let mut player = TreePlayer::new(STACK, &tree, false);
        player.make_move(&game);
        assert!(player.exploring);
    }

    #[test]
    fn exploring_moves_are_always_legal() {
        let tree = GameTree::root();
        for _ in 0..50 {
            let game = Game::new()
                .with_hole(0, Hand::from("As Ah"))
                .with_stage(Stage::PreFlop)
                .with_pool(300)
                .with_last_bet(100);
            let mut player = TreePlayer::new(STACK, &tree, true);
            match player.make_move(&game) {
                Action::Check | Action::Bet(_) => panic!("illegal facing a bet"),
                _ => {}
            }
        }
    }

    #[test]
    fn exploring_checks_or_bets_behind() {
        let tree = GameTree::root();
        for _ in 0..50 {
            let game = Game::new()
                .with_hole(0, Hand::from("As Ah"))
                .with_stage(Stage::Flop)
                .with_board(Hand::from("Kc 7d 2s"))
                .with_pool(200);
            let mut player = TreePlayer::new(STACK, &tree, true);
            match player.make_move(&game) {
                Action::Call(_) | Action::Raise(_) => panic!("illegal with no bet to face"),
                _ => {}
            }
        }
    }

    #[test]
    fn wagers_scale_with_volatility() {
        let tree = GameTree::root();
        let game = Game::new().with_pool(100);
        let mut player = TreePlayer::new(STACK, &tree, false);
        assert_eq!(
            player.wager(&game, Volatility::Conservative, false),
            Action::Bet(100)
        );
        let mut player = TreePlayer::new(STACK, &tree, false);
        assert_eq!(
            player.wager(&game, Volatility::VeryAggressive, false),
            Action::Bet(800)
        );
    }

    #[test]
    fn raises_always_exceed_the_standing_bet() {
        // a conservative pot multiple under the outstanding bet must
        // not produce a zero-chip raise
        let tree = GameTree::root();
        let game = Game::new().with_pool(100).with_last_bet(100);
        let mut player = TreePlayer::new(STACK, &tree, false);
        assert_eq!(
            player.wager(&game, Volatility::Conservative, true),
            Action::Raise(101)
        );
    }

    #[test]
    fn oversized_wagers_become_shoves() {
        let tree = GameTree::root();
        let game = Game::new().with_pool(100);
        let mut player = TreePlayer::new(50, &tree, false);
        assert_eq!(
            player.wager(&game, Volatility::Conservative, false),
            Action::Shove(50)
        );
    }
}
