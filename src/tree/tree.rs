/// the self-learning situation tree. each node is keyed by the tag set
/// describing one decision point, and carries how many finished hands
/// passed through it and how many of those ended well for the seat
/// whose perspective was inserted. children are ordered by key so the
/// on-disk format and the exploit walk are deterministic.
#[derive(Debug, Clone, Default)]
pub struct GameTree {
    classes: Option<Tags>,
    children: BTreeMap<Tags, GameTree>,
    good: usize,
    total: usize,
}

impl GameTree {
    pub fn root() -> Self {
        Self::default()
    }

    pub(super) fn node(tags: Tags) -> Self {
        Self {
            classes: Some(tags),
            ..Self::default()
        }
    }

    pub fn classes(&self) -> Option<&Tags> {
        self.classes.as_ref()
    }

    /// undefined until at least one hand has passed through
    pub fn confidence(&self) -> Option<Probability> {
        match self.total {
            0 => None,
            total => Some(self.good as Probability / total as Probability),
        }
    }

    pub fn good(&self) -> usize {
        self.good
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn child(&self, tags: &Tags) -> Option<&GameTree> {
        self.children.get(tags)
    }

    pub fn children(&self) -> impl Iterator<Item = (&Tags, &GameTree)> {
        self.children.iter()
    }

    pub(super) fn children_mut(&mut self) -> &mut BTreeMap<Tags, GameTree> {
        &mut self.children
    }

    pub(super) fn set_stats(&mut self, good: usize, total: usize) {
        self.good = good;
        self.total = total;
    }

    /// fold one finished hand into the tree from one seat's point of
    /// view. `states` snapshots the game before each move plus the
    /// final settled state, so it is one longer than `moves`.
    pub fn witness(&mut self, moves: &[Action], states: &[Game], perspective: usize) -> bool {
        assert!(states.len() == moves.len() + 1);
        self.insert(moves, states, perspective, false, 0)
    }

    fn insert(
        &mut self,
        moves: &[Action],
        states: &[Game],
        perspective: usize,
        evaluated: bool,
        index: usize,
    ) -> bool {
        self.total += 1;
        if index == moves.len() {
            let state = states.last().expect("one state per move plus the outcome");
            let good = Self::favorable(state, moves, perspective);
            if good {
                self.good += 1;
            }
            return good;
        }
        let state = &states[index];
        let tags = classify(moves[index], state, perspective, evaluated);
        let consumed = tags.move_tag().is_some();
        let mut evaluated = evaluated || !consumed;
        // a new street reopens the situational tags
        if index + 1 != moves.len() && state.stage() != states[index + 1].stage() {
            evaluated = false;
        }
        let next = match consumed {
            true => index + 1,
            false => index,
        };
        let child = self
            .children
            .entry(tags.clone())
            .or_insert_with(|| GameTree::node(tags));
        let good = child.insert(moves, states, perspective, evaluated, next);
        if good {
            self.good += 1;
        }
        good
    }

    /// did this hand end well for `perspective`? folds are judged by
    /// the equity given up, showdowns by who won and whether anything
    /// beyond the blinds went in.
    fn favorable(state: &Game, moves: &[Action], perspective: usize) -> bool {
        let mine = state.hole(perspective);
        let theirs = state.hole(1 - perspective);
        match state.stage() {
            // a preflop fold is good exactly when we dodged a bad spot
            Stage::NotDealt | Stage::PreFlop => {
                rate_hole(theirs) == Holding::Strong && rate_hole(mine) == Holding::Weak
            }
            // a river fold is good when the shown-down hand would lose
            Stage::River => {
                let one = state.strength(perspective);
                let two = state.strength(1 - perspective);
                determine_winner(&one, &two) == Winner::Two
            }
            // a showdown is good when we won it and chips went in to win
            Stage::Showdown => {
                state.winner() == Some(Winner::of(perspective))
                    && moves
                        .iter()
                        .any(|m| matches!(m, Action::Call(_) | Action::Bet(_) | Action::Raise(_)))
            }
            // a flop or turn fold is judged by running the board out
            Stage::Flop | Stage::Turn => {
                let board = state.board();
                let blocked = Hand::add(Hand::add(mine, theirs), board);
                let draws = HandIterator::from((5 - board.size(), blocked));
                let total = draws.combinations();
                let wins = draws
                    .filter(|draw| {
                        let one = Strength::from(Hand::add(Hand::add(mine, board), *draw));
                        let two = Strength::from(Hand::add(Hand::add(theirs, board), *draw));
                        determine_winner(&one, &two) == Winner::One
                    })
                    .count();
                wins * 2 < total
            }
        }
    }
}

use super::classifier::classify;
use super::tags::Tags;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::evaluation::showdown::{determine_winner, Winner};
use crate::evaluation::strength::Strength;
use crate::gameplay::action::Action;
use crate::gameplay::game::Game;
use crate::gameplay::stage::Stage;
use crate::players::equity::{rate_hole, Holding};
use crate::Probability;
use std::collections::BTreeMap;
