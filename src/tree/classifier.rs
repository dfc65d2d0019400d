/// turns one decision point into the tag set that keys a tree node.
///
/// `perspective` is the seat whose situation we are describing and
/// `action` is the move that was made at this point, which may belong
/// to either seat. `evaluated` tracks whether the situational tags for
/// the current street were already emitted earlier on the same path:
/// once they have been, only move and threat tags remain.
pub fn classify(action: Action, game: &Game, perspective: usize, evaluated: bool) -> Tags {
    let mut tags = Vec::new();
    if game.stage() == Stage::PreFlop && !evaluated {
        tags.push(match rate_hole(game.hole(perspective)) {
            Holding::Strong => Tag::StrongHole,
            Holding::Weak => Tag::WeakHole,
        });
        return Tags::from(tags);
    }
    if game.stage() != Stage::PreFlop && !evaluated {
        situation(&mut tags, game, perspective);
    }
    if game.stage() != Stage::PreFlop && perspective != game.turn() {
        if let Some(category) = threat(game, perspective) {
            tags.push(Tag::Threat(category));
        }
    }
    if !evaluated {
        return Tags::from(tags);
    }
    tags.push(labeled(action, game));
    Tags::from(tags)
}

/// what we have made so far, and what the remaining streets might
/// plausibly make for us
fn situation(tags: &mut Vec<Tag>, game: &Game, perspective: usize) {
    let category = game.strength(perspective).category();
    match category {
        Category::HighCard => {
            let high = game
                .hole(perspective)
                .take_max()
                .map(|card| card.rank())
                .unwrap_or(Rank::Two);
            tags.push(Tag::HighCard(high));
        }
        category => tags.push(Tag::Made(category)),
    }
    if game.stage() != Stage::River {
        if let Some(category) = lucky(game, perspective, category) {
            tags.push(Tag::Lucky(category));
        }
    }
}

/// the weakest class strictly above our current one that the board
/// runout reaches often enough to be worth chasing. enumeration runs
/// over every completion of the board not blocked by our own cards,
/// and "often enough" means more than LEGITIMACY of all completions,
/// accumulated from the strongest class downward.
fn lucky(game: &Game, perspective: usize, current: Category) -> Option<Category> {
    let seen = game.seen(perspective);
    let draws = HandIterator::from((5 - game.board().size(), seen));
    let total = draws.combinations();
    let mut outcomes = [0usize; 11];
    for draw in draws {
        let improved = Strength::from(Hand::add(seen, draw)).category();
        if improved.outranks(&current) {
            outcomes[improved as usize] += 1;
        }
    }
    let threshold = total as Probability * crate::LEGITIMACY;
    let mut cumulative = 0;
    for category in Category::all() {
        if !category.outranks(&current) {
            return None;
        }
        cumulative += outcomes[category as usize];
        if cumulative as Probability > threshold {
            return Some(category);
        }
    }
    None
}

/// the weakest class, at or above our own, that single-card
/// completions of the board hand the opponent often enough to beat us.
/// same accumulation rule as the lucky tag, but a completion counts
/// whenever it wins, so a better kicker in our own class threatens too.
fn threat(game: &Game, perspective: usize) -> Option<Category> {
    let mine = game.strength(perspective);
    let current = mine.category();
    let draws = HandIterator::from((1, game.seen(perspective)));
    let total = draws.combinations();
    let mut outcomes = [0usize; 11];
    for draw in draws {
        let theirs = Strength::from(Hand::add(game.board(), draw));
        let category = theirs.category();
        if category.outranks(&current) || determine_winner(&mine, &theirs) == Winner::Two {
            outcomes[category as usize] += 1;
        }
    }
    let threshold = total as Probability * crate::LEGITIMACY;
    let mut cumulative = 0;
    for category in Category::all() {
        cumulative += outcomes[category as usize];
        if cumulative as Probability > threshold {
            return Some(category);
        }
        if category == current {
            return None;
        }
    }
    None
}

/// the move tag. wagers are graded against the pool as it stood
/// before the move
fn labeled(action: Action, game: &Game) -> Tag {
    match action {
        Action::Fold => Tag::Fold,
        Action::Check => Tag::Check,
        Action::Call(_) => Tag::Call,
        Action::Shove(_) => Tag::AllIn,
        Action::Bet(amount) => Tag::Bet(Volatility::grade(game.pool(), amount)),
        Action::Raise(amount) => Tag::Raise(Volatility::grade(game.pool(), amount)),
    }
}

use super::tag::{Tag, Volatility};
use super::tags::Tags;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::rank::Rank;
use crate::evaluation::category::Category;
use crate::evaluation::showdown::{determine_winner, Winner};
use crate::evaluation::strength::Strength;
use crate::gameplay::action::Action;
use crate::gameplay::game::Game;
use crate::gameplay::stage::Stage;
use crate::players::equity::{rate_hole, Holding};
use crate::Probability;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preflop_rates_the_hole() {
        let game = Game::new()
            .with_hole(0, Hand::from("As Ah"))
            .with_stage(Stage::PreFlop);
        let tags = classify(Action::Check, &game, 0, false);
        assert!(tags.contains(&Tag::StrongHole));
        assert!(tags.move_tag().is_none());
        let game = game.with_hole(1, Hand::from("9c 2d"));
        let tags = classify(Action::Check, &game, 1, false);
        assert!(tags.contains(&Tag::WeakHole));
    }

    #[test]
    fn preflop_moves_after_evaluation() {
        let game = Game::new()
            .with_hole(0, Hand::from("As Ah"))
            .with_stage(Stage::PreFlop)
            .with_pool(300);
        let tags = classify(Action::Raise(300), &game, 0, true);
        assert_eq!(tags.move_tag(), Some(Tag::Raise(Volatility::Conservative)));
        assert!(!tags.contains(&Tag::StrongHole));
    }

    #[test]
    fn postflop_names_the_made_hand() {
        let game = Game::new()
            .with_hole(0, Hand::from("As Ah"))
            .with_board(Hand::from("Ac 7d 2s"))
            .with_stage(Stage::Flop);
        let tags = classify(Action::Check, &game, 0, false);
        assert!(tags.contains(&Tag::Made(Category::ThreeOAK)));
    }

    #[test]
    fn high_card_tag_names_our_own_card() {
        let game = Game::new()
            .with_hole(0, Hand::from("Kd 8c"))
            .with_board(Hand::from("As 7d 2s 3h 9c"))
            .with_stage(Stage::River);
        let tags = classify(Action::Check, &game, 0, false);
        assert!(tags.contains(&Tag::HighCard(Rank::King)));
    }

    #[test]
    fn river_has_no_lucky_tag() {
        let game = Game::new()
            .with_hole(0, Hand::from("Kd 8c"))
            .with_board(Hand::from("As 7d 2s 3h 9c"))
            .with_stage(Stage::River);
        let tags = classify(Action::Check, &game, 0, false);
        assert!(!tags.iter().any(|t| matches!(t, Tag::Lucky(_))));
    }

    #[test]
    fn flush_draw_is_a_lucky_flush() {
        // nine flush outs on two streets clear the one in six bar
        let game = Game::new()
            .with_hole(0, Hand::from("As Ks"))
            .with_board(Hand::from("Qs 7s 2d"))
            .with_stage(Stage::Flop);
        let tags = classify(Action::Check, &game, 0, false);
        assert!(tags.contains(&Tag::Lucky(Category::Flush)));
    }

    #[test]
    fn threats_appear_only_for_the_waiting_seat() {
        let game = Game::new()
            .with_hole(0, Hand::from("7c 2d"))
            .with_board(Hand::from("As Ad Kh"))
            .with_stage(Stage::Flop)
            .with_turn(1);
        // seat 0 is waiting while seat 1 acts: the paired board threatens
        let tags = classify(Action::Check, &game, 0, true);
        assert!(tags.iter().any(|t| matches!(t, Tag::Threat(_))));
        // the acting seat itself carries no threat tag
        let tags = classify(Action::Check, &game, 1, true);
        assert!(!tags.iter().any(|t| matches!(t, Tag::Threat(_))));
    }

    #[test]
    fn evaluated_paths_carry_the_move_tag() {
        let game = Game::new()
            .with_hole(0, Hand::from("As Ah"))
            .with_board(Hand::from("Ac 7d 2s"))
            .with_stage(Stage::Flop)
            .with_pool(100);
        let tags = classify(Action::Bet(500), &game, 0, true);
        assert_eq!(tags.move_tag(), Some(Tag::Bet(Volatility::VeryAggressive)));
        assert!(!tags.contains(&Tag::Made(Category::ThreeOAK)));
    }
}
