/// play one full hand between two players and return the state trail.
///
/// the first player is the dealer: posts the small blind and acts first.
/// the returned Vec holds a snapshot before the first move and one after
/// every move, so callers can replay the hand decision by decision.
pub fn run_round(one: &mut dyn Player, two: &mut dyn Player) -> Vec<Game> {
    let mut game = Game::new();
    game.next_stage();
    let mut players: [&mut dyn Player; 2] = [one, two];
    let sb = players[0].seat().stack / crate::SBLIND_RATIO;
    let bb = players[1].seat().stack / crate::BBLIND_RATIO;
    players[0].seat_mut().stack -= sb;
    players[0].seat_mut().stake = sb;
    players[1].seat_mut().stack -= bb;
    players[1].seat_mut().stake = bb;
    game.post(sb + bb, bb);
    log::debug!("blinds posted: sb {} bb {}", sb, bb);
    let mut states = vec![game.clone()];
    while game.check_winner(false).is_none() {
        let turn = game.turn();
        // a seat due to act with no chips behind has nothing left to
        // decide: the board runs out and the hand settles where it
        // stands. the opponent has already had their one response.
        if players[turn].seat().stack == 0 {
            game.check_winner(true);
            if let Some(last) = states.last_mut() {
                *last = game.clone();
            }
            break;
        }
        let stake = players[turn].seat().stake;
        let action = players[turn].make_move(&game);
        let delta = players[turn].seat().stake - stake;
        log::trace!("seat {} {} (+{})", turn, action, delta);
        game.run_move(action, delta);
        players[turn].seat_mut().moved = true;
        // a reopening move puts the opponent back on the clock, as long
        // as they still have chips to answer with
        if action.reopens() && players[1 - turn].seat().stack > 0 {
            players[1 - turn].seat_mut().moved = false;
        }
        game.check_winner(false);
        if players[0].seat().moved && players[1].seat().moved {
            game.next_stage();
            players[0].seat_mut().reset();
            players[1].seat_mut().reset();
        }
        states.push(game.clone());
    }
    states
}

use super::game::Game;
use crate::players::player::Player;
