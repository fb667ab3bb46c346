use super::*;
use crate::Chips;
use crate::Position;
use crate::cards::*;

/// The state of one No-Limit Hold'em hand.
///
/// `Game` is the hand-level rules engine: it tracks stacks, stakes, the pot,
/// the board and whose turn it is, and answers which actions are legal. It
/// knows nothing about tournaments or decks; the caller deals hole cards in,
/// feeds it [`Action`]s, reveals board cards when [`Turn::Chance`] comes up,
/// and reads [`settlements`](Self::settlements) once it reaches
/// [`Turn::Terminal`].
///
/// # Fields
///
/// - `pot`: Total chips in the center (including current street bets)
/// - `board`: Community cards (0–5 depending on street)
/// - `seats`: Per-player state, in table order starting from seat 0
/// - `dealer`: Button position
/// - `actor`: Position of the seat to act
/// - `small`, `big`: Blinds for this hand
/// - `raised`: Size of the last full raise on this street
/// - `posted`: Blinds posted so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pot: Chips,
    board: Board,
    seats: Vec<Seat>,
    dealer: Position,
    actor: Position,
    small: Chips,
    big: Chips,
    raised: Chips,
    posted: usize,
}

/// Hand setup.
impl Game {
    /// Seats the players with their hole cards and stacks, button at `dealer`.
    ///
    /// Blinds are not posted yet: while [`must_post`](Self::must_post) holds,
    /// the only legal action is [`posts`](Self::posts).
    pub fn new(seats: Vec<(Hole, Chips)>, dealer: Position, small: Chips, big: Chips) -> Self {
        debug_assert!(seats.len() >= 2);
        debug_assert!(dealer < seats.len());
        debug_assert!(seats.iter().all(|(_, stack)| *stack > 0));
        let n = seats.len();
        Self {
            pot: 0,
            board: Board::empty(),
            seats: seats.into_iter().map(Seat::from).collect(),
            dealer,
            actor: if n == 2 { dealer } else { (dealer + 1) % n },
            small,
            big,
            raised: big,
            posted: 0,
        }
    }
}

/// Public state accessors.
impl Game {
    pub fn n(&self) -> usize {
        self.seats.len()
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    pub fn blinds(&self) -> (Chips, Chips) {
        (self.small, self.big)
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
    /// Position of the seat to act.
    pub fn actor(&self) -> Position {
        self.actor
    }
    /// Determines whether it's a player's turn, chance node, or terminal.
    pub fn turn(&self) -> Turn {
        if self.must_stop() {
            Turn::Terminal
        } else if self.must_deal() {
            Turn::Chance
        } else {
            Turn::Choice(self.actor)
        }
    }
    /// Seats still contesting the pot.
    pub fn active(&self) -> usize {
        self.seats.iter().filter(|s| s.state().is_active()).count()
    }
    /// Total chips in play (pot + all stacks).
    pub fn total(&self) -> Chips {
        self.pot + self.seats.iter().map(|s| s.stack()).sum::<Chips>()
    }
}

/// Action validation and application.
impl Game {
    /// Returns all legal actions in the current state.
    ///
    /// Empty at terminal and chance nodes. A single forced blind while
    /// blinds are being posted. Otherwise the actor's options.
    pub fn legal(&self) -> Vec<Action> {
        if self.must_post() {
            return vec![self.posts()];
        }
        if !self.turn().is_choice() {
            return vec![];
        }
        let mut options = Vec::new();
        if self.may_raise() {
            options.push(self.raise());
        }
        if self.may_shove() {
            options.push(self.shove());
        }
        if self.may_call() {
            options.push(self.calls());
        }
        if self.may_fold() {
            options.push(self.folds());
        }
        if self.may_check() {
            options.push(self.check());
        }
        debug_assert!(options.len() > 0);
        options
    }
    /// Checks if a specific action is legal.
    ///
    /// Raises are bounds checked against the min-raise and the stack.
    /// Draws must reveal the right number of cards for the street.
    pub fn is_allowed(&self, action: &Action) -> bool {
        match action {
            Action::Raise(raise) => {
                self.turn().is_choice()
                    && !self.must_post()
                    && self.may_raise()
                    && *raise >= self.to_raise()
                    && *raise < self.to_shove()
            }
            Action::Draw(cards) => {
                self.must_deal() && cards.size() == self.street().n_revealed()
            }
            other => self.legal().contains(other),
        }
    }
    /// Applies an action in place.
    pub fn act(&mut self, action: Action) {
        debug_assert!(self.is_allowed(&action), "illegal {} in\n{}", action, self);
        match action {
            Action::Blind(chips) => {
                self.bet(chips);
                self.posted += 1;
                self.next_player();
            }
            Action::Check => {
                self.actor_mut().reset_acted(true);
                self.next_player();
            }
            Action::Fold => {
                self.actor_mut().reset_acted(true);
                self.actor_mut().reset_state(State::Folding);
                self.next_player();
            }
            Action::Call(chips) | Action::Raise(chips) | Action::Shove(chips) => {
                let before = self.stakes();
                self.bet(chips);
                self.actor_mut().reset_acted(true);
                let after = self.actor_ref().stake();
                if after > before {
                    self.reopen(after - before);
                }
                self.next_player();
            }
            Action::Draw(cards) => {
                self.board.add(cards);
                self.next_street();
            }
        }
    }
    /// Maps an action to the nearest legal action in the current state.
    ///
    /// Policies are free to return anything; the engine only ever applies
    /// what comes out of here. Aggressive actions cascade through the
    /// fallback chain `Raise → Shove → Call → passive`.
    ///
    /// # Mapping rules
    ///
    /// - `Raise(x)` where `x >= to_shove()` → recurse with `Shove`
    /// - `Raise(_)` when `!may_raise()` → recurse with `Shove`
    /// - `Raise(x)` where `x < to_raise()` → `Raise(to_raise())`
    /// - `Shove` when `!may_shove()` → `Call` or passive
    /// - `Call` when `!may_call()` → `Shove` (to call all-in) or passive
    /// - `Check` when `!may_check()` → `Call` or `Fold`
    /// - `Fold` when `!may_fold()` → `Check`
    pub fn snap(&self, action: Action) -> Action {
        if self.must_post() {
            return self.posts();
        }
        match action {
            Action::Raise(x) if x >= self.to_shove() => self.snap(self.shove()),
            Action::Raise(_) if !self.may_raise() => self.snap(self.shove()),
            Action::Raise(x) if x < self.to_raise() => self.raise(),
            Action::Raise(x) => Action::Raise(x),
            Action::Shove(_) if self.may_shove() => self.shove(),
            Action::Shove(_) if self.may_call() => self.calls(),
            Action::Shove(_) => self.passive(),
            Action::Call(_) if self.may_call() => self.calls(),
            Action::Call(_) if self.may_shove() => self.shove(),
            Action::Call(_) => self.passive(),
            Action::Check if self.may_check() => Action::Check,
            Action::Check if self.may_call() => self.calls(),
            Action::Check => self.folds(),
            Action::Fold if self.may_fold() => Action::Fold,
            Action::Fold => Action::Check,
            Action::Draw(_) | Action::Blind(_) => self.passive(),
        }
    }
}

/// Private mutation methods.
impl Game {
    fn bet(&mut self, bet: Chips) {
        debug_assert!(self.actor_ref().stack() >= bet);
        self.pot += bet;
        self.actor_mut().bet(bet);
        if self.actor_ref().stack() == 0 {
            self.actor_mut().reset_state(State::Shoving);
        }
    }
    /// A bet over the current high stake puts everyone else back on the clock.
    fn reopen(&mut self, increment: Chips) {
        self.raised = self.raised.max(increment);
        let actor = self.actor;
        self.seats
            .iter_mut()
            .enumerate()
            .filter(|(i, _)| *i != actor)
            .for_each(|(_, seat)| seat.reset_acted(false));
    }
    /// Resets per-street stakes and hands the action to the first live seat
    /// after the button.
    fn next_street(&mut self) {
        for seat in self.seats.iter_mut() {
            seat.reset_stake();
            seat.reset_acted(false);
        }
        self.raised = self.big;
        self.actor = self.dealer;
        self.next_player();
    }
    /// Advances to the next seat still able to bet, skipping folded and
    /// all-in seats. Stays put if nobody can bet.
    fn next_player(&mut self) {
        let n = self.n();
        if let Some(next) = (1..=n)
            .map(|i| (self.actor + i) % n)
            .find(|i| self.seats[*i].state() == State::Betting)
        {
            self.actor = next;
        }
    }
    fn actor_ref(&self) -> &Seat {
        &self.seats[self.actor]
    }
    fn actor_mut(&mut self) -> &mut Seat {
        &mut self.seats[self.actor]
    }
}

/// Termination and continuation predicates.
impl Game {
    /// True if the hand is complete (showdown or everyone folded).
    pub fn must_stop(&self) -> bool {
        if self.must_post() {
            false
        } else if self.is_everyone_folding() {
            true
        } else {
            self.street() == Street::Rive && self.is_everyone_alright()
        }
    }
    /// True if we need to deal the next street's cards.
    pub fn must_deal(&self) -> bool {
        !self.must_post()
            && !self.is_everyone_folding()
            && self.street() != Street::Rive
            && self.is_everyone_alright()
    }
    /// True if blinds have not yet been posted.
    pub fn must_post(&self) -> bool {
        self.street() == Street::Pref && self.posted < 2
    }
    /// Nobody left who needs to act on this street.
    fn is_everyone_alright(&self) -> bool {
        self.is_everyone_folding() || self.is_everyone_calling() || self.is_nobody_left()
    }
    /// All betting players have acted and are in for the same amount.
    fn is_everyone_calling(&self) -> bool {
        let stake = self.stakes();
        self.seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .all(|s| s.acted() && s.stake() == stake)
    }
    /// At most one seat can still bet, and it has nothing to call.
    fn is_nobody_left(&self) -> bool {
        let stake = self.stakes();
        let betting = self
            .seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .collect::<Vec<&Seat>>();
        betting.len() <= 1 && betting.iter().all(|s| s.stake() == stake)
    }
    /// Exactly one player remains (all others folded).
    fn is_everyone_folding(&self) -> bool {
        self.seats
            .iter()
            .filter(|s| s.state() != State::Folding)
            .count()
            == 1
    }
    /// Seats other than the actor that can still respond to a bet.
    fn opponents(&self) -> usize {
        self.seats
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.actor)
            .filter(|(_, s)| s.state() == State::Betting)
            .count()
    }
    pub fn may_fold(&self) -> bool {
        self.to_call() > 0
    }
    pub fn may_call(&self) -> bool {
        self.to_call() > 0 && self.to_call() < self.to_shove()
    }
    pub fn may_check(&self) -> bool {
        self.to_call() == 0
    }
    pub fn may_raise(&self) -> bool {
        self.opponents() > 0 && self.to_raise() < self.to_shove()
    }
    /// Shoving is offered against live opponents, or as the only way to call.
    pub fn may_shove(&self) -> bool {
        self.to_shove() > 0 && (self.opponents() > 0 || self.to_call() >= self.to_shove())
    }
}

/// Bet sizing constraints and action constructors.
impl Game {
    /// Chips needed to call the current bet.
    pub fn to_call(&self) -> Chips {
        self.stakes() - self.actor_ref().stake()
    }
    /// Blind amount to post, capped by the stack.
    pub fn to_post(&self) -> Chips {
        match self.posted {
            0 => self.small.min(self.actor_ref().stack()),
            _ => self.big.min(self.actor_ref().stack()),
        }
    }
    /// All remaining chips (for all-in).
    pub fn to_shove(&self) -> Chips {
        self.actor_ref().stack()
    }
    /// Minimum legal raise size.
    ///
    /// Computed as: chips to call + max(last raise increment, big blind).
    pub fn to_raise(&self) -> Chips {
        self.to_call() + self.raised.max(self.big)
    }
    pub fn raise(&self) -> Action {
        Action::Raise(self.to_raise())
    }
    pub fn shove(&self) -> Action {
        Action::Shove(self.to_shove())
    }
    pub fn calls(&self) -> Action {
        Action::Call(self.to_call())
    }
    pub fn posts(&self) -> Action {
        Action::Blind(self.to_post())
    }
    pub fn folds(&self) -> Action {
        Action::Fold
    }
    pub fn check(&self) -> Action {
        Action::Check
    }
    /// Returns check if allowed, otherwise fold.
    pub fn passive(&self) -> Action {
        if self.may_check() {
            Action::Check
        } else {
            Action::Fold
        }
    }
    /// Maximum stake among all players this street.
    fn stakes(&self) -> Chips {
        self.seats.iter().map(|s| s.stake()).max().unwrap_or(0)
    }
}

/// Showdown and payout logic.
impl Game {
    /// Computes final chip distributions at a terminal node.
    pub fn settlements(&self) -> Vec<Settlement> {
        debug_assert!(self.must_stop(), "non terminal game state:\n{}", self);
        Showdown::from(self.ledger()).settle()
    }
    /// Net chips won or lost by each position.
    pub fn deltas(&self) -> Vec<Chips> {
        self.settlements().iter().map(|s| s.won()).collect()
    }
    /// Main pot first, then side pots, split at each all-in level.
    pub fn pots(&self) -> Vec<Chips> {
        let mut levels = self
            .seats
            .iter()
            .filter(|s| s.state().is_active())
            .map(|s| s.spent())
            .filter(|s| *s > 0)
            .collect::<Vec<Chips>>();
        levels.sort_unstable();
        levels.dedup();
        let mut pots = Vec::with_capacity(levels.len());
        let mut prev = 0;
        for level in levels {
            pots.push(
                self.seats
                    .iter()
                    .map(|s| s.spent().min(level) - s.spent().min(prev))
                    .sum::<Chips>(),
            );
            prev = level;
        }
        let rest = self.pot - pots.iter().sum::<Chips>();
        match pots.last_mut() {
            Some(last) => *last += rest,
            None if rest > 0 => pots.push(rest),
            None => {}
        }
        pots
    }
    /// Observable state from the acting seat's point of view.
    pub fn spot(&self) -> Spot {
        Spot::from(self)
    }
    fn ledger(&self) -> Vec<Settlement> {
        self.seats
            .iter()
            .map(|seat| {
                let strength = Strength::from(Hand::add(
                    Hand::from(seat.cards()),
                    Hand::from(&self.board),
                ));
                Settlement::from((seat.spent(), seat.state(), strength))
            })
            .collect()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, seat) in self.seats.iter().enumerate() {
            let button = if i == self.dealer { "*" } else { " " };
            writeln!(f, "{}{:>2} {}", button, i, seat)?;
        }
        writeln!(f, "Pot   {}", self.pot())?;
        writeln!(f, "Board {}", self.board())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }

    fn posted(game: &mut Game) {
        while game.must_post() {
            game.act(game.posts());
        }
    }

    fn heads_up() -> Game {
        let mut game = Game::new(
            vec![(hole("As Ad"), 1000), (hole("7c 2d"), 1000)],
            0,
            25,
            50,
        );
        posted(&mut game);
        game
    }

    fn six_handed(stacks: [Chips; 6]) -> Game {
        let holes = ["As Ad", "Ks Kd", "Qs Qd", "Js Jd", "Ts Td", "9s 9d"];
        let mut game = Game::new(
            holes.iter().map(|h| hole(h)).zip(stacks).collect(),
            0,
            25,
            50,
        );
        posted(&mut game);
        game
    }

    #[test]
    fn heads_up_button_posts_small_and_acts_first() {
        let game = heads_up();
        assert_eq!(game.seats()[0].stake(), 25);
        assert_eq!(game.seats()[1].stake(), 50);
        assert_eq!(game.turn(), Turn::Choice(0));
        assert_eq!(game.to_call(), 25);
    }

    #[test]
    fn multiway_blinds_and_first_actor() {
        let game = six_handed([1000; 6]);
        assert_eq!(game.seats()[1].stake(), 25);
        assert_eq!(game.seats()[2].stake(), 50);
        assert_eq!(game.turn(), Turn::Choice(3));
        assert_eq!(game.pot(), 75);
    }

    #[test]
    fn big_blind_gets_option() {
        let mut game = heads_up();
        game.act(game.calls());
        assert_eq!(game.turn(), Turn::Choice(1));
        assert!(game.legal().contains(&Action::Check));
        game.act(Action::Check);
        assert_eq!(game.turn(), Turn::Chance);
    }

    #[test]
    fn postflop_starts_left_of_button() {
        let mut game = six_handed([1000; 6]);
        for _ in 0..5 {
            let action = game.passive();
            let action = if action == Action::Fold { game.calls() } else { action };
            game.act(action);
        }
        game.act(Action::Check);
        assert_eq!(game.turn(), Turn::Chance);
        game.act(Action::Draw(Hand::try_from("2c 3c 4c").unwrap()));
        assert_eq!(game.turn(), Turn::Choice(1));
    }

    #[test]
    fn min_raise_tracks_last_increment() {
        let mut game = six_handed([5000; 6]);
        assert_eq!(game.to_raise(), 100);
        game.act(Action::Raise(200));
        assert_eq!(game.turn(), Turn::Choice(4));
        assert_eq!(game.to_call(), 200);
        assert_eq!(game.to_raise(), 350);
    }

    #[test]
    fn raise_reopens_action() {
        let mut game = heads_up();
        game.act(game.calls());
        game.act(Action::Raise(100));
        assert_eq!(game.turn(), Turn::Choice(0));
        game.act(game.calls());
        assert_eq!(game.turn(), Turn::Chance);
    }

    #[test]
    fn folding_ends_hand() {
        let mut game = heads_up();
        game.act(Action::Fold);
        assert_eq!(game.turn(), Turn::Terminal);
        assert_eq!(game.deltas(), vec![-25, 25]);
    }

    #[test]
    fn all_in_runs_out_the_board() {
        let mut game = heads_up();
        game.act(game.shove());
        assert!(!game.may_call());
        game.act(game.shove());
        let mut deck = ["2h 3h 4s", "9c", "Jh"].into_iter();
        while game.turn() == Turn::Chance {
            let cards = deck.next().map(Hand::try_from).unwrap().unwrap();
            game.act(Action::Draw(cards));
        }
        assert_eq!(game.turn(), Turn::Terminal);
        assert_eq!(game.deltas(), vec![1000, -1000]);
        assert_eq!(game.pots(), vec![2000]);
    }

    #[test]
    fn short_blind_is_all_in() {
        let mut game = Game::new(vec![(hole("As Ad"), 1000), (hole("7c 2d"), 30)], 0, 25, 50);
        posted(&mut game);
        assert_eq!(game.seats()[1].state(), State::Shoving);
        assert_eq!(game.to_call(), 5);
        assert!(!game.may_raise());
        assert!(game.legal().contains(&Action::Call(5)));
        game.act(Action::Call(5));
        assert_eq!(game.turn(), Turn::Chance);
    }

    #[test]
    fn shove_to_call_when_covered() {
        let mut game = Game::new(vec![(hole("As Ad"), 1000), (hole("7c 2d"), 300)], 0, 25, 50);
        posted(&mut game);
        game.act(Action::Raise(500));
        assert_eq!(game.turn(), Turn::Choice(1));
        assert!(!game.may_call());
        assert_eq!(game.legal(), vec![Action::Shove(250), Action::Fold]);
    }

    #[test]
    fn side_pots_split_at_all_in_levels() {
        let mut game = six_handed([100, 300, 1000, 1000, 1000, 1000]);
        game.act(Action::Fold);
        game.act(Action::Fold);
        game.act(game.shove());
        game.act(game.shove());
        game.act(game.shove());
        assert_eq!(game.turn(), Turn::Choice(2));
        game.act(game.shove());
        for cards in ["2h 3h 4s", "9c", "Jh"] {
            assert_eq!(game.turn(), Turn::Chance);
            game.act(Action::Draw(Hand::try_from(cards).unwrap()));
        }
        assert_eq!(game.turn(), Turn::Terminal);
        assert_eq!(game.pots(), vec![400, 600, 1400]);
        assert_eq!(game.deltas().iter().sum::<Chips>(), 0);
    }

    #[test]
    fn snap_coerces_illegal_actions() {
        let game = heads_up();
        assert_eq!(game.snap(Action::Check), Action::Call(25));
        assert_eq!(game.snap(Action::Raise(1)), Action::Raise(75));
        assert_eq!(game.snap(Action::Raise(5000)), Action::Shove(975));
        assert_eq!(game.snap(Action::Blind(50)), Action::Fold);
    }
}
