use super::*;
use crate::Chips;
use crate::Position;
use crate::cards::*;
use crate::gameplay::*;
use crate::policy::Policy;
use crate::record::HandRecord;
use crate::rng::Source;

/// One hand being played out among the tournament's live seats.
///
/// Translates between tournament seats and hand positions, owns the deck,
/// and keeps the action log that ends up in the [`HandRecord`].
#[derive(Debug, Clone)]
pub struct Table {
    index: u32,
    level: Level,
    button: Position,
    ids: Vec<Position>,
    stacks: Vec<Chips>,
    entrants: usize,
    chips: Chips,
    deck: Deck,
    game: Game,
    actions: Vec<(Position, Action)>,
}

impl Table {
    /// Shuffles, then deals hole cards one at a time starting left of the
    /// button. Seats with no chips sit out.
    pub fn deal(
        index: u32,
        level: Level,
        button: Position,
        stacks: Vec<Chips>,
        rng: &mut Source,
    ) -> Self {
        let ids = stacks
            .iter()
            .enumerate()
            .filter(|(_, s)| **s > 0)
            .map(|(seat, _)| seat)
            .collect::<Vec<Position>>();
        let n = ids.len();
        debug_assert!(n >= 2);
        let dealer = ids.iter().position(|s| *s == button).unwrap_or(0);
        let mut deck = Deck::shuffled(rng);
        let mut holes = deck.holes(n);
        holes.rotate_right((dealer + 1) % n);
        let game = Game::new(
            ids.iter()
                .zip(holes)
                .map(|(seat, hole)| (hole, stacks[*seat]))
                .collect(),
            dealer,
            level.small(),
            level.big(),
        );
        Self {
            index,
            level,
            button,
            entrants: stacks.len(),
            chips: stacks.iter().sum(),
            ids,
            stacks,
            deck,
            game,
            actions: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Runs the hand to a terminal state, asking `agents[seat]` for every
    /// decision. Policy errors abort the hand.
    pub fn play<P: Policy>(&mut self, agents: &[P], rng: &mut Source) -> crate::Result<()> {
        loop {
            match self.game.turn() {
                Turn::Terminal => return Ok(()),
                Turn::Chance => self.reveal(),
                Turn::Choice(_) if self.game.must_post() => self.post(),
                Turn::Choice(position) => self.ask(position, agents, rng)?,
            }
        }
    }

    fn reveal(&mut self) {
        let cards = self.deck.deal(self.game.street());
        log::trace!("[table] hand {} deal {}", self.index, cards);
        self.game.act(Action::Draw(cards));
    }
    fn post(&mut self) {
        let seat = self.ids[self.game.actor()];
        let blind = self.game.posts();
        log::trace!("[table] hand {} seat {} {}", self.index, seat, blind);
        self.actions.push((seat, blind));
        self.game.act(blind);
    }
    fn ask<P: Policy>(
        &mut self,
        position: Position,
        agents: &[P],
        rng: &mut Source,
    ) -> crate::Result<()> {
        let seat = self.ids[position];
        let spot = self.game.spot().within(self.entrants, self.chips);
        let chosen = agents[seat].decide(&spot, rng)?;
        let action = self.game.snap(chosen);
        if action != chosen {
            log::trace!("[table] seat {} {} snapped to {}", seat, chosen, action);
        }
        log::trace!("[table] hand {} seat {} {} | {}", self.index, seat, action, spot);
        self.actions.push((seat, action));
        self.game.act(action);
        Ok(())
    }

    /// Settled account of the hand, per tournament seat.
    pub fn into_record(self) -> HandRecord {
        debug_assert!(self.game.turn().is_terminal());
        let mut deltas = vec![0; self.entrants];
        for (seat, delta) in self.ids.iter().zip(self.game.deltas()) {
            deltas[*seat] = delta;
        }
        debug_assert_eq!(deltas.iter().sum::<Chips>(), 0);
        HandRecord {
            index: self.index,
            level: self.level.index(),
            small: self.level.small(),
            big: self.level.big(),
            button: self.button,
            dealt: self
                .ids
                .iter()
                .zip(self.game.seats())
                .map(|(seat, s)| (*seat, s.cards()))
                .collect(),
            board: self.game.board().clone(),
            pots: self.game.pots(),
            actions: self.actions,
            stacks: self.stacks,
            deltas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::*;

    #[test]
    fn sits_out_busted_seats() {
        let ref mut rng = Source::from(3);
        let table = Table::deal(0, Level::default(), 2, vec![5000, 0, 5000, 5000], rng);
        assert_eq!(table.game().n(), 3);
        assert_eq!(table.game().dealer(), 1);
    }

    #[test]
    fn hand_conserves_chips() {
        let ref mut rng = Source::from(3);
        let agents = vec![Agent::Random(Random); 4];
        for index in 0..20 {
            let mut table = Table::deal(index, Level::default(), 0, vec![5000; 4], rng);
            table.play(&agents, rng).unwrap();
            let record = table.into_record();
            assert_eq!(record.deltas.iter().sum::<Chips>(), 0);
            let won = record.deltas.iter().filter(|d| **d > 0).sum::<Chips>();
            assert!(record.pots.iter().sum::<Chips>() >= won);
            assert_eq!(record.actions[0], (1, Action::Blind(25)));
            assert_eq!(record.actions[1], (2, Action::Blind(50)));
        }
    }

    #[test]
    fn recorded_hand_replays() {
        let ref mut rng = Source::from(9);
        let agents = [Heuristic::lag(), Heuristic::tag(), Heuristic::mtag()];
        for index in 0..20 {
            let mut table = Table::deal(index, Level::from(2), 1, vec![3000, 5000, 7000], rng);
            table.play(&agents, rng).unwrap();
            let record = table.into_record();
            let decisions = record.replay(3, 15000).unwrap();
            let choices = record.actions.iter().filter(|(_, a)| !a.is_blind()).count();
            assert_eq!(decisions.len(), choices);
        }
    }

    #[test]
    fn policy_failure_aborts_hand() {
        #[derive(Debug)]
        struct Offline;
        impl Inference for Offline {
            fn infer(&self, _: &[f32]) -> crate::Result<Vec<f32>> {
                Err(crate::Error::InferenceFailure("offline".to_string()))
            }
        }
        let ref mut rng = Source::from(3);
        let agents = Dispatcher::new(std::sync::Arc::new(Offline))
            .seat(&[AiType::NeuralNet, AiType::NeuralNet]);
        let mut table = Table::deal(0, Level::default(), 0, vec![5000; 2], rng);
        assert!(matches!(
            table.play(&agents, rng),
            Err(crate::Error::InferenceFailure(_))
        ));
    }
}
