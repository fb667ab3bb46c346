use super::*;
use crate::Chips;
use crate::MAX_PLAYERS;
use crate::Position;
use crate::STARTING_STACK;
use crate::policy::AiType;
use crate::record::HandRecord;
use crate::record::TournamentRecord;
use crate::rng::Source;

/// Where the meta-game stands between and during hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active { level: Level, remaining: usize },
    HandInProgress,
    Complete,
}

/// Stacks, eliminations, blinds and the button for one tournament.
///
/// Hands are borrowed out as [`Table`]s with [`Tournament::begin`] and
/// handed back with [`Tournament::settle`]. Betting inside a hand is the
/// table's business.
#[derive(Debug, Clone)]
pub struct Tournament {
    number: u32,
    seed: u64,
    hands_per_level: u32,
    entrants: Vec<Entrant>,
    button: Position,
    hands: Vec<HandRecord>,
    phase: Phase,
}

impl Tournament {
    pub fn new(number: u32, seed: u64, tags: &[AiType], hands_per_level: u32) -> crate::Result<Self> {
        if !(2..=MAX_PLAYERS).contains(&tags.len()) {
            return Err(crate::Error::InvalidConfiguration(format!(
                "{} players, need 2 to {}",
                tags.len(),
                MAX_PLAYERS
            )));
        }
        if hands_per_level == 0 {
            return Err(crate::Error::InvalidConfiguration(
                "hands per level must be positive".to_string(),
            ));
        }
        Ok(Self {
            number,
            seed,
            hands_per_level,
            entrants: tags.iter().copied().map(Entrant::from).collect(),
            button: 0,
            hands: Vec::new(),
            phase: Phase::Active {
                level: Level::default(),
                remaining: tags.len(),
            },
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
    pub fn entrants(&self) -> &[Entrant] {
        &self.entrants
    }
    pub fn hands(&self) -> &[HandRecord] {
        &self.hands
    }
    pub fn button(&self) -> Position {
        self.button
    }
    /// Level the next hand will be played at.
    pub fn level(&self) -> Level {
        Level::of(self.hands.len() as u32, self.hands_per_level)
    }
    pub fn remaining(&self) -> usize {
        self.entrants.iter().filter(|e| e.is_alive()).count()
    }
    fn stacks(&self) -> Vec<Chips> {
        self.entrants.iter().map(|e| e.stack()).collect()
    }

    /// Deals the next hand.
    pub fn begin(&mut self, rng: &mut Source) -> Table {
        debug_assert!(matches!(self.phase, Phase::Active { .. }));
        self.phase = Phase::HandInProgress;
        Table::deal(
            self.hands.len() as u32,
            self.level(),
            self.button,
            self.stacks(),
            rng,
        )
    }

    /// Applies a finished hand and returns the seats it eliminated, best
    /// finisher first.
    pub fn settle(&mut self, table: Table) -> Vec<Position> {
        debug_assert!(self.phase == Phase::HandInProgress);
        self.apply(table.into_record())
    }

    fn apply(&mut self, hand: HandRecord) -> Vec<Position> {
        debug_assert!(hand.index as usize == self.hands.len());
        for (entrant, delta) in self.entrants.iter_mut().zip(hand.deltas.iter()) {
            entrant.win(*delta);
        }
        debug_assert_eq!(
            self.stacks().iter().sum::<Chips>(),
            STARTING_STACK * self.entrants.len() as Chips
        );
        let mut busted = hand.busted();
        busted.sort_by(|a, b| hand.stacks[*b].cmp(&hand.stacks[*a]).then(a.cmp(b)));
        let remaining = self.remaining();
        for (i, seat) in busted.iter().enumerate() {
            let rank = (remaining + 1 + i) as u8;
            log::debug!(
                "[tournament {}] seat {} ({}) out on hand {} in place {}",
                self.number,
                seat,
                self.entrants[*seat].tag(),
                hand.index,
                rank
            );
            self.entrants[*seat].eliminate(hand.index, rank);
        }
        self.hands.push(hand);
        match remaining {
            1 => {
                if let Some(winner) = self.entrants.iter_mut().find(|e| e.is_alive()) {
                    winner.crown();
                }
                self.phase = Phase::Complete;
            }
            _ => {
                self.button = self.next(self.button);
                self.phase = Phase::Active {
                    level: self.level(),
                    remaining,
                };
            }
        }
        busted
    }

    /// First seat with chips after the given one.
    fn next(&self, seat: Position) -> Position {
        let n = self.entrants.len();
        (1..=n)
            .map(|i| (seat + i) % n)
            .find(|s| self.entrants[*s].is_alive())
            .unwrap_or(seat)
    }

    pub fn into_record(self) -> TournamentRecord {
        debug_assert!(self.is_complete());
        TournamentRecord {
            number: self.number,
            seed: self.seed,
            hands_per_level: self.hands_per_level,
            ai_types: self.entrants.iter().map(|e| e.tag()).collect(),
            finishing_order: self.entrants.iter().map(|e| e.rank().unwrap_or(0)).collect(),
            game_eliminated: self.entrants.iter().map(|e| e.eliminated()).collect(),
            hands: self.hands,
        }
    }
}

impl std::fmt::Display for Tournament {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "tournament {} seed {} hand {} {}",
            self.number,
            self.seed,
            self.hands.len(),
            self.level()
        )?;
        for (seat, entrant) in self.entrants.iter().enumerate() {
            writeln!(f, "  {:>2} {}", seat, entrant)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;

    /// A showdown-free hand that moves chips by the given deltas.
    fn hand(t: &Tournament, deltas: Vec<Chips>) -> HandRecord {
        let level = t.level();
        HandRecord {
            index: t.hands.len() as u32,
            level: level.index(),
            small: level.small(),
            big: level.big(),
            button: t.button,
            stacks: t.stacks(),
            dealt: vec![],
            board: Board::empty(),
            pots: vec![],
            actions: vec![],
            deltas,
        }
    }

    #[test]
    fn rejects_lonely_tables() {
        assert!(matches!(
            Tournament::new(0, 0, &[AiType::Random], 10),
            Err(crate::Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Tournament::new(0, 0, &[AiType::Random; 11], 10),
            Err(crate::Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Tournament::new(0, 0, &[AiType::Random; 2], 0),
            Err(crate::Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn simultaneous_busts_rank_by_stack_then_seat() {
        let mut t = Tournament::new(0, 0, &[AiType::TAG; 5], 10).unwrap();
        t.apply(hand(&t, vec![2000, -1000, 0, 0, -1000]));
        assert_eq!(t.stacks(), vec![7000, 4000, 5000, 5000, 4000]);
        t.apply(hand(&t, vec![13000, -4000, -5000, 0, -4000]));
        assert_eq!(t.entrants[2].rank(), Some(3));
        assert_eq!(t.entrants[1].rank(), Some(4));
        assert_eq!(t.entrants[4].rank(), Some(5));
        assert_eq!(t.entrants[1].eliminated(), Some(1));
        assert_eq!(t.phase(), Phase::Active { level: Level::from(0), remaining: 2 });
        t.apply(hand(&t, vec![5000, 0, 0, -5000, 0]));
        assert!(t.is_complete());
        let record = t.into_record();
        assert_eq!(record.finishing_order, vec![1, 4, 3, 2, 5]);
        assert_eq!(record.game_eliminated, vec![None, Some(1), Some(1), Some(2), Some(1)]);
        assert!(record.summary().validate().is_ok());
    }

    #[test]
    fn button_skips_busted_seats() {
        let mut t = Tournament::new(0, 0, &[AiType::TAG; 4], 10).unwrap();
        t.apply(hand(&t, vec![5000, -5000, 0, 0]));
        assert_eq!(t.button(), 2);
        t.apply(hand(&t, vec![0, 0, 0, 0]));
        assert_eq!(t.button(), 3);
        t.apply(hand(&t, vec![0, 0, 0, 0]));
        assert_eq!(t.button(), 0);
    }

    #[test]
    fn blinds_rise_every_level() {
        let mut t = Tournament::new(0, 0, &[AiType::TAG; 3], 2).unwrap();
        for _ in 0..5 {
            t.apply(hand(&t, vec![0, 0, 0]));
        }
        let levels = t.hands().iter().map(|h| h.level).collect::<Vec<_>>();
        assert_eq!(levels, vec![0, 0, 1, 1, 2]);
        assert_eq!(t.level(), Level::from(2));
        assert_eq!(t.hands()[2].big, 100);
    }
}
