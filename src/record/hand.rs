use crate::Chips;
use crate::Position;
use crate::cards::*;
use crate::gameplay::*;

/// Everything that happened in one hand, indexed by tournament seat.
///
/// Per-seat vectors (`stacks`, `deltas`) always span every entrant, with
/// zeros for seats already eliminated. `dealt` and `actions` name seats
/// explicitly and list only those dealt in, in hand order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandRecord {
    /// Zero-based hand number within the tournament.
    pub index: u32,
    pub level: u32,
    pub small: Chips,
    pub big: Chips,
    /// Seat holding the dealer button.
    pub button: Position,
    /// Stacks before blinds.
    pub stacks: Vec<Chips>,
    pub dealt: Vec<(Position, Hole)>,
    pub board: Board,
    /// Main pot first.
    pub pots: Vec<Chips>,
    /// Blinds and decisions in the order they were made.
    pub actions: Vec<(Position, Action)>,
    /// Net chips won per seat.
    pub deltas: Vec<Chips>,
}

impl HandRecord {
    /// Stacks once the hand is settled.
    pub fn after(&self) -> Vec<Chips> {
        self.stacks
            .iter()
            .zip(self.deltas.iter())
            .map(|(s, d)| s + d)
            .collect()
    }
    /// Seats that started the hand with chips and finished without.
    pub fn busted(&self) -> Vec<Position> {
        self.stacks
            .iter()
            .zip(self.after())
            .enumerate()
            .filter(|(_, (before, after))| **before > 0 && *after == 0)
            .map(|(seat, _)| seat)
            .collect()
    }
    pub fn hole(&self, seat: Position) -> Option<Hole> {
        self.dealt
            .iter()
            .find(|(s, _)| *s == seat)
            .map(|(_, hole)| *hole)
    }
}

impl std::fmt::Display for HandRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "hand {:>4}  level {:>2}  blinds {}/{}  button {}",
            self.index, self.level, self.small, self.big, self.button
        )?;
        for (seat, hole) in self.dealt.iter() {
            writeln!(
                f,
                "  seat {:>2}  {}  stack {:>6}  net {:>+6}",
                seat, hole, self.stacks[*seat], self.deltas[*seat]
            )?;
        }
        for (seat, action) in self.actions.iter() {
            writeln!(f, "  seat {:>2}  {}", seat, action)?;
        }
        writeln!(f, "  board {}", self.board)?;
        write!(
            f,
            "  pots  {}",
            self.pots
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
