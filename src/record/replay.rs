use super::*;
use crate::Chips;
use crate::Position;
use crate::gameplay::*;
use anyhow::Context;
use anyhow::anyhow;
use anyhow::ensure;

/// One voluntary choice recovered from a hand record.
#[derive(Debug, Clone)]
pub struct Decision {
    pub seat: Position,
    pub spot: Spot,
    pub action: Action,
}

impl HandRecord {
    /// Rebuilds the hand through the rules engine and returns every
    /// decision, each with the spot the seat faced when it made it.
    ///
    /// Fails if any recorded action is illegal where it appears, or if the
    /// replayed settlement disagrees with the recorded deltas.
    pub fn replay(&self, entrants: usize, chips: Chips) -> anyhow::Result<Vec<Decision>> {
        let ids = self.dealt.iter().map(|(seat, _)| *seat).collect::<Vec<_>>();
        let dealer = ids
            .iter()
            .position(|s| *s == self.button)
            .ok_or_else(|| anyhow!("button seat {} was not dealt in", self.button))?;
        ensure!(ids.len() >= 2, "hand {} dealt to {} seats", self.index, ids.len());
        let mut game = Game::new(
            self.dealt
                .iter()
                .map(|(seat, hole)| (*hole, self.stacks[*seat]))
                .collect(),
            dealer,
            self.small,
            self.big,
        );
        let mut actions = self.actions.iter();
        let mut decisions = Vec::new();
        loop {
            match game.turn() {
                Turn::Terminal => break,
                Turn::Chance => {
                    let street = game.street().next();
                    let cards = self.board.on(street);
                    ensure!(
                        cards.size() == game.street().n_revealed(),
                        "hand {} board ends before the {}",
                        self.index,
                        street
                    );
                    game.act(Action::Draw(cards));
                }
                Turn::Choice(position) => {
                    let (seat, action) = actions
                        .next()
                        .copied()
                        .with_context(|| format!("hand {} ends early", self.index))?;
                    ensure!(
                        seat == ids[position],
                        "hand {} seat {} acted out of turn",
                        self.index,
                        seat
                    );
                    ensure!(
                        game.is_allowed(&action),
                        "hand {} seat {} cannot {}",
                        self.index,
                        seat,
                        action
                    );
                    if !action.is_blind() {
                        decisions.push(Decision {
                            seat,
                            spot: game.spot().within(entrants, chips),
                            action,
                        });
                    }
                    game.act(action);
                }
            }
        }
        ensure!(
            actions.next().is_none(),
            "hand {} has actions after the end",
            self.index
        );
        let mut deltas = vec![0; self.stacks.len()];
        for (seat, delta) in ids.iter().zip(game.deltas()) {
            deltas[*seat] = delta;
        }
        ensure!(
            deltas == self.deltas,
            "hand {} settles to {:?}, recorded {:?}",
            self.index,
            deltas,
            self.deltas
        );
        Ok(decisions)
    }
}

impl TournamentRecord {
    /// Total chips in play, constant over the tournament.
    pub fn chips(&self) -> Chips {
        self.hands
            .first()
            .map(|h| h.stacks.iter().sum())
            .unwrap_or(0)
    }
    /// Training rows for learned policies: features then target, per decision
    /// made by a seat of the given type.
    pub fn samples(&self, tag: crate::policy::AiType) -> anyhow::Result<Vec<Vec<f32>>> {
        use crate::policy::features;
        let mut rows = Vec::new();
        for hand in self.hands.iter() {
            for decision in hand.replay(self.n(), self.chips())? {
                if self.ai_types[decision.seat] == tag {
                    let mut row = features::encode(&decision.spot);
                    row.extend(features::target(&decision.spot, &decision.action));
                    rows.push(row);
                }
            }
        }
        Ok(rows)
    }
}
