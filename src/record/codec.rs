//! Big-endian binary layout of a record file.
//!
//! ```text
//! magic "DSHK"  version u16
//! tournament_number u32  seed u64  n u8  hands_per_level u32
//! ai_types[n] i8  finishing_order[n] u8  game_eliminated[n] i32 (-1 winner)
//! num_games u32
//! num_games × hand:
//!   index u32  level u32  small u32  big u32  button u8
//!   stacks[n] i32
//!   dealt u8 × (seat u8, card u8, card u8)
//!   board u8 × card u8
//!   pots u8 × i32
//!   actions u16 × (seat u8, action u32)
//!   deltas[n] i32
//! ```
//!
//! The summary block comes first so it can be read without the hand log.
use super::*;
use crate::Chips;
use crate::MAGIC;
use crate::MAX_PLAYERS;
use crate::VERSION;
use crate::cards::*;
use crate::gameplay::*;
use crate::policy::AiType;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::io::Read;
use std::io::Write;

fn invalid<S: Into<String>>(reason: S) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, reason.into())
}

fn seat<R: Read>(r: &mut R, n: usize) -> std::io::Result<usize> {
    match r.read_u8()? as usize {
        s if s < n => Ok(s),
        s => Err(invalid(format!("seat {} out of {}", s, n))),
    }
}

fn card<R: Read>(r: &mut R) -> std::io::Result<Card> {
    Card::try_from(r.read_u8()?).map_err(invalid)
}

fn chips<R: Read>(r: &mut R, n: usize) -> std::io::Result<Vec<Chips>> {
    (0..n).map(|_| r.read_i32::<BE>()).collect()
}

impl Summary {
    pub fn encode<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_all(&MAGIC)?;
        w.write_u16::<BE>(VERSION)?;
        w.write_u32::<BE>(self.tournament_number)?;
        w.write_u64::<BE>(self.random_seed)?;
        w.write_u8(self.initial_player_count as u8)?;
        w.write_u32::<BE>(self.hands_per_level)?;
        for tag in self.ai_types.iter() {
            w.write_i8(i8::from(*tag))?;
        }
        for rank in self.finishing_order.iter() {
            w.write_u8(*rank)?;
        }
        for eliminated in self.game_eliminated.iter() {
            w.write_i32::<BE>(eliminated.map(|e| e as i32).unwrap_or(-1))?;
        }
        w.write_u32::<BE>(self.num_games)?;
        Ok(())
    }
    /// Reads and validates the summary block.
    pub fn decode<R: Read>(r: &mut R) -> std::io::Result<Self> {
        let ref mut magic = [0u8; 4];
        r.read_exact(magic)?;
        if *magic != MAGIC {
            return Err(invalid(format!("bad magic {:?}", magic)));
        }
        match r.read_u16::<BE>()? {
            VERSION => {}
            v => return Err(invalid(format!("unsupported version {}", v))),
        }
        let tournament_number = r.read_u32::<BE>()?;
        let random_seed = r.read_u64::<BE>()?;
        let n = match r.read_u8()? as usize {
            n if (2..=MAX_PLAYERS).contains(&n) => n,
            n => return Err(invalid(format!("{} players", n))),
        };
        let hands_per_level = r.read_u32::<BE>()?;
        let ai_types = (0..n)
            .map(|_| r.read_i8())
            .collect::<std::io::Result<Vec<i8>>>()?
            .into_iter()
            .map(|t| AiType::try_from(t as i32).map_err(|e| invalid(e.to_string())))
            .collect::<std::io::Result<Vec<AiType>>>()?;
        let finishing_order = (0..n)
            .map(|_| r.read_u8())
            .collect::<std::io::Result<Vec<u8>>>()?;
        let game_eliminated = (0..n)
            .map(|_| r.read_i32::<BE>())
            .collect::<std::io::Result<Vec<i32>>>()?
            .into_iter()
            .map(|e| match e {
                -1 => Ok(None),
                e if e >= 0 => Ok(Some(e as u32)),
                e => Err(invalid(format!("elimination index {}", e))),
            })
            .collect::<std::io::Result<Vec<Option<u32>>>>()?;
        let num_games = r.read_u32::<BE>()?;
        let summary = Self {
            tournament_number,
            random_seed,
            initial_player_count: n,
            hands_per_level,
            ai_types,
            finishing_order,
            game_eliminated,
            num_games,
        };
        summary.validate().map_err(invalid)?;
        Ok(summary)
    }
}

impl HandRecord {
    pub fn encode<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_u32::<BE>(self.index)?;
        w.write_u32::<BE>(self.level)?;
        w.write_u32::<BE>(self.small as u32)?;
        w.write_u32::<BE>(self.big as u32)?;
        w.write_u8(self.button as u8)?;
        for stack in self.stacks.iter() {
            w.write_i32::<BE>(*stack)?;
        }
        w.write_u8(self.dealt.len() as u8)?;
        for (seat, hole) in self.dealt.iter() {
            let (hi, lo) = hole.cards();
            w.write_u8(*seat as u8)?;
            w.write_u8(u8::from(hi))?;
            w.write_u8(u8::from(lo))?;
        }
        w.write_u8(self.board.cards().len() as u8)?;
        for card in self.board.cards() {
            w.write_u8(u8::from(*card))?;
        }
        w.write_u8(self.pots.len() as u8)?;
        for pot in self.pots.iter() {
            w.write_i32::<BE>(*pot)?;
        }
        w.write_u16::<BE>(self.actions.len() as u16)?;
        for (seat, action) in self.actions.iter() {
            w.write_u8(*seat as u8)?;
            w.write_u32::<BE>(u32::from(*action))?;
        }
        for delta in self.deltas.iter() {
            w.write_i32::<BE>(*delta)?;
        }
        Ok(())
    }
    pub fn decode<R: Read>(r: &mut R, n: usize) -> std::io::Result<Self> {
        let index = r.read_u32::<BE>()?;
        let level = r.read_u32::<BE>()?;
        let small = r.read_u32::<BE>()? as Chips;
        let big = r.read_u32::<BE>()? as Chips;
        let button = seat(r, n)?;
        let stacks = chips(r, n)?;
        let dealt = (0..r.read_u8()?)
            .map(|_| -> std::io::Result<(usize, Hole)> {
                let seat = seat(r, n)?;
                let hi = card(r)?;
                let lo = card(r)?;
                match hi == lo {
                    true => Err(invalid(format!("seat {} dealt {} twice", seat, hi))),
                    false => Ok((seat, Hole::from((hi, lo)))),
                }
            })
            .collect::<std::io::Result<Vec<_>>>()?;
        let board = match r.read_u8()? as usize {
            k @ (0 | 3 | 4 | 5) => (0..k)
                .map(|_| card(r))
                .collect::<std::io::Result<Vec<Card>>>()
                .map(Board::from)?,
            k => return Err(invalid(format!("board of {} cards", k))),
        };
        let pots = (0..r.read_u8()?)
            .map(|_| r.read_i32::<BE>())
            .collect::<std::io::Result<Vec<Chips>>>()?;
        let actions = (0..r.read_u16::<BE>()?)
            .map(|_| -> std::io::Result<(usize, Action)> {
                let seat = seat(r, n)?;
                let action = Action::try_from(r.read_u32::<BE>()?).map_err(invalid)?;
                Ok((seat, action))
            })
            .collect::<std::io::Result<Vec<_>>>()?;
        let deltas = chips(r, n)?;
        Ok(Self {
            index,
            level,
            small,
            big,
            button,
            stacks,
            dealt,
            board,
            pots,
            actions,
            deltas,
        })
    }
}

impl TournamentRecord {
    pub fn encode<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        self.summary().encode(w)?;
        for hand in self.hands.iter() {
            hand.encode(w)?;
        }
        Ok(())
    }
    /// Reads a whole record and rejects trailing bytes.
    pub fn decode<R: Read>(r: &mut R) -> std::io::Result<Self> {
        let summary = Summary::decode(r)?;
        let n = summary.initial_player_count;
        let mut hands = Vec::with_capacity((summary.num_games as usize).min(1 << 12));
        for i in 0..summary.num_games {
            let hand = HandRecord::decode(r, n)?;
            if hand.index != i {
                return Err(invalid(format!("hand {} stored at {}", hand.index, i)));
            }
            hands.push(hand);
        }
        if r.read(&mut [0u8; 1])? > 0 {
            return Err(invalid("trailing bytes after last hand"));
        }
        Ok(Self {
            number: summary.tournament_number,
            seed: summary.random_seed,
            hands_per_level: summary.hands_per_level,
            ai_types: summary.ai_types,
            finishing_order: summary.finishing_order,
            game_eliminated: summary.game_eliminated,
            hands,
        })
    }
    pub fn to_bytes(&self) -> std::io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TournamentRecord {
        let hand = |index: u32, deltas: Vec<Chips>, stacks: Vec<Chips>| HandRecord {
            index,
            level: 0,
            small: 25,
            big: 50,
            button: index as usize % 2,
            stacks,
            dealt: vec![
                (0, Hole::try_from("As Kd").unwrap()),
                (1, Hole::try_from("7c 2d").unwrap()),
            ],
            board: Board::from(vec![
                Card::try_from("2h").unwrap(),
                Card::try_from("3h").unwrap(),
                Card::try_from("4s").unwrap(),
                Card::try_from("9c").unwrap(),
                Card::try_from("Jh").unwrap(),
            ]),
            pots: vec![100],
            actions: vec![
                (0, Action::Blind(25)),
                (1, Action::Blind(50)),
                (0, Action::Call(25)),
                (1, Action::Check),
            ],
            deltas,
        };
        TournamentRecord {
            number: 12,
            seed: 0xDEADBEEF,
            hands_per_level: 20,
            ai_types: vec![AiType::Random, AiType::NeuralNet],
            finishing_order: vec![1, 2],
            game_eliminated: vec![None, Some(1)],
            hands: vec![
                hand(0, vec![50, -50], vec![5000, 5000]),
                hand(1, vec![4950, -4950], vec![5050, 4950]),
            ],
        }
    }

    #[test]
    fn record_survives_encoding() {
        let record = record();
        let bytes = record.to_bytes().unwrap();
        assert_eq!(&bytes[..4], b"DSHK");
        let decoded = TournamentRecord::decode(&mut bytes.as_slice()).unwrap();
        assert_eq!(decoded, record);
        assert_eq!(decoded.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn summary_reads_without_hands() {
        let record = record();
        let bytes = record.to_bytes().unwrap();
        let summary = Summary::decode(&mut bytes.as_slice()).unwrap();
        assert_eq!(summary, record.summary());
    }

    #[test]
    fn truncation_is_detected() {
        let bytes = record().to_bytes().unwrap();
        let cut = &bytes[..bytes.len() - 3];
        assert!(TournamentRecord::decode(&mut &cut[..]).is_err());
        let mut extra = bytes.clone();
        extra.push(0);
        assert!(TournamentRecord::decode(&mut extra.as_slice()).is_err());
    }

    #[test]
    fn wrong_version_is_rejected() {
        let mut bytes = record().to_bytes().unwrap();
        bytes[5] = 99;
        let err = Summary::decode(&mut bytes.as_slice()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
