pub mod action;
pub use action::*;

pub mod game;
pub use game::*;

pub mod seat;
pub use seat::*;

pub mod settlement;
pub use settlement::*;

pub mod showdown;
pub use showdown::*;

pub mod spot;
pub use spot::*;

pub mod turn;
pub use turn::*;
