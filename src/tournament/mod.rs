mod entrant;
mod level;
mod runner;
mod table;
mod tournament;

pub use entrant::*;
pub use level::*;
pub use runner::*;
pub use table::*;
pub use tournament::*;
