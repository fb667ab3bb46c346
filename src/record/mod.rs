mod codec;
mod files;
mod hand;
mod replay;
mod summary;
mod tournament;

pub use files::records;
pub use hand::*;
pub use replay::*;
pub use summary::*;
pub use tournament::*;
