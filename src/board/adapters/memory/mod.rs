//! In-memory adapters for the project board.

mod remote;

pub use remote::InMemoryBoardRemote;
