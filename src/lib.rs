pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod cricbuzz;
    pub mod genai;
    pub mod live;
    pub mod news;
    pub mod player;
    pub mod roster;
    pub mod schedule;
    pub mod videos;
}
pub mod view {
    pub mod index;
}

pub use error::{CricError, Result};
