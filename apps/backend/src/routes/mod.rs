pub mod answers;
pub mod cards;
pub mod games;
pub mod sessions;
