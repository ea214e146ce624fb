pub mod assign;
pub mod car;
pub mod score;
pub mod scorer;
pub mod submission;
