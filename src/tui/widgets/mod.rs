pub mod dashboard;
pub mod gender;
pub mod study;
pub mod trivia;
pub mod word;
