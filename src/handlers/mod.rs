// One route table per app, matching the four original services.
pub mod bar;
pub mod booking;
pub mod classroom;
pub mod trivia;
