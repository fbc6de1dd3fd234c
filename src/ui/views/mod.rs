pub mod check;
pub mod cv;
pub mod export;
pub mod project;
