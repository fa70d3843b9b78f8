pub mod catalog;
pub mod fuzzy;
pub mod keywords;
pub mod personality;
pub mod ranker;
pub mod recommendations;
