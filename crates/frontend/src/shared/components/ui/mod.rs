pub mod badge;
pub mod select;

pub use badge::{Badge, RankBadge};
pub use select::Select;
