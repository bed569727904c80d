pub mod desired_set;
pub mod token;

pub use desired_set::DesiredSet;
pub use token::FilterToken;
