//! 画面

pub mod home;
pub mod ingredients;
