//! UIコンポーネント

pub mod ingredient_card;
pub mod navbar;
pub mod upload_area;
