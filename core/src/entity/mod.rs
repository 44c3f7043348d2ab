pub mod food_items;
pub mod swap_messages;
pub mod swaps;
pub mod users;
