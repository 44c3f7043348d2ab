pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{FoodItem, FoodItemStatus};
pub use ports::{FoodItemRepository, FoodItemService};
