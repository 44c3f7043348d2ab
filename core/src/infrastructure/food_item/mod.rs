pub mod mappers;
pub mod repositories;

pub use repositories::food_item_repository::PostgresFoodItemRepository;
