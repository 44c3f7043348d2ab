pub mod mappers;
pub mod repositories;

pub use repositories::swap_repository::PostgresSwapRepository;
