pub mod swap_repository;
