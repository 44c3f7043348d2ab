pub mod get_my_swaps;
pub mod get_pending_swaps;
pub mod get_swap;
pub mod get_swap_messages;
pub mod post_swap_message;
pub mod request_swap;
pub mod submit_review;
pub mod update_swap_status;
