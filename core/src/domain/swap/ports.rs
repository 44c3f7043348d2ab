use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    swap::{
        entities::{ChatMessage, Swap, SwapStatus},
        value_objects::{GetSwapsFilter, RequestSwapInput, ReviewTarget, SubmitReviewInput},
    },
    user::value_objects::Identity,
};

/// Repository trait for the swap ledger.
///
/// The mutating operations are transactional units: each one re-validates
/// its food-item/rating precondition with a conditional update inside the
/// transaction, so a stale read in the service layer can never produce an
/// inconsistent write. Losing such a race surfaces as `ItemUnavailable`,
/// `OfferedItemUnavailable`, `InvalidTransition` or `AlreadyReviewed`.
#[cfg_attr(test, mockall::automock)]
pub trait SwapRepository: Send + Sync {
    /// Inserts the pending swap and flips the primary (and offered) item
    /// `available -> reserved` in one transaction. The conditional flip is
    /// the gate that keeps concurrent claims on one item down to a single
    /// winner.
    fn create_pending(&self, swap: Swap) -> impl Future<Output = Result<Swap, CoreError>> + Send;

    fn get_by_id(
        &self,
        swap_id: Uuid,
    ) -> impl Future<Output = Result<Option<Swap>, CoreError>> + Send;

    fn get_all(
        &self,
        filter: GetSwapsFilter,
    ) -> impl Future<Output = Result<Vec<Swap>, CoreError>> + Send;

    /// Writes the new status (guarded on the current one) and applies the
    /// item/reputation side effects in the same transaction:
    /// rejected/cancelled revert items to `available`; completed moves items
    /// to `completed` and increments the participants' counters.
    fn set_status(
        &self,
        swap: Swap,
        new_status: SwapStatus,
    ) -> impl Future<Output = Result<Swap, CoreError>> + Send;

    /// Writes the rating/review for one side, guarded on "not yet rated",
    /// and updates the rated user's rating counters plus recomputed trust
    /// score in the same transaction.
    fn record_review(
        &self,
        swap: Swap,
        side: ReviewTarget,
        rating: i32,
        review: Option<String>,
    ) -> impl Future<Output = Result<Swap, CoreError>> + Send;

    fn append_message(
        &self,
        swap_id: Uuid,
        message: ChatMessage,
    ) -> impl Future<Output = Result<ChatMessage, CoreError>> + Send;
}

/// Service trait for the swap lifecycle.
#[cfg_attr(test, mockall::automock)]
pub trait SwapService: Send + Sync {
    fn request_swap(
        &self,
        identity: Identity,
        input: RequestSwapInput,
    ) -> impl Future<Output = Result<Swap, CoreError>> + Send;

    fn update_status(
        &self,
        identity: Identity,
        swap_id: Uuid,
        new_status: SwapStatus,
    ) -> impl Future<Output = Result<Swap, CoreError>> + Send;

    fn submit_review(
        &self,
        identity: Identity,
        input: SubmitReviewInput,
    ) -> impl Future<Output = Result<Swap, CoreError>> + Send;

    fn post_message(
        &self,
        identity: Identity,
        swap_id: Uuid,
        content: String,
    ) -> impl Future<Output = Result<ChatMessage, CoreError>> + Send;

    fn get_messages(
        &self,
        identity: Identity,
        swap_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ChatMessage>, CoreError>> + Send;

    fn get_swap(
        &self,
        identity: Identity,
        swap_id: Uuid,
    ) -> impl Future<Output = Result<Swap, CoreError>> + Send;

    fn get_my_swaps(
        &self,
        identity: Identity,
        filter: GetSwapsFilter,
    ) -> impl Future<Output = Result<Vec<Swap>, CoreError>> + Send;

    /// Provider inbox: pending requests waiting on the caller's decision.
    fn get_pending_swaps(
        &self,
        identity: Identity,
        filter: GetSwapsFilter,
    ) -> impl Future<Output = Result<Vec<Swap>, CoreError>> + Send;
}
