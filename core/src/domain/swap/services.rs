use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    food_item::ports::FoodItemRepository,
    health::ports::HealthCheckRepository,
    swap::{
        entities::{ChatMessage, Swap, SwapConfig, SwapStatus},
        ports::{SwapRepository, SwapService},
        value_objects::{
            GetSwapsFilter, RequestSwapInput, ReviewTarget, SubmitReviewInput, SwapRole,
        },
    },
    user::{ports::UserRepository, value_objects::Identity},
};

impl<F, S, U, H> SwapService for Service<F, S, U, H>
where
    F: FoodItemRepository,
    S: SwapRepository,
    U: UserRepository,
    H: HealthCheckRepository,
{
    async fn request_swap(
        &self,
        identity: Identity,
        input: RequestSwapInput,
    ) -> Result<Swap, CoreError> {
        let requester_id = identity.id();

        let item = self
            .food_item_repository
            .get_by_id(input.food_item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if item.owner_id == requester_id {
            return Err(CoreError::Validation(
                "you cannot claim your own listing".to_string(),
            ));
        }

        if !item.is_claimable() {
            return Err(CoreError::ItemUnavailable);
        }

        if let Some(offered_item_id) = input.offered_item_id {
            if offered_item_id == input.food_item_id {
                return Err(CoreError::Validation(
                    "offered item must differ from the requested item".to_string(),
                ));
            }

            let offered = self
                .food_item_repository
                .get_by_id(offered_item_id)
                .await?
                .ok_or(CoreError::OfferedItemUnavailable)?;

            if offered.owner_id != requester_id || !offered.is_claimable() {
                return Err(CoreError::OfferedItemUnavailable);
            }
        }

        let amount = if input.is_purchase { item.price } else { 0.0 };

        let swap = Swap::new(SwapConfig {
            requester_id,
            provider_id: item.owner_id,
            food_item_id: item.id,
            offered_item_id: input.offered_item_id,
            message: input.message,
            is_swap: input.is_swap,
            is_purchase: input.is_purchase,
            amount,
        });

        // The repository re-checks availability with a conditional update
        // inside its transaction; losing the race to another requester or
        // the expiry sweeper fails here with ItemUnavailable.
        let created = self.swap_repository.create_pending(swap).await?;

        info!(
            swap_id = %created.id,
            food_item_id = %created.food_item_id,
            requester_id = %created.requester_id,
            "created swap request"
        );

        Ok(created)
    }

    async fn update_status(
        &self,
        identity: Identity,
        swap_id: Uuid,
        new_status: SwapStatus,
    ) -> Result<Swap, CoreError> {
        let swap = self
            .swap_repository
            .get_by_id(swap_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        swap.authorize_transition(identity.id(), new_status)?;

        let updated = self.swap_repository.set_status(swap, new_status).await?;

        info!(
            swap_id = %updated.id,
            status = updated.status.as_str(),
            "swap status changed"
        );

        Ok(updated)
    }

    async fn submit_review(
        &self,
        identity: Identity,
        input: SubmitReviewInput,
    ) -> Result<Swap, CoreError> {
        let actor = identity.id();

        let swap = self
            .swap_repository
            .get_by_id(input.swap_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            Ok(swap.is_participant(actor)),
            "only swap participants may submit reviews",
        )?;

        if swap.status != SwapStatus::Completed {
            return Err(CoreError::NotCompleted);
        }

        match input.review_for {
            ReviewTarget::Provider => {
                // The recipient rating the fulfiller, valid on any completed
                // swap.
                ensure_policy(
                    Ok(swap.is_requester(actor)),
                    "only the requester may review the provider",
                )?;
                if swap.provider_rating != 0 {
                    return Err(CoreError::AlreadyReviewed);
                }
            }
            ReviewTarget::Requester => {
                // The provider only "received" something on a true item
                // swap; a one-way giveaway or purchase gives them nothing to
                // rate.
                ensure_policy(
                    Ok(swap.is_provider(actor) && swap.is_true_item_swap()),
                    "the requester can only be reviewed on an item-for-item swap",
                )?;
                if swap.requester_rating != 0 {
                    return Err(CoreError::AlreadyReviewed);
                }
            }
        }

        let rating = input.rating.clamp(1, 5);

        let updated = self
            .swap_repository
            .record_review(swap, input.review_for, rating, input.review)
            .await?;

        info!(swap_id = %updated.id, rating, "review recorded");

        Ok(updated)
    }

    async fn post_message(
        &self,
        identity: Identity,
        swap_id: Uuid,
        content: String,
    ) -> Result<ChatMessage, CoreError> {
        let actor = identity.id();

        let swap = self
            .swap_repository
            .get_by_id(swap_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            Ok(swap.is_participant(actor)),
            "only swap participants may post messages",
        )?;

        // Coordination opens once the provider accepts and the thread stays
        // readable/writable after completion for dispute resolution.
        if !matches!(swap.status, SwapStatus::Accepted | SwapStatus::Completed) {
            return Err(CoreError::Validation(
                "messages are only available once the swap is accepted".to_string(),
            ));
        }

        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(CoreError::Validation(
                "message content must not be empty".to_string(),
            ));
        }

        self.swap_repository
            .append_message(swap.id, ChatMessage::new(actor, content))
            .await
    }

    async fn get_messages(
        &self,
        identity: Identity,
        swap_id: Uuid,
    ) -> Result<Vec<ChatMessage>, CoreError> {
        let swap = self
            .swap_repository
            .get_by_id(swap_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            Ok(swap.is_participant(identity.id())),
            "only swap participants may read messages",
        )?;

        Ok(swap.messages)
    }

    async fn get_swap(&self, identity: Identity, swap_id: Uuid) -> Result<Swap, CoreError> {
        let swap = self
            .swap_repository
            .get_by_id(swap_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            Ok(swap.is_participant(identity.id())),
            "only swap participants may view this swap",
        )?;

        Ok(swap)
    }

    async fn get_my_swaps(
        &self,
        identity: Identity,
        filter: GetSwapsFilter,
    ) -> Result<Vec<Swap>, CoreError> {
        let filter = GetSwapsFilter {
            participant: Some(identity.id()),
            ..filter
        };

        self.swap_repository.get_all(filter).await
    }

    async fn get_pending_swaps(
        &self,
        identity: Identity,
        filter: GetSwapsFilter,
    ) -> Result<Vec<Swap>, CoreError> {
        let filter = GetSwapsFilter {
            participant: Some(identity.id()),
            role: Some(SwapRole::Provider),
            status: Some(SwapStatus::Pending),
            ..filter
        };

        self.swap_repository.get_all(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        food_item::{
            entities::{DietaryFlags, FoodItem, FoodItemConfig, FoodItemStatus},
            ports::MockFoodItemRepository,
        },
        health::ports::MockHealthCheckRepository,
        swap::ports::MockSwapRepository,
        user::{entities::User, ports::MockUserRepository},
    };
    use chrono::{Duration, Utc};

    type TestService = Service<
        MockFoodItemRepository,
        MockSwapRepository,
        MockUserRepository,
        MockHealthCheckRepository,
    >;

    fn service(food_items: MockFoodItemRepository, swaps: MockSwapRepository) -> TestService {
        Service::new(
            food_items,
            swaps,
            MockUserRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn identity_for(id: Uuid) -> Identity {
        Identity::new(User::new(
            id,
            format!("user_{}", id.simple()),
            format!("{}@example.net", id.simple()),
        ))
    }

    fn item(owner: Uuid, status: FoodItemStatus) -> FoodItem {
        let mut item = FoodItem::new(FoodItemConfig {
            owner_id: owner,
            title: "Half a pumpkin".to_string(),
            description: None,
            quantity: 1,
            unit: "piece".to_string(),
            category: "produce".to_string(),
            dietary: DietaryFlags::default(),
            price: 0.0,
            original_price: None,
            pickup_only: true,
            expires_at: Utc::now() + Duration::days(1),
            latitude: None,
            longitude: None,
            address: None,
            image_urls: vec![],
        });
        item.status = status;
        item.is_available = status == FoodItemStatus::Available;
        item
    }

    fn pending_swap(requester: Uuid, provider: Uuid, food_item: Uuid) -> Swap {
        Swap::new(SwapConfig {
            requester_id: requester,
            provider_id: provider,
            food_item_id: food_item,
            offered_item_id: None,
            message: None,
            is_swap: false,
            is_purchase: false,
            amount: 0.0,
        })
    }

    fn request_input(food_item_id: Uuid) -> RequestSwapInput {
        RequestSwapInput {
            food_item_id,
            offered_item_id: None,
            message: Some("Could I pick this up tonight?".to_string()),
            is_swap: false,
            is_purchase: false,
        }
    }

    fn expect_item(repo: &mut MockFoodItemRepository, item: FoodItem) {
        let id = item.id;
        repo.expect_get_by_id()
            .withf(move |item_id| *item_id == id)
            .returning(move |_| {
                let item = item.clone();
                Box::pin(async move { Ok(Some(item)) })
            });
    }

    fn expect_swap(repo: &mut MockSwapRepository, swap: Swap) {
        let id = swap.id;
        repo.expect_get_by_id()
            .withf(move |swap_id| *swap_id == id)
            .returning(move |_| {
                let swap = swap.clone();
                Box::pin(async move { Ok(Some(swap)) })
            });
    }

    #[tokio::test]
    async fn request_swap_creates_pending_record() {
        let provider = Uuid::new_v4();
        let requester = Uuid::new_v4();
        let item = item(provider, FoodItemStatus::Available);

        let mut food_items = MockFoodItemRepository::new();
        expect_item(&mut food_items, item.clone());

        let mut swaps = MockSwapRepository::new();
        swaps
            .expect_create_pending()
            .withf(move |swap| {
                swap.status == SwapStatus::Pending
                    && swap.provider_id == provider
                    && swap.requester_id == requester
                    && swap.amount == 0.0
            })
            .returning(|swap| Box::pin(async move { Ok(swap) }));

        let created = service(food_items, swaps)
            .request_swap(identity_for(requester), request_input(item.id))
            .await
            .unwrap();

        assert_eq!(created.status, SwapStatus::Pending);
    }

    #[tokio::test]
    async fn request_swap_rejects_self_claim() {
        let owner = Uuid::new_v4();
        let item = item(owner, FoodItemStatus::Available);

        let mut food_items = MockFoodItemRepository::new();
        expect_item(&mut food_items, item.clone());

        let err = service(food_items, MockSwapRepository::new())
            .request_swap(identity_for(owner), request_input(item.id))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn request_swap_rejects_reserved_item() {
        let item = item(Uuid::new_v4(), FoodItemStatus::Reserved);

        let mut food_items = MockFoodItemRepository::new();
        expect_item(&mut food_items, item.clone());

        let err = service(food_items, MockSwapRepository::new())
            .request_swap(identity_for(Uuid::new_v4()), request_input(item.id))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::ItemUnavailable);
    }

    #[tokio::test]
    async fn request_swap_rejects_missing_item() {
        let mut food_items = MockFoodItemRepository::new();
        food_items
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = service(food_items, MockSwapRepository::new())
            .request_swap(identity_for(Uuid::new_v4()), request_input(Uuid::new_v4()))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn request_swap_surfaces_lost_race_as_item_unavailable() {
        // The read sees an available item but the conditional flip inside
        // the repository transaction loses to a concurrent claim.
        let item = item(Uuid::new_v4(), FoodItemStatus::Available);

        let mut food_items = MockFoodItemRepository::new();
        expect_item(&mut food_items, item.clone());

        let mut swaps = MockSwapRepository::new();
        swaps
            .expect_create_pending()
            .returning(|_| Box::pin(async { Err(CoreError::ItemUnavailable) }));

        let err = service(food_items, swaps)
            .request_swap(identity_for(Uuid::new_v4()), request_input(item.id))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::ItemUnavailable);
    }

    #[tokio::test]
    async fn request_swap_offered_item_must_belong_to_requester() {
        let requester = Uuid::new_v4();
        let primary = item(Uuid::new_v4(), FoodItemStatus::Available);
        let offered = item(Uuid::new_v4(), FoodItemStatus::Available); // someone else's

        let mut food_items = MockFoodItemRepository::new();
        expect_item(&mut food_items, primary.clone());
        expect_item(&mut food_items, offered.clone());

        let mut input = request_input(primary.id);
        input.offered_item_id = Some(offered.id);
        input.is_swap = true;

        let err = service(food_items, MockSwapRepository::new())
            .request_swap(identity_for(requester), input)
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::OfferedItemUnavailable);
    }

    #[tokio::test]
    async fn request_swap_offered_item_must_be_available() {
        let requester = Uuid::new_v4();
        let primary = item(Uuid::new_v4(), FoodItemStatus::Available);
        let offered = item(requester, FoodItemStatus::Reserved);

        let mut food_items = MockFoodItemRepository::new();
        expect_item(&mut food_items, primary.clone());
        expect_item(&mut food_items, offered.clone());

        let mut input = request_input(primary.id);
        input.offered_item_id = Some(offered.id);
        input.is_swap = true;

        let err = service(food_items, MockSwapRepository::new())
            .request_swap(identity_for(requester), input)
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::OfferedItemUnavailable);
    }

    #[tokio::test]
    async fn request_swap_purchase_carries_item_price() {
        let requester = Uuid::new_v4();
        let mut listing = item(Uuid::new_v4(), FoodItemStatus::Available);
        listing.price = 4.5;
        listing.is_free = false;

        let mut food_items = MockFoodItemRepository::new();
        expect_item(&mut food_items, listing.clone());

        let mut swaps = MockSwapRepository::new();
        swaps
            .expect_create_pending()
            .withf(|swap| swap.is_purchase && swap.amount == 4.5)
            .returning(|swap| Box::pin(async move { Ok(swap) }));

        let mut input = request_input(listing.id);
        input.is_purchase = true;

        service(food_items, swaps)
            .request_swap(identity_for(requester), input)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn provider_accepts_pending_swap() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let swap = pending_swap(requester, provider, Uuid::new_v4());

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());
        swaps
            .expect_set_status()
            .withf(|_, status| *status == SwapStatus::Accepted)
            .returning(|mut swap, status| {
                swap.status = status;
                Box::pin(async move { Ok(swap) })
            });

        let updated = service(MockFoodItemRepository::new(), swaps)
            .update_status(identity_for(provider), swap.id, SwapStatus::Accepted)
            .await
            .unwrap();

        assert_eq!(updated.status, SwapStatus::Accepted);
    }

    #[tokio::test]
    async fn requester_cannot_accept() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let swap = pending_swap(requester, provider, Uuid::new_v4());

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());

        let err = service(MockFoodItemRepository::new(), swaps)
            .update_status(identity_for(requester), swap.id, SwapStatus::Accepted)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn requester_completes_accepted_swap() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let mut swap = pending_swap(requester, provider, Uuid::new_v4());
        swap.status = SwapStatus::Accepted;

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());
        swaps
            .expect_set_status()
            .withf(|_, status| *status == SwapStatus::Completed)
            .returning(|mut swap, status| {
                swap.status = status;
                Box::pin(async move { Ok(swap) })
            });

        let updated = service(MockFoodItemRepository::new(), swaps)
            .update_status(identity_for(requester), swap.id, SwapStatus::Completed)
            .await
            .unwrap();

        assert_eq!(updated.status, SwapStatus::Completed);
    }

    #[tokio::test]
    async fn provider_cannot_complete() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let mut swap = pending_swap(requester, provider, Uuid::new_v4());
        swap.status = SwapStatus::Accepted;

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());

        let err = service(MockFoodItemRepository::new(), swaps)
            .update_status(identity_for(provider), swap.id, SwapStatus::Completed)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn completed_swap_is_terminal() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let mut swap = pending_swap(requester, provider, Uuid::new_v4());
        swap.status = SwapStatus::Completed;

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());

        let err = service(MockFoodItemRepository::new(), swaps)
            .update_status(identity_for(requester), swap.id, SwapStatus::Cancelled)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn outsider_cannot_touch_swap() {
        let swap = pending_swap(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());

        let err = service(MockFoodItemRepository::new(), swaps)
            .update_status(identity_for(Uuid::new_v4()), swap.id, SwapStatus::Cancelled)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    fn completed_swap(requester: Uuid, provider: Uuid) -> Swap {
        let mut swap = pending_swap(requester, provider, Uuid::new_v4());
        swap.status = SwapStatus::Completed;
        swap
    }

    fn review_input(swap_id: Uuid, review_for: ReviewTarget, rating: i32) -> SubmitReviewInput {
        SubmitReviewInput {
            swap_id,
            review_for,
            rating,
            review: Some("Everything as described".to_string()),
        }
    }

    #[tokio::test]
    async fn requester_reviews_provider() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let swap = completed_swap(requester, provider);

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());
        swaps
            .expect_record_review()
            .withf(|_, side, rating, _| *side == ReviewTarget::Provider && *rating == 5)
            .returning(|mut swap, _, rating, review| {
                swap.provider_rating = rating;
                swap.provider_review = review;
                Box::pin(async move { Ok(swap) })
            });

        let updated = service(MockFoodItemRepository::new(), swaps)
            .submit_review(
                identity_for(requester),
                review_input(swap.id, ReviewTarget::Provider, 5),
            )
            .await
            .unwrap();

        assert_eq!(updated.provider_rating, 5);
    }

    #[tokio::test]
    async fn provider_cannot_review_requester_on_giveaway() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let swap = completed_swap(requester, provider);

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());

        let err = service(MockFoodItemRepository::new(), swaps)
            .submit_review(
                identity_for(provider),
                review_input(swap.id, ReviewTarget::Requester, 4),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn provider_reviews_requester_on_true_item_swap() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let mut swap = completed_swap(requester, provider);
        swap.is_swap = true;
        swap.offered_item_id = Some(Uuid::new_v4());

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());
        swaps
            .expect_record_review()
            .withf(|_, side, _, _| *side == ReviewTarget::Requester)
            .returning(|mut swap, _, rating, review| {
                swap.requester_rating = rating;
                swap.requester_review = review;
                Box::pin(async move { Ok(swap) })
            });

        let updated = service(MockFoodItemRepository::new(), swaps)
            .submit_review(
                identity_for(provider),
                review_input(swap.id, ReviewTarget::Requester, 4),
            )
            .await
            .unwrap();

        assert_eq!(updated.requester_rating, 4);
    }

    #[tokio::test]
    async fn review_requires_completed_swap() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let mut swap = pending_swap(requester, provider, Uuid::new_v4());
        swap.status = SwapStatus::Accepted;

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());

        let err = service(MockFoodItemRepository::new(), swaps)
            .submit_review(
                identity_for(requester),
                review_input(swap.id, ReviewTarget::Provider, 5),
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotCompleted);
    }

    #[tokio::test]
    async fn second_review_for_same_side_is_rejected() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let mut swap = completed_swap(requester, provider);
        swap.provider_rating = 5;

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());

        let err = service(MockFoodItemRepository::new(), swaps)
            .submit_review(
                identity_for(requester),
                review_input(swap.id, ReviewTarget::Provider, 1),
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::AlreadyReviewed);
    }

    #[tokio::test]
    async fn rating_is_clamped_into_one_to_five() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let swap = completed_swap(requester, provider);

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());
        swaps
            .expect_record_review()
            .withf(|_, _, rating, _| *rating == 5)
            .returning(|mut swap, _, rating, _| {
                swap.provider_rating = rating;
                Box::pin(async move { Ok(swap) })
            });

        service(MockFoodItemRepository::new(), swaps)
            .submit_review(
                identity_for(requester),
                review_input(swap.id, ReviewTarget::Provider, 11),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn messages_require_accepted_swap() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let swap = pending_swap(requester, provider, Uuid::new_v4());

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());

        let err = service(MockFoodItemRepository::new(), swaps)
            .post_message(
                identity_for(requester),
                swap.id,
                "See you at six?".to_string(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn participants_chat_on_accepted_swap() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let mut swap = pending_swap(requester, provider, Uuid::new_v4());
        swap.status = SwapStatus::Accepted;

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());
        swaps
            .expect_append_message()
            .returning(|_, message| Box::pin(async move { Ok(message) }));

        let message = service(MockFoodItemRepository::new(), swaps)
            .post_message(
                identity_for(provider),
                swap.id,
                "Porch pickup works.".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(message.sender_id, provider);
        assert_eq!(message.content, "Porch pickup works.");
    }

    #[tokio::test]
    async fn outsider_cannot_read_messages() {
        let mut swap = pending_swap(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        swap.status = SwapStatus::Accepted;

        let mut swaps = MockSwapRepository::new();
        expect_swap(&mut swaps, swap.clone());

        let err = service(MockFoodItemRepository::new(), swaps)
            .get_messages(identity_for(Uuid::new_v4()), swap.id)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn my_swaps_is_scoped_to_the_caller() {
        let caller = Uuid::new_v4();

        let mut swaps = MockSwapRepository::new();
        swaps
            .expect_get_all()
            .withf(move |filter| filter.participant == Some(caller))
            .returning(|_| Box::pin(async { Ok(vec![]) }));

        service(MockFoodItemRepository::new(), swaps)
            .get_my_swaps(identity_for(caller), GetSwapsFilter::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn pending_inbox_filters_provider_role_and_pending_status() {
        let caller = Uuid::new_v4();

        let mut swaps = MockSwapRepository::new();
        swaps
            .expect_get_all()
            .withf(move |filter| {
                filter.participant == Some(caller)
                    && filter.role == Some(SwapRole::Provider)
                    && filter.status == Some(SwapStatus::Pending)
            })
            .returning(|_| Box::pin(async { Ok(vec![]) }));

        service(MockFoodItemRepository::new(), swaps)
            .get_pending_swaps(identity_for(caller), GetSwapsFilter::default())
            .await
            .unwrap();
    }
}
