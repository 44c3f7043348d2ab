use crate::{
    domain::swap::entities::{ChatMessage, Swap},
    entity::{swap_messages, swaps},
};

impl From<&swaps::Model> for Swap {
    fn from(model: &swaps::Model) -> Self {
        // Messages are loaded separately from the satellite table.
        Self {
            id: model.id,
            requester_id: model.requester_id,
            provider_id: model.provider_id,
            food_item_id: model.food_item_id,
            offered_item_id: model.offered_item_id,
            message: model.message.clone(),
            status: model.status.as_str().into(),
            is_swap: model.is_swap,
            is_purchase: model.is_purchase,
            amount: model.amount,
            requester_rating: model.requester_rating,
            provider_rating: model.provider_rating,
            requester_review: model.requester_review.clone(),
            provider_review: model.provider_review.clone(),
            messages: Vec::new(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<swaps::Model> for Swap {
    fn from(model: swaps::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&swap_messages::Model> for ChatMessage {
    fn from(model: &swap_messages::Model) -> Self {
        Self {
            id: model.id,
            sender_id: model.sender_id,
            content: model.content.clone(),
            sent_at: model.sent_at.to_utc(),
        }
    }
}

impl From<swap_messages::Model> for ChatMessage {
    fn from(model: swap_messages::Model) -> Self {
        Self::from(&model)
    }
}
