use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    user::entities::ReputationDelta,
};

/// Ledger entry lifecycle.
///
/// ```text
/// pending   -> accepted | rejected | cancelled
/// accepted  -> completed | cancelled
/// rejected | completed | cancelled -> (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl SwapStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Accepted => "accepted",
            SwapStatus::Rejected => "rejected",
            SwapStatus::Completed => "completed",
            SwapStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(SwapStatus::Pending),
            "accepted" => Some(SwapStatus::Accepted),
            "rejected" => Some(SwapStatus::Rejected),
            "completed" => Some(SwapStatus::Completed),
            "cancelled" => Some(SwapStatus::Cancelled),
            _ => None,
        }
    }

    /// The transition table. Everything not listed here is invalid.
    pub fn allowed_transitions(&self) -> &'static [SwapStatus] {
        match self {
            SwapStatus::Pending => &[
                SwapStatus::Accepted,
                SwapStatus::Rejected,
                SwapStatus::Cancelled,
            ],
            SwapStatus::Accepted => &[SwapStatus::Completed, SwapStatus::Cancelled],
            SwapStatus::Rejected | SwapStatus::Completed | SwapStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: SwapStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Active swaps hold their food item(s) in `reserved`.
    pub fn is_active(&self) -> bool {
        matches!(self, SwapStatus::Pending | SwapStatus::Accepted)
    }
}

impl From<&str> for SwapStatus {
    fn from(s: &str) -> Self {
        SwapStatus::parse(s).unwrap_or(SwapStatus::Cancelled)
    }
}

/// One entry of the append-only coordination thread embedded in a swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender_id: Uuid, content: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            sender_id,
            content,
            sent_at: now,
        }
    }
}

/// One claim/exchange transaction: a requester claims a provider's listing,
/// optionally offering one of their own items in exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Swap {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub provider_id: Uuid,
    pub food_item_id: Uuid,
    pub offered_item_id: Option<Uuid>,
    pub message: Option<String>,
    pub status: SwapStatus,
    pub is_swap: bool,
    pub is_purchase: bool,
    pub amount: f64,
    /// 0 = unrated, else 1..=5. Rating received by the requester.
    pub requester_rating: i32,
    /// 0 = unrated, else 1..=5. Rating received by the provider.
    pub provider_rating: i32,
    pub requester_review: Option<String>,
    pub provider_review: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SwapConfig {
    pub requester_id: Uuid,
    pub provider_id: Uuid,
    pub food_item_id: Uuid,
    pub offered_item_id: Option<Uuid>,
    pub message: Option<String>,
    pub is_swap: bool,
    pub is_purchase: bool,
    pub amount: f64,
}

impl Swap {
    pub fn new(config: SwapConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            requester_id: config.requester_id,
            provider_id: config.provider_id,
            food_item_id: config.food_item_id,
            offered_item_id: config.offered_item_id,
            message: config.message,
            status: SwapStatus::Pending,
            is_swap: config.is_swap,
            is_purchase: config.is_purchase,
            amount: config.amount,
            requester_rating: 0,
            provider_rating: 0,
            requester_review: None,
            provider_review: None,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_requester(&self, user_id: Uuid) -> bool {
        self.requester_id == user_id
    }

    pub fn is_provider(&self, user_id: Uuid) -> bool {
        self.provider_id == user_id
    }

    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.is_requester(user_id) || self.is_provider(user_id)
    }

    /// True item-for-item exchange, as opposed to a giveaway or purchase.
    pub fn is_true_item_swap(&self) -> bool {
        self.is_swap && self.offered_item_id.is_some()
    }

    /// Validates both the transition table and the per-edge actor rule:
    /// accept/reject belong to the provider, completion to the requester,
    /// and either participant may cancel.
    pub fn authorize_transition(&self, actor: Uuid, next: SwapStatus) -> Result<(), CoreError> {
        if !self.is_participant(actor) {
            return Err(CoreError::Forbidden(
                "only swap participants may change its status".to_string(),
            ));
        }

        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }

        let allowed = match (self.status, next) {
            (SwapStatus::Pending, SwapStatus::Accepted)
            | (SwapStatus::Pending, SwapStatus::Rejected) => self.is_provider(actor),
            (SwapStatus::Pending, SwapStatus::Cancelled)
            | (SwapStatus::Accepted, SwapStatus::Cancelled) => true,
            (SwapStatus::Accepted, SwapStatus::Completed) => self.is_requester(actor),
            _ => false,
        };

        if allowed {
            Ok(())
        } else {
            Err(CoreError::Forbidden(format!(
                "actor may not move this swap from {} to {}",
                self.status.as_str(),
                next.as_str()
            )))
        }
    }

    /// Reputation counter increments applied when this swap completes,
    /// returned as (requester delta, provider delta).
    ///
    /// The provider gains "received" credit only on a true item swap, where
    /// the offered item flows back to them.
    pub fn completion_deltas(&self) -> (ReputationDelta, ReputationDelta) {
        let requester = ReputationDelta {
            items_shared: 0,
            items_received: 1,
        };
        let provider = ReputationDelta {
            items_shared: 1,
            items_received: if self.is_true_item_swap() { 1 } else { 0 },
        };

        (requester, provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap(requester: Uuid, provider: Uuid, status: SwapStatus) -> Swap {
        let mut swap = Swap::new(SwapConfig {
            requester_id: requester,
            provider_id: provider,
            food_item_id: Uuid::new_v4(),
            offered_item_id: None,
            message: None,
            is_swap: false,
            is_purchase: false,
            amount: 0.0,
        });
        swap.status = status;
        swap
    }

    #[test]
    fn transition_table_is_closed() {
        let all = [
            SwapStatus::Pending,
            SwapStatus::Accepted,
            SwapStatus::Rejected,
            SwapStatus::Completed,
            SwapStatus::Cancelled,
        ];

        for from in all {
            for to in all {
                let expected = matches!(
                    (from, to),
                    (SwapStatus::Pending, SwapStatus::Accepted)
                        | (SwapStatus::Pending, SwapStatus::Rejected)
                        | (SwapStatus::Pending, SwapStatus::Cancelled)
                        | (SwapStatus::Accepted, SwapStatus::Completed)
                        | (SwapStatus::Accepted, SwapStatus::Cancelled)
                );
                assert_eq!(from.can_transition_to(to), expected, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for status in [
            SwapStatus::Rejected,
            SwapStatus::Completed,
            SwapStatus::Cancelled,
        ] {
            assert!(status.is_terminal());
            assert!(!status.is_active());
        }
        assert!(SwapStatus::Pending.is_active());
        assert!(SwapStatus::Accepted.is_active());
    }

    #[test]
    fn provider_accepts_and_rejects() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let s = swap(requester, provider, SwapStatus::Pending);

        assert!(s.authorize_transition(provider, SwapStatus::Accepted).is_ok());
        assert!(s.authorize_transition(provider, SwapStatus::Rejected).is_ok());
        assert!(matches!(
            s.authorize_transition(requester, SwapStatus::Accepted),
            Err(CoreError::Forbidden(_))
        ));
        assert!(matches!(
            s.authorize_transition(requester, SwapStatus::Rejected),
            Err(CoreError::Forbidden(_))
        ));
    }

    #[test]
    fn requester_completes() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());
        let s = swap(requester, provider, SwapStatus::Accepted);

        assert!(s.authorize_transition(requester, SwapStatus::Completed).is_ok());
        assert!(matches!(
            s.authorize_transition(provider, SwapStatus::Completed),
            Err(CoreError::Forbidden(_))
        ));
    }

    #[test]
    fn either_participant_cancels() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());

        for status in [SwapStatus::Pending, SwapStatus::Accepted] {
            let s = swap(requester, provider, status);
            assert!(s.authorize_transition(requester, SwapStatus::Cancelled).is_ok());
            assert!(s.authorize_transition(provider, SwapStatus::Cancelled).is_ok());
        }
    }

    #[test]
    fn outsider_is_rejected_before_transition_check() {
        let s = swap(Uuid::new_v4(), Uuid::new_v4(), SwapStatus::Pending);

        assert!(matches!(
            s.authorize_transition(Uuid::new_v4(), SwapStatus::Accepted),
            Err(CoreError::Forbidden(_))
        ));
    }

    #[test]
    fn terminal_transitions_fail_with_invalid_transition() {
        let (requester, provider) = (Uuid::new_v4(), Uuid::new_v4());

        for status in [
            SwapStatus::Rejected,
            SwapStatus::Completed,
            SwapStatus::Cancelled,
        ] {
            let s = swap(requester, provider, status);
            assert!(matches!(
                s.authorize_transition(requester, SwapStatus::Cancelled),
                Err(CoreError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn giveaway_completion_deltas() {
        let s = swap(Uuid::new_v4(), Uuid::new_v4(), SwapStatus::Accepted);
        let (requester, provider) = s.completion_deltas();

        assert_eq!(requester.items_received, 1);
        assert_eq!(requester.items_shared, 0);
        assert_eq!(provider.items_shared, 1);
        assert_eq!(provider.items_received, 0);
    }

    #[test]
    fn true_item_swap_credits_provider_with_received() {
        let mut s = swap(Uuid::new_v4(), Uuid::new_v4(), SwapStatus::Accepted);
        s.is_swap = true;
        s.offered_item_id = Some(Uuid::new_v4());

        let (_, provider) = s.completion_deltas();
        assert_eq!(provider.items_received, 1);
    }

    #[test]
    fn is_swap_flag_alone_is_not_a_true_item_swap() {
        let mut s = swap(Uuid::new_v4(), Uuid::new_v4(), SwapStatus::Accepted);
        s.is_swap = true;

        assert!(!s.is_true_item_swap());
    }
}
