use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "swaps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub requester_id: Uuid,
    pub provider_id: Uuid,
    pub food_item_id: Uuid,
    pub offered_item_id: Option<Uuid>,
    pub message: Option<String>,
    pub status: String,
    pub is_swap: bool,
    pub is_purchase: bool,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub requester_rating: i32,
    pub provider_rating: i32,
    pub requester_review: Option<String>,
    pub provider_review: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
