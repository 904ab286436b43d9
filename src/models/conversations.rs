use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `conversations` table.
///
/// A two-party thread between a seller and a buyer, independent of any bid.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "conversations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub seller_id: Uuid,
    pub buyer_id: Uuid,
    pub read_by_seller: bool,
    pub read_by_buyer: bool,
    pub last_message: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::messages::Entity")]
    Messages,
}

impl Related<super::messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the given user is one of the two parties.
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.seller_id == user_id || self.buyer_id == user_id
    }
}

// ── DTOs ──

/// Body for POST /api/conversations: the other party's user id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConversation {
    pub to: Uuid,
}
