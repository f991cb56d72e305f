use serde::{Deserialize, Serialize};

/// Type tag carried by every cached entity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum EntityKind {
    ShopItem,
    LineupEntry,
    OrderItem,
    ShopOrder,
}

impl EntityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::ShopItem => "ShopItem",
            EntityKind::LineupEntry => "LineupEntry",
            EntityKind::OrderItem => "OrderItem",
            EntityKind::ShopOrder => "ShopOrder",
        }
    }

    /// Slot the first attached mediafile is exposed under.
    pub const fn lead_media_slot(self) -> LeadMediaSlot {
        match self {
            EntityKind::LineupEntry => LeadMediaSlot::CoachPic,
            _ => LeadMediaSlot::Teaser,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name under which the first attached mediafile is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadMediaSlot {
    /// Shop items expose it as `teaser`.
    Teaser,
    /// Lineup entries expose the coach portrait as `coachPic`.
    CoachPic,
}

impl LeadMediaSlot {
    pub const fn attribute_name(self) -> &'static str {
        match self {
            LeadMediaSlot::Teaser => "teaser",
            LeadMediaSlot::CoachPic => "coachPic",
        }
    }
}
