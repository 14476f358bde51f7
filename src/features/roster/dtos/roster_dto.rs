use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::roster::models::{RosterCard, RosterView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RosterStatus {
    Ok,
    Empty,
    Error,
}

/// One summary card; the password is never included
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RosterCardDto {
    pub name: String,
    pub gender: String,
    pub course: String,
    pub year: String,
    pub barangay: String,
    pub city: String,
    pub province: String,
    pub region: String,
    pub country: String,
    pub email: String,
    pub contact: String,
}

impl From<RosterCard> for RosterCardDto {
    fn from(card: RosterCard) -> Self {
        Self {
            name: card.name,
            gender: card.gender,
            course: card.course,
            year: card.year,
            barangay: card.barangay,
            city: card.city,
            province: card.province,
            region: card.region,
            country: card.country,
            email: card.email,
            contact: card.contact,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RosterResponseDto {
    pub status: RosterStatus,
    /// Message shown instead of cards when there are none to show
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub cards: Vec<RosterCardDto>,
}

impl From<RosterView> for RosterResponseDto {
    fn from(view: RosterView) -> Self {
        let placeholder = view.placeholder().map(str::to_string);
        let (status, cards) = match view {
            RosterView::Cards(cards) => (RosterStatus::Ok, cards),
            RosterView::Empty => (RosterStatus::Empty, Vec::new()),
            RosterView::Unavailable => (RosterStatus::Error, Vec::new()),
        };

        Self {
            status,
            placeholder,
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }
}
