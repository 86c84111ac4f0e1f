use serde::{Deserialize, Serialize};

use crate::models::walker::WalkerId;

pub const MAX_RATING: u8 = 5;

/// Star rating, 0 (unset) to 5
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn new(stars: u8) -> Self {
        Self(stars.min(MAX_RATING))
    }

    pub fn stars(self) -> u8 {
        self.0
    }

    /// Star `index` (0-based) is lit when below the rating
    pub fn is_lit(self, index: u8) -> bool {
        index < self.0
    }
}

/// Body of `POST /api/reviews`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewDraft {
    pub rating: Rating,
    pub review: String,
    #[serde(rename = "walkerId")]
    pub walker_id: Option<WalkerId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_capped() {
        assert_eq!(Rating::new(9).stars(), 5);
        assert_eq!(Rating::default().stars(), 0);
    }

    #[test]
    fn lit_stars_follow_rating() {
        let rating = Rating::new(3);
        let lit: Vec<bool> = (0..MAX_RATING).map(|i| rating.is_lit(i)).collect();
        assert_eq!(lit, vec![true, true, true, false, false]);
    }

    #[test]
    fn draft_serializes_plain_rating() {
        let draft = ReviewDraft {
            rating: Rating::new(4),
            review: "Great walk".to_string(),
            walker_id: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"rating": 4, "review": "Great walk", "walkerId": null}));
    }
}
