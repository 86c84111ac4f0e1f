use serde::{Deserialize, Serialize};

use crate::models::lenient::null_as_default;

pub type WalkerId = i64;

/// Walker card data from `GET /api/walkers`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Walker {
    pub id: WalkerId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// `null` for walkers without reviews yet
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(rename = "reviews", default, deserialize_with = "null_as_default")]
    pub review_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

impl Walker {
    pub fn price_label(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("${:.0}", self.price)
        } else {
            format!("${:.2}", self.price)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WalkersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub walkers: Vec<Walker>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_review_count_from_reviews() {
        let body: WalkersResponse = serde_json::from_str(
            r#"{"success": true, "walkers": [{"id": 2, "name": "Elizabeth M.", "rating": 4.9, "reviews": 120, "price": 25, "location": "Queens"}], "total": 1}"#,
        )
        .unwrap();
        let walker = &body.walkers[0];
        assert_eq!(walker.review_count, 120);
        assert_eq!(walker.price_label(), "$25");
    }

    #[test]
    fn fractional_price_keeps_cents() {
        let walker = Walker {
            id: 1,
            name: "Ana P.".to_string(),
            rating: 4.5,
            review_count: 3,
            price: 22.5,
            location: None,
            availability: None,
        };
        assert_eq!(walker.price_label(), "$22.50");
    }

    #[test]
    fn null_rating_keeps_the_walker() {
        let body: WalkersResponse = serde_json::from_str(
            r#"{"walkers": [{"id": 1, "name": "New W.", "rating": null, "reviews": null, "price": null}, {"id": 2, "name": "Elizabeth M.", "rating": 4.9, "reviews": 120, "price": 25}]}"#,
        )
        .unwrap();
        assert_eq!(body.walkers.len(), 2);
        assert_eq!(body.walkers[0].rating, 0.0);
        assert_eq!(body.walkers[0].review_count, 0);
        assert_eq!(body.walkers[0].price_label(), "$0");
        assert_eq!(body.walkers[1].rating, 4.9);
    }

    #[test]
    fn failed_search_decodes_empty() {
        let body: WalkersResponse =
            serde_json::from_str(r#"{"success": false, "walkers": [], "error": "timeout"}"#).unwrap();
        assert!(body.walkers.is_empty());
    }
}
