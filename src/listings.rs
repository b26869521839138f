//! Property listing records shown on the home page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingKind {
    Sale,
    Rent,
}

impl ListingKind {
    /// Badge text, e.g. `For Sale`.
    pub fn badge(self) -> &'static str {
        match self {
            ListingKind::Sale => "For Sale",
            ListingKind::Rent => "For Rent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub price: String,
    pub address: String,
    #[serde(default)]
    pub beds: u8,
    #[serde(default)]
    pub baths: u8,
    #[serde(default)]
    pub parking: u8,
    pub kind: ListingKind,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Listing {
    pub fn summary(&self) -> String {
        format!(
            "{} bed · {} bath · {} parking",
            self.beds, self.baths, self.parking
        )
    }

    /// Case-insensitive substring match against price, address and badge.
    /// The query is trimmed first; a blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [self.price.as_str(), self.address.as_str(), self.kind.badge()]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

pub fn filter<'a>(listings: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    listings.iter().filter(|l| l.matches(query)).collect()
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            price: "$750,000".into(),
            address: "123 Example Street, Sydney".into(),
            beds: 3,
            baths: 2,
            parking: 1,
            kind: ListingKind::Sale,
            image_url: None,
        },
        Listing {
            price: "$550 per week".into(),
            address: "456 Sample Road, Melbourne".into(),
            beds: 2,
            baths: 1,
            parking: 1,
            kind: ListingKind::Rent,
            image_url: None,
        },
        Listing {
            price: "$890,000".into(),
            address: "789 Test Avenue, Brisbane".into(),
            beds: 4,
            baths: 3,
            parking: 2,
            kind: ListingKind::Sale,
            image_url: None,
        },
    ]
}
