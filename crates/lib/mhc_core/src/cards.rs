//! Sample content for the resource grid.
//!
//! The grid ships its own card list with icons and shorter copy. It is
//! intentionally not derived from the served catalog, so the two can drift
//! (titles already differ for ids 1 and 5).

use serde::{Deserialize, Serialize};

pub const GRID_HEADING: &str = "Mental Health Resources";
pub const GRID_SUBHEADING: &str = "Explore helpful articles, guides, and tips for your wellbeing";
pub const READ_MORE_LABEL: &str = "Read More →";

/// One card of the resource grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub icon: String,
}

fn card(id: u32, title: &str, description: &str, category: &str, icon: &str) -> ResourceCard {
    ResourceCard {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        icon: icon.to_string(),
    }
}

pub fn sample_cards() -> Vec<ResourceCard> {
    vec![
        card(
            1,
            "Understanding Anxiety",
            "Learn about anxiety disorders and effective coping strategies.",
            "Mental Health",
            "📖",
        ),
        card(
            2,
            "Meditation for Beginners",
            "Simple meditation techniques to reduce stress and improve focus.",
            "Wellness",
            "🧘",
        ),
        card(
            3,
            "Sleep Better Tonight",
            "Evidence-based tips for improving sleep quality.",
            "Sleep",
            "😴",
        ),
        card(
            4,
            "Building Healthy Habits",
            "Create sustainable habits that improve mental wellbeing.",
            "Lifestyle",
            "💪",
        ),
        card(
            5,
            "Stress Management Guide",
            "Practical techniques to manage daily stress.",
            "Stress",
            "🎯",
        ),
        card(
            6,
            "Social Connection Tips",
            "Strengthen relationships and combat loneliness.",
            "Social",
            "🤝",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_records;

    #[test]
    fn six_cards_in_id_order() {
        let ids: Vec<u32> = sample_cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn cards_share_categories_with_catalog_but_not_titles() {
        let cards = sample_cards();
        let records = default_records();
        for (card, record) in cards.iter().zip(&records) {
            assert_eq!(card.category, record.category);
        }
        assert_ne!(cards[0].title, records[0].title);
    }
}
