use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Largest quantity the deliverables screen accepts for a single item.
pub const MAX_QUANTITY: u32 = 99;

/// A user-specified output item with a requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverableItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: u32,
    #[serde(default)]
    pub is_custom: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredefinedDeliverable {
    pub id: &'static str,
    pub kind: &'static str,
    pub default_quantity: u32,
}

/// Items seeded into an empty deliverables list, in display order.
pub const PREDEFINED_DELIVERABLES: [PredefinedDeliverable; 5] = [
    PredefinedDeliverable {
        id: "logo-design",
        kind: "Logo Design",
        default_quantity: 2,
    },
    PredefinedDeliverable {
        id: "poster",
        kind: "Poster",
        default_quantity: 1,
    },
    PredefinedDeliverable {
        id: "brand-guidelines",
        kind: "Brand Guidelines",
        default_quantity: 1,
    },
    PredefinedDeliverable {
        id: "website-mockup",
        kind: "Website Mockup",
        default_quantity: 1,
    },
    PredefinedDeliverable {
        id: "app-screen",
        kind: "App Screen",
        default_quantity: 1,
    },
];

/// The seed list: every predefined item at its default quantity.
pub fn predefined_deliverables() -> Vec<DeliverableItem> {
    PREDEFINED_DELIVERABLES
        .iter()
        .map(|p| DeliverableItem {
            id: p.id.to_string(),
            kind: p.kind.to_string(),
            quantity: p.default_quantity,
            is_custom: false,
        })
        .collect()
}

/// Returns a copy of `items` with the quantity of `id` replaced, or `None`
/// when no item has that id.
pub fn set_quantity(
    items: &[DeliverableItem],
    id: &str,
    quantity: u32,
) -> Option<Vec<DeliverableItem>> {
    if !items.iter().any(|item| item.id == id) {
        return None;
    }
    Some(
        items
            .iter()
            .map(|item| {
                if item.id == id {
                    DeliverableItem {
                        quantity,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect(),
    )
}

/// Returns a copy of `items` without `id`, or `None` when no item has that id.
pub fn remove_deliverable(
    items: &[DeliverableItem],
    id: &str,
) -> Option<Vec<DeliverableItem>> {
    let kept: Vec<_> = items.iter().filter(|item| item.id != id).cloned().collect();
    (kept.len() != items.len()).then_some(kept)
}

/// Appends a custom item labelled with the trimmed `label` at quantity 1.
///
/// Returns `None` for a blank label. Ids are `custom-<millis>`, bumped until
/// unique within the list.
pub fn add_custom_deliverable(
    items: &[DeliverableItem],
    label: &str,
) -> Option<Vec<DeliverableItem>> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    let mut stamp = Utc::now().timestamp_millis();
    let mut id = format!("custom-{stamp}");
    while items.iter().any(|item| item.id == id) {
        stamp += 1;
        id = format!("custom-{stamp}");
    }

    let mut updated = items.to_vec();
    updated.push(DeliverableItem {
        id,
        kind: label.to_string(),
        quantity: 1,
        is_custom: true,
    });
    Some(updated)
}
