//! Read-only projection of the draft for the live preview card.

use serde::Serialize;

use crate::offering::FallbackColor;
use crate::pricing::PriceRange;
use crate::state::{WizardDraft, WizardState};

pub const PLACEHOLDER_NAME: &str = "Offering Name";
pub const PLACEHOLDER_DESCRIPTION: &str = "No description provided";

/// Everything the preview card renders, computed in one go.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferingPreview {
    pub display_name: String,
    pub description: String,
    pub key_features: Vec<String>,
    pub header_class: String,
    pub thumbnail_url: Option<String>,
    pub tags: Vec<String>,
    pub price_range: PriceRange,
    pub price_label: String,
}

impl OfferingPreview {
    pub fn from_draft(draft: &WizardDraft) -> Self {
        let price_range = PriceRange::from_tiers(&draft.tiers);
        Self {
            display_name: display_name(draft),
            description: description(draft),
            key_features: non_blank(&draft.key_features),
            header_class: header_class(draft.thumbnail_image.is_some(), draft.fallback_color),
            thumbnail_url: draft.thumbnail_image.as_ref().map(|image| image.url.clone()),
            tags: non_blank(&draft.tags),
            price_label: price_range.label(),
            price_range,
        }
    }
}

impl WizardState {
    pub fn preview(&self) -> OfferingPreview {
        OfferingPreview::from_draft(self.draft())
    }
}

/// Offering name, else "<Type> Offering", else a placeholder.
pub fn display_name(draft: &WizardDraft) -> String {
    let name = draft.offering_name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    match draft.selected_offering_type {
        Some(offering) => format!("{} Offering", offering.label()),
        None => PLACEHOLDER_NAME.to_string(),
    }
}

/// Description, else tagline, else a placeholder.
pub fn description(draft: &WizardDraft) -> String {
    [&draft.offering_description, &draft.tagline]
        .into_iter()
        .map(|text| text.trim())
        .find(|text| !text.is_empty())
        .unwrap_or(PLACEHOLDER_DESCRIPTION)
        .to_string()
}

/// CSS class for the card header.
pub fn header_class(has_thumbnail: bool, color: FallbackColor) -> String {
    if has_thumbnail {
        "preview-header--image".to_string()
    } else {
        format!("preview-header--{color}")
    }
}

fn non_blank(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::OfferingImage;
    use crate::offering::OfferingType;

    #[test]
    fn display_name_fallback_chain() {
        let mut draft = WizardDraft::initial();
        assert_eq!(display_name(&draft), "Offering Name");

        draft.selected_offering_type = Some(OfferingType::Subscription);
        assert_eq!(display_name(&draft), "Subscription Offering");

        draft.offering_name = "  Acme Cloud ".into();
        assert_eq!(display_name(&draft), "Acme Cloud");
    }

    #[test]
    fn description_fallback_chain() {
        let mut draft = WizardDraft::initial();
        assert_eq!(description(&draft), "No description provided");

        draft.tagline = "Ship faster".into();
        assert_eq!(description(&draft), "Ship faster");

        draft.offering_description = "A managed build service.".into();
        assert_eq!(description(&draft), "A managed build service.");
    }

    #[test]
    fn header_class_depends_on_thumbnail() {
        let mut draft = WizardDraft::initial();
        draft.fallback_color = FallbackColor::Plum;
        assert_eq!(OfferingPreview::from_draft(&draft).header_class, "preview-header--plum");

        draft.thumbnail_image = Some(OfferingImage::new("thumbnail-1", "data:image/png;base64,AA=="));
        let preview = OfferingPreview::from_draft(&draft);
        assert_eq!(preview.header_class, "preview-header--image");
        assert_eq!(preview.thumbnail_url.as_deref(), Some("data:image/png;base64,AA=="));
    }

    #[test]
    fn blank_features_are_hidden() {
        let mut draft = WizardDraft::initial();
        draft.key_features = vec!["".into(), " Fast ".into(), "   ".into(), "Safe".into()];
        assert_eq!(OfferingPreview::from_draft(&draft).key_features, vec!["Fast", "Safe"]);
    }

    #[test]
    fn preview_serializes_for_the_view_layer() {
        let draft = WizardDraft::initial();
        let json = serde_json::to_value(OfferingPreview::from_draft(&draft)).unwrap();
        assert_eq!(json["display_name"], "Offering Name");
        assert_eq!(json["price_label"], "Pricing not set");
        assert_eq!(json["price_range"]["unit"], "hr");
    }
}
