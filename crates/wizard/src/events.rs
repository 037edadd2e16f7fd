//! Change notifications published by [`WizardState`](crate::WizardState).

use serde::{Deserialize, Serialize};

use offerwiz_core::{ImageId, TierId};
use offerwiz_events::{Event, EventEnvelope};

use crate::offering::FallbackColor;

/// Which free-form draft field changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailField {
    OfferingType,
    OfferingName,
    Tagline,
    OfferingDescription,
    CompanyType,
    SelectedCategories,
    SuggestedOfferingType,
    KeyFeatures,
    Tags,
}

/// Payload describing one effective change to the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WizardEvent {
    StepChanged { from: u32, to: u32 },
    StepCompleted { step: u32 },
    DetailsChanged { field: DetailField },
    TiersChanged,
    TierSelected { tier: Option<TierId> },
    ThumbnailChanged { image: Option<ImageId> },
    GalleryChanged,
    FallbackColorChanged { color: FallbackColor },
    Reset,
}

impl Event for WizardEvent {
    fn event_type(&self) -> &'static str {
        match self {
            WizardEvent::StepChanged { .. } => "wizard.step.changed",
            WizardEvent::StepCompleted { .. } => "wizard.step.completed",
            WizardEvent::DetailsChanged { .. } => "wizard.details.changed",
            WizardEvent::TiersChanged => "wizard.tiers.changed",
            WizardEvent::TierSelected { .. } => "wizard.tiers.selected",
            WizardEvent::ThumbnailChanged { .. } => "wizard.images.thumbnail_changed",
            WizardEvent::GalleryChanged => "wizard.images.gallery_changed",
            WizardEvent::FallbackColorChanged { .. } => "wizard.images.fallback_color_changed",
            WizardEvent::Reset => "wizard.reset",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

/// What subscribers receive.
pub type WizardNotification = EventEnvelope<WizardEvent>;
