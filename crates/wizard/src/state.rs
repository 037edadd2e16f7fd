//! The wizard store: one draft, one navigation position, change notifications.
//!
//! Every mutation is total. Inputs that address nothing (a step outside
//! `1..=4`, an unknown tier id, an out-of-range index) leave the draft as it
//! was and publish nothing. Each effective change bumps the revision and
//! publishes one [`WizardEvent`] per affected area.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use offerwiz_core::entity::{find_by_id, position_of};
use offerwiz_core::{AggregateRoot, ImageId, SessionId, TierId};
use offerwiz_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};

use crate::config::WizardConfig;
use crate::events::{DetailField, WizardEvent, WizardNotification};
use crate::image::{ImageRole, OfferingImage};
use crate::offering::{FallbackColor, OfferingType};
use crate::pricing::{self, PriceRange};
use crate::step::{FIRST_STEP, Step, TOTAL_STEPS, initial_steps, is_valid_step};
use crate::templates::recommended_tiers;
use crate::tier::{Tier, TierField};
use crate::upload::{ImageUpload, read_image};

/// The in-progress offering plus the navigation position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardDraft {
    pub steps: Vec<Step>,
    pub current_step: u32,

    pub selected_offering_type: Option<OfferingType>,
    pub company_type: String,
    pub selected_categories: Vec<String>,
    pub suggested_offering_type: Option<OfferingType>,

    pub offering_name: String,
    pub tagline: String,
    pub offering_description: String,
    pub key_features: Vec<String>,
    pub tags: Vec<String>,

    pub tiers: Vec<Tier>,
    pub selected_tier_id: Option<TierId>,

    pub thumbnail_image: Option<OfferingImage>,
    pub gallery_images: Vec<OfferingImage>,
    pub fallback_color: FallbackColor,
}

impl WizardDraft {
    pub fn initial() -> Self {
        Self {
            steps: initial_steps(),
            current_step: FIRST_STEP,
            selected_offering_type: None,
            company_type: String::new(),
            selected_categories: Vec::new(),
            suggested_offering_type: None,
            offering_name: String::new(),
            tagline: String::new(),
            offering_description: String::new(),
            key_features: Vec::new(),
            tags: Vec::new(),
            tiers: Vec::new(),
            selected_tier_id: None,
            thumbnail_image: None,
            gallery_images: Vec::new(),
            fallback_color: FallbackColor::default(),
        }
    }

    /// The chosen offering type, or the suggestion when nothing was chosen.
    pub fn effective_offering_type(&self) -> Option<OfferingType> {
        self.selected_offering_type.or(self.suggested_offering_type)
    }
}

impl Default for WizardDraft {
    fn default() -> Self {
        Self::initial()
    }
}

/// Free-text detail fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextField {
    OfferingName,
    Tagline,
    OfferingDescription,
    CompanyType,
}

impl TextField {
    fn detail(self) -> DetailField {
        match self {
            TextField::OfferingName => DetailField::OfferingName,
            TextField::Tagline => DetailField::Tagline,
            TextField::OfferingDescription => DetailField::OfferingDescription,
            TextField::CompanyType => DetailField::CompanyType,
        }
    }
}

/// Editable string-list detail fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListField {
    KeyFeatures,
    Tags,
}

impl ListField {
    fn detail(self) -> DetailField {
        match self {
            ListField::KeyFeatures => DetailField::KeyFeatures,
            ListField::Tags => DetailField::Tags,
        }
    }
}

fn remove_at(items: &mut Vec<String>, index: usize) -> bool {
    if index < items.len() {
        items.remove(index);
        true
    } else {
        false
    }
}

fn update_at(items: &mut [String], index: usize, text: String) -> bool {
    match items.get_mut(index) {
        Some(slot) => {
            *slot = text;
            true
        }
        None => false,
    }
}

/// Single shared store for one wizard session.
///
/// Construct one per session and hand it to UI components through a
/// [`WizardHandle`](crate::WizardHandle); there is no global instance.
#[derive(Debug)]
pub struct WizardState {
    session_id: SessionId,
    config: WizardConfig,
    draft: WizardDraft,
    revision: u64,
    bus: Arc<InMemoryEventBus<WizardNotification>>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for WizardState {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.session_id
    }

    fn version(&self) -> u64 {
        self.revision
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::with_config(WizardConfig::default())
    }

    pub fn with_config(config: WizardConfig) -> Self {
        Self {
            session_id: SessionId::new(),
            config,
            draft: WizardDraft::initial(),
            revision: 0,
            bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    fn notify(&mut self, event: WizardEvent) {
        self.revision += 1;
        tracing::trace!(revision = self.revision, event = ?event, "wizard draft changed");
        let envelope = EventEnvelope::new(self.session_id, self.revision, event);
        if let Err(err) = self.bus.publish(envelope) {
            tracing::warn!(error = ?err, "failed to deliver wizard notification");
        }
    }

    // ----- read side -------------------------------------------------------

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Number of effective mutations since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn draft(&self) -> &WizardDraft {
        &self.draft
    }

    /// Immutable copy of the current draft.
    pub fn snapshot(&self) -> WizardDraft {
        self.draft.clone()
    }

    /// Receive a notification after every effective change.
    pub fn subscribe(&self) -> Subscription<WizardNotification> {
        self.bus.subscribe()
    }

    pub fn steps(&self) -> &[Step] {
        &self.draft.steps
    }

    pub fn current_step(&self) -> u32 {
        self.draft.current_step
    }

    pub fn current_step_info(&self) -> Option<&Step> {
        find_by_id(&self.draft.steps, &self.draft.current_step)
    }

    pub fn is_first_step(&self) -> bool {
        self.draft.current_step == FIRST_STEP
    }

    pub fn is_last_step(&self) -> bool {
        self.draft.current_step == TOTAL_STEPS
    }

    /// Fraction of steps marked completed, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        let done = self.draft.steps.iter().filter(|s| s.completed).count();
        done as f32 / TOTAL_STEPS as f32
    }

    pub fn selected_offering_type(&self) -> Option<OfferingType> {
        self.draft.selected_offering_type
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.draft.tiers
    }

    pub fn tier(&self, id: &TierId) -> Option<&Tier> {
        find_by_id(&self.draft.tiers, id)
    }

    pub fn selected_tier_id(&self) -> Option<&TierId> {
        self.draft.selected_tier_id.as_ref()
    }

    /// The selected tier, or `None` when nothing is selected or the id is stale.
    pub fn selected_tier(&self) -> Option<&Tier> {
        self.draft
            .selected_tier_id
            .as_ref()
            .and_then(|id| self.tier(id))
    }

    pub fn thumbnail_image(&self) -> Option<&OfferingImage> {
        self.draft.thumbnail_image.as_ref()
    }

    pub fn gallery_images(&self) -> &[OfferingImage] {
        &self.draft.gallery_images
    }

    pub fn fallback_color(&self) -> FallbackColor {
        self.draft.fallback_color
    }

    // ----- navigation ------------------------------------------------------

    /// Jump to step `n`; ignored unless `1 <= n <= 4`.
    pub fn set_current_step(&mut self, n: u32) {
        if !is_valid_step(n) {
            tracing::debug!(step = n, "ignoring out-of-range step");
            return;
        }
        let from = self.draft.current_step;
        if from == n {
            return;
        }
        self.draft.current_step = n;
        self.notify(WizardEvent::StepChanged { from, to: n });
    }

    pub fn complete_step(&mut self, id: u32) {
        let Some(step) = self.draft.steps.iter_mut().find(|s| s.id == id) else {
            tracing::debug!(step = id, "ignoring completion of unknown step");
            return;
        };
        if step.completed {
            return;
        }
        step.completed = true;
        self.notify(WizardEvent::StepCompleted { step: id });
    }

    /// Complete the current step and advance; nothing happens on the last step.
    pub fn next_step(&mut self) {
        let current = self.draft.current_step;
        if current >= TOTAL_STEPS {
            return;
        }
        self.complete_step(current);
        self.draft.current_step = current + 1;
        self.notify(WizardEvent::StepChanged {
            from: current,
            to: current + 1,
        });
    }

    /// Go back one step; completion flags are kept.
    pub fn previous_step(&mut self) {
        let current = self.draft.current_step;
        if current <= FIRST_STEP {
            return;
        }
        self.draft.current_step = current - 1;
        self.notify(WizardEvent::StepChanged {
            from: current,
            to: current - 1,
        });
    }

    /// Restore every draft field to its initial value.
    pub fn reset(&mut self) {
        self.draft = WizardDraft::initial();
        tracing::debug!(session = %self.session_id, "wizard reset");
        self.notify(WizardEvent::Reset);
    }

    // ----- offering details ------------------------------------------------

    fn set_text(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::OfferingName => &mut self.draft.offering_name,
            TextField::Tagline => &mut self.draft.tagline,
            TextField::OfferingDescription => &mut self.draft.offering_description,
            TextField::CompanyType => &mut self.draft.company_type,
        };
        if *slot == value {
            return;
        }
        *slot = value;
        self.notify(WizardEvent::DetailsChanged {
            field: field.detail(),
        });
    }

    pub fn set_offering_name(&mut self, name: impl Into<String>) {
        self.set_text(TextField::OfferingName, name.into());
    }

    pub fn set_tagline(&mut self, tagline: impl Into<String>) {
        self.set_text(TextField::Tagline, tagline.into());
    }

    pub fn set_offering_description(&mut self, description: impl Into<String>) {
        self.set_text(TextField::OfferingDescription, description.into());
    }

    pub fn set_company_type(&mut self, company_type: impl Into<String>) {
        self.set_text(TextField::CompanyType, company_type.into());
    }

    pub fn set_selected_offering_type(&mut self, offering: Option<OfferingType>) {
        if self.draft.selected_offering_type == offering {
            return;
        }
        self.draft.selected_offering_type = offering;
        self.notify(WizardEvent::DetailsChanged {
            field: DetailField::OfferingType,
        });
    }

    pub fn set_suggested_offering_type(&mut self, offering: Option<OfferingType>) {
        if self.draft.suggested_offering_type == offering {
            return;
        }
        self.draft.suggested_offering_type = offering;
        self.notify(WizardEvent::DetailsChanged {
            field: DetailField::SuggestedOfferingType,
        });
    }

    pub fn set_selected_categories(&mut self, categories: Vec<String>) {
        if self.draft.selected_categories == categories {
            return;
        }
        self.draft.selected_categories = categories;
        self.notify(WizardEvent::DetailsChanged {
            field: DetailField::SelectedCategories,
        });
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::KeyFeatures => &mut self.draft.key_features,
            ListField::Tags => &mut self.draft.tags,
        }
    }

    fn push_blank(&mut self, field: ListField) {
        self.list_mut(field).push(String::new());
        self.notify(WizardEvent::DetailsChanged {
            field: field.detail(),
        });
    }

    fn remove_entry(&mut self, field: ListField, index: usize) {
        if remove_at(self.list_mut(field), index) {
            self.notify(WizardEvent::DetailsChanged {
                field: field.detail(),
            });
        } else {
            tracing::debug!(?field, index, "ignoring removal at out-of-range index");
        }
    }

    fn update_entry(&mut self, field: ListField, index: usize, text: String) {
        if update_at(self.list_mut(field), index, text) {
            self.notify(WizardEvent::DetailsChanged {
                field: field.detail(),
            });
        } else {
            tracing::debug!(?field, index, "ignoring update at out-of-range index");
        }
    }

    pub fn add_key_feature(&mut self) {
        self.push_blank(ListField::KeyFeatures);
    }

    pub fn remove_key_feature(&mut self, index: usize) {
        self.remove_entry(ListField::KeyFeatures, index);
    }

    pub fn update_key_feature(&mut self, index: usize, text: impl Into<String>) {
        self.update_entry(ListField::KeyFeatures, index, text.into());
    }

    pub fn add_tag(&mut self) {
        self.push_blank(ListField::Tags);
    }

    pub fn remove_tag(&mut self, index: usize) {
        self.remove_entry(ListField::Tags, index);
    }

    pub fn update_tag(&mut self, index: usize, text: impl Into<String>) {
        self.update_entry(ListField::Tags, index, text.into());
    }

    // ----- tiers -----------------------------------------------------------

    fn select(&mut self, id: Option<TierId>) {
        if self.draft.selected_tier_id == id {
            return;
        }
        self.draft.selected_tier_id = id.clone();
        self.notify(WizardEvent::TierSelected { tier: id });
    }

    /// Append `tier` and select it. Id uniqueness and billing rules are the
    /// caller's responsibility.
    pub fn add_tier(&mut self, tier: Tier) {
        let id = tier.id.clone();
        self.draft.tiers.push(tier);
        self.notify(WizardEvent::TiersChanged);
        self.select(Some(id));
    }

    /// Append an unpriced tier valid for the current offering type (service
    /// when none is known) and select it.
    pub fn add_blank_tier(&mut self) -> TierId {
        let offering = self
            .draft
            .effective_offering_type()
            .unwrap_or(OfferingType::Service);
        let id = TierId::generate("tier-");
        let tier = Tier::blank(id.clone(), offering, &self.config.default_currency);
        self.add_tier(tier);
        id
    }

    /// Remove a tier. When it was selected, the new first tier (or nothing)
    /// becomes selected. `supersede_tier` references to it are left in place.
    pub fn delete_tier(&mut self, id: &TierId) {
        let Some(index) = position_of(&self.draft.tiers, id) else {
            tracing::debug!(tier = %id, "ignoring deletion of unknown tier");
            return;
        };
        self.draft.tiers.remove(index);
        self.notify(WizardEvent::TiersChanged);

        if self.draft.selected_tier_id.as_ref() == Some(id) {
            let fallback = self.draft.tiers.first().map(|t| t.id.clone());
            self.select(fallback);
        }
    }

    /// Select by id without checking that the tier exists.
    pub fn select_tier(&mut self, id: impl Into<TierId>) {
        self.select(Some(id.into()));
    }

    pub fn update_tier_property(&mut self, id: &TierId, field: TierField) {
        let Some(tier) = self.draft.tiers.iter_mut().find(|t| &t.id == id) else {
            tracing::debug!(tier = %id, field = field.name(), "ignoring update of unknown tier");
            return;
        };
        tier.apply(field);
        self.notify(WizardEvent::TiersChanged);
    }

    /// Switch request-quote-only mode; turning it on zeroes both prices.
    pub fn toggle_request_quote(&mut self, id: &TierId, on: bool) {
        self.update_tier_property(id, TierField::RequestQuoteOnly(on));
    }

    fn edit_tier(&mut self, id: &TierId, edit: impl FnOnce(&mut Tier) -> bool) {
        let changed = match self.draft.tiers.iter_mut().find(|t| &t.id == id) {
            Some(tier) => edit(tier),
            None => false,
        };
        if changed {
            self.notify(WizardEvent::TiersChanged);
        }
    }

    pub fn add_tier_bullet(&mut self, id: &TierId) {
        self.edit_tier(id, |tier| {
            tier.add_bullet_point();
            true
        });
    }

    pub fn update_tier_bullet(&mut self, id: &TierId, index: usize, text: impl Into<String>) {
        let text = text.into();
        self.edit_tier(id, |tier| update_at(&mut tier.bullet_points, index, text));
    }

    pub fn remove_tier_bullet(&mut self, id: &TierId, index: usize) {
        self.edit_tier(id, |tier| remove_at(&mut tier.bullet_points, index));
    }

    /// Move the tier at `from` so it ends up at `to` in the sequence after
    /// removal. An out-of-range `from` is ignored; `to` is clamped to the end.
    pub fn reorder_tiers(&mut self, from: usize, to: usize) {
        let tiers = &mut self.draft.tiers;
        if from >= tiers.len() {
            tracing::debug!(
                from,
                to,
                len = tiers.len(),
                "ignoring reorder from out-of-range index"
            );
            return;
        }
        let moved = tiers.remove(from);
        let to = to.min(tiers.len());
        tiers.insert(to, moved);
        if from != to {
            self.notify(WizardEvent::TiersChanged);
        }
    }

    /// Replace every tier with the recommended set for the chosen (or
    /// suggested) offering type. Does nothing when neither is known.
    pub fn use_recommended_tiers(&mut self) {
        let Some(offering) = self.draft.effective_offering_type() else {
            tracing::debug!("no offering type chosen or suggested; keeping tiers");
            return;
        };
        let template = recommended_tiers(offering);
        tracing::debug!(%offering, count = template.tiers.len(), "applying recommended tiers");
        self.draft.tiers = template.tiers;
        self.notify(WizardEvent::TiersChanged);
        self.select(Some(template.selected));
    }

    /// `(tier, missing predecessor)` pairs whose `supersede_tier` names a
    /// tier that no longer exists. Reported, never repaired.
    pub fn dangling_supersessions(&self) -> Vec<(TierId, TierId)> {
        self.draft
            .tiers
            .iter()
            .filter_map(|tier| {
                let target = tier.supersede_tier.as_ref()?;
                match self.tier(target) {
                    Some(_) => None,
                    None => Some((tier.id.clone(), target.clone())),
                }
            })
            .collect()
    }

    pub fn lowest_price(&self) -> f64 {
        pricing::lowest_price(&self.draft.tiers)
    }

    pub fn highest_price(&self) -> f64 {
        pricing::highest_price(&self.draft.tiers)
    }

    pub fn price_unit(&self) -> &str {
        pricing::price_unit(&self.draft.tiers)
    }

    pub fn has_quote_only_tier(&self) -> bool {
        pricing::has_quote_only_tier(&self.draft.tiers)
    }

    pub fn price_range(&self) -> PriceRange {
        PriceRange::from_tiers(&self.draft.tiers)
    }

    // ----- images ----------------------------------------------------------

    /// Replace or clear the thumbnail.
    pub fn set_thumbnail_image(&mut self, image: Option<OfferingImage>) {
        let id = image.as_ref().map(|i| i.id.clone());
        self.draft.thumbnail_image = image;
        self.notify(WizardEvent::ThumbnailChanged { image: id });
    }

    pub fn add_gallery_image(&mut self, image: OfferingImage) {
        self.draft.gallery_images.push(image);
        self.notify(WizardEvent::GalleryChanged);
    }

    pub fn remove_gallery_image(&mut self, id: &ImageId) {
        let before = self.draft.gallery_images.len();
        self.draft.gallery_images.retain(|image| &image.id != id);
        if self.draft.gallery_images.len() != before {
            self.notify(WizardEvent::GalleryChanged);
        }
    }

    pub fn set_fallback_color(&mut self, color: FallbackColor) {
        if self.draft.fallback_color == color {
            return;
        }
        self.draft.fallback_color = color;
        self.notify(WizardEvent::FallbackColorChanged { color });
    }

    fn accept_upload(&self, upload: &ImageUpload, role: ImageRole) -> Option<OfferingImage> {
        match read_image(upload, role) {
            Ok(image) => Some(image),
            Err(err) => {
                tracing::debug!(file = %upload.file_name, error = %err, "rejected image upload");
                None
            }
        }
    }

    /// Store a finished file read as the thumbnail. Unsupported files are
    /// dropped silently and leave the current thumbnail in place.
    pub fn upload_thumbnail(&mut self, upload: &ImageUpload) -> Option<ImageId> {
        let image = self.accept_upload(upload, ImageRole::Thumbnail)?;
        let id = image.id.clone();
        self.set_thumbnail_image(Some(image));
        Some(id)
    }

    /// Append a finished file read to the gallery. Unsupported files are
    /// dropped silently.
    pub fn upload_gallery_image(&mut self, upload: &ImageUpload) -> Option<ImageId> {
        let image = self.accept_upload(upload, ImageRole::Gallery)?;
        let id = image.id.clone();
        self.add_gallery_image(image);
        Some(id)
    }
}
