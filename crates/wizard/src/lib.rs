//! Offering wizard store.
//!
//! A single observable state container for composing a sellable offering
//! (product, service or subscription) over four steps: type, details, pricing
//! tiers, media. UI layers read the draft, call mutations and subscribe to
//! change notifications; nothing here renders or talks to a server.
//!
//! ```
//! use offerwiz_wizard::{OfferingType, WizardState};
//!
//! let mut wizard = WizardState::new();
//! wizard.set_selected_offering_type(Some(OfferingType::Service));
//! wizard.next_step();
//! wizard.use_recommended_tiers();
//!
//! assert_eq!(wizard.current_step(), 2);
//! assert_eq!(wizard.selected_tier().map(|t| t.name.as_str()), Some("Professional"));
//! ```

pub mod config;
pub mod events;
pub mod handle;
pub mod image;
pub mod offering;
pub mod preview;
pub mod pricing;
pub mod session;
pub mod state;
pub mod step;
pub mod templates;
pub mod tier;
pub mod upload;

pub use config::WizardConfig;
pub use events::{DetailField, WizardEvent, WizardNotification};
pub use handle::WizardHandle;
pub use image::{ImageRole, OfferingImage};
pub use offering::{FallbackColor, OfferingType};
pub use preview::OfferingPreview;
pub use pricing::PriceRange;
pub use session::{MemorySessionStorage, SessionMarker, SessionStart, SessionStorage};
pub use state::{WizardDraft, WizardState};
pub use step::{FIRST_STEP, Step, TOTAL_STEPS};
pub use templates::{TierTemplate, recommended_tiers};
pub use tier::{BillingType, Tier, TierField};
pub use upload::{ACCEPTED_MIME_TYPES, ImageUpload, UploadError};

pub use offerwiz_core::{DomainError, DomainResult, ImageId, SessionId, TierId};
