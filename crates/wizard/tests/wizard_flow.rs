//! End-to-end wizard sessions driven only through the public API, the way a UI
//! layer would.

use offerwiz_wizard::{
    BillingType, FallbackColor, ImageUpload, MemorySessionStorage, OfferingType, SessionMarker,
    SessionStart, Tier, TierField, TierId, WizardEvent, WizardHandle, WizardState,
};

fn init_tracing() {
    offerwiz_observability::init();
}

fn names(state: &WizardState) -> Vec<String> {
    state.tiers().iter().map(|t| t.name.clone()).collect()
}

#[test]
fn out_of_range_jumps_are_ignored() {
    init_tracing();
    let mut state = WizardState::new();
    state.set_current_step(2);
    for n in [0, 5, 6, 100, u32::MAX] {
        state.set_current_step(n);
        assert_eq!(state.current_step(), 2);
    }
}

#[test]
fn walking_forward_and_back() {
    let mut state = WizardState::new();
    for k in 1..4 {
        assert_eq!(state.current_step(), k);
        state.next_step();
        assert!(state.steps()[(k - 1) as usize].completed);
        assert_eq!(state.current_step(), k + 1);
    }

    let at_end = state.snapshot();
    state.next_step();
    assert_eq!(state.snapshot(), at_end);
    assert!(!state.steps()[3].completed);

    let flags: Vec<bool> = state.steps().iter().map(|s| s.completed).collect();
    state.previous_step();
    assert_eq!(state.current_step(), 3);
    let after: Vec<bool> = state.steps().iter().map(|s| s.completed).collect();
    assert_eq!(flags, after);

    state.set_current_step(1);
    state.previous_step();
    assert_eq!(state.current_step(), 1);
}

#[test]
fn reset_from_a_busy_session() {
    let mut state = WizardState::new();
    state.set_selected_offering_type(Some(OfferingType::Service));
    state.set_offering_name("Audit");
    state.add_key_feature();
    state.update_key_feature(0, "Detailed report");
    state.add_tag();
    state.use_recommended_tiers();
    state.set_fallback_color(FallbackColor::Amber);
    state
        .upload_thumbnail(&ImageUpload::new("t.jpg", "image/jpeg", vec![0xffu8, 0xd8]))
        .unwrap();
    state
        .upload_gallery_image(&ImageUpload::new("g.webp", "image/webp", vec![1u8]))
        .unwrap();
    state.set_current_step(4);

    state.reset();

    let draft = state.draft();
    assert_eq!(draft.current_step, 1);
    assert!(draft.tiers.is_empty());
    assert!(draft.key_features.is_empty());
    assert!(draft.tags.is_empty());
    assert!(draft.thumbnail_image.is_none());
    assert!(draft.gallery_images.is_empty());
    assert_eq!(draft.selected_offering_type, None);
    assert_eq!(draft.selected_tier_id, None);
    assert_eq!(draft.steps.len(), 4);
    assert!(draft.steps.iter().all(|s| !s.completed));
    assert_eq!(draft.fallback_color, FallbackColor::Burgundy);
}

#[test]
fn add_then_delete_tier_moves_selection() {
    let mut state = WizardState::new();
    let first = Tier::new("first", "First", BillingType::Hourly);
    let added = Tier::new("added", "Added", BillingType::Hourly).with_prices(10.0, 20.0);

    state.add_tier(first.clone());
    state.add_tier(added.clone());
    assert_eq!(state.selected_tier(), Some(&added));

    state.delete_tier(&added.id);
    assert_eq!(state.selected_tier(), Some(&first));

    state.delete_tier(&first.id);
    assert_eq!(state.selected_tier(), None);
}

#[test]
fn reorder_first_to_last() {
    let mut state = WizardState::new();
    for (id, name) in [("a", "A"), ("b", "B"), ("c", "C")] {
        state.add_tier(Tier::new(id, name, BillingType::PerProject));
    }
    state.reorder_tiers(0, 2);
    assert_eq!(names(&state), vec!["B", "C", "A"]);
}

#[test]
fn recommended_templates() {
    let mut state = WizardState::new();
    state.set_selected_offering_type(Some(OfferingType::Product));
    state.use_recommended_tiers();
    assert_eq!(names(&state), vec!["Base", "Advanced"]);
    assert!(state
        .tiers()
        .iter()
        .all(|t| t.billing_type == BillingType::FixedPrice));

    state.set_selected_offering_type(Some(OfferingType::Service));
    state.use_recommended_tiers();
    assert_eq!(names(&state), vec!["Starter", "Professional", "Enterprise"]);
    assert_eq!(state.selected_tier_id(), Some(&TierId::new("professional")));

    state.set_selected_offering_type(Some(OfferingType::Subscription));
    state.use_recommended_tiers();
    assert_eq!(names(&state), vec!["Starter", "Professional", "Enterprise"]);
    assert!(state
        .tiers()
        .iter()
        .all(|t| t.billing_type == BillingType::MonthlyRetainer));
}

#[test]
fn request_quote_overrides_prices_and_range() {
    let mut state = WizardState::new();
    state.add_tier(Tier::new("a", "A", BillingType::PerProject).with_prices(500.0, 1000.0));
    assert_eq!(state.lowest_price(), 500.0);
    assert_eq!(state.highest_price(), 1000.0);

    state.add_tier(Tier::new("b", "B", BillingType::PerProject).with_prices(750.0, 2000.0));
    state.toggle_request_quote(&TierId::new("b"), true);
    let b = state.tier(&TierId::new("b")).unwrap();
    assert_eq!((b.price_from(), b.price_to()), (0.0, 0.0));

    assert!(state.has_quote_only_tier());
    assert_eq!(state.lowest_price(), 0.0);
    assert_eq!(state.highest_price(), 0.0);

    state.delete_tier(&TierId::new("b"));
    assert_eq!(state.lowest_price(), 500.0);
    assert_eq!(state.highest_price(), 1000.0);
    assert_eq!(state.price_unit(), "project");
}

#[test]
fn text_upload_leaves_thumbnail_alone() {
    let mut state = WizardState::new();
    assert_eq!(
        state.upload_thumbnail(&ImageUpload::new("readme.txt", "text/plain", b"hi".to_vec())),
        None
    );
    assert!(state.thumbnail_image().is_none());

    let id = state
        .upload_thumbnail(&ImageUpload::new("a.png", "image/png", vec![1u8]))
        .unwrap();
    state.upload_thumbnail(&ImageUpload::new("readme.txt", "text/plain", b"hi".to_vec()));
    assert_eq!(state.thumbnail_image().map(|i| &i.id), Some(&id));
}

#[test]
fn empty_image_files_still_fill_the_slot() {
    let mut state = WizardState::new();
    let id = state
        .upload_thumbnail(&ImageUpload::new("blank.png", "image/png", Vec::<u8>::new()))
        .unwrap();
    let thumbnail = state.thumbnail_image().unwrap();
    assert_eq!(thumbnail.id, id);
    assert_eq!(thumbnail.url, "data:image/png;base64,");
    assert_eq!(state.preview().header_class, "preview-header--image");
}

#[test]
fn last_completed_thumbnail_read_wins() {
    let mut state = WizardState::new();
    let first = state
        .upload_thumbnail(&ImageUpload::new("1.png", "image/png", vec![1u8]))
        .unwrap();
    let second = state
        .upload_thumbnail(&ImageUpload::new("2.png", "image/png", vec![2u8]))
        .unwrap();
    assert_ne!(first, second);
    assert_eq!(state.thumbnail_image().map(|i| &i.id), Some(&second));
}

#[test]
fn components_share_state_through_a_handle() {
    let wizard = WizardHandle::new(WizardState::new());
    let type_step = wizard.clone();
    let pricing_step = wizard.clone();
    let preview = wizard.clone();

    let notifications = wizard.read(|state| state.subscribe());

    type_step.update(|state| {
        state.set_selected_offering_type(Some(OfferingType::Service));
        state.next_step();
    });
    pricing_step.update(|state| {
        state.use_recommended_tiers();
        state.update_tier_property(&TierId::new("starter"), TierField::PriceFrom(400.0));
    });

    let card = preview.read(|state| state.preview());
    assert_eq!(card.display_name, "Service Offering");
    assert_eq!(card.description, "No description provided");
    assert_eq!(card.header_class, "preview-header--burgundy");
    assert_eq!(card.price_label, "USD 400 - 10000 / project");

    let kinds: Vec<&'static str> = notifications
        .drain()
        .iter()
        .map(|n| n.event_type())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "wizard.details.changed",
            "wizard.step.completed",
            "wizard.step.changed",
            "wizard.tiers.changed",
            "wizard.tiers.selected",
            "wizard.tiers.changed",
        ]
    );
    assert_eq!(wizard.read(|state| state.snapshot()).current_step, 2);
}

#[test]
fn session_marker_distinguishes_reload_from_new_tab() {
    let mut tab = MemorySessionStorage::new();
    let mut state = WizardState::new();
    let marker = SessionMarker::from_config(state.config());
    let sub = state.subscribe();

    assert_eq!(marker.begin(&mut tab, &mut state), SessionStart::Fresh);
    assert_eq!(sub.try_recv().unwrap().into_payload(), WizardEvent::Reset);

    state.set_offering_name("Half done");
    assert_eq!(marker.begin(&mut tab, &mut state), SessionStart::Resumed);
    assert_eq!(state.preview().display_name, "Half done");

    marker.end(&mut tab);
    assert_eq!(marker.begin(&mut tab, &mut state), SessionStart::Fresh);
    assert_eq!(state.preview().display_name, "Offering Name");
}
