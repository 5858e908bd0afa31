//! End-to-end flow: snapshot -> triggers -> scheduler -> rendered trees.

use folio_tui::{
    animate, content::ContentSnapshot, nav, render::ansi::Presenter, render::NodeKind, sections,
    state, state::ContactForm, state::FormField, types::SectionId,
};

const SNAPSHOT: &str = r#"{
  "aboutMe": {
    "name": "Jane Doe",
    "title": "Backend Engineer",
    "bio": "Systems, storage, reliability.",
    "contact": { "email": "jane@example.com" }
  },
  "experience": [
    { "role": "Engineer", "company": "Acme", "duration": "Jan 2022 - Present",
      "description": "Lead backend.",
      "keyAchievements": ["Halved infra cost"] },
    { "role": "Engineer", "company": "Zerofiltre", "duration": "2019 - 2021",
      "description": "Platform APIs." },
    { "role": "Intern", "company": "Unknown", "duration": "garbage",
      "description": "Odd jobs." }
  ],
  "projects": [
    { "name": "Hotel AI", "duration": "2024 - Present",
      "links": ["https://first.example", "https://second.example"] }
  ]
}"#;

fn load() -> ContentSnapshot {
    ContentSnapshot::from_json_str(SNAPSHOT).unwrap()
}

#[test]
fn full_scroll_through_reveals_every_present_section() {
    state::reset_visibility_state();
    animate::reset_stagger_state();
    let snapshot = load();
    let form = ContactForm::new();

    for section in SectionId::all() {
        if sections::child_specs(*section, &snapshot).is_some() {
            state::observe(*section, None);
        }
    }

    // Skills content is absent: no trigger, no renderer output, no work.
    assert!(sections::child_specs(SectionId::Skills, &snapshot).is_none());
    assert!(sections::render_section(SectionId::Skills, &snapshot, &form).is_none());

    // Scroll the experience section into view.
    assert!(state::report_intersection(SectionId::Experience, 0.5));
    let specs = sections::child_specs(SectionId::Experience, &snapshot).unwrap();
    let profile = animate::section_profile(SectionId::Experience);
    animate::schedule_section(SectionId::Experience, &profile, &specs, 1_000);

    // The container fires at the trigger instant, before any child.
    let events = animate::tick(1_000);
    assert_eq!(events[0].target, animate::RevealTarget::Container);
    assert!(events
        .iter()
        .all(|e| e.section == SectionId::Experience && e.at == 1_000));

    // Everything drains eventually, in deadline order.
    let rest = animate::tick(60_000);
    assert!(!rest.is_empty());
    let deadlines: Vec<u64> = rest.iter().map(|e| e.at).collect();
    let mut sorted = deadlines.clone();
    sorted.sort();
    assert_eq!(deadlines, sorted);
    assert_eq!(animate::pending_count(SectionId::Experience), 0);
}

#[test]
fn rendered_experience_follows_recency_and_status_rules() {
    state::reset_visibility_state();
    let snapshot = load();
    let form = ContactForm::new();

    state::observe(SectionId::Experience, None);
    state::report_intersection(SectionId::Experience, 1.0);

    let tree = sections::render_section(SectionId::Experience, &snapshot, &form).unwrap();

    let mut durations = Vec::new();
    tree.visit(&mut |n| {
        if let NodeKind::Text(text) = &n.kind {
            if text.contains(" - ") || text == "garbage" {
                durations.push(text.clone());
            }
        }
    });
    assert_eq!(durations, ["Jan 2022 - Present", "2019 - 2021", "garbage"]);

    let mut statuses = Vec::new();
    tree.visit(&mut |n| {
        if let NodeKind::Text(text) = &n.kind {
            if text.contains("Current") || text.contains("Completed") {
                statuses.push(text.clone());
            }
        }
    });
    assert_eq!(statuses, ["🟢 Current", "✅ Completed", "✅ Completed"]);
}

#[test]
fn absent_visibility_capability_falls_back_to_seen() {
    state::reset_visibility_state();
    let snapshot = load();

    for section in SectionId::all() {
        if sections::child_specs(*section, &snapshot).is_some() {
            state::observe(*section, None);
        }
    }
    state::mark_all_seen();

    assert!(state::is_seen(SectionId::Hero));
    assert!(state::is_seen(SectionId::Projects));
    // Never registered (absent content), still unseen and inert.
    assert!(!state::is_seen(SectionId::Skills));
}

#[test]
fn teardown_mid_entrance_discards_timers() {
    state::reset_visibility_state();
    animate::reset_stagger_state();
    let snapshot = load();

    let specs = sections::child_specs(SectionId::Projects, &snapshot).unwrap();
    let profile = animate::section_profile(SectionId::Projects);
    animate::schedule_section(SectionId::Projects, &profile, &specs, 0);

    // Container fires, then the section leaves the tree.
    let first = animate::tick(0);
    assert!(!first.is_empty());
    animate::teardown(SectionId::Projects);

    assert!(animate::tick(u64::MAX).is_empty());
    assert_eq!(animate::pending_count(SectionId::Projects), 0);
}

#[test]
fn contact_form_scenario_submit_wait_clear() {
    let form = ContactForm::new();
    form.set_field(FormField::Name, "Jane");
    form.set_field(FormField::Email, "jane@example.com");
    form.set_field(FormField::Subject, "Hi");
    form.set_field(FormField::Message, "Hello there");

    assert!(form.submit(5_000));
    assert!(form.is_submitting());

    form.tick(5_000 + state::SUBMIT_DELAY_MS);
    assert!(!form.is_submitting());
    for field in FormField::all() {
        assert_eq!(form.field(*field), "");
    }
}

#[test]
fn page_render_registers_anchors_and_smooth_scrolls() {
    state::reset_visibility_state();
    nav::reset_nav_state();
    let snapshot = load();
    let form = ContactForm::new();

    for section in SectionId::all() {
        if sections::child_specs(*section, &snapshot).is_some() {
            state::observe(*section, None);
        }
    }
    state::mark_all_seen();

    let page: Vec<_> = SectionId::all()
        .iter()
        .filter_map(|s| sections::render_section(*s, &snapshot, &form))
        .collect();
    // Hero, about, experience, projects, contact (skills absent).
    assert_eq!(page.len(), 5);

    let presenter = Presenter::new(100);
    let mut sink = Vec::new();
    let total_rows = presenter.render_page(&mut sink, &page).unwrap();
    assert!(total_rows > 0);

    let path = nav::scroll_to("projects");
    assert_eq!(path.last().copied(), nav::anchor_target("projects"));
    assert!(nav::scroll_to("skills").is_empty());
}
