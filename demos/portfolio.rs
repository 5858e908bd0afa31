//! Demo: render a sample portfolio and simulate a scroll-through.
//!
//! Runs without input: each simulated frame advances the cooperative
//! clock, scrolls further down the page, feeds the visibility triggers
//! and prints the sections that have revealed so far.

use std::error::Error;
use std::io::{self, Write};

use folio_tui::{
    content::ContentSnapshot,
    sections, state,
    state::{ContactForm, FormField},
    animate,
    render::ansi::Presenter,
    types::SectionId,
};

const SAMPLE: &str = r#"{
  "aboutMe": {
    "name": "Imane El",
    "title": "Backend & Cloud Engineer",
    "bio": "I build scalable backend systems and cloud-native solutions.",
    "contact": { "email": "hello@example.com", "website": "example.com" },
    "links": [
      { "name": "GitHub", "url": "https://github.com/example" },
      { "name": "LinkedIn", "url": "https://linkedin.com/in/example" }
    ]
  },
  "skills": [
    {
      "category": "Backend Development",
      "technologies": [
        { "name": "Rust", "icon": "devicon:rust" },
        { "name": "PostgreSQL", "icon": "devicon:postgresql" }
      ]
    },
    {
      "category": "Cloud & DevOps",
      "technologies": [ { "name": "Docker", "icon": "devicon:docker" } ]
    }
  ],
  "experience": [
    {
      "role": "Software Engineer",
      "company": "Zerofiltre",
      "duration": "2019 - 2021",
      "description": "Built course platform APIs.",
      "keyAchievements": ["Shipped the payment pipeline"],
      "technologies": [ { "name": "Java", "icon": "devicon:java" } ]
    },
    {
      "role": "Backend Engineer",
      "company": "Upwork",
      "duration": "Jan 2022 - Present",
      "description": "Freelance backend and cloud work."
    }
  ],
  "projects": [
    {
      "name": "Hotel Recommendation AI",
      "duration": "2024 - Present",
      "challenge": "Cold-start recommendations.",
      "solution": "Hybrid content and collaborative model.",
      "outcome": "Doubled booking conversion in trials.",
      "technologies": [ { "name": "Python", "icon": "devicon:python" } ],
      "links": "https://example.com/hotel-ai"
    }
  ]
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let snapshot = ContentSnapshot::from_json_str(SAMPLE)?;
    let form = ContactForm::new();
    let presenter = Presenter::new(100);
    let mut out = io::stdout();

    // Register triggers for every section that has content; the animator
    // never initializes for absent ones.
    for section in SectionId::all() {
        if sections::child_specs(*section, &snapshot).is_some() {
            state::observe(*section, None);
        }
    }

    // The hero reveals on mount.
    state::mark_seen(SectionId::Hero);

    // Simulated scroll positions: each frame the viewport reaches one
    // more section.
    let scroll_script = [
        (0u64, SectionId::Hero),
        (400, SectionId::About),
        (800, SectionId::Skills),
        (1200, SectionId::Experience),
        (1600, SectionId::Projects),
        (2000, SectionId::Contact),
    ];

    for (now, reached) in scroll_script {
        if state::report_intersection(reached, 1.0) || reached == SectionId::Hero {
            if let Some(specs) = sections::child_specs(reached, &snapshot) {
                let profile = animate::section_profile(reached);
                animate::schedule_section(reached, &profile, &specs, now);
            }
        }

        let events = animate::tick(now);
        writeln!(out, "--- frame at {now}ms: {} reveals fired ---", events.len())?;

        let page: Vec<_> = SectionId::all()
            .iter()
            .filter_map(|s| sections::render_section(*s, &snapshot, &form))
            .collect();
        presenter.render_page(&mut out, &page)?;
    }

    // Drain the remaining stagger deadlines.
    let late = animate::tick(10_000);
    writeln!(out, "--- settled: {} late reveals ---", late.len())?;

    // Simulated contact submission: disable, wait, clear.
    form.set_field(FormField::Name, "Ada");
    form.set_field(FormField::Email, "ada@example.com");
    form.set_field(FormField::Subject, "Hello");
    form.set_field(FormField::Message, "Nice page.");
    form.submit(10_000);
    writeln!(out, "form submitting: {}", form.is_submitting())?;
    form.tick(10_000 + state::SUBMIT_DELAY_MS);
    writeln!(
        out,
        "form cleared: {:?}, name field now {:?}",
        form.phase(),
        form.field(FormField::Name)
    )?;

    // Smooth scroll back to the top-most anchored section.
    let path = folio_tui::nav::scroll_to("about");
    writeln!(out, "smooth scroll to #about: {path:?}")?;

    out.flush()?;
    Ok(())
}
