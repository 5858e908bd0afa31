//! Contact section - connect card and the simulated-submission form.
//!
//! The only renderer with local state: it reads (never writes) the
//! [`ContactForm`] machine to mirror field values and the submitting
//! flag. Each contact affordance is independently optional; the social
//! row falls back from a LinkedIn link to the plain website, and the
//! GitHub affordance is always offered.

use crate::animate::{ChildSpec, HoverKind};
use crate::content::Person;
use crate::render::{Node, NodeKind, Style};
use crate::sections::{container_pose, nested_pose, staggered};
use crate::state::{ContactForm, FormField};
use crate::types::SectionId;

use super::profile_for;

pub fn render(data: Option<&Person>, form: &ContactForm, entered: bool) -> Option<Node> {
    let person = data?;
    let profile = profile_for(SectionId::Contact);

    // Connect card: identity, affordances, social row.
    let mut connect = Node::block().with_child(
        Node::badge(person.initials(), format!("{} - {}", person.name, person.title))
            .with_style(Style {
                emphasis: true,
                ..Style::default()
            }),
    );
    if let Some(email) = &person.contact.email {
        connect = connect.with_child(Node::badge("✉", email).with_hover(HoverKind::Row));
    }
    if let Some(website) = &person.contact.website {
        connect = connect.with_child(Node::badge("🌐", website).with_hover(HoverKind::Row));
    }
    connect = connect.with_child(social_row(person, &profile, entered));

    // Form card: four required inputs and the submit affordance.
    let submitting = form.is_submitting();
    let fields = FormField::all().iter().map(|field| {
        Node::new(NodeKind::Field {
            field: *field,
            value: form.field(*field),
            disabled: submitting,
        })
    });
    let submit = Node::new(NodeKind::Button {
        label: if submitting {
            "Sending...".into()
        } else {
            "Send Message".into()
        },
        enabled: !submitting,
    });
    let form_card = Node::heading("Send a Message")
        .with_children(fields)
        .with_child(submit);

    let children = staggered(
        &profile,
        entered,
        vec![Node::heading("Get In Touch"), connect, form_card],
    );

    Some(
        Node::new(NodeKind::Section(SectionId::Contact))
            .with_pose(container_pose(&profile, entered))
            .with_children(children),
    )
}

fn social_row(
    person: &Person,
    profile: &crate::animate::AnimationProfile,
    entered: bool,
) -> Node {
    let mut links: Vec<(String, String)> = Vec::new();

    if let Some(email) = &person.contact.email {
        links.push(("Email".into(), format!("mailto:{email}")));
    }
    // LinkedIn by link-name match, falling back to the plain website.
    if let Some(link) = person.find_link("linkedin") {
        links.push(("LinkedIn".into(), link.url.clone()));
    } else if let Some(website) = &person.contact.website {
        links.push(("LinkedIn".into(), format!("https://{website}")));
    }
    links.push(("GitHub".into(), "https://github.com".into()));

    let rows = links.into_iter().enumerate().map(|(index, (label, url))| {
        Node::new(NodeKind::Link { label, url })
            .with_hover(HoverKind::IconBadge)
            .with_pose(nested_pose(profile, index, entered))
    });
    Node::block().with_children(rows)
}

fn social_count(person: &Person) -> usize {
    let mut count = 1; // GitHub is always offered
    if person.contact.email.is_some() {
        count += 1;
    }
    if person.find_link("linkedin").is_some() || person.contact.website.is_some() {
        count += 1;
    }
    count
}

/// Scheduler shape: heading, connect card (social links nested), form.
pub fn child_specs(data: &Person) -> Vec<ChildSpec> {
    vec![
        ChildSpec::default(),
        ChildSpec {
            nested: social_count(data),
            fine: 0,
        },
        ChildSpec::default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Contact, Link};
    use crate::state::FormPhase;

    fn person() -> Person {
        Person {
            name: "Jane Doe".into(),
            title: "Engineer".into(),
            bio: String::new(),
            contact: Contact {
                email: Some("jane@example.com".into()),
                phone: None,
                website: Some("jane.example".into()),
            },
            links: None,
        }
    }

    #[test]
    fn test_absent_renders_nothing() {
        let form = ContactForm::new();
        assert!(render(None, &form, true).is_none());
    }

    #[test]
    fn test_missing_email_suppresses_only_email_affordance() {
        let mut p = person();
        p.contact.email = None;
        let form = ContactForm::new();
        let tree = render(Some(&p), &form, true).unwrap();

        let mut glyphs = Vec::new();
        tree.visit(&mut |n| {
            if let NodeKind::Badge { glyph, .. } = &n.kind {
                glyphs.push(glyph.clone());
            }
        });
        assert!(!glyphs.contains(&"✉".to_string()));
        assert!(glyphs.contains(&"🌐".to_string()));
    }

    #[test]
    fn test_social_row_fallbacks() {
        // With a LinkedIn link: use it.
        let mut p = person();
        p.links = Some(vec![Link {
            name: "My LinkedIn".into(),
            url: "https://linkedin.example/jane".into(),
        }]);
        let form = ContactForm::new();
        let tree = render(Some(&p), &form, true).unwrap();
        let mut urls = Vec::new();
        tree.visit(&mut |n| {
            if let NodeKind::Link { url, .. } = &n.kind {
                urls.push(url.clone());
            }
        });
        assert!(urls.contains(&"https://linkedin.example/jane".to_string()));

        // Without: website fallback.
        let tree = render(Some(&person()), &form, true).unwrap();
        let mut urls = Vec::new();
        tree.visit(&mut |n| {
            if let NodeKind::Link { url, .. } = &n.kind {
                urls.push(url.clone());
            }
        });
        assert!(urls.contains(&"https://jane.example".to_string()));
        // GitHub always present.
        assert!(urls.iter().any(|u| u.contains("github.com")));
    }

    #[test]
    fn test_form_mirrors_machine_state() {
        let form = ContactForm::new();
        form.set_field(FormField::Name, "Jane");
        let tree = render(Some(&person()), &form, true).unwrap();

        let field = tree
            .find(&|n| matches!(&n.kind, NodeKind::Field { field: FormField::Name, .. }))
            .unwrap();
        match &field.kind {
            NodeKind::Field { value, disabled, .. } => {
                assert_eq!(value, "Jane");
                assert!(!*disabled);
            }
            _ => unreachable!(),
        }

        let button = tree
            .find(&|n| matches!(n.kind, NodeKind::Button { .. }))
            .unwrap();
        assert_eq!(
            button.kind,
            NodeKind::Button {
                label: "Send Message".into(),
                enabled: true,
            }
        );
    }

    #[test]
    fn test_submitting_disables_inputs_and_button() {
        let form = ContactForm::new();
        for field in FormField::all() {
            form.set_field(*field, "x");
        }
        assert!(form.submit(0));
        assert_eq!(form.phase(), FormPhase::Submitting);

        let tree = render(Some(&person()), &form, true).unwrap();
        tree.visit(&mut |n| {
            if let NodeKind::Field { disabled, .. } = &n.kind {
                assert!(*disabled);
            }
            if let NodeKind::Button { label, enabled } = &n.kind {
                assert_eq!(label, "Sending...");
                assert!(!*enabled);
            }
        });
    }

    #[test]
    fn test_specs_track_social_count() {
        let specs = child_specs(&person());
        // email + website-fallback + github
        assert_eq!(specs[1].nested, 3);

        let mut bare = person();
        bare.contact.email = None;
        bare.contact.website = None;
        assert_eq!(child_specs(&bare)[1].nested, 1);
    }
}
