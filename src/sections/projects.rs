//! Projects section - challenge / solution / outcome cards.
//!
//! The status pill derives from the duration string (Active/Completed),
//! the title glyph from the project name. Only the first link drives the
//! primary call-to-action; extra links are ignored by design.

use crate::animate::{ChildSpec, HoverKind};
use crate::content::ProjectItem;
use crate::derive::{project_icon, status_of};
use crate::render::{Node, NodeKind, Style};
use crate::sections::{container_pose, fine_pose, staggered};
use crate::types::SectionId;

use super::profile_for;

pub fn render(data: Option<&[ProjectItem]>, entered: bool) -> Option<Node> {
    let projects = data?;
    let profile = profile_for(SectionId::Projects);

    let cards = projects.iter().map(|project| {
        let status = status_of(&project.duration);
        let mut card = Node::block().with_hover(HoverKind::Card);

        card = card.with_child(
            Node::badge(project_icon(&project.name), &project.name)
                .with_style(Style {
                    emphasis: true,
                    ..Style::default()
                })
                .with_hover(HoverKind::IconBadge),
        );
        card = card.with_child(
            Node::badge("", status.pill()).with_style(Style {
                accent: Some(status.pill_accent()),
                ..Style::default()
            }),
        );

        if let Some(associated) = &project.associated_with {
            card = card.with_child(Node::text(format!("@ {associated}")));
        }
        card = card.with_child(Node::text(&project.duration));

        for (title, body) in [
            ("Challenge", &project.challenge),
            ("Solution", &project.solution),
            ("Outcome", &project.outcome),
        ] {
            if let Some(body) = body {
                card = card.with_child(Node::heading(title).with_child(Node::text(body)));
            }
        }

        if let Some(technologies) = project.technologies.as_deref() {
            let chips = technologies.iter().enumerate().map(|(index, tech)| {
                Node::chip(&tech.icon, &tech.name)
                    .with_hover(HoverKind::Chip)
                    .with_pose(fine_pose(&profile, index, entered))
            });
            card = card.with_child(Node::block().with_children(chips));
        }

        if let Some(url) = project.links.as_ref().and_then(|links| links.primary()) {
            card = card.with_child(
                Node::new(NodeKind::Link {
                    label: "View Project".into(),
                    url: url.to_string(),
                })
                .with_hover(HoverKind::Chip),
            );
        }

        card
    });

    let mut children = vec![Node::heading("Featured Projects")];
    children.extend(cards);

    Some(
        Node::new(NodeKind::Section(SectionId::Projects))
            .with_pose(container_pose(&profile, entered))
            .with_children(staggered(&profile, entered, children)),
    )
}

/// Scheduler shape: heading, then one child per card with its technology
/// chips on the fine clock.
pub fn child_specs(data: &[ProjectItem]) -> Vec<ChildSpec> {
    let mut specs = vec![ChildSpec::default()];
    specs.extend(data.iter().map(|project| ChildSpec {
        nested: 0,
        fine: project.technologies.as_deref().map_or(0, <[_]>::len),
    }));
    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ProjectLinks;
    use crate::derive::AccentToken;

    fn project(name: &str, duration: &str) -> ProjectItem {
        ProjectItem {
            name: name.into(),
            associated_with: None,
            duration: duration.into(),
            challenge: None,
            solution: None,
            outcome: None,
            technologies: None,
            links: None,
        }
    }

    #[test]
    fn test_absent_renders_nothing() {
        assert!(render(None, true).is_none());
    }

    #[test]
    fn test_status_pill_active_vs_completed() {
        let items = vec![
            project("Hotel AI", "2024 - Present"),
            project("Tourba", "2022 - 2023"),
        ];
        let tree = render(Some(&items), true).unwrap();

        let mut pills = Vec::new();
        tree.visit(&mut |n| {
            if let NodeKind::Badge { glyph, label } = &n.kind {
                if glyph.is_empty() {
                    pills.push((label.clone(), n.style.accent));
                }
            }
        });
        assert_eq!(
            pills,
            [
                ("Active".to_string(), Some(AccentToken::Green)),
                ("Completed".to_string(), Some(AccentToken::Blue)),
            ]
        );
    }

    #[test]
    fn test_title_glyph_derived_from_name() {
        let tree = render(Some(&[project("Accident Management", "2023")]), true).unwrap();
        let badge = tree
            .find(&|n| matches!(&n.kind, NodeKind::Badge { glyph, .. } if !glyph.is_empty()))
            .unwrap();
        match &badge.kind {
            NodeKind::Badge { glyph, .. } => assert_eq!(glyph, "⚕️"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_only_first_link_becomes_cta() {
        let mut p = project("Demo", "2023");
        p.links = Some(ProjectLinks::Many(vec![
            "https://first.example".into(),
            "https://second.example".into(),
        ]));
        let tree = render(Some(&[p]), true).unwrap();

        let mut urls = Vec::new();
        tree.visit(&mut |n| {
            if let NodeKind::Link { url, .. } = &n.kind {
                urls.push(url.clone());
            }
        });
        assert_eq!(urls, ["https://first.example"]);
    }

    #[test]
    fn test_optional_narrative_blocks_independent() {
        let mut p = project("Demo", "2023");
        p.solution = Some("Did the thing.".into());
        let tree = render(Some(&[p]), true).unwrap();

        assert!(tree
            .find(&|n| n.kind == NodeKind::Heading("Solution".into()))
            .is_some());
        assert!(tree
            .find(&|n| n.kind == NodeKind::Heading("Challenge".into()))
            .is_none());
        assert!(tree
            .find(&|n| n.kind == NodeKind::Heading("Outcome".into()))
            .is_none());
    }

    #[test]
    fn test_card_delays_follow_list_order() {
        let items = vec![project("A", "2023"), project("B", "2022")];
        let tree = render(Some(&items), true).unwrap();
        // heading at 0ms, cards at 200/400ms (projects stagger 0.2).
        let delays: Vec<_> = tree.children.iter().map(|c| c.pose.delay()).collect();
        assert_eq!(delays, [Some(0), Some(200), Some(400)]);
    }

    #[test]
    fn test_specs_count_chips() {
        let mut p = project("Demo", "2023");
        p.technologies = Some(vec![
            crate::content::Technology {
                name: "Rust".into(),
                icon: "i".into(),
            };
            3
        ]);
        let specs = child_specs(&[p]);
        assert_eq!(specs[1].fine, 3);
    }
}
