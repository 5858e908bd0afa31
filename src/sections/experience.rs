//! Experience section - recency-sorted engagement cards.
//!
//! Cards sort most-recent-first by the extracted start year before any
//! pose is assigned, so stagger order follows display order. Header
//! colors, icons and accents all come from the company-name derivation
//! tables; the status badge from the duration string.

use crate::animate::{ChildSpec, HoverKind};
use crate::content::ExperienceItem;
use crate::derive::{company_accent, company_gradient, company_icon, sorted_by_recency, status_of};
use crate::render::{Node, NodeKind, Style};
use crate::sections::{container_pose, fine_pose, nested_pose, staggered};
use crate::types::SectionId;

use super::profile_for;

pub fn render(data: Option<&[ExperienceItem]>, entered: bool) -> Option<Node> {
    let items = data?;
    let profile = profile_for(SectionId::Experience);
    let sorted = sorted_by_recency(items);

    let cards = sorted.iter().map(|item| {
        let status = status_of(&item.duration);
        let style = Style {
            gradient: Some(company_gradient(&item.company)),
            accent: Some(company_accent(&item.company)),
            ..Style::default()
        };

        let mut card = Node::block().with_style(style).with_hover(HoverKind::Card);

        card = card
            .with_child(
                Node::badge(
                    company_icon(&item.company),
                    format!("{} @ {}", item.role, item.company),
                )
                .with_style(Style {
                    emphasis: true,
                    ..style
                })
                .with_hover(HoverKind::IconBadge),
            )
            .with_child(Node::text(&item.duration))
            .with_child(Node::text(status.badge()))
            .with_child(Node::text(&item.description));

        if let Some(achievements) = item.key_achievements.as_deref() {
            let rows = achievements.iter().enumerate().map(|(index, achievement)| {
                Node::badge("✓", achievement)
                    .with_style(Style {
                        accent: Some(company_accent(&item.company)),
                        ..Style::default()
                    })
                    .with_pose(nested_pose(&profile, index, entered))
            });
            card = card.with_child(
                Node::heading("Key Achievements").with_children(rows),
            );
        }

        if let Some(technologies) = item.technologies.as_deref() {
            let chips = technologies.iter().enumerate().map(|(index, tech)| {
                Node::chip(&tech.icon, &tech.name)
                    .with_hover(HoverKind::Chip)
                    .with_pose(fine_pose(&profile, index, entered))
            });
            card = card.with_child(Node::heading("Technology Stack").with_children(chips));
        }

        card
    });

    let mut children = vec![Node::heading("My Experience")];
    children.extend(cards);
    children.push(Node::text("3+ Years of Professional Excellence"));

    Some(
        Node::new(NodeKind::Section(SectionId::Experience))
            .with_pose(container_pose(&profile, entered))
            .with_children(staggered(&profile, entered, children)),
    )
}

/// Scheduler shape: heading, one child per card (achievements nested,
/// technology chips on the fine clock), then the footer line.
///
/// Specs follow display order, so the list is sorted the same way the
/// renderer sorts it.
pub fn child_specs(data: &[ExperienceItem]) -> Vec<ChildSpec> {
    let sorted = sorted_by_recency(data);
    let mut specs = vec![ChildSpec::default()];
    specs.extend(sorted.iter().map(|item| ChildSpec {
        nested: item.key_achievements.as_deref().map_or(0, <[_]>::len),
        fine: item.technologies.as_deref().map_or(0, <[_]>::len),
    }));
    specs.push(ChildSpec::default());
    specs
}
