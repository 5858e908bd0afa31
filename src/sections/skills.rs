//! Skills section - categorized technology grid.
//!
//! Each category card leads with a derived icon, staggers its technology
//! rows on the nested clock, and closes with a technology count. Bar
//! widths come from the deterministic skill-level derivation.

use crate::animate::{ChildSpec, HoverKind};
use crate::content::SkillCategory;
use crate::derive::{category_icon, skill_level};
use crate::render::{Node, NodeKind, Style};
use crate::sections::{container_pose, nested_pose, staggered};
use crate::types::SectionId;

use super::profile_for;

pub fn render(data: Option<&[SkillCategory]>, entered: bool) -> Option<Node> {
    let categories = data?;
    let profile = profile_for(SectionId::Skills);

    let cards = categories.iter().map(|category| {
        let rows = category.technologies.iter().enumerate().map(|(index, tech)| {
            Node::chip(&tech.icon, &tech.name)
                .with_child(Node::new(NodeKind::Bar(skill_level(&tech.name))))
                .with_hover(HoverKind::Row)
                .with_pose(nested_pose(&profile, index, entered))
        });

        Node::badge(category_icon(&category.category), &category.category)
            .with_style(Style {
                emphasis: true,
                ..Style::default()
            })
            .with_hover(HoverKind::Card)
            .with_children(rows)
            .with_child(Node::text(format!(
                "{} Technologies",
                category.technologies.len()
            )))
    });

    let mut children = vec![Node::heading("My Skills")];
    children.extend(cards);

    Some(
        Node::new(NodeKind::Section(SectionId::Skills))
            .with_pose(container_pose(&profile, entered))
            .with_children(staggered(&profile, entered, children)),
    )
}

/// Scheduler shape: heading, then one child per category with its
/// technology rows nested.
pub fn child_specs(data: &[SkillCategory]) -> Vec<ChildSpec> {
    let mut specs = vec![ChildSpec::default()];
    specs.extend(data.iter().map(|category| ChildSpec {
        nested: category.technologies.len(),
        fine: 0,
    }));
    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Technology;
    use crate::render::Pose;

    fn categories() -> Vec<SkillCategory> {
        vec![
            SkillCategory {
                category: "Backend Development".into(),
                technologies: vec![
                    Technology {
                        name: "Rust".into(),
                        icon: "https://icons.example/rust".into(),
                    },
                    Technology {
                        name: "PostgreSQL".into(),
                        icon: "https://icons.example/pg".into(),
                    },
                ],
            },
            SkillCategory {
                category: "Cloud & DevOps".into(),
                technologies: vec![Technology {
                    name: "Docker".into(),
                    icon: "https://icons.example/docker".into(),
                }],
            },
        ]
    }

    #[test]
    fn test_absent_renders_nothing() {
        assert!(render(None, true).is_none());
    }

    #[test]
    fn test_category_icons_derived() {
        let tree = render(Some(&categories()), true).unwrap();
        let mut glyphs = Vec::new();
        tree.visit(&mut |n| {
            if let NodeKind::Badge { glyph, .. } = &n.kind {
                glyphs.push(glyph.clone());
            }
        });
        assert_eq!(glyphs, ["🏗️", "☁️"]);
    }

    #[test]
    fn test_rows_stagger_on_nested_clock() {
        let tree = render(Some(&categories()), true).unwrap();
        let first_card = &tree.children[1];
        // Two tech rows then the count footer.
        assert_eq!(first_card.children.len(), 3);
        assert_eq!(first_card.children[0].pose.delay(), Some(0));
        assert_eq!(first_card.children[1].pose.delay(), Some(50));
    }

    #[test]
    fn test_bars_are_deterministic_and_banded() {
        let tree = render(Some(&categories()), true).unwrap();
        let again = render(Some(&categories()), true).unwrap();
        assert_eq!(tree, again);

        tree.visit(&mut |n| {
            if let NodeKind::Bar(percent) = n.kind {
                assert!((70..=100).contains(&percent));
            }
        });
    }

    #[test]
    fn test_count_footer() {
        let tree = render(Some(&categories()), true).unwrap();
        assert!(tree
            .find(&|n| n.kind == NodeKind::Text("2 Technologies".into()))
            .is_some());
    }

    #[test]
    fn test_specs_match_tree_shape() {
        let data = categories();
        let specs = child_specs(&data);
        let tree = render(Some(&data), false).unwrap();
        assert_eq!(specs.len(), tree.children.len());
        assert_eq!(specs[1].nested, 2);
        assert_eq!(specs[2].nested, 1);
    }

    #[test]
    fn test_hidden_pose_is_scale_in() {
        let tree = render(Some(&categories()), false).unwrap();
        match tree.pose {
            Pose::Hidden(kind) => {
                assert!(matches!(kind, crate::animate::RevealKind::ScaleIn { .. }))
            }
            other => panic!("unexpected pose {other:?}"),
        }
    }
}
