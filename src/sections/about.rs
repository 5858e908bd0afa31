//! About section - bio and outbound links.

use crate::animate::{ChildSpec, HoverKind};
use crate::content::Person;
use crate::render::{Node, NodeKind, Style};
use crate::sections::{container_pose, nested_pose, staggered};
use crate::types::SectionId;

use super::profile_for;

/// Render the about section: heading, bio, then the link collection.
/// Links are the nested list; an absent or empty collection suppresses
/// the whole block and nothing else.
pub fn render(data: Option<&Person>, entered: bool) -> Option<Node> {
    let person = data?;
    let profile = profile_for(SectionId::About);

    let mut children = vec![
        Node::heading("About Me").with_style(Style {
            emphasis: true,
            ..Style::default()
        }),
        Node::text(&person.bio),
    ];

    if let Some(links) = link_rows(person) {
        let rows = links.into_iter().enumerate().map(|(index, link)| {
            Node::new(NodeKind::Link {
                label: link.0,
                url: link.1,
            })
            .with_hover(HoverKind::Row)
            .with_pose(nested_pose(&profile, index, entered))
        });
        children.push(Node::block().with_children(rows));
    }

    Some(
        Node::new(NodeKind::Section(SectionId::About))
            .with_pose(container_pose(&profile, entered))
            .with_children(staggered(&profile, entered, children)),
    )
}

fn link_rows(person: &Person) -> Option<Vec<(String, String)>> {
    let links = person.links.as_deref()?;
    if links.is_empty() {
        return None;
    }
    Some(
        links
            .iter()
            .map(|link| (link.name.clone(), link.url.clone()))
            .collect(),
    )
}

/// Scheduler shape: heading + bio, plus the link block when present.
pub fn child_specs(data: &Person) -> Vec<ChildSpec> {
    let mut specs = vec![ChildSpec::default(), ChildSpec::default()];
    if let Some(links) = link_rows(data) {
        specs.push(ChildSpec {
            nested: links.len(),
            fine: 0,
        });
    }
    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Contact, Link};
    use crate::render::Pose;
    use crate::types::TimeMs;

    fn person(links: Option<Vec<Link>>) -> Person {
        Person {
            name: "Jane".into(),
            title: "Engineer".into(),
            bio: "Bio text.".into(),
            contact: Contact::default(),
            links,
        }
    }

    #[test]
    fn test_absent_renders_zero_nodes() {
        assert!(render(None, true).is_none());
    }

    #[test]
    fn test_no_links_suppresses_only_link_block() {
        let tree = render(Some(&person(None)), true).unwrap();
        assert_eq!(tree.children.len(), 2);
        assert!(tree
            .find(&|n| matches!(n.kind, NodeKind::Link { .. }))
            .is_none());
        // Bio still renders.
        assert!(tree
            .find(&|n| n.kind == NodeKind::Text("Bio text.".into()))
            .is_some());
    }

    #[test]
    fn test_empty_links_treated_as_absent() {
        let tree = render(Some(&person(Some(vec![]))), true).unwrap();
        assert_eq!(tree.children.len(), 2);
    }

    #[test]
    fn test_link_rows_stagger_on_nested_clock() {
        let links = vec![
            Link {
                name: "GitHub".into(),
                url: "https://g.example".into(),
            },
            Link {
                name: "LinkedIn".into(),
                url: "https://l.example".into(),
            },
        ];
        let tree = render(Some(&person(Some(links))), true).unwrap();
        let block = &tree.children[2];
        let delays: Vec<Option<TimeMs>> =
            block.children.iter().map(|c| c.pose.delay()).collect();
        assert_eq!(delays, [Some(0), Some(100)]);
    }

    #[test]
    fn test_specs_track_link_presence() {
        assert_eq!(child_specs(&person(None)).len(), 2);
        let with_links = person(Some(vec![Link {
            name: "GitHub".into(),
            url: "https://g.example".into(),
        }]));
        let specs = child_specs(&with_links);
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[2].nested, 1);
    }

    #[test]
    fn test_container_hidden_until_entered() {
        let tree = render(Some(&person(None)), false).unwrap();
        assert!(matches!(tree.pose, Pose::Hidden(_)));
    }
}
