use super::*;

#[test]
fn nav_links_point_at_page_sections() {
    let targets: Vec<&str> = NAV_LINKS.iter().map(|l| l.target).collect();
    assert_eq!(targets, ["about", "experience", "projects", "contact"]);
    assert_eq!(NAV_LINKS[0].href(), "#about");
}

#[test]
fn timeline_badges() {
    assert_eq!(TimelineKind::Education.badge(), "Education");
    assert_eq!(TimelineKind::Seeking.badge(), "Open to Work");
    assert_eq!(TimelineKind::Work.badge(), "Work");
}

#[test]
fn timeline_alternates_sides() {
    assert_eq!(timeline_side(0), TimelineSide::Left);
    assert_eq!(timeline_side(1), TimelineSide::Right);
    assert_eq!(timeline_side(2), TimelineSide::Left);
}

#[test]
fn placeholder_links_have_no_live_demo() {
    let live: Vec<&str> = PROJECTS.iter().filter_map(Project::live_link).collect();
    assert_eq!(live.len(), 3);
    assert!(live.iter().all(|l| l.starts_with("https://")));
}

#[test]
fn every_project_has_source_and_tech() {
    for project in &PROJECTS {
        assert!(project.github.starts_with("https://github.com/"), "{}", project.title);
        assert!(!project.tech.is_empty(), "{}", project.title);
    }
}

#[test]
fn skill_groups_are_non_empty() {
    assert!(SKILLS.iter().all(|g| !g.items.is_empty()));
}

#[test]
fn location_channel_is_not_a_link() {
    let location = CONTACT_CHANNELS.iter().find(|c| c.label == "Location").unwrap();
    assert!(location.href.is_none());
    assert!(CONTACT_CHANNELS.iter().filter(|c| c.label != "Location").all(|c| c.href.is_some()));
}
