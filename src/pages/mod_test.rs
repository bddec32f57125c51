use super::*;
use crate::services::contact::SubmitOutcome;

fn home() -> String {
    render_home(&ContactForm::default(), 2026)
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle).unwrap_or_else(|| panic!("missing {needle}"))
}

#[test]
fn document_shell() {
    let html = home();
    assert!(html.to_ascii_lowercase().starts_with("<!doctype html>"));
    assert!(html.contains("<title>Sreephaneesha Kanugovi | Full Stack Developer</title>"));
    assert!(html.contains(r#"content="Portfolio of Sreephaneesha Kanugovi, a Full Stack Developer and AI/ML Enthusiast.""#));
    assert!(html.contains(r#"href="/assets/site.css""#));
    assert!(html.contains(r#"src="/assets/contact.js""#));
}

#[test]
fn sections_render_in_order() {
    let html = home();
    let ids = ["id=\"hero\"", "id=\"about\"", "id=\"experience\"", "id=\"projects\"", "id=\"contact\"", "<footer"];
    let positions: Vec<usize> = ids.iter().map(|id| position(&html, id)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn navigation_links_target_sections() {
    let html = home();
    for href in ["href=\"#about\"", "href=\"#experience\"", "href=\"#projects\"", "href=\"#contact\"", "href=\"#hero\""] {
        assert!(html.contains(href), "{href}");
    }
}

#[test]
fn content_is_present() {
    let html = home();
    assert!(html.contains("About Me"));
    assert!(html.contains("Model Context Protocol (MCP)"));
    assert!(html.contains("PES University, Bengaluru"));
    assert!(html.contains("Open to Work"));
    assert!(html.contains("Lokat"));
    assert!(html.contains(r#"href="/assets/resume/resume_sreephaneesha.pdf""#));
    assert!(html.contains(r#"href="tel:+917259549529""#));
    assert!(html.contains("Bengaluru, India"));
}

#[test]
fn only_projects_with_deployments_get_live_links() {
    let html = home();
    let live = html.matches("aria-label=\"Live demo\"").count();
    let expected = crate::content::PROJECTS.iter().filter(|p| p.live_link().is_some()).count();
    assert_eq!(live, expected);
    assert_eq!(html.matches("aria-label=\"Source on GitHub\"").count(), crate::content::PROJECTS.len());
}

#[test]
fn footer_shows_year() {
    let html = render_home(&ContactForm::default(), 1999);
    assert!(html.contains("© 1999 Sreephaneesha Kanugovi. All rights reserved."));
}

#[test]
fn idle_form_has_no_status_and_is_enabled() {
    let html = home();
    assert!(html.contains("Send Message"));
    assert!(!html.contains("data-form-status"));
    assert!(!html.contains("disabled"));
}

#[test]
fn submitting_form_is_disabled() {
    let mut form = ContactForm::default();
    form.begin_submit();
    let html = render_home(&form, 2026);
    assert!(html.contains("Sending..."));
    assert!(html.contains("disabled"));
}

#[test]
fn sent_form_shows_success_and_empty_fields() {
    let mut form = ContactForm { name: "Ada Lovelace".into(), ..ContactForm::default() };
    form.begin_submit();
    form.finish(SubmitOutcome::Sent);
    let html = render_home(&form, 2026);
    assert!(html.contains("Message sent successfully!"));
    assert!(html.contains("contact-form__status--ok"));
    assert!(!html.contains("Ada Lovelace"));
}

#[test]
fn failed_form_keeps_values_escaped() {
    let mut form = ContactForm {
        name: "Ada \"Countess\"".into(),
        message: "<script>alert(1)</script>".into(),
        ..ContactForm::default()
    };
    form.begin_submit();
    form.finish(SubmitOutcome::Rejected);
    let html = render_home(&form, 2026);

    assert!(html.contains("Failed to send message. Please try again."));
    assert!(html.contains("contact-form__status--error"));
    assert!(html.contains("Ada &quot;Countess&quot;"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert"));
}
