use super::*;

#[test]
fn web_links_are_external() {
    let external: Vec<_> = SOCIAL_LINKS.iter().filter(|l| l.is_external()).map(|l| l.label).collect();
    assert_eq!(external, ["LinkedIn", "GitHub"]);
}

#[test]
fn mail_link_stays_in_tab() {
    let email = SOCIAL_LINKS.iter().find(|l| l.label == "Email").expect("email link");
    assert!(!email.is_external());
    assert_eq!(email.href, format!("mailto:{EMAIL}"));
}

#[test]
fn about_copy_is_present() {
    assert_eq!(BIO.len(), 3);
    assert!(BIO.iter().all(|p| !p.trim().is_empty()));
    assert!(!EXPERIENCE.is_empty());
    assert!(SKILLS.iter().all(|group| !group.items.is_empty()));
}
