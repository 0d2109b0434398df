//! End-to-end behaviour of the page state, driven the way the components
//! drive it: the same content bundles, state machines and anchors.

use std::collections::HashSet;

use ui::content::{
    AcademicLevel, AcademicsContent, AdmissionsContent, FooterContent, NavContent, SiteContent, TeachersContent,
    GALLERY_IMAGES,
};
use ui::core::carousel::{ticks_for, AutoCarousel, PagedCarousel};
use ui::core::contact::{ContactField, ContactForm};
use ui::core::language::Language;
use ui::core::sections::SectionId;
use ui::core::settings::{GALLERY_INTERVAL_MS, TEACHER_WINDOW};
use ui::i18n;

/// Every `id` the page mounts while the academics tab `active` is selected.
fn rendered_anchors(active: AcademicLevel) -> HashSet<String> {
    let mut anchors: HashSet<String> = SectionId::NAV_ORDER
        .iter()
        .map(|s| s.anchor().to_string())
        .collect();
    let admissions = AdmissionsContent::for_language(Language::En);
    anchors.extend(admissions.steps.iter().map(|s| s.anchor.to_string()));
    let academics = AcademicsContent::for_language(Language::En);
    for (panel, _shown) in active.panels() {
        if panel == AcademicLevel::Secondary {
            anchors.extend(academics.programs.iter().map(|p| p.anchor.to_string()));
        }
    }
    anchors
}

fn target(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

#[test]
fn first_render_is_bengali() {
    i18n::init();
    let nav = NavContent::for_language(Language::default());
    assert_eq!(nav.items[0].label, "হোম");
    assert_eq!(nav.toggle_short, "EN");
}

#[test]
fn gallery_advances_once_per_interval_and_wraps() {
    let mut gallery = AutoCarousel::new(GALLERY_IMAGES.len());

    for _ in 0..ticks_for(3 * GALLERY_INTERVAL_MS, GALLERY_INTERVAL_MS) {
        gallery.tick();
    }
    assert_eq!(gallery.index(), 3);

    for _ in 0..ticks_for(2 * GALLERY_INTERVAL_MS, GALLERY_INTERVAL_MS) {
        gallery.tick();
    }
    assert_eq!(gallery.index(), 0);
}

#[test]
fn thumbnail_click_then_timer_continues_from_selection() {
    let mut gallery = AutoCarousel::new(GALLERY_IMAGES.len());
    gallery.tick();
    assert!(gallery.select(4));
    gallery.tick();
    assert_eq!(gallery.index(), 0);
}

#[test]
fn teacher_window_pages_through_five_teachers() {
    let teachers = TeachersContent::for_language(Language::Bn);
    assert_eq!(teachers.teachers.len(), 5);

    let mut carousel = PagedCarousel::new(teachers.teachers.len(), TEACHER_WINDOW);
    assert_eq!(carousel.page_count(), 3);

    let offsets: Vec<_> = (0..3)
        .map(|_| {
            carousel.next();
            carousel.offset()
        })
        .collect();
    assert_eq!(offsets, vec![1, 2, 0]);
}

#[test]
fn teacher_dot_labels_are_one_based() {
    assert_eq!(TeachersContent::page_label(Language::En, 0), "Go to page 1");
    assert_ne!(
        TeachersContent::page_label(Language::Bn, 2),
        TeachersContent::page_label(Language::En, 2)
    );
}

#[test]
fn language_round_trip_restores_identical_content() {
    let start = Language::Bn;
    let before = SiteContent::for_language(start);

    let switched = start.toggled();
    assert_eq!(switched, Language::En);
    assert_ne!(SiteContent::for_language(switched), before);

    let back = switched.toggled();
    assert_eq!(SiteContent::for_language(back), before);
}

#[test]
fn contact_submission_resets_and_acknowledges_in_active_language() {
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Nusrat");
    form.set(ContactField::Email, "nusrat@example.com");
    form.set(ContactField::Subject, "Scholarship");
    form.set(ContactField::Message, "Is there a merit scholarship for class 9?");

    let mut toast = None;
    form.submit(Language::En, |ack| toast = Some(ack));

    assert!(form.is_empty());
    let ack = toast.expect("submit always acknowledges");
    assert_eq!(ack.language, Language::En);
    assert_eq!(ack.title, "Your message has been sent successfully!");
}

#[test]
fn every_navigation_link_targets_a_rendered_anchor() {
    let anchors = rendered_anchors(AcademicLevel::default());

    for lang in Language::ALL {
        let nav = NavContent::for_language(lang);
        for item in &nav.items {
            assert!(anchors.contains(target(&item.href())), "{}", item.href());
            for link in &item.submenu {
                assert!(
                    anchors.contains(target(&link.href)),
                    "submenu link {} has no target",
                    link.href
                );
            }
        }
    }
}

#[test]
fn footer_links_target_rendered_anchors_except_results() {
    let anchors = rendered_anchors(AcademicLevel::default());
    let footer = FooterContent::for_language(Language::En);

    let dangling: Vec<_> = footer
        .quick_links
        .iter()
        .chain(&footer.academic_links)
        .map(|link| target(&link.href))
        .filter(|anchor| !anchors.contains(*anchor))
        .collect();
    assert_eq!(dangling, vec!["results"]);
}

#[test]
fn catalogs_validate_at_startup() {
    let count = i18n::validate().expect("both catalogs carry the same ids");
    assert!(count > 100);
}

#[test]
fn programme_links_resolve_under_either_academics_tab() {
    let nav = NavContent::for_language(Language::En);
    let footer = FooterContent::for_language(Language::En);
    let program_hrefs: Vec<&str> = nav
        .items
        .iter()
        .filter(|item| item.section == SectionId::Academics)
        .flat_map(|item| item.submenu.iter().map(|link| link.href.as_str()))
        .chain(footer.academic_links.iter().map(|link| link.href.as_str()))
        .filter(|href| *href != "#results")
        .collect();
    assert_eq!(program_hrefs.len(), 6);

    for active in AcademicLevel::ALL {
        let anchors = rendered_anchors(active);
        for href in &program_hrefs {
            assert!(
                anchors.contains(target(href)),
                "{href} has no target while the {active:?} tab is selected"
            );
        }
    }
}
