use dashkit::prelude::*;
use dashkit::sidebar::*;

fn page() -> Document {
    Document::new(
        Element::new(Tag::Html)
            .id("html")
            .child(
                Element::button("")
                    .id(TOGGLE_ID)
                    .child(Element::text("☰").id("toggleIcon")),
            )
            .child(Element::new("nav").id(SIDEBAR_ID).child(Element::link("/").id("navHome")))
            .child(Element::div().id(OVERLAY_ID))
            .child(Element::new("main").id("content").child(Element::text("body").id("para"))),
    )
}

fn bound(doc: &Document) -> Sidebar {
    Sidebar::bind(doc).unwrap()
}

#[test]
fn test_bind_without_sidebar() {
    let doc = Document::new(Element::new(Tag::Html).id("html"));
    assert!(Sidebar::bind(&doc).is_none());
}

#[test]
fn test_bind_reads_initial_state() {
    let mut doc = page();
    assert!(!bound(&doc).is_open());
    doc.get_mut(SIDEBAR_ID).unwrap().add_class("active");
    assert!(bound(&doc).is_open());
}

#[test]
fn test_toggle_click_including_descendants() {
    let doc = page();
    let mut sidebar = bound(&doc);

    sidebar.on_click(&doc, TOGGLE_ID, 1200);
    assert!(sidebar.is_open());
    sidebar.on_click(&doc, "toggleIcon", 1200);
    assert!(!sidebar.is_open());
}

#[test]
fn test_overlay_click_closes() {
    let doc = page();
    let mut sidebar = bound(&doc);
    sidebar.open();
    sidebar.on_click(&doc, OVERLAY_ID, 1200);
    assert!(!sidebar.is_open());
}

#[test]
fn test_outside_click_closes_on_mobile_only() {
    let doc = page();
    let mut sidebar = bound(&doc);

    sidebar.open();
    sidebar.on_click(&doc, "para", 1200);
    assert!(sidebar.is_open());

    sidebar.on_click(&doc, "navHome", 400);
    assert!(sidebar.is_open());

    sidebar.on_click(&doc, "para", MOBILE_BREAKPOINT);
    assert!(!sidebar.is_open());
}

#[test]
fn test_resize_to_desktop_closes() {
    let doc = page();
    let mut sidebar = bound(&doc);

    sidebar.open();
    sidebar.on_resize(MOBILE_BREAKPOINT);
    assert!(sidebar.is_open());
    sidebar.on_resize(MOBILE_BREAKPOINT + 1);
    assert!(!sidebar.is_open());
}

#[test]
fn test_render_marks_all_parts() {
    let mut doc = page();
    let mut sidebar = bound(&doc);

    sidebar.toggle();
    sidebar.render(&mut doc);
    for id in [SIDEBAR_ID, TOGGLE_ID, OVERLAY_ID] {
        assert!(doc.get(id).unwrap().has_class("active"), "{id}");
    }

    sidebar.close();
    sidebar.render(&mut doc);
    assert!(doc.query_all(|e| e.has_class("active")).is_empty());
}
