#![allow(missing_docs)]

use indoc::indoc;
use strainer::{Bindable, FieldSet, Select, Strainer};

#[derive(Debug)]
struct Profile {
    name: String,
    city: String,
    visits: i32,
    // never registered; binding must not touch it
    session_token: String,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: String::new(),
            city: "unknown".to_owned(),
            visits: 0,
            session_token: "local-secret".to_owned(),
        }
    }
}

impl Bindable for Profile {
    fn fields(fields: &mut FieldSet<Self>) {
        fields.select("name", Select::css(".name"), |p, v: String| p.name = v);
        fields.select("city", Select::css(".city"), |p, v: String| p.city = v);
        fields.select("visits", Select::css(".visits"), |p, v: i32| p.visits = v);
    }
}

/// Populating a caller-supplied instance only overwrites matched fields;
/// everything else stays as the caller left it.
#[test]
fn partial_population_of_an_existing_instance() {
    let mut profile = Profile {
        name: "old name".to_owned(),
        city: "Warsaw".to_owned(),
        visits: 41,
        session_token: "keep-me".to_owned(),
    };

    let html = indoc! {r#"
        <div class="name">New Name</div>
        <div class="visits">42</div>
    "#};

    Strainer::new().from_html_into(html, &mut profile).unwrap();

    assert_eq!(profile.name, "New Name");
    assert_eq!(profile.visits, 42);
    // no match: untouched
    assert_eq!(profile.city, "Warsaw");
    // unregistered: untouched
    assert_eq!(profile.session_token, "keep-me");
}

#[test]
fn rebinding_overwrites_previous_document_values() {
    let strainer = Strainer::new();
    let mut profile: Profile = strainer
        .from_html(r#"<div class="name">First</div>"#)
        .unwrap();
    assert_eq!(profile.name, "First");

    strainer
        .from_html_into(r#"<div class="name">Second</div>"#, &mut profile)
        .unwrap();
    assert_eq!(profile.name, "Second");
}

/// A bind error mid-way leaves the earlier fields written; the instance
/// is visibly partially modified, and no rollback happens.
#[test]
fn bind_errors_do_not_roll_back_earlier_fields() {
    let mut profile = Profile::default();

    let html = indoc! {r#"
        <div class="name">Written Before The Error</div>
        <div class="visits">not-a-number</div>
    "#};

    let result = Strainer::new().from_html_into(html, &mut profile);
    assert!(result.is_err());
    assert_eq!(profile.name, "Written Before The Error");
    assert_eq!(profile.visits, 0);
}

#[test]
fn adapter_entry_points_match_session_entry_points() {
    let strainer = Strainer::new();
    let adapter = strainer.adapter::<Profile>().unwrap();

    let html = r#"<div class="name">Via Adapter</div>"#;
    let via_adapter = adapter.from_html(&strainer, html).unwrap();
    let via_session: Profile = strainer.from_html(html).unwrap();
    assert_eq!(via_adapter.name, via_session.name);

    let document = strainer::Html::parse_document(html);
    let via_element = adapter.bind(&strainer, document.root_element()).unwrap();
    assert_eq!(via_element.name, "Via Adapter");
}
