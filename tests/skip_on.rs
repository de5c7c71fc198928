#![allow(missing_docs)]

use indoc::indoc;
use strainer::{Bindable, ConversionErrorKind, ErrorKind, FieldSet, Select, Strainer};

const HTML_CONTENT: &str = indoc! {r#"
    <div>
        <span class="title">A real title</span>
        <span class="count">not-a-number</span>
        <span class="ratio">also-not-a-number</span>
    </div>
"#};

/// A field whose conversion fails with a covered kind is left unset while
/// sibling fields still bind from the same document.
#[test]
fn covered_failures_leave_the_field_unset() {
    #[derive(Default, Debug)]
    struct Model {
        title: String,
        count: i32,
    }

    impl Bindable for Model {
        fn fields(fields: &mut FieldSet<Self>) {
            fields.select("title", Select::css(".title"), |m, v: String| m.title = v);
            fields.select(
                "count",
                Select::css(".count").skip_on([ConversionErrorKind::Int]),
                |m, v: i32| m.count = v,
            );
        }
    }

    let model: Model = Strainer::new().from_html(HTML_CONTENT).unwrap();
    assert_eq!(model.title, "A real title");
    assert_eq!(model.count, 0);
}

#[test]
fn uncovered_failures_abort_the_bind_call() {
    #[derive(Default, Debug)]
    struct Model {
        count: i32,
    }

    impl Bindable for Model {
        fn fields(fields: &mut FieldSet<Self>) {
            // the policy covers a different kind than the one raised
            fields.select(
                "count",
                Select::css(".count").skip_on([ConversionErrorKind::Float]),
                |m, v: i32| m.count = v,
            );
        }
    }

    let result: Result<Model, _> = Strainer::new().from_html(HTML_CONTENT);
    let err = result.unwrap_err();
    match err.kind() {
        ErrorKind::Conversion { field, source } => {
            assert_eq!(*field, "count");
            assert_eq!(source.kind(), ConversionErrorKind::Int);
        }
        other => panic!("expected a conversion error, got {other:?}"),
    }
}

/// `skip_on_any` is the catch-all policy.
#[test]
fn skip_on_any_covers_every_conversion_failure() {
    #[derive(Default, Debug)]
    struct Model {
        count: i32,
        ratio: f64,
    }

    impl Bindable for Model {
        fn fields(fields: &mut FieldSet<Self>) {
            fields.select(
                "count",
                Select::css(".count").skip_on_any(),
                |m, v: i32| m.count = v,
            );
            fields.select(
                "ratio",
                Select::css(".ratio").skip_on_any(),
                |m, v: f64| m.ratio = v,
            );
        }
    }

    let model: Model = Strainer::new().from_html(HTML_CONTENT).unwrap();
    assert_eq!(model.count, 0);
    assert_eq!(model.ratio, 0.0);
}

/// One bad element skips the whole sequence field; siblings are
/// unaffected.
#[test]
fn sequence_fields_skip_as_a_whole() {
    #[derive(Default, Debug)]
    struct Model {
        title: String,
        numbers: Vec<i32>,
    }

    impl Bindable for Model {
        fn fields(fields: &mut FieldSet<Self>) {
            fields.select("title", Select::css(".title"), |m, v: String| m.title = v);
            fields.select_seq(
                "numbers",
                Select::css("span").skip_on([ConversionErrorKind::Int]),
                |m, v: Vec<i32>| m.numbers = v,
            );
        }
    }

    // "A real title" is not a number, so the sequence trips and skips
    let model: Model = Strainer::new().from_html(HTML_CONTENT).unwrap();
    assert_eq!(model.title, "A real title");
    assert!(model.numbers.is_empty());
}

#[test]
fn skipped_fields_bind_normally_when_the_document_is_clean() {
    #[derive(Default, Debug)]
    struct Model {
        count: i32,
    }

    impl Bindable for Model {
        fn fields(fields: &mut FieldSet<Self>) {
            fields.select(
                "count",
                Select::css(".count").skip_on([ConversionErrorKind::Int]),
                |m, v: i32| m.count = v,
            );
        }
    }

    let model: Model = Strainer::new()
        .from_html(r#"<span class="count">41</span>"#)
        .unwrap();
    assert_eq!(model.count, 41);
}
