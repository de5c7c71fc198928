#![allow(missing_docs)]

use chrono::{NaiveDate, NaiveDateTime};
use indoc::indoc;
use rust_decimal::Decimal;
use std::str::FromStr;
use strainer::{Bindable, FieldSet, Select, Strainer};

const HTML_CONTENT: &str = indoc! {r#"
    <div>
        <span class="string">Test1</span>
        <span class="int">-200</span>
        <span class="long">3000000000</span>
        <span class="float">4.5</span>
        <span class="double">-10.morethanadouble</span>
        <span class="bool">true</span>
        <span class="date">2017-07-14</span>
        <span class="datetime">2017-07-14 13:30:12</span>
        <span class="decimal">50000.00</span>
    </div>
"#};

#[derive(Default, Debug)]
struct SimpleTypes {
    string: String,
    int: i32,
    long: i64,
    float: f32,
    double: f64,
    boolean: bool,
    date: NaiveDate,
    datetime: NaiveDateTime,
    decimal: Decimal,
}

impl Bindable for SimpleTypes {
    fn fields(fields: &mut FieldSet<Self>) {
        fields.select("string", Select::css("span.string"), |s, v: String| s.string = v);
        fields.select("int", Select::css("span.int"), |s, v: i32| s.int = v);
        fields.select("long", Select::css("span.long"), |s, v: i64| s.long = v);
        fields.select("float", Select::css("span.float"), |s, v: f32| s.float = v);
        fields.select(
            "double",
            Select::css("span.double").regex(r"(-?\d+(\.\d+)?)"),
            |s, v: f64| s.double = v,
        );
        fields.select("boolean", Select::css("span.bool"), |s, v: bool| s.boolean = v);
        fields.select("date", Select::css("span.date"), |s, v: NaiveDate| s.date = v);
        fields.select(
            "datetime",
            Select::css("span.datetime"),
            |s, v: NaiveDateTime| s.datetime = v,
        );
        fields.select("decimal", Select::css("span.decimal"), |s, v: Decimal| {
            s.decimal = v
        });
    }
}

#[test]
fn all_leaf_scalars_parse_exactly() {
    let model: SimpleTypes = Strainer::new().from_html(HTML_CONTENT).unwrap();
    assert_eq!(model.string, "Test1");
    assert_eq!(model.int, -200);
    assert_eq!(model.long, 3_000_000_000);
    assert_eq!(model.float, 4.5);
    assert_eq!(model.double, -10.0);
    assert!(model.boolean);
    assert_eq!(model.date, NaiveDate::from_ymd_opt(2017, 7, 14).unwrap());
    assert_eq!(
        model.datetime,
        NaiveDate::from_ymd_opt(2017, 7, 14)
            .unwrap()
            .and_hms_opt(13, 30, 12)
            .unwrap()
    );
    assert_eq!(model.decimal, Decimal::from_str("50000.00").unwrap());
}

#[test]
fn unmatched_scalars_stay_at_their_defaults() {
    let model: SimpleTypes = Strainer::new().from_html("<div></div>").unwrap();
    assert_eq!(model.string, "");
    assert_eq!(model.int, 0);
    assert_eq!(model.long, 0);
    assert!(!model.boolean);
    assert_eq!(model.date, NaiveDate::default());
    assert_eq!(model.decimal, Decimal::default());
}

#[test]
fn boolean_parsing_is_case_insensitive_but_strict() {
    #[derive(Default, Debug)]
    struct Flags {
        yes: bool,
        no: bool,
    }

    impl Bindable for Flags {
        fn fields(fields: &mut FieldSet<Self>) {
            fields.select("yes", Select::css(".yes"), |f, v: bool| f.yes = v);
            fields.select("no", Select::css(".no"), |f, v: bool| f.no = v);
        }
    }

    let flags: Flags = Strainer::new()
        .from_html(r#"<span class="yes">TRUE</span><span class="no">False</span>"#)
        .unwrap();
    assert!(flags.yes);
    assert!(!flags.no);

    let result: Result<Flags, _> = Strainer::new().from_html(r#"<span class="yes">test</span>"#);
    assert!(result.is_err());
}
