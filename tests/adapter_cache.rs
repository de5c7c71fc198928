#![allow(missing_docs)]

use std::sync::Arc;
use strainer::{Bindable, FieldSet, Select, Strainer};

#[derive(Default, Debug)]
struct DumbModel {
    div: String,
}

impl Bindable for DumbModel {
    fn fields(fields: &mut FieldSet<Self>) {
        fields.select("div", Select::css("div"), |m, v: String| m.div = v);
    }
}

#[test]
fn repeated_lookups_return_the_same_adapter() {
    let strainer = Strainer::new();
    let first = strainer.adapter::<DumbModel>().unwrap();
    let second = strainer.adapter::<DumbModel>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn sessions_do_not_share_adapters() {
    let first = Strainer::new().adapter::<DumbModel>().unwrap();
    let second = Strainer::new().adapter::<DumbModel>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

/// Concurrent first use settles on one adapter; every thread binds
/// successfully and later lookups agree.
#[test]
fn concurrent_first_use_settles_on_one_adapter() {
    let strainer = Strainer::new();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let model: DumbModel = strainer.from_html("<div>shared</div>").unwrap();
                assert_eq!(model.div, "shared");
            });
        }
    });

    let first = strainer.adapter::<DumbModel>().unwrap();
    let second = strainer.adapter::<DumbModel>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

/// Adapters for different shapes coexist in one registry.
#[test]
fn registry_holds_one_adapter_per_shape() {
    #[derive(Default, Debug)]
    struct Other {
        p: String,
    }

    impl Bindable for Other {
        fn fields(fields: &mut FieldSet<Self>) {
            fields.select("p", Select::css("p"), |m, v: String| m.p = v);
        }
    }

    let strainer = Strainer::new();
    let dumb = strainer.adapter::<DumbModel>().unwrap();
    let other = strainer.adapter::<Other>().unwrap();
    assert_eq!(dumb.field_names().collect::<Vec<_>>(), ["div"]);
    assert_eq!(other.field_names().collect::<Vec<_>>(), ["p"]);
}

/// A failed bind leaves the registry and its adapters reusable.
#[test]
fn bind_errors_do_not_poison_the_registry() {
    #[derive(Default, Debug)]
    struct Numeric {
        value: i32,
    }

    impl Bindable for Numeric {
        fn fields(fields: &mut FieldSet<Self>) {
            fields.select("value", Select::css("span"), |m, v: i32| m.value = v);
        }
    }

    let strainer = Strainer::new();
    let failed: Result<Numeric, _> = strainer.from_html("<span>nope</span>");
    assert!(failed.is_err());

    let model: Numeric = strainer.from_html("<span>17</span>").unwrap();
    assert_eq!(model.value, 17);
}
