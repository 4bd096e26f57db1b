use confluent_core::types::{ConfigEntry, RenderedFile, Value};
use confluent_render::{JavaRenderer, Language, RenderOptions, Renderer};
use proptest::prelude::*;

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|i| Value::Int(i64::from(i))),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        (-1.0e12f64..1.0e12).prop_map(Value::Double),
        "[ -~]{0,24}".prop_map(Value::String),
    ]
}

/// Distinct keys: the index suffix keeps them unique and clear of keywords.
fn file_strategy() -> impl Strategy<Value = RenderedFile> {
    sized_file_strategy(0)
}

fn sized_file_strategy(min_entries: usize) -> impl Strategy<Value = RenderedFile> {
    let entries = prop::collection::vec(("[a-z][a-zA-Z0-9]{0,8}", scalar_value()), min_entries..12);
    entries.prop_map(|pairs| {
        let mut file = RenderedFile::new("generated", "Generated");
        for (i, (key, value)) in pairs.into_iter().enumerate() {
            file.push(ConfigEntry::new(format!("{key}{i}"), value));
        }
        file
    })
}

proptest! {
    #[test]
    fn rendering_is_deterministic(file in file_strategy(), banner in any::<bool>()) {
        let renderer = JavaRenderer::new(RenderOptions::default().with_banner(banner));
        let first = renderer.render(&file).unwrap();
        let second = renderer.render(&file).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn declarations_follow_entry_order(file in file_strategy()) {
        let out = JavaRenderer::default().render(&file).unwrap();
        let mut cursor = 0;
        for entry in &file.entries {
            let needle = format!(" {} = ", entry.key);
            let found = out[cursor..].find(&needle);
            prop_assert!(found.is_some(), "missing or out of order: {}", entry.key);
            cursor += found.unwrap() + needle.len();
        }
    }

    #[test]
    fn one_line_per_entry(file in file_strategy()) {
        let out = JavaRenderer::new(RenderOptions::default().with_banner(false)).render(&file).unwrap();
        // package, blank, class open, entries, class close
        prop_assert_eq!(out.lines().count(), file.entries.len() + 4);
    }
}

proptest! {
    #[test]
    fn every_language_renders_deterministically(file in sized_file_strategy(1)) {
        for language in Language::ALL {
            let renderer = language.renderer(RenderOptions::default());
            let first = renderer.render(&file);
            prop_assert!(first.is_ok(), "{}: {:?}", language, first);
            prop_assert_eq!(first, renderer.render(&file));
        }
    }

    #[test]
    fn every_language_emits_every_key(file in sized_file_strategy(1)) {
        for language in Language::ALL {
            let out = language.renderer(RenderOptions::default()).render(&file).unwrap();
            for entry in &file.entries {
                prop_assert!(out.contains(&entry.key), "{} lost {}", language, entry.key);
            }
        }
    }
}
