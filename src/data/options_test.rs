use super::*;

use std::collections::HashSet;

static CONFIGS: [&QuestionnaireConfig; 4] = [&ARRANGEMENT, &TOILETING, &DAILY_LIVING, &COMMUNICATION];

#[test]
fn option_ids_are_unique_within_each_list() {
    for config in CONFIGS {
        let mut seen = HashSet::new();
        for option in config.options {
            assert!(seen.insert(option.id), "duplicate id {} in {}", option.id, config.name);
        }
    }
}

#[test]
fn radio_group_names_are_unique() {
    let names: HashSet<_> = CONFIGS.iter().map(|c| c.name).collect();
    assert_eq!(names.len(), CONFIGS.len());
}

#[test]
fn arrangement_list_has_no_other_escape() {
    assert!(ARRANGEMENT.options.iter().all(|o| o.id != OTHER_OPTION_ID));
}

#[test]
fn other_entry_is_last_where_present() {
    for config in [&TOILETING, &DAILY_LIVING, &COMMUNICATION] {
        let last = config.options.last().expect("non-empty option list");
        assert_eq!(last.id, OTHER_OPTION_ID, "in {}", config.name);
        assert!(last.description.is_none());
    }
}

#[test]
fn prompt_strings_are_distinct_per_config() {
    for config in CONFIGS {
        assert_ne!(config.prompts.none, config.prompts.choose);
        assert_ne!(config.prompts.choose, config.prompts.empty);
        assert_ne!(config.prompts.none, config.prompts.empty);
    }
}
