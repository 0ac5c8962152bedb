use line_sort::{
    dedupe_lines, is_sorted, reverse_lines, sort_lines, Comparator, SortConfig, SortOutcome,
};
use line_sort::config::ColumnKind;
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // numbers, suffixed numbers, months and junk in two columns
        "[a-c]{0,2} -?[0-9]{1,3}",
        "[0-9]{1,3}[kmg]? [a-z]{0,3}",
        "(Jan|Feb|Mar|Dec|jan|Foo|xyz) [0-9]{0,2}",
        "[ a-z0-9\t]{0,6}",
    ]
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..40)
}

fn config_strategy() -> impl Strategy<Value = SortConfig> {
    (
        0usize..4,
        prop_oneof![
            Just(ColumnKind::Text),
            Just(ColumnKind::Number),
            Just(ColumnKind::SuffixedNumber),
            Just(ColumnKind::Month),
        ],
        any::<bool>(),
        prop::option::of(prop_oneof![Just(' '), Just(':')]),
    )
        .prop_map(|(column, kind, trim, separator)| {
            SortConfig::new()
                .with_column(column)
                .with_kind(kind)
                .with_ignore_trailing_whitespace(trim)
                .with_field_separator(separator)
        })
}

fn multiset(lines: &[String]) -> Vec<String> {
    let mut sorted = lines.to_vec();
    sorted.sort();
    sorted
}

proptest! {
    #[test]
    fn sorted_output_is_permutation(doc in document_strategy(), config in config_strategy()) {
        let cmp = Comparator::new(&config);
        let output = sort_lines(&doc, &cmp);
        prop_assert_eq!(multiset(&output), multiset(&doc));
    }

    #[test]
    fn adjacent_pairs_are_ordered(doc in document_strategy(), config in config_strategy()) {
        let cmp = Comparator::new(&config);
        let output = sort_lines(&doc, &cmp);
        for pair in output.windows(2) {
            prop_assert!(!cmp.less(&pair[1], &pair[0]));
        }
    }

    #[test]
    fn sorting_is_idempotent(doc in document_strategy(), config in config_strategy()) {
        let cmp = Comparator::new(&config);
        let once = sort_lines(&doc, &cmp);
        let twice = sort_lines(&once, &cmp);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn check_agrees_with_sort(doc in document_strategy(), config in config_strategy()) {
        let cmp = Comparator::new(&config);
        prop_assert!(is_sorted(&sort_lines(&doc, &cmp), &cmp));
    }

    #[test]
    fn check_only_agrees_with_reverse_sort(doc in document_strategy(), config in config_strategy()) {
        let sorted = line_sort::run(&doc, &config.clone().with_reverse(true))
            .expect("generated configs are valid");
        let lines = sorted.lines().expect("not a check run").to_vec();

        let checked = line_sort::run(&lines, &config.with_reverse(true).with_check(true))
            .expect("generated configs are valid");
        prop_assert_eq!(checked, SortOutcome::Checked { first_disorder: None });
    }

    #[test]
    fn reverse_is_an_involution(doc in document_strategy()) {
        prop_assert_eq!(reverse_lines(reverse_lines(doc.clone())), doc);
    }

    #[test]
    fn dedupe_is_idempotent(doc in document_strategy()) {
        let once = dedupe_lines(doc);
        prop_assert_eq!(dedupe_lines(once.clone()), once);
    }

    #[test]
    fn unique_output_is_permutation_of_distinct_lines(doc in document_strategy(), config in config_strategy()) {
        let outcome = line_sort::run(&doc, &config.with_unique(true))
            .expect("generated configs are valid");
        let output = outcome.lines().expect("not a check run").to_vec();
        prop_assert_eq!(multiset(&output), multiset(&dedupe_lines(doc)));
    }
}
