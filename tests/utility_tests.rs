//! Integration Tests for the Utility Modules
//!
//! Exercises sorting, statistics, strings, files and the counter through the
//! public API only. File tests run inside throwaway `tempfile` directories.

use utils_rs::sort;
use utils_rs::strings::{self, ReplaceMode};
use utils_rs::Counter;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// SORTING
// ============================================================================

#[test]
fn sort_structs_by_field() {
    #[derive(Debug, Clone, PartialEq)]
    struct Employee {
        name: &'static str,
        age: u32,
    }

    let staff = vec![
        Employee { name: "Dana", age: 41 },
        Employee { name: "Ali", age: 29 },
        Employee { name: "Bo", age: 41 },
        Employee { name: "Cy", age: 35 },
    ];

    let mut by_age = staff.clone();
    sort::merge_sort_by(&mut by_age, |a, b| a.age.cmp(&b.age));
    let names: Vec<&str> = by_age.iter().map(|e| e.name).collect();
    // stable: Dana stays ahead of Bo
    assert_eq!(names, ["Ali", "Cy", "Dana", "Bo"]);

    let mut by_name = staff;
    sort::quick_sort_by(&mut by_name, |a, b| a.name.cmp(b.name));
    assert!(sort::is_sorted_by(&by_name, |a, b| a.name.cmp(b.name)));
}

#[test]
fn sort_floats_with_total_order() {
    let mut v = vec![3.5, -0.25, 10.0, 2.0];
    sort::heap_sort_by(&mut v, f64::total_cmp);
    assert_eq!(v, [-0.25, 2.0, 3.5, 10.0]);
    sort::insertion_sort_by(&mut v, |a, b| b.total_cmp(a));
    assert_eq!(v, [10.0, 3.5, 2.0, -0.25]);
}

#[test]
fn select_median_without_sorting_input() {
    let v = [9, 1, 8, 2, 7, 3, 6];
    assert_eq!(sort::quick_select(&v, v.len() / 2), Some(6));
    assert!(!sort::is_sorted(&v));
}

// ============================================================================
// STATISTICS
// ============================================================================

#[cfg(feature = "std")]
mod stats {
    use super::assert_close;
    use utils_rs::stats::{self, Variance};

    const INTEGERS: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    #[test]
    fn stats_central_tendency() {
        assert_eq!(stats::mean(&INTEGERS), Some(5.5));
        assert_eq!(stats::median(&INTEGERS), Some(5.5));
        assert_eq!(stats::median(&[5, 1, 3]), Some(3.0));
        assert_eq!(stats::mode(&[1, 3, 3, 5, 5, 3]), Some(3));
        assert_close(stats::mean(&[1.5, 2.7, 3.9, 5.1, 6.3]).unwrap(), 3.9);
    }

    #[test]
    fn stats_spread() {
        assert_close(stats::variance(&INTEGERS, Variance::Sample).unwrap(), 9.1667);
        assert_close(stats::variance(&INTEGERS, Variance::Population).unwrap(), 8.25);
        assert_close(
            stats::standard_deviation(&INTEGERS, Variance::Sample).unwrap(),
            3.0276,
        );
        assert_close(
            stats::standard_deviation(&INTEGERS, Variance::Population).unwrap(),
            2.8722,
        );
        assert_eq!(stats::variance(&[42], Variance::Sample), None);
        assert_eq!(stats::range(&[3, 9, 1, 4]), Some((1, 9)));
    }

    #[test]
    fn stats_sum_and_product() {
        assert_eq!(stats::sum(&INTEGERS), 55);
        assert_eq!(stats::product(&INTEGERS), 3_628_800);
        assert_eq!(stats::product(&[1.5, 2.5, 3.5]), 13.125);
        assert_eq!(stats::sum::<f64>(&[]), 0.0);
    }

    #[test]
    fn stats_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_close(stats::correlation(&x, &[5, 4, 3, 2, 1]).unwrap(), -1.0);
        assert_close(stats::correlation(&x, &[2, 4, 6, 8, 10]).unwrap(), 1.0);
        assert_eq!(stats::correlation(&x, &[7, 7, 7, 7, 7]), Some(0.0));
        assert_eq!(stats::correlation(&x, &[1, 2]), None);
    }

    #[test]
    fn stats_percentiles() {
        let p = stats::percentiles(&INTEGERS, &[0.0, 25.0, 50.0, 75.0, 100.0]).unwrap();
        assert_eq!(p, vec![1.0, 3.25, 5.5, 7.75, 10.0]);
        assert_eq!(stats::percentiles(&[42], &[10.0, 50.0, 90.0]), Some(vec![42.0; 3]));
        assert_eq!(stats::percentiles(&INTEGERS, &[50.0, 150.0]), None);
    }
}

// ============================================================================
// STRINGS
// ============================================================================

#[test]
fn strings_parse_config_line() {
    let line = "  Name = Widget ; Price = 19.99 ; Qty = 3  ";
    let fields: Vec<(String, String)> = strings::split(&strings::trim(line), ';')
        .iter()
        .filter_map(|field| {
            let kv = strings::split(field, '=');
            match kv.as_slice() {
                [k, v] => Some((strings::to_lower(&strings::trim(k)), strings::trim(v))),
                _ => None,
            }
        })
        .collect();

    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], ("name".to_string(), "Widget".to_string()));
    assert_eq!(strings::to_double(&fields[1].1), Some(19.99));
    assert_eq!(strings::to_int(&fields[2].1), Some(3));
}

#[test]
fn strings_replace_modes() {
    let text = "the cat saw the other cat";
    assert_eq!(
        strings::replace(text, "cat", "dog", ReplaceMode::First),
        "the dog saw the other cat"
    );
    assert_eq!(
        strings::replace(text, "cat", "dog", ReplaceMode::All),
        "the dog saw the other dog"
    );
    assert!(strings::starts_with(text, "the"));
    assert!(strings::ends_with(text, "cat"));
    assert_eq!(strings::to_upper("cat"), "CAT");
}

#[test]
fn strings_reject_malformed_numbers() {
    for bad in ["", "   ", "1.2.3", "--1", "1e", "e1", "0x10", "1,000"] {
        assert_eq!(strings::to_double(bad), None, "accepted {bad:?}");
    }
    for bad in ["", "3.0", "12abc", "2147483648"] {
        assert_eq!(strings::to_int(bad), None, "accepted {bad:?}");
    }
    assert_eq!(strings::to_int("-2147483648"), Some(i32::MIN));
}

// ============================================================================
// FILES
// ============================================================================

#[cfg(feature = "std")]
mod files {
    use std::io;
    use utils_rs::error::FileError;
    use utils_rs::files;

    #[test]
    fn files_lifecycle() {
        let root = tempfile::tempdir().unwrap();
        let logs = root.path().join("var").join("logs");
        files::create_directory(&logs).unwrap();

        let app = logs.join("app.log");
        files::write_file(&app, "boot\n").unwrap();
        files::append_to_file(&app, "ready\n").unwrap();
        files::write_file(logs.join("notes.md"), "# notes").unwrap();

        assert!(files::file_exists(&app));
        assert_eq!(files::read_lines(&app).unwrap(), ["boot", "ready"]);
        assert_eq!(files::file_size(&app).unwrap(), 11);
        assert_eq!(files::list_files(&logs).unwrap().len(), 2);
        assert_eq!(
            files::list_files_with_extension(&logs, "log").unwrap(),
            [app.clone()]
        );
    }

    #[test]
    fn files_errors_name_the_path() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("nope.txt");

        match files::read_lines(&missing) {
            Err(FileError::Read { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let err = files::list_files_with_extension(&missing, "txt").unwrap_err();
        assert_eq!(err.path(), missing.as_path());
        assert!(err.to_string().contains("nope.txt"));

        // a regular file cannot host children
        let file = root.path().join("plain");
        files::write_file(&file, "x").unwrap();
        assert!(files::create_directory(file.join("child")).is_err());
    }
}

// ============================================================================
// COUNTER
// ============================================================================

#[test]
fn counter_word_lengths() {
    let text = "the quick brown fox jumps over the lazy dog";
    let words: Vec<&str> = text.split(' ').collect();

    let mut by_len = Counter::new(|w: &&str| w.len());
    by_len.count_all(&words);

    assert_eq!(by_len.total(), 9);
    assert_eq!(by_len.get(&3), 4);
    assert_eq!(by_len.get(&5), 3);
    assert_eq!(by_len.by_count_desc()[0], (3, 4));

    let lengths: Vec<usize> = by_len.counts().keys().copied().collect();
    assert_eq!(lengths, [3, 4, 5]);
}
