// SPDX-License-Identifier: MPL-2.0

use intspan::{IntSpan, IntSpanError, RunlistError};

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn set(runlist: &str) -> IntSpan {
    runlist.parse().unwrap()
}

#[test]
fn creation_from_runlist() {
    init_log();
    let cases: &[(&str, &str, &[i32])] = &[
        ("", "-", &[]),
        ("-", "-", &[]),
        ("0", "0", &[0]),
        ("1", "1", &[1]),
        ("1-1", "1", &[1]),
        ("-1", "-1", &[-1]),
        ("1-2", "1-2", &[1, 2]),
        ("-2--1", "-2--1", &[-2, -1]),
        ("-2-1", "-2-1", &[-2, -1, 0, 1]),
        ("1,2-4", "1-4", &[1, 2, 3, 4]),
        ("1-3,4,5-7", "1-7", &[1, 2, 3, 4, 5, 6, 7]),
        ("1-3,4", "1-4", &[1, 2, 3, 4]),
    ];
    for &(input, runlist, elements) in cases {
        let set = set(input);
        assert_eq!(set.cardinality(), elements.len() as u64, "{input}");
        assert_eq!(set.to_string(), runlist, "{input}");
        assert_eq!(set.to_vec(), elements, "{input}");

        let copy = set.clone();
        assert_eq!(copy, set);
        assert_eq!(IntSpan::from_values(elements.iter().copied()).unwrap(), set);
    }
}

#[test]
fn creation_errors() {
    init_log();
    assert_eq!(
        IntSpan::from_pair(1, -1),
        Err(IntSpanError::InvalidRange {
            lower: 1,
            upper: -1
        })
    );
    assert!(matches!(
        "1--1".parse::<IntSpan>(),
        Err(IntSpanError::Runlist(RunlistError::BadOrder { .. }))
    ));
    assert!(matches!(
        "1-1--1".parse::<IntSpan>(),
        Err(IntSpanError::Runlist(RunlistError::TooManyParts { .. }))
    ));
    assert!(matches!(
        "1 2".parse::<IntSpan>(),
        Err(IntSpanError::Runlist(RunlistError::SplitNumber { .. }))
    ));
    assert!(matches!(
        "abc".parse::<IntSpan>(),
        Err(IntSpanError::Runlist(RunlistError::ParseInt { .. }))
    ));
    assert_eq!(
        IntSpan::from_value(i32::MIN),
        Err(IntSpanError::OutOfDomain { value: i32::MIN })
    );
}

#[test]
fn synopsis() {
    init_log();
    let expected = "1-3,5,7,9,100-999,1001-10000";

    let mut set = IntSpan::new();
    for v in [1, 2, 3, 5, 7, 9] {
        set.add(v).unwrap();
    }
    set.add_pair(100, 10000).unwrap();
    set.remove(1000).unwrap();
    assert_eq!(set.to_string(), expected);
    assert_eq!(set.cardinality(), 9906);
    assert!(!set.is_empty());
    assert!(set.is_finite());
    assert!(!set.is_infinite());
    assert!(!set.is_universal());

    let mut other = IntSpan::from_pair(-10, 1).unwrap();
    other.clear().merge(&set);
    assert_eq!(other, set);

    let single = IntSpan::from_value(1000).unwrap();
    let mut chained = IntSpan::new();
    chained
        .add_pair(1, 3)
        .unwrap()
        .add(5)
        .unwrap()
        .add(7)
        .unwrap()
        .add(9)
        .unwrap()
        .add_pair(100, 10000)
        .unwrap()
        .merge(&single)
        .subtract(&single)
        .remove(7)
        .unwrap()
        .add(7)
        .unwrap()
        .remove_runlist("7")
        .unwrap()
        .add_runlist("7")
        .unwrap()
        .add_ranges([(1000, 1000)])
        .unwrap()
        .remove_ranges([(1000, 1000)])
        .unwrap()
        .add_values([1000])
        .unwrap()
        .remove_values([1000])
        .unwrap()
        .add(1000)
        .unwrap()
        .remove(1000)
        .unwrap();
    assert_eq!(chained.to_string(), expected);
}

#[test]
fn infinite_sets() {
    init_log();
    let universal = IntSpan::new().invert().clone();
    assert_eq!(
        universal.to_string(),
        format!("{}-{}", IntSpan::NEG_INF, IntSpan::POS_INF)
    );
    assert!(universal.is_infinite());
    assert!(universal.is_neg_inf());
    assert!(universal.is_pos_inf());
    assert!(universal.is_universal());

    let positive = IntSpan::from_pair(1, IntSpan::POS_INF).unwrap();
    assert_eq!(positive.to_string(), format!("1-{}", IntSpan::POS_INF));
    assert!(positive.is_infinite());
    assert!(positive.is_pos_inf());
    assert!(!positive.is_neg_inf());
    assert!(!positive.is_universal());

    // The runlist of an infinite set parses back to the same set.
    assert_eq!(set(&positive.to_string()), positive);
    assert_eq!(set(&universal.to_string()), universal);
}

#[test]
fn membership() {
    init_log();
    let sets = ["-", "1", "1-2", "1,3-5"];
    let contains = [
        [false, false, false, false],
        [true, false, false, false],
        [true, true, false, false],
        [true, false, true, true],
    ];
    let added = [
        ["1", "2", "3", "4"],
        ["1", "1-2", "1,3", "1,4"],
        ["1-2", "1-2", "1-3", "1-2,4"],
        ["1,3-5", "1-5", "1,3-5", "1,3-5"],
    ];
    let removed = [
        ["-", "-", "-", "-"],
        ["-", "1", "1", "1"],
        ["2", "1", "1-2", "1-2"],
        ["3-5", "1,3-5", "1,4-5", "1,3,5"],
    ];
    for (i, runlist) in sets.iter().enumerate() {
        for n in 1..=4 {
            let j = (n - 1) as usize;
            let base = set(runlist);
            assert_eq!(base.contains(n), contains[i][j], "{runlist} contains {n}");

            let mut with = base.clone();
            with.add(n).unwrap();
            assert_eq!(with.to_string(), added[i][j], "{runlist} add {n}");

            let mut without = base.clone();
            without.remove(n).unwrap();
            assert_eq!(without.to_string(), removed[i][j], "{runlist} remove {n}");
        }
    }
}

#[test]
fn binary_operations() {
    init_log();
    #[rustfmt::skip]
    let cases = [
        // A            B       union        intersect  xor            A-B     B-A
        ("-",          "-",     "-",         "-",       "-",           "-",    "-"),
        ("1",          "1",     "1",         "1",       "-",           "-",    "-"),
        ("1",          "2",     "1-2",       "-",       "1-2",         "1",    "2"),
        ("3-9",        "1-2",   "1-9",       "-",       "1-9",         "3-9",  "1-2"),
        ("3-9",        "1-5",   "1-9",       "3-5",     "1-2,6-9",     "6-9",  "1-2"),
        ("3-9",        "4-8",   "3-9",       "4-8",     "3,9",         "3,9",  "-"),
        ("3-9",        "5-12",  "3-12",      "5-9",     "3-4,10-12",   "3-4",  "10-12"),
        ("3-9",        "10-12", "3-12",      "-",       "3-12",        "3-9",  "10-12"),
        ("1-3,5,8-11", "1-6",   "1-6,8-11",  "1-3,5",   "4,6,8-11",    "8-11", "4,6"),
    ];
    for (a, b, union, intersect, xor, a_b, b_a) in cases {
        let (sa, sb) = (set(a), set(b));
        assert_eq!(sa.union(&sb).to_string(), union, "{a} union {b}");
        assert_eq!(sa.intersect(&sb).to_string(), intersect, "{a} intersect {b}");
        assert_eq!(sa.xor(&sb).to_string(), xor, "{a} xor {b}");
        assert_eq!(sa.diff(&sb).to_string(), a_b, "{a} diff {b}");
        assert_eq!(sb.diff(&sa).to_string(), b_a, "{b} diff {a}");
    }
}

#[test]
fn relations() {
    init_log();
    let sets = ["-", "1", "5", "1-5", "3-7", "1-3,8,10-23"];
    let subset = [
        [1, 1, 1, 1, 1, 1],
        [0, 1, 0, 1, 0, 1],
        [0, 0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0, 0],
        [0, 0, 0, 0, 1, 0],
        [0, 0, 0, 0, 0, 1],
    ];
    let superset = [
        [1, 0, 0, 0, 0, 0],
        [1, 1, 0, 0, 0, 0],
        [1, 0, 1, 0, 0, 0],
        [1, 1, 1, 1, 0, 0],
        [1, 0, 1, 0, 1, 0],
        [1, 1, 0, 0, 0, 1],
    ];
    for (i, a) in sets.iter().enumerate() {
        for (j, b) in sets.iter().enumerate() {
            let (sa, sb) = (set(a), set(b));
            assert_eq!(sa == sb, i == j, "{a} equals {b}");
            assert_eq!(sa.subset(&sb), subset[i][j] == 1, "{a} subset {b}");
            assert_eq!(sa.superset(&sb), superset[i][j] == 1, "{a} superset {b}");
        }
    }
}

#[test]
fn indexing() {
    init_log();
    // (runlist, position, member at position, position of that number as a member)
    let cases: &[(&str, i64, Option<i32>, Option<u64>)] = &[
        ("-", 1, None, None),
        ("-", -1, None, None),
        ("1-10,21-30", 25, None, Some(15)),
        ("1-10,21-30", -25, None, None),
        ("0-9", 1, Some(0), Some(2)),
        ("0-9", 6, Some(5), Some(7)),
        ("0-9", 10, Some(9), None),
        ("0-9", 11, None, None),
        ("0-9", -1, Some(9), None),
        ("0-9", -5, Some(5), None),
        ("0-9", -10, Some(0), None),
        ("0-9", -11, None, None),
        ("1-10,21-30,41-50", 6, Some(6), Some(6)),
        ("1-10,21-30,41-50", 16, Some(26), None),
        ("1-10,21-30,41-50", 26, Some(46), Some(16)),
        ("1-10,21-30,41-50", 31, None, None),
        ("1-10,21-30,41-50", -1, Some(50), None),
        ("1-10,21-30,41-50", -11, Some(30), None),
        ("1-10,21-30,41-50", -21, Some(10), None),
        ("1-10,21-30,41-50", -30, Some(1), None),
        ("1-10,21-30,41-50", -31, None, None),
    ];
    for &(runlist, number, at, index) in cases {
        let s = set(runlist);
        assert_eq!(s.at(number).ok(), at, "{runlist} at {number}");
        if let Ok(n) = i32::try_from(number) {
            assert_eq!(s.index(n).ok(), index, "{runlist} index {number}");
        }
    }
}

#[test]
fn cover_and_holes() {
    init_log();
    for (runlist, cover, holes) in [
        ("-", "-", "-"),
        ("1", "1", "-"),
        ("5", "5", "-"),
        ("1,3,5", "1-5", "2,4"),
        ("1,3-5", "1-5", "2"),
        ("1-3,5,8-11", "1-11", "4,6-7"),
    ] {
        assert_eq!(set(runlist).cover().to_string(), cover, "cover {runlist}");
        assert_eq!(set(runlist).holes().to_string(), holes, "holes {runlist}");
    }
}

#[test]
fn inset() {
    init_log();
    let universal = IntSpan::universal().to_string();
    let neg = format!("{}-0", IntSpan::NEG_INF);
    let pos = format!("0-{}", IntSpan::POS_INF);
    let cases = [
        ("-".to_string(), -2, "-".to_string()),
        ("-".to_string(), 2, "-".to_string()),
        (universal.clone(), -2, universal.clone()),
        (universal.clone(), 2, universal.clone()),
        (neg.clone(), -2, format!("{}-2", IntSpan::NEG_INF)),
        (neg.clone(), 2, format!("{}--2", IntSpan::NEG_INF)),
        (pos.clone(), -2, format!("-2-{}", IntSpan::POS_INF)),
        (pos.clone(), 2, format!("2-{}", IntSpan::POS_INF)),
        // Runs anchored at a sentinel vanish once their finite end crosses it.
        (
            format!("{}-{}", IntSpan::NEG_INF, IntSpan::NEG_INF + 3),
            10,
            "-".to_string(),
        ),
        (
            format!("{}-{}", IntSpan::POS_INF - 3, IntSpan::POS_INF),
            10,
            "-".to_string(),
        ),
        (
            format!("{},{}", IntSpan::NEG_INF, IntSpan::POS_INF),
            1,
            "-".to_string(),
        ),
    ];
    for (runlist, n, expected) in cases {
        assert_eq!(set(&runlist).inset(n).to_string(), expected, "{runlist} inset {n}");
    }

    let base = "0,2-3,6-8,12-15,20-24,30-35";
    for (n, expected) in [
        (-2, "-2-26,28-37"),
        (-1, "-1-9,11-16,19-25,29-36"),
        (0, "0,2-3,6-8,12-15,20-24,30-35"),
        (1, "7,13-14,21-23,31-34"),
        (2, "22,32-33"),
    ] {
        assert_eq!(set(base).inset(n).to_string(), expected, "{base} inset {n}");
    }

    assert_eq!(set("1-3").pad(1).cardinality(), 5);
    assert_eq!(set("1-3").pad(2).cardinality(), 7);
    assert_eq!(set("1-3").trim(1).cardinality(), 1);
    assert_eq!(set("1-3").trim(2).cardinality(), 0);
}

#[test]
fn excise_and_fill() {
    init_log();
    for (runlist, n, excised, filled) in [
        ("1-5", 1, "1-5", "1-5"),
        ("1-5,7", 1, "1-5,7", "1-7"),
        ("1-5,7", 2, "1-5", "1-7"),
        ("1-5,7-8", 1, "1-5,7-8", "1-8"),
        ("1-5,7-8", 3, "1-5", "1-8"),
        ("1-5,7-8", 6, "-", "1-8"),
        ("1-5,7,9-10", 0, "1-5,7,9-10", "1-5,7,9-10"),
        ("1-5,9-10", 2, "1-5,9-10", "1-5,9-10"),
        ("1-5,9-10", 3, "1-5", "1-10"),
        ("1-5,9-10,12-13,15", 2, "1-5,9-10,12-13", "1-5,9-15"),
        ("1-5,9-10,12-13,15", 3, "1-5", "1-15"),
    ] {
        assert_eq!(set(runlist).excise(n).to_string(), excised, "{runlist} excise {n}");
        assert_eq!(set(runlist).fill(n).to_string(), filled, "{runlist} fill {n}");
    }
}

#[test]
fn ranges_and_counts() {
    init_log();
    let s = set("1-3,5,7-9");
    assert_eq!(s.ranges(), vec![(1, 3), (5, 5), (7, 9)]);
    assert_eq!(s.span_len(), 3);
    assert_eq!(s.edge_len(), 6);
    assert_eq!(s.edges().as_slice(), &[1, 4, 5, 6, 7, 10]);
    assert_eq!(IntSpan::from_ranges(s.ranges()).unwrap(), s);
}

#[cfg(feature = "serde")]
#[test]
fn serde_as_runlist() {
    init_log();
    let s = set("-5--2,1-3,5");
    let ron = ron::ser::to_string(&s).unwrap();
    assert_eq!(ron, "\"-5--2,1-3,5\"");
    let back: IntSpan = ron::de::from_str(&ron).unwrap();
    assert_eq!(back, s);
    assert!(ron::de::from_str::<IntSpan>("\"3-1\"").is_err());
}
