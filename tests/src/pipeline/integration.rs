#![cfg(test)]
use std::io::Cursor;

use ipfilter_common::network::address::Address;
use ipfilter_core::pipeline::{self, PipelineError, Summary};
use ipfilter_core::view::{self, View};

const FIXTURE: &str = include_str!("../../data/ip_filter.tsv");

const SORTED: &[&str] = &[
    "222.173.235.246",
    "222.130.177.64",
    "222.82.198.61",
    "219.102.120.135",
    "186.204.34.46",
    "186.46.222.194",
    "185.46.87.231",
    "185.46.86.132",
    "185.46.86.131",
    "185.46.86.131",
    "185.46.86.22",
    "185.46.85.204",
    "185.46.85.78",
    "179.210.145.4",
    "157.39.22.224",
    "113.162.145.156",
    "100.0.0.0",
    "85.254.10.197",
    "79.180.73.190",
    "68.46.218.208",
    "67.232.81.208",
    "46.251.197.23",
    "46.223.254.56",
    "46.223.254.56",
    "46.182.19.219",
    "46.161.63.66",
    "46.161.61.51",
    "46.161.60.92",
    "46.161.60.35",
    "46.161.58.202",
    "46.161.56.241",
    "46.161.56.203",
    "46.161.56.174",
    "46.161.56.106",
    "46.161.56.106",
    "46.101.163.119",
    "46.101.127.145",
    "46.70.225.39",
    "46.70.147.26",
    "46.70.113.73",
    "46.70.29.76",
    "46.55.46.98",
    "46.49.43.85",
    "39.46.86.85",
    "23.240.215.189",
    "5.189.203.46",
    "1.231.69.33",
    "1.87.203.225",
    "1.70.44.170",
    "1.29.168.152",
    "1.1.234.8",
];

const FIRST_OCTET_1: &[&str] = &[
    "1.231.69.33",
    "1.87.203.225",
    "1.70.44.170",
    "1.29.168.152",
    "1.1.234.8",
];

const PREFIX_46_70: &[&str] = &["46.70.225.39", "46.70.147.26", "46.70.113.73", "46.70.29.76"];

const ANY_46: &[&str] = &[
    "186.204.34.46",
    "186.46.222.194",
    "185.46.87.231",
    "185.46.86.132",
    "185.46.86.131",
    "185.46.86.131",
    "185.46.86.22",
    "185.46.85.204",
    "185.46.85.78",
    "68.46.218.208",
    "46.251.197.23",
    "46.223.254.56",
    "46.223.254.56",
    "46.182.19.219",
    "46.161.63.66",
    "46.161.61.51",
    "46.161.60.92",
    "46.161.60.35",
    "46.161.58.202",
    "46.161.56.241",
    "46.161.56.203",
    "46.161.56.174",
    "46.161.56.106",
    "46.161.56.106",
    "46.101.163.119",
    "46.101.127.145",
    "46.70.225.39",
    "46.70.147.26",
    "46.70.113.73",
    "46.70.29.76",
    "46.55.46.98",
    "46.49.43.85",
    "39.46.86.85",
    "5.189.203.46",
];

fn run_views(input: &str, views: &[View]) -> anyhow::Result<(Vec<String>, Summary)> {
    let mut out: Vec<u8> = Vec::new();
    let summary = pipeline::run(Cursor::new(input), &mut out, views)?;
    let lines: Vec<String> = String::from_utf8(out)?
        .lines()
        .map(str::to_string)
        .collect();
    Ok((lines, summary))
}

#[test]
fn fixture_default_views_in_order() {
    let (lines, summary) = run_views(FIXTURE, &view::default_views()).unwrap();

    let expected: Vec<&str> = [SORTED, FIRST_OCTET_1, PREFIX_46_70, ANY_46].concat();
    assert_eq!(lines, expected);

    assert_eq!(summary.total, SORTED.len());
    let counts: Vec<usize> = summary.matched.iter().map(|(_, n)| *n).collect();
    assert_eq!(
        counts,
        vec![SORTED.len(), FIRST_OCTET_1.len(), PREFIX_46_70.len(), ANY_46.len()]
    );
}

#[test]
fn fixture_each_view_alone() {
    let cases: [(View, &[&str]); 4] = [
        (View::All, SORTED),
        (View::Prefix(vec![1]), FIRST_OCTET_1),
        (View::Prefix(vec![46, 70]), PREFIX_46_70),
        (View::Any(46), ANY_46),
    ];

    for (view, expected) in cases {
        let (lines, _) = run_views(FIXTURE, std::slice::from_ref(&view)).unwrap();
        assert_eq!(lines, expected, "view: {view}");
    }
}

#[test]
fn fixture_ingest_then_sort_matches_sorted_list() {
    let mut pool: Vec<Address> = pipeline::ingest(Cursor::new(FIXTURE)).unwrap();
    assert_eq!(pool.len(), SORTED.len());

    pipeline::sort_descending(&mut pool);
    let rendered: Vec<String> = pool.iter().map(Address::render).collect();
    assert_eq!(rendered, SORTED);
}

#[test]
fn malformed_line_aborts_whole_run() {
    let mut input = FIXTURE.to_string();
    input.push_str("10.0.0.1.5\thost\t0\n");
    input.push_str("10.0.0.2\thost\t0\n");

    let err = run_views(&input, &view::default_views()).unwrap_err();
    let err = err.downcast::<PipelineError>().unwrap();
    match err {
        PipelineError::Line { line, .. } => assert_eq!(line, SORTED.len() + 1),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn input_without_tabs_is_read_whole() {
    let (lines, _) = run_views("10.0.0.1\n10.0.0.3\n10.0.0.2", &[View::All]).unwrap();
    assert_eq!(lines, vec!["10.0.0.3", "10.0.0.2", "10.0.0.1"]);
}
