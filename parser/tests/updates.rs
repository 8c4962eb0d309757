extern crate parser;

use std::collections::HashSet;

mod common;

use common::{fixtures, flame_scans_with, init_logger, utc, MockFetcher};

const PAGE_1: &str = "https://flamescans.org/page/1/";
const PAGE_2: &str = "https://flamescans.org/page/2/";
const PAGE_3: &str = "https://flamescans.org/page/3/";

fn watch(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[tokio::test]
async fn reports_watched_manga_updated_since_the_cutoff() {
    init_logger();
    let (source, fetcher) = flame_scans_with(
        MockFetcher::new()
            .page(
                PAGE_1,
                &fixtures::update_feed(&[
                    ("this-is-the-law", 3, "April 28, 2021"),
                    ("omniscient-reader", 120, "April 27, 2021"),
                    ("the-law-of-life", 7, "April 26, 2021"),
                ]),
            )
            .page(
                PAGE_2,
                &fixtures::update_feed(&[
                    ("this-is-the-law", 2, "April 19, 2021"),
                    ("fresh-start", 1, "April 15, 2021"),
                ]),
            ),
    );

    let updated = source
        .filter_updated_manga_at(
            utc(2021, 4, 20),
            &watch(&["this-is-the-law", "fresh-start"]),
            utc(2021, 5, 1),
        )
        .await
        .unwrap();

    assert_eq!(fetcher.requests(), vec![PAGE_1, PAGE_2]);
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].manga_id, "this-is-the-law");
    assert_eq!(updated[0].chapter_id.as_deref(), Some("this-is-the-law-chapter-3"));
    assert_eq!(updated[0].chapter_number, 3.0);
    assert_eq!(updated[0].updated, utc(2021, 4, 28));
}

#[tokio::test]
async fn first_page_older_than_the_cutoff_stops_the_walk() {
    init_logger();
    let (source, fetcher) = flame_scans_with(
        MockFetcher::new()
            .page(
                PAGE_1,
                &fixtures::update_feed(&[
                    ("this-is-the-law", 3, "April 18, 2021"),
                    ("omniscient-reader", 120, "April 17, 2021"),
                ]),
            )
            .fallback(&fixtures::update_feed(&[("this-is-the-law", 1, "April 10, 2021")])),
    );

    let updated = source
        .filter_updated_manga_at(utc(2021, 4, 20), &watch(&["this-is-the-law"]), utc(2021, 5, 1))
        .await
        .unwrap();

    assert!(updated.is_empty());
    assert_eq!(fetcher.requests(), vec![PAGE_1]);
}

#[tokio::test]
async fn newest_entry_per_manga_wins() {
    init_logger();
    let (source, _) = flame_scans_with(
        MockFetcher::new()
            .page(
                PAGE_1,
                &fixtures::update_feed(&[
                    ("omniscient-reader", 121, "April 29, 2021"),
                    ("this-is-the-law", 4, "April 28, 2021"),
                ]),
            )
            .page(
                PAGE_2,
                &fixtures::update_feed(&[
                    ("omniscient-reader", 120, "April 22, 2021"),
                    ("this-is-the-law", 3, "April 21, 2021"),
                ]),
            )
            .page(PAGE_3, fixtures::EMPTY_LISTING),
    );

    let updated = source
        .filter_updated_manga_at(
            utc(2021, 4, 20),
            &watch(&["this-is-the-law", "omniscient-reader"]),
            utc(2021, 5, 1),
        )
        .await
        .unwrap();

    let found: Vec<_> = updated
        .iter()
        .map(|entry| (entry.manga_id.as_str(), entry.chapter_number))
        .collect();
    assert_eq!(found, vec![("omniscient-reader", 121.0), ("this-is-the-law", 4.0)]);
}

#[tokio::test]
async fn walk_ends_at_the_lookback_window() {
    init_logger();
    let (source, fetcher) = flame_scans_with(
        MockFetcher::new()
            .page(
                PAGE_1,
                &fixtures::update_feed(&[
                    ("omniscient-reader", 121, "April 29, 2021"),
                    ("the-law-of-life", 7, "April 20, 2021"),
                ]),
            )
            .page(
                PAGE_2,
                &fixtures::update_feed(&[
                    ("fresh-start", 2, "April 10, 2021"),
                    ("this-is-the-law", 1, "March 20, 2021"),
                ]),
            )
            .page(
                PAGE_3,
                &fixtures::update_feed(&[("this-is-the-law", 0, "March 1, 2021")]),
            ),
    );

    let updated = source
        .filter_updated_manga_at(
            utc(2021, 1, 1),
            &watch(&["this-is-the-law", "fresh-start"]),
            utc(2021, 5, 1),
        )
        .await
        .unwrap();

    assert_eq!(fetcher.requests(), vec![PAGE_1, PAGE_2]);
    let ids: Vec<_> = updated.iter().map(|entry| entry.manga_id.as_str()).collect();
    assert_eq!(ids, vec!["fresh-start", "this-is-the-law"]);
}

#[tokio::test]
async fn undated_rows_are_skipped() {
    init_logger();
    let (source, _) = flame_scans_with(
        MockFetcher::new()
            .page(
                PAGE_1,
                &fixtures::update_feed(&[
                    ("this-is-the-law", 3, "soon"),
                    ("omniscient-reader", 120, "April 27, 2021"),
                ]),
            )
            .page(PAGE_2, fixtures::EMPTY_LISTING),
    );

    let updated = source
        .filter_updated_manga_at(utc(2021, 4, 20), &watch(&["this-is-the-law"]), utc(2021, 5, 1))
        .await
        .unwrap();

    assert!(updated.is_empty());
}

#[tokio::test]
async fn empty_watch_set_fetches_nothing() {
    init_logger();
    let (source, fetcher) = flame_scans_with(MockFetcher::new());

    let updated = source
        .filter_updated_manga_at(utc(2021, 4, 20), &HashSet::new(), utc(2021, 5, 1))
        .await
        .unwrap();

    assert!(updated.is_empty());
    assert!(fetcher.requests().is_empty());
}

#[tokio::test]
async fn feed_errors_propagate() {
    init_logger();
    let (source, _) = flame_scans_with(MockFetcher::new());

    let updated = source
        .filter_updated_manga_at(utc(2021, 4, 20), &watch(&["this-is-the-law"]), utc(2021, 5, 1))
        .await;

    assert!(matches!(
        updated,
        Err(parser::parse_error::ParseError::NetworkError(404))
    ));
}
