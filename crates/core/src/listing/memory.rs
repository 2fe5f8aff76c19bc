//! In-memory execution of a [`ListingPlan`] over plain structs.
//!
//! Mirrors the SQL rendering in the database crate so the ordering and
//! windowing properties of plans can be checked without Postgres.

use chrono::{Duration, TimeZone, Utc};

use super::params::{ListingParams, SortDirection, SortField};
use super::plan::{build_listing_plan, ListingPlan, Predicate, Scope, Stage};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: DbId,
    owner_id: DbId,
    video_id: Option<DbId>,
    published: bool,
    title: String,
    description: String,
    created_at: Timestamp,
}

fn matches(row: &Row, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Scope(Scope::ParentVideo(id)) => row.video_id == Some(*id),
        Predicate::Scope(Scope::Owner(id)) | Predicate::OwnerEq(id) => row.owner_id == *id,
        Predicate::Scope(Scope::Published) => row.published,
        Predicate::TextContains(text) => {
            let needle = text.to_lowercase();
            row.title.to_lowercase().contains(&needle)
                || row.description.to_lowercase().contains(&needle)
        }
    }
}

fn execute<'a>(plan: &ListingPlan, rows: &'a [Row]) -> Vec<&'a Row> {
    let mut out: Vec<&Row> = rows.iter().collect();
    for stage in plan.stages() {
        match stage {
            Stage::Filter(predicates) => {
                out.retain(|r| predicates.iter().all(|p| matches(r, p)));
            }
            Stage::JoinOwner => {}
            Stage::Sort(sort) => out.sort_by(|a, b| {
                let primary = match sort.field {
                    SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                    SortField::Title => a.title.cmp(&b.title),
                };
                let ord = primary.then(a.id.cmp(&b.id));
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            }),
            Stage::Paginate(page) => {
                out = out
                    .into_iter()
                    .skip(page.offset() as usize)
                    .take(page.limit as usize)
                    .collect();
            }
        }
    }
    out
}

fn base_time() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// 40 rows: owners alternate 1/2, every third title mentions "Rust",
/// every fifth row is unpublished, half belong to video 100.
fn fixture() -> Vec<Row> {
    (1..=40)
        .map(|i| Row {
            id: i,
            owner_id: if i % 2 == 0 { 2 } else { 1 },
            video_id: if i <= 20 { Some(100) } else { Some(200) },
            published: i % 5 != 0,
            title: if i % 3 == 0 {
                format!("Learning RUST part {i}")
            } else {
                format!("Cooking {i}")
            },
            description: if i % 7 == 0 {
                "a rust tangent".to_string()
            } else {
                "misc".to_string()
            },
            created_at: base_time() + Duration::minutes(i),
        })
        .collect()
}

fn params(pairs: &[(&str, &str)]) -> ListingParams {
    ListingParams::from_pairs(pairs.iter().copied())
}

fn ids(rows: &[&Row]) -> Vec<DbId> {
    rows.iter().map(|r| r.id).collect()
}

#[test]
fn owner_and_text_intersect() {
    let rows = fixture();
    let all = params(&[("userId", "1"), ("query", "rust"), ("limit", "100")]);
    let got = execute(&build_listing_plan(&all, None), &rows);

    let expected: Vec<DbId> = {
        let mut v: Vec<&Row> = rows
            .iter()
            .filter(|r| r.owner_id == 1)
            .filter(|r| {
                r.title.to_lowercase().contains("rust")
                    || r.description.to_lowercase().contains("rust")
            })
            .collect();
        v.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        ids(&v)
    };
    assert!(!expected.is_empty());
    assert_eq!(ids(&got), expected);
}

#[test]
fn single_constraint_and_no_constraint() {
    let rows = fixture();

    let owner_only = execute(
        &build_listing_plan(&params(&[("userId", "2"), ("limit", "100")]), None),
        &rows,
    );
    assert_eq!(owner_only.len(), 20);
    assert!(owner_only.iter().all(|r| r.owner_id == 2));

    let none = execute(
        &build_listing_plan(&params(&[("limit", "100")]), Some(Scope::Published)),
        &rows,
    );
    assert_eq!(none.len(), rows.iter().filter(|r| r.published).count());
}

#[test]
fn unknown_sort_field_equals_default() {
    let rows = fixture();
    let unknown = execute(
        &build_listing_plan(&params(&[("sortBy", "views"), ("sortType", "asc")]), None),
        &rows,
    );
    let default = execute(&build_listing_plan(&params(&[]), None), &rows);
    assert_eq!(ids(&unknown), ids(&default));
    assert_eq!(ids(&default), (31..=40).rev().collect::<Vec<_>>());
}

#[test]
fn pages_are_disjoint_and_exhaustive() {
    let rows = fixture();
    let scope = Some(Scope::Published);
    let all = params(&[("sortBy", "title"), ("sortType", "asc"), ("limit", "1000")]);
    let full = execute(&build_listing_plan(&all, scope), &rows);

    for limit in 1..=(full.len() + 3) {
        let mut concatenated = Vec::new();
        let pages = full.len().div_ceil(limit);
        for page in 1..=pages + 1 {
            let p = params(&[
                ("sortBy", "title"),
                ("sortType", "asc"),
                ("page", page.to_string().as_str()),
                ("limit", limit.to_string().as_str()),
            ]);
            let window = execute(&build_listing_plan(&p, scope), &rows);
            if page > pages {
                assert!(window.is_empty(), "page past the end must be empty");
            }
            concatenated.extend(ids(&window));
        }
        assert_eq!(concatenated, ids(&full), "limit {limit}");
    }
}

#[test]
fn third_page_of_twenty_five() {
    let rows: Vec<Row> = fixture().into_iter().take(25).collect();
    let got = execute(
        &build_listing_plan(&params(&[("page", "3"), ("limit", "10")]), None),
        &rows,
    );
    // Newest first: rank 21..25 are ids 5..1.
    assert_eq!(ids(&got), vec![5, 4, 3, 2, 1]);
}

#[test]
fn empty_match_is_empty_sequence() {
    let rows = fixture();
    let got = execute(
        &build_listing_plan(&params(&[("query", "no such title")]), None),
        &rows,
    );
    assert!(got.is_empty());
}

#[test]
fn scope_cannot_be_widened_by_owner_filter() {
    let rows = fixture();
    let p = params(&[("userId", "2"), ("limit", "100")]);
    let got = execute(&build_listing_plan(&p, Some(Scope::Owner(1))), &rows);
    assert!(got.is_empty());
}

#[test]
fn descending_ties_break_on_id() {
    let mut rows = fixture();
    for r in &mut rows {
        r.created_at = base_time();
    }
    let got = execute(&build_listing_plan(&params(&[("limit", "3")]), None), &rows);
    assert_eq!(ids(&got), vec![40, 39, 38]);
}
