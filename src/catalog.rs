//! Catalog Utilities
//!
//! Search, ordering and lookup over the fetched destination list.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{Destination, Place};

/// Districts that always lead the listing
pub const TRENDING_DISTRICTS: &[&str] = &["Chennai", "Coimbatore", "Madurai", "Tiruchirappalli", "Salem"];

/// Group label for destinations without a region
pub const UNKNOWN_REGION: &str = "Other";

pub fn is_trending(name: &str) -> bool {
    TRENDING_DISTRICTS.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/// Case-insensitive substring match on the destination name.
/// An empty term keeps everything.
pub fn filter_by_search<'a>(destinations: &'a [Destination], term: &str) -> Vec<&'a Destination> {
    if term.is_empty() {
        return destinations.iter().collect();
    }
    let needle = term.to_lowercase();
    destinations
        .iter()
        .filter(|d| d.name.to_lowercase().contains(&needle))
        .collect()
}

/// Trending first, then alphabetical by name
fn compare_for_listing(a: &Destination, b: &Destination) -> Ordering {
    is_trending(&b.name)
        .cmp(&is_trending(&a.name))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Stable sort placing trending districts ahead of the rest
pub fn sort_trending(destinations: &mut [&Destination]) {
    destinations.sort_by(|a, b| compare_for_listing(a, b));
}

/// Filtered and ordered copy of the list, ready to render
pub fn display_list(destinations: &[Destination], term: &str) -> Vec<Destination> {
    let mut visible = filter_by_search(destinations, term);
    sort_trending(&mut visible);
    visible.into_iter().cloned().collect()
}

/// Group an already ordered list by region, regions in alphabetical order.
/// Order inside each group is preserved.
pub fn group_by_region(destinations: &[Destination]) -> Vec<(String, Vec<Destination>)> {
    let mut groups: BTreeMap<String, Vec<Destination>> = BTreeMap::new();
    for dest in destinations {
        let region = dest.region.trim();
        let key = if region.is_empty() { UNKNOWN_REGION } else { region };
        groups.entry(key.to_string()).or_default().push(dest.clone());
    }
    groups.into_iter().collect()
}

/// Find a district by case-insensitive name
pub fn find_district<'a>(destinations: &'a [Destination], key: &str) -> Option<&'a Destination> {
    let key = key.to_lowercase();
    destinations.iter().find(|d| d.name.to_lowercase() == key)
}

/// Outcome of a place lookup inside one district
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceLookup<'a> {
    Unique(&'a Place),
    /// More than one place carries the name; `first` is the popular-then-hidden first hit
    Duplicated { first: &'a Place, count: usize },
    NotFound,
}

/// Find a place across popular and hidden lists, trimmed and case-insensitive
pub fn find_place<'a>(district: &'a Destination, name: &str) -> PlaceLookup<'a> {
    let wanted = name.trim().to_lowercase();
    let mut matches = district
        .all_places()
        .filter(|p| p.name.trim().to_lowercase() == wanted);

    match matches.next() {
        None => PlaceLookup::NotFound,
        Some(first) => match matches.count() {
            0 => PlaceLookup::Unique(first),
            extra => PlaceLookup::Duplicated { first, count: extra + 1 },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(name: &str, region: &str) -> Destination {
        Destination {
            id: Some(name.to_string()),
            name: name.to_string(),
            region: region.to_string(),
            ..Default::default()
        }
    }

    fn place(name: &str) -> Place {
        Place { name: name.to_string(), description: format!("About {}", name), image: String::new() }
    }

    fn sample() -> Vec<Destination> {
        vec![
            dest("Ooty", "West"),
            dest("Salem", "West"),
            dest("Chennai", "North"),
            dest("Kanyakumari", "South"),
            dest("Madurai", "South"),
            dest("Erode", ""),
        ]
    }

    fn names(list: &[Destination]) -> Vec<&str> {
        list.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let all = sample();
        assert_eq!(filter_by_search(&all, "").len(), all.len());
        assert_eq!(display_list(&all, "").len(), all.len());
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let all = sample();
        let hits: Vec<_> = filter_by_search(&all, "AI").iter().map(|d| d.name.as_str()).collect();
        assert_eq!(hits, ["Chennai", "Madurai"]);

        let hits = filter_by_search(&all, "kumar");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Kanyakumari");

        assert!(filter_by_search(&all, "Vellore").is_empty());
    }

    #[test]
    fn test_filter_result_is_exact_subset() {
        let all = sample();
        for term in ["", "e", "O", "ur", "zz"] {
            let hits = filter_by_search(&all, term);
            let expected = all
                .iter()
                .filter(|d| d.name.to_lowercase().contains(&term.to_lowercase()))
                .count();
            assert_eq!(hits.len(), expected, "term {:?}", term);
        }
    }

    #[test]
    fn test_trending_sorts_first_then_alphabetical() {
        let list = display_list(&sample(), "");
        assert_eq!(names(&list), ["Chennai", "Madurai", "Salem", "Erode", "Kanyakumari", "Ooty"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let mut a = dest("Vellore", "North");
        a.description = "first".into();
        let mut b = dest("Vellore", "North");
        b.description = "second".into();
        let all = vec![a, dest("Chennai", "North"), b];

        let list = display_list(&all, "");
        assert_eq!(list[0].name, "Chennai");
        assert_eq!(list[1].description, "first");
        assert_eq!(list[2].description, "second");
    }

    #[test]
    fn test_alphabetical_ignores_case() {
        let all = vec![dest("vellore", ""), dest("Ariyalur", ""), dest("Theni", "")];
        assert_eq!(names(&display_list(&all, "")), ["Ariyalur", "Theni", "vellore"]);
    }

    #[test]
    fn test_group_by_region() {
        let list = display_list(&sample(), "");
        let groups = group_by_region(&list);
        let regions: Vec<_> = groups.iter().map(|(r, _)| r.as_str()).collect();
        assert_eq!(regions, ["North", "Other", "South", "West"]);

        let west = &groups[3].1;
        assert_eq!(names(west), ["Salem", "Ooty"]);
    }

    #[test]
    fn test_find_district_case_insensitive() {
        let all = sample();
        assert_eq!(find_district(&all, "chennai").map(|d| d.name.as_str()), Some("Chennai"));
        assert_eq!(find_district(&all, "MADURAI").map(|d| d.name.as_str()), Some("Madurai"));
        assert!(find_district(&all, "Atlantis").is_none());
    }

    #[test]
    fn test_find_place_matches_across_lists() {
        let mut chennai = dest("Chennai", "North");
        chennai.popular_places = vec![place("Marina Beach"), place("Fort St. George")];
        chennai.hidden_places = vec![place("Cholamandal Artists' Village")];
        let all = vec![chennai];

        let district = find_district(&all, "chennai").unwrap();
        match find_place(district, "MARINA BEACH") {
            PlaceLookup::Unique(p) => assert_eq!(p.name, "Marina Beach"),
            other => panic!("unexpected lookup: {:?}", other),
        }
        assert!(matches!(
            find_place(district, "  cholamandal artists' village "),
            PlaceLookup::Unique(_)
        ));
        assert_eq!(find_place(district, "Elliot's Beach"), PlaceLookup::NotFound);
    }

    #[test]
    fn test_find_place_flags_duplicates() {
        let mut madurai = dest("Madurai", "South");
        madurai.popular_places = vec![place("Teppakulam")];
        madurai.hidden_places = vec![Place { name: "teppakulam ".into(), description: "hidden".into(), image: String::new() }];

        match find_place(&madurai, "Teppakulam") {
            PlaceLookup::Duplicated { first, count } => {
                assert_eq!(count, 2);
                assert_eq!(first.description, "About Teppakulam");
            }
            other => panic!("expected duplicate, got {:?}", other),
        }
    }

    #[test]
    fn test_find_place_in_empty_district() {
        let empty = dest("Ariyalur", "");
        assert_eq!(find_place(&empty, "anything"), PlaceLookup::NotFound);
    }
}
