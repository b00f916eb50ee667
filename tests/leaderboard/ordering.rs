use paceline::client::routes::leaderboard::{format_finish_time, matches_query};

use crate::util::{finisher, runner};

use super::roster_of;

#[test]
fn finishers_rank_above_everyone_still_on_course() {
    let roster = roster_of(&[
        ("a", runner("Ada Okafor", "Aurora Bay")),
        ("b", finisher("Ben Ilsted", "Port Meridian", 2 * 3600)),
    ]);

    let names: Vec<String> = roster
        .standings()
        .into_iter()
        .map(|standing| standing.customer.name)
        .collect();

    assert_eq!(names, vec!["Ben Ilsted", "Ada Okafor"]);
}

#[test]
fn finishers_sort_fastest_first_and_the_rest_alphabetically() {
    let roster = roster_of(&[
        ("a", runner("Zadie Okonkwo", "Aurora Bay")),
        ("b", runner("Ada Okafor", "Aurora Bay")),
        ("c", finisher("Slowpoke Sal", "Port Meridian", 5400)),
        ("d", finisher("Fast Freya", "Port Meridian", 4800)),
    ]);

    let names: Vec<String> = roster
        .standings()
        .into_iter()
        .map(|standing| standing.customer.name)
        .collect();

    assert_eq!(
        names,
        vec!["Fast Freya", "Slowpoke Sal", "Ada Okafor", "Zadie Okonkwo"]
    );
}

#[test]
// Alphabetical means case-insensitive: a lowercase-styled name must not
// sink below every capitalized one, in the finisher tie-break or in the
// on-course block
fn alphabetical_order_ignores_name_casing() {
    let roster = roster_of(&[
        ("a", runner("Zadie Okonkwo", "Aurora Bay")),
        ("b", runner("ada okafor", "Aurora Bay")),
        ("c", finisher("Cleo Marsh", "Aurora Bay", 1200)),
        ("d", finisher("ben ilsted", "Port Meridian", 1200)),
    ]);

    let names: Vec<String> = roster
        .standings()
        .into_iter()
        .map(|standing| standing.customer.name)
        .collect();

    assert_eq!(
        names,
        vec!["ben ilsted", "Cleo Marsh", "ada okafor", "Zadie Okonkwo"]
    );
}

#[test]
// Competition ranking: a tie shares the place and the next distinct time
// resumes at its ordinal
fn tied_times_share_a_place_and_skip_the_next() {
    let roster = roster_of(&[
        ("a", finisher("Ada Okafor", "Aurora Bay", 1200)),
        ("b", finisher("Ben Ilsted", "Port Meridian", 1200)),
        ("c", finisher("Cleo Marsh", "Aurora Bay", 1300)),
        ("d", runner("Dev Anand", "Port Meridian")),
    ]);

    let places: Vec<Option<u32>> = roster
        .standings()
        .into_iter()
        .map(|standing| standing.place)
        .collect();

    assert_eq!(places, vec![Some(1), Some(1), Some(3), None]);
}

#[test]
fn an_empty_roster_produces_no_standings() {
    let roster = roster_of(&[]);

    assert!(roster.is_empty());
    assert!(roster.standings().is_empty());
}

#[test]
fn finish_times_render_with_and_without_the_hour() {
    assert_eq!(format_finish_time(4800), "1:20:00");
    assert_eq!(format_finish_time(1205), "20:05");
    assert_eq!(format_finish_time(59), "0:59");
}

#[test]
fn search_narrows_by_name_location_or_exact_bib() {
    let mut ada = runner("Ada Okafor", "Aurora Bay");
    ada.bib = Some(101);

    assert!(matches_query(&ada, "  ada "));
    assert!(matches_query(&ada, "AURORA"));
    assert!(matches_query(&ada, "101"));
    assert!(!matches_query(&ada, "10"));
    assert!(!matches_query(&ada, "meridian"));
}
