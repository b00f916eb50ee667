//! Tests for the standings table.
//!
//! Ordering is checked on rosters built directly; the stream-fold tests
//! build the same rosters by replaying record changes the way the live page
//! does, so a wire frame and a table row stay two views of one thing.

mod ordering;
mod stream_fold;

use paceline::client::routes::leaderboard::Roster;
use paceline::db::protocol::RecordChange;
use paceline::model::customer::Customer;

/// Replays upserts for the given records into a fresh roster.
pub fn roster_of(records: &[(&str, Customer)]) -> Roster {
    let mut roster = Roster::default();

    for (key, customer) in records {
        roster.apply(&RecordChange::Upserted {
            key: (*key).to_string(),
            value: serde_json::to_value(customer).unwrap(),
        });
    }

    roster
}
