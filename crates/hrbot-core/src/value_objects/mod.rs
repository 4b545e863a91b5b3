//! Value objects - immutable types that represent domain concepts

mod blacklist_query;
mod snowflake;
mod timestamps;

pub use blacklist_query::{BlacklistQuery, KeyKind, MATCH_PRIORITY};
pub use snowflake::{Snowflake, SnowflakeParseError};
pub use timestamps::{
    format_added_at, format_audit_date, local_now, parse_added_at, parse_audit_date,
    AUDIT_DATE_FORMAT, BLACKLIST_ADDED_AT_FORMAT,
};
