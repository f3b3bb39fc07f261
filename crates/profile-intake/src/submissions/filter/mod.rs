//! Filter state held by a review session and its transport encoding.

mod state;
pub mod transport;

pub use state::{
    CertificationLevel, CombinationMode, Completeness, FilterOption, FilterState, FilterUpdate,
    SkillLevel, SortKey,
};
pub use transport::{
    decode_filter, decode_query, parse_query_string, to_query_pairs, to_query_string,
    to_request_query, FilterError, PageRequest, SubmissionQuery,
};
