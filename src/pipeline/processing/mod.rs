// Pure processing stages: keyword filter, university matching, ranking

pub mod filter;
pub mod matcher;
pub mod ranker;

pub use filter::{filter_candidates, is_institution, FilterOutput};
pub use matcher::{match_candidates, UniversityIndex};
pub use ranker::{rank_matches, RankOutput};
