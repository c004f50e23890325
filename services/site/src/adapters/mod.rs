pub mod db;
pub mod markdown;

pub use db::PgSummaryStore;
pub use markdown::CmarkRenderer;
