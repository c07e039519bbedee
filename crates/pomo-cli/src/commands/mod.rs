pub mod audit;
pub mod cancel;
pub mod dispatch;
pub mod get;
pub mod list;
pub mod log;
pub mod run;
pub mod schema;
pub mod serve;
pub mod shared;
pub mod start;
