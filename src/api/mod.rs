pub mod client;
pub mod limiter;
pub mod lol;
pub mod metrics;
pub mod traits;

pub use client::ApiClient;
pub use limiter::{DirectLimiter, LimiterRegistry};
pub use metrics::{MetricsSnapshot, RequestMetrics};
pub use lol::{LeagueApi, LolApiClient, LolApiFull, MatchApi, SummonerApi};
pub use traits::ApiRequest;
