mod context;
mod feed;
mod filter;
mod history;
mod ranker;
mod score;
mod service;
mod settings;
mod source;
mod store;

pub use context::*;
pub use feed::*;
pub use filter::*;
pub use history::*;
pub use ranker::*;
pub use score::*;
pub use service::*;
pub use settings::*;
pub use source::*;
pub use store::*;
