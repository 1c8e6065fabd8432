mod client;
mod table;

pub use client::{QueryClient, QueryError, TranslatedWord};
pub use table::TableQuery;
