pub mod client;
pub mod error;
pub mod page;

pub use client::{MenuClient, PageSource};
pub use error::FetchError;
pub use page::{Menu, PageEnvelope, Pagination};
