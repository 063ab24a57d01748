//! Services connecting the pipeline to the outside world.

pub mod extract;
pub mod fetch;
pub mod notify;

pub use extract::extract_postings;
pub use fetch::{create_client, fetch_page};
pub use notify::{Delivery, send_alert};
