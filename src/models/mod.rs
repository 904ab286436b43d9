pub mod bids;
pub mod conversations;
pub mod gigs;
pub mod messages;
pub mod orders;
pub mod user_reviews;
pub mod users;
