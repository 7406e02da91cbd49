//! Domain entities - users, IP history rows and their geo annotations.

mod geo;
mod home;
mod ip_history;
pub mod timestamp;
mod user;

pub use geo::{GeoAnnotation, HOME_COUNTRY};
pub use home::HomeRanges;
pub use ip_history::{IpHistoryRow, IpRowsPayload};
pub use user::User;
