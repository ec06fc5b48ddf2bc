pub mod dates;
pub mod normalize;
pub mod values;

pub use dates::parse_date;
pub use normalize::normalize;
pub use values::{canonical_country, capitalize, is_valid_email, median, sanitize_income};
