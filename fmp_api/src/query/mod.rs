mod common;
pub use self::common::{format_date, Query, QueryCommon};

mod params;
pub use self::params::Params;
