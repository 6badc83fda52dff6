mod payload;
pub use self::payload::{Payload, Record};

mod outcome;
pub use self::outcome::Outcome;
