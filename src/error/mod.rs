mod cruder;

pub use cruder::CruderError;
pub use cruder_query::DecodeError;
