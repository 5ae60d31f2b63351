pub mod bearer;
pub mod validated_json;

pub use bearer::VerifiedClaims;
pub use validated_json::{JsonBodyLimit, ValidatedJson};
