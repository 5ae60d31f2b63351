pub mod login;

pub use login::{login, LoginStage, LoginSuccess};
