pub mod app;
pub mod credentials_file;

pub use app::Config;
pub use credentials_file::load_credentials_file;
