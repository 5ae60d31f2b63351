mod cors;
mod error_shape;
mod health;
mod security_headers;
