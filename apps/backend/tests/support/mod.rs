#![allow(dead_code)]

pub mod app_builder;

pub use app_builder::create_test_app;
