#![allow(dead_code)]

pub mod factories;
pub mod fakes;

/// Route library logs through env_logger; safe to call from every test
pub fn init_logging() {
    template_manager::shared::utils::init_logger();
}
