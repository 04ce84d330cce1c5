pub mod ballistics;
pub mod export;
pub mod plot;
pub mod window;
