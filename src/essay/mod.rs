pub mod annotation;
pub mod browser;
pub mod compare;
pub mod example;
