pub mod editor;
pub mod workspace;
