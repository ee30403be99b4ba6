pub mod buddy_sidebar;
pub mod editor_area;
pub mod essay_view;
pub mod lesson_list;
pub mod lesson_view;
pub mod menu;
pub mod tutorial;
