// Export UI components
pub mod drag_drop;
pub mod drop_zone;
pub mod field_palette;
pub mod main;
