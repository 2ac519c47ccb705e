pub mod brush;
pub mod drawing_surface;
pub mod sketch;
