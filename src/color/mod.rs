pub mod colormap;
pub mod scale;
