pub mod annotate;
pub mod camera;
pub mod composite;
pub mod contour;
pub mod frame;
pub mod plot2d;
pub mod raster;
pub mod surface;
