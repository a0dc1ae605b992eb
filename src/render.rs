pub(crate) mod blur;
pub(crate) mod compositor;
pub(crate) mod encode;
pub(crate) mod layers;
pub(crate) mod progress;
pub(crate) mod raster;
