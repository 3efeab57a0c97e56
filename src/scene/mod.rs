pub(crate) mod bars;
pub(crate) mod color;
pub(crate) mod float;
pub(crate) mod frame;
pub(crate) mod hero;
pub(crate) mod hover;
pub(crate) mod model;
pub(crate) mod motion;
pub(crate) mod particles;
