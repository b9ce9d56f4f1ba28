pub(crate) mod panels;
pub(crate) mod placement;
