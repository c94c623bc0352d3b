pub mod batch;
pub mod design;
pub mod response;
