pub mod proposal;
pub mod result_item;
pub mod status;
