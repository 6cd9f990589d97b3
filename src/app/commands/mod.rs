pub mod bids_walk;
pub mod doctor;
pub mod dwi;
pub mod protocol;
pub mod scan;
pub mod wrap;
