//! bto: orchestrate AFNI, FSL and FreeSurfer tools over MRI datasets.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    Afni2NiftiOptions, AutoboxOptions, BiasCorrOptions, CaptionOptions, DoctorOutcome, DwiMode,
    DwiOptions, DwiOutcome, FovOptions, MotionCorrOptions, ProtocolOptions, ProtocolOutcome,
    ScanOutcome, SkullStripMethod, SkullStripOptions, ToolCheck, WrapOutcome,
};
pub use app::api::{
    afni2nifti, autobox, biascorr, caption, doctor, dwi, fov, motioncorr, protocol, scan,
    skullstrip,
};
pub use domain::AppError;
