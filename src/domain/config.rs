//! Configuration domain models loaded from `bto.toml`.

use serde::Deserialize;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "bto.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BtoConfig {
    /// DWI pipeline settings.
    #[serde(default)]
    pub dwi: DwiSettings,
    /// EDDY command settings.
    #[serde(default)]
    pub eddy: EddySettings,
}

/// DWI pipeline settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DwiSettings {
    /// Acquisition label used in derivative file names (`acq-<label>`).
    #[serde(default = "default_acq_label")]
    pub acq_label: String,
    /// File name of the TOPUP configuration written per session.
    #[serde(default = "default_topup_config_name")]
    pub topup_config_name: String,
    /// TOPUP thread count; defaults to the available parallelism.
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for DwiSettings {
    fn default() -> Self {
        Self {
            acq_label: default_acq_label(),
            topup_config_name: default_topup_config_name(),
            threads: None,
        }
    }
}

fn default_acq_label() -> String {
    "EP2D".to_string()
}

fn default_topup_config_name() -> String {
    "bto_dwi_sk25.cnf".to_string()
}

/// EDDY command settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EddySettings {
    /// Binary name under `${FSLDIR}/bin`.
    #[serde(default = "default_eddy_binary")]
    pub binary: String,
    /// Temporal order of the slice-to-volume movement model.
    #[serde(default = "default_mporder")]
    pub mporder: u32,
    /// Slice-to-volume iterations.
    #[serde(default = "default_s2v_niter")]
    pub s2v_niter: u32,
    /// Main iterations.
    #[serde(default = "default_niter")]
    pub niter: u32,
    /// Outlier threshold in standard deviations.
    #[serde(default = "default_ol_nstd")]
    pub ol_nstd: u32,
}

impl Default for EddySettings {
    fn default() -> Self {
        Self {
            binary: default_eddy_binary(),
            mporder: default_mporder(),
            s2v_niter: default_s2v_niter(),
            niter: default_niter(),
            ol_nstd: default_ol_nstd(),
        }
    }
}

fn default_eddy_binary() -> String {
    "eddy_cuda".to_string()
}

fn default_mporder() -> u32 {
    10
}

fn default_s2v_niter() -> u32 {
    5
}

fn default_niter() -> u32 {
    10
}

fn default_ol_nstd() -> u32 {
    5
}
