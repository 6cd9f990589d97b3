mod command_templates;

pub use command_templates::{
    EddyCommand, SynthstripCommand, TmeanCommand, TopupCommand, topup_config,
};
