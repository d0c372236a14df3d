pub mod config_helper;
pub mod pagination;
pub mod paths;
pub mod system_clock;
pub mod validation;
