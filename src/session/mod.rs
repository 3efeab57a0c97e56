pub(crate) mod boot;
pub(crate) mod config;
pub(crate) mod fingerprint;
pub(crate) mod motion_session;
