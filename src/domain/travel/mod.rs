//! Business travel domain — travel approval forms.

pub mod client;
