pub mod configure_vscode;
pub mod init_samples;
pub mod install;
pub mod profiles;
pub mod setup;
