//! Command-line front-end

mod commands;

pub use commands::{
    cmd_compile, cmd_deploy, cmd_history, cmd_network, cmd_save, cmd_serve, AppContext, CliResult,
};
