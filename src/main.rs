// pjgen - Python project generator
// Main CLI entry point

use clap::Parser;
use std::process;
use pjgen::cli::{Cli, CliDispatcher};
use pjgen::utils::error::UserError;

fn main() {
    let cli = Cli::parse();

    let result = CliDispatcher::run(cli);

    if let Err(err) = result {
        let user_error = UserError::from_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
