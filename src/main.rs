use std::process;
use log::{error, LevelFilter};

use geokit::commands::{build_cli, CommandFactory, GeokitCommandFactory};
use geokit::utils::config::Settings;
use geokit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let settings = match matches.get_one::<String>("config") {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        settings.log_level
    };

    match &settings.log_file {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => Logger::init_console_logger(level),
    }

    let factory = GeokitCommandFactory::new();

    let command_result = factory.create_command(&matches, &settings);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
