use clap::Command as ClapCommand;
use std::process;
use log::error;

// Import from your library
use coordkit::utils::logger::Logger;
use coordkit::commands::{CommandFactory, CoordkitCommandFactory};

fn main() {
    // No coordinate arguments: the binary performs a fixed projection.
    // clap still provides --help and --version.
    let matches = ClapCommand::new("CoordKit")
        .version("0.1")
        .about("Transform coordinates between EPSG reference systems")
        .get_matches();

    let log_file = "coordkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("coordkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CoordkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
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
