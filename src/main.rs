use clap::Parser;
use import_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - the command has already narrated its outcome
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Import Processor - Delimited Record Validator");
    println!("=============================================");
    println!();
    println!("Validate and summarize comma-delimited tabular records into a");
    println!("structured report of successes, errors, and category totals.");
    println!();
    println!("USAGE:");
    println!("    import-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Import one source file with a selected profile");
    println!("    demo        Regenerate the bundled sample files and import them all");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Import a class roster file:");
    println!("    import-processor import --input alunos.csv --profile roster");
    println!();
    println!("    # Import a product catalog with an explicit report path:");
    println!("    import-processor import -i produtos.csv -p catalog -o catalog-report.json");
    println!();
    println!("    # Generate the sample files and run both importers:");
    println!("    import-processor demo --output demo-output");
    println!();
    println!("For detailed help on any command, use:");
    println!("    import-processor <COMMAND> --help");
}
