//! Stdhl CLI
//!
//! Multi-radix numeral conversion from the command line.

use stdhlc::commands::{self, CommandError};
use stdhlc::{init_tracing, CodecOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();

    match command {
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("stdhl {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            let result = CodecOptions::from_process_env()
                .map_err(CommandError::from)
                .and_then(|options| commands::run(command, &args[2..], options));

            match result {
                Ok(output) => println!("{output}"),
                Err(CommandError::UnknownCommand(name)) => {
                    eprintln!("Unknown command: {name}");
                    eprintln!();
                    print_usage();
                    std::process::exit(1);
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    if let Some(usage) = commands::usage(command).filter(|_| err.is_usage()) {
                        eprintln!("Usage: {usage}");
                    }
                    std::process::exit(1);
                }
            }
        }
    }
}

fn print_usage() {
    println!("Stdhl numeral converter");
    println!();
    println!("Usage: stdhl <command> [options]");
    println!();
    println!("Commands:");
    println!("  encode <integer>    Write a decimal integer in another radix");
    println!("  decode <text>       Read a literal back as a decimal integer");
    println!("  digit <char>        Show the digit value of one character");
    println!("  tables              Print the digit alphabets");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --radix=<n>         2, 8, 10, 16, 60, 64 or a name (default: 10)");
    println!("  --literal=<name>    none, stdhl, c, cpp14, base64, unix (default: stdhl)");
    println!();
    println!("Environment:");
    println!("  STDHL_RADIX         Default radix, overridden by --radix");
    println!("  STDHL_LITERAL       Default dialect, overridden by --literal");
    println!("  STDHL_LOG           Log filter (falls back to RUST_LOG)");
    println!();
    println!("Examples:");
    println!("  stdhl encode 255 --radix=16             # 0xff");
    println!("  stdhl encode 8 --radix=8 --literal=c    # 010");
    println!("  stdhl decode 0b1010 --radix=2           # 10");
    println!("  stdhl digit Z --radix=64                # 61");
}
