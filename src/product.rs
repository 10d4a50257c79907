use std::env;
use std::error::Error;

use cmdline_lessons::cli::ProductArgs;
use cmdline_lessons::multiply::{self, Outcome};

fn main() {
    env_logger::init();
    let args = ProductArgs::from_argv(env::args_os());

    match multiply::report(&args.numbers) {
        Outcome::NoArguments => println!("{}", multiply::NO_ARGUMENTS),
        Outcome::Product(p) => println!("The product is: {}", p),
        Outcome::NotAnInteger(err) => {
            eprintln!("{}", err);
            if let Some(cause) = err.source() {
                eprintln!("{}", cause);
            }
        }
    }
}
