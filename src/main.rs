//! wb-lookup - Fast, stateless Wildberries product card lookup CLI
//!
//! Prints a product summary, or one field of it, for a single article number.

use std::io;
use std::process::ExitCode;
use wb_lookup::cli::App;

#[tokio::main]
async fn main() -> ExitCode {
    let code = App::new().run(std::env::args_os(), &mut io::stdout(), &mut io::stderr()).await;
    ExitCode::from(code)
}
