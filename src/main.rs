mod console;
mod process;
mod reporter;

use process::ProcessIdentity;
use reporter::Reporter;

fn main() -> Result<(), String> {
    // Configure the terminal encoding before any non-ASCII output
    console::configure_output_encoding();

    // The identifier is assigned at process creation and never changes,
    // so it is read exactly once and held for the whole run
    let identity = ProcessIdentity::current()?;

    // Run the report loop to completion (blocks for ~125 seconds)
    Reporter::new(identity).run()
}
