//! kodegen_app_detect - report version, minimum macOS, architecture and binary
//! metadata for macOS application bundles.

use kodegen_app_detect::cli;
use kodegen_app_detect::cli::OutputManager;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            OutputManager::default().report_error(&e);
            process::exit(1);
        }
    }
}
