/*!
 * Command-line interface for copy-docs
 */

use std::process::ExitCode;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::Parser;

use docs_packager::collector::copy_docs;
use docs_packager::config::CopyArgs;
use docs_packager::error::PackagerError;
use docs_packager::report::to_json;
use docs_packager::utils::spinner;

fn main() -> ExitCode {
    let args = match CopyArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            print!("{}", PackagerError::Usage(e.render().to_string()));
            return ExitCode::FAILURE;
        }
    };

    let progress = Arc::new(spinner("📦 Copying"));
    let result = copy_docs(&args.config_path, Arc::clone(&progress));
    progress.finish_and_clear();

    match result.and_then(|summary| to_json(&summary)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
