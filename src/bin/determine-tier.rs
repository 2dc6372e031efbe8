/*!
 * Command-line interface for determine-tier
 */

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use docs_packager::config::TierArgs;
use docs_packager::error::PackagerError;
use docs_packager::report::to_json;
use docs_packager::tier::determine_tier;
use docs_packager::utils::spinner;

fn main() -> ExitCode {
    let args = match TierArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            print!("{}", PackagerError::Usage(e.render().to_string()));
            return ExitCode::FAILURE;
        }
    };

    let progress = spinner("📊 Scanning");
    let result = determine_tier(&args.contents_path, &progress);
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
