// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

// Embeds VERGEN_GIT_SHA and VERGEN_GIT_COMMIT_DATE for `version_string()`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()?;
    Ok(())
}
