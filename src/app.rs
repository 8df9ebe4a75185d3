//! .

use crate::{
    cli::{
        args,
        resolve::{self, Resolved},
    },
    error::{AppError, AppResult as Result},
    preview::{Preview, PreviewOutcome},
};

/// Successful dispatch, ready to be printed.
#[derive(Debug)]
pub struct Report {
    pub outcome: PreviewOutcome,
    pub json: bool,
}

/// Run one invocation over `tokens` (the arguments after the program name).
///
/// Usage problems never reach `previewer`. Failures come back as `Err` so the
/// caller decides how to report them and which status to exit with.
pub async fn run<S, P>(tokens: &[S], previewer: &P) -> Result<Report>
where
    S: AsRef<str>,
    P: Preview,
{
    let parsed = args::parse(tokens);

    let invocation = match resolve::resolve(&parsed)? {
        Resolved::Run(invocation) => invocation,
        Resolved::Usage => return Err(AppError::Usage(resolve::usage())),
    };

    tracing::debug!(request = ?invocation.request, "dispatching preview");
    let outcome = previewer.preview(&invocation.request).await?;

    Ok(Report {
        outcome,
        json: invocation.json,
    })
}
