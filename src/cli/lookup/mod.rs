//! Lookup command - resolves one username from the command line

use clap::Args;

use crate::domain::{Language, MessageKey, Translator, UserLinkOutcome};
use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Username as it would appear in the `user` query parameter
    pub username: String,

    /// Language for the error message (defaults to i18n.default_language)
    #[arg(long)]
    pub lang: Option<String>,
}

/// Resolve the username and print the redirect target
///
/// Only the result goes to stdout; logs go to stderr.
pub async fn run(args: LookupArgs) -> anyhow::Result<()> {
    let config = super::load_config()?;
    logging::init_logging_to_stderr(&config.logging);

    let language = match args.lang.as_deref() {
        Some(tag) => tag.parse::<Language>()?,
        None => config.i18n.default_language,
    };

    let state = crate::create_app_state(&config)?;
    let outcome = state.resolver.resolve(&args.username).await;

    let translator = Translator::new(language);
    report(&outcome, &translator)?;

    Ok(())
}

/// Print the target on success, or fail with the localized message
fn report(outcome: &UserLinkOutcome, translator: &Translator) -> anyhow::Result<()> {
    match outcome {
        UserLinkOutcome::Redirect(target) => {
            println!("{}", target.dn());
            println!("{}", target.url());
            Ok(())
        }
        UserLinkOutcome::NotFound(username) => {
            anyhow::bail!("{}", translator.user_not_found(username.as_str()))
        }
        UserLinkOutcome::DirectoryUnavailable(_) => {
            anyhow::bail!("{}", translator.translate(MessageKey::DirectoryUnavailable))
        }
    }
}
