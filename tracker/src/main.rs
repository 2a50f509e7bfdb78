//! `duo-tracker` entry point: lists accounts that do not follow back.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use duo_tracker::TrackerSettings;
use duo_tracker::domain::ports::{LastUsernameStore, NoopLastUsernameStore};
use duo_tracker::domain::{AvatarSize, AvatarUrlNormalizer, SocialGraphTracker};
use duo_tracker::inbound::cli::{ReportView, TrackSession, render_json, render_text};
use duo_tracker::outbound::duolingo::{DuolingoApiClient, DuolingoSocialGraphSource};
use duo_tracker::outbound::history::FileLastUsernameStore;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `duo-tracker` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "duo-tracker",
    about = "List the Duolingo accounts you follow that do not follow you back",
    version
)]
struct CliArgs {
    /// Username to track. Defaults to the last tracked username.
    #[arg(value_name = "username")]
    username: Option<String>,
    /// Avatar size used in avatar URLs.
    #[arg(long, value_name = "small|medium|large", default_value_t = AvatarSize::Medium)]
    size: AvatarSize,
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let settings = match TrackerSettings::load_from_iter([OsString::from("duo-tracker")]) {
        Ok(settings) => settings,
        Err(err) => {
            init_tracing(false);
            error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(settings.log_json);

    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };
    match runtime.block_on(run(&args, &settings)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut stderr = io::stderr().lock();
            if writeln!(stderr, "{err}").is_err() {
                error!(error = %err, "tracking failed");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let initialised = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = initialised {
        warn!(error = %e, "tracing init failed");
    }
}

async fn run(args: &CliArgs, settings: &TrackerSettings) -> Result<(), Box<dyn std::error::Error>> {
    let session = build_session(settings)?;
    let report = session.run(args.username.as_deref()).await?;

    let avatars = AvatarUrlNormalizer::new(settings.fallback_avatar());
    let view = ReportView::new(&report, &avatars, args.size);
    let rendered = if args.json {
        let mut json = render_json(&view)?;
        json.push('\n');
        json
    } else {
        render_text(&view)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn build_session(settings: &TrackerSettings) -> Result<TrackSession, Box<dyn std::error::Error>> {
    let base = settings
        .api_base_url()
        .map_err(|err| format!("invalid api_base_url: {err}"))?;
    let client = DuolingoApiClient::new(base, Arc::new(settings.credentials()))
        .map_err(|err| format!("failed to build HTTP client: {err}"))?;
    let tracker = SocialGraphTracker::new(Arc::new(DuolingoSocialGraphSource::new(client)));

    let history: Arc<dyn LastUsernameStore> = if settings.skip_history {
        Arc::new(NoopLastUsernameStore)
    } else {
        Arc::new(FileLastUsernameStore::new(settings.state_dir()))
    };
    Ok(TrackSession::new(tracker, history))
}

#[cfg(test)]
mod tests {
    //! Argument parsing for the `duo-tracker` binary.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(&["duo-tracker"], None, AvatarSize::Medium, false)]
    #[case::everything(
        &["duo-tracker", "alice", "--size", "large", "--json"],
        Some("alice"),
        AvatarSize::Large,
        true
    )]
    #[case::small(&["duo-tracker", "--size", "small", "bob"], Some("bob"), AvatarSize::Small, false)]
    fn parses_arguments(
        #[case] argv: &[&str],
        #[case] username: Option<&str>,
        #[case] size: AvatarSize,
        #[case] json: bool,
    ) {
        let args = CliArgs::try_parse_from(argv).expect("arguments parse");

        assert_eq!(args.username.as_deref(), username);
        assert_eq!(args.size, size);
        assert_eq!(args.json, json);
    }

    #[test]
    fn unknown_sizes_are_rejected() {
        let result = CliArgs::try_parse_from(["duo-tracker", "--size", "huge"]);

        assert!(result.is_err());
    }
}
