//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use fedigraph_client::TimelineKind;
use fedigraph_types::Visibility;
use std::path::PathBuf;

/// fedigraph - talk to a federated social server over GraphQL.
#[derive(Parser, Debug)]
#[command(name = "fedigraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file. Defaults to `config/default.toml` plus the
    /// `FEDIGRAPH__*` environment.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Bearer token, overriding the configured one.
    #[arg(long, global = true, env = "FEDIGRAPH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Log as JSON lines instead of human-readable text.
    #[arg(long = "json", global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of a timeline
    Timeline(TimelineArgs),

    /// Publish a note
    Post(PostArgs),

    /// Delete a note
    Delete {
        /// Object id
        id: String,
    },

    /// Follow an actor
    Follow {
        /// Actor id
        id: String,
    },

    /// Unfollow an actor
    Unfollow {
        /// Actor id
        id: String,
    },

    /// Upload a media file
    Upload(UploadArgs),

    /// Stream a subscription until interrupted
    #[command(subcommand)]
    Watch(WatchCommand),

    /// Show the federation health of a remote domain
    Health {
        /// Remote domain, e.g. `remote.example`
        domain: String,
    },
}

/// Timeline selection shared by `timeline` and `watch timeline`.
#[derive(Parser, Debug)]
pub struct TimelineSelector {
    /// Timeline to read
    #[arg(short, long, value_enum, default_value_t = TimelineChoice::Home)]
    pub kind: TimelineChoice,

    /// List id, with `--kind list`
    #[arg(long, required_if_eq("kind", "list"))]
    pub list: Option<String>,

    /// Hashtag, with `--kind hashtag`
    #[arg(long, required_if_eq("kind", "hashtag"))]
    pub hashtag: Option<String>,

    /// Actor id, with `--kind actor`
    #[arg(long, required_if_eq("kind", "actor"))]
    pub actor: Option<String>,
}

impl TimelineSelector {
    /// Resolve into the client's timeline kind.
    pub fn kind(&self) -> TimelineKind {
        let arg = |value: &Option<String>| value.clone().unwrap_or_default();
        match self.kind {
            TimelineChoice::Home => TimelineKind::Home,
            TimelineChoice::Public => TimelineKind::Public,
            TimelineChoice::Local => TimelineKind::Local,
            TimelineChoice::Direct => TimelineKind::Direct,
            TimelineChoice::List => TimelineKind::List(arg(&self.list)),
            TimelineChoice::Hashtag => TimelineKind::Hashtag(arg(&self.hashtag)),
            TimelineChoice::Actor => TimelineKind::Actor(arg(&self.actor)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TimelineChoice {
    Home,
    Public,
    Local,
    Direct,
    List,
    Hashtag,
    Actor,
}

#[derive(Parser, Debug)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub selector: TimelineSelector,

    /// Page size
    #[arg(short = 'n', long)]
    pub limit: Option<u32>,

    /// Cursor to continue after
    #[arg(long)]
    pub after: Option<String>,
}

#[derive(Parser, Debug)]
pub struct PostArgs {
    /// Note content
    pub content: String,

    /// Audience
    #[arg(long, value_enum, default_value_t = VisibilityChoice::Public)]
    pub visibility: VisibilityChoice,

    /// Hide the content behind this warning
    #[arg(long)]
    pub spoiler: Option<String>,

    /// Object id to reply to
    #[arg(long)]
    pub reply_to: Option<String>,

    /// Object URL to quote
    #[arg(long)]
    pub quote: Option<String>,

    /// Previously uploaded media id. Repeat for several.
    #[arg(long = "media", value_name = "ID")]
    pub media: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VisibilityChoice {
    Public,
    Unlisted,
    Followers,
    Direct,
}

impl From<VisibilityChoice> for Visibility {
    fn from(choice: VisibilityChoice) -> Self {
        match choice {
            VisibilityChoice::Public => Self::Public,
            VisibilityChoice::Unlisted => Self::Unlisted,
            VisibilityChoice::Followers => Self::Followers,
            VisibilityChoice::Direct => Self::Direct,
        }
    }
}

#[derive(Parser, Debug)]
pub struct UploadArgs {
    /// File to upload
    pub path: PathBuf,

    /// Alt text
    #[arg(short, long)]
    pub description: Option<String>,

    /// MIME type. Guessed from the extension when absent.
    #[arg(long)]
    pub content_type: Option<String>,

    /// Mark the attachment sensitive
    #[arg(long)]
    pub sensitive: bool,
}

/// Subcommands for `fedigraph watch`
#[derive(Subcommand, Debug)]
pub enum WatchCommand {
    /// New notes on a timeline
    Timeline(TimelineSelector),
    /// Notifications for the viewer
    Notifications,
    /// Federation health changes
    Federation {
        /// Only this domain
        #[arg(long)]
        domain: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_hashtag_timeline_requires_tag() {
        let parsed = Cli::try_parse_from(["fedigraph", "timeline", "--kind", "hashtag"]);
        assert!(parsed.is_err());

        let cli =
            Cli::try_parse_from(["fedigraph", "timeline", "--kind", "hashtag", "--hashtag", "rust"])
                .unwrap();
        let Command::Timeline(args) = cli.command else {
            panic!("expected timeline command");
        };
        assert_eq!(args.selector.kind(), TimelineKind::Hashtag("rust".to_string()));
    }

    #[test]
    fn test_post_arguments() {
        let cli = Cli::try_parse_from([
            "fedigraph",
            "post",
            "hello",
            "--visibility",
            "followers",
            "--media",
            "m1",
            "--media",
            "m2",
        ])
        .unwrap();
        let Command::Post(args) = cli.command else {
            panic!("expected post command");
        };
        assert_eq!(Visibility::from(args.visibility), Visibility::Followers);
        assert_eq!(args.media, vec!["m1", "m2"]);
    }
}
