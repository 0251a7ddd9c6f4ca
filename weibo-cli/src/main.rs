use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use weibo::{
    AuthorFilter, BaseApp, CommentsByMe, CommentsMentions, CommentsShow, CommentsTimeline,
    CommentsToMe, Feature, HomeTimeline, Page, SourceFilter, StatusesMentions, TrimUser,
    TypeFilter, UserTimeline, WeiboClient,
};

use crate::config::Config;

mod config;

/// Query the Weibo open platform API
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Config file location
    #[clap(short, long, default_value_os_t = default_config_path(), value_parser)]
    config: PathBuf,

    /// Access token, overrides the one in the config file
    #[clap(long, env = "WEIBO_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,
}

#[derive(ClapArgs, Debug)]
struct PageArgs {
    /// Only return entries with an ID greater than this
    #[clap(long, default_value_t = 0)]
    since_id: i64,

    /// Only return entries with an ID less than or equal to this
    #[clap(long, default_value_t = 0)]
    max_id: i64,

    /// Entries per page
    #[clap(long)]
    count: Option<i32>,

    #[clap(long, default_value_t = 1)]
    page: i32,
}

impl PageArgs {
    fn into_page(self, default: Page) -> Page {
        Page {
            since_id: self.since_id,
            max_id: self.max_id,
            count: self.count.unwrap_or(default.count),
            page: self.page,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Comments sent or received by the current user
    CommentsTimeline {
        #[clap(flatten)]
        page: PageArgs,
        /// 0: full user, 1: user ID only
        #[clap(long, default_value_t = 0)]
        trim_user: i32,
    },
    /// Comments sent by the current user
    CommentsByMe {
        #[clap(flatten)]
        page: PageArgs,
        /// 0: all, 1: Weibo, 2: Weiqun
        #[clap(long, default_value_t = 0)]
        filter_by_source: i32,
    },
    /// Comments received by the current user
    CommentsToMe {
        #[clap(flatten)]
        page: PageArgs,
        /// 0: all, 1: people I follow, 2: strangers
        #[clap(long, default_value_t = 0)]
        filter_by_author: i32,
        /// 0: all, 1: Weibo, 2: Weiqun
        #[clap(long, default_value_t = 0)]
        filter_by_source: i32,
    },
    /// Comments that mention the current user
    CommentsMentions {
        #[clap(flatten)]
        page: PageArgs,
        /// 0: all, 1: people I follow, 2: strangers
        #[clap(long, default_value_t = 0)]
        filter_by_author: i32,
        /// 0: all, 1: Weibo, 2: Weiqun
        #[clap(long, default_value_t = 0)]
        filter_by_source: i32,
    },
    /// Comments on one post
    CommentsShow {
        /// Post ID
        id: i64,
        #[clap(flatten)]
        page: PageArgs,
        /// 0: all, 1: people I follow, 2: strangers
        #[clap(long, default_value_t = 0)]
        filter_by_author: i32,
    },
    /// Posts that mention the current user
    StatusesMentions {
        #[clap(flatten)]
        page: PageArgs,
        /// 0: all, 1: people I follow, 2: strangers
        #[clap(long, default_value_t = 0)]
        filter_by_author: i32,
        /// 0: all, 1: Weibo, 2: Weiqun
        #[clap(long, default_value_t = 0)]
        filter_by_source: i32,
        /// 0: all, 1: original posts
        #[clap(long, default_value_t = 0)]
        filter_by_type: i32,
    },
    /// Posts from the current user and the people they follow
    HomeTimeline {
        #[clap(flatten)]
        page: PageArgs,
        /// 0: all, 1: current app only
        #[clap(long, default_value_t = 0)]
        base_app: i32,
        /// 0: all, 1: original, 2: pictures, 3: videos, 4: music
        #[clap(long, default_value_t = 0)]
        feature: i32,
        /// 0: full user, 1: user ID only
        #[clap(long, default_value_t = 0)]
        trim_user: i32,
    },
    /// Posts from one user
    UserTimeline {
        uid: i64,
        #[clap(flatten)]
        page: PageArgs,
        /// 0: all, 1: current app only
        #[clap(long, default_value_t = 0)]
        base_app: i32,
        /// 0: all, 1: original, 2: pictures, 3: videos, 4: music
        #[clap(long, default_value_t = 0)]
        feature: i32,
        /// 0: full user, 1: user ID only
        #[clap(long, default_value_t = 0)]
        trim_user: i32,
    },
    /// A single post
    Status { id: i64 },
    /// A user by UID
    User { uid: i64 },
    /// A user by personalized domain
    UserByDomain { domain: String },
    /// Print the page to visit to authorize the app
    AuthorizeUrl {
        #[clap(long)]
        state: Option<String>,
    },
    /// Exchange an authorization code for an access token
    AccessToken { code: String },
    /// Show who the access token belongs to and when it expires
    TokenInfo,
}

fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "Weibo API")
        .map(|d| d.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[tokio::main]
async fn main() {
    env_logger::init();

    match run().await {
        Ok(_) => process::exit(0),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(1);
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let conf = if args.config.exists() {
        Config::read(&args.config)?
    } else {
        debug!("no config file at {}", args.config.display());
        Config::default()
    };

    let client = Client::new();
    let api = WeiboClient::new(&client);
    let token = || conf.access_token(args.access_token.clone());

    match args.command {
        Command::CommentsTimeline { page, trim_user } => {
            let params = CommentsTimeline {
                page: page.into_page(Page::default()),
                trim_user: TrimUser::try_from(trim_user)?,
            };
            print_json(&api.comments_timeline(&token()?, &params).await?)
        }
        Command::CommentsByMe {
            page,
            filter_by_source,
        } => {
            let params = CommentsByMe {
                page: page.into_page(Page::default()),
                filter_by_source: SourceFilter::try_from(filter_by_source)?,
            };
            print_json(&api.comments_by_me(&token()?, &params).await?)
        }
        Command::CommentsToMe {
            page,
            filter_by_author,
            filter_by_source,
        } => {
            let params = CommentsToMe {
                page: page.into_page(Page::default()),
                filter_by_author: AuthorFilter::try_from(filter_by_author)?,
                filter_by_source: SourceFilter::try_from(filter_by_source)?,
            };
            print_json(&api.comments_to_me(&token()?, &params).await?)
        }
        Command::CommentsMentions {
            page,
            filter_by_author,
            filter_by_source,
        } => {
            let params = CommentsMentions {
                page: page.into_page(Page::default()),
                filter_by_author: AuthorFilter::try_from(filter_by_author)?,
                filter_by_source: SourceFilter::try_from(filter_by_source)?,
            };
            print_json(&api.comments_mentions(&token()?, &params).await?)
        }
        Command::CommentsShow {
            id,
            page,
            filter_by_author,
        } => {
            let params = CommentsShow {
                id,
                page: page.into_page(Page::default()),
                filter_by_author: AuthorFilter::try_from(filter_by_author)?,
            };
            print_json(&api.comments_show(&token()?, &params).await?)
        }
        Command::StatusesMentions {
            page,
            filter_by_author,
            filter_by_source,
            filter_by_type,
        } => {
            let params = StatusesMentions {
                page: page.into_page(Page::default()),
                filter_by_author: AuthorFilter::try_from(filter_by_author)?,
                filter_by_source: SourceFilter::try_from(filter_by_source)?,
                filter_by_type: TypeFilter::try_from(filter_by_type)?,
            };
            print_json(&api.statuses_mentions(&token()?, &params).await?)
        }
        Command::HomeTimeline {
            page,
            base_app,
            feature,
            trim_user,
        } => {
            let params = HomeTimeline {
                page: page.into_page(HomeTimeline::default().page),
                base_app: BaseApp::try_from(base_app)?,
                feature: Feature::try_from(feature)?,
                trim_user: TrimUser::try_from(trim_user)?,
            };
            print_json(&api.home_timeline(&token()?, &params).await?)
        }
        Command::UserTimeline {
            uid,
            page,
            base_app,
            feature,
            trim_user,
        } => {
            let defaults = UserTimeline::new(uid);
            let params = UserTimeline {
                page: page.into_page(defaults.page),
                base_app: BaseApp::try_from(base_app)?,
                feature: Feature::try_from(feature)?,
                trim_user: TrimUser::try_from(trim_user)?,
                ..defaults
            };
            print_json(&api.user_timeline(&token()?, &params).await?)
        }
        Command::Status { id } => print_json(&api.post(&token()?, id).await?),
        Command::User { uid } => print_json(&api.user(&token()?, uid).await?),
        Command::UserByDomain { domain } => {
            print_json(&api.user_by_domain(&token()?, &domain).await?)
        }
        Command::AuthorizeUrl { state } => {
            let url = conf.oauth_app()?.authorize_url(state.as_deref())?;
            println!("{}", url);
            Ok(())
        }
        Command::AccessToken { code } => {
            let token = conf.oauth_app()?.access_token(&client, &code).await?;
            print_json(&token)
        }
        Command::TokenInfo => print_json(&api.token_info(&token()?).await?),
    }
}
