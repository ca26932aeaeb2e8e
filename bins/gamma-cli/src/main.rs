//! Polymarket Gamma API CLI
//!
//! Commands map one-to-one onto `GammaClient` accessors and print the
//! (normalized) result as pretty JSON on stdout.
//!
//! # Usage
//! ```bash
//! # Connectivity check
//! pm_gamma ping
//!
//! # Markets / events by id or slug (slugs contain a hyphen)
//! pm_gamma market will-bitcoin-hit-100k
//! pm_gamma event 903
//! pm_gamma markets --limit 5 --closed false --clob-token-id 111 --clob-token-id 222
//!
//! # Search and metadata
//! pm_gamma search "fed rates" --limit-per-type 3
//! pm_gamma tags --limit 20
//! pm_gamma related-tags politics --records
//! pm_gamma sports
//!
//! # Against a different host
//! pm_gamma --base-url http://localhost:8080 --timeout-ms 2000 series --limit 3
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{error, info};

use polymarket_gamma::{
    CommentsByUserParams, GammaClient, GammaConfig, ListCommentsParams, ListEventsParams,
    ListMarketsParams, ListSeriesParams, ListTagsParams, ListTeamsParams, PageParams,
    RelatedTagsParams, SearchParams,
};

#[derive(Parser)]
#[command(name = "pm_gamma")]
#[command(about = "Polymarket Gamma API client")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Gamma API base URL (default: GAMMA_API_BASE_URL or production host)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in milliseconds (default: GAMMA_TIMEOUT_MS or 30000)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
}

/// Paging flags shared by list commands
#[derive(clap::Args)]
struct PageArgs {
    #[arg(long)]
    limit: Option<u32>,

    #[arg(long)]
    offset: Option<u32>,

    /// Sort field(s), e.g. volume24hr
    #[arg(long)]
    order: Option<String>,

    #[arg(long)]
    ascending: Option<bool>,
}

impl From<PageArgs> for PageParams {
    fn from(args: PageArgs) -> Self {
        PageParams {
            limit: args.limit,
            offset: args.offset,
            order: args.order,
            ascending: args.ascending,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Test Gamma API connectivity
    Ping,

    /// Free-text search across events, tags and profiles
    Search {
        query: String,

        #[arg(long)]
        limit_per_type: Option<u32>,

        #[arg(long)]
        page: Option<u32>,

        /// active, closed or all
        #[arg(long)]
        events_status: Option<String>,
    },

    /// Get one market by id or slug
    Market { id_or_slug: String },

    /// List markets
    Markets {
        #[command(flatten)]
        page: PageArgs,

        /// Market id (repeatable)
        #[arg(long)]
        id: Vec<String>,

        /// Market slug (repeatable)
        #[arg(long)]
        slug: Vec<String>,

        /// CLOB token id (repeatable)
        #[arg(long)]
        clob_token_id: Vec<String>,

        #[arg(long)]
        tag_id: Option<i64>,

        #[arg(long)]
        active: Option<bool>,

        #[arg(long)]
        closed: Option<bool>,
    },

    /// Tags attached to a market
    MarketTags { id: String },

    /// Get one event by id or slug
    Event { id_or_slug: String },

    /// List events
    Events {
        #[command(flatten)]
        page: PageArgs,

        /// Event slug (repeatable)
        #[arg(long)]
        slug: Vec<String>,

        #[arg(long)]
        tag_id: Option<i64>,

        #[arg(long)]
        active: Option<bool>,

        #[arg(long)]
        closed: Option<bool>,

        /// Use /events/pagination and include paging metadata
        #[arg(long)]
        paginated: bool,
    },

    /// Tags attached to an event
    EventTags { id: String },

    /// List tags
    Tags {
        #[command(flatten)]
        page: PageArgs,

        #[arg(long)]
        is_carousel: Option<bool>,
    },

    /// Get one tag by id or slug
    Tag { id_or_slug: String },

    /// Tags related to a tag
    RelatedTags {
        id_or_slug: String,

        #[arg(long)]
        omit_empty: Option<bool>,

        /// active, closed or all
        #[arg(long)]
        status: Option<String>,

        /// Return the related tag records instead of relationship links
        #[arg(long)]
        records: bool,
    },

    /// List teams
    Teams {
        #[command(flatten)]
        page: PageArgs,

        /// League (repeatable)
        #[arg(long)]
        league: Vec<String>,
    },

    /// List sports metadata
    Sports,

    /// List series, or get one with --id
    Series {
        #[command(flatten)]
        page: PageArgs,

        #[arg(long)]
        id: Option<String>,
    },

    /// List comments on an entity, get a thread with --id, or a user's comments with --user
    Comments {
        #[command(flatten)]
        page: PageArgs,

        #[arg(long)]
        id: Option<String>,

        /// Wallet address
        #[arg(long)]
        user: Option<String>,

        /// Event, Series or market
        #[arg(long)]
        entity_type: Option<String>,

        #[arg(long)]
        entity_id: Option<i64>,
    },

    /// AI summary of an event
    Summary { event_slug: String },

    /// AI explanation of a market
    Explain { market_slug: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr keeps stdout clean for JSON)
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = GammaConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }

    info!("Gamma API: {}", config.base_url);
    let client = GammaClient::with_config(config).context("Failed to create Gamma client")?;

    let output = match run(&client, cli.command).await {
        Ok(output) => output,
        Err(e) => {
            if let Some(gamma) = e.downcast_ref::<polymarket_gamma::GammaError>() {
                if gamma.is_timeout() {
                    error!("Request timed out after {:?}", client.timeout());
                }
            }
            return Err(e);
        }
    };

    if let Some(value) = output {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }

    Ok(())
}

async fn run(client: &GammaClient, command: Commands) -> Result<Option<Value>> {
    let value = match command {
        Commands::Ping => {
            client.test_connectivity().await?;
            info!("Connectivity: OK");
            return Ok(None);
        }
        Commands::Search { query, limit_per_type, page, events_status } => {
            let params = SearchParams { limit_per_type, page, events_status, ..SearchParams::new(query) };
            let results = client.search(&params).await?;
            info!(
                "Search: {} event(s), {} tag(s)",
                results.events.as_ref().map_or(0, Vec::len),
                results.tags.as_ref().map_or(0, Vec::len)
            );
            serde_json::to_value(results)?
        }
        Commands::Market { id_or_slug } => serde_json::to_value(client.get_market(&id_or_slug).await?)?,
        Commands::Markets { page, id, slug, clob_token_id, tag_id, active, closed } => {
            let params = ListMarketsParams {
                page: page.into(),
                id,
                slug,
                clob_token_ids: clob_token_id,
                tag_id,
                active,
                closed,
                ..Default::default()
            };
            let markets = client.list_markets(&params).await?;
            info!("Markets: {}", markets.len());
            serde_json::to_value(markets)?
        }
        Commands::MarketTags { id } => serde_json::to_value(client.get_market_tags(&id).await?)?,
        Commands::Event { id_or_slug } => serde_json::to_value(client.get_event(&id_or_slug).await?)?,
        Commands::Events { page, slug, tag_id, active, closed, paginated } => {
            let params = ListEventsParams {
                page: page.into(),
                slug,
                tag_id,
                active,
                closed,
                ..Default::default()
            };
            if paginated {
                serde_json::to_value(client.list_events_paginated(&params).await?)?
            } else {
                let events = client.list_events(&params).await?;
                info!("Events: {}", events.len());
                serde_json::to_value(events)?
            }
        }
        Commands::EventTags { id } => serde_json::to_value(client.get_event_tags(&id).await?)?,
        Commands::Tags { page, is_carousel } => {
            let params = ListTagsParams { page: page.into(), is_carousel, ..Default::default() };
            serde_json::to_value(client.list_tags(&params).await?)?
        }
        Commands::Tag { id_or_slug } => serde_json::to_value(client.get_tag(&id_or_slug).await?)?,
        Commands::RelatedTags { id_or_slug, omit_empty, status, records } => {
            let params = RelatedTagsParams { omit_empty, status };
            if records {
                serde_json::to_value(client.get_related_tag_records(&id_or_slug, &params).await?)?
            } else {
                serde_json::to_value(client.get_related_tags(&id_or_slug, &params).await?)?
            }
        }
        Commands::Teams { page, league } => {
            let params = ListTeamsParams { page: page.into(), league, ..Default::default() };
            serde_json::to_value(client.list_teams(&params).await?)?
        }
        Commands::Sports => serde_json::to_value(client.list_sports().await?)?,
        Commands::Series { page, id } => match id {
            Some(id) => serde_json::to_value(client.get_series(&id).await?)?,
            None => {
                let params = ListSeriesParams { page: page.into(), ..Default::default() };
                serde_json::to_value(client.list_series(&params).await?)?
            }
        },
        Commands::Comments { page, id, user, entity_type, entity_id } => {
            let comments = match (id, user) {
                (Some(id), _) => client.get_comment(&id).await?,
                (None, Some(user)) => {
                    let params = CommentsByUserParams { page: page.into() };
                    client.list_comments_by_user(&user, &params).await?
                }
                (None, None) => {
                    let params = ListCommentsParams {
                        page: page.into(),
                        parent_entity_type: entity_type,
                        parent_entity_id: entity_id,
                        ..Default::default()
                    };
                    client.list_comments(&params).await?
                }
            };
            info!("Comments: {}", comments.len());
            serde_json::to_value(comments)?
        }
        Commands::Summary { event_slug } => client.event_summary(&event_slug).await?,
        Commands::Explain { market_slug } => client.market_explanation(&market_slug).await?,
    };

    Ok(Some(value))
}
