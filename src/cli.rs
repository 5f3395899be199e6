use anyhow::Result;
use clap::{App, Arg, SubCommand};
use log::{debug, info};

use crate::cache::{QueryKey, CHANNEL_STALE, RELATED_STALE, VIDEOS_STALE};
use crate::cancel::CancelToken;
use crate::common::{SearchIntent, VideoRecord};
use crate::source::api::ApiTransport;
use crate::source::base::Transport;
use crate::source::fixture::FixtureTransport;
use crate::youtube::Youtube;

/// Build the adapter stack once. Fixture mode (`VIDQ_FIXTURE_DIR`) swaps the
/// HTTP transport for canned responses, handy when offline or rate limited.
fn make_youtube() -> Result<Youtube> {
    let client: Box<dyn Transport> = match std::env::var("VIDQ_FIXTURE_DIR") {
        Ok(dir) => {
            debug!("Using fixture transport from {}", &dir);
            Box::new(FixtureTransport::new(dir.into()))
        }
        Err(_) => {
            let cfg = crate::config::Config::load()?;
            Box::new(ApiTransport::new(cfg.api_key))
        }
    };
    Ok(Youtube::new(client))
}

fn print_videos(videos: &[VideoRecord]) {
    for v in videos {
        println!(
            "ID: {}\nTitle: {}\nChannel: {}\nPublished: {}\nDescription: {}\n----",
            v.id,
            v.snippet.title,
            v.snippet.channel_title,
            v.snippet.published_at,
            v.snippet.description,
        );
    }
}

/// Search by keyword, or list most popular when no keyword given
fn search(keyword: Option<&str>) -> Result<()> {
    let yt = make_youtube()?;
    let intent = SearchIntent::from_keyword(keyword);
    if intent == SearchIntent::Popular {
        info!("No keyword given, listing most popular videos");
    }
    debug!(
        "Cache key for query: {} (fresh for {:?})",
        QueryKey::videos(&intent),
        VIDEOS_STALE
    );
    let videos = yt.search(&intent, &CancelToken::new())?;
    print_videos(&videos);
    Ok(())
}

/// List videos from the given channel
fn related(channel_id: &str) -> Result<()> {
    let yt = make_youtube()?;
    debug!(
        "Cache key for query: {} (fresh for {:?})",
        QueryKey::related(channel_id),
        RELATED_STALE
    );
    let videos = yt.related(channel_id, &CancelToken::new())?;
    print_videos(&videos);
    Ok(())
}

/// Show channel thumbnail URL
fn channel_image(channel_id: &str) -> Result<()> {
    let yt = make_youtube()?;
    debug!(
        "Cache key for query: {} (fresh for {:?})",
        QueryKey::channel(channel_id),
        CHANNEL_STALE
    );
    let url = yt.channel_image_url(channel_id, &CancelToken::new())?;
    println!("{}", url);
    Ok(())
}

fn config_logging(verbosity: u64) -> Result<()> {
    // Level for this application
    let internal_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,  // -v
        2 => log::LevelFilter::Debug, // -vv
        _ => log::LevelFilter::Trace, // -vvv
    };

    // Show log output for 3rd party library at -vvv
    let thirdparty_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Warn,  // -v
        2 => log::LevelFilter::Warn,  // -vv
        _ => log::LevelFilter::Debug, // -vvv
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(thirdparty_level)
        .level_for("vidq", internal_level)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}

pub fn main() -> Result<()> {
    // Search subcommand
    let sc_search = SubCommand::with_name("search")
        .about("search videos by keyword (most popular when no keyword)")
        .arg(Arg::with_name("keyword"));

    // Related videos subcommand
    let sc_related = SubCommand::with_name("related")
        .about("list videos from the given channel")
        .arg(Arg::with_name("channelid").required(true));

    // Channel image subcommand
    let sc_channel_image = SubCommand::with_name("channel-image")
        .about("print the channel's default thumbnail URL")
        .arg(Arg::with_name("channelid").required(true));

    // Main command
    let app = App::new("vidq")
        .subcommand(sc_search)
        .subcommand(sc_related)
        .subcommand(sc_channel_image)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .takes_value(false)
                .global(true),
        );

    // Parse
    let app_m = app.get_matches();

    // Logging levels
    let verbosity = app_m.occurrences_of("verbose");
    config_logging(verbosity)?;

    match app_m.subcommand() {
        ("search", Some(sub_m)) => search(sub_m.value_of("keyword"))?,
        ("related", Some(sub_m)) => related(
            sub_m
                .value_of("channelid")
                .expect("required arg channelid missing"),
        )?,
        ("channel-image", Some(sub_m)) => channel_image(
            sub_m
                .value_of("channelid")
                .expect("required arg channelid missing"),
        )?,
        _ => {
            return Err(anyhow::anyhow!("Unhandled subcommand"));
        }
    };

    Ok(())
}
