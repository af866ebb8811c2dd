//! YouTube lookup commands and the text replies they send.
//!
//! The reply builders take any [`VideoPlatform`], so they can be driven by the
//! real client or by a mock without a Discord connection.

/// Submodule defining the `/find_channel` command.
pub(crate) mod find_channel;
/// Submodule defining the `/find_song` command.
pub(crate) mod find_song;

use crate::utils::youtube::{self, ChannelInfo, Lookup, VideoPlatform, VideoResult};

pub const FIND_SONG_USAGE: &str = "Enter an artist name after /find_song to search for a music video. For example, /find_song Linkin Park.";
pub const FIND_CHANNEL_USAGE: &str = "Enter a channel name after /find_channel to get information about it. For example, /find_channel A4.";

/// Trims a command argument. Returns `None` when nothing is left.
pub fn normalize_argument(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|arg| !arg.is_empty())
}

/// A lookup command typed as plain message text, e.g. `/find_song Linkin Park`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCommand<'a> {
    FindSong(Option<&'a str>),
    FindChannel(Option<&'a str>),
}

impl<'a> TextCommand<'a> {
    /// Parses `/<command> [argument]`. The argument is the trimmed rest of the
    /// text; `None` when it is blank.
    pub fn parse(text: &'a str) -> Option<Self> {
        let rest = text.trim_start().strip_prefix('/')?;
        let (command, argument) = match rest.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, Some(argument)),
            None => (rest, None),
        };
        let argument = normalize_argument(argument);

        match command {
            "find_song" => Some(TextCommand::FindSong(argument)),
            "find_channel" => Some(TextCommand::FindChannel(argument)),
            _ => None,
        }
    }

    /// The reply for this command: a usage hint when the argument is missing.
    pub async fn reply<P>(self, platform: &P) -> String
    where
        P: VideoPlatform + ?Sized,
    {
        match self {
            TextCommand::FindSong(Some(artist)) => song_reply(platform, artist).await,
            TextCommand::FindSong(None) => FIND_SONG_USAGE.to_string(),
            TextCommand::FindChannel(Some(name)) => channel_reply(platform, name).await,
            TextCommand::FindChannel(None) => FIND_CHANNEL_USAGE.to_string(),
        }
    }
}

/// Searches for a music video and renders the reply for `artist`.
pub async fn song_reply<P>(platform: &P, artist: &str) -> String
where
    P: VideoPlatform + ?Sized,
{
    match platform.search_video_by_artist(artist).await {
        Lookup::Found(video) => format_song(artist, &video),
        Lookup::NotFound => song_not_found(artist),
    }
}

/// Looks up a channel and renders the reply for `channel_name`.
pub async fn channel_reply<P>(platform: &P, channel_name: &str) -> String
where
    P: VideoPlatform + ?Sized,
{
    match youtube::get_channel_info(platform, channel_name).await {
        Lookup::Found(info) => format_channel(&info),
        Lookup::NotFound => channel_not_found(channel_name),
    }
}

pub fn format_song(artist: &str, video: &VideoResult) -> String {
    format!(
        "🎵 Found a video for {}:\n\n{}\n\n▶️ Listen: {}",
        artist, video.title, video.url
    )
}

pub fn format_channel(info: &ChannelInfo) -> String {
    let mut formatted = format!(
        "📺 Channel: {}\n🎥 Videos uploaded: {}\n👁️ Total views: {}\n",
        info.title,
        info.video_count, info.view_count
    );

    match &info.most_popular_video {
        Some(video) => formatted.push_str(&format!(
            "🔥 Most popular video: {}\n▶️ Link: {}",
            video.title, video.url
        )),
        None => formatted.push_str("🔥 Most popular video: no public videos yet"),
    }

    formatted
}

pub fn song_not_found(artist: &str) -> String {
    format!("Couldn't find a video for {artist}. Please try again later.")
}

pub fn channel_not_found(channel_name: &str) -> String {
    format!("Couldn't find information about the channel {channel_name}. Please try again later.")
}
